//! Configuration and settings management for VertexKit
//!
//! Two layers of configuration live here:
//! - [`EditorSettings`]: the numeric/boolean knobs consumed by the shape
//!   generators and the coordinate transform. They travel with each project
//!   snapshot.
//! - [`Config`]: application-level preferences (editor defaults plus where
//!   projects are stored and which one was open last). Stored as JSON or
//!   TOML in the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vertexkit_core::Color;

use crate::error::{SettingsError, SettingsResult};

/// Largest radius ratio a rounded rectangle accepts (half the shorter side).
pub const MAX_CORNER_RADIUS_RATIO: f64 = 0.5;

/// Most ring segments a circle or polygon may be tessellated into.
pub const MAX_RING_SEGMENTS: u32 = 1024;

/// Most arc segments per rounded corner.
pub const MAX_CORNER_SEGMENTS: u32 = 256;

/// Geometry and grid settings used while drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Draw the background grid
    pub show_grid: bool,
    /// Grid lines per half axis; the grid step is `2 / grid_divisions`
    pub grid_divisions: u32,
    /// Round pointer positions to the nearest grid line
    pub snap_to_grid: bool,
    /// Declared for the UI only; the engine does not enforce it
    pub snap_to_vertex: bool,
    /// Ring segments used by the circle tool
    pub circle_segments: u32,
    /// Sides used by the polygon tool
    pub polygon_sides: u32,
    /// Colour assigned to newly drawn shapes
    pub default_color: Color,
    /// Corner radius as a fraction of the shorter side, in `[0, 0.5]`
    pub rounded_corner_radius: f64,
    /// Arc segments per rounded corner
    pub rounded_corner_segments: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_divisions: 20,
            snap_to_grid: false,
            snap_to_vertex: false,
            circle_segments: 24,
            polygon_sides: 6,
            default_color: Color::EMERALD,
            rounded_corner_radius: 0.2,
            rounded_corner_segments: 8,
        }
    }
}

impl EditorSettings {
    /// Validate every field, reporting the first offending key.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.grid_divisions == 0 {
            return Err(SettingsError::invalid("grid_divisions", "must be > 0"));
        }
        let ring = 3..=MAX_RING_SEGMENTS;
        if !ring.contains(&self.circle_segments) {
            return Err(SettingsError::invalid(
                "circle_segments",
                format!("must be within [3, {MAX_RING_SEGMENTS}]"),
            ));
        }
        if !ring.contains(&self.polygon_sides) {
            return Err(SettingsError::invalid(
                "polygon_sides",
                format!("must be within [3, {MAX_RING_SEGMENTS}]"),
            ));
        }
        if !(1..=MAX_CORNER_SEGMENTS).contains(&self.rounded_corner_segments) {
            return Err(SettingsError::invalid(
                "rounded_corner_segments",
                format!("must be within [1, {MAX_CORNER_SEGMENTS}]"),
            ));
        }
        if !(0.0..=MAX_CORNER_RADIUS_RATIO).contains(&self.rounded_corner_radius) {
            return Err(SettingsError::invalid(
                "rounded_corner_radius",
                format!("must be within [0, {MAX_CORNER_RADIUS_RATIO}]"),
            ));
        }
        Ok(())
    }

    /// Returns a copy with every field forced into its valid range.
    ///
    /// Used when restoring projects written by older or foreign tools.
    pub fn sanitized(&self) -> Self {
        let radius = if self.rounded_corner_radius.is_finite() {
            self.rounded_corner_radius
                .clamp(0.0, MAX_CORNER_RADIUS_RATIO)
        } else {
            Self::default().rounded_corner_radius
        };
        Self {
            grid_divisions: self.grid_divisions.max(1),
            circle_segments: self.circle_segments.clamp(3, MAX_RING_SEGMENTS),
            polygon_sides: self.polygon_sides.clamp(3, MAX_RING_SEGMENTS),
            rounded_corner_segments: self.rounded_corner_segments.clamp(1, MAX_CORNER_SEGMENTS),
            rounded_corner_radius: radius,
            ..self.clone()
        }
    }

    /// Logical distance between adjacent grid lines.
    pub fn grid_step(&self) -> f64 {
        2.0 / f64::from(self.grid_divisions.max(1))
    }
}

/// Where projects live and which one was open last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding project files; platform data dir when unset
    pub projects_dir: Option<PathBuf>,
    /// Project to reopen on startup
    pub last_project: Option<String>,
}

impl StorageSettings {
    /// The configured projects directory, or `<data dir>/vertexkit/projects`.
    pub fn resolved_projects_dir(&self) -> SettingsResult<PathBuf> {
        if let Some(dir) = &self.projects_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("vertexkit").join("projects"))
            .ok_or_else(|| SettingsError::ConfigDirectory("no data directory".to_string()))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults applied to new projects
    pub editor: EditorSettings,
    /// Project storage preferences
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/vertexkit/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join("vertexkit").join("config.toml"))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.editor.validate()?;
        if let Some(name) = &self.storage.last_project {
            if name.trim().is_empty() {
                return Err(SettingsError::invalid(
                    "storage.last_project",
                    "must not be blank",
                ));
            }
        }
        Ok(())
    }
}
