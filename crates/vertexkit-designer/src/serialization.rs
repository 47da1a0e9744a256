//! Serialization and deserialization for project snapshots.
//!
//! A snapshot holds everything needed to rebuild the scene and the viewport:
//! shapes, groups, editor settings and pan/zoom, plus some metadata. It is
//! stored as pretty-printed JSON.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vertexkit_core::StorageError;
use vertexkit_settings::EditorSettings;

use crate::canvas::Group;
use crate::model::Shape;

/// Snapshot format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete project snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub version: String,
    pub metadata: SnapshotMetadata,
    #[serde(default)]
    pub viewport: ViewportState,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub settings: EditorSettings,
}

/// Snapshot metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Viewport state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub pan_x: f64,
    #[serde(default)]
    pub pan_y: f64,
}

fn default_zoom() -> f64 {
    1.0
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl SceneSnapshot {
    /// Create an empty snapshot with default settings
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: SnapshotMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            viewport: ViewportState::default(),
            shapes: Vec::new(),
            groups: Vec::new(),
            settings: EditorSettings::default(),
        }
    }

    /// Rejects snapshots written by an incompatible format version.
    pub fn check_version(&self) -> std::result::Result<(), StorageError> {
        let major = |v: &str| v.split('.').next().map(str::to_owned);
        if major(&self.version) == major(FILE_FORMAT_VERSION) {
            Ok(())
        } else {
            Err(StorageError::InvalidSnapshot {
                reason: format!("unsupported format version {}", self.version),
            })
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> vertexkit_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and version-check a JSON snapshot
    pub fn from_json(json: &str) -> vertexkit_core::Result<Self> {
        let snapshot: SceneSnapshot = serde_json::from_str(json)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Save snapshot to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;

        std::fs::write(path.as_ref(), json).context("Failed to write snapshot file")?;

        Ok(())
    }

    /// Load snapshot from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read snapshot file")?;

        let snapshot: SceneSnapshot =
            serde_json::from_str(&content).context("Failed to parse snapshot file")?;
        snapshot.check_version()?;

        Ok(snapshot)
    }
}
