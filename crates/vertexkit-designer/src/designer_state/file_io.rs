//! Snapshot, save, load and new-design operations for designer state.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::{DesignerState, ToolSession};
use crate::canvas::Canvas;
use crate::serialization::{SceneSnapshot, ViewportState};

impl DesignerState {
    /// Captures the scene, settings and viewport.
    pub fn snapshot(&self) -> SceneSnapshot {
        let mut snapshot = SceneSnapshot::new(&self.design_name);
        if let Some(created) = self.created {
            snapshot.metadata.created = created;
        }
        snapshot.viewport = ViewportState {
            zoom: self.viewport.zoom(),
            pan_x: self.viewport.pan_x(),
            pan_y: self.viewport.pan_y(),
        };
        snapshot.shapes = self.canvas.shapes().to_vec();
        snapshot.groups = self.canvas.groups().to_vec();
        snapshot.settings = self.settings.clone();
        snapshot
    }

    /// Replaces the whole design with a snapshot.
    ///
    /// Settings are sanitized, vertices clamped, dangling group entries
    /// dropped and the selection cleared.
    pub fn restore(&mut self, snapshot: SceneSnapshot) {
        let SceneSnapshot {
            metadata,
            viewport,
            shapes,
            groups,
            settings,
            ..
        } = snapshot;

        self.canvas = Canvas::from_parts(shapes, groups);
        self.settings = settings.sanitized();
        self.viewport.set_zoom(viewport.zoom);
        if viewport.pan_x.is_finite() && viewport.pan_y.is_finite() {
            self.viewport.set_pan(viewport.pan_x, viewport.pan_y);
        }
        self.design_name = metadata.name;
        self.created = Some(metadata.created);
        self.session = ToolSession::Idle;
        self.preview = None;
        self.hovered_vertex = None;
        self.is_modified = false;

        info!(
            "Restored '{}' ({} shapes, {} groups)",
            self.design_name,
            self.canvas.shape_count(),
            self.canvas.groups().len()
        );
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut snapshot = self.snapshot();
        snapshot.metadata.modified = Utc::now();
        snapshot.save_to_file(&path)?;

        self.created = Some(snapshot.metadata.created);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let snapshot = SceneSnapshot::load_from_file(&path)?;
        self.restore(snapshot);
        self.current_file_path = Some(path.as_ref().to_path_buf());

        Ok(())
    }

    /// Create new design (clear all). Settings and viewport are kept.
    pub fn new_design(&mut self) {
        self.canvas.clear();
        self.session = ToolSession::Idle;
        self.preview = None;
        self.hovered_vertex = None;
        self.current_file_path = None;
        self.is_modified = false;
        self.created = None;
        self.design_name = vertexkit_core::constants::DEFAULT_PROJECT_NAME.to_string();
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.design_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
