//! Designer state: the explicit context every input handler works on.
//!
//! This module is split into submodules for better organization:
//! - `tools`: Tool identifiers and the in-progress tool session
//! - `input`: Pointer, double-click and wheel handling
//! - `viewport`: Zoom, pan and settings controls
//! - `shapes`: Editor commands (delete, duplicate, inspector edits, groups)
//! - `file_io`: Snapshots and save/load

mod file_io;
mod input;
mod shapes;
mod tools;
mod viewport;

pub use input::{Outcome, PointerEvent};
pub use tools::{Tool, ToolSession};

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;
use vertexkit_settings::EditorSettings;

use crate::canvas::Canvas;
use crate::model::Shape;
use crate::viewport::Viewport;

/// Designer state owned by the top-level editor loop.
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub viewport: Viewport,
    pub settings: EditorSettings,
    pub design_name: String,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    created: Option<DateTime<Utc>>,
    tool: Tool,
    session: ToolSession,
    preview: Option<Shape>,
    hovered_vertex: Option<usize>,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    /// Creates a new designer state with the given settings.
    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            canvas: Canvas::new(),
            viewport: Viewport::default(),
            settings: settings.sanitized(),
            design_name: vertexkit_core::constants::DEFAULT_PROJECT_NAME.to_string(),
            current_file_path: None,
            is_modified: false,
            created: None,
            tool: Tool::Select,
            session: ToolSession::Idle,
            preview: None,
            hovered_vertex: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools, discarding any in-progress construction.
    pub fn set_tool(&mut self, tool: Tool) -> Outcome {
        let had_preview = self.preview.is_some();
        self.session = ToolSession::Idle;
        self.preview = None;
        self.hovered_vertex = None;
        if self.tool != tool {
            debug!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
            return Outcome::redraw();
        }
        if had_preview {
            Outcome::redraw()
        } else {
            Outcome::none()
        }
    }

    pub fn session(&self) -> &ToolSession {
        &self.session
    }

    /// Transient shape shown while a construction is in progress.
    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    /// Vertex currently being dragged in vertex mode.
    pub fn focused_vertex(&self) -> Option<usize> {
        match self.session {
            ToolSession::EditingVertex { vertex_index, .. } => Some(vertex_index),
            _ => None,
        }
    }

    /// Vertex under the cursor in vertex mode.
    pub fn hovered_vertex(&self) -> Option<usize> {
        self.hovered_vertex
    }

    /// Escape: clears selection, collected points, preview and vertex focus.
    pub fn cancel(&mut self) -> Outcome {
        self.session = ToolSession::Idle;
        self.preview = None;
        self.hovered_vertex = None;
        self.canvas.clear_selection();
        Outcome::redraw()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
