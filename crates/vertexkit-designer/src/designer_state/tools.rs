//! Tools and the per-gesture session they drive.

use std::fmt;

use crate::model::{Point, ShapeId, ShapeKind};

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Select,
    Move,
    Vertex,
    Point,
    Line,
    Polyline,
    LineLoop,
    Triangle,
    Rectangle,
    RoundedRectangle,
    Circle,
    Polygon,
    Fan,
}

impl Tool {
    pub const ALL: [Tool; 13] = [
        Tool::Select,
        Tool::Move,
        Tool::Vertex,
        Tool::Point,
        Tool::Line,
        Tool::Polyline,
        Tool::LineLoop,
        Tool::Triangle,
        Tool::Rectangle,
        Tool::RoundedRectangle,
        Tool::Circle,
        Tool::Polygon,
        Tool::Fan,
    ];

    /// Stable identifier, matching the shape kind names for drawing tools.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Move => "move",
            Tool::Vertex => "vertex",
            other => other
                .shape_kind()
                .map(ShapeKind::as_str)
                .unwrap_or("select"),
        }
    }

    /// The kind a drawing tool produces; `None` for editing tools.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        Some(match self {
            Tool::Select | Tool::Move | Tool::Vertex => return None,
            Tool::Point => ShapeKind::Point,
            Tool::Line => ShapeKind::Line,
            Tool::Polyline => ShapeKind::Polyline,
            Tool::LineLoop => ShapeKind::LineLoop,
            Tool::Triangle => ShapeKind::Triangle,
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::RoundedRectangle => ShapeKind::RoundedRectangle,
            Tool::Circle => ShapeKind::Circle,
            Tool::Polygon => ShapeKind::Polygon,
            Tool::Fan => ShapeKind::Fan,
        })
    }

    /// Looks a tool up by its keyboard shortcut (case-insensitive).
    pub fn from_shortcut(key: char) -> Option<Tool> {
        Some(match key.to_ascii_lowercase() {
            'v' => Tool::Select,
            'm' => Tool::Move,
            'p' => Tool::Point,
            'l' => Tool::Line,
            'k' => Tool::Polyline,
            'o' => Tool::LineLoop,
            't' => Tool::Triangle,
            'r' => Tool::Rectangle,
            'u' => Tool::RoundedRectangle,
            'c' => Tool::Circle,
            'g' => Tool::Polygon,
            'f' => Tool::Fan,
            'e' => Tool::Vertex,
            _ => return None,
        })
    }

    /// Tools that collect clicks until a double-click commits them.
    pub fn is_open_ended(self) -> bool {
        matches!(self, Tool::Polyline | Tool::LineLoop | Tool::Fan)
    }

    /// Tools that define a shape by dragging from an anchor.
    pub fn is_drag_defined(self) -> bool {
        matches!(
            self,
            Tool::Rectangle | Tool::RoundedRectangle | Tool::Circle | Tool::Polygon
        )
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-progress gesture state for the active tool.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolSession {
    #[default]
    Idle,
    /// Clicks collected by the line, polyline, line-loop, fan and triangle tools.
    PointCollecting { points: Vec<Point> },
    /// Anchor of a drag-defined shape.
    DragDefining { anchor: Point },
    /// Previous pointer position while moving the selection.
    Moving { anchor: Point },
    /// Vertex being dragged in vertex mode.
    EditingVertex {
        shape_id: ShapeId,
        vertex_index: usize,
    },
}

impl ToolSession {
    /// Points collected so far (empty outside `PointCollecting`).
    pub fn points(&self) -> &[Point] {
        match self {
            ToolSession::PointCollecting { points } => points,
            _ => &[],
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ToolSession::Idle)
    }
}
