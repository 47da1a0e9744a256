//! Pointer handling for every tool.

use tracing::debug;

use super::{DesignerState, Tool, ToolSession};
use crate::hit_test::{hit_test, nearest_vertex};
use crate::model::{
    circle_vertices, polygon_vertices, rectangle_vertices, rounded_rectangle_vertices, Point,
    Shape, ShapeKind, ShapeMetadata,
};

/// What a handler changed, so the caller knows whether to persist and redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Something visible changed.
    pub redraw: bool,
    /// The scene changed in a way that should be saved.
    pub persist: bool,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            persist: false,
        }
    }

    pub fn commit() -> Self {
        Self {
            redraw: true,
            persist: true,
        }
    }

    fn redraw_if(changed: bool) -> Self {
        Self {
            redraw: changed,
            persist: false,
        }
    }
}

/// A pointer position in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Display-space position, used for hit testing.
    pub screen: Point,
    /// Logical position after snapping and clamping.
    pub logical: Point,
    /// Multi-select modifier (Shift) held.
    pub multi: bool,
}

impl DesignerState {
    /// Builds an event from a display position, applying grid snapping when
    /// enabled.
    pub fn event_at(&self, screen: Point, multi: bool) -> PointerEvent {
        let snap = self
            .settings
            .snap_to_grid
            .then_some(self.settings.grid_divisions);
        PointerEvent {
            screen,
            logical: self.viewport.pixel_to_logical(screen, snap),
            multi,
        }
    }

    /// Builds an event for an exact logical position.
    pub fn event_at_logical(&self, logical: Point, multi: bool) -> PointerEvent {
        let logical = logical.clamped();
        PointerEvent {
            screen: self.viewport.logical_to_pixel(logical),
            logical,
            multi,
        }
    }

    /// Primary button pressed.
    pub fn pointer_down(&mut self, event: PointerEvent) -> Outcome {
        let p = event.logical;
        match self.tool {
            Tool::Select => {
                let hit = hit_test(event.screen, self.canvas.shapes(), &self.viewport)
                    .map(|index| self.canvas.shapes()[index].id);
                Outcome::redraw_if(self.canvas.click_select(hit, event.multi))
            }
            Tool::Move => {
                if !self.canvas.selection().is_empty() {
                    self.session = ToolSession::Moving { anchor: p };
                }
                Outcome::none()
            }
            Tool::Vertex => {
                let Some(shape) = self.canvas.sole_selected() else {
                    return Outcome::none();
                };
                if let Some(index) = nearest_vertex(shape, event.screen, &self.viewport) {
                    self.session = ToolSession::EditingVertex {
                        shape_id: shape.id,
                        vertex_index: index,
                    };
                    return Outcome::redraw();
                }
                Outcome::none()
            }
            Tool::Point => self.commit(Shape::new(
                ShapeKind::Point,
                vec![p],
                self.settings.default_color,
            )),
            Tool::Line => match &self.session {
                ToolSession::PointCollecting { points } if !points.is_empty() => {
                    let start = points[0];
                    self.commit(Shape::new(
                        ShapeKind::Line,
                        vec![start, p],
                        self.settings.default_color,
                    ))
                }
                _ => {
                    self.session = ToolSession::PointCollecting { points: vec![p] };
                    Outcome::redraw()
                }
            },
            Tool::Polyline | Tool::LineLoop | Tool::Fan => {
                self.collect(p);
                self.preview = self.collected_preview(p);
                Outcome::redraw()
            }
            Tool::Triangle => {
                self.collect(p);
                let points = self.session.points().to_vec();
                if points.len() >= 3 {
                    return self.commit(Shape::new(
                        ShapeKind::Triangle,
                        points,
                        self.settings.default_color,
                    ));
                }
                Outcome::redraw()
            }
            Tool::Rectangle | Tool::RoundedRectangle | Tool::Circle | Tool::Polygon => {
                self.session = ToolSession::DragDefining { anchor: p };
                self.preview = None;
                Outcome::none()
            }
        }
    }

    /// Pointer moved, with or without a button held.
    pub fn pointer_move(&mut self, event: PointerEvent) -> Outcome {
        let p = event.logical;
        match (self.tool, self.session.clone()) {
            (Tool::Move, ToolSession::Moving { anchor }) => {
                let moved = self.canvas.translate_selected(p.x - anchor.x, p.y - anchor.y);
                self.session = ToolSession::Moving { anchor: p };
                Outcome::redraw_if(moved)
            }
            (Tool::Vertex, session) => {
                let Some(shape) = self.canvas.sole_selected() else {
                    return Outcome::none();
                };
                let shape_id = shape.id;
                self.hovered_vertex = nearest_vertex(shape, event.screen, &self.viewport);
                if let ToolSession::EditingVertex {
                    shape_id: editing,
                    vertex_index,
                } = session
                {
                    if editing == shape_id {
                        self.canvas.set_vertex(shape_id, vertex_index, p);
                    }
                }
                Outcome::redraw()
            }
            (tool, ToolSession::DragDefining { anchor }) if tool.is_drag_defined() => {
                self.preview = self.drag_preview(tool, anchor, p);
                Outcome::redraw()
            }
            (Tool::Line, ToolSession::PointCollecting { points }) if points.len() == 1 => {
                self.preview = Some(Shape::new(
                    ShapeKind::Line,
                    vec![points[0], p],
                    self.settings.default_color,
                ));
                Outcome::redraw()
            }
            (tool, ToolSession::PointCollecting { points })
                if tool.is_open_ended() && !points.is_empty() =>
            {
                self.preview = self.collected_preview(p);
                Outcome::redraw()
            }
            (Tool::Triangle, ToolSession::PointCollecting { points })
                if !points.is_empty() && points.len() < 3 =>
            {
                self.preview = self.collected_preview(p);
                Outcome::redraw()
            }
            _ => Outcome::none(),
        }
    }

    /// Primary button released.
    pub fn pointer_up(&mut self, _event: PointerEvent) -> Outcome {
        match (self.tool, &self.session) {
            (Tool::Move, ToolSession::Moving { .. }) => {
                self.session = ToolSession::Idle;
                Outcome::commit()
            }
            (Tool::Vertex, ToolSession::EditingVertex { .. }) => {
                self.session = ToolSession::Idle;
                Outcome::commit()
            }
            (tool, ToolSession::DragDefining { .. }) if tool.is_drag_defined() => {
                self.session = ToolSession::Idle;
                match self.preview.take() {
                    Some(shape) => self.commit(shape),
                    None => Outcome::none(),
                }
            }
            _ => Outcome::none(),
        }
    }

    /// Double-click: finishes polyline, line-loop and fan constructions.
    ///
    /// The double-click position itself is not added.
    pub fn double_click(&mut self, _event: PointerEvent) -> Outcome {
        if !self.tool.is_open_ended() {
            return Outcome::none();
        }
        let points = self.session.points().to_vec();
        if points.len() < 2 {
            return Outcome::none();
        }
        let Some(kind) = self.tool.shape_kind() else {
            return Outcome::none();
        };
        self.commit(Shape::new(kind, points, self.settings.default_color))
    }

    /// Mouse wheel: zooms the viewport.
    pub fn wheel(&mut self, delta_y: f64) -> Outcome {
        let before = self.viewport.zoom();
        self.viewport.zoom_wheel(delta_y);
        Outcome::redraw_if(self.viewport.zoom() != before)
    }

    fn collect(&mut self, p: Point) {
        match &mut self.session {
            ToolSession::PointCollecting { points } => points.push(p),
            other => *other = ToolSession::PointCollecting { points: vec![p] },
        }
    }

    fn collected_preview(&self, cursor: Point) -> Option<Shape> {
        let kind = self.tool.shape_kind()?;
        let mut vertices = self.session.points().to_vec();
        vertices.push(cursor);
        Some(Shape::new(kind, vertices, self.settings.default_color))
    }

    fn drag_preview(&self, tool: Tool, anchor: Point, p: Point) -> Option<Shape> {
        let s = &self.settings;
        let (kind, vertices, metadata) = match tool {
            Tool::Rectangle => (
                ShapeKind::Rectangle,
                rectangle_vertices(anchor, p),
                ShapeMetadata::None,
            ),
            Tool::RoundedRectangle => (
                ShapeKind::RoundedRectangle,
                rounded_rectangle_vertices(
                    anchor,
                    p,
                    s.rounded_corner_radius,
                    s.rounded_corner_segments,
                ),
                ShapeMetadata::RoundedCorners {
                    radius_ratio: s.rounded_corner_radius,
                    segments: s.rounded_corner_segments,
                },
            ),
            Tool::Circle => (
                ShapeKind::Circle,
                circle_vertices(anchor, p, s.circle_segments),
                ShapeMetadata::Circle {
                    segments: s.circle_segments,
                    radius: anchor.distance_to(&p),
                },
            ),
            Tool::Polygon => (
                ShapeKind::Polygon,
                polygon_vertices(anchor, p, s.polygon_sides),
                ShapeMetadata::Polygon {
                    sides: s.polygon_sides,
                    radius: anchor.distance_to(&p),
                },
            ),
            _ => return None,
        };
        Some(Shape::new(kind, vertices, s.default_color).with_metadata(metadata.normalized()))
    }

    /// Adds a finished shape, selects it alone and resets the session.
    fn commit(&mut self, shape: Shape) -> Outcome {
        let id = self.canvas.commit_shape(shape);
        debug!("Committed {} with tool {}", id, self.tool);
        self.session = ToolSession::Idle;
        self.preview = None;
        Outcome::commit()
    }
}
