//! Display-list renderer for the designer canvas.
//!
//! Turns the scene, the preview and the viewport into a flat list of draw
//! commands in display space. Shape outlines are `lyon` paths so a host can
//! tessellate or rasterize them with whatever backend it has.
//!
//! Features:
//! - Minor/major grid, axes and the NDC boundary
//! - Translucent preview shape
//! - Selection handles, or focus/hover/idle vertex handles in vertex mode

use lyon::math::point;
use lyon::path::Path;
use vertexkit_core::Color;
use vertexkit_settings::EditorSettings;

use crate::canvas::Canvas;
use crate::designer_state::{DesignerState, Tool};
use crate::model::{Point, Shape, ShapeId, ShapeKind};
use crate::viewport::Viewport;

const BACKGROUND: Color = Color::rgb(0x09, 0x09, 0x0b);
const GRID_MINOR: Color = Color::rgba(255, 255, 255, 20);
const GRID_MAJOR: Color = Color::rgba(255, 255, 255, 31);
const AXIS_X: Color = Color::rgba(233, 69, 96, 153);
const AXIS_Y: Color = Color::rgba(74, 222, 128, 153);
const BOUNDARY: Color = Color::rgba(255, 255, 255, 77);
const VERTEX_FOCUS: Color = Color::rgb(0xe9, 0x45, 0x60);
const VERTEX_HOVER: Color = Color::rgb(0xfb, 0xbf, 0x24);
const VERTEX_IDLE: Color = Color::rgb(0x4a, 0xde, 0x80);

const FILL_ALPHA: u8 = 0xcc;
const PREVIEW_FILL_ALPHA: u8 = 0x80;
const POINT_RADIUS: f32 = 6.0;
const SELECTION_HANDLE_RADIUS: f32 = 4.0;
const VERTEX_HANDLE_RADIUS: f32 = 8.0;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub viewport: &'a Viewport,
    pub settings: &'a EditorSettings,
    pub canvas: &'a Canvas,
    pub preview: Option<&'a Shape>,
    pub tool: Tool,
    pub focused_vertex: Option<usize>,
    pub hovered_vertex: Option<usize>,
}

impl<'a> Frame<'a> {
    pub fn from_state(state: &'a DesignerState) -> Self {
        Self {
            viewport: &state.viewport,
            settings: &state.settings,
            canvas: &state.canvas,
            preview: state.preview(),
            tool: state.tool(),
            focused_vertex: state.focused_vertex(),
            hovered_vertex: state.hovered_vertex(),
        }
    }
}

/// Presentation collaborator: invoked after every visible change.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// A single draw command in display space.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Path {
        /// `None` for the preview.
        shape: Option<ShapeId>,
        path: Path,
        fill: Option<Color>,
        stroke: Option<Color>,
        width: f32,
    },
    Disc {
        center: Point,
        radius: f32,
        fill: Color,
        stroke: Option<Color>,
        /// Vertex index drawn inside vertex handles.
        label: Option<usize>,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of straight lines (grid, axes).
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Commands that draw the given shape's outline or fill.
    pub fn paths_for(&self, id: ShapeId) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(
            move |c| matches!(c, DrawCommand::Path { shape: Some(s), .. } if *s == id),
        )
    }

    /// Centres of the white selection handles.
    pub fn selection_handles(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Disc {
                    center,
                    radius,
                    label: None,
                    ..
                } if *radius == SELECTION_HANDLE_RADIUS => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Vertex-mode handles as `(index, fill)`.
    pub fn vertex_handles(&self) -> Vec<(usize, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Disc {
                    fill,
                    label: Some(i),
                    ..
                } => Some((*i, *fill)),
                _ => None,
            })
            .collect()
    }
}

/// Renderer that keeps the latest display list for the host to draw.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    last: DisplayList,
    frames: u64,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &DisplayList {
        &self.last
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DisplayListRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.last = build_display_list(frame);
        self.frames += 1;
    }
}

/// Builds the display list for a frame.
pub fn build_display_list(frame: &Frame<'_>) -> DisplayList {
    let mut list = DisplayList::default();
    list.commands.push(DrawCommand::Clear(BACKGROUND));
    if !frame.viewport.has_surface() {
        return list;
    }

    if frame.settings.show_grid {
        push_grid(&mut list, frame.viewport, frame.settings.grid_divisions.max(1));
    }

    let selection = frame.canvas.selection();
    let vertex_mode = frame.tool == Tool::Vertex;
    for shape in frame.canvas.shapes() {
        let selected = selection.contains(shape.id);
        push_shape(&mut list, frame.viewport, shape, selected, false);
        if selected && !vertex_mode {
            for v in &shape.vertices {
                list.commands.push(DrawCommand::Disc {
                    center: frame.viewport.logical_to_pixel(*v),
                    radius: SELECTION_HANDLE_RADIUS,
                    fill: Color::WHITE,
                    stroke: None,
                    label: None,
                });
            }
        }
    }

    if let Some(preview) = frame.preview {
        push_shape(&mut list, frame.viewport, preview, false, true);
    }

    if vertex_mode {
        if let Some(shape) = frame.canvas.sole_selected() {
            for (i, v) in shape.vertices.iter().enumerate() {
                let fill = if Some(i) == frame.focused_vertex {
                    VERTEX_FOCUS
                } else if Some(i) == frame.hovered_vertex {
                    VERTEX_HOVER
                } else {
                    VERTEX_IDLE
                };
                list.commands.push(DrawCommand::Disc {
                    center: frame.viewport.logical_to_pixel(*v),
                    radius: VERTEX_HANDLE_RADIUS,
                    fill,
                    stroke: Some(Color::WHITE),
                    label: Some(i),
                });
            }
        }
    }

    list
}

fn push_line(list: &mut DisplayList, viewport: &Viewport, a: Point, b: Point, color: Color, width: f32) {
    list.commands.push(DrawCommand::Line {
        from: viewport.logical_to_pixel(a),
        to: viewport.logical_to_pixel(b),
        color,
        width,
    });
}

fn push_grid_lines(list: &mut DisplayList, viewport: &Viewport, divisions: u32, step: usize, color: Color) {
    let d = i64::from(divisions);
    for i in (-d..=d).step_by(step) {
        let t = i as f64 / d as f64;
        push_line(list, viewport, Point::new(t, -1.0), Point::new(t, 1.0), color, 1.0);
        push_line(list, viewport, Point::new(-1.0, t), Point::new(1.0, t), color, 1.0);
    }
}

fn push_grid(list: &mut DisplayList, viewport: &Viewport, divisions: u32) {
    push_grid_lines(list, viewport, divisions, 1, GRID_MINOR);
    let major_step = divisions.div_ceil(4).max(1) as usize;
    push_grid_lines(list, viewport, divisions, major_step, GRID_MAJOR);

    push_line(list, viewport, Point::new(-1.0, 0.0), Point::new(1.0, 0.0), AXIS_X, 2.0);
    push_line(list, viewport, Point::new(0.0, -1.0), Point::new(0.0, 1.0), AXIS_Y, 2.0);

    let corners = [
        Point::new(-1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(-1.0, -1.0),
    ];
    list.commands.push(DrawCommand::Path {
        shape: None,
        path: outline(viewport, &corners, true),
        fill: None,
        stroke: Some(BOUNDARY),
        width: 2.0,
    });
}

fn outline(viewport: &Viewport, vertices: &[Point], close: bool) -> Path {
    let mut builder = Path::builder();
    let mut screen = vertices.iter().map(|v| {
        let p = viewport.logical_to_pixel(*v);
        point(p.x as f32, p.y as f32)
    });
    if let Some(first) = screen.next() {
        builder.begin(first);
        for p in screen {
            builder.line_to(p);
        }
        builder.end(close);
    }
    builder.build()
}

fn push_shape(list: &mut DisplayList, viewport: &Viewport, shape: &Shape, selected: bool, preview: bool) {
    let Some(first) = shape.vertices.first() else {
        return;
    };
    let fill = shape
        .color
        .with_alpha(if preview { PREVIEW_FILL_ALPHA } else { FILL_ALPHA });
    let (stroke, width) = if selected {
        (Color::WHITE, 3.0)
    } else {
        (shape.color, 2.0)
    };
    let id = (!preview).then_some(shape.id);

    let command = match shape.kind {
        ShapeKind::Point => DrawCommand::Disc {
            center: viewport.logical_to_pixel(*first),
            radius: POINT_RADIUS,
            fill,
            stroke: selected.then_some(stroke),
            label: None,
        },
        ShapeKind::Line => DrawCommand::Path {
            shape: id,
            path: outline(viewport, &shape.vertices[..shape.vertices.len().min(2)], false),
            fill: None,
            stroke: Some(stroke),
            width,
        },
        ShapeKind::Polyline | ShapeKind::LineLoop => DrawCommand::Path {
            shape: id,
            path: outline(viewport, &shape.vertices, shape.kind == ShapeKind::LineLoop),
            fill: None,
            stroke: Some(stroke),
            width,
        },
        _ => DrawCommand::Path {
            shape: id,
            path: outline(viewport, &shape.vertices, true),
            fill: Some(fill),
            stroke: Some(stroke),
            width,
        },
    };
    list.commands.push(command);
}
