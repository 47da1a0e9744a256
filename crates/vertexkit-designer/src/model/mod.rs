//! Shape model: logical points, identities, kinds, topologies and the shape
//! record owned by the canvas, plus the parametric generators that build
//! shapes from a couple of control points.

use std::fmt;

use serde::{Deserialize, Serialize};
use vertexkit_core::{clamp_ndc, Color};

mod circle;
mod polygon;
mod rectangle;
mod rounded_rectangle;

pub use circle::{circle, circle_ring, circle_vertices};
pub use polygon::{polygon, polygon_ring, polygon_vertices};
pub use rectangle::{rectangle, rectangle_vertices};
pub use rounded_rectangle::{
    effective_corner_radius, normalize_radius_ratio, rounded_rectangle,
    rounded_rectangle_vertices,
};

/// A point in logical (NDC) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamps both coordinates into `[-1, 1]` independently.
    pub fn clamped(self) -> Self {
        Self::new(clamp_ndc(self.x), clamp_ndc(self.y))
    }

    /// Offsets the point, clamping each axis into `[-1, 1]`.
    pub fn translated_clamped(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy).clamped()
    }
}

/// Stable identity of a shape for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Placeholder carried by draft shapes until they are committed.
    pub const UNASSIGNED: ShapeId = ShapeId(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape_{}", self.0)
    }
}

/// Identity of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group_{}", self.0)
    }
}

/// Monotonic identity source shared by shapes and groups.
///
/// No wall clock or randomness is involved, so a fresh generator always
/// hands out the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn next_shape_id(&mut self) -> ShapeId {
        ShapeId(self.bump())
    }

    pub fn next_group_id(&mut self) -> GroupId {
        GroupId(self.bump())
    }

    /// Makes sure `raw` is never handed out again (used after loading).
    pub fn observe(&mut self, raw: u64) {
        if raw >= self.next {
            self.next = raw + 1;
        }
    }

    /// The value the next call will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// What a shape *is*, independent of how its vertices are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Point,
    Line,
    Polyline,
    #[serde(rename = "lineloop")]
    LineLoop,
    Triangle,
    Rectangle,
    #[serde(rename = "roundedrect")]
    RoundedRectangle,
    Circle,
    Polygon,
    Fan,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Polyline,
        ShapeKind::LineLoop,
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
        ShapeKind::Circle,
        ShapeKind::Polygon,
        ShapeKind::Fan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Polyline => "polyline",
            ShapeKind::LineLoop => "lineloop",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RoundedRectangle => "roundedrect",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Fan => "fan",
        }
    }

    /// Prefix for auto-generated shape names.
    pub fn name_prefix(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::RoundedRectangle => "roundrect",
            other => other.as_str(),
        }
    }

    /// The topology generators and tools pair with this kind.
    ///
    /// Only these pairings are ever produced by the engine. A shape whose
    /// topology was later edited keeps its kind; hit testing and rendering
    /// follow the kind.
    pub fn default_topology(self) -> Topology {
        match self {
            ShapeKind::Point => Topology::Points,
            ShapeKind::Line => Topology::Lines,
            ShapeKind::Polyline => Topology::LineStrip,
            ShapeKind::LineLoop => Topology::LineLoop,
            ShapeKind::Triangle | ShapeKind::Rectangle => Topology::Triangles,
            ShapeKind::RoundedRectangle
            | ShapeKind::Circle
            | ShapeKind::Polygon
            | ShapeKind::Fan => Topology::TriangleFan,
        }
    }

    /// Filled kinds are hit by area rather than by stroke proximity.
    pub fn is_filled(self) -> bool {
        !matches!(
            self,
            ShapeKind::Point | ShapeKind::Line | ShapeKind::Polyline | ShapeKind::LineLoop
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive assembly mode used to interpret a vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    #[serde(rename = "GL_POINTS")]
    Points,
    #[serde(rename = "GL_LINES")]
    Lines,
    #[serde(rename = "GL_LINE_STRIP")]
    LineStrip,
    #[serde(rename = "GL_LINE_LOOP")]
    LineLoop,
    #[serde(rename = "GL_TRIANGLES")]
    Triangles,
    #[serde(rename = "GL_TRIANGLE_STRIP")]
    TriangleStrip,
    #[serde(rename = "GL_TRIANGLE_FAN")]
    TriangleFan,
}

impl Topology {
    pub fn gl_name(self) -> &'static str {
        match self {
            Topology::Points => "GL_POINTS",
            Topology::Lines => "GL_LINES",
            Topology::LineStrip => "GL_LINE_STRIP",
            Topology::LineLoop => "GL_LINE_LOOP",
            Topology::Triangles => "GL_TRIANGLES",
            Topology::TriangleStrip => "GL_TRIANGLE_STRIP",
            Topology::TriangleFan => "GL_TRIANGLE_FAN",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gl_name())
    }
}

/// Kind-specific parameters needed to regenerate a generated shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeMetadata {
    #[default]
    None,
    RoundedCorners { radius_ratio: f64, segments: u32 },
    Circle { segments: u32, radius: f64 },
    Polygon { sides: u32, radius: f64 },
}

impl ShapeMetadata {
    /// Copy with every parameter forced into the range the generators use.
    pub fn normalized(self) -> Self {
        match self {
            ShapeMetadata::None => ShapeMetadata::None,
            ShapeMetadata::RoundedCorners {
                radius_ratio,
                segments,
            } => ShapeMetadata::RoundedCorners {
                radius_ratio: normalize_radius_ratio(radius_ratio),
                segments: rounded_rectangle::corner_segment_count(segments),
            },
            ShapeMetadata::Circle { segments, radius } => ShapeMetadata::Circle {
                segments: circle::ring_segment_count(segments),
                radius: circle::ring_radius(radius),
            },
            ShapeMetadata::Polygon { sides, radius } => ShapeMetadata::Polygon {
                sides: circle::ring_segment_count(sides),
                radius: circle::ring_radius(radius),
            },
        }
    }
}

/// An authored primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub name: String,
    pub kind: ShapeKind,
    pub topology: Topology,
    pub vertices: Vec<Point>,
    pub color: Color,
    #[serde(default)]
    pub metadata: ShapeMetadata,
}

impl Shape {
    /// Creates a draft shape with no identity and no name.
    pub fn new(kind: ShapeKind, vertices: Vec<Point>, color: Color) -> Self {
        Self {
            id: ShapeId::UNASSIGNED,
            name: String::new(),
            kind,
            topology: kind.default_topology(),
            vertices,
            color,
            metadata: ShapeMetadata::None,
        }
    }

    /// Mints a fresh identity and derives the default name from it.
    pub fn with_identity(mut self, ids: &mut IdGenerator) -> Self {
        self.id = ids.next_shape_id();
        self.name = format!("{}_{}", self.kind.name_prefix(), self.id.0);
        self
    }

    pub fn with_metadata(mut self, metadata: ShapeMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)`; `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        bounds_of(&self.vertices)
    }

    /// Mean of all vertices.
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Some(Point::new(sx / n, sy / n))
    }

    /// Translates every vertex, clamping each axis independently.
    pub fn translate_clamped(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            *v = v.translated_clamped(dx, dy);
        }
    }

    /// Overwrites one vertex; returns `false` when the index is stale.
    pub fn set_vertex(&mut self, index: usize, point: Point) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => {
                *v = point.clamped();
                true
            }
            None => false,
        }
    }

    /// Opposite corners a generator would need to rebuild a rectangle.
    ///
    /// Rectangles use their bounding box, rounded rectangles the bounding box
    /// of the perimeter (the fan centre is skipped). Other kinds have none.
    pub fn control_points(&self) -> Option<(Point, Point)> {
        let corners = |(x0, y0, x1, y1)| (Point::new(x0, y0), Point::new(x1, y1));
        match self.kind {
            ShapeKind::Rectangle => self.bounds().map(corners),
            ShapeKind::RoundedRectangle => bounds_of(self.vertices.get(1..)?).map(corners),
            _ => None,
        }
    }

    /// Radius of a circle or polygon.
    ///
    /// The stored radius wins; shapes without ring metadata fall back to the
    /// distance from the centre to the first ring vertex.
    pub fn ring_radius(&self) -> Option<f64> {
        match (self.kind, self.metadata) {
            (ShapeKind::Circle, ShapeMetadata::Circle { radius, .. })
            | (ShapeKind::Polygon, ShapeMetadata::Polygon { radius, .. }) => Some(radius),
            (ShapeKind::Circle | ShapeKind::Polygon, _) => {
                Some(self.vertices.first()?.distance_to(self.vertices.get(1)?))
            }
            _ => None,
        }
    }

    /// Rebuilds the vertices in place from the stored geometry and `metadata`.
    ///
    /// Rectangles keep their bounding box; circles and polygons keep their
    /// centre and take the radius from `metadata`. Identity, name, colour and
    /// topology are kept. Returns `false` (and leaves the shape untouched)
    /// when the kind is not generated or the metadata belongs to another kind.
    pub fn regenerate(&mut self, metadata: ShapeMetadata) -> bool {
        let metadata = metadata.normalized();
        match self.rebuilt_vertices(metadata) {
            Some(vertices) => {
                self.vertices = vertices;
                self.metadata = metadata;
                true
            }
            None => false,
        }
    }

    fn rebuilt_vertices(&self, metadata: ShapeMetadata) -> Option<Vec<Point>> {
        let vertices = match (self.kind, metadata) {
            (ShapeKind::Rectangle, ShapeMetadata::None) => {
                let (a, b) = self.control_points()?;
                rectangle_vertices(a, b)
            }
            (
                ShapeKind::RoundedRectangle,
                ShapeMetadata::RoundedCorners {
                    radius_ratio,
                    segments,
                },
            ) => {
                let (a, b) = self.control_points()?;
                rounded_rectangle_vertices(a, b, radius_ratio, segments)
            }
            (ShapeKind::Circle, ShapeMetadata::Circle { segments, radius }) => {
                circle_ring(*self.vertices.first()?, radius, segments)
            }
            (ShapeKind::Polygon, ShapeMetadata::Polygon { sides, radius }) => {
                polygon_ring(*self.vertices.first()?, radius, sides)
            }
            _ => return None,
        };
        Some(vertices)
    }
}

/// Axis-aligned bounds of a vertex slice.
pub fn bounds_of(vertices: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = vertices.first()?;
    Some(vertices.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(x0, y0, x1, y1), v| (x0.min(v.x), y0.min(v.y), x1.max(v.x), y1.max(v.y)),
    ))
}
