use vertexkit_core::Color;

use super::{IdGenerator, Point, Shape, ShapeKind};

/// Two triangles covering the axis-aligned box spanned by `a` and `b`.
///
/// Triangle one is `min, (max_x, min_y), max`; triangle two is
/// `min, max, (min_x, max_y)`.
pub fn rectangle_vertices(a: Point, b: Point) -> Vec<Point> {
    let min = Point::new(a.x.min(b.x), a.y.min(b.y)).clamped();
    let max = Point::new(a.x.max(b.x), a.y.max(b.y)).clamped();
    vec![
        min,
        Point::new(max.x, min.y),
        max,
        min,
        max,
        Point::new(min.x, max.y),
    ]
}

/// Builds a named rectangle shape with a fresh identity.
pub fn rectangle(ids: &mut IdGenerator, a: Point, b: Point, color: Color) -> Shape {
    Shape::new(ShapeKind::Rectangle, rectangle_vertices(a, b), color).with_identity(ids)
}
