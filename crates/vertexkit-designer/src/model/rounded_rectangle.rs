use std::f64::consts::{FRAC_PI_2, PI};

use vertexkit_core::Color;
use vertexkit_settings::{MAX_CORNER_RADIUS_RATIO, MAX_CORNER_SEGMENTS};

use super::{IdGenerator, Point, Shape, ShapeKind, ShapeMetadata};

/// Corner arc centres and start angles, in emission order:
/// top-right, top-left, bottom-left, bottom-right.
fn corner_arcs(min: Point, max: Point, radius: f64) -> [(Point, f64); 4] {
    [
        (Point::new(max.x - radius, max.y - radius), 0.0),
        (Point::new(min.x + radius, max.y - radius), FRAC_PI_2),
        (Point::new(min.x + radius, min.y + radius), PI),
        (Point::new(max.x - radius, min.y + radius), 3.0 * FRAC_PI_2),
    ]
}

/// Radius ratio forced into `[0, 0.5]`; non-finite values become zero.
pub fn normalize_radius_ratio(radius_ratio: f64) -> f64 {
    if radius_ratio.is_finite() {
        radius_ratio.clamp(0.0, MAX_CORNER_RADIUS_RATIO)
    } else {
        0.0
    }
}

/// Arc segment count forced into `[1, MAX_CORNER_SEGMENTS]`.
pub(crate) fn corner_segment_count(segments: u32) -> u32 {
    segments.clamp(1, MAX_CORNER_SEGMENTS)
}

/// Effective corner radius for a box of the given size.
pub fn effective_corner_radius(width: f64, height: f64, radius_ratio: f64) -> f64 {
    let shorter = width.abs().min(height.abs());
    (shorter / 2.0).min(shorter * normalize_radius_ratio(radius_ratio))
}

/// Fan outline of a rounded rectangle spanned by `a` and `b`.
///
/// The first vertex is the box centre. Each corner contributes
/// `segments + 1` samples of its quarter arc, and the first perimeter
/// vertex is repeated at the end.
pub fn rounded_rectangle_vertices(a: Point, b: Point, radius_ratio: f64, segments: u32) -> Vec<Point> {
    let segments = corner_segment_count(segments);
    let min = Point::new(a.x.min(b.x), a.y.min(b.y)).clamped();
    let max = Point::new(a.x.max(b.x), a.y.max(b.y)).clamped();
    let radius = effective_corner_radius(max.x - min.x, max.y - min.y, radius_ratio);
    let step = FRAC_PI_2 / f64::from(segments);

    let mut vertices = Vec::with_capacity(4 * (segments as usize + 1) + 2);
    vertices.push(Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0));
    for (center, start) in corner_arcs(min, max, radius) {
        for i in 0..=segments {
            let angle = start + step * f64::from(i);
            vertices.push(
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
                .clamped(),
            );
        }
    }
    vertices.push(vertices[1]);
    vertices
}

/// Builds a named rounded rectangle with a fresh identity.
pub fn rounded_rectangle(
    ids: &mut IdGenerator,
    a: Point,
    b: Point,
    radius_ratio: f64,
    segments: u32,
    color: Color,
) -> Shape {
    let metadata = ShapeMetadata::RoundedCorners {
        radius_ratio,
        segments,
    }
    .normalized();
    Shape::new(
        ShapeKind::RoundedRectangle,
        rounded_rectangle_vertices(a, b, radius_ratio, segments),
        color,
    )
    .with_metadata(metadata)
    .with_identity(ids)
}
