use std::f64::consts::TAU;

use vertexkit_core::Color;
use vertexkit_settings::MAX_RING_SEGMENTS;

use super::{IdGenerator, Point, Shape, ShapeKind, ShapeMetadata};

/// Fewest ring segments a circle or polygon is built with.
pub(crate) const MIN_RING_SEGMENTS: u32 = 3;

/// Ring segment count forced into `[3, MAX_RING_SEGMENTS]`.
pub(crate) fn ring_segment_count(segments: u32) -> u32 {
    segments.clamp(MIN_RING_SEGMENTS, MAX_RING_SEGMENTS)
}

/// Non-negative radius; non-finite values collapse to zero.
pub(crate) fn ring_radius(radius: f64) -> f64 {
    if radius.is_finite() {
        radius.abs()
    } else {
        0.0
    }
}

/// Centre vertex followed by `segments + 1` ring samples starting at
/// `start_angle`; the last sample repeats the first.
pub(crate) fn ring_vertices(center: Point, radius: f64, segments: u32, start_angle: f64) -> Vec<Point> {
    let segments = ring_segment_count(segments);
    let radius = ring_radius(radius);
    let step = TAU / f64::from(segments);
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(center.clamped());
    for i in 0..segments {
        let angle = start_angle + step * f64::from(i);
        vertices.push(
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
            .clamped(),
        );
    }
    // Closing sample is copied so the fan closes bit-exactly.
    vertices.push(vertices[1]);
    vertices
}

/// Circle tessellated into `segments` slices around `center`, with the
/// radius given by the distance to `edge`.
pub fn circle_vertices(center: Point, edge: Point, segments: u32) -> Vec<Point> {
    circle_ring(center, center.distance_to(&edge), segments)
}

/// Circle tessellation from a centre and an explicit radius.
pub fn circle_ring(center: Point, radius: f64, segments: u32) -> Vec<Point> {
    ring_vertices(center, radius, segments, 0.0)
}

/// Builds a named circle with a fresh identity.
pub fn circle(
    ids: &mut IdGenerator,
    center: Point,
    edge: Point,
    segments: u32,
    color: Color,
) -> Shape {
    let radius = center.distance_to(&edge);
    Shape::new(ShapeKind::Circle, circle_ring(center, radius, segments), color)
        .with_metadata(ShapeMetadata::Circle { segments, radius }.normalized())
        .with_identity(ids)
}
