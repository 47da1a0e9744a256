use std::f64::consts::FRAC_PI_2;

use vertexkit_core::Color;

use super::circle::ring_vertices;
use super::{IdGenerator, Point, Shape, ShapeKind, ShapeMetadata};

/// Regular polygon with its first vertex straight up from `center`.
pub fn polygon_vertices(center: Point, edge: Point, sides: u32) -> Vec<Point> {
    polygon_ring(center, center.distance_to(&edge), sides)
}

/// Regular polygon from a centre and an explicit circumradius.
pub fn polygon_ring(center: Point, radius: f64, sides: u32) -> Vec<Point> {
    ring_vertices(center, radius, sides, -FRAC_PI_2)
}

/// Builds a named polygon with a fresh identity.
pub fn polygon(ids: &mut IdGenerator, center: Point, edge: Point, sides: u32, color: Color) -> Shape {
    let radius = center.distance_to(&edge);
    Shape::new(ShapeKind::Polygon, polygon_ring(center, radius, sides), color)
        .with_metadata(ShapeMetadata::Polygon { sides, radius }.normalized())
        .with_identity(ids)
}
