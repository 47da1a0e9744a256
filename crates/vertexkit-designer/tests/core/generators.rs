use vertexkit_core::Color;
use vertexkit_designer::model::{
    circle, circle_vertices, polygon, polygon_vertices, rectangle, rectangle_vertices,
    rounded_rectangle, rounded_rectangle_vertices, IdGenerator, Point, ShapeKind, ShapeMetadata,
    Topology,
};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn all_close(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| close(*p, *q))
}

#[test]
fn test_rectangle_two_triangle_decomposition() {
    let v = rectangle_vertices(Point::new(0.5, 0.5), Point::new(-0.5, -0.5));
    assert_eq!(
        v,
        vec![
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ]
    );
}

#[test]
fn test_rectangle_shape_identity_and_topology() {
    let mut ids = IdGenerator::new();
    let a = rectangle(&mut ids, Point::new(0.0, 0.0), Point::new(0.2, 0.2), Color::EMERALD);
    let b = rectangle(&mut ids, Point::new(0.0, 0.0), Point::new(0.2, 0.2), Color::EMERALD);
    assert_ne!(a.id, b.id);
    assert_eq!(a.kind, ShapeKind::Rectangle);
    assert_eq!(a.topology, Topology::Triangles);
    assert_eq!(a.vertices, b.vertices);
}

#[test]
fn test_rectangle_clamps_out_of_range_corners() {
    let v = rectangle_vertices(Point::new(-3.0, 0.0), Point::new(0.5, 7.0));
    assert!(v.iter().all(|p| p.x >= -1.0 && p.x <= 1.0 && p.y >= -1.0 && p.y <= 1.0));
    assert_eq!(v[0], Point::new(-1.0, 0.0));
    assert_eq!(v[2], Point::new(0.5, 1.0));
}

#[test]
fn test_rounded_rectangle_layout_and_metadata() {
    let mut ids = IdGenerator::new();
    let shape = rounded_rectangle(
        &mut ids,
        Point::new(-0.4, -0.2),
        Point::new(0.4, 0.2),
        0.25,
        6,
        Color::EMERALD,
    );
    assert_eq!(shape.kind, ShapeKind::RoundedRectangle);
    assert_eq!(shape.topology, Topology::TriangleFan);
    assert_eq!(shape.name, "roundrect_1");
    assert_eq!(shape.vertices.len(), 1 + 4 * 7 + 1);
    assert_eq!(
        shape.metadata,
        ShapeMetadata::RoundedCorners {
            radius_ratio: 0.25,
            segments: 6
        }
    );
    assert!(close(shape.vertices[0], Point::new(0.0, 0.0)));
    assert_eq!(shape.vertices[1], shape.vertices[shape.vertices.len() - 1]);
}

#[test]
fn test_rounded_rectangle_arcs_are_continuous() {
    // radius = 0.4 * 0.25 = 0.1
    let v = rounded_rectangle_vertices(Point::new(-0.4, -0.2), Point::new(0.4, 0.2), 0.25, 4);
    let per_corner = 5;
    // Top-right arc ends at the top edge, top-left starts there too.
    let tr_end = v[per_corner];
    let tl_start = v[per_corner + 1];
    assert!(close(tr_end, Point::new(0.3, 0.2)));
    assert!(close(tl_start, Point::new(-0.3, 0.2)));
    // Bottom-left arc starts on the left edge.
    assert!(close(v[2 * per_corner + 1], Point::new(-0.4, -0.1)));
    // Bottom-right arc ends on the right edge.
    assert!(close(v[4 * per_corner], Point::new(0.4, -0.1)));
}

#[test]
fn test_rounded_rectangle_ratio_is_capped_at_half() {
    let capped = rounded_rectangle_vertices(Point::new(-0.5, -0.5), Point::new(0.5, 0.5), 5.0, 4);
    let half = rounded_rectangle_vertices(Point::new(-0.5, -0.5), Point::new(0.5, 0.5), 0.5, 4);
    assert_eq!(capped, half);
}

#[test]
fn test_rounded_rectangle_zero_ratio_collapses_to_corners() {
    let v = rounded_rectangle_vertices(Point::new(-0.5, -0.25), Point::new(0.5, 0.25), 0.0, 3);
    let corners = [
        Point::new(0.5, 0.25),
        Point::new(-0.5, 0.25),
        Point::new(-0.5, -0.25),
        Point::new(0.5, -0.25),
    ];
    for (corner_index, corner) in corners.iter().enumerate() {
        for i in 0..4 {
            assert!(close(v[1 + corner_index * 4 + i], *corner));
        }
    }
}

#[test]
fn test_rounded_rectangle_zero_segments_degrades() {
    let v = rounded_rectangle_vertices(Point::new(-0.5, -0.5), Point::new(0.5, 0.5), 0.2, 0);
    assert_eq!(v.len(), 1 + 4 * 2 + 1);
}

#[test]
fn test_circle_vertex_count_and_closure() {
    let v = circle_vertices(Point::new(0.1, -0.1), Point::new(0.4, -0.1), 24);
    assert_eq!(v.len(), 26);
    assert_eq!(v[0], Point::new(0.1, -0.1));
    assert!(close(v[1], Point::new(0.4, -0.1)));
    assert_eq!(v[1], v[25]);
    for p in &v[1..] {
        assert!((p.distance_to(&v[0]) - 0.3).abs() < 1e-9);
    }
}

#[test]
fn test_circle_clamps_to_ndc() {
    let v = circle_vertices(Point::new(0.9, 0.0), Point::new(0.9, 0.5), 16);
    assert!(v.iter().all(|p| p.x <= 1.0 && p.y <= 1.0 && p.x >= -1.0 && p.y >= -1.0));
}

#[test]
fn test_circle_shape_metadata() {
    let mut ids = IdGenerator::new();
    let shape = circle(&mut ids, Point::new(0.0, 0.0), Point::new(0.1, 0.0), 2, Color::WHITE);
    assert_eq!(
        shape.metadata,
        ShapeMetadata::Circle {
            segments: 3,
            radius: 0.1
        }
    );
    assert_eq!(shape.vertices.len(), 5);
    assert_eq!(shape.topology, Topology::TriangleFan);
}

#[test]
fn test_polygon_first_vertex_offset() {
    let v = polygon_vertices(Point::new(0.0, 0.0), Point::new(0.0, 0.5), 6);
    assert_eq!(v.len(), 8);
    assert!(close(v[1], Point::new(0.0, -0.5)));
    assert_eq!(v[1], v[7]);
}

#[test]
fn test_polygon_shape_metadata() {
    let mut ids = IdGenerator::new();
    let shape = polygon(&mut ids, Point::new(0.0, 0.0), Point::new(0.3, 0.0), 5, Color::WHITE);
    assert_eq!(shape.kind, ShapeKind::Polygon);
    assert_eq!(
        shape.metadata,
        ShapeMetadata::Polygon {
            sides: 5,
            radius: 0.3
        }
    );
    assert_eq!(shape.name, "polygon_1");
}

#[test]
fn test_regenerate_rounded_rectangle_keeps_identity() {
    let mut ids = IdGenerator::new();
    let mut shape = rounded_rectangle(
        &mut ids,
        Point::new(-0.5, -0.3),
        Point::new(0.5, 0.3),
        0.2,
        8,
        Color::EMERALD,
    );
    let id = shape.id;
    let name = shape.name.clone();
    assert!(shape.regenerate(ShapeMetadata::RoundedCorners {
        radius_ratio: 0.1,
        segments: 2
    }));
    assert_eq!(shape.id, id);
    assert_eq!(shape.name, name);
    assert_eq!(shape.vertices.len(), 1 + 4 * 3 + 1);
    assert!(all_close(
        &shape.vertices,
        &rounded_rectangle_vertices(Point::new(-0.5, -0.3), Point::new(0.5, 0.3), 0.1, 2)
    ));
}

#[test]
fn test_regenerate_rejects_foreign_metadata() {
    let mut ids = IdGenerator::new();
    let mut shape = rectangle(&mut ids, Point::new(0.0, 0.0), Point::new(0.5, 0.5), Color::WHITE);
    let before = shape.clone();
    assert!(!shape.regenerate(ShapeMetadata::Circle {
        segments: 8,
        radius: 0.2
    }));
    assert_eq!(shape, before);
}

#[test]
fn test_regenerate_circle_from_stored_radius() {
    let mut ids = IdGenerator::new();
    let mut shape = circle(&mut ids, Point::new(0.1, 0.1), Point::new(0.4, 0.1), 8, Color::WHITE);
    let radius = shape.ring_radius().unwrap();
    assert!(shape.regenerate(ShapeMetadata::Circle {
        segments: 32,
        radius
    }));
    assert_eq!(shape.vertices.len(), 34);
    assert!(all_close(
        &shape.vertices,
        &circle_vertices(Point::new(0.1, 0.1), Point::new(0.4, 0.1), 32)
    ));
}

#[test]
fn test_regenerate_boundary_clamped_circle_is_stable() {
    let mut ids = IdGenerator::new();
    let mut shape = circle(&mut ids, Point::new(0.8, 0.0), Point::new(0.8, 0.5), 24, Color::WHITE);
    assert_eq!(shape.vertices[1], Point::new(1.0, 0.0));
    let before = shape.clone();
    let metadata = shape.metadata;
    assert!(shape.regenerate(metadata));
    assert_eq!(shape, before);
    assert!(close(shape.vertices[7], Point::new(0.8, 0.5)));
}

#[test]
fn test_regenerate_boundary_clamped_polygon_keeps_radius() {
    let mut ids = IdGenerator::new();
    let mut shape = polygon(&mut ids, Point::new(0.0, -0.8), Point::new(0.0, -0.2), 6, Color::WHITE);
    assert_eq!(shape.vertices[1].y, -1.0);
    assert!(shape.regenerate(ShapeMetadata::Polygon {
        sides: 6,
        radius: 0.6
    }));
    assert!(all_close(
        &shape.vertices,
        &polygon_vertices(Point::new(0.0, -0.8), Point::new(0.0, -0.2), 6)
    ));
}

#[test]
fn test_ring_radius_falls_back_to_first_ring_vertex() {
    let mut ids = IdGenerator::new();
    let mut shape = circle(&mut ids, Point::new(0.0, 0.0), Point::new(0.25, 0.0), 8, Color::WHITE);
    shape.metadata = ShapeMetadata::None;
    assert_eq!(shape.ring_radius(), Some(0.25));
    let rect = rectangle(&mut ids, Point::new(0.0, 0.0), Point::new(0.5, 0.5), Color::WHITE);
    assert_eq!(rect.ring_radius(), None);
}
