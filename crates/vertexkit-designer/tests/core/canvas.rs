use vertexkit_core::Color;
use vertexkit_designer::canvas::{Canvas, Group};
use vertexkit_designer::model::{
    rounded_rectangle_vertices, GroupId, Point, Shape, ShapeId, ShapeKind, ShapeMetadata, Topology,
};

fn point_shape(x: f64, y: f64) -> Shape {
    Shape::new(ShapeKind::Point, vec![Point::new(x, y)], Color::EMERALD)
}

fn line_shape() -> Shape {
    Shape::new(
        ShapeKind::Line,
        vec![Point::new(-0.5, 0.0), Point::new(0.5, 0.0)],
        Color::EMERALD,
    )
}

#[test]
fn test_add_shape_assigns_identity_and_name() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(point_shape(0.0, 0.0));
    let b = canvas.add_shape(line_shape());
    assert_ne!(a, b);
    assert!(a.is_assigned());
    assert_eq!(canvas.shape(a).unwrap().name, format!("point_{}", a.0));
    assert_eq!(canvas.shape(b).unwrap().name, format!("line_{}", b.0));
    assert_eq!(canvas.shape_count(), 2);
    assert_eq!(canvas.index_of(b), Some(1));
}

#[test]
fn test_add_shape_reassigns_duplicate_identity() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(point_shape(0.0, 0.0));
    let mut dup = point_shape(0.5, 0.5);
    dup.id = a;
    let b = canvas.add_shape(dup);
    assert_ne!(a, b);
}

#[test]
fn test_add_shape_clamps_vertices() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(point_shape(1.5, -2.0));
    assert_eq!(canvas.shape(id).unwrap().vertices[0], Point::new(1.0, -1.0));
}

#[test]
fn test_commit_selects_only_new_shape() {
    let mut canvas = Canvas::new();
    let a = canvas.commit_shape(point_shape(0.0, 0.0));
    let b = canvas.commit_shape(point_shape(0.1, 0.0));
    assert_eq!(canvas.selection().selected(), &[b]);
    assert!(!canvas.selection().contains(a));
}

#[test]
fn test_remove_shape_prunes_selection_and_groups() {
    let mut canvas = Canvas::new();
    let a = canvas.commit_shape(point_shape(0.0, 0.0));
    let group = canvas.add_group("pins");
    assert!(canvas.assign_to_group(a, group));
    let removed = canvas.remove_shape(a).unwrap();
    assert_eq!(removed.id, a);
    assert!(canvas.selection().is_empty());
    assert!(canvas.group(group).unwrap().shape_ids.is_empty());
    assert!(canvas.remove_shape(a).is_none());
}

#[test]
fn test_remove_selected() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(point_shape(0.0, 0.0));
    let b = canvas.add_shape(point_shape(0.1, 0.0));
    let c = canvas.add_shape(point_shape(0.2, 0.0));
    canvas.select_by_id(a, false);
    canvas.select_by_id(c, true);
    assert_eq!(canvas.remove_selected(), 2);
    assert_eq!(canvas.shapes().len(), 1);
    assert_eq!(canvas.shapes()[0].id, b);
    assert!(canvas.selection().is_empty());
    assert_eq!(canvas.remove_selected(), 0);
}

#[test]
fn test_translate_selected_clamps_per_axis() {
    let mut canvas = Canvas::new();
    let id = canvas.commit_shape(point_shape(0.98, 0.0));
    assert!(canvas.translate_selected(0.1, 0.0));
    assert_eq!(canvas.shape(id).unwrap().vertices[0], Point::new(1.0, 0.0));
    // Shape clips against the boundary rather than keeping its shape.
    let line = canvas.commit_shape(line_shape());
    canvas.translate_selected(0.7, 0.0);
    let v = &canvas.shape(line).unwrap().vertices;
    assert!((v[0].x - 0.2).abs() < 1e-12);
    assert_eq!(v[1].x, 1.0);
}

#[test]
fn test_translate_without_selection_is_noop() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(point_shape(0.0, 0.0));
    assert!(!canvas.translate_selected(0.5, 0.5));
    assert_eq!(canvas.shape(id).unwrap().vertices[0], Point::new(0.0, 0.0));
}

#[test]
fn test_set_vertex_missing_shape_or_index() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(line_shape());
    assert!(canvas.set_vertex(id, 1, Point::new(0.25, 0.75)));
    assert!(!canvas.set_vertex(id, 2, Point::new(0.0, 0.0)));
    assert!(!canvas.set_vertex(ShapeId(999), 0, Point::new(0.0, 0.0)));
    assert_eq!(canvas.shape(id).unwrap().vertices[1], Point::new(0.25, 0.75));
}

#[test]
fn test_duplicate_selected() {
    let mut canvas = Canvas::new();
    let id = canvas.commit_shape(line_shape());
    canvas.rename(id, "axis");
    let copy = canvas.duplicate_selected().unwrap();
    assert_ne!(copy, id);
    let shape = canvas.shape(copy).unwrap();
    assert_eq!(shape.name, "axis_copy");
    assert!((shape.vertices[0].x + 0.45).abs() < 1e-12);
    assert!((shape.vertices[0].y - 0.05).abs() < 1e-12);
    assert_eq!(canvas.selection().selected(), &[copy]);
}

#[test]
fn test_duplicate_requires_single_selection() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(point_shape(0.0, 0.0));
    let b = canvas.add_shape(point_shape(0.1, 0.0));
    assert!(canvas.duplicate_selected().is_none());
    canvas.select_by_id(a, false);
    canvas.select_by_id(b, true);
    assert!(canvas.duplicate_selected().is_none());
    assert_eq!(canvas.shape_count(), 2);
}

#[test]
fn test_inspector_edits() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(line_shape());
    assert!(!canvas.rename(id, "   "));
    assert!(canvas.rename(id, "baseline"));
    assert!(canvas.set_color(id, Color::WHITE));
    assert!(canvas.set_topology(id, Topology::LineStrip));
    let shape = canvas.shape(id).unwrap();
    assert_eq!(shape.name, "baseline");
    assert_eq!(shape.color, Color::WHITE);
    assert_eq!(shape.topology, Topology::LineStrip);
    assert_eq!(shape.kind, ShapeKind::Line);
    assert!(!canvas.rename(ShapeId(77), "ghost"));
}

#[test]
fn test_regenerate_rounded_rectangle_in_place() {
    let mut canvas = Canvas::new();
    let shape = Shape::new(
        ShapeKind::RoundedRectangle,
        rounded_rectangle_vertices(Point::new(-0.5, -0.5), Point::new(0.5, 0.5), 0.2, 8),
        Color::EMERALD,
    )
    .with_metadata(ShapeMetadata::RoundedCorners {
        radius_ratio: 0.2,
        segments: 8,
    });
    let id = canvas.add_shape(shape);
    let name = canvas.shape(id).unwrap().name.clone();
    let metadata = ShapeMetadata::RoundedCorners {
        radius_ratio: 0.4,
        segments: 3,
    };
    assert!(canvas.regenerate(id, metadata));
    let shape = canvas.shape(id).unwrap();
    assert_eq!(shape.vertices.len(), 1 + 4 * 4 + 1);
    assert_eq!(shape.metadata, metadata);
    assert_eq!(shape.name, name);
    assert_eq!(canvas.index_of(id), Some(0));
}

#[test]
fn test_groups_hold_each_shape_once() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(point_shape(0.0, 0.0));
    let g1 = canvas.add_group("");
    let g2 = canvas.add_group("second");
    assert_eq!(canvas.group(g1).unwrap().name, format!("group_{}", g1.0));
    assert!(canvas.assign_to_group(a, g1));
    assert!(canvas.assign_to_group(a, g2));
    assert!(canvas.group(g1).unwrap().shape_ids.is_empty());
    assert_eq!(canvas.group_of(a), Some(g2));
    assert!(canvas.ungroup_shape(a));
    assert_eq!(canvas.group_of(a), None);
    assert!(!canvas.assign_to_group(a, GroupId(999)));
}

#[test]
fn test_delete_group_keeps_shapes() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(point_shape(0.0, 0.0));
    let g = canvas.add_group("g");
    canvas.assign_to_group(a, g);
    assert!(canvas.delete_group(g));
    assert!(canvas.shape(a).is_some());
    assert!(canvas.groups().is_empty());
}

#[test]
fn test_from_parts_repairs_loaded_data() {
    let mut first = point_shape(2.0, 0.0);
    first.id = ShapeId(5);
    first.name = "first".into();
    let mut second = point_shape(0.0, 0.0);
    second.id = ShapeId(5);
    second.name = "second".into();
    let mut g1 = Group::new(GroupId(9), "a");
    g1.shape_ids = vec![ShapeId(5), ShapeId(42), ShapeId(5)];
    let mut g2 = Group::new(GroupId(10), "b");
    g2.shape_ids = vec![ShapeId(5)];

    let mut canvas = Canvas::from_parts(vec![first, second], vec![g1, g2]);

    assert_eq!(canvas.shape_count(), 2);
    assert_eq!(canvas.shapes()[0].id, ShapeId(5));
    assert_eq!(canvas.shapes()[0].vertices[0], Point::new(1.0, 0.0));
    assert!(canvas.shapes()[1].id.0 > 10);
    assert_eq!(canvas.groups()[0].shape_ids, vec![ShapeId(5)]);
    assert!(canvas.groups()[1].shape_ids.is_empty());
    assert!(canvas.selection().is_empty());
    let fresh = canvas.add_shape(point_shape(0.0, 0.0));
    assert!(fresh.0 > canvas.shapes()[1].id.0);
}

#[test]
fn test_missing_identity_is_silent_noop() {
    let mut canvas = Canvas::new();
    assert!(!canvas.select_by_id(ShapeId(3), false));
    assert!(!canvas.regenerate(ShapeId(3), ShapeMetadata::None));
    assert!(!canvas.set_color(ShapeId(3), Color::WHITE));
    assert!(!canvas.ungroup_shape(ShapeId(3)));
    assert!(!canvas.delete_group(GroupId(3)));
}
