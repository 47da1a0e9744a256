use vertexkit_core::Color;
use vertexkit_designer::canvas::Group;
use vertexkit_designer::designer_state::{DesignerState, Tool};
use vertexkit_designer::model::{GroupId, Point, Shape, ShapeId, ShapeKind, Topology};
use vertexkit_designer::serialization::{SceneSnapshot, FILE_FORMAT_VERSION};

fn populated_state() -> DesignerState {
    let mut state = DesignerState::new();
    state.design_name = "Badge".to_string();
    state.set_tool(Tool::Circle);
    let down = state.event_at_logical(Point::new(0.0, 0.0), false);
    state.pointer_down(down);
    let up = state.event_at_logical(Point::new(0.25, 0.0), false);
    state.pointer_move(up);
    state.pointer_up(up);
    let id = state.canvas.shapes()[0].id;
    let (group, _) = state.add_group("outline");
    state.assign_to_group(id, group);
    state.set_shape_topology(id, Topology::LineLoop);
    state.viewport.set_zoom(2.0);
    state.viewport.set_pan(15.0, -4.0);
    state
}

#[test]
fn test_create_new_snapshot() {
    let snapshot = SceneSnapshot::new("Test Design");
    assert_eq!(snapshot.version, FILE_FORMAT_VERSION);
    assert_eq!(snapshot.metadata.name, "Test Design");
    assert!(snapshot.shapes.is_empty());
    assert_eq!(snapshot.viewport.zoom, 1.0);
}

#[test]
fn test_json_round_trip_preserves_scene() {
    let state = populated_state();
    let snapshot = state.snapshot();
    let json = snapshot.to_json().unwrap();
    let loaded = SceneSnapshot::from_json(&json).unwrap();
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.shapes[0].topology, Topology::LineLoop);
    assert_eq!(loaded.shapes[0].kind, ShapeKind::Circle);
}

#[test]
fn test_json_field_names() {
    let json = populated_state().snapshot().to_json().unwrap();
    assert!(json.contains("\"GL_LINE_LOOP\""));
    assert!(json.contains("\"circle\""));
    assert!(json.contains("\"outline\""));
    assert!(json.contains("\"pan_x\": 15.0"));
}

#[test]
fn test_restore_rebuilds_state() {
    let source = populated_state();
    let snapshot = source.snapshot();

    let mut state = DesignerState::new();
    state.restore(snapshot);
    assert_eq!(state.design_name, "Badge");
    assert_eq!(state.canvas.shapes(), source.canvas.shapes());
    assert_eq!(state.canvas.groups(), source.canvas.groups());
    assert_eq!(state.viewport.zoom(), 2.0);
    assert_eq!(state.viewport.pan_x(), 15.0);
    assert!(state.canvas.selection().is_empty());
    assert!(!state.is_modified);
}

#[test]
fn test_restore_advances_identity_generator() {
    let mut snapshot = SceneSnapshot::new("ids");
    let mut shape = Shape::new(ShapeKind::Point, vec![Point::new(0.0, 0.0)], Color::WHITE);
    shape.id = ShapeId(40);
    snapshot.shapes.push(shape);

    let mut state = DesignerState::new();
    state.restore(snapshot);
    state.set_tool(Tool::Point);
    let at = state.event_at_logical(Point::new(0.5, 0.5), false);
    state.pointer_down(at);
    assert!(state.canvas.shapes()[1].id > ShapeId(40));
}

#[test]
fn test_restore_sanitizes_loaded_data() {
    let mut snapshot = SceneSnapshot::new("dirty");
    snapshot.settings.circle_segments = 1;
    snapshot.settings.rounded_corner_radius = 3.0;
    snapshot.viewport.zoom = 50.0;
    let shape = Shape::new(ShapeKind::Line, vec![Point::new(-4.0, 0.0), Point::new(0.0, 9.0)], Color::WHITE);
    snapshot.shapes.push(shape);
    let mut group = Group::new(GroupId(2), "ghosts");
    group.shape_ids.push(ShapeId(99));
    snapshot.groups.push(group);

    let mut state = DesignerState::new();
    state.restore(snapshot);
    assert_eq!(state.settings.circle_segments, 3);
    assert_eq!(state.settings.rounded_corner_radius, 0.5);
    assert_eq!(state.viewport.zoom(), 4.0);
    assert_eq!(
        state.canvas.shapes()[0].vertices,
        vec![Point::new(-1.0, 0.0), Point::new(0.0, 1.0)]
    );
    assert!(state.canvas.groups()[0].shape_ids.is_empty());
}

#[test]
fn test_incompatible_version_rejected() {
    let mut snapshot = SceneSnapshot::new("future");
    snapshot.version = "2.0".to_string();
    let json = serde_json::to_string(&snapshot).unwrap();
    let err = SceneSnapshot::from_json(&json).unwrap_err();
    assert!(err.is_storage_error());

    snapshot.version = "1.4".to_string();
    assert!(snapshot.check_version().is_ok());
}

#[test]
fn test_missing_optional_sections_default() {
    let json = r#"{
        "version": "1.0",
        "metadata": {
            "name": "bare",
            "created": "2024-01-01T00:00:00Z",
            "modified": "2024-01-01T00:00:00Z"
        }
    }"#;
    let snapshot = SceneSnapshot::from_json(json).unwrap();
    assert!(snapshot.shapes.is_empty());
    assert!(snapshot.groups.is_empty());
    assert_eq!(snapshot.viewport.zoom, 1.0);
    assert_eq!(snapshot.settings.grid_divisions, 20);
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("badge.vkproj.json");

    let mut state = populated_state();
    state.mark_modified();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "badge.vkproj.json");

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.canvas.shapes(), state.canvas.shapes());
    assert_eq!(loaded.current_file_path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = DesignerState::new();
    assert!(state.load_from_file(dir.path().join("nope.json")).is_err());
}
