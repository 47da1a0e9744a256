//! # VertexKit Designer
//!
//! The interactive geometry engine behind VertexKit: users draw primitives
//! on a pan/zoom canvas, edit their vertices and export the resulting vertex
//! buffers.
//!
//! ## Core Components
//!
//! - **Viewport**: logical (NDC) to display transform with grid snapping
//! - **Model**: shapes, kinds, topologies and the parametric generators
//!   (rectangle, rounded rectangle, circle, polygon)
//! - **Hit Testing**: display-space predicates per shape kind
//! - **Canvas**: the scene model (shapes, groups, selection)
//! - **Designer State**: the tool state machine driven by pointer events
//! - **Editor**: event loop wiring the designer to storage and rendering
//!
//! ## Architecture
//!
//! ```text
//! InputEvent
//!   └── Editor
//!         ├── Viewport (display -> logical, snapping)
//!         ├── DesignerState (tool session, preview)
//!         │     ├── Generators / Hit testing
//!         │     └── Canvas (shapes, groups, selection)
//!         ├── ProjectStore (save after committing mutations)
//!         └── Renderer (display list after visible changes)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vertexkit_designer::{DesignerState, Point, Tool};
//!
//! let mut state = DesignerState::new();
//! state.set_tool(Tool::Rectangle);
//! let down = state.event_at_logical(Point::new(-0.5, -0.5), false);
//! let drag = state.event_at_logical(Point::new(0.5, 0.5), false);
//! state.pointer_down(down);
//! state.pointer_move(drag);
//! state.pointer_up(drag);
//! assert_eq!(state.canvas.shape_count(), 1);
//! ```

pub mod canvas;
pub mod designer_state;
pub mod editor;
pub mod export;
pub mod model;
pub mod persistence;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;
pub mod viewport;

pub use canvas::{Canvas, Group};
pub use designer_state::{DesignerState, Outcome, PointerEvent, Tool, ToolSession};
pub use editor::{Editor, InputEvent, Key, PointerButton};
pub use export::{sanitize_identifier, ExportGenerator, ExportOptions};
pub use hit_test::{hit_test, nearest_vertex};
pub use model::{
    GroupId, IdGenerator, Point, Shape, ShapeId, ShapeKind, ShapeMetadata, Topology,
};
pub use persistence::{FileProjectStore, MemoryProjectStore, ProjectStore};
pub use renderer::{DisplayList, DisplayListRenderer, DrawCommand, Frame, Renderer};
pub use selection_manager::SelectionManager;
pub use serialization::SceneSnapshot;
pub use viewport::Viewport;
