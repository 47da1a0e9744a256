//! # VertexKit
//!
//! An interactive 2D vector shape editor. Users draw primitives on a
//! pan/zoom canvas in normalized device coordinates, edit individual
//! vertices and export the vertex buffers for OpenGL-style pipelines.
//!
//! ## Architecture
//!
//! VertexKit is organized as a workspace with multiple crates:
//!
//! 1. **vertexkit-core** - Errors, colours and shared constants
//! 2. **vertexkit-settings** - Editor settings and application configuration
//! 3. **vertexkit-designer** - Transform, generators, hit testing, scene
//!    model, tool state machine, storage and the display-list renderer
//! 4. **vertexkit** - Binary wiring configuration, storage and the editor

use anyhow::Context;
use tracing::{debug, info};

pub use vertexkit_core::{Color, Error, Result, StorageError};
pub use vertexkit_designer as designer;
pub use vertexkit_designer::{
    Canvas, DesignerState, DisplayListRenderer, Editor, FileProjectStore, InputEvent,
    MemoryProjectStore, Point, ProjectStore, SceneSnapshot, Shape, ShapeKind, Tool, Viewport,
};
pub use vertexkit_settings::{Config, EditorSettings, StorageSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Builds an editor from the configuration and reopens the last project.
///
/// Projects live under the configured directory (or the platform data
/// directory). The store's current marker wins over
/// `storage.last_project`.
pub fn open_editor(config: &Config) -> anyhow::Result<Editor> {
    let dir = config
        .storage
        .resolved_projects_dir()
        .context("Failed to resolve projects directory")?;
    let store = FileProjectStore::open(&dir)
        .with_context(|| format!("Failed to open project store at {}", dir.display()))?;
    debug!("Project store at {}", dir.display());

    let state = DesignerState::with_settings(config.editor.clone());
    let mut editor = Editor::new(
        state,
        Box::new(store),
        Box::new(DisplayListRenderer::new()),
    );

    if !editor.startup() {
        if let Some(name) = &config.storage.last_project {
            editor.open_project(name);
        }
    }
    info!(
        "Editing '{}' ({} shapes)",
        editor.project_name(),
        editor.state().canvas.shape_count()
    );
    Ok(editor)
}
