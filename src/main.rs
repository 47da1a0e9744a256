use anyhow::Context;
use tracing::info;
use vertexkit::{init_logging, open_editor, Config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("VertexKit {} (built {})", VERSION, BUILD_DATE);

    let config_path = Config::default_path()?;
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let mut editor = open_editor(&config)?;
    if let Some(name) = std::env::args().nth(1) {
        if !editor.open_project(&name) {
            editor.new_project(&name);
        }
    }

    let state = editor.state();
    info!(
        "{}: {} shapes, {} groups, {}",
        state.display_name(),
        state.canvas.shape_count(),
        state.canvas.groups().len(),
        state.viewport
    );
    for shape in state.canvas.shapes() {
        info!(
            "  {} {} [{}] {} vertices",
            shape.name,
            shape.kind,
            shape.topology,
            shape.vertices.len()
        );
    }

    Ok(())
}
