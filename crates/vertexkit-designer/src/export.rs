//! Export boundary.
//!
//! Turning the scene into source text is done by an [`ExportGenerator`]
//! supplied by the host. The editor lends it the canvas immutably for the
//! duration of the call.

use crate::canvas::Canvas;

/// Namespace used when the project name sanitizes to nothing.
pub const DEFAULT_NAMESPACE: &str = "Assets";

/// Options passed to the export generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Emit human-readable comments next to each vertex buffer.
    pub include_comments: bool,
    /// Emit per-vertex colour data.
    pub include_colors: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            include_colors: false,
        }
    }
}

/// Produces export text from a scene.
pub trait ExportGenerator {
    fn generate_export(
        &self,
        namespace: &str,
        filename: &str,
        options: &ExportOptions,
        canvas: &Canvas,
    ) -> String;
}

/// Turns an arbitrary name into an identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_` and a leading digit
/// gets a `_` prefix. Blank input yields [`DEFAULT_NAMESPACE`].
pub fn sanitize_identifier(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_NAMESPACE.to_string();
    }
    let mut out = String::with_capacity(name.len() + 1);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        out.push('_');
    }
    out.extend(
        name.chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }),
    );
    out
}
