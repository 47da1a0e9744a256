//! Numeric constants shared by the geometry engine and its collaborators.

/// Lower bound of each logical (NDC) axis.
pub const NDC_MIN: f64 = -1.0;

/// Upper bound of each logical (NDC) axis.
pub const NDC_MAX: f64 = 1.0;

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.25;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 4.0;

/// Multiplier applied by the zoom-in / zoom-out commands.
pub const ZOOM_STEP: f64 = 1.2;

/// Wheel zoom factor when scrolling down (away from the user).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Wheel zoom factor when scrolling up.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Display-space distance under which a shape counts as hit.
pub const HIT_THRESHOLD: f64 = 10.0;

/// Display-space distance under which a vertex can be picked for editing.
pub const VERTEX_PICK_THRESHOLD: f64 = 15.0;

/// Logical offset applied to both axes of a duplicated shape.
pub const DUPLICATE_OFFSET: f64 = 0.05;

/// Project name used when the caller supplies a blank one.
pub const DEFAULT_PROJECT_NAME: &str = "untitled_project";

/// Clamps a single logical coordinate into the NDC range.
#[inline]
pub fn clamp_ndc(value: f64) -> f64 {
    value.clamp(NDC_MIN, NDC_MAX)
}
