//! Viewport and settings controls for designer state.

use tracing::warn;
use vertexkit_settings::EditorSettings;

use super::{DesignerState, Outcome};
use crate::model::Point;

impl DesignerState {
    pub fn zoom_in(&mut self) -> Outcome {
        self.viewport.zoom_in();
        Outcome::redraw()
    }

    pub fn zoom_out(&mut self) -> Outcome {
        self.viewport.zoom_out();
        Outcome::redraw()
    }

    /// Zoom 100% and pan back to the centre.
    pub fn reset_view(&mut self) -> Outcome {
        self.viewport.reset();
        Outcome::redraw()
    }

    /// Resizes the display surface.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Outcome {
        self.viewport.set_canvas_size(width, height);
        Outcome::redraw()
    }

    /// Middle button pressed.
    pub fn begin_pan(&mut self, screen: Point) -> Outcome {
        self.viewport.begin_pan(screen);
        Outcome::none()
    }

    /// Pointer moved while the middle button is held; pans by the raw delta.
    pub fn pan_to(&mut self, screen: Point) -> Outcome {
        if self.viewport.pan_to(screen) {
            Outcome::redraw()
        } else {
            Outcome::none()
        }
    }

    /// Middle button released.
    pub fn end_pan(&mut self) -> Outcome {
        self.viewport.end_pan();
        Outcome::none()
    }

    pub fn is_panning(&self) -> bool {
        self.viewport.is_panning()
    }

    pub fn toggle_grid(&mut self) -> Outcome {
        self.settings.show_grid = !self.settings.show_grid;
        Outcome::commit()
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) -> Outcome {
        self.settings.snap_to_grid = enabled;
        Outcome::commit()
    }

    /// Replaces the settings. Invalid values are forced into range.
    pub fn update_settings(&mut self, settings: EditorSettings) -> Outcome {
        if let Err(e) = settings.validate() {
            warn!("Settings adjusted: {}", e);
        }
        self.settings = settings.sanitized();
        Outcome::commit()
    }
}
