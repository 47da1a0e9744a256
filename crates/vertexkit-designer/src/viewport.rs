//! Viewport and coordinate transformation for canvas rendering.
//!
//! Maps logical (NDC) coordinates in `[-1, 1]` onto the display surface and
//! back. The logical origin sits at the centre of the surface shifted by the
//! pan offset; one logical unit spans half of the shorter surface side at
//! zoom 1. Logical Y grows upwards, display Y grows downwards.

use std::fmt;

use vertexkit_core::constants::{MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, ZOOM_STEP};

use crate::model::Point;

/// Represents the viewport transformation state (zoom, pan, surface size).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    pan_anchor: Option<Point>,
}

impl Viewport {
    /// Creates a viewport for a surface of the given size, unzoomed and centred.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
            pan_anchor: None,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the surface dimensions (called whenever the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// `false` while the surface has a zero-sized side; the transform is
    /// undefined until then.
    pub fn has_surface(&self) -> bool {
        self.canvas_width.min(self.canvas_height) > 0.0
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to `[0.25, 4.0]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Applies one mouse-wheel notch: scrolling down zooms out.
    pub fn zoom_wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.set_zoom(self.zoom * factor);
    }

    /// Zoom as a rounded percentage for status displays.
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset in display units.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a display-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Starts a pan gesture at a display position.
    pub fn begin_pan(&mut self, screen: Point) {
        self.pan_anchor = Some(screen);
    }

    /// Continues a pan gesture; returns `false` when no gesture is active.
    pub fn pan_to(&mut self, screen: Point) -> bool {
        match self.pan_anchor {
            Some(anchor) => {
                self.pan_by(screen.x - anchor.x, screen.y - anchor.y);
                self.pan_anchor = Some(screen);
                true
            }
            None => false,
        }
    }

    /// Ends a pan gesture; returns whether one was active.
    pub fn end_pan(&mut self) -> bool {
        self.pan_anchor.take().is_some()
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Resets zoom to 1.0 and pan to the origin.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.pan_anchor = None;
    }

    /// Display units per logical unit.
    pub fn scale(&self) -> f64 {
        debug_assert!(self.has_surface(), "viewport used before the surface has a size");
        self.canvas_width.min(self.canvas_height) / 2.0 * self.zoom
    }

    fn origin(&self) -> (f64, f64) {
        (
            self.canvas_width / 2.0 + self.pan_x,
            self.canvas_height / 2.0 + self.pan_y,
        )
    }

    /// Converts a logical point to display coordinates.
    pub fn logical_to_pixel(&self, logical: Point) -> Point {
        let (cx, cy) = self.origin();
        let scale = self.scale();
        Point::new(cx + logical.x * scale, cy - logical.y * scale)
    }

    /// Converts display coordinates to a logical point without snapping or
    /// clamping; the exact inverse of [`Viewport::logical_to_pixel`].
    pub fn pixel_to_logical_raw(&self, screen: Point) -> Point {
        let (cx, cy) = self.origin();
        let scale = self.scale();
        Point::new((screen.x - cx) / scale, -(screen.y - cy) / scale)
    }

    /// Converts display coordinates to a logical point, optionally snapping
    /// to a grid with `snap_divisions` lines per half axis, then clamping
    /// into `[-1, 1]`.
    pub fn pixel_to_logical(&self, screen: Point, snap_divisions: Option<u32>) -> Point {
        let mut p = self.pixel_to_logical_raw(screen);
        if let Some(divisions) = snap_divisions.filter(|d| *d > 0) {
            let step = 2.0 / f64::from(divisions);
            p = Point::new(snap(p.x, step), snap(p.y, step));
        }
        p.clamped()
    }
}

fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}
