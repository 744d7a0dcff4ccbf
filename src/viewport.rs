//! Meters-to-pixels mapping for embedding hosts
//!
//! The host owns its canvas and event loop; this module only does the
//! arithmetic that positions a marker: the drop height spans 80% of the
//! canvas (20% headroom above the apex), the ground sits 10% up from the
//! bottom, and screen y grows downward.

/// Derived display parameters for one canvas size and drop height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    pixels_per_meter: f64,
    ground_y: f64,
}

impl Viewport {
    /// Compute scale and baseline for a canvas in pixels
    ///
    /// `max_height` is the drop height the canvas must fit; a degenerate
    /// zero height maps one meter to the usable band so the ground line
    /// still lands sensibly.
    pub fn new(canvas_width: f64, canvas_height: f64, max_height: f64) -> Self {
        let span = if max_height > 0.0 { max_height } else { 1.0 };
        Self {
            width: canvas_width,
            pixels_per_meter: (canvas_height * 0.8) / span,
            ground_y: canvas_height * 0.9,
        }
    }

    /// Screen y for an altitude in meters
    pub fn ball_y(&self, height: f64) -> f64 {
        self.ground_y - height * self.pixels_per_meter
    }

    /// Horizontal center of the canvas (the ball's fixed x)
    pub fn ball_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Screen y of the ground line
    pub fn ground_y(&self) -> f64 {
        self.ground_y
    }

    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_meter
    }
}
