//! View transform (uniform zoom) between device and model space.

use crate::util::{self, Point};

/// Uniform zoom applied to both axes when painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    step: f64,
}

impl ViewTransform {
    /// Creates a transform with the given starting zoom and step.
    ///
    /// Non-positive values fall back to 1.0 / 0.1 so the zoom can never
    /// divide by zero.
    pub fn new(zoom: f64, step: f64) -> Self {
        let zoom = if zoom > 0.0 { zoom } else { 1.0 };
        let step = if step > 0.0 { step } else { 0.1 };
        Self { zoom, step }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Increases zoom by one step.
    pub fn zoom_in(&mut self) {
        self.zoom += self.step;
        log::debug!("Zoom in -> {:.2}", self.zoom);
    }

    /// Decreases zoom by one step while the zoom is still above the step.
    ///
    /// Returns `false` when the zoom was left unchanged. Repeated calls settle
    /// in `(0, step]`.
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom > self.step {
            self.zoom -= self.step;
            log::debug!("Zoom out -> {:.2}", self.zoom);
            true
        } else {
            log::debug!("Zoom out ignored at {:.2} (step {:.2})", self.zoom, self.step);
            false
        }
    }

    /// Converts device coordinates to model space under the current zoom.
    pub fn to_model_space(&self, device_x: f64, device_y: f64) -> Point {
        util::to_model_space(device_x, device_y, self.zoom)
    }

    /// Scales a Cairo context so model-space drawing lands in device space.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.scale(self.zoom, self.zoom);
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(1.0, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_in_adds_step() {
        let mut transform = ViewTransform::new(1.0, 0.25);
        transform.zoom_in();
        assert_eq!(transform.zoom(), 1.25);
    }

    #[test]
    fn zoom_out_stops_inside_step_interval() {
        let mut transform = ViewTransform::new(0.15, 0.1);
        assert!(transform.zoom_out());
        let settled = transform.zoom();
        assert!(settled > 0.0 && settled <= 0.1);

        for _ in 0..5 {
            assert!(!transform.zoom_out());
        }
        assert_eq!(transform.zoom(), settled);
    }

    #[test]
    fn repeated_zoom_out_never_reaches_zero() {
        let mut transform = ViewTransform::new(1.0, 0.1);
        for _ in 0..100 {
            transform.zoom_out();
        }
        assert!(transform.zoom() > 0.0);
        assert!(transform.zoom() <= transform.step());
    }

    #[test]
    fn model_space_round_trips_through_zoom() {
        let transform = ViewTransform::new(1.7, 0.1);
        let p = transform.to_model_space(85.0, 34.0);
        assert!((p.x * transform.zoom() - 85.0).abs() < 1e-9);
        assert!((p.y * transform.zoom() - 34.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_parameters_fall_back_to_defaults() {
        let transform = ViewTransform::new(0.0, -1.0);
        assert_eq!(transform.zoom(), 1.0);
        assert_eq!(transform.step(), 0.1);
    }
}
