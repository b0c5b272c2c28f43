//! Utility functions for colors and model-space geometry.
//!
//! This module provides:
//! - Color name / hex parsing used by the config file and gesture scripts
//! - The model-space [`Point`] and device-to-model conversion
//! - Shape geometry helpers (circle radius, square side, normalized rectangles)
//! - Image auto-fit calculation

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a color given either as a palette name or as `#RRGGBB` hex.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        Color::from_hex(value)
    } else {
        name_to_color(value)
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A position in model space (zoom already divided out).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Converts device-space pointer coordinates into model space.
///
/// `zoom` must be strictly positive; [`crate::draw::ViewTransform`] guarantees this.
pub fn to_model_space(device_x: f64, device_y: f64, zoom: f64) -> Point {
    Point::new(device_x / zoom, device_y / zoom)
}

/// Radius of a circle dragged from its center `start` to `end`.
pub fn circle_radius(start: Point, end: Point) -> f64 {
    start.distance_to(end)
}

/// Side of a square anchored at `start`: the shorter of the two drag extents.
pub fn square_side(start: Point, end: Point) -> f64 {
    (end.x - start.x).abs().min((end.y - start.y).abs())
}

/// Normalizes a rectangle with possibly negative extents.
///
/// # Returns
/// Tuple `(x, y, width, height)` with non-negative width and height.
pub fn normalize_rect(x: f64, y: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
    let (x, w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
    let (y, h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };
    (x, y, w, h)
}

/// Scale factor that fits an image inside a surface.
///
/// Images that already fit are left at their natural size (scale 1.0); larger
/// images are shrunk uniformly until both dimensions fit.
pub fn fit_scale(image_width: f64, image_height: f64, surface_width: f64, surface_height: f64) -> f64 {
    if image_width > surface_width || image_height > surface_height {
        (surface_width / image_width).min(surface_height / image_height)
    } else {
        1.0
    }
}
