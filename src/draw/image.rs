//! Placement of an imported background image.

use crate::util::{self, Point};
use std::fmt;

/// An imported raster positioned in model space.
///
/// The placement is computed once on import (auto-fit and centered) and is
/// afterwards only moved by dragging with the pointer tool.
#[derive(Clone)]
pub struct ImagePlacement {
    /// Decoded image pixels
    pub surface: cairo::ImageSurface,
    /// Left edge in model space
    pub x: f64,
    /// Top edge in model space
    pub y: f64,
    /// Painted width (may differ from the pixel width after auto-fit)
    pub width: f64,
    /// Painted height (may differ from the pixel height after auto-fit)
    pub height: f64,
}

impl ImagePlacement {
    /// Fits an image to a surface of `surface_width` x `surface_height` and centers it.
    ///
    /// Images larger than the surface in either dimension are scaled down by
    /// `min(sw / iw, sh / ih)`; smaller images keep their natural size.
    pub fn fit(surface: cairo::ImageSurface, surface_width: f64, surface_height: f64) -> Self {
        let (width, height) = fitted_size(
            surface.width() as f64,
            surface.height() as f64,
            surface_width,
            surface_height,
        );
        Self {
            surface,
            x: (surface_width - width) / 2.0,
            y: (surface_height - height) / 2.0,
            width,
            height,
        }
    }

    /// Whether a model-space point lies within the painted image bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Moves the image by a model-space delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl fmt::Debug for ImagePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePlacement")
            .field("pixels", &(self.surface.width(), self.surface.height()))
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Painted size of an image after auto-fit.
pub fn fitted_size(
    image_width: f64,
    image_height: f64,
    surface_width: f64,
    surface_height: f64,
) -> (f64, f64) {
    let scale = util::fit_scale(image_width, image_height, surface_width, surface_height);
    (image_width * scale, image_height * scale)
}
