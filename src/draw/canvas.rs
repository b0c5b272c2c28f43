//! The raster surface the render pipeline paints onto.

/// Owned ARGB32 drawing surface.
///
/// Contexts are created per render pass and dropped afterwards so the canvas
/// keeps exclusive ownership of its pixels (required by [`Canvas::snapshot`]).
pub struct Canvas {
    surface: cairo::ImageSurface,
}

impl Canvas {
    /// Creates a transparent canvas of the given pixel size.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Creates a drawing context targeting this canvas.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        cairo::Context::new(&self.surface)
    }

    /// Copies the current pixel data (native-endian premultiplied ARGB32 rows).
    ///
    /// Returns `None` if a context or pattern still references the surface.
    pub fn snapshot(&mut self) -> Option<Vec<u8>> {
        self.surface.flush();
        self.surface.data().ok().map(|data| data.to_vec())
    }

    /// Alpha value of a single pixel, or `None` when out of bounds.
    pub fn alpha_at(&mut self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let stride = self.surface.stride() as usize;
        let pixels = self.snapshot()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = pixels.get(offset..offset + 4)?.try_into().ok()?;
        Some((u32::from_ne_bytes(bytes) >> 24) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let mut canvas = Canvas::new(16, 8).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (16, 8));
        let pixels = canvas.snapshot().expect("no outstanding contexts");
        assert!(pixels.iter().all(|b| *b == 0));
    }

    #[test]
    fn alpha_at_reports_painted_pixels() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        {
            let ctx = canvas.context().unwrap();
            ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
            ctx.rectangle(0.0, 0.0, 2.0, 2.0);
            ctx.fill().unwrap();
        }
        assert_eq!(canvas.alpha_at(1, 1), Some(255));
        assert_eq!(canvas.alpha_at(3, 3), Some(0));
        assert_eq!(canvas.alpha_at(4, 0), None);
    }
}
