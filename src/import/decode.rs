//! Decoding image bytes into Cairo-compatible pixels.

use super::types::ImportError;

/// Largest dimension Cairo image surfaces accept.
const MAX_DIMENSION: u32 = 32767;

/// Fully decoded image in Cairo's native ARGB32 layout (premultiplied alpha).
///
/// Plain owned bytes, so it can cross from the decode task to the thread that
/// owns the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: i32,
    pub height: i32,
    pub stride: i32,
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Wraps the pixels in a Cairo surface.
    pub fn into_surface(self) -> Result<cairo::ImageSurface, ImportError> {
        let surface = cairo::ImageSurface::create_for_data(
            self.data,
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?;
        Ok(surface)
    }
}

/// Decodes PNG/JPEG/BMP/GIF bytes.
///
/// # Errors
/// Returns [`ImportError::Decode`] for corrupt or unsupported data and
/// [`ImportError::TooLarge`] when the image exceeds Cairo's size limit.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImportError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ImportError::TooLarge { width, height });
    }

    let stride = cairo::Format::ARgb32.stride_for_width(width)?;
    let mut data = vec![0u8; stride as usize * height as usize];

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let premultiply = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
        let argb = (a as u32) << 24
            | (premultiply(r) as u32) << 16
            | (premultiply(g) as u32) << 8
            | premultiply(b) as u32;
        let offset = y as usize * stride as usize + x as usize * 4;
        data[offset..offset + 4].copy_from_slice(&argb.to_ne_bytes());
    }

    log::debug!("Decoded {}x{} image ({} bytes)", width, height, bytes.len());

    Ok(DecodedImage {
        width: width as i32,
        height: height as i32,
        stride,
        data,
    })
}
