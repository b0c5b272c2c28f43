//! Off-screen export composition.
//!
//! Exports are rendered onto a fresh surface rather than the live canvas, so
//! the watermark only ever appears in the exported bytes.

use super::types::ExportError;
use crate::config::ExportConfig;
use crate::draw::render::{self, Scene};
use crate::draw::{Color, FontDescriptor};

/// Watermark text stamped near the bottom-right corner of an export.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkStyle {
    pub text: String,
    pub font: FontDescriptor,
    pub size: f64,
    /// Distance of the text start from the right edge
    pub offset_x: f64,
    /// Distance of the baseline from the bottom edge
    pub offset_y: f64,
    /// Text color; the pen color is used when `None`
    pub color: Option<Color>,
}

impl WatermarkStyle {
    /// Baseline origin of the watermark on a `width` x `height` surface.
    pub fn origin(&self, width: i32, height: i32) -> (f64, f64) {
        (width as f64 - self.offset_x, height as f64 - self.offset_y)
    }
}

/// Options controlling export composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// Watermark to stamp, if any
    pub watermark: Option<WatermarkStyle>,
    /// Background painted beneath the drawing; transparent when `None`
    pub background: Option<Color>,
}

impl ExportOptions {
    /// Builds export options from the `[export]` config section.
    pub fn from_config(config: &ExportConfig) -> Self {
        let watermark = config.watermark_enabled.then(|| WatermarkStyle {
            text: config.watermark_text.clone(),
            font: config.watermark_font.clone(),
            size: config.watermark_size,
            offset_x: config.watermark_offset_x,
            offset_y: config.watermark_offset_y,
            color: config.watermark_color.as_ref().map(|spec| spec.to_color()),
        });
        Self {
            watermark,
            background: config.background.as_ref().map(|spec| spec.to_color()),
        }
    }
}

/// Renders the scene plus watermark off-screen and encodes it as PNG.
///
/// # Arguments
/// * `scene` - Model, image placement and zoom to render
/// * `width` / `height` - Output size in pixels (the live canvas size)
/// * `options` - Watermark and background settings
/// * `pen_color` - Current pen color, used for a watermark without its own color
///
/// # Errors
/// Returns [`ExportError::Surface`] if the off-screen surface cannot be created
/// and [`ExportError::Encode`] if PNG serialization fails.
pub fn export_png(
    scene: &Scene<'_>,
    width: i32,
    height: i32,
    options: &ExportOptions,
    pen_color: Color,
) -> Result<Vec<u8>, ExportError> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        compose(&ctx, scene, width, height, options, pen_color)?;
    }
    surface.flush();

    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    log::info!(
        "Exported {}x{} image ({} bytes, {} drawables)",
        width,
        height,
        buffer.len(),
        scene.frame.len()
    );
    Ok(buffer)
}

fn compose(
    ctx: &cairo::Context,
    scene: &Scene<'_>,
    width: i32,
    height: i32,
    options: &ExportOptions,
    pen_color: Color,
) -> Result<(), cairo::Error> {
    if let Some(background) = options.background {
        background.apply(ctx);
        ctx.paint()?;
    }

    // Cut regions clear within their own group so the background survives
    ctx.push_group();
    render::render_scene(ctx, scene)?;
    ctx.pop_group_to_source()?;
    ctx.paint()?;

    if let Some(watermark) = &options.watermark {
        let (x, y) = watermark.origin(width, height);
        render::render_watermark(
            ctx,
            &watermark.text,
            &watermark.font,
            watermark.size,
            watermark.color.unwrap_or(pen_color),
            x,
            y,
        );
    }
    Ok(())
}
