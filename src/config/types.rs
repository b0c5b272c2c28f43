//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{FontDescriptor, ShapeKind};
use crate::input::CursorTool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state when a session starts. The UI (or a gesture
/// script) can change all of these at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a named color, a `#RRGGBB` hex string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default line width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Cursor tool selected at startup
    #[serde(default = "default_tool")]
    pub default_tool: CursorTool,

    /// Shape drawn when the shape tool is active
    #[serde(default = "default_shape")]
    pub default_shape: ShapeKind,

    /// Maximum number of drawables kept in the model (0 = unlimited)
    #[serde(default)]
    pub max_drawables: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_line_width: default_line_width(),
            default_tool: default_tool(),
            default_shape: default_shape(),
            max_drawables: 0,
        }
    }
}

/// Zoom settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ViewConfig {
    /// Amount added or removed per zoom step (valid range: 0.01 - 1.0)
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,

    /// Zoom factor at startup (valid range: 0.05 - 10.0)
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            initial_zoom: default_initial_zoom(),
        }
    }
}

/// Drawing surface dimensions.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Export settings (watermark, background, output location).
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Stamp the watermark text onto exported images
    #[serde(default = "default_watermark_enabled")]
    pub watermark_enabled: bool,

    /// Watermark text
    #[serde(default = "default_watermark_text")]
    pub watermark_text: String,

    /// Watermark font (family, weight, style)
    #[serde(default)]
    pub watermark_font: FontDescriptor,

    /// Watermark font size in points (valid range: 6.0 - 96.0)
    #[serde(default = "default_watermark_size")]
    pub watermark_size: f64,

    /// Distance of the watermark start from the right edge, in pixels
    #[serde(default = "default_watermark_offset_x")]
    pub watermark_offset_x: f64,

    /// Distance of the watermark baseline from the bottom edge, in pixels
    #[serde(default = "default_watermark_offset_y")]
    pub watermark_offset_y: f64,

    /// Watermark color; the current pen color is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark_color: Option<ColorSpec>,

    /// Background painted beneath the drawing; transparent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,

    /// Directory exported images are written to (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template (chrono format specifiers, no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            watermark_enabled: default_watermark_enabled(),
            watermark_text: default_watermark_text(),
            watermark_font: FontDescriptor::default(),
            watermark_size: default_watermark_size(),
            watermark_offset_x: default_watermark_offset_x(),
            watermark_offset_y: default_watermark_offset_y(),
            watermark_color: None,
            background: None,
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_line_width() -> f64 {
    2.0
}

fn default_tool() -> CursorTool {
    CursorTool::Pen
}

fn default_shape() -> ShapeKind {
    ShapeKind::Line
}

fn default_zoom_step() -> f64 {
    0.1
}

fn default_initial_zoom() -> f64 {
    1.0
}

fn default_canvas_width() -> i32 {
    800
}

fn default_canvas_height() -> i32 {
    600
}

fn default_watermark_enabled() -> bool {
    true
}

fn default_watermark_text() -> String {
    "© Your Mark".to_string()
}

fn default_watermark_size() -> f64 {
    20.0
}

fn default_watermark_offset_x() -> f64 {
    150.0
}

fn default_watermark_offset_y() -> f64 {
    20.0
}

fn default_save_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
