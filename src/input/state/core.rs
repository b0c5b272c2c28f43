//! Drawing state machine and session state.

use crate::config::Config;
use crate::draw::{
    Canvas, Color, Frame, ImagePlacement, Scene, ShapeKind, StrokeBuffer, UndoHistory,
    ViewTransform,
};
use crate::input::tool::CursorTool;
use crate::util::Point;

/// Current gesture state.
///
/// A gesture starts on pointer-down and ends on pointer-up or pointer-leave.
/// Each in-progress variant carries everything its commit needs, so changing
/// tools mid-gesture does not affect the gesture already underway.
#[derive(Debug)]
pub enum DrawingState {
    /// No gesture in progress
    Idle,
    /// Freehand stroke (pen, pencil or marker) being drawn
    DrawingFreehand {
        /// Points recorded so far, in model space
        buffer: StrokeBuffer,
    },
    /// Eraser dragged across the canvas; mutates the model on every move
    Erasing,
    /// Shape being dragged out
    DrawingShape {
        kind: ShapeKind,
        /// Model-space point where the pointer went down
        start: Point,
        /// Last model-space pointer position (start until the first move)
        last: Point,
        /// Color captured at pointer-down
        color: Color,
        /// Line width captured at pointer-down
        width: f64,
    },
    /// Cut region being marked
    Cutting {
        origin: Point,
        last: Point,
    },
    /// Imported image being dragged with the pointer tool
    DraggingImage {
        /// Pointer position relative to the image's top-left corner
        offset: Point,
    },
}

/// Main input state containing all drawing session state.
///
/// This is the single owner of the drawing model, undo history, image
/// placement and view transform. Every mutation and every render goes through
/// it, so redraws never observe a half-applied change.
pub struct InputState {
    /// Raster surface the session paints onto
    pub canvas: Canvas,
    /// Committed drawables in paint order
    pub frame: Frame,
    /// Snapshot stack for undo
    pub(crate) history: UndoHistory,
    /// Imported image, if any
    pub image: Option<ImagePlacement>,
    /// Current zoom
    pub transform: ViewTransform,
    /// Tool used by the next pointer-down
    pub cursor_tool: CursorTool,
    /// Shape drawn when the cursor tool is `Shape`
    pub shape_kind: ShapeKind,
    /// Current drawing color
    pub current_color: Color,
    /// Current line width; also the eraser radius
    pub current_width: f64,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Maximum number of drawables allowed in the model (0 = unlimited)
    pub max_drawables: usize,
}

impl InputState {
    /// Creates a session around an existing canvas.
    ///
    /// # Arguments
    /// * `canvas` - Surface to render onto
    /// * `color` - Initial drawing color
    /// * `width` - Initial line width in pixels
    /// * `cursor_tool` - Initially active tool
    /// * `shape_kind` - Initially active shape
    /// * `transform` - Initial zoom and zoom step
    /// * `max_drawables` - Drawable limit (0 = unlimited)
    pub fn with_defaults(
        canvas: Canvas,
        color: Color,
        width: f64,
        cursor_tool: CursorTool,
        shape_kind: ShapeKind,
        transform: ViewTransform,
        max_drawables: usize,
    ) -> Self {
        Self {
            canvas,
            frame: Frame::new(),
            history: UndoHistory::new(),
            image: None,
            transform,
            cursor_tool,
            shape_kind,
            current_color: color,
            current_width: width,
            state: DrawingState::Idle,
            max_drawables,
        }
    }

    /// Creates a session from validated configuration.
    ///
    /// # Errors
    /// Returns a Cairo error if the canvas surface cannot be allocated.
    pub fn from_config(config: &Config) -> Result<Self, cairo::Error> {
        let canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
        log::debug!(
            "Session canvas {}x{}, tool {:?}, zoom {:.2}",
            config.canvas.width,
            config.canvas.height,
            config.drawing.default_tool,
            config.view.initial_zoom
        );
        Ok(Self::with_defaults(
            canvas,
            config.drawing.default_color.to_color(),
            config.drawing.default_line_width,
            config.drawing.default_tool,
            config.drawing.default_shape,
            ViewTransform::new(config.view.initial_zoom, config.view.zoom_step),
            config.drawing.max_drawables,
        ))
    }

    /// Borrowed view of everything the render pipeline paints.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            frame: &self.frame,
            image: self.image.as_ref(),
            transform: &self.transform,
        }
    }

    /// Number of undo snapshots currently recorded.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether a gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, DrawingState::Idle)
    }

    /// Converts a device-space pointer position into model space.
    pub(crate) fn model_point(&self, x: f64, y: f64) -> Point {
        self.transform.to_model_space(x, y)
    }
}
