use super::*;
use crate::config::Config;
use crate::draw::{BLACK, Canvas, Drawable, RED, ShapeKind, StrokeKind, ViewTransform};
use crate::export::ExportOptions;
use crate::input::{CursorTool, PointerEvent};
use crate::util::Point;

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        Canvas::new(100, 100).unwrap(),
        BLACK,
        2.0, // width
        CursorTool::Pen,
        ShapeKind::Line,
        ViewTransform::default(),
        0, // unlimited
    )
}

fn drag(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.handle_pointer(PointerEvent::Down {
        x: from.0,
        y: from.1,
    });
    state.handle_pointer(PointerEvent::Move { x: to.0, y: to.1 });
    state.handle_pointer(PointerEvent::Up);
}

fn draw_shape(state: &mut InputState, kind: ShapeKind, from: (f64, f64), to: (f64, f64)) {
    state.set_shape_tool(kind);
    drag(state, from, to);
}

fn solid_image(width: i32, height: i32) -> cairo::ImageSurface {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    {
        let ctx = cairo::Context::new(&surface).unwrap();
        ctx.set_source_rgb(0.0, 0.0, 1.0);
        ctx.paint().unwrap();
    }
    surface
}

#[test]
fn test_line_scenario() {
    let mut state = create_test_input_state();
    state.set_shape_tool(ShapeKind::Line);
    assert_eq!(state.cursor_tool, CursorTool::Shape);

    drag(&mut state, (10.0, 10.0), (50.0, 50.0));

    assert_eq!(
        state.frame.drawables,
        vec![Drawable::Shape {
            kind: ShapeKind::Line,
            start: Point::new(10.0, 10.0),
            end: Point::new(50.0, 50.0),
            color: BLACK,
            line_width: 2.0,
        }]
    );
    assert_eq!(state.history_len(), 1);
    assert!(state.is_idle());
}

#[test]
fn test_circle_and_square_geometry() {
    let mut state = create_test_input_state();
    draw_shape(&mut state, ShapeKind::Circle, (0.0, 0.0), (3.0, 4.0));
    draw_shape(&mut state, ShapeKind::Square, (0.0, 0.0), (10.0, 4.0));

    assert_eq!(state.frame.drawables[0].radius(), Some(5.0));
    assert_eq!(state.frame.drawables[1].side(), Some(4.0));
}

#[test]
fn test_shape_without_move_ends_at_start() {
    let mut state = create_test_input_state();
    state.set_shape_tool(ShapeKind::Rectangle);
    state.handle_pointer(PointerEvent::Down { x: 20.0, y: 30.0 });
    state.handle_pointer(PointerEvent::Up);

    match &state.frame.drawables[0] {
        Drawable::Shape { start, end, .. } => assert_eq!(start, end),
        other => panic!("expected shape, got {other:?}"),
    }
}

#[test]
fn test_pointer_coordinates_are_divided_by_zoom() {
    let mut state = create_test_input_state();
    state.transform = ViewTransform::new(2.0, 0.1);
    draw_shape(&mut state, ShapeKind::Line, (20.0, 40.0), (60.0, 80.0));

    match &state.frame.drawables[0] {
        Drawable::Shape { start, end, .. } => {
            assert_eq!(*start, Point::new(10.0, 20.0));
            assert_eq!(*end, Point::new(30.0, 40.0));
        }
        other => panic!("expected shape, got {other:?}"),
    }
}

#[test]
fn test_freehand_stroke_records_points_and_style() {
    let mut state = create_test_input_state();
    state.set_cursor_tool(CursorTool::Marker);
    state.set_color(RED);
    state.set_line_width(4.0);

    state.handle_pointer(PointerEvent::Down { x: 10.0, y: 10.0 });
    state.handle_pointer(PointerEvent::Move { x: 20.0, y: 10.0 });
    state.handle_pointer(PointerEvent::Move { x: 30.0, y: 15.0 });
    state.handle_pointer(PointerEvent::Leave);

    assert_eq!(
        state.frame.drawables,
        vec![Drawable::Freehand {
            kind: StrokeKind::Marker,
            color: RED,
            base_width: 4.0,
            points: vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(30.0, 15.0)
            ],
        }]
    );
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_single_click_stroke_is_committed() {
    let mut state = create_test_input_state();
    state.handle_pointer(PointerEvent::Down { x: 5.0, y: 5.0 });
    state.handle_pointer(PointerEvent::Up);
    assert_eq!(state.frame.len(), 1);
}

#[test]
fn test_gesture_keeps_its_starting_tool() {
    let mut state = create_test_input_state();
    state.handle_pointer(PointerEvent::Down { x: 5.0, y: 5.0 });
    state.set_cursor_tool(CursorTool::Cut);
    state.handle_pointer(PointerEvent::Move { x: 15.0, y: 5.0 });
    state.handle_pointer(PointerEvent::Up);

    assert!(matches!(
        state.frame.drawables[0],
        Drawable::Freehand {
            kind: StrokeKind::Pen,
            ..
        }
    ));
}

#[test]
fn test_up_and_leave_without_down_are_noops() {
    let mut state = create_test_input_state();
    state.handle_pointer(PointerEvent::Up);
    state.handle_pointer(PointerEvent::Leave);
    state.handle_pointer(PointerEvent::Move { x: 10.0, y: 10.0 });

    assert!(state.frame.is_empty());
    assert_eq!(state.history_len(), 0);
    assert!(state.is_idle());
}

#[test]
fn test_undo_on_empty_history_is_idempotent() {
    let mut state = create_test_input_state();
    for _ in 0..3 {
        state.undo();
        assert!(state.frame.is_empty());
        assert_eq!(state.history_len(), 0);
    }
}

#[test]
fn test_commit_and_undo_round_trip() {
    let mut state = create_test_input_state();
    for i in 0..5 {
        let offset = i as f64 * 10.0;
        draw_shape(
            &mut state,
            ShapeKind::Line,
            (offset, 0.0),
            (offset, 50.0),
        );
    }
    let committed = state.frame.drawables.clone();
    assert_eq!(state.history_len(), 5);

    state.undo();
    state.undo();
    assert_eq!(state.frame.drawables, committed[..3]);
    assert_eq!(state.history_len(), 3);

    for _ in 0..3 {
        state.undo();
    }
    assert!(state.frame.is_empty());
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_eraser_removes_points_without_undo_entry() {
    let mut state = create_test_input_state();
    state.set_cursor_tool(CursorTool::Pen);
    state.handle_pointer(PointerEvent::Down { x: 10.0, y: 50.0 });
    for x in [20.0, 30.0, 40.0, 50.0, 60.0] {
        state.handle_pointer(PointerEvent::Move { x, y: 50.0 });
    }
    state.handle_pointer(PointerEvent::Up);
    assert_eq!(state.history_len(), 1);

    state.set_cursor_tool(CursorTool::Eraser);
    state.set_line_width(6.0);
    state.handle_pointer(PointerEvent::Down { x: 30.0, y: 50.0 });
    state.handle_pointer(PointerEvent::Move { x: 30.0, y: 52.0 });
    state.handle_pointer(PointerEvent::Up);

    match &state.frame.drawables[0] {
        Drawable::Freehand { points, .. } => {
            assert!(
                points
                    .iter()
                    .all(|p| p.distance_to(Point::new(30.0, 52.0)) > 6.0)
            );
            assert_eq!(points.len(), 5);
        }
        other => panic!("expected freehand, got {other:?}"),
    }
    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_eraser_leaves_shapes_alone() {
    let mut state = create_test_input_state();
    draw_shape(&mut state, ShapeKind::Line, (0.0, 50.0), (100.0, 50.0));
    let before = state.frame.drawables.clone();

    state.set_cursor_tool(CursorTool::Eraser);
    drag(&mut state, (50.0, 50.0), (0.0, 50.0));
    assert_eq!(state.frame.drawables, before);
}

#[test]
fn test_eraser_paints_nothing_on_empty_canvas() {
    let mut state = create_test_input_state();
    state.set_cursor_tool(CursorTool::Eraser);
    state.handle_pointer(PointerEvent::Down { x: 20.0, y: 80.0 });
    state.handle_pointer(PointerEvent::Move { x: 80.0, y: 80.0 });

    assert!(matches!(state.state, DrawingState::Erasing));
    assert_eq!(state.canvas.alpha_at(50, 80), Some(0));

    state.handle_pointer(PointerEvent::Up);
    assert!(state.is_idle());
    assert_eq!(state.canvas.alpha_at(50, 80), Some(0));
    assert!(state.frame.is_empty());
}

#[test]
fn test_eraser_drag_leaves_shape_pixels_unchanged() {
    let mut state = create_test_input_state();
    draw_shape(&mut state, ShapeKind::Line, (0.0, 20.0), (100.0, 20.0));
    let before = state.canvas.snapshot().unwrap();
    assert_eq!(state.canvas.alpha_at(50, 20), Some(255));

    state.set_cursor_tool(CursorTool::Eraser);
    state.handle_pointer(PointerEvent::Down { x: 40.0, y: 20.0 });
    state.handle_pointer(PointerEvent::Move { x: 50.0, y: 20.0 });
    assert_eq!(state.canvas.snapshot().unwrap(), before);

    state.handle_pointer(PointerEvent::Move { x: 60.0, y: 20.0 });
    state.handle_pointer(PointerEvent::Up);
    assert_eq!(state.canvas.snapshot().unwrap(), before);
}

#[test]
fn test_cut_clears_pixels_and_undo_restores_them() {
    let mut state = create_test_input_state();
    state.set_cursor_tool(CursorTool::Marker);
    state.set_line_width(10.0);
    drag(&mut state, (0.0, 50.0), (100.0, 50.0));
    assert!(state.canvas.alpha_at(50, 50).unwrap() > 0);

    state.set_cursor_tool(CursorTool::Cut);
    drag(&mut state, (60.0, 70.0), (40.0, 30.0));
    match &state.frame.drawables[1] {
        Drawable::Cut {
            origin,
            width,
            height,
        } => {
            assert_eq!(*origin, Point::new(60.0, 70.0));
            assert_eq!((*width, *height), (-20.0, -40.0));
        }
        other => panic!("expected cut, got {other:?}"),
    }
    assert_eq!(state.canvas.alpha_at(50, 50), Some(0));
    assert!(state.canvas.alpha_at(10, 50).unwrap() > 0);
    assert_eq!(state.history_len(), 2);

    state.undo();
    assert!(state.canvas.alpha_at(50, 50).unwrap() > 0);
}

#[test]
fn test_shape_preview_is_painted_but_not_committed() {
    let mut state = create_test_input_state();
    state.set_shape_tool(ShapeKind::Line);
    state.handle_pointer(PointerEvent::Down { x: 0.0, y: 50.0 });
    state.handle_pointer(PointerEvent::Move { x: 100.0, y: 50.0 });

    assert!(state.frame.is_empty());
    assert!(state.canvas.alpha_at(50, 50).unwrap() > 0);
}

#[test]
fn test_zoom_out_stays_positive() {
    let mut state = create_test_input_state();
    state.transform = ViewTransform::new(0.15, 0.1);
    for _ in 0..10 {
        state.zoom_out();
    }
    let zoom = state.transform.zoom();
    assert!(zoom > 0.0 && zoom <= 0.1 + 1e-9);

    state.zoom_in();
    assert!((state.transform.zoom() - (zoom + 0.1)).abs() < 1e-9);
}

#[test]
fn test_set_image_fits_and_centers() {
    let mut state = InputState::with_defaults(
        Canvas::new(800, 600).unwrap(),
        BLACK,
        2.0,
        CursorTool::Pen,
        ShapeKind::Line,
        ViewTransform::default(),
        0,
    );
    state.set_image(solid_image(1600, 600));

    let image = state.image.as_ref().unwrap();
    assert_eq!((image.width, image.height), (800.0, 300.0));
    assert_eq!((image.x, image.y), (0.0, 150.0));
    assert_eq!(state.canvas.alpha_at(400, 300), Some(255));
    assert_eq!(state.canvas.alpha_at(400, 100), Some(0));
}

#[test]
fn test_pointer_drags_image_without_undo_entry() {
    let mut state = create_test_input_state();
    state.set_image(solid_image(20, 20));
    assert_eq!(state.image.as_ref().map(|i| (i.x, i.y)), Some((40.0, 40.0)));

    state.set_cursor_tool(CursorTool::Pointer);
    drag(&mut state, (45.0, 45.0), (15.0, 55.0));

    let image = state.image.as_ref().unwrap();
    assert_eq!((image.x, image.y), (10.0, 50.0));
    assert_eq!(state.history_len(), 0);
    assert!(state.is_idle());
}

#[test]
fn test_pointer_down_outside_image_stays_idle() {
    let mut state = create_test_input_state();
    state.set_cursor_tool(CursorTool::Pointer);
    state.handle_pointer(PointerEvent::Down { x: 5.0, y: 5.0 });
    assert!(state.is_idle());

    state.set_image(solid_image(20, 20));
    state.handle_pointer(PointerEvent::Down { x: 5.0, y: 5.0 });
    assert!(state.is_idle());
}

#[test]
fn test_invalid_line_width_is_ignored() {
    let mut state = create_test_input_state();
    state.set_line_width(0.0);
    state.set_line_width(-3.0);
    state.set_line_width(f64::NAN);
    assert_eq!(state.current_width, 2.0);
}

#[test]
fn test_drawable_limit_discards_commit() {
    let mut state = create_test_input_state();
    state.max_drawables = 1;
    draw_shape(&mut state, ShapeKind::Line, (0.0, 0.0), (10.0, 10.0));
    draw_shape(&mut state, ShapeKind::Line, (0.0, 0.0), (20.0, 20.0));

    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_export_leaves_live_canvas_untouched() {
    let mut state = create_test_input_state();
    draw_shape(&mut state, ShapeKind::Line, (0.0, 50.0), (100.0, 50.0));
    let before = state.canvas.snapshot().unwrap();

    let mut config = Config::default();
    config.export.watermark_offset_x = 90.0;
    config.export.watermark_offset_y = 10.0;
    let png = state
        .export_png(&ExportOptions::from_config(&config.export))
        .unwrap();

    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(state.canvas.snapshot().unwrap(), before);
}

#[test]
fn test_from_config_applies_defaults() {
    let mut config = Config::from_toml(
        r#"
        [drawing]
        default_color = "red"
        default_line_width = 5.0
        default_tool = "cut"
        default_shape = "square"

        [view]
        initial_zoom = 1.5

        [canvas]
        width = 64
        height = 32
        "#,
    )
    .unwrap();
    config.validate_and_clamp();

    let state = InputState::from_config(&config).unwrap();
    assert_eq!(state.current_color, RED);
    assert_eq!(state.current_width, 5.0);
    assert_eq!(state.cursor_tool, CursorTool::Cut);
    assert_eq!(state.shape_kind, ShapeKind::Square);
    assert_eq!(state.transform.zoom(), 1.5);
    assert_eq!((state.canvas.width(), state.canvas.height()), (64, 32));
}
