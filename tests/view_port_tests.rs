use chart_core::view_port::{clamp, Rect, ScaleLimits, ViewMatrix, ViewPortHandler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn handler() -> ViewPortHandler {
    let mut vp = ViewPortHandler::new();
    vp.set_chart_dimens(200.0, 100.0);
    vp.restrain_view_port(10.0, 10.0, 10.0, 10.0);
    vp
}

#[test]
fn test_content_rect_and_offsets() {
    let mut vp = handler();
    assert_eq!(vp.content_rect(), Rect::new(10.0, 10.0, 190.0, 90.0));
    assert_eq!(vp.offset_right(), 10.0);
    assert_eq!(vp.offset_bottom(), 10.0);
    assert_eq!(vp.content_center(), (100.0, 50.0));

    // resizing keeps the offsets
    vp.set_chart_dimens(400.0, 300.0);
    assert_eq!(vp.content_rect(), Rect::new(10.0, 10.0, 390.0, 290.0));
    assert!(vp.has_chart_dimens());
}

#[test]
fn test_clamp_scale_and_translation() {
    let content = Rect::new(10.0, 10.0, 190.0, 90.0);
    let limits = ScaleLimits::default();

    let m = clamp(ViewMatrix::new(0.5, 0.5, 50.0, -50.0), &content, &limits, 0.0, 0.0);
    assert_eq!(m, ViewMatrix::IDENTITY);

    let m = clamp(ViewMatrix::new(2.0, 2.0, -500.0, 500.0), &content, &limits, 0.0, 0.0);
    assert_eq!(m.scale_x, 2.0);
    assert_eq!(m.trans_x, -180.0);
    assert_eq!(m.trans_y, 80.0);

    let m = clamp(ViewMatrix::new(2.0, 2.0, 50.0, -50.0), &content, &limits, 20.0, 5.0);
    assert_eq!(m.trans_x, 20.0);
    assert_eq!(m.trans_y, -5.0);

    let capped = ScaleLimits {
        max_scale_x: 3.0,
        max_scale_y: 4.0,
        ..ScaleLimits::default()
    };
    let m = clamp(ViewMatrix::new(10.0, 10.0, 0.0, 0.0), &content, &capped, 0.0, 0.0);
    assert_eq!((m.scale_x, m.scale_y), (3.0, 4.0));
}

#[test]
fn test_clamp_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5_000 {
        let content = Rect::new(
            rng.random_range(0.0..50.0),
            rng.random_range(0.0..50.0),
            rng.random_range(60.0..800.0),
            rng.random_range(60.0..800.0),
        );
        let limits = ScaleLimits {
            min_scale_x: rng.random_range(1.0..2.0),
            max_scale_x: rng.random_range(2.0..20.0),
            min_scale_y: rng.random_range(1.0..2.0),
            max_scale_y: rng.random_range(2.0..20.0),
        };
        let m = ViewMatrix::new(
            rng.random_range(0.1..30.0),
            rng.random_range(0.1..30.0),
            rng.random_range(-5_000.0..5_000.0),
            rng.random_range(-5_000.0..5_000.0),
        );
        let (dx, dy) = (rng.random_range(0.0..40.0), rng.random_range(0.0..40.0));

        let once = clamp(m, &content, &limits, dx, dy);
        let twice = clamp(once, &content, &limits, dx, dy);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_zoom_in_and_out() {
    let mut vp = handler();
    assert!(vp.is_fully_zoomed_out());

    let proposed = vp.zoom_in(100.0, 50.0);
    vp.refresh(proposed);
    assert!((vp.scale_x() - 1.4).abs() < 1e-12);
    assert!(!vp.is_fully_zoomed_out());
    assert!(vp.can_zoom_out_more_x());
    assert!(vp.can_zoom_in_more_y());

    // zooming out past 1 is clamped back
    let proposed = vp.zoom_out(100.0, 50.0).post_scale(0.5, 0.5, 100.0, 50.0);
    vp.refresh(proposed);
    assert_eq!(vp.scale_x(), 1.0);
    assert_eq!(vp.trans_x(), 0.0);
    assert!(vp.is_fully_zoomed_out_x());
}

#[test]
fn test_zoom_keeps_pivot() {
    let vp = handler();
    let m = vp.zoom(2.0, 2.0, 100.0, 50.0);
    // the pivot maps onto itself
    assert_eq!(100.0 * m.scale_x + m.trans_x, 100.0);
    assert_eq!(50.0 * m.scale_y + m.trans_y, 50.0);
}

#[test]
fn test_translate_and_center() {
    let mut vp = handler();
    let zoomed = vp.set_zoom(2.0, 2.0);
    vp.refresh(zoomed);

    let m = vp.center_view_port(110.0, 10.0);
    assert_eq!(m.trans_x, -100.0);

    let m = vp.center_view_port(1_000.0, 10.0);
    assert_eq!(m.trans_x, -180.0);

    let reset = vp.reset_zoom();
    let m = vp.refresh(reset);
    assert_eq!(m, ViewMatrix::IDENTITY);
}

#[test]
fn test_scale_limit_setters() {
    let mut vp = handler();
    vp.set_minimum_scale_x(0.5);
    assert_eq!(vp.limits().min_scale_x, 1.0);

    vp.set_minimum_scale_x(3.0);
    assert_eq!(vp.scale_x(), 3.0);
    assert!(!vp.is_fully_zoomed_out_x());

    vp.set_maximum_scale_y(0.0);
    assert_eq!(vp.limits().max_scale_y, f64::MAX);

    vp.set_min_max_scale_y(1.0, 2.0);
    let m = vp.zoom(1.0, 5.0, 0.0, 0.0);
    vp.refresh(m);
    assert_eq!(vp.scale_y(), 2.0);
    assert!(!vp.can_zoom_in_more_y());

    let identity = vp.fit_screen();
    vp.refresh(identity);
    assert_eq!(vp.scale_x(), 1.0);
}

#[test]
fn test_bounds_checks() {
    let vp = handler();
    assert!(vp.is_in_bounds(100.0, 50.0));
    assert!(vp.is_in_bounds_left(9.5));
    assert!(!vp.is_in_bounds_left(8.0));
    assert!(vp.is_in_bounds_right(191.0));
    assert!(!vp.is_in_bounds_right(191.5));
    assert!(vp.is_in_bounds_top(10.0));
    assert!(!vp.is_in_bounds_top(9.9));
    assert!(vp.is_in_bounds_bottom(90.004));
    assert!(!vp.is_in_bounds_bottom(90.5));
}

#[test]
fn test_drag_offsets() {
    let mut vp = handler();
    assert!(vp.has_no_drag_offset());
    vp.set_drag_offset_x(20.0);
    vp.set_drag_offset_y(-3.0);
    assert!(!vp.has_no_drag_offset());
    assert_eq!(vp.drag_offset_y(), 0.0);

    let m = vp.translate(-40.0, 10.0);
    let m = vp.refresh(m);
    assert_eq!(m.trans_x, 20.0);
}

#[test]
fn test_clamp_never_stores_negative_zero() {
    let content = Rect::new(10.0, 10.0, 190.0, 90.0);
    let limits = ScaleLimits::default();

    let m = clamp(ViewMatrix::new(1.0, 1.0, -10.0, -20.0), &content, &limits, 0.0, 0.0);
    assert!(m.trans_x == 0.0 && m.trans_x.is_sign_positive());
    assert!(m.trans_y == 0.0 && m.trans_y.is_sign_positive());

    let mut vp = handler();
    let zoomed = vp.zoom(1.0, 2.0, 0.0, 40.0);
    let committed = vp.refresh(zoomed);
    assert!(committed.trans_y.is_sign_positive());
    assert!(!serde_json::to_string(&committed).unwrap().contains("-0.0"));
}
