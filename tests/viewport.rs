use breathscope::data::viewport::*;

const EPS: f64 = 1e-9;

fn extent(x: (f64, f64), y: (f64, f64)) -> DataExtent {
    DataExtent {
        x_min: x.0,
        x_max: x.1,
        y_min: y.0,
        y_max: y.1,
    }
}

fn loaded() -> ViewportController {
    let mut c = ViewportController::new();
    c.initialize(extent((0.0, 100.0), (0.0, 10.0)));
    c
}

fn assert_close(a: Viewport, b: Viewport) {
    for (u, v) in [(a.x_min, b.x_min), (a.x_max, b.x_max), (a.y_min, b.y_min), (a.y_max, b.y_max)] {
        assert!((u - v).abs() < EPS, "{:?} != {:?}", a, b);
    }
}

#[test]
fn initialize_reserves_legend_headroom() {
    let vp = loaded().viewport().unwrap();
    assert_eq!((vp.x_min, vp.x_max, vp.y_min), (0.0, 100.0, 0.0));
    assert!((vp.y_max - 11.5).abs() < EPS, "y_max = {}", vp.y_max);
}

#[test]
fn reset_reproduces_initial_exactly() {
    let mut c = loaded();
    let initial = c.viewport().unwrap();
    c.zoom_at([30.0, 4.0], ZoomDirection::In);
    c.pan([-12.5, 3.0]);
    c.zoom_centered(ZoomDirection::Out);
    c.zoom_at([-400.0, 2.0], ZoomDirection::Out);
    assert_ne!(c.viewport().unwrap(), initial);
    assert!(c.reset());
    assert_eq!(c.viewport().unwrap(), initial);
    assert_eq!(c.viewport().unwrap().y_max, initial.y_max);
}

#[test]
fn zoom_keeps_focus_relative_position() {
    let mut c = loaded();
    let before = c.viewport().unwrap();
    let focus = [25.0, 2.0];
    c.zoom_at(focus, ZoomDirection::In);
    let after = c.viewport().unwrap();

    assert!((after.width() - before.width() / 1.2).abs() < EPS);
    assert!((after.height() - before.height() / 1.2).abs() < EPS);
    let rel_before = (before.x_max - focus[0]) / before.width();
    let rel_after = (after.x_max - focus[0]) / after.width();
    assert!((rel_before - rel_after).abs() < EPS);
    let rel_before_y = (before.y_max - focus[1]) / before.height();
    let rel_after_y = (after.y_max - focus[1]) / after.height();
    assert!((rel_before_y - rel_after_y).abs() < EPS);
}

#[test]
fn zoom_in_then_out_restores_window() {
    let mut c = loaded();
    let before = c.viewport().unwrap();
    for focus in [[25.0, 2.0], [0.0, 0.0], [250.0, -40.0]] {
        c.zoom_at(focus, ZoomDirection::In);
        c.zoom_at(focus, ZoomDirection::Out);
        assert_close(c.viewport().unwrap(), before);
        c.zoom_at(focus, ZoomDirection::Out);
        c.zoom_at(focus, ZoomDirection::In);
        assert_close(c.viewport().unwrap(), before);
    }
}

#[test]
fn zoom_centered_uses_window_center() {
    let mut c = loaded();
    let center = c.viewport().unwrap().center();
    c.zoom_centered(ZoomDirection::Out);
    let vp = c.viewport().unwrap();
    assert!((vp.center()[0] - center[0]).abs() < EPS);
    assert!((vp.center()[1] - center[1]).abs() < EPS);
    assert!((vp.width() - 120.0).abs() < EPS);
}

#[test]
fn pan_round_trip_is_exact() {
    let mut c = loaded();
    let before = c.viewport().unwrap();
    c.pan([10.0, -2.5]);
    let moved = c.viewport().unwrap();
    assert_eq!((moved.x_min, moved.x_max), (10.0, 110.0));
    c.pan([-10.0, 2.5]);
    assert_eq!(c.viewport().unwrap(), before);
}

#[test]
fn pan_is_not_clamped() {
    let mut c = loaded();
    c.pan([1.0e6, -1.0e6]);
    let vp = c.viewport().unwrap();
    assert_eq!(vp.x_min, 1.0e6);
    assert!(vp.is_valid());
}

#[test]
fn operations_without_viewport_are_noops() {
    let mut c = ViewportController::new();
    assert!(!c.zoom_at([1.0, 1.0], ZoomDirection::In));
    assert!(!c.zoom_centered(ZoomDirection::Out));
    assert!(!c.pan([1.0, 1.0]));
    assert!(!c.reset());
    assert!(c.viewport().is_none());
    assert!(c.zoom_percent().is_none());
}

#[test]
fn non_finite_input_is_rejected() {
    let mut c = loaded();
    let before = c.viewport().unwrap();
    assert!(!c.pan([f64::NAN, 0.0]));
    assert!(!c.zoom_at([f64::INFINITY, 0.0], ZoomDirection::In));
    assert_eq!(c.viewport().unwrap(), before);
}

#[test]
fn flat_signal_still_has_height() {
    let mut c = ViewportController::new();
    c.initialize(extent((0.0, 10.0), (3.0, 3.0)));
    let vp = c.viewport().unwrap();
    assert!(vp.is_valid());
    assert_eq!(vp.y_min, 2.5);
}

#[test]
fn zoom_percent_tracks_width_and_clamps() {
    let mut c = loaded();
    assert_eq!(c.zoom_percent(), Some(100.0));
    c.zoom_centered(ZoomDirection::In);
    assert!((c.zoom_percent().unwrap() - 120.0).abs() < 1e-6);
    for _ in 0..40 {
        c.zoom_centered(ZoomDirection::In);
    }
    assert_eq!(c.zoom_percent(), Some(1000.0));
    for _ in 0..80 {
        c.zoom_centered(ZoomDirection::Out);
    }
    assert_eq!(c.zoom_percent(), Some(10.0));
}

#[test]
fn initialize_replaces_previous_view() {
    let mut c = loaded();
    c.pan([5.0, 5.0]);
    c.initialize(extent((-1.0, 1.0), (0.0, 2.0)));
    let vp = c.viewport().unwrap();
    assert_eq!((vp.x_min, vp.x_max), (-1.0, 1.0));
    assert_eq!(c.initial_viewport(), Some(vp));
}
