use breathscope::data::viewport::{DataExtent, ViewportController, ZoomDirection};
use breathscope::input::*;

fn loaded() -> ViewportController {
    let mut c = ViewportController::new();
    c.initialize(DataExtent {
        x_min: 0.0,
        x_max: 100.0,
        y_min: 0.0,
        y_max: 10.0,
    });
    c
}

fn press(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Press { pos: Some([x, y]) }
}

fn drag_to(x: f64, y: f64) -> PointerEvent {
    moved(Some([x, y]), true)
}

fn moved(pos: Option<[f64; 2]>, button_held: bool) -> PointerEvent {
    PointerEvent::Move { pos, button_held }
}

fn scroll(pos: Option<[f64; 2]>, delta: f64) -> PointerEvent {
    PointerEvent::Scroll { pos, delta }
}

#[test]
fn starts_idle() {
    let router = InputRouter::new();
    assert!(!router.is_dragging());
    assert_eq!(router.drag_state(), DragState::default());
}

#[test]
fn press_inside_starts_drag_with_anchor() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    assert_eq!(
        router.handle(press(10.0, 5.0), &mut vp),
        InputOutcome::DragStarted
    );
    let expected = DragState {
        active: true,
        anchor: Some([10.0, 5.0]),
    };
    assert_eq!(router.drag_state(), expected);
}

#[test]
fn press_outside_plot_is_ignored() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    assert_eq!(
        router.handle(PointerEvent::Press { pos: None }, &mut vp),
        InputOutcome::Ignored
    );
    assert!(!router.is_dragging());
}

#[test]
fn drag_pans_opposite_to_pointer_motion() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    router.handle(press(50.0, 5.0), &mut vp);
    assert_eq!(
        router.handle(drag_to(40.0, 4.0), &mut vp),
        InputOutcome::Panned
    );
    let v = vp.viewport().unwrap();
    assert_eq!((v.x_min, v.x_max), (10.0, 110.0));
    assert_eq!(router.drag_state().anchor, Some([40.0, 4.0]));
}

#[test]
fn successive_moves_compose_incrementally() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    router.handle(press(50.0, 5.0), &mut vp);
    router.handle(drag_to(45.0, 5.0), &mut vp);
    router.handle(drag_to(30.0, 5.0), &mut vp);
    // Total delta is press - last position, not replayed per move.
    let v = vp.viewport().unwrap();
    assert_eq!((v.x_min, v.x_max), (20.0, 120.0));
}

#[test]
fn release_ends_drag() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    router.handle(press(50.0, 5.0), &mut vp);
    assert_eq!(
        router.handle(PointerEvent::Release, &mut vp),
        InputOutcome::DragEnded
    );
    assert!(!router.is_dragging());
    assert_eq!(router.drag_state().anchor, None);
    // Moves after release do nothing.
    let before = vp.viewport();
    assert_eq!(
        router.handle(drag_to(0.0, 0.0), &mut vp),
        InputOutcome::Ignored
    );
    assert_eq!(vp.viewport(), before);
}

#[test]
fn leaving_plot_ends_drag() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    router.handle(press(50.0, 5.0), &mut vp);
    assert_eq!(
        router.handle(PointerEvent::Leave, &mut vp),
        InputOutcome::DragEnded
    );

    router.handle(press(50.0, 5.0), &mut vp);
    let out = router.handle(moved(None, true), &mut vp);
    assert_eq!(out, InputOutcome::DragEnded);
    assert!(!router.is_dragging());
}

#[test]
fn move_without_button_ends_drag() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    router.handle(press(50.0, 5.0), &mut vp);
    let out = router.handle(moved(Some([1.0, 1.0]), false), &mut vp);
    assert_eq!(out, InputOutcome::DragEnded);
}

#[test]
fn scroll_direction_selects_zoom() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    let up = scroll(Some([50.0, 5.0]), 3.0);
    assert_eq!(
        router.handle(up, &mut vp),
        InputOutcome::Zoomed(ZoomDirection::In)
    );
    assert!(vp.viewport().unwrap().width() < 100.0);

    let down = scroll(Some([50.0, 5.0]), -3.0);
    assert_eq!(
        router.handle(down, &mut vp),
        InputOutcome::Zoomed(ZoomDirection::Out)
    );
    assert!((vp.viewport().unwrap().width() - 100.0).abs() < 1e-9);
}

#[test]
fn scroll_zooms_while_dragging() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    router.handle(press(50.0, 5.0), &mut vp);
    let out = router.handle(scroll(Some([50.0, 5.0]), 1.0), &mut vp);
    assert!(out.needs_redraw());
    assert!(router.is_dragging());
}

#[test]
fn scroll_without_position_or_delta_is_ignored() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    let before = vp.viewport();
    assert_eq!(
        router.handle(scroll(None, 1.0), &mut vp),
        InputOutcome::Ignored
    );
    assert_eq!(
        router.handle(scroll(Some([1.0, 1.0]), 0.0), &mut vp),
        InputOutcome::Ignored
    );
    assert_eq!(vp.viewport(), before);
}

#[test]
fn no_viewport_means_no_effect() {
    let mut vp = ViewportController::new();
    let mut router = InputRouter::new();
    router.handle(press(1.0, 1.0), &mut vp);
    assert_eq!(
        router.handle(drag_to(2.0, 2.0), &mut vp),
        InputOutcome::Ignored
    );
    assert_eq!(
        router.handle(scroll(Some([1.0, 1.0]), 1.0), &mut vp),
        InputOutcome::Ignored
    );
    assert!(vp.viewport().is_none());
}

#[test]
fn smooth_scroll_fragments_add_up_to_one_step() {
    let mut acc = ScrollAccumulator::new();
    // A touchpad gesture spread over ten frames.
    let steps: i32 = (0..10).map(|_| acc.feed(0.1)).sum();
    assert!(steps <= 1);
    let steps = steps + acc.feed(0.05);
    assert_eq!(steps, 1);
}

#[test]
fn whole_notches_pass_straight_through() {
    let mut acc = ScrollAccumulator::new();
    assert_eq!(acc.feed(1.0), 1);
    assert_eq!(acc.feed(-2.0), -2);
    assert_eq!(acc.feed(0.0), 0);
    assert_eq!(acc.feed(f64::NAN), 0);
}

#[test]
fn reversing_direction_drops_partial_notch() {
    let mut acc = ScrollAccumulator::new();
    assert_eq!(acc.feed(0.8), 0);
    assert_eq!(acc.feed(-0.5), 0);
    // Had the 0.8 been kept this would cancel out to 0.
    assert_eq!(acc.feed(-0.6), -1);

    acc.feed(0.9);
    acc.reset();
    assert_eq!(acc.feed(0.2), 0);
}

#[test]
fn one_step_per_notch_zooms_like_one_wheel_click() {
    let mut vp = loaded();
    let mut router = InputRouter::new();
    let mut acc = ScrollAccumulator::new();
    for _ in 0..4 {
        let steps = acc.feed(0.25);
        for _ in 0..steps.unsigned_abs() {
            router.handle(scroll(Some([50.0, 5.0]), f64::from(steps.signum())), &mut vp);
        }
    }
    let width = vp.viewport().unwrap().width();
    assert!((width - 100.0 / 1.2).abs() < 1e-9);
}
