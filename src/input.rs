//! Pointer input routing: drag-to-pan and wheel zoom.
//!
//! [`InputRouter::handle`] is the single entry point. It knows nothing about
//! the UI toolkit: the host converts its own events into [`PointerEvent`]s,
//! with positions already mapped to data coordinates, and `None` meaning the
//! pointer is outside the plot area.

use crate::data::viewport::{ViewportController, ZoomDirection};

/// A toolkit-independent pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Press { pos: Option<[f64; 2]> },
    /// Pointer moved.
    Move {
        pos: Option<[f64; 2]>,
        button_held: bool,
    },
    /// Primary button released.
    Release,
    /// Pointer left the plot area.
    Leave,
    /// Wheel / scroll; positive delta is scroll-up (forward).
    Scroll { pos: Option<[f64; 2]>, delta: f64 },
}

/// Drag tracking state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub anchor: Option<[f64; 2]>,
}

impl DragState {
    fn start(&mut self, anchor: [f64; 2]) {
        self.active = true;
        self.anchor = Some(anchor);
    }

    fn clear(&mut self) {
        self.active = false;
        self.anchor = None;
    }
}

/// What handling an event did to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    DragStarted,
    DragEnded,
    Panned,
    Zoomed(ZoomDirection),
}

impl InputOutcome {
    /// Whether the viewport changed and the view needs redrawing.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, InputOutcome::Panned | InputOutcome::Zoomed(_))
    }
}

/// Maps pointer events to viewport operations. Starts idle.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    drag: DragState,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Drop any drag in progress, e.g. when a new signal is loaded.
    pub fn cancel_drag(&mut self) {
        self.drag.clear();
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        viewport: &mut ViewportController,
    ) -> InputOutcome {
        match event {
            PointerEvent::Press { pos: Some(p) } => {
                self.drag.start(p);
                InputOutcome::DragStarted
            }
            PointerEvent::Press { pos: None } => InputOutcome::Ignored,
            PointerEvent::Move { pos, button_held } => self.on_move(pos, button_held, viewport),
            PointerEvent::Release | PointerEvent::Leave => self.end_drag(),
            PointerEvent::Scroll { pos, delta } => {
                let (Some(p), Some(direction)) = (pos, ZoomDirection::from_scroll(delta)) else {
                    return InputOutcome::Ignored;
                };
                if viewport.zoom_at(p, direction) {
                    InputOutcome::Zoomed(direction)
                } else {
                    InputOutcome::Ignored
                }
            }
        }
    }

    fn on_move(
        &mut self,
        pos: Option<[f64; 2]>,
        button_held: bool,
        viewport: &mut ViewportController,
    ) -> InputOutcome {
        if !self.drag.active {
            return InputOutcome::Ignored;
        }
        let (Some(current), true) = (pos, button_held) else {
            return self.end_drag();
        };
        let Some(anchor) = self.drag.anchor else {
            return self.end_drag();
        };
        let delta = [anchor[0] - current[0], anchor[1] - current[1]];
        let panned = viewport.pan(delta);
        self.drag.anchor = Some(current);
        if panned {
            InputOutcome::Panned
        } else {
            InputOutcome::Ignored
        }
    }

    fn end_drag(&mut self) -> InputOutcome {
        if self.drag.active {
            self.drag.clear();
            InputOutcome::DragEnded
        } else {
            InputOutcome::Ignored
        }
    }
}

/// Folds fractional scroll amounts (touchpads, smooth scrolling) into whole
/// wheel notches, so that one notch gives one zoom step however many frames
/// it is spread over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollAccumulator {
    pending: f64,
}

impl ScrollAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `notches` (positive is scroll-up) and return the whole number of
    /// notches now complete. A change of direction drops the remainder.
    pub fn feed(&mut self, notches: f64) -> i32 {
        if !notches.is_finite() || notches == 0.0 {
            return 0;
        }
        if self.pending * notches < 0.0 {
            self.pending = 0.0;
        }
        self.pending += notches;
        let whole = self.pending.trunc();
        self.pending -= whole;
        whole as i32
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}
