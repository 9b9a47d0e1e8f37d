//! ViewState: everything one viewer instance owns, passed explicitly to the
//! input router and the renderer.

use crate::data::analysis::{load_analysis, Analysis};
use crate::data::signal::SignalSource;
use crate::data::viewport::{Viewport, ViewportController, ZoomDirection};
use crate::error::LoadError;
use crate::input::{InputOutcome, InputRouter, PointerEvent};

/// The loaded analysis, its viewport and the pointer routing state.
#[derive(Debug, Default)]
pub struct ViewState {
    analysis: Option<Analysis>,
    viewport: ViewportController,
    input: InputRouter,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and analyze `source`, replacing the current view on success.
    /// On failure the current view is left untouched.
    pub fn load(&mut self, source: &dyn SignalSource) -> Result<&Analysis, LoadError> {
        let analysis = load_analysis(source)?;
        Ok(self.show(analysis))
    }

    /// Replace the current view with an already computed analysis.
    pub fn show(&mut self, analysis: Analysis) -> &Analysis {
        self.viewport.initialize(analysis.extent());
        self.input.cancel_drag();
        self.analysis.insert(analysis)
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport.viewport()
    }

    pub fn viewport_controller(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> InputOutcome {
        self.input.handle(event, &mut self.viewport)
    }

    /// Button-triggered zoom around the window center.
    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        self.viewport.zoom_centered(direction)
    }

    pub fn reset_view(&mut self) -> bool {
        self.viewport.reset()
    }

    pub fn zoom_percent(&self) -> Option<f64> {
        self.viewport.zoom_percent()
    }
}
