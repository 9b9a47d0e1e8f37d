//! Breath trend viewer application.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame top bar, status line and central plot |
//! | [`run`]    | Top-level [`run_viewer()`] entry point |

mod run;
mod update;

pub use run::run_viewer;

use crate::config::ViewerConfig;
use crate::data::signal::source_for;
use crate::error::LoadError;
use crate::plot::PlotView;
use crate::view::ViewState;

/// Standalone viewer implementing [`eframe::App`].
pub struct BreathApp {
    pub config: ViewerConfig,
    /// Loaded analysis, viewport and pointer routing.
    pub state: ViewState,
    plot_view: PlotView,
    /// Contents of the path text field.
    path_input: String,
    /// Message of the last failed load, shown until the next successful one.
    last_error: Option<String>,
}

impl BreathApp {
    pub fn new(config: ViewerConfig) -> Self {
        let path_input = config
            .initial_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self {
            config,
            state: ViewState::new(),
            plot_view: PlotView::new(),
            path_input,
            last_error: None,
        }
    }

    /// Load a file path or HTTP(S) URL into the view. On failure the previous
    /// view stays and the error is kept for display.
    pub fn load_location(&mut self, location: &str) -> Result<(), LoadError> {
        let source = source_for(location, self.config.columns.clone());
        match self.state.load(source.as_ref()) {
            Ok(_) => {
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Load whatever is in the path field; an empty field does nothing.
    fn load_from_input(&mut self) {
        let location = self.path_input.trim().to_string();
        if location.is_empty() {
            return;
        }
        // The error is already recorded for display.
        let _ = self.load_location(&location);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
