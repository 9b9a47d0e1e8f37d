//! breathscope: apnea event detection for breathing-sensor traces and an
//! interactive pan/zoom viewer built on egui/eframe.
//!
//! The crate is organised into cohesive modules:
//! - `data`: signal loading, apnea segmentation/classification, drawable
//!   segments and the viewport transform engine
//! - `input`: toolkit-independent pointer routing (drag-to-pan, wheel zoom)
//! - `view`: the per-viewer state tying data, viewport and input together
//! - `plot`: egui_plot rendering and egui pointer translation
//! - `app`: the native viewer window
//! - `config`: viewer configuration
//! - `error`: load and configuration errors

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod plot;
pub mod view;

// Public re-exports for a compact external API
pub use app::{run_viewer, BreathApp};
pub use config::{InputColumns, ViewerConfig};
pub use data::analysis::{load_analysis, Analysis};
pub use data::apnea::{detect_events, ApneaKind, ClassifiedEvent, EventSummary, Run};
pub use data::segments::{build_segments, Segment, SegmentKind};
pub use data::signal::{
    source_for, CsvFileSource, HttpFetch, HttpSource, MemorySource, Sample, Signal, SignalSource,
};
pub use data::viewport::{DataExtent, Viewport, ViewportController, ZoomDirection};
pub use error::{ConfigError, LoadError};
pub use input::{DragState, InputOutcome, InputRouter, PointerEvent};
pub use view::ViewState;
