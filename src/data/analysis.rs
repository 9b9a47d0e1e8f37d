//! One-shot analysis of a loaded trace: events, drawable segments, summary.

use crate::data::apnea::{detect_events, ClassifiedEvent, EventSummary};
use crate::data::legend::{legend_markers, LegendMarker};
use crate::data::segments::{build_segments, Segment};
use crate::data::signal::{Signal, SignalSource};
use crate::data::viewport::DataExtent;
use crate::error::LoadResult;

/// Everything the viewer needs to draw one loaded trace.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Where the data came from.
    pub origin: String,
    pub signal: Signal,
    pub events: Vec<ClassifiedEvent>,
    pub segments: Vec<Segment>,
    pub summary: EventSummary,
}

impl Analysis {
    /// Run segmentation and classification over `signal`.
    pub fn from_signal(origin: impl Into<String>, signal: Signal) -> Self {
        let events = detect_events(&signal.values);
        let segments = build_segments(signal.len(), &events);
        let summary = EventSummary::from_events(&events);
        Self {
            origin: origin.into(),
            signal,
            events,
            segments,
            summary,
        }
    }

    /// Bounding box of the samples; the unit box for an empty trace.
    pub fn extent(&self) -> DataExtent {
        DataExtent::from_points(&self.signal.times, &self.signal.values).unwrap_or(DataExtent::UNIT)
    }

    /// Legend bars for this trace, or none if it has no samples.
    pub fn legend(&self) -> Option<[LegendMarker; 3]> {
        let t0 = self.signal.first_time()?;
        Some(legend_markers(t0, &self.extent()))
    }
}

/// Read `source` and analyze it.
///
/// A failed read returns the error and produces nothing, so the caller's
/// previous analysis stays valid.
pub fn load_analysis(source: &dyn SignalSource) -> LoadResult<Analysis> {
    let origin = source.describe();
    let signal = match source.read_signal() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("failed to load {}: {}", origin, e);
            return Err(e);
        }
    };
    let analysis = Analysis::from_signal(origin, signal);
    log::info!(
        "loaded {} samples from {} ({})",
        analysis.signal.len(),
        analysis.origin,
        analysis.summary
    );
    Ok(analysis)
}
