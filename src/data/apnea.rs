//! Apnea event detection: low-breath run segmentation and event classification.
//!
//! A run is a maximal stretch of consecutive samples at or below
//! [`LOW_BREATH_THRESHOLD`]. Runs shorter than [`MIN_RUN_LENGTH`] are noise.
//! Each accepted run is classified by the single sample that follows it:
//!
//! | look-ahead value        | category |
//! |-------------------------|----------|
//! | `> 5.0`                 | OSA      |
//! | `<= 2.0`                | CSA      |
//! | in `(2.0, 5.0]`         | MSA      |
//!
//! A run that reaches the end of the signal has no following sample and is
//! classified with a look-ahead of `0.0`.

use std::fmt;

/// A sample is "low breath" at or below this value.
pub const LOW_BREATH_THRESHOLD: f64 = 2.0;
/// Look-ahead values strictly above this indicate strong resumption (OSA).
pub const STRONG_RESUMPTION_THRESHOLD: f64 = 5.0;
/// Shortest run promoted to an event.
pub const MIN_RUN_LENGTH: usize = 3;
/// Look-ahead used when a run ends on the last sample.
pub const MISSING_LOOK_AHEAD: f64 = 0.0;

/// Apnea pattern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApneaKind {
    /// Obstructive: breathing resumes strongly.
    Osa,
    /// Central: breathing does not resume.
    Csa,
    /// Mixed: partial resumption.
    Msa,
}

impl ApneaKind {
    pub fn label(&self) -> &'static str {
        match self {
            ApneaKind::Osa => "OSA",
            ApneaKind::Csa => "CSA",
            ApneaKind::Msa => "MSA",
        }
    }

    /// Category for the value observed right after a run.
    pub fn from_look_ahead(value: f64) -> Self {
        if value > STRONG_RESUMPTION_THRESHOLD {
            ApneaKind::Osa
        } else if value <= LOW_BREATH_THRESHOLD {
            ApneaKind::Csa
        } else {
            ApneaKind::Msa
        }
    }
}

impl fmt::Display for ApneaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive index span `[start, end]` of consecutive low-breath samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Index of the sample consumed as look-ahead.
    pub fn look_ahead_index(&self) -> usize {
        self.end + 1
    }
}

/// A run together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedEvent {
    pub start: usize,
    pub end: usize,
    pub kind: ApneaKind,
}

/// Lazy single pass over a value slice yielding accepted runs.
///
/// Consumed as it is iterated; to scan again, create a new one.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    values: &'a [f64],
    pos: usize,
}

impl<'a> Runs<'a> {
    pub fn new(values: &'a [f64]) -> Self {
        Self { values, pos: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let mut open: Option<usize> = None;
        while self.pos < self.values.len() {
            let i = self.pos;
            self.pos += 1;
            if self.values[i] <= LOW_BREATH_THRESHOLD {
                if open.is_none() {
                    open = Some(i);
                }
                continue;
            }
            if let Some(start) = open.take() {
                let run = Run { start, end: i - 1 };
                if run.len() >= MIN_RUN_LENGTH {
                    return Some(run);
                }
            }
        }
        // Flush a run that reaches the end of the sequence.
        let start = open?;
        let run = Run {
            start,
            end: self.values.len() - 1,
        };
        (run.len() >= MIN_RUN_LENGTH).then_some(run)
    }
}

/// Segment `values` into accepted low-breath runs.
pub fn segment_runs(values: &[f64]) -> Runs<'_> {
    Runs::new(values)
}

/// Classify one run against the full value sequence.
pub fn classify_run(run: Run, values: &[f64]) -> ApneaKind {
    let look_ahead = values
        .get(run.look_ahead_index())
        .copied()
        .unwrap_or(MISSING_LOOK_AHEAD);
    ApneaKind::from_look_ahead(look_ahead)
}

/// Full detection pass: segment and classify.
///
/// Events come out in increasing `start` order and never overlap.
pub fn detect_events(values: &[f64]) -> Vec<ClassifiedEvent> {
    let events: Vec<ClassifiedEvent> = segment_runs(values)
        .map(|run| ClassifiedEvent {
            start: run.start,
            end: run.end,
            kind: classify_run(run, values),
        })
        .collect();
    log::debug!(
        "detected {} apnea events in {} samples",
        events.len(),
        values.len()
    );
    events
}

/// Per-category event counts shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSummary {
    pub osa: usize,
    pub csa: usize,
    pub msa: usize,
}

impl EventSummary {
    pub fn from_events(events: &[ClassifiedEvent]) -> Self {
        let mut summary = EventSummary::default();
        for e in events {
            match e.kind {
                ApneaKind::Osa => summary.osa += 1,
                ApneaKind::Csa => summary.csa += 1,
                ApneaKind::Msa => summary.msa += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.osa + self.csa + self.msa
    }

    pub fn count(&self, kind: ApneaKind) -> usize {
        match kind {
            ApneaKind::Osa => self.osa,
            ApneaKind::Csa => self.csa,
            ApneaKind::Msa => self.msa,
        }
    }
}

impl fmt::Display for EventSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OSA: {}   CSA: {}   MSA: {}", self.osa, self.csa, self.msa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_ahead_boundaries() {
        assert_eq!(ApneaKind::from_look_ahead(5.0), ApneaKind::Msa);
        assert_eq!(ApneaKind::from_look_ahead(5.000001), ApneaKind::Osa);
        assert_eq!(ApneaKind::from_look_ahead(2.0), ApneaKind::Csa);
        assert_eq!(ApneaKind::from_look_ahead(2.000001), ApneaKind::Msa);
    }

    #[test]
    fn short_runs_are_dropped() {
        let runs: Vec<Run> = segment_runs(&[1.0, 1.0, 9.0, 1.0, 1.0]).collect();
        assert!(runs.is_empty());
    }

    #[test]
    fn summary_display_matches_title_format() {
        let s = EventSummary {
            osa: 1,
            csa: 2,
            msa: 0,
        };
        assert_eq!(s.to_string(), "OSA: 1   CSA: 2   MSA: 0");
    }
}
