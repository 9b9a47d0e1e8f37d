//! Split a classified trace into drawable segments.
//!
//! Segments alternate between normal breathing and classified events, in time
//! order. The sample right after an event was consumed as its look-ahead and
//! belongs to neither the event nor the following normal segment, so the next
//! normal segment starts at `end + 2`.

use std::ops::Range;

use crate::data::apnea::{ApneaKind, ClassifiedEvent};

/// What a segment of the trace represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Normal,
    Event(ApneaKind),
}

/// A half-open range of sample indices with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub range: Range<usize>,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Sample indices kept when drawing every `step`-th sample from the
    /// segment start. A step of 0 is treated as 1.
    pub fn decimated(&self, step: usize) -> impl Iterator<Item = usize> {
        self.range.clone().step_by(step.max(1))
    }
}

/// Build the segment list for a trace of `len` samples.
///
/// `events` must be in increasing `start` order and non-overlapping, which is
/// what [`detect_events`](crate::data::apnea::detect_events) produces.
pub fn build_segments(len: usize, events: &[ClassifiedEvent]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(events.len() * 2 + 1);
    let mut last_end = 0usize;

    for e in events {
        if e.start > last_end {
            segments.push(Segment {
                range: last_end..e.start,
                kind: SegmentKind::Normal,
            });
        }
        segments.push(Segment {
            range: e.start..(e.end + 1).min(len),
            kind: SegmentKind::Event(e.kind),
        });
        // Skip the look-ahead sample.
        last_end = e.end + 2;
    }

    if last_end < len {
        segments.push(Segment {
            range: last_end..len,
            kind: SegmentKind::Normal,
        });
    }

    segments
}
