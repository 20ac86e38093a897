//! Reduce a room's calendar into contiguous busy blocks.
//!
//! Sorts events by start time, then merges every event that touches or overlaps
//! the block before it. Back-to-back meetings therefore form a single block:
//! the room never becomes free at the boundary between them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::event::CalendarEvent;

/// A maximal run of touching or overlapping events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    /// Earliest start in the chain.
    pub start: DateTime<Utc>,
    /// Latest end in the chain.
    pub end: DateTime<Utc>,
    /// The original events that make up this block, sorted by `(start, end)`.
    pub events: Vec<CalendarEvent>,
}

impl BusyBlock {
    fn from_event(event: CalendarEvent) -> Self {
        Self {
            start: event.start,
            end: event.end,
            events: vec![event],
        }
    }

    /// Half-open containment: `start <= instant < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The original event whose own range contains `instant`.
    ///
    /// When several overlapping events contain it, the earliest-starting one wins.
    pub fn event_at(&self, instant: DateTime<Utc>) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.contains(instant))
    }
}

/// Merge calendar events into sorted, non-overlapping busy blocks.
///
/// Events need not be sorted. An event joins the current block when its start
/// is at or before the block's end (`start <= block.end`); the block then ends at
/// the later of the two ends.
///
/// # Errors
/// Returns `ScheduleError::InvalidEvent` for the first event with `end < start`.
/// No blocks are produced in that case.
pub fn reduce_timeline(events: &[CalendarEvent]) -> Result<Vec<BusyBlock>> {
    for event in events {
        event.validate()?;
    }

    let mut sorted = events.to_vec();
    // Stable sort keeps caller order for identical ranges.
    sorted.sort_by_key(|e| (e.start, e.end));

    let mut blocks: Vec<BusyBlock> = Vec::new();
    for event in sorted {
        if let Some(last) = blocks.last_mut() {
            if event.start <= last.end {
                last.end = last.end.max(event.end);
                last.events.push(event);
                continue;
            }
        }
        blocks.push(BusyBlock::from_event(event));
    }

    trace!(events = events.len(), blocks = blocks.len(), "reduced timeline");
    Ok(blocks)
}
