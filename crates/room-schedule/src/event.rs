//! The calendar event value consumed by the schedule engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// One meeting on a room's calendar, already resolved to concrete UTC instants.
///
/// Identity is by value: two events with the same times and title are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub title: String,
}

impl CalendarEvent {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, title: impl Into<String>) -> Self {
        Self {
            start,
            end,
            title: title.into(),
        }
    }

    /// Half-open containment: `start <= instant < end`.
    ///
    /// A zero-length event never contains any instant.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Reject events whose end precedes their start. Zero-length events are valid.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(ScheduleError::InvalidEvent {
                title: self.title.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
