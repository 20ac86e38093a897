//! Busy/free classification of a room at a given instant.
//!
//! The room is busy when `now` falls inside a merged busy block. The reported
//! current event is the specific meeting running at `now`, while the next
//! availability is the end of the whole block, so back-to-back meetings are
//! reported as one continuous occupancy.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::event::CalendarEvent;
use crate::timeline::reduce_timeline;
use crate::timeslot::{FreeTimeslotCalculator, TimeslotCalculator, TimeslotDuration};

/// The room is occupied right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusySchedule {
    /// The meeting whose own range contains `now`.
    pub current_event: CalendarEvent,
    /// End of the contiguous busy block containing `now`.
    pub next_available: DateTime<Utc>,
}

/// The room is free right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSchedule {
    /// Minutes until the next meeting starts, rounded up. `None` when nothing is booked ahead.
    pub minutes_till_next_event: Option<i64>,
    /// Offerable booking lengths, shortest first.
    pub available_timeslots: Vec<TimeslotDuration>,
}

/// Occupancy of a room at one instant. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RoomSchedule {
    Busy(BusySchedule),
    Free(FreeSchedule),
}

impl RoomSchedule {
    pub fn is_busy(&self) -> bool {
        matches!(self, RoomSchedule::Busy(_))
    }

    pub fn next_available(&self) -> Option<DateTime<Utc>> {
        match self {
            RoomSchedule::Busy(busy) => Some(busy.next_available),
            RoomSchedule::Free(_) => None,
        }
    }

    pub fn minutes_till_next_event(&self) -> Option<i64> {
        match self {
            RoomSchedule::Busy(_) => None,
            RoomSchedule::Free(free) => free.minutes_till_next_event,
        }
    }

    /// Booking lengths on offer; empty while the room is busy.
    pub fn available_timeslots(&self) -> &[TimeslotDuration] {
        match self {
            RoomSchedule::Busy(_) => &[],
            RoomSchedule::Free(free) => &free.available_timeslots,
        }
    }
}

/// Computes room schedules with a pluggable timeslot policy.
#[derive(Debug, Clone, Default)]
pub struct RoomScheduleCoordinator<C = FreeTimeslotCalculator> {
    calculator: C,
}

impl<C: TimeslotCalculator> RoomScheduleCoordinator<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    /// Classify the room at `now` given its calendar events.
    ///
    /// Events may arrive in any order. The result depends only on `events` and
    /// `now`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidEvent` if any event ends before it starts.
    pub fn compute(&self, events: &[CalendarEvent], now: DateTime<Utc>) -> Result<RoomSchedule> {
        let blocks = reduce_timeline(events)?;

        // Blocks are the union of their events' ranges, so a block contains `now`
        // exactly when one of its events does.
        let current = blocks
            .iter()
            .find_map(|block| block.event_at(now).map(|event| (block, event)));

        if let Some((block, event)) = current {
            debug!(title = %event.title, until = %block.end, "room busy");
            return Ok(RoomSchedule::Busy(BusySchedule {
                current_event: event.clone(),
                next_available: block.end,
            }));
        }

        let next_start = blocks
            .iter()
            .map(|block| block.start)
            .find(|start| *start > now);

        let free_window = next_start.map(|start| start - now);
        let minutes_till_next_event = free_window.map(ceil_minutes);
        let available_timeslots = self.calculator.available_timeslots(free_window);

        debug!(
            minutes_till_next_event = ?minutes_till_next_event,
            timeslots = available_timeslots.len(),
            "room free"
        );

        Ok(RoomSchedule::Free(FreeSchedule {
            minutes_till_next_event,
            available_timeslots,
        }))
    }
}

/// Classify the room at `now` using the standard 30 min / 1 h / 2 h ladder.
///
/// Convenience wrapper over [`RoomScheduleCoordinator::compute`] with
/// [`FreeTimeslotCalculator`].
pub fn compute_schedule(events: &[CalendarEvent], now: DateTime<Utc>) -> Result<RoomSchedule> {
    RoomScheduleCoordinator::new(FreeTimeslotCalculator).compute(events, now)
}

/// Whole minutes in `d`, rounded up. `d` is positive.
fn ceil_minutes(d: Duration) -> i64 {
    let whole = d.num_minutes();
    if d > Duration::minutes(whole) {
        whole + 1
    } else {
        whole
    }
}
