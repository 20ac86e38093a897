//! # room-schedule
//!
//! Deterministic room occupancy computation for beacon-aware office apps.
//!
//! Given the calendar events of a single meeting room and the current instant,
//! the engine decides whether the room is busy right now and, when it is free,
//! which booking lengths (30 minutes, 1 hour, 2 hours, or whatever is left
//! before the next meeting) can be offered to the person standing in it.
//!
//! Everything here is a pure function of `(events, now)`: no clock access, no
//! I/O, no cached state.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use room_schedule::{compute_schedule, CalendarEvent, RoomSchedule, TimeslotDuration};
//!
//! let now = Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap();
//! let standup = CalendarEvent::new(now + Duration::minutes(105), now + Duration::hours(3), "Standup");
//!
//! match compute_schedule(&[standup], now).unwrap() {
//!     RoomSchedule::Free(free) => {
//!         assert_eq!(free.minutes_till_next_event, Some(105));
//!         assert_eq!(
//!             free.available_timeslots,
//!             vec![TimeslotDuration::HalfAnHour, TimeslotDuration::OneHour]
//!         );
//!     }
//!     RoomSchedule::Busy(_) => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `CalendarEvent` value type
//! - [`timeline`] — Merge events into contiguous busy blocks
//! - [`timeslot`] — Map a free window to offerable booking durations
//! - [`schedule`] — Busy/free classification against an injected `now`
//! - [`ingest`] — Google Calendar payloads and plain JSON → `CalendarEvent`
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod ingest;
pub mod schedule;
pub mod timeline;
pub mod timeslot;

pub use error::ScheduleError;
pub use event::CalendarEvent;
pub use schedule::{
    compute_schedule, BusySchedule, FreeSchedule, RoomSchedule, RoomScheduleCoordinator,
};
pub use timeline::{reduce_timeline, BusyBlock};
pub use timeslot::{FreeTimeslotCalculator, TimeslotCalculator, TimeslotDuration};
