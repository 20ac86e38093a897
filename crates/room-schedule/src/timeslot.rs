//! Offerable booking durations for a free room.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// One booking length that can be offered to the user.
///
/// Variants are declared shortest first, so the derived ordering sorts by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TimeslotDuration {
    /// Less than 30 minutes remain before the next meeting.
    LessThanHalfAnHour { minutes: u32 },
    HalfAnHour,
    OneHour,
    TwoHours,
}

impl TimeslotDuration {
    /// Booking length in whole minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            TimeslotDuration::LessThanHalfAnHour { minutes } => *minutes,
            TimeslotDuration::HalfAnHour => 30,
            TimeslotDuration::OneHour => 60,
            TimeslotDuration::TwoHours => 120,
        }
    }
}

impl fmt::Display for TimeslotDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeslotDuration::LessThanHalfAnHour { minutes } => write!(f, "{}m", minutes),
            TimeslotDuration::HalfAnHour => f.write_str("30m"),
            TimeslotDuration::OneHour => f.write_str("1h"),
            TimeslotDuration::TwoHours => f.write_str("2h"),
        }
    }
}

/// Derives the booking durations offered for a free window.
///
/// `None` means the window is unbounded (no upcoming event).
pub trait TimeslotCalculator {
    fn available_timeslots(&self, free_window: Option<Duration>) -> Vec<TimeslotDuration>;
}

/// Fixed 30 min / 1 h / 2 h ladder, with a remainder slot under 30 minutes.
///
/// Thresholds are inclusive at the lower bound: a window of exactly 30 minutes
/// offers `HalfAnHour`, exactly one hour adds `OneHour`, exactly two hours adds
/// `TwoHours`. Results are sorted shortest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTimeslotCalculator;

impl TimeslotCalculator for FreeTimeslotCalculator {
    fn available_timeslots(&self, free_window: Option<Duration>) -> Vec<TimeslotDuration> {
        let window = match free_window {
            Some(window) => window,
            None => {
                return vec![
                    TimeslotDuration::HalfAnHour,
                    TimeslotDuration::OneHour,
                    TimeslotDuration::TwoHours,
                ]
            }
        };

        if window >= Duration::hours(2) {
            vec![
                TimeslotDuration::HalfAnHour,
                TimeslotDuration::OneHour,
                TimeslotDuration::TwoHours,
            ]
        } else if window >= Duration::hours(1) {
            vec![TimeslotDuration::HalfAnHour, TimeslotDuration::OneHour]
        } else if window >= Duration::minutes(30) {
            vec![TimeslotDuration::HalfAnHour]
        } else {
            // num_minutes truncates toward zero; the window is never negative here.
            let minutes = window.num_minutes().clamp(0, 29) as u32;
            vec![TimeslotDuration::LessThanHalfAnHour { minutes }]
        }
    }
}
