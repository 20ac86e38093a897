//! Turn calendar payloads into [`CalendarEvent`]s.
//!
//! Two input shapes are supported:
//!
//! - Google Calendar `events.list` responses, filtered down to the meetings a
//!   room's resource calendar has accepted ([`process_events`], [`parse_event_list`]).
//! - Plain JSON arrays of `{start, end, title?}` objects ([`parse_events_json`]).
//!
//! Fetching the payload (OAuth, HTTP) is the caller's business.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::event::CalendarEvent;

/// Title used for events that carry no summary.
pub const UNTITLED_EVENT: &str = "NO TITLE";

const RESPONSE_ACCEPTED: &str = "accepted";

/// The subset of a Google Calendar `events.list` response the engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleEventList {
    #[serde(default)]
    pub items: Vec<GoogleEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEvent {
    pub summary: Option<String>,
    pub start: Option<EventDateTime>,
    pub end: Option<EventDateTime>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

/// Either a timed instant (`dateTime`) or an all-day date (`date`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: Option<DateTime<FixedOffset>>,
    pub date: Option<NaiveDate>,
}

impl EventDateTime {
    fn is_all_day(&self) -> bool {
        self.date_time.is_none() && self.date.is_some()
    }

    /// Timed events keep their instant; all-day dates map to midnight UTC.
    fn resolve(&self) -> Option<DateTime<Utc>> {
        if self.is_all_day() {
            self.date
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        } else {
            self.date_time.map(|dt| dt.with_timezone(&Utc))
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub email: Option<String>,
    pub response_status: Option<String>,
}

impl GoogleEvent {
    /// True when `calendar_id` is an attendee that accepted the invitation.
    pub fn accepted_by(&self, calendar_id: &str) -> bool {
        self.attendees.iter().any(|a| {
            a.email.as_deref() == Some(calendar_id)
                && a.response_status.as_deref() == Some(RESPONSE_ACCEPTED)
        })
    }
}

/// Keep the events accepted by the room calendar `calendar_id` and convert them.
///
/// Events lacking a resolvable start or end are skipped.
pub fn process_events(items: &[GoogleEvent], calendar_id: &str) -> Vec<CalendarEvent> {
    items
        .iter()
        .filter(|event| event.accepted_by(calendar_id))
        .filter_map(|event| {
            let start = event.start.as_ref().and_then(EventDateTime::resolve);
            let end = event.end.as_ref().and_then(EventDateTime::resolve);
            let title = event
                .summary
                .clone()
                .unwrap_or_else(|| UNTITLED_EVENT.to_string());

            match (start, end) {
                (Some(start), Some(end)) => Some(CalendarEvent { start, end, title }),
                _ => {
                    debug!(title = %title, "skipping event without start or end");
                    None
                }
            }
        })
        .collect()
}

/// Parse a Google Calendar `events.list` JSON body and filter it for `calendar_id`.
pub fn parse_event_list(json: &str, calendar_id: &str) -> Result<Vec<CalendarEvent>> {
    let list: GoogleEventList = serde_json::from_str(json)?;
    let events = process_events(&list.items, calendar_id);
    debug!(
        received = list.items.len(),
        accepted = events.len(),
        calendar_id,
        "processed calendar events"
    );
    Ok(events)
}

/// Input format for plain event arrays.
#[derive(Deserialize)]
struct EventInput {
    start: String,
    end: String,
    #[serde(default)]
    title: Option<String>,
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset, e.g. "2026-02-17T14:00:00+01:00") and naive
/// datetimes (e.g. "2026-02-17T14:00:00"), which are interpreted as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| ScheduleError::InvalidDateTime(format!("'{}': {}", s, e)))
}

/// Convert a JSON array of `{start, end, title?}` objects into events.
pub fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent>> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)?;

    inputs
        .into_iter()
        .map(|input| {
            Ok(CalendarEvent {
                start: parse_datetime(&input.start)?,
                end: parse_datetime(&input.end)?,
                title: input.title.unwrap_or_else(|| UNTITLED_EVENT.to_string()),
            })
        })
        .collect()
}
