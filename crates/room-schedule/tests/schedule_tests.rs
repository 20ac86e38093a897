//! Scenario tests for busy/free classification.
//!
//! Covers one, two, and three event calendars with the current instant placed
//! before, inside, and after consecutive and non-consecutive meetings.

use chrono::{DateTime, Duration, TimeZone, Utc};
use room_schedule::{compute_schedule, CalendarEvent, RoomSchedule, ScheduleError, TimeslotDuration};

// ── Helpers ─────────────────────────────────────────────────────────────────

const TITLE: &str = "Unit testing";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 10, 0, 0).unwrap()
}

fn hours(h: i64) -> Duration {
    Duration::hours(h)
}

fn event(start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
    CalendarEvent::new(start, end, TITLE)
}

fn titled(start: DateTime<Utc>, end: DateTime<Utc>, title: &str) -> CalendarEvent {
    CalendarEvent::new(start, end, title)
}

fn all_fixed_slots() -> Vec<TimeslotDuration> {
    vec![
        TimeslotDuration::HalfAnHour,
        TimeslotDuration::OneHour,
        TimeslotDuration::TwoHours,
    ]
}

fn expect_busy(events: &[CalendarEvent]) -> (CalendarEvent, DateTime<Utc>) {
    match compute_schedule(events, now()).unwrap() {
        RoomSchedule::Busy(busy) => (busy.current_event, busy.next_available),
        other => panic!("expected busy schedule, got {:?}", other),
    }
}

fn expect_free(events: &[CalendarEvent]) -> (Option<i64>, Vec<TimeslotDuration>) {
    match compute_schedule(events, now()).unwrap() {
        RoomSchedule::Free(free) => (free.minutes_till_next_event, free.available_timeslots),
        other => panic!("expected free schedule, got {:?}", other),
    }
}

// ── No events ───────────────────────────────────────────────────────────────

#[test]
fn no_events_is_free_with_all_slots() {
    let (minutes, slots) = expect_free(&[]);
    assert_eq!(minutes, None);
    assert_eq!(slots, all_fixed_slots());
}

// ── One event ───────────────────────────────────────────────────────────────

#[test]
fn single_current_event_is_busy_until_its_end() {
    let events = vec![event(now(), now() + hours(1))];

    let (current, next_available) = expect_busy(&events);

    assert_eq!(next_available, now() + hours(1));
    assert_eq!(current, events[0]);
}

#[test]
fn single_past_event_is_free_with_all_slots() {
    let events = vec![event(now() - hours(2), now() - hours(1))];

    let (minutes, slots) = expect_free(&events);

    assert_eq!(minutes, None);
    assert_eq!(slots, all_fixed_slots());
}

#[test]
fn single_future_event_reports_minutes_till_start() {
    let events = vec![event(now() + hours(1), now() + hours(2))];

    let (minutes, slots) = expect_free(&events);

    assert_eq!(minutes, Some(60));
    assert_eq!(slots, vec![TimeslotDuration::HalfAnHour, TimeslotDuration::OneHour]);
}

#[test]
fn event_ending_exactly_now_is_past() {
    let events = vec![event(now() - hours(1), now())];

    let (minutes, _) = expect_free(&events);

    assert_eq!(minutes, None);
}

// ── Two events ──────────────────────────────────────────────────────────────

#[test]
fn two_consecutive_events_first_current_busy_until_second_ends() {
    let first = titled(now(), now() + hours(1), "first");
    let second = titled(now() + hours(1), now() + hours(2), "second");

    let (current, next_available) = expect_busy(&[first.clone(), second]);

    assert_eq!(next_available, now() + hours(2));
    assert_eq!(current, first);
}

#[test]
fn two_non_consecutive_events_first_current_busy_until_first_ends() {
    let first = event(now(), now() + hours(1));
    let second = event(now() + hours(2), now() + hours(3));

    let (_, next_available) = expect_busy(&[first, second]);

    assert_eq!(next_available, now() + hours(1));
}

#[test]
fn two_future_consecutive_events_reports_minutes_till_first() {
    let first = event(now() + hours(1), now() + hours(2));
    let second = event(now() + hours(2), now() + hours(3));

    let (minutes, _) = expect_free(&[first, second]);

    assert_eq!(minutes, Some(60));
}

#[test]
fn two_past_events_is_free() {
    let first = event(now() - hours(3), now() - hours(2));
    let second = event(now() - hours(2), now() - hours(1));

    let (minutes, slots) = expect_free(&[first, second]);

    assert_eq!(minutes, None);
    assert_eq!(slots, all_fixed_slots());
}

#[test]
fn between_past_and_future_event_reports_minutes_till_future() {
    let past = event(now() - hours(3), now() - hours(2));
    let future = event(now() + hours(1), now() + hours(2));

    let (minutes, _) = expect_free(&[past, future]);

    assert_eq!(minutes, Some(60));
}

#[test]
fn two_future_events_nearest_in_105_minutes() {
    let near = event(now() + Duration::minutes(105), now() + hours(3));
    let far = event(now() + hours(5), now() + hours(6));

    let (minutes, slots) = expect_free(&[far, near]);

    assert_eq!(minutes, Some(105));
    assert_eq!(slots, vec![TimeslotDuration::HalfAnHour, TimeslotDuration::OneHour]);
}

// ── Three events ────────────────────────────────────────────────────────────

#[test]
fn three_consecutive_events_first_current_busy_until_third_ends() {
    let first = titled(now(), now() + hours(1), "first");
    let second = titled(now() + hours(1), now() + hours(2), "second");
    let third = titled(now() + hours(2), now() + hours(3), "third");

    let (current, next_available) = expect_busy(&[first.clone(), second, third]);

    assert_eq!(next_available, now() + hours(3));
    assert_eq!(current, first);
}

#[test]
fn first_two_consecutive_and_current_third_future_busy_until_second_ends() {
    let first = event(now(), now() + hours(1));
    let second = event(now() + hours(1), now() + hours(2));
    let third = event(now() + hours(3), now() + hours(4));

    let (_, next_available) = expect_busy(&[first, second, third]);

    assert_eq!(next_available, now() + hours(2));
}

#[test]
fn past_then_current_then_consecutive_reports_second_as_current() {
    let first = titled(now() - hours(2), now() - hours(1), "first");
    let second = titled(now(), now() + hours(1), "second");
    let third = titled(now() + hours(1), now() + hours(2), "third");

    let (current, next_available) = expect_busy(&[first, second.clone(), third]);

    assert_eq!(next_available, now() + hours(2));
    assert_eq!(current, second);
}

#[test]
fn chain_started_in_past_reports_the_sub_event_running_now() {
    let half_hour = Duration::minutes(30);
    let first = titled(now() - hours(2), now() - hours(1), "first");
    let second = titled(now() - hours(1), now() - half_hour, "second");
    let third = titled(now() - half_hour, now() - half_hour + hours(1), "third");

    let (current, next_available) = expect_busy(&[first, second, third.clone()]);

    assert_eq!(next_available, now() + half_hour);
    assert_eq!(current, third);
}

#[test]
fn two_past_consecutive_and_one_future_is_free() {
    let half_hour = Duration::minutes(30);
    let first = event(now() - hours(2), now() - hours(1));
    let second = event(now() - hours(1), now() - half_hour);
    let third = event(now() + hours(1), now() + hours(2));

    let (minutes, _) = expect_free(&[first, second, third]);

    assert_eq!(minutes, Some(60));
}

#[test]
fn unsorted_input_gives_same_result_as_sorted() {
    let first = titled(now() - hours(1), now(), "first");
    let second = titled(now(), now() + hours(1), "second");
    let third = titled(now() + hours(1), now() + hours(2), "third");

    let sorted = compute_schedule(&[first.clone(), second.clone(), third.clone()], now()).unwrap();
    let shuffled = compute_schedule(&[third, first, second], now()).unwrap();

    assert_eq!(sorted, shuffled);
}

#[test]
fn overlapping_events_merge_into_one_busy_block() {
    let long = titled(now() - hours(1), now() + hours(1), "long");
    let overlapping = titled(now() + Duration::minutes(30), now() + hours(3), "overlapping");

    let (current, next_available) = expect_busy(&[overlapping, long.clone()]);

    assert_eq!(current, long);
    assert_eq!(next_available, now() + hours(3));
}

// ── Timeslots ───────────────────────────────────────────────────────────────

fn slots_for_window(window: Duration) -> Vec<TimeslotDuration> {
    let events = vec![event(now() + window, now() + window + hours(1))];
    expect_free(&events).1
}

#[test]
fn free_for_three_hours_offers_three_slots() {
    assert_eq!(slots_for_window(hours(3)), all_fixed_slots());
}

#[test]
fn free_for_exactly_two_hours_offers_three_slots() {
    assert_eq!(slots_for_window(hours(2)), all_fixed_slots());
}

#[test]
fn free_for_ninety_minutes_offers_half_hour_and_hour() {
    assert_eq!(
        slots_for_window(Duration::minutes(90)),
        vec![TimeslotDuration::HalfAnHour, TimeslotDuration::OneHour]
    );
}

#[test]
fn free_for_exactly_one_hour_offers_half_hour_and_hour() {
    assert_eq!(
        slots_for_window(hours(1)),
        vec![TimeslotDuration::HalfAnHour, TimeslotDuration::OneHour]
    );
}

#[test]
fn free_for_fifty_minutes_offers_half_hour() {
    assert_eq!(
        slots_for_window(Duration::minutes(50)),
        vec![TimeslotDuration::HalfAnHour]
    );
}

#[test]
fn free_for_exactly_half_an_hour_offers_half_hour() {
    assert_eq!(
        slots_for_window(Duration::minutes(30)),
        vec![TimeslotDuration::HalfAnHour]
    );
}

#[test]
fn free_for_twenty_five_minutes_offers_the_remainder() {
    assert_eq!(
        slots_for_window(Duration::minutes(25)),
        vec![TimeslotDuration::LessThanHalfAnHour { minutes: 25 }]
    );
}

#[test]
fn partial_minute_rounds_countdown_up_and_remainder_down() {
    let window = Duration::minutes(24) + Duration::seconds(30);
    let events = vec![event(now() + window, now() + hours(1))];

    let (minutes, slots) = expect_free(&events);

    assert_eq!(minutes, Some(25));
    assert_eq!(slots, vec![TimeslotDuration::LessThanHalfAnHour { minutes: 24 }]);
}

// ── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn event_ending_before_start_rejects_the_batch() {
    let good = event(now(), now() + hours(1));
    let bad = titled(now() + hours(2), now() + hours(1), "backwards");

    let err = compute_schedule(&[good, bad], now()).unwrap_err();

    match err {
        ScheduleError::InvalidEvent { title, .. } => assert_eq!(title, "backwards"),
        other => panic!("expected InvalidEvent, got {:?}", other),
    }
}

#[test]
fn zero_length_event_at_now_does_not_make_room_busy() {
    let events = vec![event(now(), now())];

    let schedule = compute_schedule(&events, now()).unwrap();

    assert!(!schedule.is_busy());
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn schedule_serializes_with_state_tag() {
    let events = vec![event(now(), now() + hours(1))];
    let schedule = compute_schedule(&events, now()).unwrap();

    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json["state"], "busy");
    assert_eq!(json["current_event"]["title"], TITLE);

    let free = compute_schedule(&[], now()).unwrap();
    let json = serde_json::to_value(&free).unwrap();
    assert_eq!(json["state"], "free");
    assert!(json["minutes_till_next_event"].is_null());
    assert_eq!(json["available_timeslots"][0]["kind"], "half_an_hour");
}
