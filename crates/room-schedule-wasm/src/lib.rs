//! WASM bindings for room-schedule.
//!
//! Exposes busy/free classification and timeline reduction to JavaScript via
//! `wasm-bindgen`. Events and results cross the boundary as JSON strings; the
//! result shapes are the `serde` representations of the library types.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p room-schedule-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/room_schedule_wasm.wasm
//! ```

use room_schedule::ingest;
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Compute the room schedule at `now`.
///
/// `events_json` must be a JSON array of `{start, end, title?}` objects with ISO
/// 8601 datetimes; `now` is an ISO 8601 datetime. Returns a JSON object tagged
/// with `"state": "busy"` or `"state": "free"`.
#[wasm_bindgen(js_name = "computeSchedule")]
pub fn compute_schedule(events_json: &str, now: &str) -> Result<String, JsValue> {
    compute_schedule_json(events_json, now).map_err(to_js_error)
}

/// Merge events into contiguous busy blocks.
///
/// Returns a JSON array of `{start, end, events}` objects sorted by start.
#[wasm_bindgen(js_name = "reduceTimeline")]
pub fn reduce_timeline(events_json: &str) -> Result<String, JsValue> {
    reduce_timeline_json(events_json).map_err(to_js_error)
}

fn compute_schedule_json(events_json: &str, now: &str) -> room_schedule::error::Result<String> {
    let events = ingest::parse_events_json(events_json)?;
    let now = ingest::parse_datetime(now)?;
    let schedule = room_schedule::compute_schedule(&events, now)?;
    Ok(serde_json::to_string(&schedule)?)
}

fn reduce_timeline_json(events_json: &str) -> room_schedule::error::Result<String> {
    let events = ingest::parse_events_json(events_json)?;
    let blocks = room_schedule::reduce_timeline(&events)?;
    Ok(serde_json::to_string(&blocks)?)
}
