//! Error types for room schedule computation and calendar ingestion.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// An event ends before it starts. The whole batch is rejected so that a
    /// dropped event cannot hide a real booking conflict.
    #[error("Invalid event '{title}': ends at {end} before it starts at {start}")]
    InvalidEvent {
        title: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid events JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
