//! `room-schedule` CLI — check whether a meeting room is busy and what can be booked.
//!
//! ## Usage
//!
//! ```sh
//! # Plain event array on stdin, evaluated at the current time
//! echo '[{"start":"2026-03-16T09:00:00Z","end":"2026-03-16T10:00:00Z","title":"Standup"}]' \
//!   | room-schedule status
//!
//! # Google Calendar events.list response, filtered for one room calendar
//! room-schedule status --google --calendar-id room-1@resource.calendar.google.com -i events.json
//!
//! # One-line summary with local times
//! room-schedule status -i events.json --now 2026-03-16T09:30:00Z --format text --timezone Europe/Oslo
//!
//! # Show the merged busy blocks
//! room-schedule timeline -i events.json
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};
use room_schedule::{ingest, CalendarEvent, RoomSchedule, TimeslotDuration};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "room-schedule",
    version,
    about = "Meeting room occupancy and bookable timeslots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the room as busy or free and list bookable durations
    Status {
        #[command(flatten)]
        source: EventSource,
        /// Evaluation instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// IANA timezone used to render times in text output
        #[arg(long, env = "ROOM_SCHEDULE_TIMEZONE", default_value = "UTC")]
        timezone: String,
    },
    /// Print the merged busy blocks of the room's calendar
    Timeline {
        #[command(flatten)]
        source: EventSource,
    },
}

#[derive(Args)]
struct EventSource {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Treat input as a Google Calendar events.list response
    #[arg(long)]
    google: bool,
    /// Room calendar whose accepted events are kept (required with --google)
    #[arg(long, env = "ROOM_SCHEDULE_CALENDAR_ID")]
    calendar_id: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status {
            source,
            now,
            format,
            timezone,
        } => {
            let events = load_events(&source)?;
            let now = match now.as_deref() {
                Some(raw) => ingest::parse_datetime(raw)
                    .with_context(|| format!("Invalid --now value: {}", raw))?,
                None => Utc::now(),
            };
            let tz: Tz = timezone
                .parse()
                .map_err(|_| anyhow::anyhow!("Unknown timezone: '{}'", timezone))?;

            debug!(events = events.len(), %now, "computing room schedule");
            let schedule = room_schedule::compute_schedule(&events, now)
                .context("Failed to compute room schedule")?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&schedule)?);
                }
                OutputFormat::Text => println!("{}", summarize(&schedule, tz)),
            }
        }
        Commands::Timeline { source } => {
            let events = load_events(&source)?;
            let blocks =
                room_schedule::reduce_timeline(&events).context("Failed to reduce timeline")?;
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
    }

    Ok(())
}

fn load_events(source: &EventSource) -> Result<Vec<CalendarEvent>> {
    let raw = read_input(source.input.as_deref())?;

    if source.google {
        let calendar_id = source
            .calendar_id
            .as_deref()
            .context("--google requires --calendar-id (or ROOM_SCHEDULE_CALENDAR_ID)")?;
        ingest::parse_event_list(&raw, calendar_id)
            .context("Failed to parse Google Calendar events")
    } else {
        ingest::parse_events_json(&raw).context("Failed to parse events")
    }
}

/// One-line human summary of a schedule.
fn summarize(schedule: &RoomSchedule, tz: Tz) -> String {
    match schedule {
        RoomSchedule::Busy(busy) => format!(
            "Busy with {} until {}",
            busy.current_event.title,
            local_time(busy.next_available, tz)
        ),
        RoomSchedule::Free(free) => {
            let slots = join_slots(&free.available_timeslots);
            match free.minutes_till_next_event {
                Some(minutes) => format!("Free (next event in {} min). Book: {}", minutes, slots),
                None => format!("Free. Book: {}", slots),
            }
        }
    }
}

fn join_slots(slots: &[TimeslotDuration]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn local_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
