use thiserror::Error;

use super::models::time_model::TimeOfDay;

/// Problems with a bell schedule. Raised only while building one, so a
/// running server never sees them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("'{0}' is not a valid HH:MM time")]
    InvalidTime(String),

    #[error("bell schedule has no slots")]
    Empty,

    #[error("slot '{name}' ends at {end} which is not after its start {start}")]
    InvertedSlot {
        name: String,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("slot '{next}' starts at {next_start} before '{prev}' ends at {prev_end}")]
    Overlapping {
        prev: String,
        prev_end: TimeOfDay,
        next: String,
        next_start: TimeOfDay,
    },
}

/// Rejections of a single request. Everything else a query can run into
/// (no period, no subject) is an ordinary answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid or missing class name.")]
    InvalidClass,

    #[error("Missing day.")]
    MissingDay,

    #[error("Day not found.")]
    UnknownDay { class: String, day: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
