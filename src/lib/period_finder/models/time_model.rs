//! Wall-clock values used by the bell schedule.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::period_finder::error::ScheduleError;

/// Labels of the slots that are breaks rather than lessons.
pub const BREAK_LABELS: [&str; 2] = ["LUNCH", "SHORT_BREAK"];

/// A time of day with minute precision, written as zero-padded 24-hour `HH:MM`.
/// Ordering is by minute of day, which agrees with comparing the padded strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minute_of_day: u16,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self {
            minute_of_day: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Panics on out-of-range input, which in a const table is a compile error.
    pub const fn at(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60);
        Self {
            minute_of_day: hour as u16 * 60 + minute as u16,
        }
    }

    pub fn hour(&self) -> u8 {
        (self.minute_of_day / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minute_of_day % 60) as u8
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(s.to_owned());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2
            || minute.len() != 2
            || !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// One row of the bell schedule. The slot covers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSlot {
    pub name: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl PeriodSlot {
    pub fn new(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time < self.end
    }

    pub fn is_break(&self) -> bool {
        BREAK_LABELS.contains(&self.name.as_str())
    }

    /// Human readable text shown instead of a subject during a break,
    /// e.g. `SHORT_BREAK` becomes "It is Short Break 🍱".
    pub fn break_message(&self) -> String {
        let title = self
            .name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("It is {} 🍱", title)
    }
}
