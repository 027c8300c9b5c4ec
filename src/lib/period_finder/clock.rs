use chrono::{Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use super::{error::ConfigError, models::time_model::TimeOfDay};

/// A trait, necessary for every entity that will be used as the source of "now".
/// Returns the uppercase English weekday (e.g. `MONDAY`) and the time of day.
pub trait Clock: Send + Sync {
    fn current_day_and_time(&self) -> (String, TimeOfDay);
}

/// Wall clock of the school's timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn from_name(timezone: &str) -> Result<Self, ConfigError> {
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(timezone.to_owned()))?;
        Ok(Self::new(timezone))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn current_day_and_time(&self) -> (String, TimeOfDay) {
        let now = Utc::now().with_timezone(&self.timezone);
        (weekday_name(now.weekday()).to_owned(), time_of(&now))
    }
}

/// Always answers with the same instant. Handy for tests and demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    pub day: String,
    pub time: TimeOfDay,
}

impl FixedClock {
    pub fn new(day: impl Into<String>, time: TimeOfDay) -> Self {
        Self {
            day: day.into(),
            time,
        }
    }
}

impl Clock for FixedClock {
    fn current_day_and_time(&self) -> (String, TimeOfDay) {
        (self.day.clone(), self.time)
    }
}

/// chrono keeps `hour() < 24` and `minute() < 60`, so the conversion is lossless
/// and `TimeOfDay::at` cannot panic here.
fn time_of<T: Timelike>(moment: &T) -> TimeOfDay {
    TimeOfDay::at(moment.hour() as u8, moment.minute() as u8)
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}
