use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use self::{
    time_model::{PeriodSlot, TimeOfDay},
    timetable_model::{ClassWeek, DaySchedule},
};

pub mod time_model;
pub mod timetable_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains server configuration parameters.
/// 2. Path to timetable.json, that contains the weekly timetable of every class.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE", default_value = "timetable.json")]
    pub timetable_json_path: PathBuf,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Address to listen on
/// 2. Port to listen on
/// 3. IANA name of the timezone the school lives in, used for the weekday and the time of day
/// 4. Optional replacement for the built-in bell schedule
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bell_schedule: Option<Vec<PeriodSlot>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8000,
            timezone: "UTC".to_owned(),
            bell_schedule: None,
        }
    }
}

/// Query string of the endpoints that take a class.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClassQuery {
    pub class: Option<String>,
    pub day: Option<String>,
}

impl ClassQuery {
    /// Builds the query from raw `key=value` pairs. A repeated key keeps its
    /// last value; unrelated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "class" => query.class = Some(value),
                "day" => query.day = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Answer to "what period is it for this class right now".
/// `period` is always present (null outside the school day); breaks and
/// empty periods carry `message`, lessons carry `subject`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PeriodQueryResult {
    pub class: String,
    pub day: String,
    pub time: TimeOfDay,
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct DayTimetable {
    pub class: String,
    pub day: String,
    pub timetable: DaySchedule,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ClassList {
    pub classes: Vec<String>,
}

/// Today's schedule of a class, or a message when there is none.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct TodaySchedule {
    pub class: String,
    pub day: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct WeekSchedule {
    pub class: String,
    pub week_schedule: ClassWeek,
}

/// Body of every rejected request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ErrorBody {
    pub error: String,
}
