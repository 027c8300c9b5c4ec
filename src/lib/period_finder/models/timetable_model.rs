//! Module with the timetable model, matching the layout of `timetable.json`:
//!
//! ```json
//! { "10A": { "MONDAY": { "1st": "Maths", "2nd": "Physics" } } }
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Subjects of one class on one weekday, keyed by period label.
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct DaySchedule(pub BTreeMap<String, String>);

impl DaySchedule {
    pub fn subject(&self, period: &str) -> Option<&str> {
        self.0.get(period).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Week of one class, keyed by uppercase English weekday name.
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct ClassWeek(pub BTreeMap<String, DaySchedule>);

impl ClassWeek {
    pub fn day(&self, day: &str) -> Option<&DaySchedule> {
        self.0.get(day)
    }
}

/// Every class known to the server. Loaded once, never changed afterwards.
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct Timetable(pub BTreeMap<String, ClassWeek>);

impl Timetable {
    pub fn class(&self, class_name: &str) -> Option<&ClassWeek> {
        self.0.get(class_name)
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.0.contains_key(class_name)
    }

    pub fn class_names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
