//! Subject lookup over the loaded timetable.
use std::fmt;

use super::models::timetable_model::Timetable;

pub const NO_CLASS: &str = "No class";

/// What the timetable says about one class in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
    Scheduled(&'a str),
    /// Class, day or period has no entry. Not an error.
    NoClass,
}

impl<'a> Subject<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Subject::Scheduled(subject) => subject,
            Subject::NoClass => NO_CLASS,
        }
    }
}

impl fmt::Display for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Walks class -> day -> period. A missing key at any level collapses into
/// [`Subject::NoClass`]; the lookup never fails.
pub fn lookup_subject<'a>(
    table: &'a Timetable,
    class_name: &str,
    day: &str,
    period: &str,
) -> Subject<'a> {
    table
        .class(class_name)
        .and_then(|week| week.day(day))
        .and_then(|schedule| schedule.subject(period))
        .map_or(Subject::NoClass, Subject::Scheduled)
}

#[cfg(test)]
#[path = "tests/timetable_lookup_tests.rs"]
mod tests;
