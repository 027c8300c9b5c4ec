//! Maps a time of day onto the bell schedule.
use log::debug;

use super::{
    error::ScheduleError,
    models::time_model::{PeriodSlot, TimeOfDay},
};

/// The school's daily bell schedule, used when the config does not provide one.
pub const DEFAULT_BELL_SCHEDULE: [(&str, TimeOfDay, TimeOfDay); 9] = [
    ("1st", TimeOfDay::at(9, 20), TimeOfDay::at(10, 0)),
    ("2nd", TimeOfDay::at(10, 0), TimeOfDay::at(10, 40)),
    ("3rd", TimeOfDay::at(10, 40), TimeOfDay::at(11, 20)),
    ("LUNCH", TimeOfDay::at(11, 20), TimeOfDay::at(11, 40)),
    ("4th", TimeOfDay::at(11, 40), TimeOfDay::at(12, 20)),
    ("5th", TimeOfDay::at(12, 20), TimeOfDay::at(13, 0)),
    ("SHORT_BREAK", TimeOfDay::at(13, 0), TimeOfDay::at(13, 10)),
    ("6th", TimeOfDay::at(13, 10), TimeOfDay::at(13, 50)),
    ("7th", TimeOfDay::at(13, 50), TimeOfDay::at(14, 30)),
];

/// Returns the first slot whose `[start, end)` contains `now`, or `None` before
/// the first slot, after the last one and inside gaps.
pub fn resolve_current_period(now: TimeOfDay, slots: &[PeriodSlot]) -> Option<&PeriodSlot> {
    slots.iter().find(|slot| slot.contains(now))
}

/// Ordered, non-overlapping slots. Only constructible through validation, so a
/// value of this type always upholds that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellSchedule {
    slots: Vec<PeriodSlot>,
}

impl BellSchedule {
    pub fn new(slots: Vec<PeriodSlot>) -> Result<Self, ScheduleError> {
        if slots.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for slot in slots.iter() {
            if slot.start >= slot.end {
                return Err(ScheduleError::InvertedSlot {
                    name: slot.name.clone(),
                    start: slot.start,
                    end: slot.end,
                });
            }
        }
        for pair in slots.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.end {
                return Err(ScheduleError::Overlapping {
                    prev: prev.name.clone(),
                    prev_end: prev.end,
                    next: next.name.clone(),
                    next_start: next.start,
                });
            }
        }
        debug!("Bell schedule with {} slots accepted", slots.len());
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[PeriodSlot] {
        &self.slots
    }

    pub fn resolve(&self, now: TimeOfDay) -> Option<&PeriodSlot> {
        resolve_current_period(now, &self.slots)
    }
}

impl Default for BellSchedule {
    fn default() -> Self {
        let slots = DEFAULT_BELL_SCHEDULE
            .iter()
            .map(|&(name, start, end)| PeriodSlot::new(name, start, end))
            .collect();
        Self { slots }
    }
}

#[cfg(test)]
#[path = "tests/period_resolver_tests.rs"]
mod tests;
