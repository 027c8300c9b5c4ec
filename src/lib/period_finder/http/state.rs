use std::sync::Arc;

use crate::period_finder::{
    clock::Clock, models::timetable_model::Timetable, period_resolver::BellSchedule,
};

/// Shared application state passed to all handlers.
/// Built once before serving and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub timetable: Arc<Timetable>,
    pub bell_schedule: Arc<BellSchedule>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(timetable: Timetable, bell_schedule: BellSchedule, clock: Arc<dyn Clock>) -> Self {
        Self {
            timetable: Arc::new(timetable),
            bell_schedule: Arc::new(bell_schedule),
            clock,
        }
    }
}
