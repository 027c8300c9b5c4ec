use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use log::{debug, warn};

use super::state::AppState;
use crate::period_finder::{
    error::QueryError,
    helpers,
    models::{
        ClassList, ClassQuery, DayTimetable, PeriodQueryResult, TodaySchedule, WeekSchedule,
    },
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, QueryError>;

/// Raw query string as extracted by axum.
pub type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/* an unparsable query string carries no usable class, so it is answered like a missing one */
fn class_query(raw: RawQuery) -> ClassQuery {
    match raw {
        Ok(Query(pairs)) => ClassQuery::from_pairs(pairs),
        Err(rejection) => {
            warn!("Unparsable query string: {}", rejection);
            ClassQuery::default()
        }
    }
}

/// GET /current-period?class=10A
pub async fn current_period(
    State(state): State<AppState>,
    raw: RawQuery,
) -> HandlerResult<PeriodQueryResult> {
    let query = class_query(raw);
    let (day, time) = state.clock.current_day_and_time();
    debug!("Current period for {:?} on {} at {}", query.class, day, time);
    helpers::current_period(
        &state.timetable,
        &state.bell_schedule,
        query.class.as_deref(),
        &day,
        time,
    )
    .map(Json)
}

/// GET /timetable?class=10A&day=monday
pub async fn day_timetable(
    State(state): State<AppState>,
    raw: RawQuery,
) -> HandlerResult<DayTimetable> {
    let query = class_query(raw);
    debug!("Timetable for {:?} on {:?}", query.class, query.day);
    helpers::day_timetable(
        &state.timetable,
        query.class.as_deref(),
        query.day.as_deref(),
    )
    .map(Json)
}

/// GET /classes
pub async fn class_list(State(state): State<AppState>) -> Json<ClassList> {
    debug!("Listing {} classes", state.timetable.len());
    Json(helpers::class_list(&state.timetable))
}

/// GET /day-schedule?class=10A
pub async fn today_schedule(
    State(state): State<AppState>,
    raw: RawQuery,
) -> HandlerResult<TodaySchedule> {
    let query = class_query(raw);
    let (day, _) = state.clock.current_day_and_time();
    debug!("Schedule for {:?} on {}", query.class, day);
    helpers::today_schedule(&state.timetable, query.class.as_deref(), &day).map(Json)
}

/// GET /full-week?class=10A
pub async fn week_schedule(
    State(state): State<AppState>,
    raw: RawQuery,
) -> HandlerResult<WeekSchedule> {
    let query = class_query(raw);
    debug!("Week schedule for {:?}", query.class);
    helpers::week_schedule(&state.timetable, query.class.as_deref()).map(Json)
}
