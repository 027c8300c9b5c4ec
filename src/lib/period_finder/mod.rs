//! Answers "what period is it now, and what does this class have" for a school
//! day described by a fixed bell schedule and a per-class weekly timetable.
pub mod clock;
pub mod error;
pub mod helpers;
pub mod http;
pub mod models;
pub mod period_resolver;
pub mod run_tool;
pub mod timetable_lookup;
