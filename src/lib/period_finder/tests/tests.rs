use std::path::PathBuf;

use crate::period_finder::{error::ScheduleError, models::time_model::PeriodSlot};

use super::*;

fn test_args() -> Args {
    Args {
        config_json_path: PathBuf::from("tests/test.config.json"),
        timetable_json_path: PathBuf::from("tests/test.timetable.json"),
    }
}

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn at(time: &str, class_name: Option<&str>, day: &str) -> Result<PeriodQueryResult, QueryError> {
    let timetable = get_timetable(&test_args()).unwrap();
    current_period(&timetable, &BellSchedule::default(), class_name, day, t(time))
}

#[test]
fn get_timetable_valid_json() {
    let timetable = get_timetable(&test_args()).unwrap();
    assert_eq!(timetable.class_names(), vec!["10A", "8B", "9C"]);
    let monday = timetable.class("10A").unwrap().day("MONDAY").unwrap();
    assert_eq!(monday.subject("2nd"), Some("Physics"));
    assert_eq!(monday.subject("1st"), None);
}

#[test]
fn get_timetable_missing_file() {
    let args = Args {
        config_json_path: PathBuf::from("_"),
        timetable_json_path: PathBuf::from("tests/does_not_exist.json"),
    };
    assert!(get_timetable(&args).is_err());
}

#[test]
fn get_config_reads_json() {
    let config = get_config(&test_args()).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.timezone, "Asia/Kolkata");
    assert_eq!(config.bell_schedule.as_ref().map(Vec::len), Some(3));
}

#[test]
fn get_config_defaults_without_file() {
    let args = Args {
        config_json_path: PathBuf::from("tests/no_such_config.json"),
        timetable_json_path: PathBuf::from("tests/test.timetable.json"),
    };
    let config = get_config(&args).unwrap();
    assert_eq!(config.port, 8000);
    assert_eq!(config.timezone, "UTC");
    assert_eq!(config.bell_schedule, None);
}

#[test]
fn get_bell_schedule_prefers_config() {
    let config = get_config(&test_args()).unwrap();
    let schedule = get_bell_schedule(&config).unwrap();
    assert_eq!(
        schedule.slots()[0],
        PeriodSlot::new("1st", t("08:00"), t("08:45"))
    );
    assert_eq!(
        get_bell_schedule(&Config::default()).unwrap(),
        BellSchedule::default()
    );
}

#[test]
fn get_bell_schedule_rejects_overlap() {
    let args = Args {
        config_json_path: PathBuf::from("tests/test.bad_config.json"),
        timetable_json_path: PathBuf::from("tests/test.timetable.json"),
    };
    let config = get_config(&args).unwrap();
    assert!(matches!(
        get_bell_schedule(&config),
        Err(ConfigError::Schedule(ScheduleError::Overlapping { .. }))
    ));
}

#[test]
fn lesson_in_progress() {
    let result = at("10:05", Some("10A"), "MONDAY").unwrap();
    assert_eq!(
        result,
        PeriodQueryResult {
            class: "10A".to_owned(),
            day: "MONDAY".to_owned(),
            time: t("10:05"),
            period: Some("2nd".to_owned()),
            subject: Some("Physics".to_owned()),
            message: None,
        }
    );
}

#[test]
fn first_period_on_tuesday() {
    let result = at("09:30", Some("10A"), "TUESDAY").unwrap();
    assert_eq!(result.period.as_deref(), Some("1st"));
    assert_eq!(result.subject.as_deref(), Some("Mathematics"));
}

#[test]
fn lunch_has_message_and_no_subject() {
    let result = at("11:25", Some("10A"), "MONDAY").unwrap();
    assert_eq!(result.period.as_deref(), Some("LUNCH"));
    assert_eq!(result.message.as_deref(), Some("It is Lunch 🍱"));
    assert_eq!(result.subject, None);
}

#[test]
fn short_break_has_message() {
    let result = at("13:00", Some("8B"), "FRIDAY").unwrap();
    assert_eq!(result.period.as_deref(), Some("SHORT_BREAK"));
    assert_eq!(result.message.as_deref(), Some("It is Short Break 🍱"));
}

#[test]
fn before_school_has_no_period() {
    let result = at("08:00", Some("10A"), "MONDAY").unwrap();
    assert_eq!(result.period, None);
    assert_eq!(result.subject, None);
    assert_eq!(result.message.as_deref(), Some(NO_ACTIVE_PERIOD_MESSAGE));
}

#[test]
fn empty_period_is_no_class() {
    let result = at("09:30", Some("10A"), "MONDAY").unwrap();
    assert_eq!(result.period.as_deref(), Some("1st"));
    assert_eq!(result.subject.as_deref(), Some("No class"));
    assert_eq!(result.message, None);

    let weekend = at("09:30", Some("10A"), "SUNDAY").unwrap();
    assert_eq!(weekend.subject.as_deref(), Some("No class"));

    let empty_class = at("09:30", Some("9C"), "MONDAY").unwrap();
    assert_eq!(empty_class.subject.as_deref(), Some("No class"));
}

#[test]
fn missing_or_unknown_class_rejected() {
    assert_eq!(at("09:30", None, "MONDAY"), Err(QueryError::InvalidClass));
    assert_eq!(
        at("09:30", Some("UnknownClass"), "MONDAY"),
        Err(QueryError::InvalidClass)
    );
    assert_eq!(
        QueryError::InvalidClass.to_string(),
        "Invalid or missing class name."
    );
}

#[test]
fn unknown_class_rejected_even_outside_school_hours() {
    assert_eq!(
        at("23:00", Some("UnknownClass"), "MONDAY"),
        Err(QueryError::InvalidClass)
    );
}

#[test]
fn repeated_queries_are_identical() {
    let first = serde_json::to_string(&at("12:30", Some("10A"), "MONDAY").unwrap()).unwrap();
    let second = serde_json::to_string(&at("12:30", Some("10A"), "MONDAY").unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn day_timetable_uppercases_day() {
    let timetable = get_timetable(&test_args()).unwrap();
    let result = day_timetable(&timetable, Some("10A"), Some("tuesday")).unwrap();
    assert_eq!(result.day, "TUESDAY");
    assert_eq!(result.timetable.subject("2nd"), Some("Biology"));
}

#[test]
fn day_timetable_errors() {
    let timetable = get_timetable(&test_args()).unwrap();
    assert_eq!(
        day_timetable(&timetable, Some("10A"), None),
        Err(QueryError::MissingDay)
    );
    assert_eq!(
        day_timetable(&timetable, Some("10A"), Some("Sunday")),
        Err(QueryError::UnknownDay {
            class: "10A".to_owned(),
            day: "SUNDAY".to_owned(),
        })
    );
    assert_eq!(
        day_timetable(&timetable, Some("11Z"), Some("MONDAY")),
        Err(QueryError::InvalidClass)
    );
}

#[test]
fn class_list_is_sorted() {
    let timetable = get_timetable(&test_args()).unwrap();
    assert_eq!(class_list(&timetable).classes, vec!["10A", "8B", "9C"]);
}

#[test]
fn today_schedule_with_and_without_entries() {
    let timetable = get_timetable(&test_args()).unwrap();

    let monday = today_schedule(&timetable, Some("8B"), "MONDAY").unwrap();
    assert_eq!(monday.message, None);
    assert_eq!(monday.schedule.unwrap().subject("1st"), Some("Geography"));

    let friday = today_schedule(&timetable, Some("8B"), "FRIDAY").unwrap();
    assert_eq!(friday.schedule, None);
    assert_eq!(friday.message.as_deref(), Some(NO_SCHEDULE_MESSAGE));

    let sunday = today_schedule(&timetable, Some("8B"), "SUNDAY").unwrap();
    assert_eq!(sunday.message.as_deref(), Some(NO_SCHEDULE_MESSAGE));
}

#[test]
fn week_schedule_of_class() {
    let timetable = get_timetable(&test_args()).unwrap();
    let week = week_schedule(&timetable, Some("10A")).unwrap();
    assert_eq!(week.week_schedule.0.len(), 2);
    assert_eq!(week_schedule(&timetable, None), Err(QueryError::InvalidClass));
}
