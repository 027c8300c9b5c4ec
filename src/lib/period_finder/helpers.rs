use std::{error::Error, fs::File, io::BufReader};

use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use log::{debug, info, warn};

use crate::period_finder::{
    error::{ConfigError, QueryError},
    models::{
        time_model::TimeOfDay, timetable_model::Timetable, Args, ClassList, Config, DayTimetable,
        PeriodQueryResult, TodaySchedule, WeekSchedule,
    },
    period_resolver::BellSchedule,
    timetable_lookup::lookup_subject,
};

pub const NO_ACTIVE_PERIOD_MESSAGE: &str = "No active class period now.";
pub const NO_SCHEDULE_MESSAGE: &str = "No schedule available";

pub fn log_timetable(timetable: &Timetable) {
    for (class_name, week) in timetable.0.iter() {
        debug!(
            "Serving class {}, scheduled on {:?}",
            class_name,
            week.0.keys().collect::<Vec<_>>()
        );
    }
}

pub fn get_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    info!(
        "Reading config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("PERIOD_"))
        .extract()?;
    Ok(config)
}

pub fn get_timetable(args: &Args) -> Result<Timetable, Box<dyn Error>> {
    info!(
        "Reading timetable.json from {}",
        std::path::absolute(&args.timetable_json_path)?.display()
    );
    let timetable_file = BufReader::new(File::open(&args.timetable_json_path)?);
    let timetable: Timetable = serde_json::from_reader(timetable_file)?;
    info!("Found {} classes in timetable", timetable.len());
    log_timetable(&timetable);
    Ok(timetable)
}

/// Configured bell schedule if there is one, the built-in one otherwise.
pub fn get_bell_schedule(config: &Config) -> Result<BellSchedule, ConfigError> {
    let schedule = match &config.bell_schedule {
        Some(slots) => BellSchedule::new(slots.clone())?,
        None => BellSchedule::default(),
    };
    info!("Using bell schedule with {} slots", schedule.slots().len());
    Ok(schedule)
}

/* missing and unknown classes are rejected the same way */
fn known_class<'a>(
    timetable: &Timetable,
    class_name: Option<&'a str>,
) -> Result<&'a str, QueryError> {
    match class_name {
        Some(class_name) if timetable.has_class(class_name) => Ok(class_name),
        _ => {
            warn!("Rejected class {:?}", class_name);
            Err(QueryError::InvalidClass)
        }
    }
}

/// Resolves what `class_name` is doing on `day` at `time`.
pub fn current_period(
    timetable: &Timetable,
    bell_schedule: &BellSchedule,
    class_name: Option<&str>,
    day: &str,
    time: TimeOfDay,
) -> Result<PeriodQueryResult, QueryError> {
    let class_name = known_class(timetable, class_name)?;
    let mut result = PeriodQueryResult {
        class: class_name.to_owned(),
        day: day.to_owned(),
        time,
        period: None,
        subject: None,
        message: None,
    };

    match bell_schedule.resolve(time) {
        None => {
            result.message = Some(NO_ACTIVE_PERIOD_MESSAGE.to_owned());
        }
        Some(slot) if slot.is_break() => {
            result.period = Some(slot.name.clone());
            result.message = Some(slot.break_message());
        }
        Some(slot) => {
            let subject = lookup_subject(timetable, class_name, day, &slot.name);
            result.period = Some(slot.name.clone());
            result.subject = Some(subject.to_string());
        }
    }
    debug!("Resolved {:?}", result);
    Ok(result)
}

pub fn day_timetable(
    timetable: &Timetable,
    class_name: Option<&str>,
    day: Option<&str>,
) -> Result<DayTimetable, QueryError> {
    let class_name = known_class(timetable, class_name)?;
    let day = day.ok_or(QueryError::MissingDay)?.to_uppercase();
    let schedule = timetable
        .class(class_name)
        .and_then(|week| week.day(&day))
        .ok_or_else(|| QueryError::UnknownDay {
            class: class_name.to_owned(),
            day: day.clone(),
        })?;
    Ok(DayTimetable {
        class: class_name.to_owned(),
        day,
        timetable: schedule.clone(),
    })
}

pub fn class_list(timetable: &Timetable) -> ClassList {
    ClassList {
        classes: timetable.class_names(),
    }
}

pub fn today_schedule(
    timetable: &Timetable,
    class_name: Option<&str>,
    day: &str,
) -> Result<TodaySchedule, QueryError> {
    let class_name = known_class(timetable, class_name)?;
    let schedule = timetable
        .class(class_name)
        .and_then(|week| week.day(day))
        .filter(|schedule| !schedule.is_empty())
        .cloned();
    let message = schedule.is_none().then(|| NO_SCHEDULE_MESSAGE.to_owned());
    Ok(TodaySchedule {
        class: class_name.to_owned(),
        day: day.to_owned(),
        schedule,
        message,
    })
}

pub fn week_schedule(
    timetable: &Timetable,
    class_name: Option<&str>,
) -> Result<WeekSchedule, QueryError> {
    let class_name = known_class(timetable, class_name)?;
    let week_schedule = timetable.class(class_name).cloned().unwrap_or_default();
    Ok(WeekSchedule {
        class: class_name.to_owned(),
        week_schedule,
    })
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
