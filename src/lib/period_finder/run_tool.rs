use std::{error::Error, sync::Arc};

use log::info;
use tokio::net::TcpListener;

use super::{
    clock::Clock,
    helpers::{get_bell_schedule, get_timetable},
    http::{create_router, AppState},
    models::{Args, Config},
};

/// Loads everything the server needs. Any failure here means the server
/// must not start.
pub fn build_state<C: Clock + 'static>(
    clock: C,
    args: &Args,
    config: &Config,
) -> Result<AppState, Box<dyn Error>> {
    let timetable = get_timetable(args)?;
    let bell_schedule = get_bell_schedule(config)?;
    Ok(AppState::new(timetable, bell_schedule, Arc::new(clock)))
}

pub async fn run<C: Clock + 'static>(
    clock: C,
    args: &Args,
    config: Config,
) -> Result<(), Box<dyn Error>> {
    let state = build_state(clock, args, &config)?;
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
