use lib::period_finder::clock::SystemClock;
use lib::period_finder::helpers;
use lib::period_finder::models;
use lib::period_finder::run_tool::run;

use std::error::Error;

use clap::Parser;
use helpers::get_config;
use log::info;
use models::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args)?;
    let clock = SystemClock::from_name(&config.timezone)?;
    info!("Using timezone {}", clock.timezone());

    run(clock, &args, config).await
}
