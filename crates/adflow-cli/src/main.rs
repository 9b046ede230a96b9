//! Adflow demonstration runner entry point.

use adflow_advertising::application::desk::AdvertisingDesk;
use adflow_advertising::domain::registry::Registry;
use adflow_core::clock::SystemClock;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod scenario;

use config::{DemoConfig, LogFormat};
use error::AppError;

fn main() -> Result<(), AppError> {
    let config = DemoConfig::from_env()?;

    // Initialize tracing subscriber. Logs go to stderr so the report on
    // stdout stays machine-readable.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    tracing::info!(
        mode = ?config.mode,
        staff_id = %config.staff.id,
        "Starting advertisement lifecycle run"
    );

    let mut desk = AdvertisingDesk::new(Registry::new(config.staff.clone()), SystemClock);
    scenario::run(&mut desk, config.mode)?;

    let report = scenario::Report::from_desk(&desk);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
