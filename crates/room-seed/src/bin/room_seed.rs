//! Room manifest generator.
//!
//! Reads the user roster, writes the room creation manifest, and prints the
//! distribution summary. With no flags or `ROOM_SEED_*` variables set it
//! reads `users.csv` and writes `rooms.json` in the working directory; see
//! `room_seed::RoomSeedSettings` for the overrides.
//!
//! Each loaded user and each accepted room size is logged at `info`, so a
//! default run echoes both to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use room_seed::{RoomSeedSettings, RunError, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> ExitCode {
    init_tracing();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}

fn execute() -> Result<(), RunError> {
    let settings = RoomSeedSettings::load().map_err(|err| RunError::Config {
        message: err.to_string(),
    })?;
    let outcome = run(&settings)?;
    write_report(&outcome.statistics.to_string());
    Ok(())
}

fn write_report(report: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{report}") {
        drop(err);
    }
}
