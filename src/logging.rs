//! Log setup.
//!
//! The terminal is owned by the renderer, so logs only ever go to a file.
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber when a log path is given.
///
/// Returns whether logging was enabled.
pub fn init(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(true)
}
