//! Structured logging configuration.
//!
//! The library logs through the `log` facade; the subscriber installed here
//! picks those records up alongside the client's own `tracing` events.

use anyhow::{Context, Result};
use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Append to a file. Used while the TUI owns the terminal.
    File(&'a Path),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging. Levels are configurable via the RUST_LOG env var.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        LogTarget::Stderr => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    tracing::debug!("Logging initialized");
    Ok(())
}

/// Log a user command with structured fields
pub fn log_command(input: &str, accepted: bool) {
    if accepted {
        tracing::info!(command = input, "Command accepted");
    } else {
        tracing::warn!(command = input, "Command rejected");
    }
}
