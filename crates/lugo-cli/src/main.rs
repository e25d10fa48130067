use std::{path::PathBuf, process::ExitCode, str::FromStr};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

mod cli;
mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(&cli.log_level, &cli.log_file) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to set up logging: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    cli.start()
}

/// Resolves the log file path. `auto` places a timestamped file in the user's local
/// data directory.
fn log_file_path(log_file: &str) -> Result<PathBuf> {
    if log_file != "auto" {
        let path = PathBuf::from(log_file);
        if path.exists() {
            return Err(anyhow!("Log file already exists: {}", path.display()));
        }
        return Ok(path);
    }

    let time = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let filename = format!("lugo-bot-{time}.log");
    let path = dirs::data_local_dir()
        .map(|p| p.join("lugo-bot").join(&filename))
        .unwrap_or_else(|| PathBuf::from(&filename));
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    Ok(path)
}

/// Logs to stderr and, as JSON, to a file. Records emitted through `log` by the
/// library crates are forwarded as well.
fn setup_logging(log_level: &str, log_file: &str) -> Result<WorkerGuard> {
    let log_level = tracing::Level::from_str(log_level)
        .map_err(|_| anyhow!("Invalid log level: {}", log_level))?;
    let log_file_path = log_file_path(log_file)?;

    let dir = match log_file_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_file_path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file: {}", log_file_path.display()))?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

    // stdout carries the orders of `replay`
    let console_layer = fmt::Subscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    let logfile_layer = fmt::Layer::default()
        .json()
        .with_ansi(false)
        .with_writer(non_blocking_appender);
    console_layer
        .with(logfile_layer)
        .try_init()
        .context("Unable to set global tracing subscriber")?;

    tracing::info!("Saving logs to {}", log_file_path.display());
    Ok(guard)
}
