use crate::error::{Result as ServerErrorResult, ServerError};

use fg_core::AUDIT_TARGET;

use std::fmt::Arguments;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter for the general log
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
/// * `audit_file` - Optional file for the audit target. None = audit records dropped
#[track_caller]
pub fn initialize(
    log_level: fg_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
    audit_file: Option<PathBuf>,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let general = Dispatch::new().filter(|metadata| !is_audit_target(metadata.target()));

    let general = if let Some(ref log_path) = log_file {
        general.format(plain_format).chain(open_log_file(log_path)?)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        general
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        // Plain output for non-TTY (systemd, docker logs)
        general.format(plain_format).chain(std::io::stdout())
    };

    let mut root = Dispatch::new().level(level_filter).chain(general);

    root = match audit_file {
        Some(ref audit_path) => root.level_for(AUDIT_TARGET, LevelFilter::Debug).chain(
            Dispatch::new()
                .filter(|metadata| is_audit_target(metadata.target()))
                .format(plain_format)
                .chain(open_log_file(audit_path)?),
        ),
        None => root.level_for(AUDIT_TARGET, LevelFilter::Off),
    };

    root.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }
    if let Some(ref path) = audit_file {
        info!("Audit log: {}", path.display());
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Records on the audit target carry match distances and never reach the
/// general sink.
pub(crate) fn is_audit_target(target: &str) -> bool {
    target == AUDIT_TARGET || target.starts_with(&format!("{}::", AUDIT_TARGET))
}

fn plain_format(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
