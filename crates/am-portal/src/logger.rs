//! Process-wide logging for the portal.
//!
//! Records look like `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]` and go
//! either to stdout or to a file under the config directory.

use crate::{PortalError, PortalResult};

use am_config::Config;

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, debug, info};

/// Where records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Colored levels when `colored` is set.
    Stdout { colored: bool },
    /// Appends; never colored.
    File(PathBuf),
}

impl LogTarget {
    pub fn from_config(config: &Config) -> PortalResult<Self> {
        Ok(match config.log_file_path()? {
            Some(path) => Self::File(path),
            None => Self::Stdout {
                colored: config.logging.colored,
            },
        })
    }
}

/// Outcome of [`install`]. Only the first logger in a process takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerStatus {
    Installed,
    AlreadyInstalled,
}

/// Installs the logger described by the `[logging]` section.
pub fn install(config: &Config) -> PortalResult<LoggerStatus> {
    install_with(*config.logging.level, LogTarget::from_config(config)?)
}

pub fn install_with(level: LevelFilter, target: LogTarget) -> PortalResult<LoggerStatus> {
    let dispatch = Dispatch::new().level(level);

    let dispatch = match &target {
        LogTarget::File(path) => dispatch
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(open_log_file(path)?),
        LogTarget::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            dispatch
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        LogTarget::Stdout { colored: false } => dispatch
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    if dispatch.apply().is_err() {
        debug!("Logger already installed; keeping it");
        return Ok(LoggerStatus::AlreadyInstalled);
    }

    match target {
        LogTarget::File(path) => info!("Logging at {level} to {}", path.display()),
        LogTarget::Stdout { .. } => info!("Logging at {level} to stdout"),
    }
    Ok(LoggerStatus::Installed)
}

fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {level}] {message} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn open_log_file(path: &Path) -> PortalResult<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PortalError::logger(format!("Cannot create log directory {}: {e}", parent.display()))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PortalError::logger(format!("Cannot open log file {}: {e}", path.display())))
}
