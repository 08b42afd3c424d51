use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why the portal configuration could not be loaded or accepted.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid storage.{field} '{value}': {reason} {location}")]
    Storage {
        field: &'static str,
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid logging.{field} '{value}': {reason} {location}")]
    Logging {
        field: &'static str,
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn config_dir(source: std::io::Error) -> Self {
        Self::ConfigDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::Storage {
            field,
            value: value.into(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logging(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::Logging {
            field,
            value: value.into(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted name of the rejected setting, for validation failures.
    pub fn setting(&self) -> Option<String> {
        match self {
            Self::Storage { field, .. } => Some(format!("storage.{field}")),
            Self::Logging { field, .. } => Some(format!("logging.{field}")),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
