use am_auth::{AuthError, StorageError};
use am_config::ConfigError;
use am_core::FormErrors;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Form has errors: {source} {location}")]
    Form {
        #[source]
        source: FormErrors,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Auth {
        #[from]
        source: AuthError,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Storage setup failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl PortalError {
    /// Message to show on the screen's submit error line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Form { source, .. } => source
                .iter()
                .next()
                .map(|e| e.message.to_string())
                .unwrap_or_default(),
            Self::Auth { source } => source.user_message(),
            Self::Config { .. } | Self::Logger { .. } => {
                "The portal is misconfigured. Please contact support.".to_string()
            }
            Self::Storage { source, .. } => source.recovery_hint().to_string(),
        }
    }

    /// Field errors, when the failure was form validation.
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            Self::Form { source, .. } => Some(source),
            _ => None,
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<FormErrors> for PortalError {
    #[track_caller]
    fn from(source: FormErrors) -> Self {
        Self::Form {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for PortalError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for PortalError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
