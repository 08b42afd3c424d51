use crate::StorageError;

use am_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Email already exists: {email} {location}")]
    EmailAlreadyExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Failed to serialize session: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Stored session under '{key}' is corrupted: {message} {location}")]
    CorruptedSession {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted_session(key: &'static str, message: impl Into<String>) -> Self {
        Self::CorruptedSession {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for the inline form error, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::EmailAlreadyExists { .. } => EMAIL_EXISTS_MESSAGE.to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::Storage { source, .. } => source.recovery_hint().to_string(),
            Self::Serialization { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
            Self::CorruptedSession { .. } => {
                "Your saved session could not be read. Please sign in again.".to_string()
            }
        }
    }

    /// Storage key holding the unreadable value, for corrupted sessions.
    pub fn corrupted_key(&self) -> Option<&'static str> {
        match self {
            Self::CorruptedSession { key, .. } => Some(*key),
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::EmailAlreadyExists { .. } => "EMAIL_ALREADY_EXISTS",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
            Self::CorruptedSession { .. } => "CORRUPTED_SESSION",
        }
    }

    /// Whether retrying the same call could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation {
                field,
                message,
                location,
            } => Self::Validation {
                field,
                message,
                location,
            },
            CoreError::InvalidRole { value, location } => Self::Validation {
                field: "role",
                message: format!("unknown role '{value}'"),
                location,
            },
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
