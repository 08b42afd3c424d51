use crate::{AuthError, LEGACY_TOKEN_KEY, LEGACY_USER_KEY, Result as AuthResult, SessionToken};

use am_core::IdentityRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: i32 = 1;

/// Identity and token persisted together under one key, so one can never be
/// stored without the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub schema_version: i32,
    pub token: SessionToken,
    pub user: IdentityRecord,
    /// Absent for sessions migrated from the two-key layout.
    #[serde(default)]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl StoredSession {
    /// Fresh session for a successful login.
    pub fn start(user: IdentityRecord) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            token: SessionToken::generate(),
            user,
            signed_in_at: Some(Utc::now()),
        }
    }

    /// Parses and checks a stored record. Anything that fails here is
    /// treated by the store as "no session".
    #[track_caller]
    pub fn parse(key: &'static str, json: &str) -> AuthResult<Self> {
        let session: Self = serde_json::from_str(json)
            .map_err(|e| AuthError::corrupted_session(key, e.to_string()))?;
        session.check(key)?;
        Ok(session)
    }

    /// Builds a session from the browser's separate `user` and `token` values.
    /// A failure names the key whose value was unusable.
    #[track_caller]
    pub fn from_legacy(user_json: &str, token: &str) -> AuthResult<Self> {
        let user: IdentityRecord = serde_json::from_str(user_json)
            .map_err(|e| AuthError::corrupted_session(LEGACY_USER_KEY, e.to_string()))?;
        user.validate()
            .map_err(|e| AuthError::corrupted_session(LEGACY_USER_KEY, e.to_string()))?;
        if token.trim().is_empty() {
            return Err(AuthError::corrupted_session(LEGACY_TOKEN_KEY, "token is empty"));
        }

        Ok(Self {
            schema_version: SCHEMA_VERSION,
            token: SessionToken::from(token.to_string()),
            user,
            signed_in_at: None,
        })
    }

    #[track_caller]
    fn check(&self, key: &'static str) -> AuthResult<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(AuthError::corrupted_session(
                key,
                format!("unsupported schema version {}", self.schema_version),
            ));
        }
        if self.token.is_empty() {
            return Err(AuthError::corrupted_session(key, "token is empty"));
        }
        self.user
            .validate()
            .map_err(|e| AuthError::corrupted_session(key, e.to_string()))
    }
}
