pub mod credential_store;
pub mod error;
pub mod mock_credential_store;
pub mod route_guard;
pub mod session_queries;
pub mod session_store;
pub mod session_token;
pub mod storage;
pub mod stored_session;

pub use credential_store::CredentialStore;
pub use error::{AuthError, Result};
pub use mock_credential_store::{DEMO_PASSWORD, MockCredentialStore};
pub use route_guard::{GuardDecision, RedirectTarget, RouteAccess, decide};
pub use session_queries::SessionQueries;
pub use session_store::SessionStore;
pub use session_token::SessionToken;
pub use storage::{
    DurableStorage, FileStorage, MemoryStorage, StorageError, StorageResult,
};
pub use stored_session::{SCHEMA_VERSION, StoredSession};

/// Key of the combined identity + token record.
pub const SESSION_KEY: &str = "session";
/// Key the browser portal stored the identity under.
pub const LEGACY_USER_KEY: &str = "user";
/// Key the browser portal stored the token under.
pub const LEGACY_TOKEN_KEY: &str = "token";

#[cfg(test)]
mod tests;
