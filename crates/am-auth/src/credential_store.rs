use crate::Result as AuthResult;

use am_core::IdentityRecord;

/// Source of accounts the session store authenticates against.
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive lookup.
    fn find_by_email(&self, email: &str) -> Option<IdentityRecord>;

    /// False for unknown emails as well as wrong passwords.
    fn verify_password(&self, email: &str, password: &str) -> bool;

    /// Adds a customer account. Fails with `EmailAlreadyExists` if taken.
    fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<IdentityRecord>;
}
