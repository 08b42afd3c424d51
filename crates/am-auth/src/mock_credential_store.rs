use crate::{AuthError, CredentialStore, Result as AuthResult};

use am_core::{IdentityRecord, Role, UserId};

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use log::info;

/// Password shared by both demo accounts.
pub const DEMO_PASSWORD: &str = "1234";

#[derive(Debug, Clone)]
struct CredentialEntry {
    user: IdentityRecord,
    password: String,
}

/// In-memory credential table keyed by email. Passwords are plaintext: this
/// stands in for an identity backend and is not one.
#[derive(Debug, Default)]
pub struct MockCredentialStore {
    entries: RwLock<HashMap<String, CredentialEntry>>,
}

impl MockCredentialStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The two demo accounts: a customer and an admin.
    pub fn seeded() -> Self {
        Self::empty()
            .with_account(
                IdentityRecord::new(UserId(1), "Test User", "testing@gmail.com", Role::Customer)
                    .with_credits(1000, 250),
                DEMO_PASSWORD,
            )
            .with_account(
                IdentityRecord::new(UserId(2), "Admin User", "admin@gmail.com", Role::Admin)
                    .with_credits(9999, 0),
                DEMO_PASSWORD,
            )
    }

    pub fn with_account(self, user: IdentityRecord, password: impl Into<String>) -> Self {
        {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.insert(
                user.email.clone(),
                CredentialEntry {
                    user,
                    password: password.into(),
                },
            );
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MockCredentialStore {
    fn find_by_email(&self, email: &str) -> Option<IdentityRecord> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .map(|entry| entry.user.clone())
    }

    fn verify_password(&self, email: &str, password: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .is_some_and(|entry| entry.password == password)
    }

    #[track_caller]
    fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<IdentityRecord> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if entries.contains_key(email) {
            return Err(AuthError::email_already_exists(email));
        }

        let id = entries
            .values()
            .map(|entry| entry.user.id)
            .max()
            .map_or(UserId(1), UserId::next);

        let user = IdentityRecord::new(id, name, email, Role::Customer);
        entries.insert(
            email.to_string(),
            CredentialEntry {
                user: user.clone(),
                password: password.to_string(),
            },
        );

        info!("Registered account {} ({})", user.email, user.id);
        Ok(user)
    }
}
