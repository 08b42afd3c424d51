use crate::{
    AuthError, CredentialStore, DurableStorage, LEGACY_TOKEN_KEY, LEGACY_USER_KEY,
    Result as AuthResult, SESSION_KEY, SessionQueries, SessionToken, StoredSession,
};

use am_core::{IdentityRecord, require_non_empty};

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

const ALL_KEYS: [&str; 3] = [SESSION_KEY, LEGACY_USER_KEY, LEGACY_TOKEN_KEY];

/// In-memory view of the session.
#[derive(Debug)]
enum SessionCache {
    /// Storage has not been consulted since construction or the last
    /// [`SessionStore::invalidate_cache`].
    Unloaded,
    /// No session. `corrupted` lists keys that held unreadable values when
    /// storage was last read.
    Anonymous { corrupted: Vec<&'static str> },
    Active(StoredSession),
}

/// Single source of truth for who is signed in.
///
/// Identity and token live in one [`StoredSession`] that is mirrored to
/// durable storage under a single key, so they are always written and
/// cleared together. Queries never fail: a missing or unreadable record is
/// simply "no session".
pub struct SessionStore {
    credentials: Arc<dyn CredentialStore>,
    storage: Arc<dyn DurableStorage>,
    cache: Mutex<SessionCache>,
}

impl SessionStore {
    pub fn new(credentials: Arc<dyn CredentialStore>, storage: Arc<dyn DurableStorage>) -> Self {
        Self {
            credentials,
            storage,
            cache: Mutex::new(SessionCache::Unloaded),
        }
    }

    /// Signs in, replacing any active session.
    ///
    /// Nothing is changed unless the credentials match and the session was
    /// persisted.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<IdentityRecord> {
        require_non_empty("email", email)?;
        require_non_empty("password", password)?;

        let user = match self.credentials.find_by_email(email) {
            Some(user) if self.credentials.verify_password(email, password) => user,
            _ => {
                warn!("Login rejected for {email}");
                return Err(AuthError::invalid_credentials());
            }
        };

        let session = StoredSession::start(user.clone());
        let json = serde_json::to_string(&session)?;

        let mut cache = self.cache();
        self.storage
            .set_item(SESSION_KEY, &json)
            .map_err(AuthError::storage)?;
        self.remove_quietly(LEGACY_USER_KEY);
        self.remove_quietly(LEGACY_TOKEN_KEY);
        *cache = SessionCache::Active(session);

        info!("Signed in {} ({})", user.email, user.role);
        Ok(user)
    }

    /// Registers a customer account. Does not sign in; the caller follows up
    /// with [`login`](Self::login).
    pub fn signup(&self, name: &str, email: &str, password: &str) -> AuthResult<IdentityRecord> {
        require_non_empty("name", name)?;
        require_non_empty("email", email)?;
        require_non_empty("password", password)?;

        if self.credentials.find_by_email(email).is_some() {
            warn!("Signup rejected: {email} is already registered");
            return Err(AuthError::email_already_exists(email));
        }

        self.credentials.register(name.trim(), email, password)
    }

    /// Ends the session. Idempotent.
    pub fn logout(&self) {
        self.clear("logout");
    }

    /// Same effect as [`logout`](Self::logout); called whenever the login
    /// screen is entered, whether or not a session is believed active.
    pub fn clear_all(&self) {
        self.clear("clear_all");
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.loaded_cache(), SessionCache::Active(_))
    }

    pub fn is_admin(&self) -> bool {
        match &*self.loaded_cache() {
            SessionCache::Active(session) => session.user.is_admin(),
            _ => false,
        }
    }

    pub fn current_user(&self) -> Option<IdentityRecord> {
        match &*self.loaded_cache() {
            SessionCache::Active(session) => Some(session.user.clone()),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<SessionToken> {
        match &*self.loaded_cache() {
            SessionCache::Active(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    /// Drops the in-memory copy so the next query reads storage again, as
    /// after a page reload.
    pub fn invalidate_cache(&self) {
        *self.cache() = SessionCache::Unloaded;
    }

    fn cache(&self) -> MutexGuard<'_, SessionCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn loaded_cache(&self) -> MutexGuard<'_, SessionCache> {
        let mut cache = self.cache();
        if matches!(*cache, SessionCache::Unloaded) {
            *cache = self.rehydrate();
        }
        cache
    }

    fn clear(&self, reason: &str) {
        let mut cache = self.cache();
        let previous = mem::replace(
            &mut *cache,
            SessionCache::Anonymous {
                corrupted: Vec::new(),
            },
        );

        // Storage not read yet: find out what is unreadable before it goes.
        let corrupted = match previous {
            SessionCache::Unloaded => match self.rehydrate() {
                SessionCache::Anonymous { corrupted } => corrupted,
                _ => Vec::new(),
            },
            SessionCache::Anonymous { corrupted } => corrupted,
            SessionCache::Active(_) => Vec::new(),
        };

        for key in ALL_KEYS {
            if corrupted.contains(&key) {
                if let Err(e) = self.storage.discard_corrupted(key) {
                    warn!("{reason}: failed to discard corrupted '{key}': {e}");
                }
            } else {
                self.remove_quietly(key);
            }
        }

        debug!("Session cleared ({reason})");
    }

    fn remove_quietly(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            warn!("Failed to remove '{key}' from storage: {e}");
        }
    }

    fn read(&self, key: &'static str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read '{key}' from storage: {e}");
                None
            }
        }
    }

    /// Combined record first, then the two-key layout the browser wrote.
    fn rehydrate(&self) -> SessionCache {
        let mut corrupted = Vec::new();

        if let Some(json) = self.read(SESSION_KEY) {
            match StoredSession::parse(SESSION_KEY, &json) {
                Ok(session) => {
                    info!("Restored session for {}", session.user.email);
                    return SessionCache::Active(session);
                }
                Err(e) => {
                    warn!("Ignoring stored session: {e}");
                    corrupted.push(SESSION_KEY);
                }
            }
        }

        let user = self.read(LEGACY_USER_KEY);
        let token = self.read(LEGACY_TOKEN_KEY);
        match (user, token) {
            (Some(user), Some(token)) => match StoredSession::from_legacy(&user, &token) {
                Ok(session) => {
                    self.migrate_legacy(&session);
                    return SessionCache::Active(session);
                }
                Err(e) => {
                    warn!("Ignoring legacy session: {e}");
                    corrupted.extend(e.corrupted_key());
                }
            },
            (None, None) => {}
            _ => warn!("Ignoring legacy session: identity and token must both be present"),
        }

        if corrupted.is_empty() {
            debug!("No stored session");
        }
        SessionCache::Anonymous { corrupted }
    }

    /// Rewrites a two-key session under the combined key. Best effort: the
    /// session is usable even if the rewrite fails.
    fn migrate_legacy(&self, session: &StoredSession) {
        let written = serde_json::to_string(session)
            .map_err(AuthError::from)
            .and_then(|json| {
                self.storage
                    .set_item(SESSION_KEY, &json)
                    .map_err(AuthError::storage)
            });

        match written {
            Ok(()) => {
                self.remove_quietly(LEGACY_USER_KEY);
                self.remove_quietly(LEGACY_TOKEN_KEY);
                info!("Migrated legacy session for {}", session.user.email);
            }
            Err(e) => warn!("Keeping legacy session layout: {e}"),
        }
    }
}

impl SessionQueries for SessionStore {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }

    fn is_admin(&self) -> bool {
        SessionStore::is_admin(self)
    }
}
