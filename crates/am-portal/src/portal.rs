use crate::{NavMenu, Navigation, PortalResult, Route, Screen, logger};

use am_auth::{
    CredentialStore, DurableStorage, FileStorage, GuardDecision, MemoryStorage,
    MockCredentialStore, SessionStore,
};
use am_config::{Config, StorageBackend};
use am_core::{IdentityRecord, LoginForm, SignupForm};

use std::sync::Arc;

use log::{debug, info};

/// Application context handed to every screen.
///
/// Owns the session store; the UI layer borrows it instead of reaching for
/// shared global state.
pub struct Portal {
    session: SessionStore,
}

impl Portal {
    /// Installs logging, then builds storage, credential table and session
    /// store from config.
    pub fn init(config: &Config) -> PortalResult<Self> {
        config.validate()?;
        logger::install(config)?;
        config.log_summary();

        let storage: Arc<dyn DurableStorage> = match config.storage.backend {
            StorageBackend::File => {
                let dir = config.storage_path()?;
                info!("Session storage: {}", dir.display());
                Arc::new(FileStorage::open(dir)?)
            }
            StorageBackend::Memory => {
                info!("Session storage: in-memory");
                Arc::new(MemoryStorage::new())
            }
        };

        let credentials = if config.auth.seed_demo_accounts {
            MockCredentialStore::seeded()
        } else {
            MockCredentialStore::empty()
        };
        info!("Credential table: {} account(s)", credentials.len());

        Ok(Self::with_parts(Arc::new(credentials), storage))
    }

    pub fn with_parts(
        credentials: Arc<dyn CredentialStore>,
        storage: Arc<dyn DurableStorage>,
    ) -> Self {
        Self {
            session: SessionStore::new(credentials, storage),
        }
    }

    /// Shuts the portal down. A persisted session is left in place for the
    /// next start.
    pub fn dispose(self) {
        let signed_in = self.session.is_authenticated();
        info!("Portal disposed (session active: {signed_in})");
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn current_user(&self) -> Option<IdentityRecord> {
        self.session.current_user()
    }

    /// Runs the guard for `path`.
    pub fn navigate(&self, path: &str) -> Navigation {
        let Some(route) = Screen::resolve(path) else {
            debug!("No screen for {path}");
            return Navigation::NotFound;
        };

        match route.screen.access().check(&self.session) {
            GuardDecision::Render => Navigation::Render(route),
            GuardDecision::RedirectTo(target) => {
                debug!("Redirecting {path} to {}", target.path());
                Navigation::Redirect(Screen::from(target))
            }
        }
    }

    /// The login screen always starts from a clean slate.
    pub fn enter_login_screen(&self) -> Navigation {
        self.session.clear_all();
        Navigation::Render(Route::new(Screen::Login))
    }

    /// Signed-in visitors are sent to their home screen instead.
    pub fn enter_signup_screen(&self) -> Navigation {
        match self.session.current_user() {
            Some(user) => Navigation::Redirect(Screen::home_for(user.role)),
            None => Navigation::Render(Route::new(Screen::Signup)),
        }
    }

    /// Validates, signs in, and returns the screen to show next.
    pub fn submit_login(&self, form: &LoginForm) -> PortalResult<Screen> {
        form.validate()?;
        let user = self.session.login(&form.email, &form.password)?;
        Ok(Screen::home_for(user.role))
    }

    /// Validates, registers, then signs in with the same credentials.
    pub fn submit_signup(&self, form: &SignupForm) -> PortalResult<Screen> {
        form.validate()?;
        self.session
            .signup(&form.name, &form.email, &form.password)?;
        let user = self.session.login(&form.email, &form.password)?;
        Ok(Screen::home_for(user.role))
    }

    pub fn sign_out(&self) -> Screen {
        self.session.logout();
        Screen::Login
    }

    pub fn nav_menu(&self) -> NavMenu {
        NavMenu::for_user(self.session.current_user().as_ref())
    }
}
