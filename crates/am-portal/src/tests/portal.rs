use crate::tests::demo_portal;
use crate::{NavTarget, Navigation, Portal, PortalError, Route, Screen};

use am_auth::{
    AuthError, DurableStorage, MemoryStorage, MockCredentialStore, SESSION_KEY,
};
use am_config::{Config, StorageBackend};
use am_core::{FormField, LoginForm, SignupForm};

use std::sync::Arc;

use googletest::prelude::*;

fn signup_form(email: &str) -> SignupForm {
    SignupForm {
        name: "New Customer".to_string(),
        email: email.to_string(),
        password: "Str0ng!pass".to_string(),
        confirm_password: "Str0ng!pass".to_string(),
    }
}

// =========================================================================
// Login / logout
// =========================================================================

#[test]
fn given_customer_when_submit_login_then_lands_on_dashboard() {
    let (portal, storage) = demo_portal();

    let next = portal
        .submit_login(&LoginForm::new("testing@gmail.com", "1234"))
        .unwrap();

    assert_that!(next, eq(Screen::Dashboard));
    assert!(portal.session().is_authenticated());
    assert!(storage.get_item(SESSION_KEY).unwrap().is_some());
}

#[test]
fn given_admin_when_submit_login_then_lands_on_admin_dashboard() {
    let (portal, _storage) = demo_portal();

    let next = portal
        .submit_login(&LoginForm::new("admin@gmail.com", "1234"))
        .unwrap();

    assert_that!(next, eq(Screen::AdminDashboard));
    assert!(portal.session().is_admin());
}

#[test]
fn given_blank_form_when_submit_login_then_field_errors_and_no_lookup() {
    let (portal, _storage) = demo_portal();

    let err = portal.submit_login(&LoginForm::default()).unwrap_err();

    let errors = err.form_errors().unwrap();
    assert!(errors.message(FormField::Email).is_some());
    assert!(errors.message(FormField::Password).is_some());
    assert!(!portal.session().is_authenticated());
}

#[test]
fn given_wrong_password_when_submit_login_then_invalid_credentials_message() {
    let (portal, _storage) = demo_portal();

    let err = portal
        .submit_login(&LoginForm::new("testing@gmail.com", "nope"))
        .unwrap_err();

    assert!(matches!(
        err,
        PortalError::Auth {
            source: AuthError::InvalidCredentials { .. }
        }
    ));
    assert_that!(err.user_message().as_str(), eq("Invalid email or password"));
    assert!(portal.current_user().is_none());
}

#[test]
fn given_signed_in_when_sign_out_then_login_screen_and_storage_empty() {
    let (portal, storage) = demo_portal();
    portal
        .submit_login(&LoginForm::new("testing@gmail.com", "1234"))
        .unwrap();

    let next = portal.sign_out();

    assert_that!(next, eq(Screen::Login));
    assert!(!portal.session().is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn given_active_session_when_enter_login_screen_then_session_cleared() {
    let (portal, storage) = demo_portal();
    portal
        .submit_login(&LoginForm::new("admin@gmail.com", "1234"))
        .unwrap();

    let nav = portal.enter_login_screen();

    assert_eq!(nav, Navigation::Render(Route::new(Screen::Login)));
    assert!(portal.current_user().is_none());
    assert!(storage.is_empty());
}

// =========================================================================
// Signup
// =========================================================================

#[test]
fn given_new_email_when_submit_signup_then_signed_in_as_customer() {
    let (portal, _storage) = demo_portal();

    let next = portal.submit_signup(&signup_form("new@example.com")).unwrap();

    assert_that!(next, eq(Screen::Dashboard));
    let user = portal.current_user().unwrap();
    assert_that!(user.email.as_str(), eq("new@example.com"));
    assert_that!(user.credits, eq(0));
    assert!(!user.is_admin());
}

#[test]
fn given_existing_email_when_submit_signup_then_email_exists_and_no_session() {
    let (portal, _storage) = demo_portal();

    let err = portal
        .submit_signup(&signup_form("testing@gmail.com"))
        .unwrap_err();

    assert!(matches!(
        err,
        PortalError::Auth {
            source: AuthError::EmailAlreadyExists { .. }
        }
    ));
    assert!(!portal.session().is_authenticated());
}

#[test]
fn given_weak_password_when_submit_signup_then_requirements_reported() {
    let (portal, _storage) = demo_portal();
    let mut form = signup_form("weak@example.com");
    form.password = "short".to_string();
    form.confirm_password = "short".to_string();

    let err = portal.submit_signup(&form).unwrap_err();

    let errors = err.form_errors().unwrap();
    assert!(errors.message(FormField::Password).is_some());
    assert!(errors.password_requirements.is_some());
}

#[test]
fn given_signed_in_when_enter_signup_screen_then_redirected_home() {
    let (portal, _storage) = demo_portal();
    assert_eq!(
        portal.enter_signup_screen(),
        Navigation::Render(Route::new(Screen::Signup))
    );

    portal
        .submit_login(&LoginForm::new("testing@gmail.com", "1234"))
        .unwrap();

    assert_eq!(
        portal.enter_signup_screen(),
        Navigation::Redirect(Screen::Dashboard)
    );
}

// =========================================================================
// Navigation
// =========================================================================

#[test]
fn given_anonymous_when_navigate_to_guarded_screens_then_redirect_to_login() {
    let (portal, _storage) = demo_portal();

    for path in ["/dashboard", "/dashboard/settings", "/referral", "/admin/dashboard"] {
        assert_eq!(
            portal.navigate(path),
            Navigation::Redirect(Screen::Login),
            "{path}"
        );
    }
}

#[test]
fn given_customer_when_navigate_to_admin_then_redirect_to_dashboard() {
    let (portal, _storage) = demo_portal();
    portal
        .submit_login(&LoginForm::new("testing@gmail.com", "1234"))
        .unwrap();

    assert_eq!(
        portal.navigate("/admin/dashboard"),
        Navigation::Redirect(Screen::Dashboard)
    );
    assert!(portal.navigate("/dashboard").is_render());
}

#[test]
fn given_admin_when_navigate_anywhere_then_renders() {
    let (portal, _storage) = demo_portal();
    portal
        .submit_login(&LoginForm::new("admin@gmail.com", "1234"))
        .unwrap();

    for path in ["/admin/dashboard", "/dashboard", "/agents/abc", "/"] {
        assert!(portal.navigate(path).is_render(), "{path}");
    }
}

#[test]
fn given_unknown_path_when_navigate_then_not_found() {
    let (portal, _storage) = demo_portal();

    assert_eq!(portal.navigate("/missing"), Navigation::NotFound);
    assert!(Navigation::NotFound.screen().is_none());
}

#[test]
fn given_session_written_by_other_portal_when_navigate_then_rehydrated() {
    let storage = Arc::new(MemoryStorage::new());
    let credentials = Arc::new(MockCredentialStore::seeded());
    let first = Portal::with_parts(credentials.clone(), storage.clone());
    first
        .submit_login(&LoginForm::new("admin@gmail.com", "1234"))
        .unwrap();
    first.dispose();

    let reloaded = Portal::with_parts(credentials, storage);

    assert!(reloaded.navigate("/admin/dashboard").is_render());
    assert_that!(
        reloaded.current_user().unwrap().email.as_str(),
        eq("admin@gmail.com")
    );
}

// =========================================================================
// Menu and init
// =========================================================================

#[test]
fn given_session_changes_when_nav_menu_then_reflects_current_user() {
    let (portal, _storage) = demo_portal();
    assert!(portal.nav_menu().user_menu.is_none());

    portal
        .submit_login(&LoginForm::new("testing@gmail.com", "1234"))
        .unwrap();
    let menu = portal.nav_menu();
    assert!(menu.user_menu.unwrap().iter().any(|l| l.target == NavTarget::SignOut));

    portal.sign_out();
    assert!(portal.nav_menu().user_menu.is_none());
}

#[test]
fn given_memory_backend_without_demo_accounts_when_init_then_login_rejected() {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    config.auth.seed_demo_accounts = false;

    let portal = Portal::init(&config).unwrap();

    let result = portal.submit_login(&LoginForm::new("testing@gmail.com", "1234"));
    assert!(matches!(
        result,
        Err(PortalError::Auth {
            source: AuthError::InvalidCredentials { .. }
        })
    ));
}
