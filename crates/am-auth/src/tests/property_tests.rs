use crate::tests::seeded_store;
use crate::{AuthError, DEMO_PASSWORD};

use proptest::prelude::*;

proptest! {
    #[test]
    fn given_wrong_password_for_known_email_when_login_then_invalid_credentials(
        email in prop_oneof![
            Just("testing@gmail.com"),
            Just("admin@gmail.com"),
        ],
        password in "[a-zA-Z0-9!@#]{1,16}",
    ) {
        prop_assume!(password != DEMO_PASSWORD);
        let (store, _storage) = seeded_store();

        let result = store.login(email, &password);

        let rejected = matches!(result, Err(AuthError::InvalidCredentials { .. }));
        prop_assert!(rejected);
        prop_assert!(!store.is_authenticated());
    }

    #[test]
    fn given_unknown_email_when_login_then_invalid_credentials(local in "[a-z]{1,12}") {
        let email = format!("{local}@unknown.example");
        let (store, storage) = seeded_store();

        let result = store.login(&email, DEMO_PASSWORD);

        let rejected = matches!(result, Err(AuthError::InvalidCredentials { .. }));
        prop_assert!(rejected);
        prop_assert!(storage.is_empty());
    }

    #[test]
    fn given_any_login_sequence_when_logout_then_anonymous(admin_first in any::<bool>(), logins in 1usize..4) {
        let (store, _storage) = seeded_store();
        for i in 0..logins {
            let email = if (i % 2 == 0) == admin_first { "admin@gmail.com" } else { "testing@gmail.com" };
            store.login(email, DEMO_PASSWORD).unwrap();
            prop_assert!(store.is_authenticated());
        }

        store.logout();

        prop_assert!(!store.is_authenticated());
        prop_assert!(store.current_user().is_none());
    }
}
