use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn given_known_role_strings_when_parsed_then_returns_variant() {
    assert_eq!(Role::from_str("customer").unwrap(), Role::Customer);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
}

#[test]
fn given_unknown_role_when_parsed_then_returns_invalid_role() {
    let result = Role::from_str("superuser");

    assert!(matches!(result, Err(CoreError::InvalidRole { ref value, .. }) if value == "superuser"));
}

#[test]
fn given_role_when_parsing_is_case_sensitive_then_rejects_uppercase() {
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn given_role_when_serialized_then_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
}

#[test]
fn given_roles_when_is_admin_then_only_admin_true() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Customer.is_admin());
}
