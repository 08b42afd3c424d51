use crate::{CoreError, IdentityRecord, Role, UserId};

use googletest::prelude::*;

fn test_user() -> IdentityRecord {
    IdentityRecord::new(UserId(1), "Test User", "testing@gmail.com", Role::Customer)
        .with_credits(1000, 250)
}

#[test]
fn given_record_when_serialized_then_uses_camel_case_keys() {
    let json = serde_json::to_string(&test_user()).unwrap();

    assert_that!(json, contains_substring("\"usedCredits\":250"));
    assert_that!(json, contains_substring("\"role\":\"customer\""));
    assert_that!(json, contains_substring("\"id\":1"));
}

#[test]
fn given_browser_shaped_json_when_deserialized_then_matches() {
    let json = r#"{"id":2,"name":"Admin User","email":"admin@gmail.com","role":"admin","credits":9999,"usedCredits":0}"#;

    let record: IdentityRecord = serde_json::from_str(json).unwrap();

    assert_that!(record.id, eq(UserId(2)));
    assert_that!(record.role, eq(Role::Admin));
    assert_that!(record.credits, eq(9999));
    assert!(record.is_admin());
}

#[test]
fn given_negative_credits_when_deserialized_then_rejected() {
    let json = r#"{"id":1,"name":"A","email":"a@b.co","role":"customer","credits":-5,"usedCredits":0}"#;

    let result = serde_json::from_str::<IdentityRecord>(json);

    assert!(result.is_err());
}

#[test]
fn given_missing_role_when_deserialized_then_rejected() {
    let json = r#"{"id":1,"name":"A","email":"a@b.co","credits":0,"usedCredits":0}"#;

    assert!(serde_json::from_str::<IdentityRecord>(json).is_err());
}

#[test]
fn given_valid_record_when_validate_then_ok() {
    assert_that!(test_user().validate(), ok(anything()));
}

#[test]
fn given_blank_name_when_validate_then_names_field() {
    let mut user = test_user();
    user.name = "   ".into();

    let err = user.validate().unwrap_err();

    assert!(matches!(err, CoreError::Validation { field: "name", .. }));
    assert_eq!(err.field(), Some("name"));
}

#[test]
fn given_new_record_when_created_then_credits_start_at_zero() {
    let user = IdentityRecord::new(UserId(3), "New", "new@example.com", Role::Customer);

    assert_that!(user.credits, eq(0));
    assert_that!(user.used_credits, eq(0));
}

#[test]
fn given_user_id_when_next_then_increments() {
    assert_that!(UserId(2).next(), eq(UserId(3)));
    assert_that!(UserId(u64::MAX).next(), eq(UserId(u64::MAX)));
}
