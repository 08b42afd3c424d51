use crate::PasswordRequirements;

use std::fmt;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_WEAK: &str = "Password does not meet requirements";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Every failing field of a submitted form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
    /// Present when the password was given but is too weak.
    pub password_requirements: Option<PasswordRequirements>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FormField, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Shared email rules: required, then well-formed.
    pub(crate) fn check_email(&mut self, email: &str) {
        if email.is_empty() {
            self.push(FormField::Email, EMAIL_REQUIRED);
        } else if !crate::is_valid_email(email) {
            self.push(FormField::Email, EMAIL_INVALID);
        }
    }

    /// Shared new-password rules: required, strong, confirmed.
    pub(crate) fn check_new_password(&mut self, password: &str, confirm_password: &str) {
        if password.is_empty() {
            self.push(FormField::Password, PASSWORD_REQUIRED);
        } else {
            let requirements = PasswordRequirements::check(password);
            if !requirements.is_satisfied() {
                self.push(FormField::Password, PASSWORD_WEAK);
                self.password_requirements = Some(requirements);
            }
        }

        if confirm_password.is_empty() {
            self.push(FormField::ConfirmPassword, CONFIRM_REQUIRED);
        } else if password != confirm_password {
            self.push(FormField::ConfirmPassword, CONFIRM_MISMATCH);
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}
