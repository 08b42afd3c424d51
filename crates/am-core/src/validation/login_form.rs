use crate::FormErrors;
use crate::validation::form_errors::{EMAIL_REQUIRED, FormField, PASSWORD_REQUIRED};

/// Fields of the login screen. Only presence is checked here; the
/// credential check happens in the session store.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.email.trim().is_empty() {
            errors.push(FormField::Email, EMAIL_REQUIRED);
        }
        if self.password.is_empty() {
            errors.push(FormField::Password, PASSWORD_REQUIRED);
        }

        errors.into_result()
    }
}
