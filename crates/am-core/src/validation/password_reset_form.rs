use crate::FormErrors;

/// First step of the forgot-password screen: ask for a reset link.
#[derive(Debug, Clone, Default)]
pub struct ResetRequestForm {
    pub email: String,
}

impl ResetRequestForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check_email(&self.email);
        errors.into_result()
    }
}

/// Second step, reached with a reset token: choose the new password.
#[derive(Debug, Clone, Default)]
pub struct PasswordResetForm {
    pub password: String,
    pub confirm_password: String,
}

impl PasswordResetForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check_new_password(&self.password, &self.confirm_password);
        errors.into_result()
    }
}
