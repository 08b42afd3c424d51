use crate::FormErrors;
use crate::validation::form_errors::{FormField, NAME_REQUIRED};

/// Fields of the signup screen.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.push(FormField::Name, NAME_REQUIRED);
        }
        errors.check_email(&self.email);
        errors.check_new_password(&self.password, &self.confirm_password);

        errors.into_result()
    }
}
