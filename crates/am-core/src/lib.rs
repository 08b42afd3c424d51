pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result as CoreResult};
pub use models::identity_record::IdentityRecord;
pub use models::role::Role;
pub use models::user_id::UserId;
pub use validation::form_errors::{FieldError, FormErrors, FormField};
pub use validation::login_form::LoginForm;
pub use validation::password_requirements::PasswordRequirements;
pub use validation::password_reset_form::{PasswordResetForm, ResetRequestForm};
pub use validation::signup_form::SignupForm;
pub use validation::{is_valid_email, require_non_empty};

#[cfg(test)]
mod tests;
