//! Login and registration form validation.
//!
//! Validation is a pure function over the submitted field values. Fields
//! are not trimmed; a field is missing only when it is the empty string.

mod error;

pub use error::ValidationError;
pub use modelgate_types::{LoginForm, RegisterForm};

/// Validate a login submission.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    require_all(&[email, password])
}

/// Validate a registration submission.
///
/// Empty fields are reported before the password comparison runs.
pub fn validate_register(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    require_all(&[email, password, confirm_password])?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

fn require_all(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Forms that can check their own field values.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_login(&self.email, &self.password)
    }
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_register(&self.email, &self.password, &self.confirm_password)
    }
}

// ============================================================================
// Tests
// ============================================================================
