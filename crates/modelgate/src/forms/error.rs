//! Form validation errors.

use thiserror::Error;

/// A user-correctable form error. The display text is shown inline as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one required field is empty.
    #[error("Please fill in all fields.")]
    MissingFields,

    /// Registration password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,
}
