//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during sign-in and registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] lara_core::EmailError),

    /// A required form field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Sign-in rejected (blank password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// The address is reserved and cannot be registered.
    #[error("email address is not available")]
    EmailUnavailable,
}

impl AuthError {
    /// Short code carried in the `?error=` query of the redirect back to the form.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "invalid_email",
            Self::MissingField(_) => "missing_field",
            Self::InvalidCredentials => "credentials",
            Self::PasswordMismatch => "password_mismatch",
            Self::WeakPassword(_) => "password_too_short",
            Self::EmailUnavailable => "email_taken",
        }
    }
}
