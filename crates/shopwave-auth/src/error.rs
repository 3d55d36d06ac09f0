//! Authentication errors.

use thiserror::Error;

/// A form that cannot be submitted yet.
///
/// The display text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Login without email or password.
    #[error("Please enter both email and password")]
    MissingCredentials,

    /// Registration with an empty field.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Password reset without an email.
    #[error("Please enter your email address")]
    MissingEmail,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Email has no `@` or an empty side.
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User already exists.
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    /// Form validation failed before reaching the provider.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The provider could not be reached or failed internally.
    #[error("provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }

    /// Check if this was caught locally, without calling the provider.
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Form(_))
    }
}

/// Result alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
