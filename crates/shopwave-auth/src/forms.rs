//! Sign-in, sign-up and password reset forms.
//!
//! Validation runs before any provider call. Emptiness is checked on trimmed
//! text; passwords are otherwise passed through untouched.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// Loose shape check: something on both sides of a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(FormError::MissingCredentials);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Email as sent to the provider.
    pub fn email(&self) -> &str {
        self.email.trim()
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [&self.name, &self.email, &self.password, &self.confirm_password];
        if fields.iter().any(|f| is_blank(f)) {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.name.trim()
    }

    pub fn email(&self) -> &str {
        self.email.trim()
    }
}

/// Password reset form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.email) {
            return Err(FormError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn email(&self) -> &str {
        self.email.trim()
    }
}
