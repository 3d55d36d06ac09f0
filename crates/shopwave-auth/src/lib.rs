//! Authentication for ShopWave.
//!
//! Provides the auth provider contract, a demo in-memory provider, and the
//! validation behind the login, registration and password reset forms.

mod error;
mod forms;
mod provider;
mod user;

pub use error::{AuthError, AuthResult, FormError};
pub use forms::{is_valid_email, ForgotPasswordForm, LoginForm, RegisterForm};
pub use provider::{AuthProvider, DemoAuthProvider, DEMO_EMAIL, DEMO_PASSWORD};
pub use user::User;
