//! Authentication provider contract and the demo in-memory provider.

use crate::error::{AuthError, AuthResult, FormError};
use crate::forms::is_valid_email;
use crate::user::User;
use async_trait::async_trait;
use shopwave_catalog::UserId;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Email of the bundled demo account.
pub const DEMO_EMAIL: &str = "john@example.com";
/// Password of the bundled demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Signs shoppers in, up, and out of forgotten passwords.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> AuthResult<User>;

    async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<User>;

    /// Start a password reset for `email`.
    async fn forgot_password(&self, email: &str) -> AuthResult<()>;
}

#[derive(Debug, Clone)]
struct Account {
    id: UserId,
    name: String,
    email: String,
    password: String,
}

impl Account {
    fn to_user(&self) -> User {
        User::new(self.id.clone(), self.email.clone(), Some(self.name.clone()))
    }
}

/// Accounts kept in memory, seeded with the demo shopper.
///
/// Passwords are compared as plain text; there is no hashing or session
/// issuance here.
#[derive(Debug)]
pub struct DemoAuthProvider {
    accounts: RwLock<Vec<Account>>,
}

impl DemoAuthProvider {
    /// Provider holding only the demo account.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(vec![Account {
                id: UserId::new("1"),
                name: "John Doe".to_string(),
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            }]),
        }
    }

    /// Provider with no accounts at all.
    pub fn empty() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    pub fn account_count(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for DemoAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[async_trait]
impl AuthProvider for DemoAuthProvider {
    async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        let user = accounts
            .iter()
            .find(|a| same_email(&a.email, email) && a.password == password)
            .map(Account::to_user)
            .ok_or(AuthError::InvalidCredentials)?;
        info!(email = email.trim(), "user signed in");
        Ok(user)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<User> {
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail.into());
        }

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        if accounts.iter().any(|a| same_email(&a.email, email)) {
            return Err(AuthError::UserAlreadyExists(email.trim().to_string()));
        }

        let account = Account {
            id: UserId::generate(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let user = account.to_user();
        accounts.push(account);
        info!(email = email.trim(), accounts = accounts.len(), "user registered");
        Ok(user)
    }

    async fn forgot_password(&self, email: &str) -> AuthResult<()> {
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail.into());
        }
        debug!(email = email.trim(), "password reset requested");
        Ok(())
    }
}
