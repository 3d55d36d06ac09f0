//! Signed-in shopper.
//!
//! Signed-out is the absence of a `User`; screens hold `Option<User>`.

use serde::{Deserialize, Serialize};
use shopwave_catalog::UserId;

/// A shopper the auth provider has signed in or registered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Name given at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name,
        }
    }

    /// Name for greetings: the display name, else the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let user = User::new(UserId::new("user_123"), "test@example.com", Some("Test User".to_string()));
        assert_eq!(user.display_name(), "Test User");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User::new(UserId::new("u"), "jo@example.com", None);
        assert_eq!(user.display_name(), "jo@example.com");
    }

    #[test]
    fn test_serde_shape() {
        let user = User::new(UserId::new("7"), "a@b.c", None);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "7");
        assert!(json.get("name").is_none());
        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }
}
