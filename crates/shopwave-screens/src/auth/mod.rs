//! Sign-in, sign-up and password reset screens.
//!
//! Each screen validates its form locally first; a validation failure raises
//! an "Error" alert and never reaches the provider. The loading flag is
//! cleared whichever way the provider call ends.

mod forgot_password;
mod login;
mod register;

pub use forgot_password::ForgotPasswordScreen;
pub use login::{LoginScreen, LOGIN_FAILED_TITLE};
pub use register::{RegisterScreen, REGISTRATION_FAILED_TITLE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavEvent, Navigator, RecordingNavigator, Route};
    use async_trait::async_trait;
    use shopwave_auth::{
        AuthError, AuthProvider, AuthResult, DemoAuthProvider, RegisterForm, User,
    };

    /// Provider whose every call fails.
    struct Unreachable;

    #[async_trait]
    impl AuthProvider for Unreachable {
        async fn login(&self, _: &str, _: &str) -> AuthResult<User> {
            Err(AuthError::Provider("offline".into()))
        }

        async fn register(&self, _: &str, _: &str, _: &str) -> AuthResult<User> {
            Err(AuthError::Provider("offline".into()))
        }

        async fn forgot_password(&self, _: &str) -> AuthResult<()> {
            Err(AuthError::Provider("offline".into()))
        }
    }

    #[tokio::test]
    async fn test_login_success_replaces_with_home() {
        let auth = DemoAuthProvider::new();
        let mut nav = RecordingNavigator::starting_at(Route::Login);
        let mut screen = LoginScreen::new();
        screen.set_email("john@example.com");
        screen.set_password("password");

        let user = screen.submit(&auth, &mut nav).await;
        assert_eq!(user.map(|u| u.email), Some("john@example.com".to_string()));
        assert_eq!(nav.last_event(), Some(&NavEvent::Replace(Route::Home)));
        assert_eq!(nav.stack(), &[Route::Home]);
        assert!(screen.alert().is_none());
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn test_login_empty_fields_alert() {
        let auth = DemoAuthProvider::new();
        let mut nav = RecordingNavigator::new();
        let mut screen = LoginScreen::new();
        screen.set_email("john@example.com");

        assert!(screen.submit(&auth, &mut nav).await.is_none());
        let alert = screen.alert().unwrap();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Please enter both email and password");
        assert!(nav.events().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_alert_clears_loading() {
        let auth = DemoAuthProvider::new();
        let mut nav = RecordingNavigator::new();
        let mut screen = LoginScreen::new();
        screen.set_email("john@example.com");
        screen.set_password("wrong");

        assert!(screen.submit(&auth, &mut nav).await.is_none());
        assert!(!screen.is_loading());
        let alert = screen.alert().unwrap();
        assert_eq!(alert.title, LOGIN_FAILED_TITLE);
        assert!(alert.message.contains("john@example.com / password"));
        assert!(nav.events().is_empty());

        screen.dismiss_alert();
        assert!(screen.alert().is_none());
    }

    #[test]
    fn test_login_links() {
        let screen = LoginScreen::new();
        let mut nav = RecordingNavigator::starting_at(Route::Login);
        screen.go_to_forgot_password(&mut nav);
        assert_eq!(nav.current(), &Route::ForgotPassword);
        nav.back();
        screen.go_to_register(&mut nav);
        assert_eq!(nav.current(), &Route::Register);
    }

    #[test]
    fn test_password_visibility() {
        let mut screen = LoginScreen::new();
        assert!(!screen.is_password_visible());
        screen.toggle_show_password();
        assert!(screen.is_password_visible());
    }

    fn filled_register(confirm: &str) -> RegisterScreen {
        let mut screen = RegisterScreen::new();
        screen.form = RegisterForm {
            name: "Ann Lee".into(),
            email: "ann@example.com".into(),
            password: "hunter22".into(),
            confirm_password: confirm.into(),
        };
        screen
    }

    #[tokio::test]
    async fn test_register_success() {
        let auth = DemoAuthProvider::new();
        let mut nav = RecordingNavigator::starting_at(Route::Register);
        let mut screen = filled_register("hunter22");

        assert!(screen.submit(&auth, &mut nav).await.is_some());
        assert_eq!(nav.current(), &Route::Home);
        assert_eq!(auth.account_count(), 2);
    }

    #[tokio::test]
    async fn test_register_mismatch() {
        let auth = DemoAuthProvider::new();
        let mut nav = RecordingNavigator::new();
        let mut screen = filled_register("hunter23");

        assert!(screen.submit(&auth, &mut nav).await.is_none());
        assert_eq!(screen.alert().unwrap().message, "Passwords do not match");
        assert_eq!(auth.account_count(), 1);
    }

    #[tokio::test]
    async fn test_register_provider_failure() {
        let mut nav = RecordingNavigator::new();
        let mut screen = filled_register("hunter22");

        assert!(screen.submit(&Unreachable, &mut nav).await.is_none());
        assert!(!screen.is_loading());
        assert_eq!(screen.alert().unwrap().title, REGISTRATION_FAILED_TITLE);
    }

    #[tokio::test]
    async fn test_forgot_password_flow() {
        let auth = DemoAuthProvider::new();
        let mut screen = ForgotPasswordScreen::new();

        screen.submit(&auth).await;
        assert_eq!(
            screen.alert().unwrap().message,
            "Please enter your email address"
        );
        assert!(!screen.is_submitted());

        screen.set_email("john@example.com");
        screen.submit(&auth).await;
        assert!(screen.is_submitted());
        assert!(screen.alert().is_none());
    }

    #[tokio::test]
    async fn test_forgot_password_provider_failure() {
        let mut screen = ForgotPasswordScreen::new();
        screen.set_email("john@example.com");
        screen.submit(&Unreachable).await;
        assert!(!screen.is_submitted());
        assert!(!screen.is_loading());
        assert_eq!(
            screen.alert().unwrap().message,
            "An error occurred. Please try again later."
        );
    }
}
