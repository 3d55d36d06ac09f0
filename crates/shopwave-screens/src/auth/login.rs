use crate::alert::Alert;
use crate::navigation::{Navigator, Route};
use shopwave_auth::{AuthProvider, LoginForm, User, DEMO_EMAIL, DEMO_PASSWORD};
use tracing::warn;

pub const LOGIN_FAILED_TITLE: &str = "Login Failed";

/// Sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    pub form: LoginForm,
    show_password: bool,
    is_loading: bool,
    alert: Option<Alert>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Validate, sign in, and go home on success.
    pub async fn submit<N: Navigator + ?Sized>(
        &mut self,
        auth: &dyn AuthProvider,
        navigator: &mut N,
    ) -> Option<User> {
        self.alert = None;
        if let Err(e) = self.form.validate() {
            self.alert = Some(Alert::error(e.to_string()));
            return None;
        }

        self.is_loading = true;
        let result = auth.login(self.form.email(), &self.form.password).await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                navigator.replace(Route::Home);
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.alert = Some(Alert::new(
                    LOGIN_FAILED_TITLE,
                    format!(
                        "Invalid email or password. For demo, use {DEMO_EMAIL} / {DEMO_PASSWORD}"
                    ),
                ));
                None
            }
        }
    }

    pub fn go_to_register<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Register);
    }

    pub fn go_to_forgot_password<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::ForgotPassword);
    }
}
