use crate::alert::Alert;
use crate::navigation::{Navigator, Route};
use shopwave_auth::{AuthProvider, RegisterForm, User};
use tracing::warn;

pub const REGISTRATION_FAILED_TITLE: &str = "Registration Failed";

/// Sign-up form.
#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    pub form: RegisterForm,
    show_password: bool,
    show_confirm_password: bool,
    is_loading: bool,
    alert: Option<Alert>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_show_confirm_password(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn is_confirm_password_visible(&self) -> bool {
        self.show_confirm_password
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Validate, create the account, and go home on success.
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
        let result = auth
            .register(self.form.name(), self.form.email(), &self.form.password)
            .await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                navigator.replace(Route::Home);
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "registration failed");
                self.alert = Some(Alert::new(
                    REGISTRATION_FAILED_TITLE,
                    "An error occurred during registration",
                ));
                None
            }
        }
    }

    /// Return to the sign-in screen this one was opened from.
    pub fn back_to_login<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.back();
    }
}
