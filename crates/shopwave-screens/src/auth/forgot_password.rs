use crate::alert::Alert;
use crate::navigation::Navigator;
use shopwave_auth::{AuthProvider, ForgotPasswordForm};
use tracing::warn;

/// Password reset request.
///
/// After a successful submit the screen switches to its "check your email"
/// state.
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordScreen {
    pub form: ForgotPasswordForm,
    is_loading: bool,
    is_submitted: bool,
    alert: Option<Alert>,
}

impl ForgotPasswordScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub async fn submit(&mut self, auth: &dyn AuthProvider) {
        self.alert = None;
        if let Err(e) = self.form.validate() {
            self.alert = Some(Alert::error(e.to_string()));
            return;
        }

        self.is_loading = true;
        let result = auth.forgot_password(self.form.email()).await;
        self.is_loading = false;

        match result {
            Ok(()) => self.is_submitted = true,
            Err(e) => {
                warn!(error = %e, "password reset failed");
                self.alert = Some(Alert::error("An error occurred. Please try again later."));
            }
        }
    }

    pub fn back_to_login<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.back();
    }
}
