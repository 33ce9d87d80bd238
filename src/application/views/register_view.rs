//! RegisterView - Host composition for the registration page.
//!
//! Owns the registration form state machine and drives the single async
//! boundary of the core: the acceptance call between the submitting and
//! settled phases.

use std::sync::Arc;

use crate::domain::view_state::{RegistrationField, RegistrationForm};
use crate::ports::{NavigationTarget, Navigator, RegistrationService};

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays editable with errors visible.
    Rejected,
    /// A submit was already in flight or settled; nothing happened.
    Ignored,
    /// The acceptance call succeeded and navigation was requested.
    Accepted,
    /// The acceptance call failed; the form is editable again with a
    /// form-level submission error.
    Failed,
}

/// Presentation state of the registration page.
pub struct RegisterView {
    form: RegistrationForm,
    service: Arc<dyn RegistrationService>,
    navigator: Arc<dyn Navigator>,
}

impl RegisterView {
    pub fn new(service: Arc<dyn RegistrationService>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            form: RegistrationForm::new(),
            service,
            navigator,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Routes a field edit to the form (a no-op while a submit is in
    /// flight).
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.toggle_password_visibility();
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.form.toggle_confirm_password_visibility();
    }

    /// Submits the form.
    ///
    /// On valid input this awaits the acceptance service exactly once,
    /// settles the form, and requests navigation to the dashboard. A
    /// failed acceptance call returns the form to editing with a
    /// submission error and requests no navigation.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(data) = self.form.begin_submit() else {
            return if self.form.phase().accepts_input() {
                SubmitOutcome::Rejected
            } else {
                SubmitOutcome::Ignored
            };
        };

        match self.service.register(data).await {
            Ok(()) => {
                self.form.settle();
                tracing::info!("registration accepted");
                self.navigator.navigate(NavigationTarget::Dashboard);
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration rejected by service");
                self.form.reject(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
