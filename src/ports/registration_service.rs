//! RegistrationService port - External acceptance of a registration.
//!
//! The core validates and sanitizes the payload; what "registering" means
//! (API call, queue, in-memory fake) belongs to the adapter.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::view_state::RegistrationData;

/// Errors an acceptance call can surface to the form.
#[derive(Debug, Clone, Error)]
pub enum RegistrationServiceError {
    /// The account already exists for this email.
    #[error("An account with this email already exists")]
    EmailTaken,

    /// The service could not be reached or failed internally.
    #[error("Registration service unavailable: {0}")]
    Unavailable(String),
}

impl RegistrationServiceError {
    /// Creates an unavailable error with a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Port for accepting a validated, sanitized registration.
///
/// Implementations must tolerate being called at most once per successful
/// submit; the core's phase guard ensures no double-fire.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Accept the registration, or explain why it was not accepted.
    async fn register(&self, data: RegistrationData) -> Result<(), RegistrationServiceError>;
}
