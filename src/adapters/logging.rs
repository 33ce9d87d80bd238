//! Logging adapters - Tracing-backed defaults for the outward ports.
//!
//! Every signal a view emits must land somewhere; a host that has not
//! wired its own router, goal editor, or registration backend gets these
//! defaults, which record the intent in the log and nothing more.
//! `LoggingRegistrationService` accepts every registration, making it
//! suitable for demos and local runs only.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::GoalId;
use crate::domain::view_state::RegistrationData;
use crate::ports::{
    DashboardSignals, NavigationTarget, Navigator, RegistrationService, RegistrationServiceError,
};

/// Signal sink that writes each dashboard action to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSignals;

impl DashboardSignals for LoggingSignals {
    fn add_goal_requested(&self) {
        info!("add goal requested");
    }

    fn edit_goal_requested(&self, goal_id: &GoalId) {
        info!(goal_id = %goal_id, "edit goal requested");
    }

    fn notifications_acknowledged(&self) {
        info!("notifications acknowledged");
    }

    fn quick_access_activated(&self, item_id: &str) {
        info!(item_id, "quick access activated");
    }
}

impl Navigator for LoggingSignals {
    fn navigate(&self, target: NavigationTarget) {
        info!(?target, "navigation requested");
    }
}

/// Registration backend that logs the payload and accepts it.
///
/// The password is deliberately left out of the log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingRegistrationService;

#[async_trait]
impl RegistrationService for LoggingRegistrationService {
    async fn register(&self, data: RegistrationData) -> Result<(), RegistrationServiceError> {
        info!(
            first_name = %data.first_name,
            last_name = %data.last_name,
            email = %data.email,
            "registration accepted"
        );
        Ok(())
    }
}
