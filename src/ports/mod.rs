//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the presentation-state core and the outside world. Adapters implement
//! these ports.
//!
//! - `RegistrationService` - External acceptance of a validated registration
//! - `Navigator` - Opaque navigation requests emitted to the host router
//! - `DashboardSignals` - One-shot dashboard action signals

mod dashboard_signals;
mod navigator;
mod registration_service;

pub use dashboard_signals::DashboardSignals;
pub use navigator::{NavigationTarget, Navigator};
pub use registration_service::{RegistrationService, RegistrationServiceError};
