//! Application layer - Host-view compositions.
//!
//! This layer wires the independent view-state machines to the host's
//! read-only data collections and to the outward signal ports. It owns no
//! business rules of its own; every state change is delegated to the
//! domain machines.

pub mod views;

pub use views::{DashboardData, DashboardView, RegisterView, SubmitOutcome};
