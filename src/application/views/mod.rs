//! Host views composing the view-state machines over catalog data.

mod dashboard_view;
mod register_view;

pub use dashboard_view::{DashboardData, DashboardView};
pub use register_view::{RegisterView, SubmitOutcome};
