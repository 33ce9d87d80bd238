//! Catalog module - Read-only records supplied by the host.
//!
//! The host constructs and owns these collections (there are no module-level
//! defaults); the core only looks them up and never mutates them.

mod goal;
mod metric;
mod plan;
mod profile;
mod service;

pub use goal::Goal;
pub use metric::{HealthMetric, MetricValue, Trend};
pub use plan::{DietPlan, WorkoutPlan};
pub use profile::{QuickAccessItem, UserProfile};
pub use service::NearbyService;
