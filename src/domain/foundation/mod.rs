//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the health dashboard domain.

mod calendar;
mod errors;
mod ids;
mod metric_status;
mod progress;
mod trend;

pub use calendar::format_short_date;
pub use errors::ValidationError;
pub use ids::{GoalId, MetricId, PlanId, ServiceId};
pub use metric_status::MetricStatus;
pub use progress::{Progress, ProgressTier};
pub use trend::TrendDirection;
