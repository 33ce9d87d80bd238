//! Strongly-typed identifier value objects.
//!
//! Record identifiers arrive from the host data source as opaque strings
//! ("1", "wp1", "gym2"); the core never generates them. Each newtype only
//! rejects the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new id, returning an error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a fitness goal record.
    GoalId,
    "goal_id"
);

string_id!(
    /// Identifier of a workout or diet plan record.
    PlanId,
    "plan_id"
);

string_id!(
    /// Identifier of a health metric record.
    MetricId,
    "metric_id"
);

string_id!(
    /// Identifier of a nearby service (gym, food outlet) record.
    ServiceId,
    "service_id"
);
