//! MetricStatus enum for classifying health metric readings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a health metric reading.
///
/// A closed set: an unrecognized status is a construction-time error,
/// never a silent style default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Good,
    Caution,
    Warning,
}

impl MetricStatus {
    /// Returns true if the reading calls for user attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, MetricStatus::Good)
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MetricStatus::Good => "good",
            MetricStatus::Caution => "caution",
            MetricStatus::Warning => "warning",
        };
        write!(f, "{}", s)
    }
}
