//! Health metric record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{MetricId, MetricStatus, TrendDirection};

/// A single health metric card (BMI, resting heart rate, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub id: MetricId,
    pub title: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub status: MetricStatus,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// Normal-range text, e.g. "18.5 - 24.9".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

impl HealthMetric {
    /// Value plus unit, e.g. "68 bpm"; bare value when there is no unit.
    pub fn value_display(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.to_string(),
        }
    }
}

/// A metric reading: numeric when measurable as one number, pre-formatted
/// text otherwise (e.g. blood pressure "120/80").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Movement of a metric since its previous reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub direction: TrendDirection,
    /// Magnitude text, e.g. "2%"; absent when only the direction is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,
}
