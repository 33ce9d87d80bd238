//! Workout and diet plan recommendation records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlanId;

/// A recommended workout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: PlanId,
    pub title: String,
    pub description: String,
    /// Time commitment, e.g. "30 mins daily".
    pub duration: String,
    /// Difficulty label, e.g. "Moderate".
    pub difficulty: String,
    /// Long-form text shown when the plan card is expanded.
    pub details: String,
}

/// A recommended diet plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: PlanId,
    pub title: String,
    pub description: String,
    /// Daily intake, e.g. "1800 cal/day".
    pub calories: String,
    /// Ordered restriction labels, e.g. ["Low sugar", "Moderate carbs"].
    pub restrictions: Vec<String>,
    /// Long-form text shown when the plan card is expanded.
    pub details: String,
}
