//! Fixed tab-key enumerations for the dashboard's exclusive views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tab keys of the goal-tracking widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GoalTab {
    #[default]
    WeightLoss,
    MuscleGain,
    GeneralFitness,
    Custom,
}

impl GoalTab {
    /// All tabs in display order.
    pub const ALL: [GoalTab; 4] = [
        GoalTab::WeightLoss,
        GoalTab::MuscleGain,
        GoalTab::GeneralFitness,
        GoalTab::Custom,
    ];

    /// Stable slug used as the tab's DOM/display key.
    pub fn slug(&self) -> &'static str {
        match self {
            GoalTab::WeightLoss => "weight-loss",
            GoalTab::MuscleGain => "muscle-gain",
            GoalTab::GeneralFitness => "general-fitness",
            GoalTab::Custom => "custom",
        }
    }
}

impl fmt::Display for GoalTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Tab keys of the recommendation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlanTab {
    #[default]
    Workout,
    Diet,
}

impl PlanTab {
    /// All tabs in display order.
    pub const ALL: [PlanTab; 2] = [PlanTab::Workout, PlanTab::Diet];

    /// Stable slug used as the tab's DOM/display key.
    pub fn slug(&self) -> &'static str {
        match self {
            PlanTab::Workout => "workout",
            PlanTab::Diet => "diet",
        }
    }
}

impl fmt::Display for PlanTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
