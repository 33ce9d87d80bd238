//! Fitness goal record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{format_short_date, GoalId, Progress};

/// A fitness goal tracked on the dashboard.
///
/// The core does not require `end_date` to follow `start_date`; date
/// ordering is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub progress: Progress,
    /// Short target description, e.g. "Lose 10kg".
    pub target: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}

impl Goal {
    /// Start date in the dashboard's short display form.
    pub fn start_date_display(&self) -> String {
        format_short_date(self.start_date)
    }

    /// Target date in the dashboard's short display form.
    pub fn end_date_display(&self) -> String {
        format_short_date(self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProgressTier;

    fn weight_loss_goal() -> Goal {
        Goal {
            id: GoalId::new("1").unwrap(),
            name: "Weight Loss".to_string(),
            progress: Progress::new(65),
            target: "Lose 10kg".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            description: "Reduce body weight through diet and exercise".to_string(),
        }
    }

    #[test]
    fn date_display_uses_short_form() {
        let goal = weight_loss_goal();
        assert_eq!(goal.start_date_display(), "Jan 1, 2023");
        assert_eq!(goal.end_date_display(), "Jun 30, 2023");
    }

    #[test]
    fn progress_drives_display_tier() {
        let goal = weight_loss_goal();
        assert_eq!(goal.progress.tier(), ProgressTier::Caution);
    }

    #[test]
    fn end_before_start_is_accepted() {
        let mut goal = weight_loss_goal();
        goal.end_date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        // Ordering is a presentation concern; the record stays valid.
        assert_eq!(goal.end_date_display(), "Dec 31, 2022");
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let json = serde_json::to_string(&weight_loss_goal()).unwrap();
        assert!(json.contains("\"startDate\":\"2023-01-01\""));
        assert!(json.contains("\"endDate\":\"2023-06-30\""));
    }
}
