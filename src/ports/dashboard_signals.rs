//! DashboardSignals port - One-shot action signals from the dashboard.

use crate::domain::foundation::GoalId;

/// Port for the dashboard's outward action signals. Each call is a
/// fire-and-forget notification; the core expects no return value.
pub trait DashboardSignals: Send + Sync {
    /// The user asked to create a new goal.
    fn add_goal_requested(&self);

    /// The user asked to edit an existing goal.
    fn edit_goal_requested(&self, goal_id: &GoalId);

    /// The unread notifications were acknowledged.
    fn notifications_acknowledged(&self);

    /// A quick-access shortcut card was activated.
    fn quick_access_activated(&self, item_id: &str);
}
