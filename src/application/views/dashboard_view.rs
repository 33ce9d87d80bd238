//! DashboardView - Host composition for the dashboard page.
//!
//! Composes the goal tab selector, the plan tab selector, the two detail
//! disclosures, and the notification counter over host-owned catalog
//! collections. The machines never observe each other; this view only
//! routes events to them and forwards outward signals.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::catalog::{
    DietPlan, Goal, HealthMetric, NearbyService, QuickAccessItem, UserProfile, WorkoutPlan,
};
use crate::domain::foundation::{GoalId, PlanId};
use crate::domain::view_state::{
    resolve, DisclosureToggle, GoalTab, NotificationCounter, PlanTab, TabSelector,
};
use crate::ports::DashboardSignals;

/// Read-only collections the host resolves before mounting the dashboard.
/// The core holds them for lookup only and supplies no defaults.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub user: UserProfile,
    pub goals: Vec<Goal>,
    pub metrics: Vec<HealthMetric>,
    pub workout_plans: Vec<WorkoutPlan>,
    pub diet_plans: Vec<DietPlan>,
    pub nearby_gyms: Vec<NearbyService>,
    pub nearby_food_outlets: Vec<NearbyService>,
    pub quick_access: Vec<QuickAccessItem>,
    /// Which goal record each goal tab shows.
    pub goal_tab_map: HashMap<GoalTab, GoalId>,
}

/// Presentation state of the dashboard page.
pub struct DashboardView {
    data: DashboardData,
    goal_tabs: TabSelector<GoalTab>,
    plan_tabs: TabSelector<PlanTab>,
    workout_disclosure: DisclosureToggle<PlanId>,
    diet_disclosure: DisclosureToggle<PlanId>,
    notifications: NotificationCounter,
    signals: Arc<dyn DashboardSignals>,
}

impl DashboardView {
    /// Mounts the dashboard: first tabs active, nothing expanded, and the
    /// caller-supplied starting unread count.
    pub fn new(data: DashboardData, initial_unread: u32, signals: Arc<dyn DashboardSignals>) -> Self {
        Self {
            data,
            goal_tabs: TabSelector::default(),
            plan_tabs: TabSelector::default(),
            workout_disclosure: DisclosureToggle::new(),
            diet_disclosure: DisclosureToggle::new(),
            notifications: NotificationCounter::new(initial_unread),
            signals,
        }
    }

    /// Welcome greeting for the header, e.g. "Welcome back, John!".
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.data.user.first_name())
    }

    pub fn user(&self) -> &UserProfile {
        &self.data.user
    }

    pub fn metrics(&self) -> &[HealthMetric] {
        &self.data.metrics
    }

    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    pub fn workout_plans(&self) -> &[WorkoutPlan] {
        &self.data.workout_plans
    }

    pub fn diet_plans(&self) -> &[DietPlan] {
        &self.data.diet_plans
    }

    pub fn quick_access(&self) -> &[QuickAccessItem] {
        &self.data.quick_access
    }

    // ── Goal tabs ────────────────────────────────────────────────────────

    pub fn active_goal_tab(&self) -> GoalTab {
        self.goal_tabs.active()
    }

    pub fn select_goal_tab(&mut self, tab: GoalTab) {
        tracing::debug!(tab = %tab, "goal tab selected");
        self.goal_tabs.select(tab);
    }

    /// The goal shown by the active tab, falling back to the first goal
    /// when the tab's mapped id is unknown. `None` only when the host
    /// supplied no goals at all.
    pub fn active_goal(&self) -> Option<&Goal> {
        resolve(
            self.goal_tabs.active(),
            &self.data.goal_tab_map,
            &self.data.goals,
            |goal| &goal.id,
        )
    }

    // ── Plan tabs and disclosures ────────────────────────────────────────

    pub fn active_plan_tab(&self) -> PlanTab {
        self.plan_tabs.active()
    }

    pub fn select_plan_tab(&mut self, tab: PlanTab) {
        tracing::debug!(tab = %tab, "plan tab selected");
        self.plan_tabs.select(tab);
    }

    /// Expands or collapses a workout plan's detail panel.
    pub fn toggle_workout_details(&mut self, id: PlanId) {
        self.workout_disclosure.toggle(id);
    }

    /// Expands or collapses a diet plan's detail panel. Independent of the
    /// workout disclosure.
    pub fn toggle_diet_details(&mut self, id: PlanId) {
        self.diet_disclosure.toggle(id);
    }

    /// The workout plan whose detail panel is open, if any.
    pub fn expanded_workout_plan(&self) -> Option<&WorkoutPlan> {
        let id = self.workout_disclosure.expanded()?;
        self.data.workout_plans.iter().find(|plan| &plan.id == id)
    }

    /// The diet plan whose detail panel is open, if any.
    pub fn expanded_diet_plan(&self) -> Option<&DietPlan> {
        let id = self.diet_disclosure.expanded()?;
        self.data.diet_plans.iter().find(|plan| &plan.id == id)
    }

    /// Nearby gyms, shown inside an expanded workout detail panel.
    pub fn nearby_gyms(&self) -> &[NearbyService] {
        &self.data.nearby_gyms
    }

    /// Nearby food outlets, shown inside an expanded diet detail panel.
    pub fn nearby_food_outlets(&self) -> &[NearbyService] {
        &self.data.nearby_food_outlets
    }

    // ── Notifications ────────────────────────────────────────────────────

    pub fn unread_notifications(&self) -> u32 {
        self.notifications.unread()
    }

    /// Resets the unread count to zero and signals the host. Idempotent;
    /// the signal fires on every acknowledgement, read or not.
    pub fn acknowledge_notifications(&mut self) {
        self.notifications.acknowledge();
        self.signals.notifications_acknowledged();
    }

    // ── Goal action signals ──────────────────────────────────────────────

    /// Forwards the "add goal" request to the host.
    pub fn request_add_goal(&self) {
        self.signals.add_goal_requested();
    }

    /// Forwards an "edit goal" request for the active tab's mapped goal.
    /// An unmapped tab emits nothing; the mapping is expected to be total.
    pub fn request_edit_goal(&self) {
        if let Some(goal_id) = self.data.goal_tab_map.get(&self.goal_tabs.active()) {
            self.signals.edit_goal_requested(goal_id);
        }
    }

    /// Forwards a quick-access card activation. An id absent from the
    /// catalog emits nothing.
    pub fn activate_quick_access(&self, item_id: &str) {
        if self.data.quick_access.iter().any(|item| item.id == item_id) {
            self.signals.quick_access_activated(item_id);
        }
    }
}
