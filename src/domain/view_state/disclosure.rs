//! Single-slot expand/collapse state for list item detail panels.

/// Tracks which single item of a list is expanded, if any.
///
/// `toggle` on a collapsed id expands it, implicitly collapsing whatever
/// was expanded before (replacement, not additive); `toggle` on the
/// expanded id collapses it. Repeating the same toggle returns to the
/// initial state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisclosureToggle<Id> {
    expanded: Option<Id>,
}

impl<Id: Clone + Eq> DisclosureToggle<Id> {
    /// Creates a toggle with nothing expanded.
    pub fn new() -> Self {
        Self { expanded: None }
    }

    /// Expands `id`, or collapses it if it is already expanded.
    pub fn toggle(&mut self, id: Id) {
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    /// The currently expanded id, if any.
    pub fn expanded(&self) -> Option<&Id> {
        self.expanded.as_ref()
    }

    /// Returns true if `id` is the expanded item.
    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expanded.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PlanId;
    use proptest::prelude::*;

    fn plan(id: &str) -> PlanId {
        PlanId::new(id).unwrap()
    }

    #[test]
    fn starts_collapsed() {
        let toggle: DisclosureToggle<PlanId> = DisclosureToggle::new();
        assert!(toggle.expanded().is_none());
    }

    #[test]
    fn toggle_expands_then_collapses_same_id() {
        let mut toggle = DisclosureToggle::new();
        toggle.toggle(plan("wp1"));
        assert!(toggle.is_expanded(&plan("wp1")));

        toggle.toggle(plan("wp1"));
        assert!(toggle.expanded().is_none());
    }

    #[test]
    fn new_id_replaces_previous_expansion() {
        let mut toggle = DisclosureToggle::new();
        toggle.toggle(plan("wp1"));
        toggle.toggle(plan("wp2"));

        assert!(toggle.is_expanded(&plan("wp2")));
        assert!(!toggle.is_expanded(&plan("wp1")));
    }

    #[test]
    fn independent_instances_do_not_interact() {
        let mut workout = DisclosureToggle::new();
        let mut diet = DisclosureToggle::new();

        workout.toggle(plan("wp1"));
        diet.toggle(plan("dp2"));

        assert!(workout.is_expanded(&plan("wp1")));
        assert!(diet.is_expanded(&plan("dp2")));

        workout.toggle(plan("wp1"));
        assert!(workout.expanded().is_none());
        assert!(diet.is_expanded(&plan("dp2")));
    }

    proptest! {
        #[test]
        fn double_toggle_is_involution(id in "[a-z]{1,8}") {
            let mut toggle = DisclosureToggle::new();
            let before = toggle.clone();
            toggle.toggle(plan(&id));
            toggle.toggle(plan(&id));
            prop_assert_eq!(toggle, before);
        }
    }
}
