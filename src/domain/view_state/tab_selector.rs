//! Tab selection state and the tab-to-record lookup.

use std::collections::HashMap;
use std::hash::Hash;

/// Holds exactly one active tab key from a caller-fixed enumeration.
///
/// `select` is unconditional: any key of the enumeration is accepted and
/// reselecting the active key is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector<K> {
    active: K,
}

impl<K: Copy + Eq> TabSelector<K> {
    /// Creates a selector with the given tab active.
    pub fn new(initial: K) -> Self {
        Self { active: initial }
    }

    /// Returns the active tab key.
    pub fn active(&self) -> K {
        self.active
    }

    /// Activates `key`, replacing the current selection.
    pub fn select(&mut self, key: K) {
        self.active = key;
    }
}

impl<K: Copy + Eq + Default> Default for TabSelector<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

/// Resolves the active tab to a record: tab key to record id via `mapping`,
/// then id to record by linear scan of `records`.
///
/// An unmapped key or unknown id falls back to the FIRST record; default
/// rendering relies on this, so it is a defined defaulting behavior, not an
/// error. Returns `None` only when `records` is empty - callers must treat
/// a non-empty collection as a precondition.
pub fn resolve<'a, K, I, R>(
    active: K,
    mapping: &HashMap<K, I>,
    records: &'a [R],
    id_of: impl Fn(&R) -> &I,
) -> Option<&'a R>
where
    K: Eq + Hash,
    I: Eq,
{
    let by_id = mapping
        .get(&active)
        .and_then(|id| records.iter().find(|record| id_of(record) == id));
    by_id.or_else(|| records.first())
}
