//! Navigator port - Opaque navigation requests.
//!
//! Routing lives outside this core; the views only emit where they want
//! to go and never observe whether navigation happened.

use serde::{Deserialize, Serialize};

/// Destinations the core can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Dashboard,
}

/// Port for emitting navigation requests to the host router.
pub trait Navigator: Send + Sync {
    /// Request navigation to `target`. One-shot, no return value expected.
    fn navigate(&self, target: NavigationTarget);
}
