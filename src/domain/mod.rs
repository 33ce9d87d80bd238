//! Domain layer containing the presentation-state logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Read-only records supplied by the host (goals, metrics, plans)
//! - `view_state` - The state machines driven by discrete user events

pub mod catalog;
pub mod foundation;
pub mod view_state;
