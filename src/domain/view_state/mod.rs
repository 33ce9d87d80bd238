//! View-state module - The event-driven state machines behind the UI.
//!
//! Four independent machines compose the experience: tab selection,
//! detail disclosure, registration-form validation, and the unread
//! notification counter. None depend on each other at runtime.

mod disclosure;
mod notifications;
mod registration;
mod tab_selector;
mod tabs;

pub use disclosure::DisclosureToggle;
pub use notifications::NotificationCounter;
pub use registration::{
    FieldError, FieldErrors, FormPhase, RegistrationData, RegistrationField, RegistrationForm,
    RegistrationInput,
};
pub use tab_selector::{resolve, TabSelector};
pub use tabs::{GoalTab, PlanTab};
