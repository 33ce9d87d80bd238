//! UI configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on the seeded unread count; anything larger is a typo.
pub const MAX_INITIAL_UNREAD: u32 = 999;

/// Presentation defaults a host can override per deployment
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Unread notification count seeded into a fresh dashboard
    #[serde(default = "default_initial_unread")]
    pub initial_unread_notifications: u32,
}

fn default_initial_unread() -> u32 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_unread_notifications: default_initial_unread(),
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_unread_notifications > MAX_INITIAL_UNREAD {
            return Err(ValidationError::NotificationCountTooLarge(
                MAX_INITIAL_UNREAD,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_defaults() {
        let ui = UiConfig::default();
        assert_eq!(ui.initial_unread_notifications, 3);
        assert!(ui.validate().is_ok());
    }

    #[test]
    fn test_rejects_absurd_unread_count() {
        let ui = UiConfig {
            initial_unread_notifications: 100_000,
        };
        assert!(ui.validate().is_err());
    }

    #[test]
    fn test_ui_deserialization() {
        let json = r#"{ "initial_unread_notifications": 7 }"#;
        let ui: UiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(ui.initial_unread_notifications, 7);
    }
}
