//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HEALTH_DASHBOARD_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use health_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Seed unread count: {}", config.ui.initial_unread_notifications);
//! ```

mod error;
mod logging;
mod ui;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ui::{UiConfig, MAX_INITIAL_UNREAD};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has sane defaults; a host with no environment at all gets
/// the stock dashboard. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Presentation defaults (seeded notification count)
    #[serde(default)]
    pub ui: UiConfig,

    /// Tracing subscriber configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HEALTH_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HEALTH_DASHBOARD__UI__INITIAL_UNREAD_NOTIFICATIONS=5`
    /// - `HEALTH_DASHBOARD__LOGGING__FILTER=debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEALTH_DASHBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ui.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
