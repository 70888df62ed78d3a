//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PREVIEW_REPORT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use preview_report::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let options = config.render.to_options();
//! ```

mod error;
mod logging;
mod render;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use render::RenderConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout and marker configuration for renderers
    #[serde(default)]
    pub render: RenderConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PREVIEW_REPORT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PREVIEW_REPORT__RENDER__INDENT_WIDTH=4` -> `render.indent_width = 4`
    /// - `PREVIEW_REPORT__RENDER__MARKERS__PLAIN=*` -> `render.markers.plain = "*"`
    /// - `PREVIEW_REPORT__LOGGING__JSON=true` -> `logging.json = true`
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
                    .prefix("PREVIEW_REPORT")
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
        self.render.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("PREVIEW_REPORT__RENDER__INDENT_WIDTH");
        env::remove_var("PREVIEW_REPORT__RENDER__HEADING_RULE");
        env::remove_var("PREVIEW_REPORT__RENDER__MARKERS__PLAIN");
        env::remove_var("PREVIEW_REPORT__RENDER__MAX_DEPTH");
        env::remove_var("PREVIEW_REPORT__RENDER__NUMBERED_WIDTH");
        env::remove_var("PREVIEW_REPORT__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.render.indent_width, 2);
        assert!(!config.render.heading_rule);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PREVIEW_REPORT__RENDER__INDENT_WIDTH", "4");
        env::set_var("PREVIEW_REPORT__RENDER__HEADING_RULE", "true");
        env::set_var("PREVIEW_REPORT__RENDER__MARKERS__PLAIN", "*");
        env::set_var("PREVIEW_REPORT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.render.indent_width, 4);
        assert!(config.render.heading_rule);
        assert_eq!(config.render.markers.plain, "*");
        assert_eq!(config.render.markers.negative, "❌");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_environment_value() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PREVIEW_REPORT__RENDER__MAX_DEPTH", "100");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxDepth));
    }

    #[test]
    fn test_validate_rejects_oversized_numbered_width() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PREVIEW_REPORT__RENDER__NUMBERED_WIDTH", "100000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::NumberedTooWide));
    }
}
