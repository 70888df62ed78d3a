//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Indent width exceeds maximum allowed (8)")]
    IndentTooWide,

    #[error("Heading rule is enabled but the rule text is empty")]
    EmptyRule,

    #[error("Rule width must be between 1 and 200")]
    InvalidRuleWidth,

    #[error("Numbered list width exceeds maximum allowed (8)")]
    NumberedTooWide,

    #[error("Maximum nesting depth must be between 1 and 64")]
    InvalidMaxDepth,

    #[error("Bullet marker for '{0}' cannot be empty")]
    EmptyMarker(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
