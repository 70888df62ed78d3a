//! Rendering configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::{Markers, RenderOptions, MAX_NUMBERED_WIDTH};

const MAX_INDENT_WIDTH: usize = 8;
const MAX_RULE_WIDTH: usize = 200;
const MAX_DEPTH_LIMIT: usize = 64;

/// Rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Spaces per nesting level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Wrap top-level headings between rule lines
    #[serde(default)]
    pub heading_rule: bool,

    /// Text repeated to draw a rule line
    #[serde(default = "default_rule")]
    pub rule: String,

    /// Repetitions of `rule` per line
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,

    /// Minimum width of numbered list counters
    #[serde(default)]
    pub numbered_width: usize,

    /// Deepest section nesting accepted
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Bullet glyphs per tone
    #[serde(default)]
    pub markers: Markers,
}

impl RenderConfig {
    /// Build renderer options from this configuration
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            indent_width: self.indent_width,
            heading_rule: self.heading_rule,
            rule: self.rule.clone(),
            rule_width: self.rule_width,
            numbered_width: self.numbered_width,
            max_depth: self.max_depth,
            markers: self.markers.clone(),
        }
    }

    /// Validate rendering configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(ValidationError::IndentTooWide);
        }
        if self.heading_rule {
            if self.rule.is_empty() {
                return Err(ValidationError::EmptyRule);
            }
            if self.rule_width == 0 || self.rule_width > MAX_RULE_WIDTH {
                return Err(ValidationError::InvalidRuleWidth);
            }
        }
        if self.numbered_width > MAX_NUMBERED_WIDTH {
            return Err(ValidationError::NumberedTooWide);
        }
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ValidationError::InvalidMaxDepth);
        }

        let markers = [
            ("plain", &self.markers.plain),
            ("positive", &self.markers.positive),
            ("negative", &self.markers.negative),
            ("caution", &self.markers.caution),
            ("action", &self.markers.action),
            ("note", &self.markers.note),
        ];
        for (tone, marker) in markers {
            if marker.is_empty() {
                return Err(ValidationError::EmptyMarker(tone));
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            heading_rule: false,
            rule: default_rule(),
            rule_width: default_rule_width(),
            numbered_width: 0,
            max_depth: default_max_depth(),
            markers: Markers::default(),
        }
    }
}

fn default_indent_width() -> usize {
    2
}

fn default_rule() -> String {
    "=".to_string()
}

fn default_rule_width() -> usize {
    60
}

fn default_max_depth() -> usize {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_defaults_match_render_options() {
        let config = RenderConfig::default();
        assert_eq!(config.to_options(), RenderOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_render_config_deserialization() {
        let json = r#"{
            "indent_width": 3,
            "heading_rule": true,
            "rule": "-",
            "markers": { "plain": "*" }
        }"#;

        let config: RenderConfig = serde_json::from_str(json).unwrap();
        let options = config.to_options();
        assert_eq!(options.indent(1), "   ");
        assert!(options.heading_rule);
        assert_eq!(options.rule_line(), "-".repeat(60));
        assert_eq!(options.markers.plain, "*");
        assert_eq!(options.markers.positive, "✓");
    }

    #[test]
    fn test_validation_indent_too_wide() {
        let config = RenderConfig {
            indent_width: 9,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::IndentTooWide));
    }

    #[test]
    fn test_validation_rule_only_checked_when_enabled() {
        let config = RenderConfig {
            rule: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = RenderConfig {
            heading_rule: true,
            rule: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyRule));

        let config = RenderConfig {
            heading_rule: true,
            rule_width: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRuleWidth));
    }

    #[test]
    fn test_validation_numbered_width() {
        let config = RenderConfig {
            numbered_width: MAX_NUMBERED_WIDTH,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = RenderConfig {
            numbered_width: usize::MAX,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NumberedTooWide));
    }

    #[test]
    fn test_validation_max_depth() {
        let config = RenderConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxDepth));

        let config = RenderConfig {
            max_depth: 65,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxDepth));
    }

    #[test]
    fn test_validation_empty_marker() {
        let mut config = RenderConfig::default();
        config.markers.negative = String::new();
        assert_eq!(config.validate(), Err(ValidationError::EmptyMarker("negative")));
    }
}
