//! Section bodies - the tagged variants a report section can carry.

use serde::{Deserialize, Serialize};

use super::Section;

// ════════════════════════════════════════════════════════════════════════════════
// BulletTone - Category of a bullet list, selects its marker glyph
// ════════════════════════════════════════════════════════════════════════════════

/// Category of a bullet list.
///
/// The glyph printed for each tone is supplied by the renderer's
/// `Markers`, so report content only states *what kind* of list it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletTone {
    /// Neutral list item.
    #[default]
    Plain,
    /// Feature, strength, completed task.
    Positive,
    /// Problem or defect.
    Negative,
    /// Integration risk or warning.
    Caution,
    /// Planned step or follow-up.
    Action,
    /// Observation or measurement.
    Note,
}

impl BulletTone {
    /// All tones, in declaration order.
    pub const ALL: [BulletTone; 6] = [
        BulletTone::Plain,
        BulletTone::Positive,
        BulletTone::Negative,
        BulletTone::Caution,
        BulletTone::Action,
        BulletTone::Note,
    ];

    /// Returns true for the neutral tone.
    pub fn is_plain(&self) -> bool {
        matches!(self, BulletTone::Plain)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// KeyValue - One metric line
// ════════════════════════════════════════════════════════════════════════════════

/// A single `key: value` metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyValue {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Body - What a section contains
// ════════════════════════════════════════════════════════════════════════════════

/// The content of a section.
///
/// Serialized with an internal `kind` tag, e.g.
/// `{"kind": "bullet_list", "tone": "negative", "items": ["..."]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Body {
    /// Lines prefixed with the marker of their tone.
    BulletList {
        #[serde(default)]
        tone: BulletTone,
        #[serde(default)]
        items: Vec<String>,
    },

    /// Lines prefixed with their 1-based position.
    NumberedList {
        #[serde(default)]
        items: Vec<String>,
    },

    /// Ordered `key: value` pairs. Duplicated keys are kept as-is.
    KeyValueList {
        #[serde(default)]
        entries: Vec<KeyValue>,
    },

    /// Verbatim prose lines.
    Text {
        #[serde(default)]
        lines: Vec<String>,
    },

    /// Layer list drawn with box connectors.
    Tree {
        #[serde(default)]
        items: Vec<String>,
    },

    /// Nested sections, rendered one indentation level deeper.
    SubsectionList {
        #[serde(default)]
        sections: Vec<Section>,
    },
}

impl Body {
    /// Creates a bullet list with the given tone.
    pub fn bullets<I, S>(tone: BulletTone, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Body::BulletList {
            tone,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a numbered list.
    pub fn numbered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Body::NumberedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a key/value list, preserving the given order.
    pub fn key_values<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<KeyValue>,
    {
        Body::KeyValueList {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a block of verbatim lines.
    pub fn text<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Body::Text {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a connector-drawn tree.
    pub fn tree<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Body::Tree {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a list of nested sections.
    pub fn subsections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        Body::SubsectionList {
            sections: sections.into_iter().collect(),
        }
    }

    /// Returns the serialized tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Body::BulletList { .. } => "bullet_list",
            Body::NumberedList { .. } => "numbered_list",
            Body::KeyValueList { .. } => "key_value_list",
            Body::Text { .. } => "text",
            Body::Tree { .. } => "tree",
            Body::SubsectionList { .. } => "subsection_list",
        }
    }

    /// Returns true when the body produces no lines of its own.
    pub fn is_empty(&self) -> bool {
        match self {
            Body::BulletList { items, .. }
            | Body::NumberedList { items }
            | Body::Tree { items } => items.is_empty(),
            Body::KeyValueList { entries } => entries.is_empty(),
            Body::Text { lines } => lines.is_empty(),
            Body::SubsectionList { sections } => sections.is_empty(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::BulletList {
            tone: BulletTone::Plain,
            items: Vec::new(),
        }
    }
}
