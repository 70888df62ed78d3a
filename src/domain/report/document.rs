//! Report document and sections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Body, BulletTone, KeyValue};
use crate::domain::foundation::ValidationError;

// ════════════════════════════════════════════════════════════════════════════════
// Section - A titled unit of the report
// ════════════════════════════════════════════════════════════════════════════════

/// A titled unit of a report, possibly containing nested sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub title: String,

    /// Optional decoration printed before the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    #[serde(default)]
    pub body: Body,
}

impl Section {
    /// Creates a section with the given body.
    pub fn new(title: impl Into<String>, body: Body) -> Self {
        Self {
            title: title.into(),
            marker: None,
            body,
        }
    }

    /// Creates a section holding a plain bullet list.
    pub fn bullets<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, Body::bullets(BulletTone::Plain, items))
    }

    /// Creates a section holding a bullet list of the given tone.
    pub fn toned<I, S>(title: impl Into<String>, tone: BulletTone, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, Body::bullets(tone, items))
    }

    /// Creates a section holding a numbered list.
    pub fn numbered<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, Body::numbered(items))
    }

    /// Creates a section holding `key: value` metrics.
    pub fn key_values<I, E>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<KeyValue>,
    {
        Self::new(title, Body::key_values(entries))
    }

    /// Creates a section holding verbatim lines.
    pub fn text<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, Body::text(lines))
    }

    /// Creates a section holding a connector-drawn tree.
    pub fn tree<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, Body::tree(items))
    }

    /// Creates a section holding nested sections.
    pub fn subsections<I>(title: impl Into<String>, sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        Self::new(title, Body::subsections(sections))
    }

    /// Sets the decoration printed before the title.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Number of section levels, counting this one.
    pub fn depth(&self) -> usize {
        match &self.body {
            Body::SubsectionList { sections } => {
                1 + sections.iter().map(Section::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Number of sections in this subtree, counting this one.
    pub fn section_count(&self) -> usize {
        match &self.body {
            Body::SubsectionList { sections } => {
                1 + sections.iter().map(Section::section_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Builds a section from its untyped shape.
    ///
    /// `field` names the location used in error messages, e.g. `sections[2]`.
    pub fn from_value(value: &Value, field: &str) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected a section object, got {}", json_type(value)),
            ));
        }
        Section::deserialize(value).map_err(|e| ValidationError::invalid_format(field, e.to_string()))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Document - The whole report
// ════════════════════════════════════════════════════════════════════════════════

/// An ordered sequence of sections with an optional report title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    /// Creates an untitled document.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            title: None,
            sections,
        }
    }

    /// Creates a titled document.
    pub fn titled(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: Some(title.into()),
            sections,
        }
    }

    /// Returns true if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of sections at every level.
    pub fn section_count(&self) -> usize {
        self.sections.iter().map(Section::section_count).sum()
    }

    /// Deepest nesting among the top-level sections.
    pub fn depth(&self) -> usize {
        self.sections.iter().map(Section::depth).max().unwrap_or(0)
    }

    /// Builds a whole document from its untyped shape.
    ///
    /// Fails on the first section that does not match a known body variant.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let outline = DocumentOutline::from_value(value)?;
        let sections = outline
            .sections
            .iter()
            .enumerate()
            .map(|(i, v)| Section::from_value(v, &format!("sections[{}]", i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: outline.title,
            sections,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// DocumentOutline - Untyped document with unchecked sections
// ════════════════════════════════════════════════════════════════════════════════

const ROOT_FIELDS: [&str; 2] = ["title", "sections"];

/// The root of an untyped document whose sections have not been checked yet.
///
/// Lets a renderer validate sections one at a time, right before writing them.
#[derive(Debug, Clone)]
pub struct DocumentOutline<'a> {
    pub title: Option<String>,
    pub sections: &'a [Value],
}

impl<'a> DocumentOutline<'a> {
    /// Checks the root object, the title and the presence of the section array.
    pub fn from_value(value: &'a Value) -> Result<Self, ValidationError> {
        let root = value.as_object().ok_or_else(|| {
            ValidationError::invalid_format(
                "document",
                format!("expected an object, got {}", json_type(value)),
            )
        })?;

        if let Some(key) = root.keys().find(|k| !ROOT_FIELDS.contains(&k.as_str())) {
            return Err(ValidationError::invalid_format(
                "document",
                format!("unknown field `{}`, expected `title` or `sections`", key),
            ));
        }

        let title = match root.get("title") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(ValidationError::invalid_format(
                    "title",
                    format!("expected a string, got {}", json_type(other)),
                ))
            }
        };

        let sections = match root.get("sections") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                return Err(ValidationError::invalid_format(
                    "sections",
                    format!("expected an array, got {}", json_type(other)),
                ))
            }
            None => return Err(ValidationError::empty_field("sections")),
        };

        Ok(Self { title, sections })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
