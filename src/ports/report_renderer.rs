//! Report Renderer Port - Document to text interface.
//!
//! This port defines the contract for turning a report `Document` into
//! formatted output on a byte sink. The application depends on this trait,
//! while adapters (like TextReportRenderer) provide the implementation.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::report::{BulletTone, Document, DocumentOutline, Section};

/// Port for rendering report documents.
///
/// # Contract
///
/// Implementations must:
/// - Write sections in document order, never reordering or merging them
/// - Be deterministic: the same document and options give the same bytes
/// - Propagate sink failures as `RenderError::SinkWriteFailure`
/// - Write nothing for a section that fails validation, nor for any later one
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ReportRenderer = &TextReportRenderer::new(RenderOptions::default());
///
/// // Render a typed document
/// renderer.render(&document, &mut std::io::stdout().lock())?;
///
/// // Render a document loaded from JSON/YAML, validating section by section
/// renderer.render_value(&value, &mut sink)?;
/// ```
pub trait ReportRenderer: Send + Sync {
    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;

    /// Options the renderer was built with.
    fn options(&self) -> &RenderOptions;

    /// Renders the document title block, including its trailing separation.
    fn render_title(&self, title: &str) -> String;

    /// Renders one top-level section, nested sections included.
    fn render_section(&self, section: &Section) -> Result<String, RenderError>;

    /// Text written between two consecutive top-level sections.
    fn section_separator(&self) -> &str;

    /// Renders a typed document to the sink.
    ///
    /// # Errors
    ///
    /// - `InvalidDocument` if a section nests deeper than `max_depth`
    /// - `SinkWriteFailure` if the sink rejects a write
    fn render(&self, document: &Document, sink: &mut dyn Write) -> Result<(), RenderError> {
        if let Some(title) = &document.title {
            write_block(sink, &self.render_title(title))?;
        }

        for (index, section) in document.sections.iter().enumerate() {
            write_top_level(self, index, section, sink)?;
        }

        sink.flush().map_err(RenderError::SinkWriteFailure)
    }

    /// Renders an untyped document (as loaded from a file) to the sink.
    ///
    /// Each section is validated right before it is written, so sections
    /// preceding an invalid one are already on the sink when this fails.
    ///
    /// # Errors
    ///
    /// - `InvalidDocument` for a malformed root or the first malformed section
    /// - `SinkWriteFailure` if the sink rejects a write
    fn render_value(&self, value: &Value, sink: &mut dyn Write) -> Result<(), RenderError> {
        let outline = DocumentOutline::from_value(value)?;

        if let Some(title) = &outline.title {
            write_block(sink, &self.render_title(title))?;
        }

        for (index, raw) in outline.sections.iter().enumerate() {
            let section = Section::from_value(raw, &section_location(index))?;
            write_top_level(self, index, &section, sink)?;
        }

        sink.flush().map_err(RenderError::SinkWriteFailure)
    }

    /// Renders a typed document into a string.
    fn render_to_string(&self, document: &Document) -> Result<String, RenderError> {
        let mut buffer = Vec::new();
        self.render(document, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| RenderError::internal(e.to_string()))
    }
}

/// Writes one rendered block in a single call.
pub fn write_block(sink: &mut dyn Write, block: &str) -> Result<(), RenderError> {
    if block.is_empty() {
        return Ok(());
    }
    sink.write_all(block.as_bytes())
        .map_err(RenderError::SinkWriteFailure)
}

/// Checks, renders and writes a single top-level section.
fn write_top_level<R: ReportRenderer + ?Sized>(
    renderer: &R,
    index: usize,
    section: &Section,
    sink: &mut dyn Write,
) -> Result<(), RenderError> {
    check_depth(index, section, renderer.options().max_depth)?;
    let block = renderer.render_section(section)?;
    if index > 0 {
        write_block(sink, renderer.section_separator())?;
    }
    write_block(sink, &block)
}

/// Location label of a top-level section, used in error messages.
pub fn section_location(index: usize) -> String {
    format!("sections[{}]", index)
}

fn check_depth(index: usize, section: &Section, max_depth: usize) -> Result<(), RenderError> {
    let depth = section.depth();
    if depth > max_depth {
        return Err(RenderError::invalid_document(
            section_location(index),
            format!("nesting depth {} exceeds maximum of {}", depth, max_depth),
        ));
    }
    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════════
// Options
// ════════════════════════════════════════════════════════════════════════════════

/// Glyph printed in front of bullet items, per tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "default_plain")]
    pub plain: String,
    #[serde(default = "default_positive")]
    pub positive: String,
    #[serde(default = "default_negative")]
    pub negative: String,
    #[serde(default = "default_caution")]
    pub caution: String,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default = "default_note")]
    pub note: String,
}

impl Markers {
    /// Returns the glyph configured for `tone`.
    pub fn for_tone(&self, tone: BulletTone) -> &str {
        match tone {
            BulletTone::Plain => &self.plain,
            BulletTone::Positive => &self.positive,
            BulletTone::Negative => &self.negative,
            BulletTone::Caution => &self.caution,
            BulletTone::Action => &self.action,
            BulletTone::Note => &self.note,
        }
    }

    /// Uses the same glyph for every tone.
    pub fn uniform(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        Self {
            plain: marker.clone(),
            positive: marker.clone(),
            negative: marker.clone(),
            caution: marker.clone(),
            action: marker.clone(),
            note: marker,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            plain: default_plain(),
            positive: default_positive(),
            negative: default_negative(),
            caution: default_caution(),
            action: default_action(),
            note: default_note(),
        }
    }
}

fn default_plain() -> String {
    "-".to_string()
}

fn default_positive() -> String {
    "✓".to_string()
}

fn default_negative() -> String {
    "❌".to_string()
}

fn default_caution() -> String {
    "⚠️".to_string()
}

fn default_action() -> String {
    "→".to_string()
}

fn default_note() -> String {
    "•".to_string()
}

/// Widest padding accepted for numbered list counters.
pub const MAX_NUMBERED_WIDTH: usize = 8;

/// Options for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per nesting level.
    pub indent_width: usize,

    /// Wrap top-level headings between two rule lines.
    pub heading_rule: bool,

    /// Text repeated to draw a rule line.
    pub rule: String,

    /// Number of repetitions of `rule` in one rule line.
    pub rule_width: usize,

    /// Minimum width of the number in numbered lists (right-aligned),
    /// capped at [`MAX_NUMBERED_WIDTH`].
    pub numbered_width: usize,

    /// Deepest section nesting accepted.
    pub max_depth: usize,

    /// Bullet glyphs per tone.
    pub markers: Markers,
}

impl RenderOptions {
    /// Console layout with ruled top-level headings.
    pub fn ruled() -> Self {
        Self {
            heading_rule: true,
            numbered_width: 2,
            ..Self::default()
        }
    }

    /// Leading whitespace for a section at `depth` (0 for top level).
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }

    /// One rule line, without newline.
    pub fn rule_line(&self) -> String {
        self.rule.repeat(self.rule_width)
    }

    /// Padding applied to numbered list counters.
    pub fn counter_width(&self) -> usize {
        self.numbered_width.min(MAX_NUMBERED_WIDTH)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            heading_rule: false,
            rule: "=".to_string(),
            rule_width: 60,
            numbered_width: 0,
            max_depth: 16,
            markers: Markers::default(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// ReportFormat
// ════════════════════════════════════════════════════════════════════════════════

/// Output format variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Indented plain text for the console.
    #[default]
    Text,

    /// Markdown with headings per nesting level.
    Markdown,

    /// The document model as pretty-printed JSON.
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown format '{0}' (expected one of: text, markdown, json)")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A section or the document root does not match the model.
    #[error("Invalid document at {location}: {reason}")]
    InvalidDocument { location: String, reason: String },

    /// The output sink rejected a write.
    #[error("Output sink rejected write: {0}")]
    SinkWriteFailure(#[source] io::Error),

    /// Internal rendering error.
    #[error("Rendering failed: {0}")]
    Internal(String),
}

impl RenderError {
    /// Creates an invalid document error.
    pub fn invalid_document(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for `InvalidDocument`.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, Self::InvalidDocument { .. })
    }

    /// Returns true for `SinkWriteFailure`.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, Self::SinkWriteFailure(_))
    }
}

impl From<ValidationError> for RenderError {
    fn from(err: ValidationError) -> Self {
        let location = err.field().to_string();
        let reason = match &err {
            ValidationError::InvalidFormat { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        Self::InvalidDocument { location, reason }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
