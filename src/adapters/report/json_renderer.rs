//! JSON report renderer adapter.
//!
//! Emits the document model itself, so the output can be fed back in
//! through the document loader.

use std::io::Write;

use serde_json::Value;

use crate::domain::report::{Document, Section};
use crate::ports::{section_location, write_block, RenderError, RenderOptions, ReportFormat, ReportRenderer};

/// JSON implementation of ReportRenderer.
///
/// Unlike the text renderers, the whole document is validated and
/// serialized before the first byte reaches the sink.
#[derive(Debug, Clone, Default)]
pub struct JsonReportRenderer {
    options: RenderOptions,
}

impl JsonReportRenderer {
    /// Creates a JSON renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn to_json<T: serde::Serialize>(value: &T) -> Result<String, RenderError> {
        serde_json::to_string_pretty(value).map_err(|e| RenderError::internal(e.to_string()))
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_title(&self, title: &str) -> String {
        Value::String(title.to_string()).to_string()
    }

    fn render_section(&self, section: &Section) -> Result<String, RenderError> {
        Self::to_json(section)
    }

    fn section_separator(&self) -> &str {
        ",\n"
    }

    fn render(&self, document: &Document, sink: &mut dyn Write) -> Result<(), RenderError> {
        let max_depth = self.options.max_depth;
        for (index, section) in document.sections.iter().enumerate() {
            let depth = section.depth();
            if depth > max_depth {
                return Err(RenderError::invalid_document(
                    section_location(index),
                    format!("nesting depth {} exceeds maximum of {}", depth, max_depth),
                ));
            }
        }

        let mut json = Self::to_json(document)?;
        json.push('\n');
        write_block(sink, &json)?;
        sink.flush().map_err(RenderError::SinkWriteFailure)
    }

    fn render_value(&self, value: &Value, sink: &mut dyn Write) -> Result<(), RenderError> {
        let document = Document::from_value(value)?;
        self.render(&document, sink)
    }
}
