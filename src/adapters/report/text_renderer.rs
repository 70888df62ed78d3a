//! Plain-text report renderer adapter.
//!
//! Renders documents as indented console text. This is the default
//! implementation of the ReportRenderer port.

use crate::domain::report::{Body, Section};
use crate::ports::{RenderError, RenderOptions, ReportFormat, ReportRenderer};

/// Plain-text implementation of ReportRenderer.
///
/// Layout for a top-level section with a nested one (default options):
///
/// ```text
/// 📁 Files
/// - first item
///   Nested
///   key: value
/// ```
///
/// Headings and body lines of a section share its indentation; every
/// nesting level adds `indent_width` spaces.
#[derive(Debug, Clone, Default)]
pub struct TextReportRenderer {
    options: RenderOptions,
}

impl TextReportRenderer {
    /// Creates a text renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn write_section(&self, out: &mut String, section: &Section, depth: usize) {
        self.write_heading(out, section, depth);
        self.write_body(out, &section.body, depth);
    }

    fn write_heading(&self, out: &mut String, section: &Section, depth: usize) {
        let heading = match &section.marker {
            Some(marker) => format!("{} {}", marker, section.title),
            None => section.title.clone(),
        };

        if depth == 0 && self.options.heading_rule {
            let rule = self.options.rule_line();
            out.push_str(&format!("{}\n", rule));
            self.write_entry(out, depth, "", &heading);
            out.push_str(&format!("{}\n", rule));
        } else {
            self.write_entry(out, depth, "", &heading);
        }
    }

    fn write_body(&self, out: &mut String, body: &Body, depth: usize) {
        match body {
            Body::BulletList { tone, items } => {
                let marker = self.options.markers.for_tone(*tone);
                for item in items {
                    self.write_entry(out, depth, marker, item);
                }
            }
            Body::NumberedList { items } => {
                let width = self.options.counter_width();
                for (i, item) in items.iter().enumerate() {
                    let counter = format!("{:>width$}.", i + 1, width = width);
                    self.write_entry(out, depth, &counter, item);
                }
            }
            Body::KeyValueList { entries } => {
                for entry in entries {
                    let line = format!("{}: {}", entry.key, entry.value);
                    self.write_entry(out, depth, "", &line);
                }
            }
            Body::Text { lines } => {
                for line in lines {
                    self.write_entry(out, depth, "", line);
                }
            }
            Body::Tree { items } => {
                for (i, item) in items.iter().enumerate() {
                    self.write_entry(out, depth, tree_connector(i, items.len()), item);
                }
            }
            Body::SubsectionList { sections } => {
                for section in sections {
                    self.write_section(out, section, depth + 1);
                }
            }
        }
    }

    /// Writes one line at `depth`. Continuation lines of a multi-line `text`
    /// hang one level deeper.
    fn write_entry(&self, out: &mut String, depth: usize, prefix: &str, text: &str) {
        let mut lines = text.lines();
        let first = lines.next().unwrap_or("");
        let indent = self.options.indent(depth);

        if prefix.is_empty() {
            out.push_str(&format!("{}{}\n", indent, first));
        } else {
            out.push_str(&format!("{}{} {}\n", indent, prefix, first));
        }

        let hanging = self.options.indent(depth + 1);
        for line in lines {
            out.push_str(&format!("{}{}\n", hanging, line));
        }
    }
}

/// Box connector for item `index` of a tree with `len` items.
pub(crate) fn tree_connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        "└─"
    } else if index == 0 {
        "┌─"
    } else {
        "├─"
    }
}

impl ReportRenderer for TextReportRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_title(&self, title: &str) -> String {
        format!("=== {} ===\n\n", title)
    }

    fn render_section(&self, section: &Section) -> Result<String, RenderError> {
        let mut out = String::with_capacity(256);
        self.write_section(&mut out, section, 0);
        Ok(out)
    }

    fn section_separator(&self) -> &str {
        "\n"
    }
}
