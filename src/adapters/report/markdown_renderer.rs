//! Markdown report renderer adapter.
//!
//! Maps section nesting onto heading levels: top-level sections become `##`,
//! each nested level adds one `#` up to `######`.

use crate::domain::report::{Body, Section};
use crate::ports::{RenderError, RenderOptions, ReportFormat, ReportRenderer};

use super::text_renderer::tree_connector;

/// Deepest heading level markdown supports.
const MAX_HEADING_LEVEL: usize = 6;

/// Markdown implementation of ReportRenderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer {
    options: RenderOptions,
}

impl MarkdownReportRenderer {
    /// Creates a markdown renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn write_section(&self, md: &mut String, section: &Section, depth: usize) {
        let level = (depth + 2).min(MAX_HEADING_LEVEL);
        let hashes = "#".repeat(level);
        let title = join_escaped(&section.title, " ");
        match &section.marker {
            Some(marker) => md.push_str(&format!(
                "{} {} {}\n\n",
                hashes,
                escape_inline(marker),
                title
            )),
            None => md.push_str(&format!("{} {}\n\n", hashes, title)),
        }

        self.write_body(md, &section.body, depth);
    }

    fn write_body(&self, md: &mut String, body: &Body, depth: usize) {
        match body {
            Body::BulletList { tone, items } => {
                for item in items {
                    let item = join_escaped(item, LIST_BREAK);
                    if tone.is_plain() {
                        md.push_str(&format!("- {}\n", item));
                    } else {
                        let glyph = escape_inline(self.options.markers.for_tone(*tone));
                        md.push_str(&format!("- {} {}\n", glyph, item));
                    }
                }
            }
            Body::NumberedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    md.push_str(&format!("{}. {}\n", i + 1, join_escaped(item, LIST_BREAK)));
                }
            }
            Body::KeyValueList { entries } => {
                for entry in entries {
                    md.push_str(&format!(
                        "- **{}:** {}\n",
                        join_escaped(&entry.key, " "),
                        join_escaped(&entry.value, LIST_BREAK)
                    ));
                }
            }
            Body::Text { lines } => {
                for line in lines {
                    md.push_str(&format!("{}  \n", join_escaped(line, "  \n")));
                }
            }
            Body::Tree { items } => {
                // Fenced, so items stay verbatim.
                if !items.is_empty() {
                    md.push_str("```text\n");
                    for (i, item) in items.iter().enumerate() {
                        md.push_str(&format!("{} {}\n", tree_connector(i, items.len()), item));
                    }
                    md.push_str("```\n");
                }
            }
            Body::SubsectionList { sections } => {
                for section in sections {
                    self.write_section(md, section, depth + 1);
                }
                return;
            }
        }

        if !body.is_empty() {
            md.push('\n');
        }
    }
}

/// Hard line break that stays inside the current list item.
const LIST_BREAK: &str = "  \n  ";

/// Escapes every line of `text` and joins them with `separator`.
fn join_escaped(text: &str, separator: &str) -> String {
    text.lines()
        .map(escape_inline)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Escapes inline syntax, raw HTML and a leading block marker so `text`
/// reads literally.
fn escape_inline(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    if escaped.starts_with('-') || escaped.starts_with('+') {
        return format!("\\{}", escaped);
    }
    let digits = escaped.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && (escaped[digits..].starts_with('.') || escaped[digits..].starts_with(')')) {
        return format!("{}\\{}", &escaped[..digits], &escaped[digits..]);
    }
    escaped
}

impl ReportRenderer for MarkdownReportRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_title(&self, title: &str) -> String {
        format!("# {}\n\n", title)
    }

    fn render_section(&self, section: &Section) -> Result<String, RenderError> {
        let mut md = String::with_capacity(512);
        self.write_section(&mut md, section, 0);
        Ok(md)
    }

    fn section_separator(&self) -> &str {
        ""
    }
}
