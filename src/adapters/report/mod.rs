//! Report adapters - Implementations of the rendering port and document input.
//!
//! - `TextReportRenderer` - Indented console text
//! - `MarkdownReportRenderer` - Markdown headings and lists
//! - `JsonReportRenderer` - The document model as JSON
//! - `DocumentLoader` - Reads untyped documents from JSON/YAML files

mod document_loader;
mod json_renderer;
mod markdown_renderer;
mod text_renderer;

pub use document_loader::{DocumentFileFormat, DocumentLoader, LoadError};
pub use json_renderer::JsonReportRenderer;
pub use markdown_renderer::MarkdownReportRenderer;
pub use text_renderer::TextReportRenderer;

use crate::ports::{RenderOptions, ReportFormat, ReportRenderer};

/// Returns the renderer for `format`, built with `options`.
pub fn renderer_for(format: ReportFormat, options: RenderOptions) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Text => Box::new(TextReportRenderer::new(options)),
        ReportFormat::Markdown => Box::new(MarkdownReportRenderer::new(options)),
        ReportFormat::Json => Box::new(JsonReportRenderer::new(options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_for_matches_requested_format() {
        for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Json] {
            let renderer = renderer_for(format, RenderOptions::default());
            assert_eq!(renderer.format(), format);
        }
    }
}
