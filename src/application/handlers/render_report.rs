//! RenderReportHandler - Command handler that renders a report to a sink.
//!
//! Resolves the document source (built-in catalog or a file), picks the
//! renderer for the requested format and writes the result.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::{renderer_for, DocumentLoader, LoadError};
use crate::domain::catalog::BuiltinReport;
use crate::ports::{RenderError, RenderOptions, ReportFormat};

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// A literal document from the catalog.
    Builtin(BuiltinReport),
    /// A JSON or YAML document file.
    File(PathBuf),
}

impl Default for ReportSource {
    fn default() -> Self {
        Self::Builtin(BuiltinReport::default())
    }
}

/// Command to render one report.
#[derive(Debug, Clone, Default)]
pub struct RenderReportCommand {
    pub source: ReportSource,
    pub format: ReportFormat,
}

/// Result of a successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub format: ReportFormat,
    pub bytes_written: u64,
}

/// Errors from the render command.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Handler for rendering reports.
pub struct RenderReportHandler {
    options: RenderOptions,
    loader: DocumentLoader,
}

impl RenderReportHandler {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            loader: DocumentLoader::new(),
        }
    }

    pub fn handle(
        &self,
        command: RenderReportCommand,
        sink: &mut dyn Write,
    ) -> Result<RenderSummary, ReportError> {
        let renderer = renderer_for(command.format, self.options.clone());
        let mut counted = CountingSink::new(sink);

        match &command.source {
            ReportSource::Builtin(report) => {
                let document = report.document();
                info!("Rendering built-in report '{}' as {}", report, command.format);
                debug!(
                    "Report has {} top-level sections, {} in total",
                    document.sections.len(),
                    document.section_count()
                );
                renderer.render(&document, &mut counted)?;
            }
            ReportSource::File(path) => {
                let value = self.loader.load(path)?;
                info!("Rendering {} as {}", path.display(), command.format);
                renderer.render_value(&value, &mut counted)?;
            }
        }

        debug!("Wrote {} bytes", counted.bytes_written);
        Ok(RenderSummary {
            format: command.format,
            bytes_written: counted.bytes_written,
        })
    }
}

/// Sink wrapper counting the bytes that reached the inner sink.
struct CountingSink<'a> {
    inner: &'a mut dyn Write,
    bytes_written: u64,
}

impl<'a> CountingSink<'a> {
    fn new(inner: &'a mut dyn Write) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }
}

impl Write for CountingSink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn handler() -> RenderReportHandler {
        RenderReportHandler::new(RenderOptions::default())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn default_command_renders_analysis_as_text() {
        let mut sink = Vec::new();
        let summary = handler()
            .handle(RenderReportCommand::default(), &mut sink)
            .unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("=== ANALIZA SYSTEMU LIVE PREVIEW ===\n\n📁 AKTUALNE PLIKI\n"));
        assert_eq!(summary.format, ReportFormat::Text);
        assert_eq!(summary.bytes_written, text.len() as u64);
    }

    #[test]
    fn markdown_format_is_honored() {
        let mut sink = Vec::new();
        let command = RenderReportCommand {
            source: ReportSource::Builtin(BuiltinReport::RevisedAnalysis),
            format: ReportFormat::Markdown,
        };
        handler().handle(command, &mut sink).unwrap();

        let md = String::from_utf8(sink).unwrap();
        assert!(md.starts_with("# SZCZEGÓŁOWA ANALIZA SYSTEMU LIVE PREVIEW MAS7\n\n"));
        assert!(md.contains("## 💡 CONCLUSION\n"));
    }

    #[test]
    fn file_source_is_loaded_and_rendered() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"{"sections":[{"title":"Header","body":{"kind":"bullet_list","items":["a","b"]}}]}"#,
        )
        .unwrap();

        let mut sink = Vec::new();
        let command = RenderReportCommand {
            source: ReportSource::File(file.path().to_path_buf()),
            format: ReportFormat::Text,
        };
        handler().handle(command, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "Header\n- a\n- b\n");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let command = RenderReportCommand {
            source: ReportSource::File(PathBuf::from("/no/such/report.yaml")),
            format: ReportFormat::Text,
        };
        let err = handler().handle(command, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ReportError::Load(LoadError::Io { .. })));
    }

    #[test]
    fn closed_sink_is_a_render_error() {
        let err = handler()
            .handle(RenderReportCommand::default(), &mut ClosedSink)
            .unwrap_err();
        assert!(matches!(err, ReportError::Render(RenderError::SinkWriteFailure(_))));
    }
}
