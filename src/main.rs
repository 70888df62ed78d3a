//! preview-report - Render a structured report to stdout or a file
//!
//! The workflow is:
//!
//! 1. Parse CLI arguments (report, input file, format, output)
//! 2. Load configuration from `PREVIEW_REPORT__*` environment variables
//! 3. Render the report and write it to the selected sink
//!
//! Run without arguments it prints the built-in analysis report as text.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use preview_report::application::{RenderReportCommand, RenderReportHandler, ReportSource};
use preview_report::config::{AppConfig, LoggingConfig};
use preview_report::domain::catalog::BuiltinReport;
use preview_report::ports::ReportFormat;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "preview-report", version)]
#[command(about = "Render structured analysis reports as text, Markdown or JSON")]
struct Args {
    /// Built-in report to render (analysis, revised-analysis)
    #[arg(default_value_t = BuiltinReport::Analysis)]
    report: BuiltinReport,

    /// Render a JSON or YAML document file instead of a built-in report
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Written directly: tracing may not be initialized yet.
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging, args.verbose);
    config.validate().context("Invalid configuration")?;

    let source = match args.input {
        Some(path) => ReportSource::File(path),
        None => ReportSource::Builtin(args.report),
    };
    let command = RenderReportCommand {
        source,
        format: args.format,
    };
    let handler = RenderReportHandler::new(config.render.to_options());

    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            let summary = handler.handle(command, &mut sink)?;
            sink.flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            handler.handle(command, &mut sink)?
        }
    };

    debug!(
        "Rendered {} bytes as {}",
        summary.bytes_written, summary.format
    );
    Ok(())
}

/// The single line reported on stderr when the run fails.
fn failure_message(error: &anyhow::Error) -> String {
    format!("Error: {:#}", error)
}

/// Initialize the tracing subscriber on stderr so stdout carries only the report.
fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let filter = logging.env_filter(verbose);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_is_one_line_with_context_chain() {
        let error = anyhow::anyhow!("PREVIEW_REPORT__RENDER__MAX_DEPTH: invalid digit")
            .context("Failed to load configuration");

        let message = failure_message(&error);

        assert_eq!(
            message,
            "Error: Failed to load configuration: PREVIEW_REPORT__RENDER__MAX_DEPTH: invalid digit"
        );
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn no_arguments_selects_builtin_text_report() {
        let args = Args::parse_from(["preview-report"]);
        assert_eq!(args.report, BuiltinReport::Analysis);
        assert_eq!(args.format, ReportFormat::Text);
        assert!(args.input.is_none());
        assert!(args.output.is_none());
    }
}
