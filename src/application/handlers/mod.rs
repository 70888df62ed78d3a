//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod render_report;

pub use render_report::{
    RenderReportCommand, RenderReportHandler, RenderSummary, ReportError, ReportSource,
};
