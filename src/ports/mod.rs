//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Rendering Ports
//!
//! - `ReportRenderer` - Turns a report document into formatted output on a sink

mod report_renderer;

pub use report_renderer::{
    section_location, write_block, Markers, RenderError, RenderOptions, ReportFormat,
    ReportRenderer, UnknownFormat, MAX_NUMBERED_WIDTH,
};
