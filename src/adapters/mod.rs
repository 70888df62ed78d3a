//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `report` - Renderers for text, markdown and JSON, plus the file loader

pub mod report;

pub use report::{
    renderer_for, DocumentLoader, JsonReportRenderer, LoadError, MarkdownReportRenderer,
    TextReportRenderer,
};
