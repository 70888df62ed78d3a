//! Domain layer containing the report model and its built-in content.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `report` - Document, section and body types
//! - `catalog` - Literal reports shipped with the binary

pub mod catalog;
pub mod foundation;
pub mod report;
