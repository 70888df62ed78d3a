//! Report document model.
//!
//! A `Document` is an ordered list of `Section`s; each section carries a
//! `Body` that is a bullet list, a numbered list, key/value metrics, prose,
//! a tree or further sections.

mod body;
mod document;

pub use body::{Body, BulletTone, KeyValue};
pub use document::{Document, DocumentOutline, Section};
