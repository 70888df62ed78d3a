//! Preview Report - Structured report rendering
//!
//! This crate models a report as a titled tree of sections whose bodies are
//! bullet, numbered, key/value, text, tree or nested-section lists, and renders
//! it to plain text, Markdown or JSON. Two analysis reports ship in the
//! built-in catalog; any other report can be loaded from a JSON or YAML file.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
