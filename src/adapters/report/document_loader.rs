//! Document loader adapter - reads untyped report documents from files.
//!
//! Files are parsed into a `serde_json::Value` without checking the section
//! shapes; renderers validate sections as they reach them.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Serialization of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFileFormat {
    Json,
    Yaml,
}

impl DocumentFileFormat {
    /// Picks the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Errors that can occur while loading a document file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported document file {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Loads report documents from JSON or YAML files.
///
/// # Example
///
/// ```rust,ignore
/// let value = DocumentLoader::new().load(Path::new("report.yaml"))?;
/// renderer.render_value(&value, &mut sink)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses the file at `path`.
    pub fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let format = DocumentFileFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let value = self.parse(&content, format).map_err(|reason| LoadError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        tracing::debug!("Loaded {:?} document from {}", format, path.display());
        Ok(value)
    }

    /// Parses document text in the given format.
    pub fn parse(&self, content: &str, format: DocumentFileFormat) -> Result<Value, String> {
        match format {
            DocumentFileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const YAML_DOC: &str = r#"
title: Report
sections:
  - title: Header
    body:
      kind: bullet_list
      items: [a, b]
"#;

    fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ───────────────────────────────────────────────────────────────
    // Format detection
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DocumentFileFormat::from_path(Path::new("a.json")).unwrap(),
            DocumentFileFormat::Json
        );
        assert_eq!(
            DocumentFileFormat::from_path(Path::new("a.YML")).unwrap(),
            DocumentFileFormat::Yaml
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = DocumentFileFormat::from_path(Path::new("a.toml")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    // ───────────────────────────────────────────────────────────────
    // Loading
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn yaml_and_json_parse_to_the_same_value() {
        let loader = DocumentLoader::new();
        let from_yaml = loader.parse(YAML_DOC, DocumentFileFormat::Yaml).unwrap();
        let json = serde_json::to_string(&from_yaml).unwrap();
        let from_json = loader.parse(&json, DocumentFileFormat::Json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml["sections"][0]["body"]["items"][1], "b");
    }

    #[test]
    fn load_reads_yaml_file() {
        let file = temp_file(".yaml", YAML_DOC);
        let value = DocumentLoader::new().load(file.path()).unwrap();
        assert_eq!(value["title"], "Report");
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let file = temp_file(".json", "{ not json");
        let err = DocumentLoader::new().load(file.path()).unwrap_err();
        match err {
            LoadError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DocumentLoader::new()
            .load(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
