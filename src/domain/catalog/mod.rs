//! Built-in report catalog.
//!
//! Two independent analyses of a WordPress plugin's live-preview subsystem,
//! shipped as literal documents so the binary has something to print
//! without any input.

mod analysis;
mod revised_analysis;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::Document;

/// A report that ships with the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinReport {
    /// Current files, identified problems, modernization plan and metrics.
    #[default]
    Analysis,
    /// Per-file findings, three-phase plan, recommended architecture.
    RevisedAnalysis,
}

impl BuiltinReport {
    /// Returns all built-in reports in catalog order.
    pub fn all() -> &'static [BuiltinReport] {
        &[BuiltinReport::Analysis, BuiltinReport::RevisedAnalysis]
    }

    /// Returns the name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinReport::Analysis => "analysis",
            BuiltinReport::RevisedAnalysis => "revised-analysis",
        }
    }

    /// Builds the literal document.
    pub fn document(&self) -> Document {
        match self {
            BuiltinReport::Analysis => analysis::document(),
            BuiltinReport::RevisedAnalysis => revised_analysis::document(),
        }
    }
}

impl fmt::Display for BuiltinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a report name matches nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown report '{0}' (expected one of: analysis, revised-analysis)")]
pub struct UnknownReport(pub String);

impl FromStr for BuiltinReport {
    type Err = UnknownReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analysis" => Ok(BuiltinReport::Analysis),
            "revised-analysis" | "revised" => Ok(BuiltinReport::RevisedAnalysis),
            other => Err(UnknownReport(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::Body;

    #[test]
    fn names_round_trip_through_from_str() {
        for report in BuiltinReport::all() {
            assert_eq!(report.as_str().parse::<BuiltinReport>().unwrap(), *report);
        }
    }

    #[test]
    fn revised_alias_is_accepted() {
        assert_eq!(
            "Revised".parse::<BuiltinReport>().unwrap(),
            BuiltinReport::RevisedAnalysis
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "summary".parse::<BuiltinReport>().unwrap_err();
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn default_is_analysis() {
        assert_eq!(BuiltinReport::default(), BuiltinReport::Analysis);
    }

    #[test]
    fn every_report_is_titled_and_non_empty() {
        for report in BuiltinReport::all() {
            let doc = report.document();
            assert!(doc.title.is_some(), "{} has no title", report);
            assert!(!doc.is_empty(), "{} has no sections", report);
        }
    }

    #[test]
    fn analysis_starts_with_current_files() {
        let doc = BuiltinReport::Analysis.document();
        assert_eq!(doc.sections[0].title, "AKTUALNE PLIKI");
        assert_eq!(doc.sections[0].marker.as_deref(), Some("📁"));
        assert_eq!(doc.depth(), 3);
    }

    #[test]
    fn revised_analysis_ends_with_conclusion_text() {
        let doc = BuiltinReport::RevisedAnalysis.document();
        let last = doc.sections.last().unwrap();
        assert_eq!(last.title, "CONCLUSION");
        assert!(matches!(last.body, Body::Text { ref lines } if lines.len() == 5));
    }

    #[test]
    fn reports_are_independent_documents() {
        assert_ne!(
            BuiltinReport::Analysis.document(),
            BuiltinReport::RevisedAnalysis.document()
        );
    }
}
