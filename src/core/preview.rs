use serde::{Deserialize, Serialize};
use crate::core::MatchCandidate;

/// Outcome of previewing one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStatus {
    /// A candidate scored 100
    Exact,
    /// Best candidate scored at or above the partial threshold
    Partial,
    /// Nothing good enough to pick
    None,
}

/// Batch preview result for a single report filename
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchPreview {
    /// Report filename as supplied
    pub report_name: String,

    /// Its comparison key
    pub normalized_name: String,

    /// Chosen document, if any
    #[serde(default)]
    pub matched_document: Option<MatchCandidate>,

    /// Other candidates, best first
    #[serde(default)]
    pub suggestions: Vec<MatchCandidate>,

    pub status: PreviewStatus,
}

impl MatchPreview {
    pub fn is_matched(&self) -> bool {
        self.matched_document.is_some()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match &self.matched_document {
            Some(doc) => format!(
                "{} -> {} ({}%) {:?} [+{} suggestions]",
                self.report_name,
                doc.file_name,
                doc.confidence,
                self.status,
                self.suggestions.len()
            ),
            None => format!(
                "{} -> no match {:?} [{} suggestions]",
                self.report_name,
                self.status,
                self.suggestions.len()
            ),
        }
    }
}
