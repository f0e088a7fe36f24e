use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::normalize::normalize;

/// An existing document waiting to be paired with a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateDocument {
    /// Opaque identifier from the document store
    pub id: String,

    /// Original uploaded filename
    #[serde(default)]
    pub file_name: String,

    /// Precomputed comparison key, if the store already has one
    #[serde(default)]
    pub normalized_filename: Option<String>,

    /// Status tag, carried through untouched
    #[serde(default)]
    pub status: String,
}

impl CandidateDocument {
    /// Create a new candidate with required fields
    pub fn new(id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            normalized_filename: None,
            status: String::new(),
        }
    }

    /// Attach a precomputed normalized filename
    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized_filename = Some(normalized.into());
        self
    }

    /// Attach a status tag
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Key this candidate is compared on.
    ///
    /// The precomputed key is used as-is when present and non-empty, even if it
    /// disagrees with `file_name`. Otherwise the key is derived on the fly and
    /// the record is left untouched.
    pub fn comparison_key(&self) -> Cow<'_, str> {
        match self.normalized_filename.as_deref() {
            Some(key) if !key.is_empty() => Cow::Borrowed(key),
            _ => Cow::Owned(normalize(&self.file_name).into_string()),
        }
    }
}

/// How a scored candidate relates to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Confidence 100
    Exact,
    /// At or above the caller's floor, below 100
    Fuzzy,
    /// Below the floor
    None,
}

impl MatchType {
    /// Classify a confidence against a minimum threshold
    pub fn classify(confidence: u8, min_confidence: u8) -> Self {
        if confidence >= 100 {
            MatchType::Exact
        } else if confidence >= min_confidence {
            MatchType::Fuzzy
        } else {
            MatchType::None
        }
    }
}

/// A candidate scored against one query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchCandidate {
    pub id: String,
    pub file_name: String,
    pub normalized_filename: String,
    /// Similarity 0-100
    pub confidence: u8,
    pub match_type: MatchType,
}

impl MatchCandidate {
    pub fn is_exact(&self) -> bool {
        self.match_type == MatchType::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let doc = CandidateDocument::new("42", "Thesis.pdf").with_status("pending");
        assert_eq!(doc.id, "42");
        assert_eq!(doc.file_name, "Thesis.pdf");
        assert_eq!(doc.status, "pending");
        assert!(doc.normalized_filename.is_none());
    }

    #[test]
    fn test_comparison_key_prefers_precomputed() {
        let doc = CandidateDocument::new("1", "Thesis.pdf").with_normalized("something else");
        assert_eq!(doc.comparison_key(), "something else");
    }

    #[test]
    fn test_comparison_key_falls_back_without_mutation() {
        let doc = CandidateDocument::new("1", "My Thesis (3).PDF");
        assert_eq!(doc.comparison_key(), "my thesis");
        assert!(doc.normalized_filename.is_none());

        let empty = CandidateDocument::new("2", "Notes.txt").with_normalized("");
        assert_eq!(empty.comparison_key(), "notes");
        assert_eq!(empty.normalized_filename.as_deref(), Some(""));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let doc: CandidateDocument = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(doc.id, "7");
        assert_eq!(doc.file_name, "");
        assert!(doc.normalized_filename.is_none());
        assert_eq!(doc.comparison_key(), "");

        let doc: CandidateDocument = serde_json::from_str(
            r#"{"id": "1", "file_name": "Thesis.pdf", "normalized_filename": null, "status": "waiting"}"#,
        )
        .unwrap();
        assert_eq!(doc.comparison_key(), "thesis");
        assert_eq!(doc.status, "waiting");
    }

    #[test]
    fn test_match_type_classify() {
        assert_eq!(MatchType::classify(100, 60), MatchType::Exact);
        assert_eq!(MatchType::classify(99, 60), MatchType::Fuzzy);
        assert_eq!(MatchType::classify(60, 60), MatchType::Fuzzy);
        assert_eq!(MatchType::classify(59, 60), MatchType::None);
        assert_eq!(MatchType::classify(0, 0), MatchType::Fuzzy);
    }

    #[test]
    fn test_match_type_serialization() {
        assert_eq!(serde_json::to_string(&MatchType::Exact).unwrap(), "\"exact\"");
        assert_eq!(serde_json::to_string(&MatchType::Fuzzy).unwrap(), "\"fuzzy\"");
    }
}
