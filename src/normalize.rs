//! Filename canonicalization.
//!
//! Turns a raw upload name into the key used for comparison:
//! lowercase, drop the final extension, drop one trailing `(N)` duplicate
//! marker, then collapse whitespace.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

/// Last `.` through end of string.
static RE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.]*$").expect("valid extension regex"));

/// Trailing duplicate marker such as ` (2)`.
static RE_DUPLICATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([0-9]+\)$").expect("valid duplicate marker regex"));

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Comparison key derived from a filename. Never used as identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for NormalizedKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedKey> for String {
    fn from(key: NormalizedKey) -> Self {
        key.0
    }
}

/// Normalize a filename into its comparison key.
///
/// Steps run in a fixed order, each working on the previous result:
/// 1. Lowercase
/// 2. Remove the last `.` and everything after it
/// 3. Remove one trailing `(digits)` marker plus the whitespace before it
/// 4. Collapse whitespace runs to a single space and trim
///
/// Any other character passes through untouched. Never fails.
pub fn normalize(filename: &str) -> NormalizedKey {
    let lower = filename.to_lowercase();
    let without_ext = RE_EXTENSION.replace(&lower, "");
    let without_marker = RE_DUPLICATE_MARKER.replace(&without_ext, "");
    let collapsed = RE_WHITESPACE.replace_all(&without_marker, " ");

    NormalizedKey(collapsed.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_extension() {
        assert_eq!(normalize("Report.pdf").as_str(), "report");
    }

    #[test]
    fn test_normalize_strips_duplicate_marker() {
        assert_eq!(normalize("Report (2).PDF").as_str(), "report");
        assert_eq!(normalize("thesis (1).pdf").as_str(), "thesis");
        assert_eq!(normalize("draft(12).docx").as_str(), "draft");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  My   File  .docx").as_str(), "my file");
        assert_eq!(normalize("tab\tseparated\nname.txt").as_str(), "tab separated name");
    }

    #[test]
    fn test_normalize_only_last_extension() {
        assert_eq!(normalize("archive.tar.gz").as_str(), "archive.tar");
        assert_eq!(normalize("trailing.").as_str(), "trailing");
    }

    #[test]
    fn test_normalize_only_one_marker() {
        assert_eq!(normalize("copy (1) (2).pdf").as_str(), "copy (1)");
    }

    #[test]
    fn test_normalize_marker_must_be_at_end() {
        assert_eq!(normalize("(1) intro.pdf").as_str(), "(1) intro");
        assert_eq!(normalize("chapter (a).pdf").as_str(), "chapter (a)");
        assert_eq!(normalize("chapter ().pdf").as_str(), "chapter ()");
    }

    #[test]
    fn test_normalize_keeps_punctuation_and_accents() {
        assert_eq!(normalize("Résumé_final-v2.PDF").as_str(), "résumé_final-v2");
    }

    #[test]
    fn test_normalize_without_extension() {
        assert_eq!(normalize("README").as_str(), "readme");
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize(".pdf").is_empty());
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "Report.pdf",
            "Report (2).PDF",
            "  My   File  .docx",
            "Résumé_final-v2.PDF",
            "essay_draft",
            "",
            "Lab Report - Week 3 (4).docx",
        ];

        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_key_serializes_as_plain_string() {
        let key = normalize("Report.pdf");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"report\"");
        assert_eq!(key.to_string(), "report");
    }
}
