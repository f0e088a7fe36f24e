//! # Report Match Engine
//!
//! Pairs uploaded source documents with scanned reports that arrive later
//! in bulk uploads, using only their filenames:
//! - Filename normalization (case, extension, `(N)` duplicate markers, whitespace)
//! - Levenshtein similarity as a 0-100 confidence
//! - Candidate ranking with a confidence floor
//! - Batch previews classified as exact / partial / none
//!
//! Everything here is pure and in-memory; storing an accepted pairing is up
//! to the caller.
//!
//! ## Example Usage
//!
//! ```rust
//! use report_match_engine::{preview_matches, CandidateDocument, PreviewStatus};
//!
//! let pending = vec![
//!     CandidateDocument::new("1", "Thesis.pdf").with_normalized("thesis"),
//!     CandidateDocument::new("2", "Lab Report.docx"),
//! ];
//!
//! let previews = preview_matches(&["thesis (1).pdf"], &pending);
//! assert_eq!(previews[0].status, PreviewStatus::Exact);
//! assert_eq!(previews[0].matched_document.as_ref().unwrap().id, "1");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod ranking;

// Re-export primary types
pub use config::{MatchOptions, ScorerKind};
pub use crate::core::{CandidateDocument, MatchCandidate, MatchPreview, MatchType, PreviewStatus};
pub use engine::{preview_matches, MatchEngine};
pub use error::{MatchEngineError, Result};
pub use normalize::{normalize, NormalizedKey};
pub use ranking::{
    find_match_candidates, similarity, LevenshteinScorer, RapidfuzzScorer, Scorer,
    DEFAULT_MIN_CONFIDENCE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
