pub mod fallback;
pub mod levenshtein;

use crate::core::{CandidateDocument, MatchCandidate, MatchType};
use crate::normalize::normalize;

pub use fallback::RapidfuzzScorer;
pub use levenshtein::{levenshtein, similarity, LevenshteinScorer};

/// Default floor for [`find_match_candidates`]
pub const DEFAULT_MIN_CONFIDENCE: u8 = 60;

/// Trait for pairwise similarity implementations
pub trait Scorer: Send + Sync {
    /// Similarity of two normalized keys, 0-100
    fn similarity(&self, a: &str, b: &str) -> u8;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Score every candidate against `query`, keep those at or above
/// `min_confidence`, best first.
///
/// The sort is stable, so equal confidences keep their input order.
pub fn rank_candidates(
    scorer: &dyn Scorer,
    query: &str,
    candidates: &[CandidateDocument],
    min_confidence: u8,
) -> Vec<MatchCandidate> {
    let query_key = normalize(query);

    let mut ranked: Vec<MatchCandidate> = candidates
        .iter()
        .filter_map(|doc| {
            let key = doc.comparison_key();
            let confidence = scorer.similarity(&query_key, &key);

            tracing::trace!("{} vs {} = {}", query_key, key, confidence);

            match MatchType::classify(confidence, min_confidence) {
                MatchType::None => None,
                match_type => Some(MatchCandidate {
                    id: doc.id.clone(),
                    file_name: doc.file_name.clone(),
                    normalized_filename: key.into_owned(),
                    confidence,
                    match_type,
                }),
            }
        })
        .collect();

    // Sort by confidence descending
    ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    tracing::debug!(
        "Ranked {} of {} candidates for '{}' [{}]",
        ranked.len(),
        candidates.len(),
        query_key,
        scorer.name()
    );

    ranked
}

/// Rank candidates for one filename with the native scorer
pub fn find_match_candidates(
    query: &str,
    candidates: &[CandidateDocument],
    min_confidence: u8,
) -> Vec<MatchCandidate> {
    rank_candidates(&LevenshteinScorer, query, candidates, min_confidence)
}
