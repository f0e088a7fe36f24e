use rayon::prelude::*;
use std::sync::Arc;

use crate::config::{MatchOptions, ScorerKind};
use crate::core::{CandidateDocument, MatchCandidate, MatchPreview, PreviewStatus};
use crate::error::Result;
use crate::normalize::normalize;
use crate::ranking::{rank_candidates, LevenshteinScorer, RapidfuzzScorer, Scorer};

/// Pairs report filenames with pending documents
pub struct MatchEngine {
    scorer: Arc<dyn Scorer>,
    options: MatchOptions,
}

impl MatchEngine {
    /// Create engine with default thresholds and the native scorer
    pub fn new() -> Self {
        Self {
            scorer: Arc::new(LevenshteinScorer::new()),
            options: MatchOptions::default(),
        }
    }

    /// Create engine from validated options
    pub fn with_options(options: MatchOptions) -> Result<Self> {
        options.validate()?;

        let scorer: Arc<dyn Scorer> = match options.scorer {
            ScorerKind::Levenshtein => Arc::new(LevenshteinScorer::new()),
            ScorerKind::Rapidfuzz => Arc::new(RapidfuzzScorer::new()),
        };

        tracing::debug!("Match engine using {} scorer", scorer.name());

        Ok(Self { scorer, options })
    }

    /// Replace the pairwise scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Similarity of two keys with the configured scorer
    pub fn similarity(&self, a: &str, b: &str) -> u8 {
        self.scorer.similarity(a, b)
    }

    /// Ranked candidates for one filename at the configured floor
    pub fn find_match_candidates(
        &self,
        query: &str,
        candidates: &[CandidateDocument],
    ) -> Vec<MatchCandidate> {
        self.find_match_candidates_with(query, candidates, self.options.min_confidence)
    }

    /// Ranked candidates for one filename at an explicit floor
    pub fn find_match_candidates_with(
        &self,
        query: &str,
        candidates: &[CandidateDocument],
        min_confidence: u8,
    ) -> Vec<MatchCandidate> {
        rank_candidates(self.scorer.as_ref(), query, candidates, min_confidence)
    }

    /// One preview per report, in input order.
    ///
    /// Every report sees the whole pool; a document picked for one report
    /// stays available to the next.
    pub fn preview_matches<S: AsRef<str>>(
        &self,
        reports: &[S],
        candidates: &[CandidateDocument],
    ) -> Vec<MatchPreview> {
        let previews: Vec<MatchPreview> = reports
            .iter()
            .map(|report| self.preview_one(report.as_ref(), candidates))
            .collect();

        self.log_summary(&previews);
        previews
    }

    /// Same as [`preview_matches`](Self::preview_matches), reports scored on
    /// the rayon pool.
    pub fn preview_matches_par<S: AsRef<str> + Sync>(
        &self,
        reports: &[S],
        candidates: &[CandidateDocument],
    ) -> Vec<MatchPreview> {
        let previews: Vec<MatchPreview> = reports
            .par_iter()
            .map(|report| self.preview_one(report.as_ref(), candidates))
            .collect();

        self.log_summary(&previews);
        previews
    }

    fn preview_one(&self, report: &str, candidates: &[CandidateDocument]) -> MatchPreview {
        let normalized_name = normalize(report).into_string();
        let mut ranked = self.find_match_candidates_with(
            report,
            candidates,
            self.options.preview_min_confidence,
        );

        // First candidate (in ranked order) clearing exact, then partial
        let pick = ranked
            .iter()
            .position(|c| c.confidence >= self.options.exact_threshold)
            .map(|idx| (idx, PreviewStatus::Exact))
            .or_else(|| {
                ranked
                    .iter()
                    .position(|c| c.confidence >= self.options.partial_threshold)
                    .map(|idx| (idx, PreviewStatus::Partial))
            });

        let preview = match pick {
            Some((idx, status)) => {
                let matched = ranked.remove(idx);
                ranked.truncate(self.options.max_suggestions_matched);

                MatchPreview {
                    report_name: report.to_string(),
                    normalized_name,
                    matched_document: Some(matched),
                    suggestions: ranked,
                    status,
                }
            }
            None => {
                ranked.truncate(self.options.max_suggestions_unmatched);

                MatchPreview {
                    report_name: report.to_string(),
                    normalized_name,
                    matched_document: None,
                    suggestions: ranked,
                    status: PreviewStatus::None,
                }
            }
        };

        tracing::trace!("{}", preview.display());
        preview
    }

    fn log_summary(&self, previews: &[MatchPreview]) {
        let exact = previews.iter().filter(|p| p.status == PreviewStatus::Exact).count();
        let partial = previews.iter().filter(|p| p.status == PreviewStatus::Partial).count();

        tracing::debug!(
            "Previewed {} reports: {} exact, {} partial, {} unmatched [{}]",
            previews.len(),
            exact,
            partial,
            previews.len() - exact - partial,
            self.scorer.name()
        );
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Preview a batch of reports with default thresholds
pub fn preview_matches<S: AsRef<str>>(
    reports: &[S],
    candidates: &[CandidateDocument],
) -> Vec<MatchPreview> {
    MatchEngine::new().preview_matches(reports, candidates)
}
