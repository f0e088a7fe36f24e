//! Matching thresholds and scorer selection.
//!
//! Defaults reproduce the bulk-upload behavior: 60 for single lookups, 50 as
//! the preview floor, 80 for a partial pick, 100 for exact.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MatchEngineError, Result};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "REPORT_MATCH_";

/// Which pairwise scorer the engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    #[default]
    Levenshtein,
    Rapidfuzz,
}

impl std::str::FromStr for ScorerKind {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "levenshtein" => Ok(ScorerKind::Levenshtein),
            "rapidfuzz" => Ok(ScorerKind::Rapidfuzz),
            other => Err(MatchEngineError::InvalidConfig(format!("unknown scorer '{}'", other))),
        }
    }
}

/// Engine options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Floor for single-filename lookups
    pub min_confidence: u8,

    /// Floor used while building batch previews
    pub preview_min_confidence: u8,

    /// Confidence that counts as an exact pairing
    pub exact_threshold: u8,

    /// Lowest confidence picked as a partial pairing
    pub partial_threshold: u8,

    /// Suggestions kept next to a chosen document
    pub max_suggestions_matched: usize,

    /// Suggestions kept when nothing was chosen
    pub max_suggestions_unmatched: usize,

    pub scorer: ScorerKind,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_confidence: 60,
            preview_min_confidence: 50,
            exact_threshold: 100,
            partial_threshold: 80,
            max_suggestions_matched: 4,
            max_suggestions_unmatched: 5,
            scorer: ScorerKind::Levenshtein,
        }
    }
}

impl MatchOptions {
    /// Parse options from JSON; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Defaults overridden by `REPORT_MATCH_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and skipped.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        let read_u8 = |name: &str, target: &mut u8| {
            let key = format!("{}{}", ENV_PREFIX, name);
            if let Some(raw) = lookup(&key) {
                match raw.trim().parse::<u8>() {
                    Ok(value) => *target = value,
                    Err(e) => tracing::warn!("Ignoring {}={:?}: {}", key, raw, e),
                }
            }
        };
        read_u8("MIN_CONFIDENCE", &mut options.min_confidence);
        read_u8("PREVIEW_MIN_CONFIDENCE", &mut options.preview_min_confidence);
        read_u8("EXACT_THRESHOLD", &mut options.exact_threshold);
        read_u8("PARTIAL_THRESHOLD", &mut options.partial_threshold);

        let read_usize = |name: &str, target: &mut usize| {
            let key = format!("{}{}", ENV_PREFIX, name);
            if let Some(raw) = lookup(&key) {
                match raw.trim().parse::<usize>() {
                    Ok(value) => *target = value,
                    Err(e) => tracing::warn!("Ignoring {}={:?}: {}", key, raw, e),
                }
            }
        };
        read_usize("MAX_SUGGESTIONS_MATCHED", &mut options.max_suggestions_matched);
        read_usize("MAX_SUGGESTIONS_UNMATCHED", &mut options.max_suggestions_unmatched);

        let scorer_key = format!("{}SCORER", ENV_PREFIX);
        if let Some(raw) = lookup(&scorer_key) {
            match raw.parse::<ScorerKind>() {
                Ok(kind) => options.scorer = kind,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", scorer_key, raw, e),
            }
        }

        options.validate()?;
        Ok(options)
    }

    /// Check thresholds are within 0-100 and ordered
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("min_confidence", self.min_confidence),
            ("preview_min_confidence", self.preview_min_confidence),
            ("exact_threshold", self.exact_threshold),
            ("partial_threshold", self.partial_threshold),
        ];

        for (name, value) in thresholds {
            if value > 100 {
                return Err(MatchEngineError::InvalidConfig(format!(
                    "{} must be at most 100, got {}",
                    name, value
                )));
            }
        }

        if self.preview_min_confidence > self.partial_threshold {
            return Err(MatchEngineError::InvalidConfig(format!(
                "preview_min_confidence ({}) exceeds partial_threshold ({})",
                self.preview_min_confidence, self.partial_threshold
            )));
        }

        if self.partial_threshold > self.exact_threshold {
            return Err(MatchEngineError::InvalidConfig(format!(
                "partial_threshold ({}) exceeds exact_threshold ({})",
                self.partial_threshold, self.exact_threshold
            )));
        }

        Ok(())
    }
}
