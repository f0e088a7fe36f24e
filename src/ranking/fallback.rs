use rapidfuzz::distance::levenshtein;

use crate::ranking::levenshtein::to_percentage;
use crate::ranking::Scorer;

/// Rapidfuzz-backed scorer, same contract as the native one
pub struct RapidfuzzScorer;

impl RapidfuzzScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RapidfuzzScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for RapidfuzzScorer {
    fn similarity(&self, a: &str, b: &str) -> u8 {
        if a == b {
            return 100;
        }
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        let distance = levenshtein::distance(a.chars(), b.chars());
        let max_len = a.chars().count().max(b.chars().count());

        to_percentage(distance, max_len)
    }

    fn name(&self) -> &str {
        "rapidfuzz"
    }
}
