use crate::ranking::Scorer;

/// Native edit-distance scorer (default)
pub struct LevenshteinScorer;

impl LevenshteinScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LevenshteinScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for LevenshteinScorer {
    fn similarity(&self, a: &str, b: &str) -> u8 {
        similarity(a, b)
    }

    fn name(&self) -> &str {
        "levenshtein"
    }
}

/// Edit distance with unit costs for insertion, deletion and substitution.
///
/// Lengths are counted in chars. Keeps two rows of the
/// `(len(b) + 1) x (len(a) + 1)` table: row `i` holds the cost of turning
/// each prefix of `a` into the first `i` chars of `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = a_chars.len();

    if n == 0 {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return n;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, b_char) in b_chars.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if a_chars[j - 1] == *b_char { 0 } else { 1 };
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity percentage (0-100) of two keys.
///
/// Equal strings score 100, including two empty ones. Otherwise an empty
/// side scores 0 and the rest is `(max_len - distance) / max_len * 100`
/// rounded half away from zero.
pub fn similarity(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    to_percentage(levenshtein(a, b), max_len)
}

/// Convert an edit distance to a rounded percentage of `max_len`.
///
/// Integer only: `floor((2 * 100 * (max_len - distance) + max_len) / (2 * max_len))`.
pub(crate) fn to_percentage(distance: usize, max_len: usize) -> u8 {
    if max_len == 0 {
        return 100;
    }

    let kept = max_len.saturating_sub(distance) as u64;
    let max_len = max_len as u64;
    let pct = (200 * kept + max_len) / (2 * max_len);

    pct.min(100) as u8
}
