//! Approximate name matching
//!
//! Scores a query against a name by the fewest edits needed to turn the query
//! into some substring of the name. The position of that substring does not
//! matter. Scores are normalized by query length so a threshold means the same
//! thing for short and long queries.

/// Default maximum error ratio for a match
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// A successful match of one candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    /// Position of the candidate in the source list
    pub index: usize,
    /// Relevance score, lower is better, `0.0..=1.0`
    pub score: f64,
}

/// Case-insensitive approximate substring matcher
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Error ratio of `query` against `text`, `None` if it exceeds the threshold
    pub fn error_ratio(&self, query: &str, text: &str) -> Option<f64> {
        let pattern: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
        if pattern.is_empty() {
            return Some(0.0);
        }
        let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

        let errors = substring_edit_distance(&pattern, &haystack);
        let ratio = errors as f64 / pattern.len() as f64;
        (ratio <= self.threshold).then_some(ratio)
    }

    /// Relevance score of `text`, weighting the error ratio by field length
    ///
    /// Among equally close matches, names with fewer words rank first.
    pub fn score(&self, query: &str, text: &str) -> Option<f64> {
        let ratio = self.error_ratio(query, text)?;
        let words = text.split(' ').filter(|word| !word.is_empty()).count().max(1);
        let norm = 1.0 / (words as f64).sqrt();
        Some(ratio.max(f64::EPSILON).powf(norm))
    }

    /// Match every candidate, returning matches in relevance order
    ///
    /// Ties keep source order.
    pub fn rank<'a, I>(&self, query: &str, candidates: I) -> Vec<FuzzyMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut matches: Vec<FuzzyMatch> = candidates
            .into_iter()
            .enumerate()
            .filter_map(|(index, text)| {
                self.score(query, text).map(|score| FuzzyMatch { index, score })
            })
            .collect();

        matches.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.index.cmp(&b.index)));
        matches
    }
}

/// Minimum optimal-string-alignment distance between `pattern` and any
/// substring of `text`.
///
/// Row `i` holds the cost of aligning `pattern[..i]` so that it ends at each
/// text position; row zero is all zeros, so a match may start anywhere.
fn substring_edit_distance(pattern: &[char], text: &[char]) -> usize {
    let width = text.len() + 1;
    let mut before_prev: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = vec![0; width];
    let mut current: Vec<usize> = vec![0; width];

    for i in 1..=pattern.len() {
        current[0] = i;
        for j in 1..width {
            let substitution = usize::from(pattern[i - 1] != text[j - 1]);
            let mut cost = (prev[j - 1] + substitution)
                .min(prev[j] + 1)
                .min(current[j - 1] + 1);

            if i > 1 && j > 1 && pattern[i - 1] == text[j - 2] && pattern[i - 2] == text[j - 1] {
                cost = cost.min(before_prev[j - 2] + 1);
            }
            current[j] = cost;
        }
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut current);
    }

    prev.into_iter().min().unwrap_or(pattern.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(pattern: &str, text: &str) -> usize {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        substring_edit_distance(&pattern, &text)
    }

    #[test]
    fn test_substring_distance() {
        assert_eq!(distance("latency", "p95 latency by endpoint"), 0);
        assert_eq!(distance("latncy", "p95 latency"), 1);
        assert_eq!(distance("lateyncy", "latency"), 1);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", "anything"), 0);
    }

    #[test]
    fn test_transposition_costs_one_edit() {
        assert_eq!(distance("ltaency", "latency"), 1);
    }

    #[test]
    fn test_match_ignores_case_and_location() {
        let matcher = FuzzyMatcher::default();

        assert_eq!(matcher.error_ratio("HTTP", "errors over http"), Some(0.0));
        assert_eq!(matcher.error_ratio("http", "HTTP errors"), Some(0.0));
    }

    #[test]
    fn test_threshold_bounds_typos() {
        let matcher = FuzzyMatcher::default();

        // One error in a five character query is exactly at the threshold
        assert_eq!(matcher.error_ratio("redis", "Redsi GET latency"), Some(0.2));
        assert!(matcher.error_ratio("redsx", "Redis").is_none());
        // Short queries must match exactly
        assert!(matcher.error_ratio("rdis", "Redis").is_none());
        assert!(matcher.error_ratio("mongo", "Kafka consumer lag").is_none());
    }

    #[test]
    fn test_empty_name_matches_nothing() {
        let matcher = FuzzyMatcher::default();
        assert!(matcher.score("errors", "").is_none());
    }

    #[test]
    fn test_rank_orders_by_relevance_then_source() {
        let matcher = FuzzyMatcher::default();
        let names = [
            "Kafka lag",
            "Service errors by endpoint",
            "Errorz",
            "errors",
            "Errors",
        ];

        let ranked: Vec<usize> = matcher
            .rank("errors", names.iter().copied())
            .into_iter()
            .map(|m| m.index)
            .collect();

        // Exact single-word matches first in source order, then the longer
        // exact match, then the one-typo match
        assert_eq!(ranked, vec![3, 4, 1, 2]);
    }
}
