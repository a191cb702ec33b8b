//! Occurrence-count statistics under a random-text model.

use serde::Serialize;

use dilug_text::letters::{DEFAULT_LETTER_FREQUENCY, letter_frequency};
use dilug_text::normalize;

use crate::read::ElsIndex;

/// Absolute z-score beyond which a count is flagged as significant
/// (roughly the 95% level).
pub const SIGNIFICANCE_THRESHOLD: f64 = 2.0;

/// Observed versus expected occurrence counts for one word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignificanceScore {
    pub observed: usize,
    pub expected: f64,
    pub z_score: f64,
    pub significant: bool,
}

impl ElsIndex {
    /// Expected number of chance occurrences of `word` across the indexed
    /// skip range, treating letters as independent draws at fixed unigram
    /// frequencies.
    ///
    /// The model multiplies the word's per-letter frequencies (unknown
    /// letters contribute [`DEFAULT_LETTER_FREQUENCY`]), the approximate
    /// count of valid start positions at the range's mean skip magnitude,
    /// and the number of non-zero skips. Crude, but good enough to rank
    /// words against each other.
    pub fn expected_occurrences(&self, word: &str) -> f64 {
        let word = normalize(word);
        let letters = word.chars().count();
        if letters == 0 {
            return 0.0;
        }

        let metadata = self.metadata();
        let (min_skip, max_skip) = metadata.skip_range;
        let skip_count = (max_skip - min_skip) as f64;

        let probability: f64 = word
            .chars()
            .map(|ch| letter_frequency(ch).unwrap_or(DEFAULT_LETTER_FREQUENCY))
            .product();

        let average_skip = (min_skip.unsigned_abs() as f64 + max_skip as f64) / 2.0;
        let valid_positions =
            (metadata.corpus_length as f64 - (letters - 1) as f64 * average_skip).max(0.0);

        probability * valid_positions * skip_count
    }

    /// Poisson-approximate z-score of the observed occurrence count of
    /// `word` against [`expected_occurrences`](ElsIndex::expected_occurrences).
    ///
    /// A zero expectation yields `+inf` when anything was observed and `0`
    /// otherwise.
    pub fn significance_score(&self, word: &str) -> SignificanceScore {
        let observed = self.occurrence_count(word);
        let expected = self.expected_occurrences(word);

        let z_score = if expected == 0.0 {
            if observed > 0 { f64::INFINITY } else { 0.0 }
        } else {
            (observed as f64 - expected) / expected.sqrt()
        };

        SignificanceScore {
            observed,
            expected,
            z_score,
            significant: z_score.abs() > SIGNIFICANCE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::test_support::index_from_entries;

    #[test]
    fn test_expected_occurrences() {
        let index = index_from_entries(1000, (-10, 10), &[("אא", &[(5, 2)])]);

        // freq(א)² x (1000 - 1*10) valid starts x 20 skips.
        let expected = index.expected_occurrences("אא");
        assert!((expected - 0.0902 * 0.0902 * 990.0 * 20.0).abs() < 1e-9);

        // Final forms score the same as their base letters.
        assert_eq!(
            index.expected_occurrences("שלום"),
            index.expected_occurrences("שלומ")
        );

        assert_eq!(index.expected_occurrences(""), 0.0);
    }

    #[test]
    fn test_expected_occurrences_clamps_valid_starts() {
        // A five-letter word at mean skip 10 cannot fit in 30 characters.
        let index = index_from_entries(30, (-10, 10), &[("אבגדה", &[(0, 1)])]);
        assert_eq!(index.expected_occurrences("אבגדה"), 0.0);
    }

    #[test]
    fn test_significance_score() {
        let mut hits: Vec<(usize, i32)> = Vec::new();
        for i in 0..100 {
            hits.push((i, 2));
        }
        let index = index_from_entries(1000, (-10, 10), &[("בב", &hits)]);

        // Expected for אא is ~161.1; nothing observed is a strong deficit.
        let score = index.significance_score("אא");
        assert_eq!(score.observed, 0);
        assert!(score.z_score < -2.0);
        assert!(score.significant);

        // 100 observed against ~56.4 expected is a strong excess.
        let score = index.significance_score("בב");
        assert_eq!(score.observed, 100);
        assert!(score.z_score > 2.0);
        assert!(score.significant);
    }

    #[test]
    fn test_zero_expectation_scores() {
        // The corpus is too short for the word, so expectation clamps to 0.
        let index = index_from_entries(30, (-10, 10), &[("אבגדה", &[(0, 1)])]);

        let score = index.significance_score("אבגדה");
        assert_eq!(score.observed, 1);
        assert_eq!(score.expected, 0.0);
        assert_eq!(score.z_score, f64::INFINITY);
        assert!(score.significant);

        let score = index.significance_score("והזחט");
        assert_eq!(score.observed, 0);
        assert_eq!(score.z_score, 0.0);
        assert!(!score.significant);
    }

    #[test]
    fn test_more_observations_raise_the_score() {
        let few: Vec<(usize, i32)> = (0..5).map(|i| (i, 2)).collect();
        let many: Vec<(usize, i32)> = (0..50).map(|i| (i, 2)).collect();
        let few_index = index_from_entries(1000, (-10, 10), &[("גג", &few)]);
        let many_index = index_from_entries(1000, (-10, 10), &[("גג", &many)]);

        let low = few_index.significance_score("גג");
        let high = many_index.significance_score("גג");
        assert_eq!(low.expected, high.expected);
        assert!(high.z_score > low.z_score);
    }
}
