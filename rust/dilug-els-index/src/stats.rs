//! Aggregate statistics over an index.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

use crate::read::ElsIndex;

const TOP_WORDS: usize = 20;

/// Occurrence distribution summary for one index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub total_words: usize,
    pub total_occurrences: usize,
    /// Number of words per occurrence-count bucket. Counts up to 10 get a
    /// bucket each, larger counts group into coarse ranges.
    pub words_by_occurrence_count: BTreeMap<String, usize>,
    /// The most frequent words with their counts, descending.
    pub top_words: Vec<(String, usize)>,
}

impl IndexStats {
    pub fn from_index(index: &ElsIndex) -> IndexStats {
        let mut buckets: BTreeMap<String, usize> = BTreeMap::new();
        let mut counts: Vec<(String, usize)> = Vec::with_capacity(index.word_count());
        let mut total_occurrences = 0;

        for (word, occurrences) in index.entries() {
            let count = occurrences.len();
            total_occurrences += count;
            *buckets.entry(bucket_label(count)).or_insert(0) += 1;
            counts.push((word.to_string(), count));
        }

        let top_words = counts
            .into_iter()
            .sorted_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .take(TOP_WORDS)
            .collect();

        IndexStats {
            total_words: index.word_count(),
            total_occurrences,
            words_by_occurrence_count: buckets,
            top_words,
        }
    }
}

fn bucket_label(count: usize) -> String {
    match count {
        0..=10 => count.to_string(),
        11..=100 => "11-100".to_string(),
        101..=1000 => "101-1000".to_string(),
        _ => "1000+".to_string(),
    }
}
