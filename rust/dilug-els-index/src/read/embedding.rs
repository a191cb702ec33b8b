//! Positional fingerprints of indexed words.
//!
//! An embedding counts a word's occurrences over fixed contiguous corpus
//! regions and L2-normalizes the counts. Two words that concentrate in the
//! same parts of the corpus score high; the vectors say nothing about
//! meaning.

use itertools::Itertools;
use serde::Serialize;

use dilug_text::normalize;

use crate::occurrences::Occurrence;
use crate::read::ElsIndex;

/// Number of corpus regions an embedding spans.
pub const EMBEDDING_DIMENSIONS: usize = 100;

/// A word scored by embedding similarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarWord {
    pub word: String,
    pub similarity: f64,
}

impl ElsIndex {
    /// L2-normalized occurrence counts of `word` over
    /// [`EMBEDDING_DIMENSIONS`] contiguous corpus regions. `None` when the
    /// word is not indexed.
    pub fn compute_embedding(&self, word: &str) -> Option<Vec<f32>> {
        self.occurrences_of(word)
            .map(|occurrences| self.embedding_from(occurrences))
    }

    fn embedding_from(&self, occurrences: &[Occurrence]) -> Vec<f32> {
        let region_size = self
            .metadata()
            .corpus_length
            .div_ceil(EMBEDDING_DIMENSIONS)
            .max(1);
        let mut embedding = vec![0.0f32; EMBEDDING_DIMENSIONS];
        for occ in occurrences {
            // The last region absorbs any tail shorter than region_size.
            let region = (occ.position / region_size).min(EMBEDDING_DIMENSIONS - 1);
            embedding[region] += 1.0;
        }
        let norm = embedding
            .iter()
            .map(|&count| count as f64 * count as f64)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for value in &mut embedding {
                *value = (*value as f64 / norm) as f32;
            }
        }
        embedding
    }

    /// Cosine similarity of the two words' embeddings, `0.0` when either
    /// word is absent. Vectors are normalized, so this is a plain dot
    /// product in `[0, 1]`.
    pub fn embedding_similarity(&self, word1: &str, word2: &str) -> f64 {
        let (Some(embedding1), Some(embedding2)) =
            (self.compute_embedding(word1), self.compute_embedding(word2))
        else {
            return 0.0;
        };
        dot(&embedding1, &embedding2)
    }

    /// The `top_k` indexed words whose embeddings are most similar to that
    /// of `word`, descending; the word itself and zero-similarity words are
    /// omitted. Empty when `word` is not indexed.
    pub fn find_similar_by_embedding(&self, word: &str, top_k: usize) -> Vec<SimilarWord> {
        let Some(target) = self.compute_embedding(word) else {
            return Vec::new();
        };
        let key = normalize(word);

        self.entries()
            .filter(|(candidate, _)| *candidate != key)
            .filter_map(|(candidate, occurrences)| {
                let similarity = dot(&target, &self.embedding_from(occurrences));
                (similarity > 0.0).then(|| SimilarWord {
                    word: candidate.to_string(),
                    similarity,
                })
            })
            .sorted_unstable_by(|a, b| {
                b.similarity
                    .total_cmp(&a.similarity)
                    .then_with(|| a.word.cmp(&b.word))
            })
            .take(top_k)
            .collect()
    }
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| x as f64 * y as f64)
        .sum()
}
