//! Proximity queries and cluster discovery over a loaded index.

use serde::Serialize;

use dilug_text::normalize;

use crate::occurrences::Occurrence;
use crate::read::ElsIndex;

/// Default search radius for cluster discovery, in characters.
pub const DEFAULT_CLUSTER_RADIUS: usize = 1000;

/// Default search radius for centroid recomputation, in characters.
pub const DEFAULT_RECENTER_RADIUS: usize = 5000;

/// Options for [`ElsIndex::find_nearby`].
#[derive(Debug, Clone, Copy)]
pub struct NearbyOptions {
    /// Words with fewer letters than this are not reported.
    pub min_word_length: usize,
    /// Cap on the number of returned words.
    pub max_results: usize,
}

impl Default for NearbyOptions {
    fn default() -> NearbyOptions {
        NearbyOptions {
            min_word_length: 2,
            max_results: 100,
        }
    }
}

/// One occurrence within range of the query position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NearbyOccurrence {
    pub position: usize,
    pub skip: i32,
    /// Absolute character distance from the query position.
    pub distance: usize,
}

/// A word with at least one occurrence within range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearbyWord {
    pub word: String,
    /// The in-range occurrences only.
    pub occurrences: Vec<NearbyOccurrence>,
    pub min_distance: usize,
    /// Occurrence count of the word over the whole corpus.
    pub total_occurrences: usize,
}

/// Closest approach between two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairProximity {
    pub word1: String,
    pub word2: String,
    pub distance: usize,
    pub occurrence1: Occurrence,
    pub occurrence2: Occurrence,
}

/// Symmetric pairwise minimum distances. `None` marks a pair where at least
/// one word has no occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProximityMatrix {
    pub words: Vec<String>,
    pub distances: Vec<Vec<Option<usize>>>,
}

/// Options for [`ElsIndex::discover_cluster`].
#[derive(Debug, Clone, Copy)]
pub struct ClusterOptions {
    /// Number of nearby words retained in the cluster.
    pub top_n: usize,
    pub min_word_length: usize,
}

impl Default for ClusterOptions {
    fn default() -> ClusterOptions {
        ClusterOptions {
            top_n: 20,
            min_word_length: 3,
        }
    }
}

/// Words gathered around a seed occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub seed: String,
    /// The seed occurrence the cluster is anchored on.
    pub center: Occurrence,
    /// Rounded mean position of the member occurrences, or the anchor
    /// position when there are none.
    pub centroid: usize,
    /// Signed displacement of the centroid from the anchor.
    pub centroid_shift: i64,
    pub words: Vec<NearbyWord>,
    pub total_nearby_occurrences: usize,
}

impl ElsIndex {
    /// All indexed words with at least one occurrence within `max_distance`
    /// of `center`, ascending by closest approach. Ties order by word so
    /// results are reproducible across runs.
    pub fn find_nearby(
        &self,
        center: usize,
        max_distance: usize,
        options: &NearbyOptions,
    ) -> Vec<NearbyWord> {
        let mut results = Vec::new();
        for (word, occurrences) in self.entries() {
            if word.chars().count() < options.min_word_length {
                continue;
            }
            let nearby: Vec<NearbyOccurrence> = occurrences
                .iter()
                .filter_map(|occ| {
                    let distance = occ.position.abs_diff(center);
                    (distance <= max_distance).then_some(NearbyOccurrence {
                        position: occ.position,
                        skip: occ.skip,
                        distance,
                    })
                })
                .collect();
            let Some(min_distance) = nearby.iter().map(|occ| occ.distance).min() else {
                continue;
            };
            results.push(NearbyWord {
                word: word.to_string(),
                occurrences: nearby,
                min_distance,
                total_occurrences: occurrences.len(),
            });
        }
        results.sort_unstable_by(|a, b| {
            a.min_distance
                .cmp(&b.min_distance)
                .then_with(|| a.word.cmp(&b.word))
        });
        results.truncate(options.max_results);
        results
    }

    /// [`find_nearby`](ElsIndex::find_nearby) anchored at the first
    /// occurrence of `word`. `None` when the word is not indexed.
    pub fn find_nearby_words(
        &self,
        word: &str,
        max_distance: usize,
        options: &NearbyOptions,
    ) -> Option<Vec<NearbyWord>> {
        let center = self.occurrences_of(word)?.first()?;
        Some(self.find_nearby(center.position, max_distance, options))
    }

    /// Minimum distance between any occurrence of `word1` and any occurrence
    /// of `word2`, exhaustively over both lists. `None` when either word is
    /// absent. Ties resolve to the earliest pair in occurrence order.
    pub fn pair_proximity(&self, word1: &str, word2: &str) -> Option<PairProximity> {
        let occurrences1 = self.occurrences_of(word1)?;
        let occurrences2 = self.occurrences_of(word2)?;

        let mut best: Option<(usize, Occurrence, Occurrence)> = None;
        for &occ1 in occurrences1 {
            for &occ2 in occurrences2 {
                let distance = occ1.position.abs_diff(occ2.position);
                if best.is_none_or(|(closest, _, _)| distance < closest) {
                    best = Some((distance, occ1, occ2));
                }
            }
        }
        best.map(|(distance, occurrence1, occurrence2)| PairProximity {
            word1: word1.to_string(),
            word2: word2.to_string(),
            distance,
            occurrence1,
            occurrence2,
        })
    }

    /// Pairwise minimum distances for a set of words. The diagonal is zero;
    /// pairs involving an absent word are `None`.
    pub fn proximity_matrix(
        &self,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> ProximityMatrix {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let n = words.len();
        let mut distances = vec![vec![None; n]; n];
        for i in 0..n {
            distances[i][i] = Some(0);
            for j in (i + 1)..n {
                let distance = self
                    .pair_proximity(&words[i], &words[j])
                    .map(|proximity| proximity.distance);
                distances[i][j] = distance;
                distances[j][i] = distance;
            }
        }
        ProximityMatrix { words, distances }
    }

    /// Gathers the words surrounding the first occurrence of `seed` within
    /// `radius`. The seed itself is excluded; the candidate pool is twice
    /// `top_n` before the final cut. `None` when the seed is not indexed.
    pub fn discover_cluster(
        &self,
        seed: &str,
        radius: usize,
        options: &ClusterOptions,
    ) -> Option<Cluster> {
        let center = *self.occurrences_of(seed)?.first()?;
        let seed_key = normalize(seed);

        let nearby = self.find_nearby(
            center.position,
            radius,
            &NearbyOptions {
                min_word_length: options.min_word_length,
                max_results: options.top_n * 2,
            },
        );

        let mut words: Vec<NearbyWord> = nearby
            .into_iter()
            .filter(|candidate| candidate.word != seed_key)
            .collect();
        words.truncate(options.top_n);

        let positions: Vec<usize> = words
            .iter()
            .flat_map(|member| member.occurrences.iter().map(|occ| occ.position))
            .collect();

        let centroid = if positions.is_empty() {
            center.position
        } else {
            let sum: usize = positions.iter().sum();
            (sum as f64 / positions.len() as f64).round() as usize
        };

        Some(Cluster {
            seed: seed.to_string(),
            center,
            centroid,
            centroid_shift: centroid as i64 - center.position as i64,
            words,
            total_nearby_occurrences: positions.len(),
        })
    }

    /// Weighted mean position of the given terms' occurrences within
    /// `radius` of `current_center`, rounding to the nearest character.
    /// Rare terms weigh more: each term contributes at weight
    /// `1 / (1 + ln(total_occurrences + 1))`. Falls back to
    /// `current_center` when nothing is in range.
    pub fn recompute_centroid(
        &self,
        terms: impl IntoIterator<Item = impl AsRef<str>>,
        current_center: usize,
        radius: usize,
    ) -> usize {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut in_range = 0usize;

        for term in terms {
            let occurrences = self.find_word(term.as_ref());
            let weight = 1.0 / (1.0 + ((occurrences.len() + 1) as f64).ln());
            for occ in occurrences {
                if occ.position.abs_diff(current_center) <= radius {
                    weighted_sum += occ.position as f64 * weight;
                    total_weight += weight;
                    in_range += 1;
                }
            }
        }

        if in_range == 0 {
            current_center
        } else {
            (weighted_sum / total_weight).round() as usize
        }
    }
}
