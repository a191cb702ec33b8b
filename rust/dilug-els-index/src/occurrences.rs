//! Occurrence records and artifact metadata.

use serde::{Deserialize, Serialize};

/// Version string written into new index artifacts.
pub const INDEX_FORMAT_VERSION: &str = "1.0";

/// One indexed occurrence: corpus position of the first letter and the
/// signed skip it was found at.
///
/// Serialized as a `[position, skip]` pair to keep artifacts compact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(usize, i32)", into = "(usize, i32)")]
pub struct Occurrence {
    pub position: usize,
    pub skip: i32,
}

impl From<(usize, i32)> for Occurrence {
    fn from((position, skip): (usize, i32)) -> Occurrence {
        Occurrence { position, skip }
    }
}

impl From<Occurrence> for (usize, i32) {
    fn from(occurrence: Occurrence) -> (usize, i32) {
        (occurrence.position, occurrence.skip)
    }
}

/// Descriptive metadata embedded in every index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMetadata {
    pub version: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
    /// Length of the normalized corpus in letters.
    pub corpus_length: usize,
    /// Hex digest of the normalized corpus, for provenance checks.
    pub corpus_hash: String,
    /// Inclusive skip range the index covers.
    pub skip_range: (i32, i32),
    /// Unique dictionary words offered to the builder.
    pub dictionary_size: usize,
    pub max_word_length: usize,
    /// Words with at least one occurrence.
    pub total_words: usize,
    pub total_occurrences: usize,
}
