//! Precomputed occurrence index for equidistant letter sequences.
//!
//! Scanning a corpus for every dictionary word at every skip is expensive;
//! doing it once and saving the result turns those searches into lookups.
//! The write side ([`build_index`]) builds the index from a corpus and a
//! dictionary by walking a trie along every `(start, skip)` ray; the read
//! side ([`ElsIndex`]) loads the JSON artifact and answers word, proximity,
//! cluster, embedding and significance queries over it. [`SharedElsIndex`]
//! adds the load-once state machine used when several consumers share one
//! index.

mod occurrences;
mod read;
mod stats;
mod write;

pub use occurrences::{INDEX_FORMAT_VERSION, IndexMetadata, Occurrence};
pub use read::{
    Cluster, ClusterOptions, DEFAULT_CLUSTER_RADIUS, DEFAULT_RECENTER_RADIUS,
    EMBEDDING_DIMENSIONS, ElsIndex, LoadState, NearbyOccurrence, NearbyOptions, NearbyWord,
    PairProximity, ProximityMatrix, SIGNIFICANCE_THRESHOLD, SharedElsIndex, SignificanceScore,
    SimilarWord,
};
pub use stats::IndexStats;
pub use write::{IndexBuilderConfig, build_index, corpus_digest};
