//! Loading and querying index artifacts.

mod embedding;
mod proximity;
mod shared;
mod significance;

pub use embedding::{EMBEDDING_DIMENSIONS, SimilarWord};
pub use proximity::{
    Cluster, ClusterOptions, DEFAULT_CLUSTER_RADIUS, DEFAULT_RECENTER_RADIUS, NearbyOccurrence,
    NearbyOptions, NearbyWord, PairProximity, ProximityMatrix,
};
pub use shared::{LoadState, SharedElsIndex};
pub use significance::{SIGNIFICANCE_THRESHOLD, SignificanceScore};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use dilug_common::error::Error;
use dilug_common::result::Result;
use dilug_text::normalize;

use crate::occurrences::{INDEX_FORMAT_VERSION, IndexMetadata, Occurrence};

/// An in-memory occurrence index.
///
/// Maps every indexed word to its occurrences, sorted by position then
/// skip. Lookup keys are normalized the same way corpus text is, so a
/// query spelled with final letters or points finds the indexed word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElsIndex {
    metadata: IndexMetadata,
    index: AHashMap<String, Vec<Occurrence>>,
}

impl ElsIndex {
    pub(crate) fn new(
        metadata: IndexMetadata,
        index: AHashMap<String, Vec<Occurrence>>,
    ) -> ElsIndex {
        ElsIndex { metadata, index }
    }

    pub fn metadata(&self) -> &IndexMetadata {
        &self.metadata
    }

    /// All occurrences of `word`, sorted by position then skip. Empty when
    /// the word is not indexed.
    pub fn find_word(&self, word: &str) -> &[Occurrence] {
        self.occurrences_of(word).unwrap_or(&[])
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.occurrences_of(word).is_some()
    }

    pub fn occurrence_count(&self, word: &str) -> usize {
        self.find_word(word).len()
    }

    /// Indexed words, in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn occurrences_of(&self, word: &str) -> Option<&[Occurrence]> {
        self.index.get(&normalize(word)).map(Vec::as_slice)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.index
            .iter()
            .map(|(word, occurrences)| (word.as_str(), occurrences.as_slice()))
    }

    /// Parses an index artifact.
    pub fn read_from(reader: impl Read) -> Result<ElsIndex> {
        let index: ElsIndex = serde_json::from_reader(reader)
            .map_err(|e| Error::invalid_format("els index", e.to_string()))?;
        if index.metadata.version != INDEX_FORMAT_VERSION {
            log::warn!(
                "index format version {} differs from current {}",
                index.metadata.version,
                INDEX_FORMAT_VERSION
            );
        }
        Ok(index)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<ElsIndex> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        ElsIndex::read_from(BufReader::new(file))
    }

    /// Writes the artifact as JSON.
    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        serde_json::to_writer(writer, self)
            .map_err(|e| Error::invalid_format("els index", e.to_string()))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer
            .flush()
            .map_err(|e| Error::io(path.display().to_string(), e))
    }
}
