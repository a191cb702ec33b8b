//! Index construction from a corpus and a dictionary.

mod trie;

use ahash::{AHashMap, AHashSet};
use chrono::Utc;
use rayon::prelude::*;
use xxhash_rust::xxh3::Xxh3;

use dilug_common::error::Error;
use dilug_common::result::Result;
use dilug_common::verify_arg;
use dilug_text::{Corpus, normalize};

use crate::occurrences::{INDEX_FORMAT_VERSION, IndexMetadata, Occurrence};
use crate::read::ElsIndex;
use trie::{ROOT, Trie};

/// Words shorter than this never enter the dictionary, regardless of the
/// configured minimum.
const DICTIONARY_MIN_LETTERS: usize = 2;

/// Parameters of an index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBuilderConfig {
    /// Lowest skip indexed, inclusive.
    pub min_skip: i32,
    /// Highest skip indexed, inclusive.
    pub max_skip: i32,
    /// Longest dictionary word matched, in letters.
    pub max_word_length: usize,
    /// Shortest word recorded in the index, in letters. Shorter dictionary
    /// words still occupy the trie but their occurrences are not kept.
    pub min_word_length: usize,
}

impl Default for IndexBuilderConfig {
    fn default() -> IndexBuilderConfig {
        IndexBuilderConfig {
            min_skip: -100,
            max_skip: 100,
            max_word_length: 10,
            min_word_length: 2,
        }
    }
}

impl IndexBuilderConfig {
    /// Convenience constructor overriding only the skip range.
    pub fn with_skip_range(min_skip: i32, max_skip: i32) -> IndexBuilderConfig {
        IndexBuilderConfig {
            min_skip,
            max_skip,
            ..IndexBuilderConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_skip > self.max_skip {
            return Err(Error::invalid_skip_range(
                self.min_skip,
                self.max_skip,
                "min_skip exceeds max_skip",
            ));
        }
        if (self.min_skip, self.max_skip) == (0, 0) {
            return Err(Error::invalid_skip_range(
                0,
                0,
                "range contains no non-zero skip",
            ));
        }
        verify_arg!(max_word_length, self.max_word_length >= 1);
        verify_arg!(min_word_length, self.min_word_length >= 1);
        verify_arg!(
            min_word_length,
            self.min_word_length <= self.max_word_length
        );
        Ok(())
    }
}

/// Fingerprint of the corpus content, recorded in index metadata so a query
/// layer can verify an artifact matches the text it serves.
pub fn corpus_digest(corpus: &Corpus) -> String {
    let mut hasher = Xxh3::new();
    let mut buffer = [0u8; 4];
    for &ch in corpus.chars() {
        hasher.update(ch.encode_utf8(&mut buffer).as_bytes());
    }
    format!("{:016x}", hasher.digest())
}

/// Builds an occurrence index: every occurrence of every dictionary word, at
/// every non-zero skip in the configured range.
///
/// Dictionary words are normalized and deduplicated; entries shorter than
/// two letters are dropped. Skips are scanned in parallel and merged, with
/// each word's occurrences sorted by position then skip.
pub fn build_index(
    corpus: &Corpus,
    dictionary: impl IntoIterator<Item = impl AsRef<str>>,
    config: &IndexBuilderConfig,
) -> Result<ElsIndex> {
    config.validate()?;

    let mut seen = AHashSet::new();
    let mut trie = Trie::new();
    for word in dictionary {
        let word = normalize(word.as_ref());
        let letters = word.chars().count();
        if letters < DICTIONARY_MIN_LETTERS {
            continue;
        }
        if !seen.contains(&word) {
            if letters <= config.max_word_length {
                trie.insert(&word);
            }
            seen.insert(word);
        }
    }
    let dictionary_size = seen.len();

    log::info!(
        "building els index: {} dictionary words, skips {}..={}, corpus length {}",
        dictionary_size,
        config.min_skip,
        config.max_skip,
        corpus.len()
    );

    let skips: Vec<i32> = (config.min_skip..=config.max_skip)
        .filter(|&skip| skip != 0)
        .collect();

    let per_skip: Vec<Vec<(u32, Occurrence)>> = skips
        .par_iter()
        .map(|&skip| scan_skip(corpus.chars(), &trie, skip, config))
        .collect();

    let mut by_word_id: AHashMap<u32, Vec<Occurrence>> = AHashMap::new();
    for hits in per_skip {
        for (word_id, occurrence) in hits {
            by_word_id.entry(word_id).or_default().push(occurrence);
        }
    }

    let mut index: AHashMap<String, Vec<Occurrence>> =
        AHashMap::with_capacity(by_word_id.len());
    let mut total_occurrences = 0;
    for (word_id, mut occurrences) in by_word_id {
        occurrences.sort_unstable();
        total_occurrences += occurrences.len();
        index.insert(trie.word(word_id).to_string(), occurrences);
    }

    let metadata = IndexMetadata {
        version: INDEX_FORMAT_VERSION.to_string(),
        created: Utc::now().to_rfc3339(),
        corpus_length: corpus.len(),
        corpus_hash: corpus_digest(corpus),
        skip_range: (config.min_skip, config.max_skip),
        dictionary_size,
        max_word_length: config.max_word_length,
        total_words: index.len(),
        total_occurrences,
    };

    log::info!(
        "els index built: {} words, {} occurrences",
        metadata.total_words,
        metadata.total_occurrences
    );

    Ok(ElsIndex::new(metadata, index))
}

/// All dictionary words starting anywhere in `text` at one skip. Each start
/// position walks the trie along the skip sequence and records every word
/// node passed, up to the configured length cap.
fn scan_skip(
    text: &[char],
    trie: &Trie,
    skip: i32,
    config: &IndexBuilderConfig,
) -> Vec<(u32, Occurrence)> {
    let mut hits = Vec::new();
    let len = text.len() as isize;
    let step = skip as isize;

    for start in 0..text.len() {
        let mut node = ROOT;
        let mut pos = start as isize;
        let mut depth = 0;

        while depth < config.max_word_length && pos >= 0 && pos < len {
            let Some(child) = trie.child(node, text[pos as usize]) else {
                break;
            };
            node = child;
            depth += 1;
            pos += step;

            if depth >= config.min_word_length {
                if let Some(word_id) = trie.word_id(node) {
                    hits.push((
                        word_id,
                        Occurrence {
                            position: start,
                            skip,
                        },
                    ));
                }
            }
        }
    }
    hits
}
