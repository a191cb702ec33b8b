//! The immutable, normalized character sequence that scans and index builds
//! operate on.

use crate::letters;

/// Applies the corpus normalization rules to arbitrary text: whitespace and
/// Hebrew marks are dropped, final letter forms are folded to their base
/// forms, everything else passes through unchanged.
///
/// Search terms and dictionary words go through the same function so they
/// compare character-for-character against corpus content.
pub fn normalize(text: &str) -> String {
    text.chars().filter_map(normalize_char).collect()
}

fn normalize_char(ch: char) -> Option<char> {
    if ch.is_whitespace() || letters::is_hebrew_mark(ch) {
        None
    } else {
        Some(letters::collapse_final(ch))
    }
}

/// An immutable, zero-indexed sequence of normalized characters.
///
/// The corpus is built once from raw text and never mutated afterwards;
/// scans and queries share it by reference. Position values reported in hits
/// and stored in the occurrence index are offsets into this sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    chars: Vec<char>,
}

impl Corpus {
    /// Builds a corpus from raw text, applying [`normalize`].
    pub fn from_text(text: &str) -> Corpus {
        Corpus {
            chars: text.chars().filter_map(normalize_char).collect(),
        }
    }

    /// Number of characters in the corpus.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The normalized character sequence.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }
}
