//! Command implementations for dilug-cmd

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use dilug_els_index::ElsIndex;
use dilug_text::Corpus;

pub mod buildindex;
pub mod query;
pub mod scan;
pub mod stats;

/// Reads a corpus text file and normalizes it into searchable form.
pub fn load_corpus(path: &str) -> Result<Corpus> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read corpus file: {path}"))?;
    let corpus = Corpus::from_text(&text);
    anyhow::ensure!(
        !corpus.is_empty(),
        "corpus '{path}' is empty after normalization"
    );
    println!("Loaded corpus: {} characters", corpus.len());
    Ok(corpus)
}

/// Loads an occurrence index artifact from disk.
pub fn load_index(path: &str) -> Result<ElsIndex> {
    let index =
        ElsIndex::load_from_file(path).with_context(|| format!("Failed to load index: {path}"))?;
    println!(
        "Loaded index: {} words, {} occurrences",
        index.metadata().total_words,
        index.metadata().total_occurrences
    );
    Ok(index)
}

/// Pretty-prints a serializable report to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
