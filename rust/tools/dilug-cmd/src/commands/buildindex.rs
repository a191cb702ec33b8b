//! Build-index command implementation

use anyhow::{Context, Result};
use std::fs;

use dilug_els_index::{IndexBuilderConfig, IndexStats, build_index};

use crate::commands::{load_corpus, print_json};

/// Run the build-index command
pub fn run(
    corpus_path: String,
    dictionary_path: String,
    skip_range: i32,
    max_word_length: usize,
    min_word_length: usize,
    output: String,
) -> Result<()> {
    anyhow::ensure!(skip_range >= 1, "--skip-range must be at least 1");

    let corpus = load_corpus(&corpus_path)?;
    let dictionary = load_dictionary(&dictionary_path)?;
    println!("Loaded dictionary: {} entries", dictionary.len());

    let config = IndexBuilderConfig {
        min_skip: -skip_range,
        max_skip: skip_range,
        max_word_length,
        min_word_length,
    };
    let index = build_index(&corpus, &dictionary, &config)?;

    index
        .save_to_file(&output)
        .with_context(|| format!("Failed to save index: {output}"))?;
    let file_size = fs::metadata(&output)?.len();
    println!(
        "Saved index to {output}: {} words, {} occurrences, {:.2} MB",
        index.metadata().total_words,
        index.metadata().total_occurrences,
        file_size as f64 / (1024.0 * 1024.0)
    );

    println!("Statistics:");
    print_json(&IndexStats::from_index(&index))
}

/// Reads a dictionary file: one word per line, blank lines and `#` comment
/// lines skipped.
fn load_dictionary(path: &str) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {path}"))?;
    let words: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    anyhow::ensure!(!words.is_empty(), "dictionary '{path}' contains no words");
    Ok(words)
}
