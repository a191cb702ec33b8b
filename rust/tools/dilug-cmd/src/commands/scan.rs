//! Scan command implementation

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufRead, BufReader},
};

use dilug_els::matchers::MatcherKind;
use dilug_scan::{
    CancellationToken, Hit, JsonlSink, ScanConfig, ScanEvent, ScanOutcome, ScanSummary, Scanner,
    SearchTerm,
};

use crate::commands::{load_corpus, print_json};

/// Run the scan command
pub fn run(
    corpus_path: String,
    words: Vec<String>,
    terms_file: Option<String>,
    skip_range: (i32, i32),
    matcher: String,
    no_pruning: bool,
    output: String,
) -> Result<()> {
    let terms = collect_terms(words, terms_file.as_deref())?;
    let corpus = load_corpus(&corpus_path)?;

    let config = ScanConfig {
        min_skip: skip_range.0,
        max_skip: skip_range.1,
        matcher: MatcherKind::try_from(matcher.as_str())?,
        first_char_pruning: !no_pruning,
        ..ScanConfig::default()
    };

    println!(
        "Scanning {} terms over skips {}..={}",
        terms.len(),
        config.min_skip,
        config.max_skip
    );

    let scanner = Scanner::new(&corpus, config)?;
    let mut sink = JsonlSink::create(&output)
        .with_context(|| format!("Failed to create hits file: {output}"))?;
    let outcome = scanner.run(&terms, &mut sink, &CancellationToken::new(), |event| {
        print_event(&event)
    })?;
    sink.finish()?;

    match outcome {
        ScanOutcome::Completed { total_hits, .. } => {
            println!("Scan complete: {total_hits} hits written to {output}");
        }
        ScanOutcome::Cancelled { flushed_hits } => {
            println!("Scan cancelled: {flushed_hits} flushed hits remain in {output}");
        }
    }

    let hits = read_hits(&output)?;
    println!("Summary:");
    print_json(&ScanSummary::from_hits(&hits))
}

/// Merges `--term` words with the optional JSON terms file.
fn collect_terms(words: Vec<String>, terms_file: Option<&str>) -> Result<Vec<SearchTerm>> {
    let mut terms: Vec<SearchTerm> = words.into_iter().map(SearchTerm::new).collect();
    if let Some(path) = terms_file {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read terms file: {path}"))?;
        let from_file: Vec<SearchTerm> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse terms file: {path}"))?;
        terms.extend(from_file);
    }
    anyhow::ensure!(
        !terms.is_empty(),
        "no search terms given; use --term or --terms-file"
    );
    Ok(terms)
}

fn print_event(event: &ScanEvent) {
    match event {
        ScanEvent::Progress {
            term,
            forms_searched,
            total_forms,
            hits_so_far,
            ..
        } => {
            println!("  {term}: {forms_searched:.2}/{total_forms} forms, {hits_so_far} hits");
        }
        ScanEvent::TermDone {
            term,
            hit_count,
            best,
            ..
        } => match best {
            Some(best) => println!(
                "  {term}: {hit_count} hits, best at position {} with skip {}",
                best.position, best.skip
            ),
            None => println!("  {term}: no hits"),
        },
        ScanEvent::Complete { total_terms } => println!("Searched {total_terms} terms"),
        ScanEvent::Cancelled | ScanEvent::Error { .. } => {}
    }
}

/// Reads the hits back from the JSON Lines file for the closing summary.
fn read_hits(path: &str) -> Result<Vec<Hit>> {
    let file =
        fs::File::open(path).with_context(|| format!("Failed to reopen hits file: {path}"))?;
    let mut hits = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        hits.push(serde_json::from_str(&line)?);
    }
    Ok(hits)
}
