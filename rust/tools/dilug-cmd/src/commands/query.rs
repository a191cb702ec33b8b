//! Query command implementation

use anyhow::Result;
use serde::Serialize;

use dilug_els_index::{ClusterOptions, NearbyOptions, Occurrence};

use crate::QueryCommands;
use crate::commands::{load_index, print_json};

#[derive(Serialize)]
struct WordReport<'a> {
    word: &'a str,
    total_occurrences: usize,
    occurrences: &'a [Occurrence],
}

#[derive(Serialize)]
struct SignificanceReport<'a> {
    word: &'a str,
    observed: usize,
    expected: f64,
    /// Infinite scores serialize as `null`.
    z_score: f64,
    significant: bool,
}

/// Run the query command
pub fn run(index_path: String, query: QueryCommands) -> Result<()> {
    let index = load_index(&index_path)?;

    match query {
        QueryCommands::Word { word } => {
            let occurrences = index.find_word(&word);
            print_json(&WordReport {
                word: &word,
                total_occurrences: occurrences.len(),
                occurrences,
            })
        }
        QueryCommands::Nearby {
            position,
            distance,
            min_word_length,
            max_results,
        } => {
            let options = NearbyOptions {
                min_word_length,
                max_results,
            };
            print_json(&index.find_nearby(position, distance, &options))
        }
        QueryCommands::NearbyWord {
            word,
            distance,
            min_word_length,
            max_results,
        } => {
            let options = NearbyOptions {
                min_word_length,
                max_results,
            };
            match index.find_nearby_words(&word, distance, &options) {
                Some(nearby) => print_json(&nearby),
                None => not_indexed(&word),
            }
        }
        QueryCommands::Pair { word1, word2 } => match index.pair_proximity(&word1, &word2) {
            Some(proximity) => print_json(&proximity),
            None => {
                println!("No distance: at least one of the words is not indexed.");
                Ok(())
            }
        },
        QueryCommands::Matrix { words } => print_json(&index.proximity_matrix(words)),
        QueryCommands::Cluster {
            seed,
            radius,
            top_n,
            min_word_length,
        } => {
            let options = ClusterOptions {
                top_n,
                min_word_length,
            };
            match index.discover_cluster(&seed, radius, &options) {
                Some(cluster) => print_json(&cluster),
                None => not_indexed(&seed),
            }
        }
        QueryCommands::Similar { word, top_k } => {
            print_json(&index.find_similar_by_embedding(&word, top_k))
        }
        QueryCommands::Significance { word } => {
            let score = index.significance_score(&word);
            print_json(&SignificanceReport {
                word: &word,
                observed: score.observed,
                expected: round2(score.expected),
                z_score: round2(score.z_score),
                significant: score.significant,
            })
        }
    }
}

fn not_indexed(word: &str) -> Result<()> {
    println!("Word '{word}' is not in the index.");
    Ok(())
}

/// Rounds display values to two decimal places. Non-finite values pass
/// through unchanged.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(161.093592), 161.09);
        assert_eq!(round2(-1.2345), -1.23);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_infinite_z_score_serializes_as_null() {
        let report = SignificanceReport {
            word: "צירופ",
            observed: 3,
            expected: 0.0,
            z_score: f64::INFINITY,
            significant: true,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["z_score"], serde_json::Value::Null);
        assert_eq!(json["observed"], 3);
    }
}
