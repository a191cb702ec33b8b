use anyhow::Result;
use clap::{Parser, Subcommand};

use dilug_els_index::DEFAULT_CLUSTER_RADIUS;

mod commands;

#[derive(Parser)]
#[command(name = "dilug-cmd")]
#[command(about = "Command-line utility for equidistant letter sequence scans and indexes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a corpus for terms and stream hits to a JSON Lines file
    Scan {
        /// Path to the corpus text file
        #[arg(long)]
        corpus: String,

        /// Term to search (can be specified multiple times)
        #[arg(short, long)]
        term: Vec<String>,

        /// JSON file with search terms, each {"word": ..., "forms": [...]}
        #[arg(long)]
        terms_file: Option<String>,

        /// Lowest skip searched, inclusive
        #[arg(long, default_value_t = -100, allow_negative_numbers = true)]
        min_skip: i32,

        /// Highest skip searched, inclusive
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max_skip: i32,

        /// Sequence matcher: kmp or boyer-moore
        #[arg(long, default_value = "kmp")]
        matcher: String,

        /// Search materialized skip views with the matcher instead of
        /// pruning candidate starts by first-character positions
        #[arg(long)]
        no_pruning: bool,

        /// Output JSON Lines file for hits
        output: String,
    },

    /// Build an occurrence index from a corpus and a dictionary
    BuildIndex {
        /// Path to the corpus text file
        #[arg(long)]
        corpus: String,

        /// Dictionary file, one word per line
        #[arg(long)]
        dictionary: String,

        /// Index skips -N..=N, excluding 0
        #[arg(long, default_value_t = 100, value_name = "N")]
        skip_range: i32,

        /// Longest dictionary word matched, in letters
        #[arg(long, default_value_t = 10)]
        max_word_length: usize,

        /// Shortest occurrence recorded, in letters
        #[arg(long, default_value_t = 2)]
        min_word_length: usize,

        /// Output index artifact path
        output: String,
    },

    /// Query an index artifact
    Query {
        /// Path to the index artifact
        #[arg(long)]
        index: String,

        #[command(subcommand)]
        query: QueryCommands,
    },

    /// Display metadata and statistics for an index artifact
    Stats {
        /// Path to the index artifact
        index: String,
    },
}

#[derive(Subcommand)]
enum QueryCommands {
    /// List every indexed occurrence of a word
    Word { word: String },

    /// Words with occurrences near a corpus position
    Nearby {
        /// Corpus position the search is centered on
        position: usize,

        /// Largest reported distance, in characters
        #[arg(long, default_value_t = 500)]
        distance: usize,

        /// Hide words shorter than this many letters
        #[arg(long, default_value_t = 2)]
        min_word_length: usize,

        /// Cap on the number of reported words
        #[arg(long, default_value_t = 100)]
        max_results: usize,
    },

    /// Words near the first occurrence of an anchor word
    NearbyWord {
        word: String,

        #[arg(long, default_value_t = 500)]
        distance: usize,

        #[arg(long, default_value_t = 2)]
        min_word_length: usize,

        #[arg(long, default_value_t = 100)]
        max_results: usize,
    },

    /// Smallest distance between occurrences of two words
    Pair { word1: String, word2: String },

    /// Pairwise minimum distances for a set of words
    Matrix {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Terms clustered around the first occurrence of a seed word
    Cluster {
        seed: String,

        /// Search radius around the anchor, in characters
        #[arg(long, default_value_t = DEFAULT_CLUSTER_RADIUS)]
        radius: usize,

        /// Number of cluster members reported
        #[arg(long, default_value_t = 20)]
        top_n: usize,

        #[arg(long, default_value_t = 3)]
        min_word_length: usize,
    },

    /// Words whose occurrences follow a similar positional distribution
    Similar {
        word: String,

        #[arg(long, default_value_t = 10)]
        top_k: usize,
    },

    /// Observed versus expected occurrence counts for a word
    Significance { word: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            corpus,
            term,
            terms_file,
            min_skip,
            max_skip,
            matcher,
            no_pruning,
            output,
        } => commands::scan::run(
            corpus,
            term,
            terms_file,
            (min_skip, max_skip),
            matcher,
            no_pruning,
            output,
        ),
        Commands::BuildIndex {
            corpus,
            dictionary,
            skip_range,
            max_word_length,
            min_word_length,
            output,
        } => commands::buildindex::run(
            corpus,
            dictionary,
            skip_range,
            max_word_length,
            min_word_length,
            output,
        ),
        Commands::Query { index, query } => commands::query::run(index, query),
        Commands::Stats { index } => commands::stats::run(index),
    }
}
