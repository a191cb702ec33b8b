//! Stats command implementation

use anyhow::Result;
use serde::Serialize;

use dilug_els_index::{IndexMetadata, IndexStats};

use crate::commands::{load_index, print_json};

#[derive(Serialize)]
struct StatsReport<'a> {
    metadata: &'a IndexMetadata,
    stats: IndexStats,
}

/// Run the stats command
pub fn run(index_path: String) -> Result<()> {
    let index = load_index(&index_path)?;
    print_json(&StatsReport {
        metadata: index.metadata(),
        stats: IndexStats::from_index(&index),
    })
}
