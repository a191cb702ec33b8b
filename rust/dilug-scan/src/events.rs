//! Scan lifecycle events and outcomes.

use serde::{Deserialize, Serialize};

/// The hit at the smallest absolute skip seen for a term, reported with
/// term completion. When several skips tie in magnitude, the one searched
/// first wins, and within a skip the first position found is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHit {
    pub skip: i32,
    pub position: usize,
}

/// Events emitted while a scan runs.
///
/// Progress is reported at a bounded cadence: once every
/// [`progress_interval`](crate::config::ScanConfig::progress_interval)
/// searched skips and once more when a form completes, never per hit.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Progress {
        /// Primary word currently searched.
        term: String,
        term_index: usize,
        /// Completed forms across the whole scan, with the current form's
        /// searched skips contributing a fractional part.
        forms_searched: f64,
        total_forms: usize,
        /// Hits found for the current term so far, including buffered ones.
        hits_so_far: usize,
    },
    TermDone {
        term: String,
        term_index: usize,
        total_terms: usize,
        hit_count: usize,
        /// Absent when the term produced no hits.
        best: Option<BestHit>,
    },
    Complete {
        total_terms: usize,
    },
    Cancelled,
    /// Reported by the worker when a scan aborts with an error.
    Error {
        message: String,
    },
}

/// Final state of a scan run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Every term was searched across the whole skip range.
    Completed {
        total_terms: usize,
        total_hits: usize,
    },
    /// The scan stopped at a cancellation point. Batches flushed before the
    /// stop remain in the sink, buffered hits were discarded.
    Cancelled { flushed_hits: usize },
}

impl ScanOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanOutcome::Cancelled { .. })
    }
}
