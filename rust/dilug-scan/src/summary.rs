//! Aggregate statistics over scan results.

use std::collections::BTreeMap;

use serde::Serialize;

use dilug_els::skip_seq::SkipKind;

use crate::hit::Hit;

/// Descriptive statistics for a set of hits.
///
/// Spans measure the corpus distance a hit stretches across, see
/// [`Hit::span`]. Span aggregates are absent when there are no hits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub total_hits: usize,
    pub open_text_hits: usize,
    pub equidistant_hits: usize,
    /// Hit count at each skip distance that produced any.
    pub hits_by_skip: BTreeMap<i32, usize>,
    pub unique_skips: usize,
    pub min_span: Option<usize>,
    pub max_span: Option<usize>,
    pub average_span: Option<f64>,
    pub median_span: Option<f64>,
}

impl ScanSummary {
    pub fn from_hits(hits: &[Hit]) -> ScanSummary {
        let total_hits = hits.len();
        let open_text_hits = hits
            .iter()
            .filter(|hit| hit.skip_kind() == SkipKind::OpenText)
            .count();

        let mut hits_by_skip: BTreeMap<i32, usize> = BTreeMap::new();
        for hit in hits {
            *hits_by_skip.entry(hit.skip).or_insert(0) += 1;
        }

        let mut spans: Vec<usize> = hits.iter().map(Hit::span).collect();
        spans.sort_unstable();

        let average_span =
            (!spans.is_empty()).then(|| spans.iter().sum::<usize>() as f64 / spans.len() as f64);
        let median_span = (!spans.is_empty()).then(|| {
            let mid = spans.len() / 2;
            if spans.len() % 2 == 1 {
                spans[mid] as f64
            } else {
                (spans[mid - 1] + spans[mid]) as f64 / 2.0
            }
        });

        ScanSummary {
            total_hits,
            open_text_hits,
            equidistant_hits: total_hits - open_text_hits,
            unique_skips: hits_by_skip.len(),
            hits_by_skip,
            min_span: spans.first().copied(),
            max_span: spans.last().copied(),
            average_span,
            median_span,
        }
    }
}
