//! Scan configuration.

use dilug_common::error::Error;
use dilug_common::result::Result;
use dilug_common::verify_arg;
use dilug_els::matchers::MatcherKind;

/// Number of buffered hits that triggers a flush to the sink.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 500;

/// Number of searched skips between progress reports within one form.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Default skip range searched by interactive scans.
pub const DEFAULT_SKIP_RANGE: (i32, i32) = (-100, 100);

/// Parameters of a scan over one corpus.
///
/// The skip range is inclusive on both ends; skip `0` inside the range is
/// silently skipped, never searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Lowest skip distance searched, inclusive.
    pub min_skip: i32,
    /// Highest skip distance searched, inclusive.
    pub max_skip: i32,
    /// Buffered hit count at which a batch is flushed to the sink.
    pub flush_threshold: usize,
    /// Searched skips between progress reports within a form.
    pub progress_interval: usize,
    /// When set, candidate starts are pruned to the positions of the
    /// pattern's first character and extended directly. When cleared, the
    /// scan searches the skip-view sequences with the configured matcher.
    /// Both strategies produce identical hits.
    pub first_char_pruning: bool,
    /// Matcher used by the skip-view strategy.
    pub matcher: MatcherKind,
}

impl Default for ScanConfig {
    fn default() -> ScanConfig {
        ScanConfig {
            min_skip: DEFAULT_SKIP_RANGE.0,
            max_skip: DEFAULT_SKIP_RANGE.1,
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            first_char_pruning: true,
            matcher: MatcherKind::default(),
        }
    }
}

impl ScanConfig {
    /// Convenience constructor for the common case of overriding only the
    /// skip range.
    pub fn with_skip_range(min_skip: i32, max_skip: i32) -> ScanConfig {
        ScanConfig {
            min_skip,
            max_skip,
            ..ScanConfig::default()
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
        verify_arg!(flush_threshold, self.flush_threshold >= 1);
        verify_arg!(progress_interval, self.progress_interval >= 1);
        Ok(())
    }

    /// Number of searched (non-zero) skips in the range, the denominator
    /// that expresses skip progress within one form as a fraction.
    pub fn skip_span(&self) -> f64 {
        let mut count = self.max_skip as i64 - self.min_skip as i64 + 1;
        if self.min_skip <= 0 && self.max_skip >= 0 {
            count -= 1;
        }
        count.max(1) as f64
    }
}
