//! # Dilug: Equidistant Letter Sequence Search and Index Engine
//!
//! Dilug searches a normalized text corpus for equidistant letter sequences
//! (ELS): terms whose letters appear at a fixed signed skip. A skip of `+d`
//! reads every d-th letter forward, `-d` reads backward, and `|skip| = 1` is
//! the open text itself. The engine scans interactively with streaming
//! results, or precomputes an occurrence index that turns whole-dictionary
//! searches into lookups.
//!
//! ## Module Organization
//!
//! This crate is a convenience entry point that re-exports the workspace
//! crates under one namespace:
//!
//! * [`text`] - corpus normalization and the letter tables
//! * [`els`] - pattern matchers, skip-sequence extraction and per-skip search
//! * [`scan`] - the streaming scan orchestrator, its worker thread, sinks and
//!   events
//! * [`els_index`] - occurrence index construction, persistence and the
//!   proximity / cluster / embedding / significance queries
//! * [`common`] - the shared error type and result alias
//!
//! ## Getting Started
//!
//! Scanning a corpus for one term over skips -100..=100:
//!
//! ```
//! use dilug::scan::{CancellationToken, MemorySink, ScanConfig, Scanner, SearchTerm};
//! use dilug::text::Corpus;
//!
//! # fn main() -> dilug::common::result::Result<()> {
//! let corpus = Corpus::from_text("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
//! let scanner = Scanner::new(&corpus, ScanConfig::default())?;
//!
//! let mut sink = MemorySink::new();
//! let outcome = scanner.run(
//!     &[SearchTerm::new("AFK")],
//!     &mut sink,
//!     &CancellationToken::new(),
//!     |_event| {},
//! )?;
//!
//! assert!(!outcome.is_cancelled());
//! assert_eq!(sink.hits()[0].position, 0);
//! assert_eq!(sink.hits()[0].skip, 5);
//! # Ok(())
//! # }
//! ```

pub use dilug_common as common;
pub use dilug_els as els;
pub use dilug_els_index as els_index;
pub use dilug_scan as scan;
pub use dilug_text as text;
