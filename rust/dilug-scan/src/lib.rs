//! Streaming scan pipeline for equidistant letter sequences.
//!
//! A [`Scanner`](orchestrator::Scanner) walks every search term, spelling
//! form and skip distance of a configured range over a normalized corpus,
//! streaming matched [`Hit`](hit::Hit) batches into a [`HitSink`](sink::HitSink)
//! so that memory stays bounded regardless of result volume. Progress and
//! per-term completion are reported through [`ScanEvent`](events::ScanEvent)
//! callbacks, and a cooperative [`CancellationToken`](cancel::CancellationToken)
//! stops the scan between units of work. [`ScanWorker`](worker::ScanWorker)
//! runs the same pipeline on a dedicated thread behind a small message
//! protocol.

pub mod cancel;
pub mod config;
pub mod events;
pub mod hit;
pub mod orchestrator;
pub mod sink;
pub mod summary;
pub mod term;
pub mod worker;

pub use cancel::CancellationToken;
pub use config::ScanConfig;
pub use events::{BestHit, ScanEvent, ScanOutcome};
pub use hit::Hit;
pub use orchestrator::Scanner;
pub use sink::{HitSink, JsonlSink, MemorySink};
pub use summary::ScanSummary;
pub use term::SearchTerm;
pub use worker::ScanWorker;
