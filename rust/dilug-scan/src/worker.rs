//! Dedicated scan thread.
//!
//! Mirrors the two-message protocol of an interactive host: scan requests
//! queue on a channel and run one at a time, while cancellation flips a
//! shared flag that the running scan observes at its next check, without
//! waiting for the queue.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread::JoinHandle;

use dilug_common::error::Error;
use dilug_common::result::Result;
use dilug_text::Corpus;

use crate::cancel::CancellationToken;
use crate::config::ScanConfig;
use crate::events::ScanEvent;
use crate::orchestrator::Scanner;
use crate::sink::HitSink;
use crate::term::SearchTerm;

/// Everything one scan needs.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub corpus: Arc<Corpus>,
    pub terms: Vec<SearchTerm>,
    pub config: ScanConfig,
}

enum Command {
    Scan(ScanRequest),
    Shutdown,
}

/// Owns the scan thread and its cancellation flag.
///
/// Events of all scans arrive on the sender supplied to
/// [`spawn`](Self::spawn); a scan that fails reports
/// [`ScanEvent::Error`] instead of propagating. Dropping the worker closes
/// the queue and waits for queued scans to finish; call
/// [`cancel`](Self::cancel) first for a prompt stop.
pub struct ScanWorker {
    commands: mpsc::Sender<Command>,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ScanWorker {
    /// Starts the worker thread. The sink is owned by the thread and reset
    /// at the start of every scan; share it through `Arc<Mutex<_>>` to read
    /// results from outside.
    pub fn spawn<S>(mut sink: S, events: mpsc::Sender<ScanEvent>) -> ScanWorker
    where
        S: HitSink + Send + 'static,
    {
        let token = CancellationToken::new();
        let scan_token = token.clone();
        let (commands, receiver) = mpsc::channel();
        let handle =
            std::thread::spawn(move || worker_loop(receiver, &mut sink, &scan_token, &events));
        ScanWorker {
            commands,
            token,
            handle: Some(handle),
        }
    }

    /// Queues a scan request.
    pub fn scan(&self, request: ScanRequest) -> Result<()> {
        self.commands
            .send(Command::Scan(request))
            .map_err(|_| Error::worker_stopped())
    }

    /// Requests cancellation of the scan in progress. A scan queued later
    /// starts with a fresh flag; cancelling while idle has no effect.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for ScanWorker {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop<S: HitSink>(
    commands: mpsc::Receiver<Command>,
    sink: &mut S,
    token: &CancellationToken,
    events: &mpsc::Sender<ScanEvent>,
) {
    while let Ok(command) = commands.recv() {
        match command {
            Command::Scan(request) => {
                token.reset();
                let ScanRequest {
                    corpus,
                    terms,
                    config,
                } = request;
                log::debug!(
                    "scan picked up: {} terms, skips [{}, {}]",
                    terms.len(),
                    config.min_skip,
                    config.max_skip
                );
                let outcome = Scanner::new(&corpus, config).and_then(|scanner| {
                    scanner.run(&terms, sink, token, |event| {
                        let _ = events.send(event);
                    })
                });
                if let Err(error) = outcome {
                    let _ = events.send(ScanEvent::Error {
                        message: error.to_string(),
                    });
                }
            }
            Command::Shutdown => break,
        }
    }
    log::debug!("scan worker stopped");
}
