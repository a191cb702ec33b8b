use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dilug_scan::worker::ScanRequest;
use dilug_scan::{BestHit, MemorySink, ScanConfig, ScanEvent, ScanWorker, SearchTerm};
use dilug_text::Corpus;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn collect_until_terminal(events: &mpsc::Receiver<ScanEvent>) -> Vec<ScanEvent> {
    let mut seen = Vec::new();
    while let Ok(event) = events.recv_timeout(Duration::from_secs(30)) {
        let terminal = matches!(
            event,
            ScanEvent::Complete { .. } | ScanEvent::Cancelled | ScanEvent::Error { .. }
        );
        seen.push(event);
        if terminal {
            return seen;
        }
    }
    panic!("no terminal event, got: {seen:?}");
}

fn request(term: &str, min_skip: i32, max_skip: i32) -> ScanRequest {
    ScanRequest {
        corpus: Arc::new(Corpus::from_text(ALPHABET)),
        terms: vec![SearchTerm::new(term)],
        config: ScanConfig::with_skip_range(min_skip, max_skip),
    }
}

#[test]
fn test_worker_streams_hits_and_events() {
    let sink = Arc::new(Mutex::new(MemorySink::new()));
    let (events_tx, events_rx) = mpsc::channel();
    let worker = ScanWorker::spawn(Arc::clone(&sink), events_tx);

    worker.scan(request("AFK", -5, 5)).unwrap();
    let events = collect_until_terminal(&events_rx);

    assert!(matches!(
        events.last(),
        Some(ScanEvent::Complete { total_terms: 1 })
    ));
    assert!(events.iter().any(|event| matches!(
        event,
        ScanEvent::TermDone {
            hit_count: 1,
            best: Some(BestHit {
                skip: 5,
                position: 0
            }),
            ..
        }
    )));

    let hits = sink.lock().unwrap().hits().to_vec();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].term, "AFK");
    assert_eq!(hits[0].position, 0);
    assert_eq!(hits[0].skip, 5);
}

#[test]
fn test_next_scan_starts_clean() {
    let sink = Arc::new(Mutex::new(MemorySink::new()));
    let (events_tx, events_rx) = mpsc::channel();
    let worker = ScanWorker::spawn(Arc::clone(&sink), events_tx);

    // A cancellation request while idle must not poison the next scan.
    worker.cancel();
    worker.scan(request("AFK", -5, 5)).unwrap();
    let events = collect_until_terminal(&events_rx);
    assert!(matches!(events.last(), Some(ScanEvent::Complete { .. })));

    // The sink is reset per scan, so only the second scan's hits remain.
    worker.scan(request("BGL", -5, 5)).unwrap();
    let events = collect_until_terminal(&events_rx);
    assert!(matches!(events.last(), Some(ScanEvent::Complete { .. })));

    let hits = sink.lock().unwrap().hits().to_vec();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].term, "BGL");
    assert_eq!(hits[0].position, 1);
}

#[test]
fn test_scan_failure_reports_error_event() {
    let sink = Arc::new(Mutex::new(MemorySink::new()));
    let (events_tx, events_rx) = mpsc::channel();
    let worker = ScanWorker::spawn(Arc::clone(&sink), events_tx);

    worker.scan(request("AFK", 5, -5)).unwrap();
    let events = collect_until_terminal(&events_rx);

    match events.last() {
        Some(ScanEvent::Error { message }) => {
            assert!(message.contains("invalid skip range"), "{message}");
        }
        other => panic!("expected error event, got {other:?}"),
    }
}
