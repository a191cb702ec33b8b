//! Hit sinks receiving flushed scan batches.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use dilug_common::error::Error;
use dilug_common::result::Result;

use crate::hit::Hit;

/// Destination for scan hits, written in batches.
///
/// The scanner calls [`reset`](Self::reset) once when a scan starts, then
/// [`flush_batch`](Self::flush_batch) per full buffer and once more for the
/// remainder of each term. A batch that was flushed stays valid even when
/// the scan is later cancelled.
pub trait HitSink {
    /// Discards results of any previous scan.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Persists one batch of hits.
    fn flush_batch(&mut self, hits: &[Hit]) -> Result<()>;
}

impl<S: HitSink> HitSink for Arc<Mutex<S>> {
    fn reset(&mut self) -> Result<()> {
        self.lock().unwrap().reset()
    }

    fn flush_batch(&mut self, hits: &[Hit]) -> Result<()> {
        self.lock().unwrap().flush_batch(hits)
    }
}

/// Collects hits in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    hits: Vec<Hit>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn take_hits(&mut self) -> Vec<Hit> {
        std::mem::take(&mut self.hits)
    }

    pub fn into_hits(self) -> Vec<Hit> {
        self.hits
    }
}

impl HitSink for MemorySink {
    fn reset(&mut self) -> Result<()> {
        self.hits.clear();
        Ok(())
    }

    fn flush_batch(&mut self, hits: &[Hit]) -> Result<()> {
        self.hits.extend_from_slice(hits);
        Ok(())
    }
}

/// Streams hits to a file as JSON Lines, one hit per line.
///
/// Each flushed batch is written through to the file, so results survive up
/// to the last completed flush even if the process stops mid-scan.
#[derive(Debug)]
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn create(path: impl AsRef<Path>) -> Result<JsonlSink> {
        let file = File::create(path.as_ref())
            .map_err(|e| Error::sink_io("creating hits file", e))?;
        Ok(JsonlSink {
            writer: BufWriter::new(file),
        })
    }

    /// Flushes buffered output; call when the scan is finished.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::sink_io("flushing hits file", e))
    }
}

impl HitSink for JsonlSink {
    fn reset(&mut self) -> Result<()> {
        // Drain the buffer first so no stale bytes land past the truncation.
        self.writer
            .flush()
            .and_then(|_| {
                let file = self.writer.get_mut();
                file.set_len(0)?;
                file.seek(SeekFrom::Start(0)).map(|_| ())
            })
            .map_err(|e| Error::sink_io("truncating hits file", e))
    }

    fn flush_batch(&mut self, hits: &[Hit]) -> Result<()> {
        for hit in hits {
            serde_json::to_writer(&mut self.writer, hit)
                .map_err(|e| Error::sink_io("writing hit", e.into()))?;
            self.writer
                .write_all(b"\n")
                .map_err(|e| Error::sink_io("writing hit", e))?;
        }
        self.writer
            .flush()
            .map_err(|e| Error::sink_io("flushing hits batch", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(term: &str, position: usize, skip: i32) -> Hit {
        Hit {
            term: term.to_string(),
            form: term.to_string(),
            position,
            skip,
        }
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.flush_batch(&[hit("א", 1, 2), hit("א", 5, -2)]).unwrap();
        sink.flush_batch(&[hit("ב", 9, 3)]).unwrap();
        assert_eq!(sink.hits().len(), 3);

        sink.reset().unwrap();
        assert!(sink.hits().is_empty());
    }

    #[test]
    fn test_shared_sink() {
        let sink = Arc::new(Mutex::new(MemorySink::new()));
        let mut writer = Arc::clone(&sink);
        writer.flush_batch(&[hit("א", 0, 1)]).unwrap();
        assert_eq!(sink.lock().unwrap().hits().len(), 1);
    }

    #[test]
    fn test_jsonl_sink_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hits.jsonl");

        let mut sink = JsonlSink::create(&path).unwrap();
        sink.flush_batch(&[hit("תורה", 17, -4), hit("תורה", 90, 12)])
            .unwrap();
        sink.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let hits: Vec<Hit> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(hits, vec![hit("תורה", 17, -4), hit("תורה", 90, 12)]);
    }

    #[test]
    fn test_jsonl_sink_reset_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hits.jsonl");

        let mut sink = JsonlSink::create(&path).unwrap();
        sink.flush_batch(&[hit("א", 0, 1)]).unwrap();
        sink.reset().unwrap();
        sink.flush_batch(&[hit("ב", 2, 5)]).unwrap();
        sink.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
        let only: Hit = serde_json::from_str(written.lines().next().unwrap()).unwrap();
        assert_eq!(only.term, "ב");
    }
}
