//! Shared, lazily loaded index handle.

use std::sync::{Arc, Condvar, Mutex};

use dilug_common::error::Error;
use dilug_common::result::Result;

use crate::read::ElsIndex;

/// Load lifecycle of a [`SharedElsIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
    Failed(String),
}

enum State {
    Unloaded,
    Loading,
    Loaded(Arc<ElsIndex>),
    Failed(String),
}

/// A single lazily loaded index shared across threads.
///
/// The first [`load`](SharedElsIndex::load) runs the loader; concurrent
/// callers block until that load settles and share its outcome. Once loaded,
/// every call returns the same `Arc` without rerunning the loader. After a
/// failure, the callers that waited on the failed attempt get its error and
/// the next fresh call retries.
pub struct SharedElsIndex {
    state: Mutex<State>,
    settled: Condvar,
}

impl SharedElsIndex {
    pub fn new() -> SharedElsIndex {
        SharedElsIndex {
            state: Mutex::new(State::Unloaded),
            settled: Condvar::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        match &*self.state.lock().unwrap() {
            State::Unloaded => LoadState::Unloaded,
            State::Loading => LoadState::Loading,
            State::Loaded(_) => LoadState::Loaded,
            State::Failed(reason) => LoadState::Failed(reason.clone()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(&*self.state.lock().unwrap(), State::Loaded(_))
    }

    /// The loaded index. Fails with `IndexNotLoaded` when no load has
    /// completed.
    pub fn get(&self) -> Result<Arc<ElsIndex>> {
        match &*self.state.lock().unwrap() {
            State::Loaded(index) => Ok(index.clone()),
            _ => Err(Error::index_not_loaded()),
        }
    }

    /// Returns the loaded index, running `loader` first if needed. The
    /// loader runs outside the state lock, so queries on an already loaded
    /// handle never block behind it.
    pub fn load(&self, loader: impl FnOnce() -> Result<ElsIndex>) -> Result<Arc<ElsIndex>> {
        {
            let mut state = self.state.lock().unwrap();
            loop {
                match &*state {
                    State::Loaded(index) => return Ok(index.clone()),
                    State::Loading => {
                        state = self.settled.wait(state).unwrap();
                        // A failure observed here is the outcome of the
                        // load this caller waited on.
                        if let State::Failed(reason) = &*state {
                            return Err(Error::index_load(reason.clone()));
                        }
                    }
                    State::Unloaded | State::Failed(_) => {
                        *state = State::Loading;
                        break;
                    }
                }
            }
        }

        log::info!("els index: loading");
        let outcome = loader();

        let mut state = self.state.lock().unwrap();
        let result = match outcome {
            Ok(index) => {
                let index = Arc::new(index);
                log::info!(
                    "els index: loaded {} words, {} occurrences",
                    index.metadata().total_words,
                    index.metadata().total_occurrences
                );
                *state = State::Loaded(index.clone());
                Ok(index)
            }
            Err(error) => {
                let reason = error.to_string();
                log::error!("els index: load failed: {reason}");
                *state = State::Failed(reason);
                Err(error)
            }
        };
        drop(state);
        self.settled.notify_all();
        result
    }
}

impl Default for SharedElsIndex {
    fn default() -> SharedElsIndex {
        SharedElsIndex::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::test_support::index_from_entries;
    use dilug_common::error::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample() -> ElsIndex {
        index_from_entries(100, (-5, 5), &[("אב", &[(3, 2)])])
    }

    #[test]
    fn test_get_before_load_fails() {
        let shared = SharedElsIndex::new();
        assert_eq!(shared.state(), LoadState::Unloaded);
        assert!(!shared.is_loaded());

        let error = shared.get().unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::IndexNotLoaded));
    }

    #[test]
    fn test_load_runs_the_loader_once() {
        let shared = SharedElsIndex::new();
        let runs = AtomicUsize::new(0);

        let first = shared
            .load(|| {
                runs.fetch_add(1, Ordering::Relaxed);
                Ok(sample())
            })
            .unwrap();
        let second = shared.load(|| unreachable!("already loaded")).unwrap();

        assert_eq!(runs.load(Ordering::Relaxed), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(shared.state(), LoadState::Loaded);
        assert!(shared.get().is_ok());
    }

    #[test]
    fn test_concurrent_loads_share_one_run() {
        let shared = SharedElsIndex::new();
        let runs = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            let mut handles = Vec::new();
            for _ in 0..8 {
                handles.push(scope.spawn(|| {
                    shared.load(|| {
                        runs.fetch_add(1, Ordering::Relaxed);
                        std::thread::sleep(std::time::Duration::from_millis(20));
                        Ok(sample())
                    })
                }));
            }
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });

        assert_eq!(runs.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_failed_load_reports_and_retries() {
        let shared = SharedElsIndex::new();

        let error = shared
            .load(|| Err(Error::index_load("artifact is corrupt")))
            .unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::IndexLoad { .. }));
        assert_eq!(
            shared.state(),
            LoadState::Failed("failed to load occurrence index: artifact is corrupt".to_string())
        );
        assert!(shared.get().is_err());

        // The next load attempt starts fresh.
        let index = shared.load(|| Ok(sample())).unwrap();
        assert_eq!(index.word_count(), 1);
        assert_eq!(shared.state(), LoadState::Loaded);
    }
}
