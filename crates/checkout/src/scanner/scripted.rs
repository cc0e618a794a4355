//! Scripted scanner for tests and demos.

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use super::{ScanOutcome, ScanSource, Scanner};

#[derive(Debug, Default)]
struct ScriptedState {
    outcomes: VecDeque<ScanOutcome>,
    scans: usize,
}

/// A scanner that replays queued outcomes in order.
///
/// With nothing queued, a scan never completes, which models a shopper who
/// has opened the scanner but not yet presented a card.
#[derive(Debug, Clone)]
pub struct ScriptedScanner {
    source: ScanSource,
    state: Arc<RwLock<ScriptedState>>,
}

impl ScriptedScanner {
    /// Creates a scripted scanner with an empty queue.
    pub fn new(source: ScanSource) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(ScriptedState::default())),
        }
    }

    /// Queues an outcome, returning the scanner for chaining.
    pub fn with_outcome(self, outcome: ScanOutcome) -> Self {
        self.push(outcome);
        self
    }

    /// Queues an outcome.
    pub fn push(&self, outcome: ScanOutcome) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .outcomes
            .push_back(outcome);
    }

    /// Returns the number of scans requested so far.
    pub fn scan_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .scans
    }

    /// Returns the number of outcomes still queued.
    pub fn pending(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .outcomes
            .len()
    }
}

#[async_trait]
impl Scanner for ScriptedScanner {
    fn source(&self) -> ScanSource {
        self.source
    }

    async fn scan(&self) -> ScanOutcome {
        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.scans += 1;
            state.outcomes.pop_front()
        };

        match next {
            Some(outcome) => outcome,
            None => std::future::pending().await,
        }
    }
}
