//! Deterministic transport for unit tests.

use crate::transport::{Transport, TransportCompletion, TransportOutcome, TransportTask};

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use url::Url;

/// Replays one canned outcome for every request.
///
/// Clones share the call log, so a test can hand one clone to the client and
/// keep another to inspect what was requested.
#[derive(Debug, Clone)]
pub struct StubTransport {
    outcome: TransportOutcome,
    delay: Option<Duration>,
    drop_completion: bool,
    calls: Arc<Mutex<Vec<Url>>>,
}

impl StubTransport {
    /// Complete synchronously inside `resume` with `outcome`.
    pub fn new(outcome: TransportOutcome) -> Self {
        Self {
            outcome,
            delay: None,
            drop_completion: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A transport that loses every completion without calling it.
    pub fn never_completes() -> Self {
        Self {
            drop_completion: true,
            ..Self::new(TransportOutcome::default())
        }
    }

    /// Complete from a separate thread after `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Transport for StubTransport {
    fn perform_request(&self, url: Url, completion: TransportCompletion) -> Box<dyn TransportTask> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url);
        }

        Box::new(StubTask {
            outcome: self.outcome.clone(),
            delay: self.delay,
            completion: (!self.drop_completion).then_some(completion),
        })
    }
}

struct StubTask {
    outcome: TransportOutcome,
    delay: Option<Duration>,
    completion: Option<TransportCompletion>,
}

impl TransportTask for StubTask {
    fn resume(self: Box<Self>) {
        let StubTask {
            outcome,
            delay,
            completion,
        } = *self;

        let Some(completion) = completion else {
            return;
        };

        match delay {
            None => completion(outcome),
            Some(delay) => {
                thread::spawn(move || {
                    thread::sleep(delay);
                    completion(outcome);
                });
            }
        }
    }
}
