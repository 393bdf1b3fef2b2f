//! Latest-request-wins application of trends fetches
//!
//! Changing the top-N issues a new fetch while earlier ones may still be in
//! flight, and responses can come back in any order. Each request carries a
//! generation number; only the response for the most recently issued
//! generation is applied. Older responses are dropped as stale. In-flight
//! requests are not cancelled.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use tracing::debug;

use super::source::TrendsSource;
use crate::error::{Result, TrendError};
use crate::trends::RawTrends;

/// Monotonic generation counter
#[derive(Debug, Default)]
pub struct GenerationGuard {
    latest: u64,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation number (first is 1)
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Most recently issued generation, 0 before the first request
    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Accept a response only if it belongs to the latest generation
    pub fn check(&self, generation: u64) -> Result<()> {
        if generation == self.latest {
            Ok(())
        } else {
            Err(TrendError::StaleResponse {
                generation,
                latest: self.latest,
            })
        }
    }
}

/// A trends response accepted by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub generation: u64,
    pub top_n: usize,
    pub trends: RawTrends,
}

struct Completed {
    generation: u64,
    top_n: usize,
    result: Result<RawTrends>,
}

/// Issues trends fetches on background threads and applies the latest one
pub struct FetchSession<S: TrendsSource> {
    source: Arc<S>,
    guard: GenerationGuard,
    tx: Sender<Completed>,
    rx: Receiver<Completed>,
    current: Option<Fetched>,
    /// Error of the latest generation, if that is how it ended
    failure: Option<TrendError>,
    /// Latest generation whose response arrived, applied or failed
    resolved: u64,
    discarded: usize,
}

impl<S: TrendsSource> FetchSession<S> {
    pub fn new(source: S) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source: Arc::new(source),
            guard: GenerationGuard::new(),
            tx,
            rx,
            current: None,
            failure: None,
            resolved: 0,
            discarded: 0,
        }
    }

    /// Start a fetch for `top_n` and return its generation
    pub fn request(&mut self, top_n: usize) -> u64 {
        let generation = self.guard.issue();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| source.fetch_trends(top_n)))
                .unwrap_or_else(|payload| {
                    Err(TrendError::Other(format!(
                        "trends fetch panicked: {}",
                        panic_message(payload.as_ref())
                    )))
                });
            // receiver gone means the session was dropped
            let _ = tx.send(Completed {
                generation,
                top_n,
                result,
            });
        });

        debug!(generation, top_n, "trends_request");
        generation
    }

    /// Latest generation issued so far
    pub fn latest_generation(&self) -> u64 {
        self.guard.latest()
    }

    /// Responses dropped as stale so far
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Last applied response
    pub fn current(&self) -> Option<&Fetched> {
        self.current.as_ref()
    }

    /// Apply whatever has completed without blocking.
    ///
    /// Returns the latest generation's outcome if it arrived during this
    /// call, `None` otherwise. A failure stays with the session and is
    /// also returned by [`FetchSession::wait_latest`].
    pub fn poll(&mut self) -> Option<std::result::Result<&Fetched, &TrendError>> {
        let mut arrived = false;
        while let Ok(completed) = self.rx.try_recv() {
            arrived |= self.accept(completed);
        }
        if !arrived {
            return None;
        }
        match &self.failure {
            Some(err) => Some(Err(err)),
            None => self.current.as_ref().map(Ok),
        }
    }

    /// Block until the latest generation's response arrives.
    ///
    /// An upstream or data error for the latest request is returned as is;
    /// failures of superseded requests are dropped with their responses.
    pub fn wait_latest(&mut self) -> Result<&Fetched> {
        let latest = self.guard.latest();
        if latest == 0 {
            return Err(TrendError::Other(
                "no trends request has been issued".to_string(),
            ));
        }

        while self.resolved != latest {
            // every fetch thread reports, panics included; the session
            // keeps a sender so the channel never disconnects here
            let completed = self
                .rx
                .recv()
                .map_err(|e| TrendError::Other(format!("trends fetch lost: {}", e)))?;
            self.accept(completed);
        }

        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        match &self.current {
            Some(fetched) if fetched.generation == latest => Ok(fetched),
            _ => Err(TrendError::Other(format!(
                "trends request {} failed",
                latest
            ))),
        }
    }

    /// Record a completed fetch; true when it is the latest generation
    fn accept(&mut self, completed: Completed) -> bool {
        if let Err(stale) = self.guard.check(completed.generation) {
            self.discarded += 1;
            debug!(error = %stale, top_n = completed.top_n, "discard_response");
            return false;
        }

        self.resolved = completed.generation;
        match completed.result {
            Ok(trends) => {
                self.failure = None;
                self.current = Some(Fetched {
                    generation: completed.generation,
                    top_n: completed.top_n,
                    trends,
                });
            }
            Err(err) => self.failure = Some(err),
        }
        true
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}
