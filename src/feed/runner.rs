//! Background thread pushing snapshots from a source into the state

use super::error::FeedError;
use super::source::{BookSource, FeedEvent};
use crate::state::{BookKey, MarketState};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Counters reported when a feed thread finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Snapshots published to the state
    pub applied: u64,
    /// Messages without a book
    pub idle: u64,
    /// Messages rejected by the adapter
    pub failed: u64,
}

/// Handle to a running feed thread
pub struct FeedHandle {
    key: BookKey,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<FeedStats>,
}

impl FeedHandle {
    /// Book this feed publishes to
    pub fn key(&self) -> &BookKey {
        &self.key
    }

    /// Ask the thread to stop after its current poll
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Whether the thread has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the thread and wait for its counters
    pub fn join(self) -> Result<FeedStats, FeedError> {
        self.stop();
        self.handle.join().map_err(|_| FeedError::Worker {
            message: format!("feed thread for {} panicked", self.key),
        })
    }
}

/// Drives a [`BookSource`] at a fixed cadence
pub struct FeedRunner;

impl FeedRunner {
    /// Spawn a thread polling `source` every `interval` until stopped or the
    /// source closes.
    ///
    /// The book counts as connected in the state while the thread runs. Failed
    /// messages leave the previous snapshot in place.
    pub fn spawn(
        state: Arc<MarketState>,
        mut source: Box<dyn BookSource>,
        interval: Duration,
    ) -> Result<FeedHandle, FeedError> {
        let key = BookKey::new(source.exchange(), source.symbol());
        let stop = Arc::new(AtomicBool::new(false));

        let thread_key = key.clone();
        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name(format!("feed-{}", key))
            .spawn(move || {
                info!("Feed {} started", thread_key);
                state.set_connected(&thread_key, true);
                let mut stats = FeedStats::default();

                while !thread_stop.load(Ordering::Acquire) {
                    match source.poll() {
                        FeedEvent::Snapshot(snapshot) => {
                            state.apply_snapshot(thread_key.clone(), snapshot);
                            stats.applied += 1;
                        }
                        FeedEvent::Idle => stats.idle += 1,
                        FeedEvent::Failed(err) => {
                            state.record_feed_failure(&thread_key, &err);
                            stats.failed += 1;
                        }
                        FeedEvent::Closed => {
                            debug!("Feed {} source closed", thread_key);
                            break;
                        }
                    }
                    thread::sleep(interval);
                }

                state.set_connected(&thread_key, false);
                info!("Feed {} stopped: {:?}", thread_key, stats);
                stats
            })
            .map_err(|err| FeedError::Worker {
                message: err.to_string(),
            })?;

        Ok(FeedHandle { key, stop, handle })
    }
}
