//! Latest books, feed health and simulation history shared across threads

use crate::config::SimulatorConfig;
use crate::feed::{ExchangeId, FeedAdapter, FeedError};
use crate::orderbook::OrderBookSnapshot;
use crate::simulation::{SimulationHistory, SimulationRecord};
use crate::utils::current_time_millis;
use dashmap::DashMap;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Symbol selected when the state is created
pub const DEFAULT_SYMBOL: &str = "BTC-USDT";

/// Identifies one book: an exchange and a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookKey {
    /// Exchange the book lives on
    pub exchange: ExchangeId,
    /// Instrument symbol
    pub symbol: String,
}

impl BookKey {
    /// Create a key
    pub fn new(exchange: ExchangeId, symbol: &str) -> Self {
        Self {
            exchange,
            symbol: symbol.to_string(),
        }
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.exchange, self.symbol)
    }
}

/// Delivery health of one book's feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedHealth {
    /// Time of the last applied snapshot (milliseconds since epoch), `0` if none
    pub last_update: u64,
    /// Parse failures since the last applied snapshot
    pub consecutive_failures: u32,
    /// Message of the most recent failure
    pub last_error: Option<String>,
    /// Feed runners currently delivering this book
    pub live_feeds: u32,
}

/// Application state handed to the feed runner, the scheduler and readers.
///
/// Snapshots are stored as `Arc`s and swapped wholesale, so a reader that
/// cloned one keeps a consistent view of both sides however many updates
/// arrive afterwards.
pub struct MarketState {
    books: DashMap<BookKey, Arc<OrderBookSnapshot>>,
    health: DashMap<BookKey, FeedHealth>,
    live_feeds: AtomicUsize,
    last_update: AtomicU64,
    selection: RwLock<BookKey>,
    history: Mutex<SimulationHistory>,
}

impl MarketState {
    /// Create an empty state keeping `history_capacity` simulations
    pub fn new(history_capacity: usize) -> Self {
        Self {
            books: DashMap::new(),
            health: DashMap::new(),
            live_feeds: AtomicUsize::new(0),
            last_update: AtomicU64::new(current_time_millis()),
            selection: RwLock::new(BookKey::new(ExchangeId::Okx, DEFAULT_SYMBOL)),
            history: Mutex::new(SimulationHistory::new(history_capacity)),
        }
    }

    /// Create an empty state sized from `config`
    pub fn with_config(config: &SimulatorConfig) -> Self {
        Self::new(config.history_capacity)
    }

    /// Publish `snapshot` as the latest book for `key`
    pub fn apply_snapshot(&self, key: BookKey, snapshot: OrderBookSnapshot) -> Arc<OrderBookSnapshot> {
        let now = current_time_millis();
        let snapshot = Arc::new(snapshot);
        trace!(
            "{}: applying snapshot with {} bids / {} asks",
            key,
            snapshot.bids.len(),
            snapshot.asks.len()
        );

        {
            let mut health = self.health.entry(key.clone()).or_default();
            health.last_update = now;
            health.consecutive_failures = 0;
            health.last_error = None;
        }
        self.books.insert(key, Arc::clone(&snapshot));
        self.last_update.store(now, Ordering::Release);
        snapshot
    }

    /// Parse `message` with `adapter` and publish the result.
    ///
    /// On failure the previous snapshot stays in place and the failure is
    /// recorded against the book's health.
    pub fn ingest(
        &self,
        adapter: &dyn FeedAdapter,
        symbol: &str,
        message: &str,
    ) -> Result<Option<Arc<OrderBookSnapshot>>, FeedError> {
        let key = BookKey::new(adapter.exchange(), symbol);
        match adapter.parse(message, symbol) {
            Ok(Some(snapshot)) => Ok(Some(self.apply_snapshot(key, snapshot))),
            Ok(None) => Ok(None),
            Err(err) => {
                self.record_feed_failure(&key, &err);
                Err(err)
            }
        }
    }

    /// Note a failed message for `key` without touching its snapshot
    pub fn record_feed_failure(&self, key: &BookKey, error: &FeedError) {
        warn!("{}: feed message rejected, keeping last snapshot: {}", key, error);
        let mut health = self.health.entry(key.clone()).or_default();
        health.consecutive_failures = health.consecutive_failures.saturating_add(1);
        health.last_error = Some(error.to_string());
    }

    /// Latest snapshot for `key`
    pub fn latest(&self, key: &BookKey) -> Option<Arc<OrderBookSnapshot>> {
        self.books.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Keys of every book seen so far
    pub fn book_keys(&self) -> Vec<BookKey> {
        self.books.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Feed health for `key`
    pub fn health(&self, key: &BookKey) -> Option<FeedHealth> {
        self.health.get(key).map(|entry| entry.value().clone())
    }

    /// Whether `key` has no fresh snapshot: never updated, failing since the
    /// last update, or older than `max_age_ms` at `now`
    pub fn is_stale(&self, key: &BookKey, now: u64, max_age_ms: u64) -> bool {
        match self.health.get(key) {
            Some(health) => {
                health.last_update == 0
                    || health.consecutive_failures > 0
                    || now.saturating_sub(health.last_update) > max_age_ms
            }
            None => true,
        }
    }

    /// Currently selected book
    pub fn selected(&self) -> BookKey {
        self.selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Select the book to display and simulate against
    pub fn select(&self, exchange: ExchangeId, symbol: &str) {
        let key = BookKey::new(exchange, symbol);
        debug!("Selecting book {}", key);
        *self.selection.write().unwrap_or_else(PoisonError::into_inner) = key;
    }

    /// Latest snapshot of the selected book
    pub fn selected_book(&self) -> Option<Arc<OrderBookSnapshot>> {
        self.latest(&self.selected())
    }

    /// Register a feed for `key` starting (`true`) or stopping (`false`).
    ///
    /// Connections are counted per book, so one feed stopping leaves the
    /// others connected. A stop without a matching start is ignored.
    pub fn set_connected(&self, key: &BookKey, connected: bool) {
        let mut health = self.health.entry(key.clone()).or_default();
        if connected {
            health.live_feeds = health.live_feeds.saturating_add(1);
            self.live_feeds.fetch_add(1, Ordering::AcqRel);
        } else if health.live_feeds > 0 {
            health.live_feeds -= 1;
            self.live_feeds.fetch_sub(1, Ordering::AcqRel);
        }
        debug!("{}: {} live feed(s)", key, health.live_feeds);
    }

    /// Whether any feed is currently delivering
    pub fn is_connected(&self) -> bool {
        self.live_feed_count() > 0
    }

    /// Whether a feed is currently delivering `key`
    pub fn is_feed_connected(&self, key: &BookKey) -> bool {
        self.health
            .get(key)
            .is_some_and(|health| health.live_feeds > 0)
    }

    /// Number of running feeds across all books
    pub fn live_feed_count(&self) -> usize {
        self.live_feeds.load(Ordering::Acquire)
    }

    /// Time of the last applied snapshot across all books
    pub fn last_update(&self) -> u64 {
        self.last_update.load(Ordering::Acquire)
    }

    /// Archive a simulation
    pub fn record_simulation(&self, record: SimulationRecord) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Remove an archived simulation
    pub fn remove_simulation(&self, id: Uuid) -> bool {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Drop all archived simulations
    pub fn clear_simulations(&self) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Copy of the archived simulations, newest first
    pub fn simulations(&self) -> Vec<SimulationRecord> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Archived simulation matching a book row, see
    /// [`SimulationHistory::find_at_price`]
    pub fn simulation_at_price(
        &self,
        key: &BookKey,
        side: Side,
        price: f64,
    ) -> Option<SimulationRecord> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .find_at_price(key.exchange, &key.symbol, side, price)
            .cloned()
    }
}

impl Default for MarketState {
    fn default() -> Self {
        Self::with_config(&SimulatorConfig::default())
    }
}

impl fmt::Debug for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketState")
            .field("books", &self.books.len())
            .field("live_feeds", &self.live_feed_count())
            .field("last_update", &self.last_update())
            .field("selected", &self.selected())
            .finish()
    }
}
