//! Synthetic books for running without exchange connectivity

use super::exchange::ExchangeId;
use super::source::{BookSource, FeedEvent};
use crate::orderbook::{OrderBookSnapshot, PriceLevel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Default number of levels generated per side
pub const DEFAULT_MOCK_LEVELS: usize = 15;

/// Generates random books around a drifting base price.
///
/// Each snapshot picks a base price in `[base_price, base_price + price_range)`
/// and places levels at random steps of 1 to 11 away from it on both sides,
/// each with a size between 0.1 and 10.1.
pub struct MockFeed {
    exchange: ExchangeId,
    symbol: String,
    rng: StdRng,
    levels: usize,
    base_price: f64,
    price_range: f64,
}

impl MockFeed {
    /// Create a generator seeded from the thread-local generator
    pub fn new(exchange: ExchangeId, symbol: &str) -> Self {
        Self::with_seed(exchange, symbol, rand::rng().random())
    }

    /// Create a reproducible generator
    pub fn with_seed(exchange: ExchangeId, symbol: &str, seed: u64) -> Self {
        Self {
            exchange,
            symbol: symbol.to_string(),
            rng: StdRng::seed_from_u64(seed),
            levels: DEFAULT_MOCK_LEVELS,
            base_price: 50_000.0,
            price_range: 10_000.0,
        }
    }

    /// Number of levels generated per side
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Base price and the width of the range it drifts in
    pub fn with_price_range(mut self, base_price: f64, price_range: f64) -> Self {
        self.base_price = base_price;
        self.price_range = price_range.max(0.0);
        self
    }

    /// Produce one snapshot
    pub fn generate(&mut self) -> OrderBookSnapshot {
        let base = if self.price_range > 0.0 {
            self.base_price + self.rng.random_range(0.0..self.price_range)
        } else {
            self.base_price
        };

        let mut bids = Vec::with_capacity(self.levels);
        let mut asks = Vec::with_capacity(self.levels);

        for i in 0..self.levels {
            let distance = (i + 1) as f64;
            let bid_step = self.rng.random_range(1.0..11.0);
            let ask_step = self.rng.random_range(1.0..11.0);
            bids.push(PriceLevel {
                price: (base - distance * bid_step).max(0.0),
                size: self.rng.random_range(0.1..10.1),
            });
            asks.push(PriceLevel {
                price: base + distance * ask_step,
                size: self.rng.random_range(0.1..10.1),
            });
        }

        trace!("mock {} {}: generated book around {}", self.exchange, self.symbol, base);
        OrderBookSnapshot::from_levels(&self.symbol, bids, asks)
    }
}

impl BookSource for MockFeed {
    fn exchange(&self) -> ExchangeId {
        self.exchange
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn poll(&mut self) -> FeedEvent {
        FeedEvent::Snapshot(self.generate())
    }
}
