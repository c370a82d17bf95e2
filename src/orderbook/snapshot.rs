//! Order book snapshot for market data

use super::depth::{DepthPoint, depth_series};
use super::error::OrderBookError;
use super::level::{PriceLevel, total_size};
use super::metrics;
use crate::utils::current_time_millis;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A complete, immutable picture of one book at a point in time.
///
/// Snapshots are replaced wholesale on every feed update; nothing mutates one
/// after it has been published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid levels, best (highest) price first
    pub bids: Vec<PriceLevel>,

    /// Ask levels, best (lowest) price first
    pub asks: Vec<PriceLevel>,
}

impl OrderBookSnapshot {
    /// Create a snapshot from levels already in book order
    pub fn new(symbol: &str, timestamp: u64, bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self {
            symbol: symbol.to_string(),
            timestamp,
            bids,
            asks,
        }
    }

    /// Create a snapshot stamped with the current time, sorting bids
    /// descending and asks ascending by price
    pub fn from_levels(symbol: &str, mut bids: Vec<PriceLevel>, mut asks: Vec<PriceLevel>) -> Self {
        bids.sort_by(|a, b| b.price.total_cmp(&a.price));
        asks.sort_by(|a, b| a.price.total_cmp(&b.price));
        Self::new(symbol, current_time_millis(), bids, asks)
    }

    /// Check every level and the strict best-first ordering of both sides
    pub fn validate(&self) -> Result<(), OrderBookError> {
        for level in self.bids.iter().chain(self.asks.iter()) {
            if !level.is_valid() {
                return Err(OrderBookError::InvalidLevel {
                    price: level.price,
                    size: level.size,
                });
            }
        }

        if let Some(index) = self.bids.windows(2).position(|w| w[0].price <= w[1].price) {
            return Err(OrderBookError::Unsorted {
                side: Side::Buy,
                index: index + 1,
            });
        }

        if let Some(index) = self.asks.windows(2).position(|w| w[0].price >= w[1].price) {
            return Err(OrderBookError::Unsorted {
                side: Side::Sell,
                index: index + 1,
            });
        }

        Ok(())
    }

    /// Get the best bid level
    pub fn best_bid(&self) -> Option<PriceLevel> {
        let bid = self.bids.first().copied();
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask level
    pub fn best_ask(&self) -> Option<PriceLevel> {
        let ask = self.asks.first().copied();
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Mid price, `0` when either side is empty
    pub fn mid_price(&self) -> f64 {
        metrics::mid_price(&self.bids, &self.asks)
    }

    /// Spread (best ask - best bid), `0` when either side is empty
    pub fn spread(&self) -> f64 {
        metrics::spread(&self.bids, &self.asks)
    }

    /// Bid share of total volume in percent, `50` for an empty book
    pub fn imbalance(&self) -> f64 {
        metrics::order_book_imbalance(&self.bids, &self.asks)
    }

    /// Whether the best bid is above the best ask
    pub fn is_crossed(&self) -> bool {
        match (self.bids.first(), self.asks.first()) {
            (Some(bid), Some(ask)) => bid.price > ask.price,
            _ => false,
        }
    }

    /// Whether both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// The side an order on `side` would trade against: asks for a buy,
    /// bids for a sell, best price first
    pub fn levels_for(&self, side: Side) -> &[PriceLevel] {
        match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        }
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> f64 {
        let volume = total_size(&self.bids);
        trace!("total_bid_volume: {:?}", volume);
        volume
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> f64 {
        let volume = total_size(&self.asks);
        trace!("total_ask_volume: {:?}", volume);
        volume
    }

    /// Calculate the total value on the bid side (price * size)
    pub fn total_bid_value(&self) -> f64 {
        let value: f64 = self.bids.iter().map(PriceLevel::notional).sum();
        trace!("total_bid_value: {:?}", value);
        value
    }

    /// Calculate the total value on the ask side (price * size)
    pub fn total_ask_value(&self) -> f64 {
        let value: f64 = self.asks.iter().map(PriceLevel::notional).sum();
        trace!("total_ask_value: {:?}", value);
        value
    }

    /// Chart-ready cumulative depth using the top `max_levels` of each side
    pub fn depth_series(&self, max_levels: usize) -> Vec<DepthPoint> {
        depth_series(&self.bids, &self.asks, max_levels)
    }

    /// Copy of this snapshot keeping only the best `depth` levels per side
    pub fn top(&self, depth: usize) -> OrderBookSnapshot {
        Self {
            symbol: self.symbol.clone(),
            timestamp: self.timestamp,
            bids: self.bids.iter().take(depth).copied().collect(),
            asks: self.asks.iter().take(depth).copied().collect(),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON and validate
    pub fn from_json(data: &str) -> Result<Self, OrderBookError> {
        let snapshot: Self = serde_json::from_str(data)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
