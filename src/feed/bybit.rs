//! Bybit v5 `orderbook` topic messages

use super::adapter::{FeedAdapter, build_snapshot, parse_levels};
use super::error::FeedError;
use super::exchange::ExchangeId;
use crate::orderbook::OrderBookSnapshot;
use serde_json::Value;
use tracing::trace;

/// Reads `data.b` / `data.a` as `["price", "size"]` string pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct BybitAdapter;

impl FeedAdapter for BybitAdapter {
    fn exchange(&self) -> ExchangeId {
        ExchangeId::Bybit
    }

    fn parse(&self, message: &str, symbol: &str) -> Result<Option<OrderBookSnapshot>, FeedError> {
        let root: Value = serde_json::from_str(message)?;
        let Some(book) = root.get("data").filter(|data| data.is_object()) else {
            trace!("bybit {}: message without book data", symbol);
            return Ok(None);
        };

        let bids = parse_levels(book.get("b"), "bids", false)?;
        let asks = parse_levels(book.get("a"), "asks", false)?;
        build_snapshot(symbol, bids, asks).map(Some)
    }
}
