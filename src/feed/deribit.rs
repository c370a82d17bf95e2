//! Deribit `book.*` subscription notifications

use super::adapter::{FeedAdapter, build_snapshot, parse_levels};
use super::error::FeedError;
use super::exchange::ExchangeId;
use crate::orderbook::OrderBookSnapshot;
use serde_json::Value;
use tracing::trace;

/// Reads `params.data.bids` / `params.data.asks` as numeric `[price, size]`
/// pairs; entries tagged `["new", price, size]` are accepted as well
#[derive(Debug, Clone, Copy, Default)]
pub struct DeribitAdapter;

impl FeedAdapter for DeribitAdapter {
    fn exchange(&self) -> ExchangeId {
        ExchangeId::Deribit
    }

    fn parse(&self, message: &str, symbol: &str) -> Result<Option<OrderBookSnapshot>, FeedError> {
        let root: Value = serde_json::from_str(message)?;
        let Some(book) = root.get("params").and_then(|params| params.get("data")) else {
            trace!("deribit {}: message without book data", symbol);
            return Ok(None);
        };

        let bids = parse_levels(book.get("bids"), "bids", true)?;
        let asks = parse_levels(book.get("asks"), "asks", true)?;
        build_snapshot(symbol, bids, asks).map(Some)
    }
}
