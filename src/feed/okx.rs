//! OKX `books` channel messages

use super::adapter::{FeedAdapter, build_snapshot, parse_levels};
use super::error::FeedError;
use super::exchange::ExchangeId;
use crate::orderbook::OrderBookSnapshot;
use serde_json::Value;
use tracing::trace;

/// Reads `data[0].bids` / `data[0].asks`, each entry
/// `["price", "size", "liquidated", "orders"]` with string decimals
#[derive(Debug, Clone, Copy, Default)]
pub struct OkxAdapter;

impl FeedAdapter for OkxAdapter {
    fn exchange(&self) -> ExchangeId {
        ExchangeId::Okx
    }

    fn parse(&self, message: &str, symbol: &str) -> Result<Option<OrderBookSnapshot>, FeedError> {
        let root: Value = serde_json::from_str(message)?;
        let Some(book) = root.get("data").and_then(|data| data.get(0)) else {
            trace!("okx {}: message without book data", symbol);
            return Ok(None);
        };

        let bids = parse_levels(book.get("bids"), "bids", false)?;
        let asks = parse_levels(book.get("asks"), "asks", false)?;
        build_snapshot(symbol, bids, asks).map(Some)
    }
}
