//! The contract every exchange adapter implements, plus the shared
//! `[price, size]` decoding.

use super::bybit::BybitAdapter;
use super::deribit::DeribitAdapter;
use super::error::FeedError;
use super::exchange::ExchangeId;
use super::okx::OkxAdapter;
use crate::orderbook::{OrderBookError, OrderBookSnapshot, PriceLevel, parse_decimal};
use serde_json::Value;

/// Turns one exchange's wire messages into normalized snapshots
pub trait FeedAdapter: Send + Sync {
    /// Exchange whose format this adapter understands
    fn exchange(&self) -> ExchangeId;

    /// Parse a raw message for `symbol`.
    ///
    /// Returns `Ok(None)` for messages that carry no book (subscription
    /// acknowledgements, heartbeats) and `Err` when a book payload is present
    /// but malformed, including a side that repeats a price.
    fn parse(&self, message: &str, symbol: &str) -> Result<Option<OrderBookSnapshot>, FeedError>;
}

/// Adapter for `exchange`
pub fn adapter_for(exchange: ExchangeId) -> Box<dyn FeedAdapter> {
    match exchange {
        ExchangeId::Okx => Box::new(OkxAdapter),
        ExchangeId::Bybit => Box::new(BybitAdapter),
        ExchangeId::Deribit => Box::new(DeribitAdapter),
    }
}

/// Sort decoded levels into a snapshot and reject books the rest of the
/// crate cannot trust, such as duplicate prices on one side
pub(crate) fn build_snapshot(
    symbol: &str,
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
) -> Result<OrderBookSnapshot, FeedError> {
    let snapshot = OrderBookSnapshot::from_levels(symbol, bids, asks);
    snapshot.validate()?;
    Ok(snapshot)
}

/// Decode an array of `[price, size, ...]` entries.
///
/// A missing or `null` side is an empty side. With `action_tagged`, a leading
/// non-numeric string in each entry (`["new", price, size]`) is skipped.
pub(crate) fn parse_levels(
    value: Option<&Value>,
    side: &'static str,
    action_tagged: bool,
) -> Result<Vec<PriceLevel>, FeedError> {
    let entries = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(FeedError::Malformed {
                message: format!("{} is not an array", side),
            });
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(entry, side, index, action_tagged))
        .collect()
}

fn parse_entry(
    entry: &Value,
    side: &'static str,
    index: usize,
    action_tagged: bool,
) -> Result<PriceLevel, FeedError> {
    let invalid = |reason: String| FeedError::InvalidLevel {
        side,
        index,
        reason,
    };

    let fields = entry
        .as_array()
        .ok_or_else(|| invalid("entry is not an array".to_string()))?;

    let fields = match fields.first() {
        Some(Value::String(tag)) if action_tagged && tag.trim().parse::<f64>().is_err() => {
            &fields[1..]
        }
        _ => &fields[..],
    };

    let (price, size) = match fields {
        [price, size, ..] => (price, size),
        _ => return Err(invalid("expected [price, size]".to_string())),
    };

    let price = decimal(price, "price").map_err(|err| invalid(err.to_string()))?;
    let size = decimal(size, "size").map_err(|err| invalid(err.to_string()))?;
    PriceLevel::new(price, size).map_err(|err| invalid(err.to_string()))
}

fn decimal(value: &Value, field: &'static str) -> Result<f64, OrderBookError> {
    match value {
        Value::String(raw) => parse_decimal(field, raw),
        Value::Number(number) => number.as_f64().ok_or_else(|| OrderBookError::Parse {
            field,
            value: number.to_string(),
        }),
        other => Err(OrderBookError::Parse {
            field,
            value: other.to_string(),
        }),
    }
}
