//! Pull-based sources of order book snapshots

use super::adapter::{FeedAdapter, adapter_for};
use super::error::FeedError;
use super::exchange::ExchangeId;
use crate::orderbook::OrderBookSnapshot;
use std::collections::VecDeque;

/// What a source produced on one poll
#[derive(Debug)]
pub enum FeedEvent {
    /// A new snapshot replacing the previous one
    Snapshot(OrderBookSnapshot),
    /// A message with no book in it
    Idle,
    /// A message that could not be parsed
    Failed(FeedError),
    /// The source has nothing more to deliver
    Closed,
}

/// A source of snapshots for one exchange and symbol
pub trait BookSource: Send {
    /// Exchange the snapshots belong to
    fn exchange(&self) -> ExchangeId;

    /// Symbol the snapshots belong to
    fn symbol(&self) -> &str;

    /// Produce the next event
    fn poll(&mut self) -> FeedEvent;
}

/// Replays recorded wire messages through the exchange's adapter
pub struct ReplayFeed {
    adapter: Box<dyn FeedAdapter>,
    symbol: String,
    messages: VecDeque<String>,
}

impl ReplayFeed {
    /// Create a replay of `messages` for `exchange`/`symbol`
    pub fn new<I, S>(exchange: ExchangeId, symbol: &str, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_adapter(adapter_for(exchange), symbol, messages)
    }

    /// Create a replay using an explicit adapter
    pub fn with_adapter<I, S>(adapter: Box<dyn FeedAdapter>, symbol: &str, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            adapter,
            symbol: symbol.to_string(),
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Messages not yet replayed
    pub fn pending(&self) -> usize {
        self.messages.len()
    }
}

impl BookSource for ReplayFeed {
    fn exchange(&self) -> ExchangeId {
        self.adapter.exchange()
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn poll(&mut self) -> FeedEvent {
        let Some(message) = self.messages.pop_front() else {
            return FeedEvent::Closed;
        };

        match self.adapter.parse(&message, &self.symbol) {
            Ok(Some(snapshot)) => FeedEvent::Snapshot(snapshot),
            Ok(None) => FeedEvent::Idle,
            Err(err) => FeedEvent::Failed(err),
        }
    }
}
