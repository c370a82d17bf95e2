//! Feed error types

use crate::orderbook::OrderBookError;
use std::fmt;

/// Errors raised while turning exchange messages into snapshots.
///
/// A feed error never touches the last-known-good snapshot; callers record it
/// against the book's health and keep serving the previous snapshot.
#[derive(Debug)]
pub enum FeedError {
    /// The message is not valid JSON
    Json(serde_json::Error),

    /// A book payload is present but not shaped as expected
    Malformed {
        /// Description of the problem
        message: String,
    },

    /// A `[price, size]` entry could not be turned into a level
    InvalidLevel {
        /// "bids" or "asks"
        side: &'static str,
        /// Position of the entry in its array
        index: usize,
        /// Description of the problem
        reason: String,
    },

    /// Exchange identifier not recognised
    UnknownExchange(String),

    /// The feed worker could not be started or stopped cleanly
    Worker {
        /// Description of the error
        message: String,
    },

    /// Error from the order book model
    OrderBook(OrderBookError),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Json(err) => write!(f, "Invalid JSON message: {}", err),
            FeedError::Malformed { message } => write!(f, "Malformed book message: {}", message),
            FeedError::InvalidLevel {
                side,
                index,
                reason,
            } => write!(f, "Invalid {} entry at index {}: {}", side, index, reason),
            FeedError::UnknownExchange(name) => write!(f, "Unknown exchange: {}", name),
            FeedError::Worker { message } => write!(f, "Feed worker error: {}", message),
            FeedError::OrderBook(err) => write!(f, "Order book error: {}", err),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Json(err) => Some(err),
            FeedError::OrderBook(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Json(err)
    }
}

impl From<OrderBookError> for FeedError {
    fn from(err: OrderBookError) -> Self {
        FeedError::OrderBook(err)
    }
}
