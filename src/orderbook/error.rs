//! Order book error types

use pricelevel::Side;
use std::fmt;

/// Errors that can occur while building or validating an order book snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum OrderBookError {
    /// A level with a negative or non-finite price or size
    InvalidLevel {
        /// Price carried by the level
        price: f64,
        /// Size carried by the level
        size: f64,
    },

    /// Levels on one side are not strictly ordered best-price-first
    Unsorted {
        /// Book side holding the offending level (Buy = bids, Sell = asks)
        side: Side,
        /// Index of the first level breaking the ordering
        index: usize,
    },

    /// A string-encoded decimal could not be parsed
    Parse {
        /// Which field was being parsed ("price" or "size")
        field: &'static str,
        /// The raw input
        value: String,
    },

    /// Snapshot could not be serialized or deserialized
    Serialization {
        /// Description of the error
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidLevel { price, size } => {
                write!(f, "Invalid price level: price {} size {}", price, size)
            }
            OrderBookError::Unsorted { side, index } => {
                write!(f, "Unsorted {} levels at index {}", side, index)
            }
            OrderBookError::Parse { field, value } => {
                write!(f, "Cannot parse {} from '{}'", field, value)
            }
            OrderBookError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<serde_json::Error> for OrderBookError {
    fn from(err: serde_json::Error) -> Self {
        OrderBookError::Serialization {
            message: err.to_string(),
        }
    }
}
