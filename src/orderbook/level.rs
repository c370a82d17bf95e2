//! A single price level of a normalized order book

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};

/// Quantity resting at one discrete price.
///
/// Levels are produced by a feed and never mutated afterwards; a new book
/// update carries a fresh list of levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price of the level
    pub price: f64,
    /// Quantity available at `price`
    pub size: f64,
}

impl PriceLevel {
    /// Create a level, rejecting negative or non-finite values
    pub fn new(price: f64, size: f64) -> Result<Self, OrderBookError> {
        let level = Self { price, size };
        if level.is_valid() {
            Ok(level)
        } else {
            Err(OrderBookError::InvalidLevel { price, size })
        }
    }

    /// Build a level from the `[price, size]` string pair most exchanges send
    pub fn parse(price: &str, size: &str) -> Result<Self, OrderBookError> {
        let price = parse_decimal("price", price)?;
        let size = parse_decimal("size", size)?;
        Self::new(price, size)
    }

    /// Whether both fields are finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.size.is_finite() && self.price >= 0.0 && self.size >= 0.0
    }

    /// Price multiplied by size
    pub fn notional(&self) -> f64 {
        self.price * self.size
    }
}

/// Parse a string-encoded decimal into an `f64`
pub(crate) fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, OrderBookError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| OrderBookError::Parse {
            field,
            value: raw.to_string(),
        })
}

/// Sum of `size` over a slice of levels
pub fn total_size(levels: &[PriceLevel]) -> f64 {
    levels.iter().map(|level| level.size).sum()
}
