//! Simulation error types

use crate::orderbook::OrderBookError;
use std::fmt;

/// Errors raised at the simulator's boundary.
///
/// Degenerate books (empty side, zero depth) are never errors; they resolve to
/// documented zero values. Only structurally invalid input ends up here.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Quantity is zero, negative or not finite
    InvalidQuantity(f64),

    /// Limit price is zero, negative or not finite
    InvalidLimitPrice(f64),

    /// A limit order was submitted without a price
    MissingLimitPrice,

    /// A level handed to the liquidity walk is negative or not finite
    InvalidLevel {
        /// Position of the level in the supplied slice
        index: usize,
        /// Price carried by the level
        price: f64,
        /// Size carried by the level
        size: f64,
    },

    /// No snapshot is known for the requested book
    NoOrderBook(String),

    /// A delayed simulation could not be scheduled or did not complete
    Scheduler {
        /// Description of the error
        message: String,
    },

    /// Error from the order book model
    OrderBook(OrderBookError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidQuantity(quantity) => {
                write!(f, "Invalid quantity: {} (must be greater than 0)", quantity)
            }
            SimulationError::InvalidLimitPrice(price) => {
                write!(f, "Invalid limit price: {} (must be greater than 0)", price)
            }
            SimulationError::MissingLimitPrice => write!(f, "Limit order requires a price"),
            SimulationError::InvalidLevel { index, price, size } => write!(
                f,
                "Invalid level at index {}: price {} size {}",
                index, price, size
            ),
            SimulationError::NoOrderBook(key) => write!(f, "No order book data for {}", key),
            SimulationError::Scheduler { message } => write!(f, "Scheduler error: {}", message),
            SimulationError::OrderBook(err) => write!(f, "Order book error: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<OrderBookError> for SimulationError {
    fn from(err: OrderBookError) -> Self {
        SimulationError::OrderBook(err)
    }
}
