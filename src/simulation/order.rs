//! Hypothetical orders submitted to the simulator

use super::error::SimulationError;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution style of a simulated order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Sweep the book at whatever prices are resting
    Market,
    /// Use a limit price as the slippage reference
    Limit,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "MARKET"),
            OrderKind::Limit => write!(f, "LIMIT"),
        }
    }
}

/// An order the user wants to evaluate against the current book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedOrder {
    /// Buy consumes asks, sell consumes bids
    pub side: Side,
    /// Market or limit
    pub kind: OrderKind,
    /// Limit price, only meaningful for limit orders
    pub limit_price: Option<f64>,
    /// Quantity to fill, strictly positive
    pub quantity: f64,
    /// How long the caller waits before evaluating the order
    pub delay_ms: u64,
}

impl SimulatedOrder {
    /// A market order evaluated immediately
    pub fn market(side: Side, quantity: f64) -> Self {
        Self {
            side,
            kind: OrderKind::Market,
            limit_price: None,
            quantity,
            delay_ms: 0,
        }
    }

    /// A limit order evaluated immediately
    pub fn limit(side: Side, quantity: f64, price: f64) -> Self {
        Self {
            side,
            kind: OrderKind::Limit,
            limit_price: Some(price),
            quantity,
            delay_ms: 0,
        }
    }

    /// Evaluate the order `delay_ms` after submission
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Price used as slippage reference; market orders never carry one
    pub fn effective_limit_price(&self) -> Option<f64> {
        match self.kind {
            OrderKind::Market => None,
            OrderKind::Limit => self.limit_price,
        }
    }

    /// Reject orders the liquidity walk cannot evaluate
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_quantity(self.quantity)?;
        if self.kind == OrderKind::Limit {
            match self.limit_price {
                Some(price) => validate_limit_price(price)?,
                None => return Err(SimulationError::MissingLimitPrice),
            }
        }
        Ok(())
    }
}

impl fmt::Display for SimulatedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effective_limit_price() {
            Some(price) => write!(f, "{} {} {} @ {}", self.kind, self.side, self.quantity, price),
            None => write!(f, "{} {} {}", self.kind, self.side, self.quantity),
        }
    }
}

pub(crate) fn validate_quantity(quantity: f64) -> Result<(), SimulationError> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidQuantity(quantity))
    }
}

pub(crate) fn validate_limit_price(price: f64) -> Result<(), SimulationError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidLimitPrice(price))
    }
}
