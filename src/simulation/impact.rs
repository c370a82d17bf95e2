//! Liquidity walk and the execution metrics derived from it.

use super::error::SimulationError;
use super::jitter::{JitterSource, RandomJitter, bounded_jitter};
use super::order::{SimulatedOrder, validate_limit_price, validate_quantity};
use crate::config::SimulatorConfig;
use crate::orderbook::{OrderBookSnapshot, PriceLevel, total_size};
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of sweeping a quantity through a ladder of levels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiquidityWalk {
    /// Quantity that found liquidity
    pub filled: f64,
    /// Quantity left once the walk stopped
    pub remaining: f64,
    /// Sum of `fill * price` over every consumed level
    pub total_cost: f64,
    /// Number of levels visited before the walk stopped
    pub levels_consumed: usize,
}

impl LiquidityWalk {
    /// Volume-weighted average execution price, `0` when nothing filled
    pub fn average_price(&self) -> f64 {
        if self.filled > 0.0 {
            self.total_cost / self.filled
        } else {
            0.0
        }
    }
}

/// Greedily consume `levels` (best price first) until `quantity` is filled
/// or the ladder runs out.
///
/// The walk has no notion of a limit price; every supplied level is eligible.
pub fn walk_liquidity(quantity: f64, levels: &[PriceLevel]) -> LiquidityWalk {
    let mut remaining = quantity;
    let mut total_cost = 0.0;
    let mut levels_consumed = 0;

    for level in levels {
        if remaining <= 0.0 {
            break;
        }

        let fill = remaining.min(level.size);
        total_cost += fill * level.price;
        remaining -= fill;
        levels_consumed += 1;
    }

    LiquidityWalk {
        filled: quantity - remaining,
        remaining,
        total_cost,
        levels_consumed,
    }
}

/// Predicted execution outcome of one simulated order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Share of the requested quantity the book can absorb, in `[0, 100]`
    pub estimated_fill_pct: f64,
    /// Distance between average fill price and the reference price, in percent
    pub slippage_pct: f64,
    /// Requested quantity relative to all visible liquidity on the side, in percent
    pub market_impact_pct: f64,
    /// Heuristic time to fill in milliseconds
    pub estimated_time_to_fill_ms: f64,
    /// Volume-weighted average execution price
    pub average_fill_price: f64,
    /// Quantity that found liquidity
    pub filled_quantity: f64,
    /// Quantity left unfilled
    pub remaining_quantity: f64,
    /// Levels visited by the walk
    pub levels_consumed: usize,
}

impl SimulationResult {
    /// The all-zero result returned for an empty ladder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the order would fill completely
    pub fn is_fully_filled(&self) -> bool {
        self.estimated_fill_pct >= 100.0
    }

    /// Whether market impact is above `threshold_pct`
    pub fn is_high_impact(&self, threshold_pct: f64) -> bool {
        self.market_impact_pct > threshold_pct
    }

    /// Whether slippage is above `threshold_pct`
    pub fn is_high_slippage(&self, threshold_pct: f64) -> bool {
        self.slippage_pct > threshold_pct
    }
}

/// Estimate fill, slippage, impact and time to fill for an order of
/// `quantity` on `side` against `levels`, the opposing side of the book
/// sorted best price first.
///
/// # Errors
/// Fails fast on a non-positive quantity, a non-positive limit price or a
/// level with a negative or non-finite value. An empty ladder is not an error
/// and yields [`SimulationResult::empty`].
///
/// # Notes
/// * The limit price is only the slippage reference. It does not stop the
///   walk: a limit buy below the best ask is still filled against the asks.
/// * Slippage is measured against the limit price when given, otherwise
///   against the best level. When nothing fills the average price is `0`,
///   so slippage is `100`.
/// * Market impact compares `quantity` with the size of every supplied level,
///   not only the consumed ones, and is `0` when that total is zero.
/// * Time to fill is `levels_consumed * time_per_level_ms` plus a jitter in
///   `[0, max_jitter_ms]` drawn from `jitter`.
pub fn calculate_order_impact(
    side: Side,
    quantity: f64,
    limit_price: Option<f64>,
    levels: &[PriceLevel],
    config: &SimulatorConfig,
    jitter: &dyn JitterSource,
) -> Result<SimulationResult, SimulationError> {
    validate_quantity(quantity)?;
    if let Some(price) = limit_price {
        validate_limit_price(price)?;
    }
    if let Some((index, level)) = levels.iter().enumerate().find(|(_, l)| !l.is_valid()) {
        return Err(SimulationError::InvalidLevel {
            index,
            price: level.price,
            size: level.size,
        });
    }

    if levels.is_empty() {
        trace!("{} {}: no levels to walk", side, quantity);
        return Ok(SimulationResult::empty());
    }

    let walk = walk_liquidity(quantity, levels);
    let average_fill_price = walk.average_price();
    let estimated_fill_pct = walk.filled / quantity * 100.0;

    let reference = limit_price.unwrap_or(levels[0].price);
    let slippage_pct = if reference > 0.0 {
        ((average_fill_price - reference) / reference).abs() * 100.0
    } else {
        0.0
    };

    let total_depth = total_size(levels);
    let market_impact_pct = if total_depth > 0.0 {
        quantity / total_depth * 100.0
    } else {
        0.0
    };

    let estimated_time_to_fill_ms = walk.levels_consumed as f64 * config.time_per_level_ms
        + bounded_jitter(jitter, config.max_jitter_ms);

    trace!(
        "{} {}: filled {} over {} levels, avg {}, slippage {}%, impact {}%",
        side,
        quantity,
        walk.filled,
        walk.levels_consumed,
        average_fill_price,
        slippage_pct,
        market_impact_pct
    );

    Ok(SimulationResult {
        estimated_fill_pct,
        slippage_pct,
        market_impact_pct,
        estimated_time_to_fill_ms,
        average_fill_price,
        filled_quantity: walk.filled,
        remaining_quantity: walk.remaining,
        levels_consumed: walk.levels_consumed,
    })
}

/// Stateless simulator bundling a configuration with a jitter source.
///
/// Calls share nothing mutable, so one instance can serve concurrent
/// simulations behind an `Arc`.
#[derive(Clone)]
pub struct ImpactSimulator {
    config: SimulatorConfig,
    jitter: Arc<dyn JitterSource>,
}

impl ImpactSimulator {
    /// Create a simulator drawing jitter from the thread-local generator
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_jitter(config, Arc::new(RandomJitter))
    }

    /// Create a simulator with an explicit jitter source
    pub fn with_jitter(config: SimulatorConfig, jitter: Arc<dyn JitterSource>) -> Self {
        Self { config, jitter }
    }

    /// Get the configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run the impact calculation on an explicit ladder
    pub fn calculate(
        &self,
        side: Side,
        quantity: f64,
        limit_price: Option<f64>,
        levels: &[PriceLevel],
    ) -> Result<SimulationResult, SimulationError> {
        calculate_order_impact(
            side,
            quantity,
            limit_price,
            levels,
            &self.config,
            self.jitter.as_ref(),
        )
    }

    /// Evaluate `order` against the opposing side of `book`.
    ///
    /// Market orders ignore any price they carry; limit orders must have one.
    pub fn simulate(
        &self,
        order: &SimulatedOrder,
        book: &OrderBookSnapshot,
    ) -> Result<SimulationResult, SimulationError> {
        order.validate()?;
        let levels = book.levels_for(order.side);
        debug!(
            "Simulating {} on {} against {} levels",
            order,
            book.symbol,
            levels.len()
        );
        self.calculate(
            order.side,
            order.quantity,
            order.effective_limit_price(),
            levels,
        )
    }
}

impl Default for ImpactSimulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl std::fmt::Debug for ImpactSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpactSimulator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
