//! Cumulative depth series for charting

use super::level::PriceLevel;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default number of levels per side plotted on a depth chart
pub const DEFAULT_CHART_LEVELS: usize = 20;

/// One point of a merged depth chart.
///
/// Exactly one of `bid_depth` / `ask_depth` is populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthPoint {
    /// Price of the level
    pub price: f64,
    /// Running bid size from the best bid down to this price
    pub bid_depth: Option<f64>,
    /// Running ask size from the best ask up to this price
    pub ask_depth: Option<f64>,
}

impl DepthPoint {
    /// Book side this point belongs to (Buy = bids, Sell = asks)
    pub fn side(&self) -> Side {
        if self.bid_depth.is_some() {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    /// Cumulative size at this point, whichever side it belongs to
    pub fn depth(&self) -> f64 {
        self.bid_depth.or(self.ask_depth).unwrap_or(0.0)
    }
}

/// Running totals of size walking outward from the best price.
///
/// Only the first `max_levels` levels are used; the rest are dropped rather
/// than folded into a remainder bucket.
pub fn cumulative_depth(levels: &[PriceLevel], max_levels: usize) -> Vec<(f64, f64)> {
    let mut running = 0.0;
    levels
        .iter()
        .take(max_levels)
        .map(|level| {
            running += level.size;
            (level.price, running)
        })
        .collect()
}

/// Merge both sides into one series ascending by price.
///
/// Bid totals are accumulated from the best bid downward and then reversed, so
/// the merged series reads left to right: deepest bid, best bid, best ask,
/// deepest ask.
pub fn depth_series(bids: &[PriceLevel], asks: &[PriceLevel], max_levels: usize) -> Vec<DepthPoint> {
    let bid_points = cumulative_depth(bids, max_levels)
        .into_iter()
        .rev()
        .map(|(price, depth)| DepthPoint {
            price,
            bid_depth: Some(depth),
            ask_depth: None,
        });

    let ask_points = cumulative_depth(asks, max_levels)
        .into_iter()
        .map(|(price, depth)| DepthPoint {
            price,
            bid_depth: None,
            ask_depth: Some(depth),
        });

    let mut series: Vec<DepthPoint> = bid_points.chain(ask_points).collect();
    series.sort_by(|a, b| a.price.total_cmp(&b.price));
    trace!("depth_series: {} points", series.len());
    series
}
