//! Read-only metrics derived from the two sides of a book.
//!
//! Every function here resolves degenerate books to a fixed value instead of
//! failing: an empty side gives a spread and mid price of `0`, and a book with
//! no volume at all has a neutral imbalance of `50`.

use super::level::{PriceLevel, total_size};
use tracing::trace;

/// Imbalance reported when neither side carries any volume
pub const NEUTRAL_IMBALANCE: f64 = 50.0;

/// Best ask minus best bid, or `0` when either side is empty.
///
/// The result is not clamped: a crossed book yields a negative spread.
pub fn spread(bids: &[PriceLevel], asks: &[PriceLevel]) -> f64 {
    let spread = match (bids.first(), asks.first()) {
        (Some(bid), Some(ask)) => ask.price - bid.price,
        _ => 0.0,
    };
    trace!("spread: {}", spread);
    spread
}

/// Average of best bid and best ask, or `0` when either side is empty.
///
/// A `0` mid price means "unknown" and must never be read as a traded price.
pub fn mid_price(bids: &[PriceLevel], asks: &[PriceLevel]) -> f64 {
    let mid = match (bids.first(), asks.first()) {
        (Some(bid), Some(ask)) => (bid.price + ask.price) / 2.0,
        _ => 0.0,
    };
    trace!("mid_price: {}", mid);
    mid
}

/// Share of total volume resting on the bid side, in percent.
pub fn order_book_imbalance(bids: &[PriceLevel], asks: &[PriceLevel]) -> f64 {
    let bid_volume = total_size(bids);
    let ask_volume = total_size(asks);
    let total_volume = bid_volume + ask_volume;

    let imbalance = if total_volume > 0.0 {
        bid_volume / total_volume * 100.0
    } else {
        NEUTRAL_IMBALANCE
    };
    trace!(
        "imbalance: {} (bid volume {}, ask volume {})",
        imbalance, bid_volume, ask_volume
    );
    imbalance
}
