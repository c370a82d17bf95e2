//! Normalized order book snapshots and the read-only queries derived from them.

mod depth;
mod error;
mod level;
mod metrics;
mod snapshot;

pub use depth::{DEFAULT_CHART_LEVELS, DepthPoint, cumulative_depth, depth_series};
pub use error::OrderBookError;
pub use level::{PriceLevel, total_size};
pub use metrics::{NEUTRAL_IMBALANCE, mid_price, order_book_imbalance, spread};
pub use snapshot::OrderBookSnapshot;

pub(crate) use level::parse_decimal;
