//! # Order Book Impact Simulator
//!
//! Aggregates level-2 order books from OKX, Bybit and Deribit into one
//! normalized snapshot type and estimates what a hypothetical order would do
//! to them: how much of it fills, at what average price, how far that price
//! drifts from the reference, how large the order is relative to visible
//! liquidity and roughly how long the fill takes.
//!
//! ## Key Features
//!
//! - **Normalized Snapshots**: Each exchange's wire format is decoded by a
//!   [`FeedAdapter`] into an [`OrderBookSnapshot`] with bids sorted high to low
//!   and asks low to high.
//!
//! - **Book Metrics**: Spread, mid price, volume imbalance and cumulative depth
//!   series for charting, all defined for one-sided and empty books.
//!
//! - **Impact Simulation**: [`calculate_order_impact`] walks the opposing side
//!   greedily and derives fill percentage, slippage, market impact and a time
//!   to fill estimate. Randomness is injected through a [`JitterSource`] so
//!   results are reproducible under test.
//!
//! - **Shared State**: [`MarketState`] keeps the latest snapshot per exchange
//!   and symbol as an `Arc` that is swapped wholesale, so readers always see
//!   both sides of the same update. Failed messages leave the previous snapshot
//!   in place and are tracked as feed health.
//!
//! - **Delayed Orders**: [`SimulationScheduler`] runs orders immediately or
//!   after a delay, evaluating delayed orders against the book that is current
//!   when they fire, and archives results in a bounded history.
//!
//! ## Example
//!
//! ```rust
//! use orderbook_sim::{ImpactSimulator, OrderBookSnapshot, PriceLevel, SimulatedOrder, SimulatorConfig, ZeroJitter, Side};
//! use std::sync::Arc;
//!
//! let book = OrderBookSnapshot::from_levels(
//!     "BTC-USDT",
//!     vec![PriceLevel { price: 99.0, size: 4.0 }],
//!     vec![
//!         PriceLevel { price: 100.0, size: 2.0 },
//!         PriceLevel { price: 101.0, size: 3.0 },
//!     ],
//! );
//!
//! let simulator = ImpactSimulator::with_jitter(SimulatorConfig::default(), Arc::new(ZeroJitter));
//! let result = simulator
//!     .simulate(&SimulatedOrder::market(Side::Buy, 4.0), &book)
//!     .unwrap();
//!
//! assert_eq!(result.estimated_fill_pct, 100.0);
//! assert_eq!(result.average_fill_price, 100.5);
//! assert_eq!(result.levels_consumed, 2);
//! ```
//!
//! ## Feeds
//!
//! Live transport is outside this crate. Anything that can produce snapshots
//! implements [`BookSource`]; [`ReplayFeed`] replays recorded exchange
//! messages and [`MockFeed`] generates random books. [`FeedRunner`] polls a
//! source on its own thread and publishes into a [`MarketState`].

pub mod config;
pub mod feed;
pub mod orderbook;
pub mod simulation;
pub mod state;

mod utils;

pub use config::{ConfigError, SimulatorConfig};
pub use feed::{
    BookSource, EXCHANGES, Exchange, ExchangeId, FeedAdapter, FeedError, FeedEvent, FeedHandle,
    FeedRunner, FeedStats, MockFeed, ORDER_DELAYS, OrderDelay, POPULAR_SYMBOLS, ReplayFeed,
    adapter_for,
};
pub use orderbook::{DepthPoint, OrderBookError, OrderBookSnapshot, PriceLevel};
pub use pricelevel::Side;
pub use simulation::{
    FixedJitter, FnJitter, ImpactSimulator, JitterSource, OrderKind, RandomJitter,
    ScheduledSimulation, SimulatedOrder, SimulationError, SimulationHistory, SimulationRecord,
    SimulationRequest, SimulationResult, SimulationScheduler, Submission, ZeroJitter,
    calculate_order_impact,
};
pub use state::{BookKey, FeedHealth, MarketState};
pub use utils::{current_time_millis, format_price, format_size};
