//! Exchange feeds: per-exchange wire adapters, snapshot sources and the
//! runner that publishes them into [`MarketState`](crate::state::MarketState).

mod adapter;
mod bybit;
mod deribit;
mod error;
mod exchange;
mod mock;
mod okx;
mod runner;
mod source;
mod tests;

pub use adapter::{FeedAdapter, adapter_for};
pub use bybit::BybitAdapter;
pub use deribit::DeribitAdapter;
pub use error::FeedError;
pub use exchange::{EXCHANGES, Exchange, ExchangeId, ORDER_DELAYS, OrderDelay, POPULAR_SYMBOLS};
pub use mock::{DEFAULT_MOCK_LEVELS, MockFeed};
pub use okx::OkxAdapter;
pub use runner::{FeedHandle, FeedRunner, FeedStats};
pub use source::{BookSource, FeedEvent, ReplayFeed};
