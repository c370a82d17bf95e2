//! Application state shared between the feed, the scheduler and readers.

mod market;

pub use market::{BookKey, DEFAULT_SYMBOL, FeedHealth, MarketState};
