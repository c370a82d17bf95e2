// demos/src/bin/replay_feed.rs

use orderbook_sim::{
    BookKey, ExchangeId, FeedRunner, MarketState, ReplayFeed, SimulatorConfig, format_price,
    format_size,
};
use pricelevel::setup_logger;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

const OKX_MESSAGES: [&str; 3] = [
    r#"{"event":"subscribe","arg":{"channel":"books","instId":"BTC-USDT"}}"#,
    r#"{"arg":{"channel":"books","instId":"BTC-USDT"},"action":"snapshot","data":[{"asks":[["50010.5","0.8","0","2"],["50012.0","1.5","0","4"]],"bids":[["50009.5","1.1","0","3"],["50008.0","2.4","0","6"]],"ts":"1700000000000"}]}"#,
    r#"{"arg":{"channel":"books","instId":"BTC-USDT"},"action":"snapshot","data":[{"asks":[["50011.0","0.6","0","1"]],"bids":[["bad","1.0","0","1"]]}]}"#,
];

const BYBIT_MESSAGES: [&str; 2] = [
    r#"{"success":true,"ret_msg":"","op":"subscribe"}"#,
    r#"{"topic":"orderbook.50.BTCUSDT","type":"snapshot","data":{"s":"BTCUSDT","b":[["50007.2","0.9"],["50006.0","3.0"]],"a":[["50011.8","1.3"],["50013.1","0.7"]]}}"#,
];

const DERIBIT_MESSAGES: [&str; 1] = [
    r#"{"jsonrpc":"2.0","method":"subscription","params":{"channel":"book.BTC-PERPETUAL.100ms","data":{"bids":[["new",50005.0,12000.0],["new",50004.5,8000.0]],"asks":[["new",50006.0,9500.0],["new",50007.5,4000.0]]}}}"#,
];

fn main() {
    setup_logger();
    info!("Feed Replay Example");

    let config = SimulatorConfig::default();
    let state = Arc::new(MarketState::with_config(&config));
    let interval = Duration::from_millis(config.feed_interval_ms);

    let feeds = vec![
        ReplayFeed::new(ExchangeId::Okx, "BTC-USDT", OKX_MESSAGES),
        ReplayFeed::new(ExchangeId::Bybit, "BTC-USDT", BYBIT_MESSAGES),
        ReplayFeed::new(ExchangeId::Deribit, "BTC-PERPETUAL", DERIBIT_MESSAGES),
    ];

    let mut handles = Vec::new();
    for feed in feeds {
        match FeedRunner::spawn(Arc::clone(&state), Box::new(feed), interval) {
            Ok(handle) => handles.push(handle),
            Err(err) => warn!("Could not start feed: {}", err),
        }
    }

    while handles.iter().any(|handle| !handle.is_finished()) {
        thread::sleep(interval);
    }

    for handle in handles {
        let key = handle.key().clone();
        match handle.join() {
            Ok(stats) => info!(
                "{}: {} applied, {} idle, {} failed",
                key, stats.applied, stats.idle, stats.failed
            ),
            Err(err) => warn!("{}: {}", key, err),
        }
    }

    let mut keys = state.book_keys();
    keys.sort_by(|a, b| a.exchange.cmp(&b.exchange));
    for key in keys {
        display_book(&state, &key, &config);
    }
}

fn display_book(state: &MarketState, key: &BookKey, config: &SimulatorConfig) {
    let Some(book) = state.latest(key) else {
        return;
    };
    let exchange = key.exchange.descriptor();
    info!(
        "{} {}: mid {} spread {} imbalance {:.1}%",
        exchange.name,
        key.symbol,
        format_price(book.mid_price(), 2),
        format_price(book.spread(), 2),
        book.imbalance()
    );

    if let Some(health) = state.health(key) {
        if health.consecutive_failures > 0 {
            warn!(
                "  serving last good snapshot after {} failure(s): {}",
                health.consecutive_failures,
                health.last_error.unwrap_or_default()
            );
        }
    }

    for point in book.depth_series(config.depth_chart_levels) {
        info!(
            "  {} {:>12} cumulative {}",
            point.side(),
            format_price(point.price, 2),
            format_size(point.depth())
        );
    }
}
