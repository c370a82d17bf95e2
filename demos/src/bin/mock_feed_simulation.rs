// demos/src/bin/mock_feed_simulation.rs

use orderbook_sim::{
    BookKey, ExchangeId, FeedRunner, ImpactSimulator, MarketState, MockFeed, ORDER_DELAYS,
    SimulatedOrder, SimulationRequest, SimulationScheduler, SimulatorConfig, Submission,
    current_time_millis, format_price,
};
use pricelevel::{Side, setup_logger};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

fn main() {
    setup_logger();
    info!("Mock Feed Simulation Example");

    let config = SimulatorConfig::default();
    let state = Arc::new(MarketState::with_config(&config));
    let simulator = Arc::new(ImpactSimulator::new(config.clone()));
    let scheduler = SimulationScheduler::new(Arc::clone(&state), simulator);

    let symbol = "BTC-USDT";
    let key = BookKey::new(ExchangeId::Okx, symbol);
    state.select(ExchangeId::Okx, symbol);

    let feed = MockFeed::new(ExchangeId::Okx, symbol);
    let handle = match FeedRunner::spawn(
        Arc::clone(&state),
        Box::new(feed),
        Duration::from_millis(config.feed_interval_ms),
    ) {
        Ok(handle) => handle,
        Err(err) => {
            warn!("Could not start mock feed: {}", err);
            return;
        }
    };

    while state.selected_book().is_none() {
        thread::sleep(Duration::from_millis(10));
    }

    info!("Available delays:");
    for delay in ORDER_DELAYS {
        info!("  {} ({}ms)", delay.label, delay.delay_ms);
    }

    // Scaled down so the example finishes quickly
    let orders = [
        SimulatedOrder::market(Side::Buy, 5.0),
        SimulatedOrder::market(Side::Sell, 20.0).with_delay(500),
        SimulatedOrder::market(Side::Buy, 200.0).with_delay(1_000),
    ];

    let mut pending = Vec::new();
    for order in orders {
        match scheduler.submit(SimulationRequest::new(key.clone(), order)) {
            Ok(Submission::Executed(record)) => info!(
                "Executed {}: fill {:.2}%, avg {}",
                record.order,
                record.result.estimated_fill_pct,
                format_price(record.result.average_fill_price, 2)
            ),
            Ok(Submission::Scheduled(scheduled)) => {
                info!(
                    "Scheduled, fires in {}ms",
                    scheduled.fire_at().saturating_sub(current_time_millis())
                );
                pending.push(scheduled);
            }
            Err(err) => warn!("Submission rejected: {}", err),
        }
    }

    for scheduled in pending {
        match scheduled.join() {
            Ok(record) => info!(
                "Delayed {}: fill {:.2}%, slippage {:.4}%, impact {:.2}%",
                record.order,
                record.result.estimated_fill_pct,
                record.result.slippage_pct,
                record.result.market_impact_pct
            ),
            Err(err) => warn!("Delayed simulation failed: {}", err),
        }
    }

    match handle.join() {
        Ok(stats) => info!("Feed stopped after {} snapshots", stats.applied),
        Err(err) => warn!("{}", err),
    }

    info!("History (newest first):");
    for record in state.simulations() {
        let flag = if record.result.is_high_impact(config.high_impact_threshold_pct) {
            " [high impact]"
        } else {
            ""
        };
        info!(
            "  {} {} on {}-{}{}",
            record.id, record.order, record.exchange, record.symbol, flag
        );
    }

    let last_update = state.last_update();
    info!(
        "Book {} last updated {}ms ago, stale: {}",
        key,
        current_time_millis().saturating_sub(last_update),
        state.is_stale(&key, current_time_millis(), config.stale_after_ms)
    );
}
