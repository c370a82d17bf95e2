// demos/src/bin/simulate_order.rs

use orderbook_sim::{
    ImpactSimulator, OrderBookSnapshot, PriceLevel, SimulatedOrder, SimulationResult,
    SimulatorConfig, format_price, format_size,
};
use pricelevel::{Side, setup_logger};
use tracing::{info, warn};

fn main() {
    setup_logger();
    info!("Order Impact Simulation Example");

    let config = SimulatorConfig {
        table_levels: 5,
        ..SimulatorConfig::default()
    };

    let book = create_book("BTC-USDT");
    display_book(&book, config.table_levels);

    let simulator = ImpactSimulator::new(config.clone());

    let orders = [
        SimulatedOrder::market(Side::Buy, 0.5),
        SimulatedOrder::market(Side::Buy, 6.0),
        SimulatedOrder::limit(Side::Sell, 3.0, 49_990.0),
        SimulatedOrder::limit(Side::Buy, 2.0, 49_995.0),
        SimulatedOrder::market(Side::Sell, 500.0),
    ];

    for order in &orders {
        match simulator.simulate(order, &book) {
            Ok(result) => display_result(order, &result, &config),
            Err(err) => warn!("{} rejected: {}", order, err),
        }
    }

    // Invalid input is rejected rather than simulated
    let invalid = SimulatedOrder::market(Side::Buy, 0.0);
    if let Err(err) = simulator.simulate(&invalid, &book) {
        info!("Rejected as expected: {}", err);
    }
}

fn create_book(symbol: &str) -> OrderBookSnapshot {
    let mut bids = Vec::new();
    let mut asks = Vec::new();
    for i in 0..10 {
        let offset = i as f64 * 5.0;
        bids.push(PriceLevel {
            price: 49_995.0 - offset,
            size: 0.5 + i as f64 * 0.25,
        });
        asks.push(PriceLevel {
            price: 50_005.0 + offset,
            size: 0.4 + i as f64 * 0.3,
        });
    }
    OrderBookSnapshot::from_levels(symbol, bids, asks)
}

fn display_book(book: &OrderBookSnapshot, table_levels: usize) {
    info!("Book for {} (top {} levels)", book.symbol, table_levels);
    let table = book.top(table_levels);
    for level in table.asks.iter().rev() {
        info!("  ASK {:>12} {:>10}", format_price(level.price, 2), format_size(level.size));
    }
    info!("  ---- spread {} ----", format_price(book.spread(), 2));
    for level in &table.bids {
        info!("  BID {:>12} {:>10}", format_price(level.price, 2), format_size(level.size));
    }
    info!(
        "Mid {} | imbalance {:.1}% | bid volume {} | ask volume {}",
        format_price(book.mid_price(), 2),
        book.imbalance(),
        format_size(book.total_bid_volume()),
        format_size(book.total_ask_volume())
    );
}

fn display_result(order: &SimulatedOrder, result: &SimulationResult, config: &SimulatorConfig) {
    info!("{}", order);
    info!(
        "  fill {:.2}% ({} of {}) over {} levels",
        result.estimated_fill_pct,
        format_size(result.filled_quantity),
        format_size(order.quantity),
        result.levels_consumed
    );
    info!(
        "  avg price {} | slippage {:.4}% | impact {:.2}% | ~{:.0}ms",
        format_price(result.average_fill_price, 2),
        result.slippage_pct,
        result.market_impact_pct,
        result.estimated_time_to_fill_ms
    );
    if result.is_high_impact(config.high_impact_threshold_pct) {
        warn!("  high market impact");
    }
    if result.is_high_slippage(config.high_slippage_threshold_pct) {
        warn!("  high slippage");
    }
}
