use criterion::{BenchmarkId, Criterion};
use orderbook_sim::{
    ImpactSimulator, OrderBookSnapshot, PriceLevel, Side, SimulatedOrder, SimulatorConfig,
    ZeroJitter,
};
use std::hint::black_box;
use std::sync::Arc;

fn create_book(levels: usize) -> OrderBookSnapshot {
    let bids = (0..levels)
        .map(|i| PriceLevel {
            price: 49_999.0 - i as f64 * 0.5,
            size: 1.0 + (i % 7) as f64,
        })
        .collect();
    let asks = (0..levels)
        .map(|i| PriceLevel {
            price: 50_001.0 + i as f64 * 0.5,
            size: 1.0 + (i % 5) as f64,
        })
        .collect();
    OrderBookSnapshot::from_levels("BENCH", bids, asks)
}

/// Register benchmarks for the liquidity walk
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulation - Impact");
    let simulator = ImpactSimulator::with_jitter(SimulatorConfig::default(), Arc::new(ZeroJitter));

    for levels in [20, 200, 2_000] {
        let book = create_book(levels);
        // Sized to sweep roughly half the ask side
        let quantity = book.total_ask_volume() / 2.0;
        let order = SimulatedOrder::market(Side::Buy, quantity);

        group.bench_with_input(
            BenchmarkId::new("market_buy_half_depth", levels),
            &levels,
            |b, _| b.iter(|| black_box(simulator.simulate(black_box(&order), &book))),
        );
    }

    let book = create_book(200);
    let order = SimulatedOrder::limit(Side::Sell, 5.0, 49_990.0);
    group.bench_function("limit_sell_small", |b| {
        b.iter(|| black_box(simulator.simulate(black_box(&order), &book)))
    });

    let random = ImpactSimulator::default();
    group.bench_function("market_buy_random_jitter", |b| {
        b.iter(|| black_box(random.simulate(black_box(&order), &book)))
    });

    group.finish();
}
