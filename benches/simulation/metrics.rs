use criterion::{BenchmarkId, Criterion};
use orderbook_sim::{ExchangeId, MockFeed};
use std::hint::black_box;

/// Register benchmarks for book metrics and depth series
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulation - Book Metrics");

    for levels in [15, 100, 1_000] {
        let book = MockFeed::with_seed(ExchangeId::Okx, "BENCH", 42)
            .with_levels(levels)
            .generate();

        group.bench_with_input(BenchmarkId::new("spread_mid_imbalance", levels), &levels, |b, _| {
            b.iter(|| {
                black_box(book.spread());
                black_box(book.mid_price());
                black_box(book.imbalance());
            })
        });

        group.bench_with_input(BenchmarkId::new("depth_series_20", levels), &levels, |b, _| {
            b.iter(|| black_box(book.depth_series(20)))
        });
    }

    group.finish();
}
