use criterion::Criterion;
use orderbook_sim::feed::{BybitAdapter, DeribitAdapter, FeedAdapter, OkxAdapter};
use orderbook_sim::{BookKey, ExchangeId, MarketState};
use std::hint::black_box;

fn okx_message(levels: usize) -> String {
    let side = |base: f64, step: f64| {
        (0..levels)
            .map(|i| format!(r#"["{:.1}","{:.3}","0","1"]"#, base + step * i as f64, 0.5 + i as f64))
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        r#"{{"arg":{{"channel":"books"}},"data":[{{"bids":[{}],"asks":[{}]}}]}}"#,
        side(49_999.0, -0.5),
        side(50_001.0, 0.5)
    )
}

fn bybit_message(levels: usize) -> String {
    let side = |base: f64, step: f64| {
        (0..levels)
            .map(|i| format!(r#"["{:.1}","{:.3}"]"#, base + step * i as f64, 0.5 + i as f64))
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        r#"{{"topic":"orderbook.50.BTCUSDT","data":{{"b":[{}],"a":[{}]}}}}"#,
        side(49_999.0, -0.5),
        side(50_001.0, 0.5)
    )
}

fn deribit_message(levels: usize) -> String {
    let side = |base: f64, step: f64| {
        (0..levels)
            .map(|i| format!(r#"["new",{:.1},{:.1}]"#, base + step * i as f64, 100.0 + i as f64))
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        r#"{{"params":{{"data":{{"bids":[{}],"asks":[{}]}}}}}}"#,
        side(49_999.0, -0.5),
        side(50_001.0, 0.5)
    )
}

/// Register benchmarks for decoding exchange messages
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Feed - Parse");

    let okx = okx_message(400);
    let bybit = bybit_message(50);
    let deribit = deribit_message(100);

    group.bench_function("okx_400_levels", |b| {
        b.iter(|| black_box(OkxAdapter.parse(black_box(&okx), "BTC-USDT")))
    });
    group.bench_function("bybit_50_levels", |b| {
        b.iter(|| black_box(BybitAdapter.parse(black_box(&bybit), "BTC-USDT")))
    });
    group.bench_function("deribit_100_levels", |b| {
        b.iter(|| black_box(DeribitAdapter.parse(black_box(&deribit), "BTC-PERPETUAL")))
    });

    let state = MarketState::default();
    let key = BookKey::new(ExchangeId::Okx, "BTC-USDT");
    group.bench_function("ingest_and_read_okx", |b| {
        b.iter(|| {
            let _ = black_box(state.ingest(&OkxAdapter, "BTC-USDT", &okx));
            black_box(state.latest(&key))
        })
    });

    group.finish();
}
