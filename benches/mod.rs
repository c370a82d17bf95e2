use criterion::{criterion_group, criterion_main};

mod feed;
mod simulation;

use feed::register_benchmarks as register_feed_benchmarks;
use simulation::register_benchmarks as register_simulation_benchmarks;

criterion_group!(
    benches,
    register_simulation_benchmarks,
    register_feed_benchmarks,
);

criterion_main!(benches);
