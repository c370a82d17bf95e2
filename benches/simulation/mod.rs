pub mod impact;
pub mod metrics;

pub fn register_benchmarks(c: &mut criterion::Criterion) {
    impact::register_benchmarks(c);
    metrics::register_benchmarks(c);
}
