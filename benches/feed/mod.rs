pub mod parse;

pub fn register_benchmarks(c: &mut criterion::Criterion) {
    parse::register_benchmarks(c);
}
