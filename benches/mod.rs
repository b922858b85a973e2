use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::bench_encode_component,
    http::bench_encode_path,
    http::bench_get_exchange
);
criterion_main!(benches);
