use criterion::{criterion_group, criterion_main};

mod cli;

criterion_group!(
    benches,
    cli::bench_process_input,
    cli::bench_dispatch_round_trip
);
criterion_main!(benches);
