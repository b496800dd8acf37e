use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashbench::{Algorithm, Timer};

fn bench_harness_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness");

    group.bench_function("timer_measure_noop", |b| {
        let timer = Timer::new();
        b.iter(|| {
            // What a measurement costs when the measured call is free;
            // keeps the harness honest about its own footprint.
            let (value, elapsed) = timer.measure(|| black_box(1u64) + 1);
            black_box((value, elapsed))
        });
    });

    group.bench_function("pbkdf2_sha256_work_unit_1k_iters", |b| {
        let unit = Algorithm::Pbkdf2Sha256.work_unit();
        b.iter(|| {
            // One full measured call including fresh input generation.
            let elapsed = unit.measure(black_box(1_000)).unwrap();
            black_box(elapsed)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_harness_overhead);
criterion_main!(benches);
