use bloom_fp_rate::{false_positive_rate, optimal_k_num, Sweep};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    let params: Vec<(u64, u32, f64)> = (0..1000)
        .map(|_| {
            let mut rng = thread_rng();
            (rng.gen_range(1..1_000_000), rng.gen_range(1..32), rng.gen_range(0.0..100_000.0))
        })
        .collect();

    c.bench_function("false_positive_rate", |b| {
        b.iter(|| {
            params
                .iter()
                .map(|&(m, k, n)| false_positive_rate(black_box(m), black_box(k), black_box(n)))
                .sum::<f64>()
        })
    });

    c.bench_function("optimal_k_num", |b| {
        b.iter(|| {
            params
                .iter()
                .filter_map(|&(m, _, n)| optimal_k_num(black_box(m), black_box(n)).ok())
                .max()
        })
    });

    c.bench_function("standard_sweeps", |b| {
        b.iter(|| {
            Sweep::standard()
                .iter()
                .filter_map(|sweep| sweep.run().ok())
                .map(|result| result.points().len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
