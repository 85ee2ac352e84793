use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use openlaplace::core::InversionEngine;
use openlaplace::engines::batch::invert_sequence_parallel;
use openlaplace::engines::{DeHoogEngine, IsegerEngine, StehfestEngine};
use openlaplace::models::InfiniteRadial;
use std::hint::black_box;

fn exponential_decay(s: Complex<f64>) -> Complex<f64> {
    Complex::new(1.0, 0.0) / (s + 1.0)
}

fn bench_single_inversion(c: &mut Criterion) {
    let stehfest = StehfestEngine::default();
    let dehoog = DeHoogEngine::default();

    c.bench_function("stehfest_single_point", |b| {
        b.iter(|| {
            stehfest
                .invert(black_box(&exponential_decay), black_box(1.0))
                .expect("inversion")
        })
    });

    c.bench_function("dehoog_single_point", |b| {
        b.iter(|| {
            dehoog
                .invert(black_box(&exponential_decay), black_box(1.0))
                .expect("inversion")
        })
    });
}

fn bench_iseger_block_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("iseger_block");
    for k in [5u32, 7, 9] {
        let engine = IsegerEngine::new(32, k);
        let delta = 10.0 / (1u64 << k) as f64;
        group.bench_with_input(BenchmarkId::from_parameter(1u64 << k), &k, |b, &k| {
            b.iter(|| {
                let block = engine
                    .invert_block(black_box(&exponential_decay), delta, k)
                    .expect("block inversion");
                black_box(block[0])
            })
        });
    }
    group.finish();
}

fn bench_welltest_sweep(c: &mut Criterion) {
    let model = InfiniteRadial {
        storage: 1000.0,
        skin: 5.0,
    };
    let times: Vec<f64> = (0..200).map(|i| 10f64.powf(i as f64 * 0.02)).collect();
    let engine = DeHoogEngine::default();

    c.bench_function("dehoog_welltest_sweep_200_points", |b| {
        b.iter(|| {
            invert_sequence_parallel(black_box(&engine), &model, black_box(&times))
                .expect("sweep")
        })
    });
}

criterion_group!(
    inversion_benches,
    bench_single_inversion,
    bench_iseger_block_scaling,
    bench_welltest_sweep
);
criterion_main!(inversion_benches);
