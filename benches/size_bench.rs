use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nulla::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

const RESAMPLES: usize = 199;

fn xrng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// 1. BOOTSTRAP CRITICAL VALUE (scaling over sample size)
fn bench_bootstrap_critical(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap/critical_value");
    group.throughput(Throughput::Elements(RESAMPLES as u64));

    for &size in &[20, 100, 1_000] {
        let sample: Sample<f64> = ErrorLaw::standard_normal().draw(size, &mut xrng(1));

        group.bench_with_input(BenchmarkId::new("mean", size), &sample, |b, sample| {
            b.iter(|| {
                let crit = BootstrapCritical::new(Bootstrap::new(xrng(2)), RESAMPLES, 0.05);
                black_box(crit.compute(black_box(sample)))
            })
        });
    }
    group.finish();
}

/// 2. ONE FULL SIZE-STUDY CELL (outer × inner replication)
fn bench_size_cell(c: &mut Criterion) {
    let study = SizeStudy {
        sample_sizes: vec![20],
        replications: 200,
        bootstrap_samples: 99,
        alpha: 0.05,
        laws: vec![ErrorLaw::standard_normal()],
        seed: 7,
    };

    c.bench_function("size_study/mean_n20_r200_b99", |b| {
        b.iter(|| black_box(study.run(Scenario::MeanTest)))
    });
}

/// 3. PI ESTIMATION (pure sampling throughput)
fn bench_pi(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi");
    for &trials in &[10_000usize, 100_000] {
        group.throughput(Throughput::Elements(trials as u64));
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            b.iter(|| black_box(estimate_pi(trials, 42)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bootstrap_critical,
    bench_size_cell,
    bench_pi
);
criterion_main!(benches);
