//! Benchmarks for taper evaluation and decimal rounding.
//!
//! Run with: cargo bench --bench taper_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use float_ext::{FloatRange, denormalize, linear_map, normalize, round, truncate};

fn inputs() -> Vec<f64> {
    (0..=1000).map(|i| f64::from(i) / 1000.0).collect()
}

fn bench_linear_map(c: &mut Criterion) {
    let inputs = inputs();
    let src = FloatRange::unit();
    let dst = FloatRange::new(20.0, 20000.0);

    c.bench_function("linear_map", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(linear_map(std::hint::black_box(input), src, dst));
            }
        });
    });
}

fn bench_denormalize(c: &mut Criterion) {
    let inputs = inputs();
    let range = FloatRange::new(20.0, 20000.0);
    let mut group = c.benchmark_group("denormalize");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    for (name, taper, around_center) in [
        ("linear", 0.5, false),
        ("tapered", 0.1, false),
        ("folded", 0.1, true),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &input in &inputs {
                    std::hint::black_box(denormalize(
                        std::hint::black_box(input),
                        range,
                        taper,
                        around_center,
                    ));
                }
            });
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let range = FloatRange::new(20.0, 20000.0);
    let values: Vec<f64> = inputs()
        .into_iter()
        .map(|x| denormalize(x, range, 0.1, true))
        .collect();

    c.bench_function("normalize_folded", |b| {
        b.iter(|| {
            for &value in &values {
                std::hint::black_box(normalize(std::hint::black_box(value), range, 0.1, true));
            }
        });
    });
}

fn bench_denormalize_f32(c: &mut Criterion) {
    let inputs: Vec<f32> = (0..=1000u16).map(|i| f32::from(i) / 1000.0).collect();
    let range = FloatRange::new(20.0f32, 20000.0);

    c.bench_function("denormalize_f32_folded", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(denormalize(std::hint::black_box(input), range, 0.1, true));
            }
        });
    });
}

fn bench_rounding(c: &mut Criterion) {
    let values: Vec<f64> = inputs().into_iter().map(|x| x * 1234.5678).collect();
    let mut group = c.benchmark_group("decimal");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("round_2", |b| {
        b.iter(|| {
            for &value in &values {
                std::hint::black_box(round(std::hint::black_box(value), 2));
            }
        });
    });
    group.bench_function("truncate_2", |b| {
        b.iter(|| {
            for &value in &values {
                std::hint::black_box(truncate(std::hint::black_box(value), 2));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_linear_map,
    bench_denormalize,
    bench_normalize,
    bench_denormalize_f32,
    bench_rounding
);
criterion_main!(benches);
