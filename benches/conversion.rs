//! Benchmarks for color conversion and palette regeneration.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swatchkit::random::seeded;
use swatchkit::{hex_to_hsl, hsl_to_hex, GeneratorConfig, Palette, Strategy};

/// Benchmark HSL -> hex over a sweep of hues
fn bench_hsl_to_hex(c: &mut Criterion) {
    c.bench_function("hsl_to_hex", |b| {
        b.iter(|| {
            for h in 0..360u16 {
                black_box(hsl_to_hex(f64::from(h), black_box(75.0), black_box(55.0)));
            }
        })
    });
}

/// Benchmark hex parsing + hex -> HSL
fn bench_hex_to_hsl(c: &mut Criterion) {
    c.bench_function("hex_to_hsl", |b| {
        b.iter(|| hex_to_hsl(black_box("#3366CC")).expect("valid hex"))
    });
}

/// Benchmark each regeneration strategy on a partly locked palette
fn bench_strategies(c: &mut Criterion) {
    let mut rng = seeded(1);
    let config = GeneratorConfig::default();
    let palette = Palette::random(&mut rng)
        .toggle_lock("color-2")
        .expect("slot exists");

    let mut group = c.benchmark_group("regenerate");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.apply(black_box(&palette), &mut rng, &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hsl_to_hex, bench_hex_to_hsl, bench_strategies);
criterion_main!(benches);
