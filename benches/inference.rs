//! Benchmarks for the fuzzy inference pipeline
//!
//! One full evaluation is a handful of float compares and interpolations;
//! these exist to catch accidental regressions if the rule table grows.

use arena_mind::fuzzy::{CombatSample, Shape, TacticalMind};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let scenarios = [
        ("healthy_close", CombatSample::new(2.0, 90.0, 0.0, 60.0)),
        ("wounded_mid", CombatSample::new(12.0, 50.0, 0.0, 60.0)),
        ("spam_pressure", CombatSample::new(12.0, 50.0, 10.0, 60.0)),
        ("null_activation", CombatSample::new(200.0, 50.0, 0.0, 50.0)),
    ];
    for (name, sample) in scenarios {
        group.bench_with_input(BenchmarkId::from_parameter(name), &sample, |b, &sample| {
            let mut mind = TacticalMind::new().unwrap();
            b.iter(|| mind.evaluate(black_box(sample)));
        });
    }

    group.finish();
}

fn benchmark_membership_degree(c: &mut Criterion) {
    let far = Shape::trapezoid(10.0, 16.0, 100.0, 100.0);
    c.bench_function("trapezoid_degree", |b| {
        b.iter(|| far.degree(black_box(42.0)));
    });
}

criterion_group!(benches, benchmark_evaluate, benchmark_membership_degree);
criterion_main!(benches);
