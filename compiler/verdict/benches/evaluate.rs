#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Evaluation benchmarks.
//!
//! Compile once, evaluate many: the steady-state cost a host pays per
//! context, plus the one-off compile cost for comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use verdict::{Context, Engine};

const RULES: &[(&str, &str)] = &[
    ("compare", "score > 85"),
    ("logic", "score > 85 AND status IN ['active', 'trial'] AND NOT banned"),
    ("arith", "(price * quantity - discount) / 100 >= 25"),
    ("path", "user.profile.age >= 18 AND user.roles CONTAINS 'admin'"),
    ("call", "len(lower(trim(status))) > 3 AND abs(delta) < 10"),
];

fn sample_context(i: i64) -> Context {
    Context::from_json_str(&format!(
        r#"{{
            "score": {score},
            "status": " Active ",
            "banned": false,
            "price": 1999,
            "quantity": {i},
            "discount": 150,
            "delta": -4,
            "user": {{"profile": {{"age": 30}}, "roles": ["admin", "ops"]}}
        }}"#,
        score = 50 + i % 50,
    ))
    .unwrap()
}

fn bench_compile(c: &mut Criterion) {
    let engine = Engine::new();
    let mut group = c.benchmark_group("compile");
    for (name, source) in RULES {
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, source| {
            b.iter(|| engine.compile(black_box(source)).unwrap());
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = Engine::new();
    let ctx = sample_context(7);
    let mut group = c.benchmark_group("evaluate");
    for (name, source) in RULES {
        let program = engine.compile(source).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &program, |b, program| {
            b.iter(|| engine.evaluate(black_box(program), &ctx).unwrap());
        });
    }
    group.finish();
}

fn bench_evaluate_many(c: &mut Criterion) {
    let engine = Engine::new();
    let program = engine.compile(RULES[1].1).unwrap();
    let mut group = c.benchmark_group("evaluate_many");
    for size in [100usize, 1_000, 10_000] {
        let contexts: Vec<Context> = (0..size as i64).map(sample_context).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &contexts, |b, contexts| {
            b.iter(|| engine.evaluate_many(&program, black_box(contexts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_evaluate, bench_evaluate_many);
criterion_main!(benches);
