//! Benchmarks for equation generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use geoeq::prelude::*;

/// A chain of perpendicular feet: each point is projected onto the line
/// through the previous two.
fn projection_chain(session: &mut Session, length: usize) -> Point {
    let mut a = Point::free(session, 0, 0);
    let mut b = Point::free(session, 1, 0);
    let mut c = Point::free(session, 0, 1);
    for _ in 0..length {
        let line = Line::through(session, &a, &b);
        let foot = Point::projection(session, &c, &line).unwrap_or_else(|_| c.clone());
        a = b;
        b = c;
        c = foot;
    }
    c
}

fn bench_projection_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_chain");

    for length in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("witness_off", length), &length, |b, &n| {
            b.iter(|| {
                let mut session = Session::new();
                black_box(projection_chain(&mut session, n));
                session.finish()
            });
        });
        group.bench_with_input(BenchmarkId::new("witness_on", length), &length, |b, &n| {
            b.iter(|| {
                let mut session =
                    Session::with_config(SessionConfig::default().with_witness(true));
                black_box(projection_chain(&mut session, n));
                session.finish()
            });
        });
    }

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_arithmetic");

    for size in [64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("sum_of_squares", size), &size, |b, &n| {
            b.iter(|| {
                let mut session = Session::new();
                let mut acc = session.fresh(0);
                for i in 0..n {
                    let v = session.fresh(i64::try_from(i).unwrap_or(0));
                    let sq = session.powi(&v, 2);
                    acc = session.add(&acc, &sq);
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let scene = Scene::from_json(
        r#"{
            "steps": [
                {"type": "free_point", "name": "A", "x": 0, "y": 0},
                {"type": "free_point", "name": "B", "x": 6, "y": 0},
                {"type": "free_point", "name": "C", "x": 2, "y": 4},
                {"type": "pp_bisector", "name": "AB", "a": "A", "b": "B"},
                {"type": "pp_bisector", "name": "BC", "a": "B", "b": "C"},
                {"type": "intersection_point", "name": "O", "l1": "AB", "l2": "BC"},
                {"type": "invariant", "kind": "point_distance", "a": "O", "b": "A"},
                {"type": "locus", "name": "circumcenter", "point": "O"}
            ]
        }"#,
    )
    .unwrap();

    c.bench_function("circumcenter_scene", |b| {
        b.iter(|| black_box(scene.evaluate(SessionConfig::default())));
    });
}

criterion_group!(benches, bench_projection_chain, bench_arithmetic, bench_scene);
criterion_main!(benches);
