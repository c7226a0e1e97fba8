// Copyright 2025 the Rectform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample and per-redraw costs of the transform engine.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use rectform_affine::{AffineState, CanonicalShape, MatrixState, TransformState, project};
use rectform_gesture::{GestureConfig, GestureInterpreter, Mode};

fn drag_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(100.0 + 60.0 * t.cos(), 100.0 + 60.0 * t.sin())
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    let shape = CanonicalShape::DEFAULT;

    let mut affine = AffineState::new();
    affine.translate(Vec2::new(12.0, -4.0));
    affine.rotate(37.0);
    affine.set_scale(1.2, 1.2);
    group.bench_function("affine_state", |b| {
        b.iter(|| black_box(project(&shape, black_box(&affine))));
    });

    let mut matrix = MatrixState::new();
    matrix.translate(Vec2::new(12.0, -4.0));
    matrix.rotate(37.0);
    matrix.set_scale(1.2, 1.2);
    group.bench_function("matrix_state", |b| {
        b.iter(|| black_box(project(&shape, black_box(&matrix))));
    });

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");

    for len in [16usize, 256, 4_096] {
        let path = drag_path(len);
        group.bench_with_input(
            BenchmarkId::new("translate_rotate_scale", len),
            &path,
            |b, path| {
                b.iter_batched(
                    || {
                        let mut g = GestureInterpreter::new();
                        g.set_mode(Mode::TranslateRotateScale);
                        g.on_pointer_down(Point::new(100.0, 100.0));
                        g
                    },
                    |mut g| {
                        for p in path {
                            g.on_pointer_move(*p);
                        }
                        black_box(g.current_polygon());
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("matrix_backend", len), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut g =
                        GestureInterpreter::with_state(MatrixState::new(), GestureConfig::default());
                    g.set_mode(Mode::TranslateRotateScale);
                    g.on_pointer_down(Point::new(100.0, 100.0));
                    g
                },
                |mut g| {
                    for p in path {
                        g.on_pointer_move(*p);
                    }
                    black_box(g.current_polygon());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_project, bench_drag);
criterion_main!(benches);
