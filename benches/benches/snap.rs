// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_snap::{
    PlacementSession, SlotLayout, SnapPolicy, Transform, commit, detect_gaps, finalize,
};

fn slot() -> Rect {
    Rect::from_origin_size((0.0, 0.0), (400.0, 600.0))
}

fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/finalize");

    // One input per plan variant, plus the degenerate early exit.
    let cases = [
        ("no_op", Rect::new(-10.0, -10.0, 410.0, 610.0)),
        ("translate", Rect::new(20.0, 10.0, 420.0, 610.0)),
        ("reset", Rect::new(5.0, 5.0, 395.0, 595.0)),
        ("degenerate", Rect::new(0.0, 0.0, 0.0, 0.0)),
    ];
    for (name, photo) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &photo, |b, photo| {
            b.iter(|| black_box(finalize(Transform::DEFAULT, slot(), black_box(*photo))));
        });
    }

    group.bench_function("detect_gaps", |b| {
        let photo = Rect::new(20.0, 10.0, 420.0, 610.0);
        b.iter(|| black_box(detect_gaps(slot(), black_box(photo))));
    });

    group.finish();
}

fn bench_session_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/session");
    let layout = SlotLayout::new(slot(), Size::new(1600.0, 1200.0));
    let policy = SnapPolicy::default();

    group.bench_function("commit_via_layout", |b| {
        let transform = Transform::new(0.9, 0.01, 1.0);
        b.iter(|| black_box(commit(&layout, black_box(transform), &policy)));
    });

    // A burst of raw edits followed by one commit, as a drag would produce.
    group.bench_function("drag_then_commit", |b| {
        b.iter(|| {
            let mut session = PlacementSession::new(Transform::DEFAULT);
            session.begin();
            for _ in 0..64 {
                session.pan_by(black_box(0.01), black_box(-0.002));
            }
            black_box(session.commit(&layout, &policy))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_finalize, bench_session_commit);
criterion_main!(benches);
