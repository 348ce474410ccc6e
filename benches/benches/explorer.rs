// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame explorer costs: hit testing, hover sweeps and display list builds.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use sylva_content::{ContentNode, NodeId, NodeKind};
use sylva_explorer::{Explorer, ExplorerConfig, PointerId, ViewMode};

fn curriculum(modules: usize, fan: usize) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    for m in 0..modules {
        let module = format!("m{m}");
        let branches: Vec<String> = (0..fan).map(|b| format!("{module}.b{b}")).collect();
        nodes.push(
            ContentNode::new(module.as_str(), NodeKind::Module)
                .with_children(branches.iter().map(String::as_str)),
        );
        for branch in &branches {
            let units: Vec<String> = (0..fan).map(|u| format!("{branch}.u{u}")).collect();
            nodes.push(
                ContentNode::new(branch.as_str(), NodeKind::Branch)
                    .with_parent(module.as_str())
                    .with_children(units.iter().map(String::as_str)),
            );
            for unit in units {
                nodes.push(ContentNode::new(unit, NodeKind::Unit).with_parent(branch.as_str()));
            }
        }
    }
    nodes
}

fn explorer(modules: usize, fan: usize) -> Explorer<impl FnMut(&NodeId, NodeKind)> {
    let mut ex = Explorer::new(
        ExplorerConfig::default(),
        Size::new(1280.0, 800.0),
        |_: &NodeId, _: NodeKind| {},
    );
    ex.set_content(curriculum(modules, fan)).unwrap();
    ex.set_view_mode(ViewMode::Detailed);
    for m in 0..modules {
        ex.activate(&format!("m{m}"));
    }
    ex.fit_to_screen();
    ex
}

/// A coarse grid of view points to hit test.
fn grid(size: Size, step: f64) -> Vec<Point> {
    let mut points = Vec::new();
    let mut y = 0.0;
    while y < size.height {
        let mut x = 0.0;
        while x < size.width {
            points.push(Point::new(x, y));
            x += step;
        }
        y += step;
    }
    points
}

fn bench_explorer(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer");
    let samples = grid(Size::new(1280.0, 800.0), 40.0);

    for (modules, fan) in [(6_usize, 3_usize), (16, 5)] {
        let label = format!("{modules}x{fan}");
        let mut ex = explorer(modules, fan);

        group.bench_function(BenchmarkId::new("hit_test_grid", &label), |b| {
            b.iter(|| {
                for &p in &samples {
                    black_box(ex.hit_test(p));
                }
            });
        });

        group.bench_function(BenchmarkId::new("scene", &label), |b| {
            b.iter(|| black_box(ex.scene().nodes.len()));
        });

        group.bench_function(BenchmarkId::new("hover_sweep", &label), |b| {
            b.iter(|| {
                for &p in &samples {
                    black_box(ex.pointer_move(PointerId::Mouse, p));
                }
                ex.pointer_leave(PointerId::Mouse);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_explorer);
criterion_main!(benches);
