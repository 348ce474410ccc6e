// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial layout cost as curricula grow.
//!
//! Uses a deterministic synthetic curriculum: `modules` modules, each with
//! `fan` branches, `fan` units per branch and `fan` lessons per unit.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sylva_content::{ContentNode, ContentTree, NodeKind, Ring};
use sylva_layout::{LayoutParams, ViewMode, compute_layout, compute_tree_layout};

fn curriculum(modules: usize, fan: usize) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    for m in 0..modules {
        let module = format!("m{m}");
        let ring = if m % 3 == 2 { Ring::Secondary } else { Ring::Primary };
        let branches: Vec<String> = (0..fan).map(|b| format!("{module}.b{b}")).collect();
        nodes.push(
            ContentNode::new(module.as_str(), NodeKind::Module)
                .with_ring(ring)
                .with_children(branches.iter().map(String::as_str)),
        );
        for branch in &branches {
            let units: Vec<String> = (0..fan).map(|u| format!("{branch}.u{u}")).collect();
            nodes.push(
                ContentNode::new(branch.as_str(), NodeKind::Branch)
                    .with_parent(module.as_str())
                    .with_children(units.iter().map(String::as_str)),
            );
            for unit in &units {
                let lessons: Vec<String> = (0..fan).map(|l| format!("{unit}.l{l}")).collect();
                nodes.push(
                    ContentNode::new(unit.as_str(), NodeKind::Unit)
                        .with_parent(branch.as_str())
                        .with_children(lessons.iter().map(String::as_str)),
                );
                for lesson in &lessons {
                    nodes.push(
                        ContentNode::new(lesson.as_str(), NodeKind::Lesson)
                            .with_parent(unit.as_str()),
                    );
                }
            }
        }
    }
    nodes
}

fn bench_layout(c: &mut Criterion) {
    let params = LayoutParams::default();
    let mut group = c.benchmark_group("layout/radial");

    for (modules, fan) in [(6_usize, 3_usize), (12, 4), (24, 6)] {
        let nodes = curriculum(modules, fan);
        let tree = ContentTree::new(nodes.iter().cloned()).unwrap();
        group.throughput(Throughput::Elements(nodes.len() as u64));
        let label = format!("{modules}x{fan}");

        group.bench_with_input(BenchmarkId::new("validate_and_place", &label), &nodes, |b, nodes| {
            b.iter(|| black_box(compute_layout(nodes, ViewMode::Detailed, &params)));
        });
        group.bench_with_input(BenchmarkId::new("place_detailed", &label), &tree, |b, tree| {
            b.iter(|| black_box(compute_tree_layout(tree, ViewMode::Detailed, &params)));
        });
        group.bench_with_input(BenchmarkId::new("place_overview", &label), &tree, |b, tree| {
            b.iter(|| black_box(compute_tree_layout(tree, ViewMode::Overview, &params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
