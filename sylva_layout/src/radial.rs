// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Point, Vec2};
use sylva_content::{ContentNode, ContentTree, Ring};

use crate::layout::{Layout, LayoutError, PositionedNode};
use crate::params::{LayoutParams, LevelParams, ViewMode};

/// Validates `nodes` and lays them out.
///
/// `nodes` may come in any order; module order on each ring follows their
/// order in the slice and children follow their parent's `children` list, so
/// equal inputs always produce bit-identical layouts.
///
/// Fails with [`LayoutError::InvalidTree`] naming the first malformed node.
pub fn compute_layout(
    nodes: &[ContentNode],
    mode: ViewMode,
    params: &LayoutParams,
) -> Result<Layout, LayoutError> {
    let tree = ContentTree::new(nodes.iter().cloned())?;
    Ok(compute_tree_layout(&tree, mode, params))
}

/// Lays out an already validated tree.
#[must_use]
pub fn compute_tree_layout(tree: &ContentTree, mode: ViewMode, params: &LayoutParams) -> Layout {
    let mut placer = Placer {
        tree,
        params,
        mode,
        scale: params.scale(mode),
        layout: Layout::with_capacity(mode, tree.len()),
    };

    let (primary, secondary): (Vec<&ContentNode>, Vec<&ContentNode>) =
        tree.roots().partition(|m| m.ring == Ring::Primary);
    placer.ring(&primary, params.primary_ring_radius, 0.0);
    // Half-step rotation so the outer ring sits between inner modules.
    placer.ring(&secondary, params.secondary_ring_radius, 0.5);

    placer.layout
}

struct Placer<'a> {
    tree: &'a ContentTree,
    params: &'a LayoutParams,
    mode: ViewMode,
    scale: f64,
    layout: Layout,
}

impl Placer<'_> {
    fn ring(&mut self, modules: &[&ContentNode], radius: f64, offset: f64) {
        if modules.is_empty() {
            return;
        }
        let step = TAU / modules.len() as f64;
        let radius = radius * self.scale;
        for (i, module) in modules.iter().enumerate() {
            let heading = -FRAC_PI_2 + (i as f64 + offset) * step;
            let position = self.params.center + Vec2::from_angle(heading) * radius;
            self.place(module, position, heading);
        }
    }

    fn place(&mut self, node: &ContentNode, position: Point, heading: f64) {
        self.layout.push(PositionedNode {
            node: node.clone(),
            position,
            radius: self.params.node_radius(node.kind),
            heading,
        });

        let Some(child_kind) = node.kind.child_kind() else {
            return;
        };
        if !self.params.includes(child_kind, self.mode) {
            return;
        }
        let Some(level) = self.params.level(child_kind) else {
            return;
        };
        let children: Vec<&ContentNode> = self.tree.children(node.id.as_str()).collect();
        if children.is_empty() {
            return;
        }

        let fan = Fan::new(level, children.len(), self.params, self.scale);
        let mid = (children.len() - 1) as f64 / 2.0;
        for (i, child) in children.into_iter().enumerate() {
            let angle = heading + (i as f64 - mid) * fan.step;
            let child_pos = position + Vec2::from_angle(angle) * fan.orbit;
            self.place(child, child_pos, angle);
        }
    }
}

/// Orbit and sibling step for one group of siblings.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Fan {
    orbit: f64,
    step: f64,
}

impl Fan {
    fn new(level: &LevelParams, count: usize, params: &LayoutParams, scale: f64) -> Self {
        let orbit = level.orbit * scale;
        let chord = 2.0 * level.node_radius + params.sibling_gap;
        let enlargement = params.spread_enlargement.max(1.0);
        let step = level
            .spread
            .max(chord_angle(chord, orbit) * enlargement);
        if count < 2 {
            return Self { orbit, step };
        }

        let widest = params.fan_arc() / (count - 1) as f64;
        if step <= widest {
            return Self { orbit, step };
        }
        // Narrow the step to fit the arc and push the orbit out until the
        // enlarged overlap-free angle fits that step.
        let half = widest / (2.0 * enlargement);
        let needed = chord / (2.0 * Vec2::from_angle(half).y);
        Self {
            orbit: orbit.max(needed),
            step: widest,
        }
    }
}

/// Angle subtended at the center of a circle of `radius` by a chord of length `chord`.
fn chord_angle(chord: f64, radius: f64) -> f64 {
    let half = (chord / (2.0 * radius)).min(1.0);
    2.0 * Vec2::new((1.0 - half * half).sqrt(), half).atan2()
}
