// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::Point;
use sylva_content::NodeKind;

/// How much of the tree is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ViewMode {
    /// Compact radii; levels deeper than [`LayoutParams::overview_depth`] are omitted.
    Overview,
    /// Every level at full radius.
    #[default]
    Detailed,
}

/// Placement parameters for one child level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelParams {
    /// Distance from the parent at which children of this level are placed.
    pub orbit: f64,
    /// Minimum angle between neighbouring siblings, in radians.
    pub spread: f64,
    /// Radius of a node of this level.
    pub node_radius: f64,
}

/// Parameters for [`compute_layout`](crate::compute_layout).
///
/// Defaults reproduce the curriculum tree's reference look: a 320 px primary
/// ring, a 620 px secondary ring, and orbits and spreads that shrink level by
/// level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutParams {
    /// Center of the module rings in world space.
    pub center: Point,
    /// Radius of the ring holding primary modules.
    pub primary_ring_radius: f64,
    /// Radius of the ring holding secondary modules.
    pub secondary_ring_radius: f64,
    /// Radius of a module node.
    pub module_radius: f64,
    /// Branch placement around modules.
    pub branch: LevelParams,
    /// Unit placement around branches.
    pub unit: LevelParams,
    /// Lesson placement around units.
    pub lesson: LevelParams,
    /// Factor applied to the overlap-free sibling angle. Values below `1.0` are treated as `1.0`.
    pub spread_enlargement: f64,
    /// Widest arc, in radians, a group of siblings may span around its parent's heading.
    ///
    /// Capped at half a turn so a fan never reaches back toward the center;
    /// non-positive values mean half a turn. Siblings that need more room are
    /// pushed onto a larger orbit instead.
    pub max_fan_arc: f64,
    /// Clear space kept between neighbouring sibling discs.
    pub sibling_gap: f64,
    /// Scale applied to ring and orbit radii in [`ViewMode::Overview`].
    pub overview_scale: f64,
    /// Deepest kind kept in [`ViewMode::Overview`].
    pub overview_depth: NodeKind,
}

impl LayoutParams {
    /// Placement parameters for children of the given kind, or `None` for modules.
    #[must_use]
    pub fn level(&self, kind: NodeKind) -> Option<&LevelParams> {
        match kind {
            NodeKind::Module => None,
            NodeKind::Branch => Some(&self.branch),
            NodeKind::Unit => Some(&self.unit),
            NodeKind::Lesson => Some(&self.lesson),
        }
    }

    /// Disc radius for a node of the given kind.
    #[must_use]
    pub fn node_radius(&self, kind: NodeKind) -> f64 {
        self.level(kind)
            .map_or(self.module_radius, |level| level.node_radius)
    }

    /// Returns `true` if nodes of `kind` are laid out in `mode`.
    #[must_use]
    pub fn includes(&self, kind: NodeKind, mode: ViewMode) -> bool {
        match mode {
            ViewMode::Detailed => true,
            ViewMode::Overview => kind.depth() <= self.overview_depth.depth(),
        }
    }

    /// The effective [`max_fan_arc`](Self::max_fan_arc).
    #[must_use]
    pub fn fan_arc(&self) -> f64 {
        if self.max_fan_arc > 0.0 {
            self.max_fan_arc.min(PI)
        } else {
            PI
        }
    }

    /// Radius scale for `mode`.
    #[must_use]
    pub fn scale(&self, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Detailed => 1.0,
            ViewMode::Overview => self.overview_scale,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            primary_ring_radius: 320.0,
            secondary_ring_radius: 620.0,
            module_radius: 44.0,
            branch: LevelParams {
                orbit: 200.0,
                spread: 16.0 * PI / 180.0,
                node_radius: 30.0,
            },
            unit: LevelParams {
                orbit: 150.0,
                spread: 14.0 * PI / 180.0,
                node_radius: 20.0,
            },
            lesson: LevelParams {
                orbit: 100.0,
                spread: 12.0 * PI / 180.0,
                node_radius: 11.0,
            },
            spread_enlargement: 1.2,
            max_fan_arc: PI,
            sibling_gap: 8.0,
            overview_scale: 0.6,
            overview_depth: NodeKind::Branch,
        }
    }
}
