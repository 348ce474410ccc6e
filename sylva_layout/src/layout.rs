// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use sylva_content::{ContentNode, NodeId, TreeError};

use crate::params::ViewMode;

/// A content node together with its computed placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
    /// The content record.
    pub node: ContentNode,
    /// Center of the node disc in world space.
    pub position: Point,
    /// Radius of the node disc, from the node's kind.
    pub radius: f64,
    /// Direction, in radians, along which this node's own children fan out.
    pub heading: f64,
}

impl PositionedNode {
    /// Bounding box of the node disc.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, (2.0 * self.radius, 2.0 * self.radius))
    }

    /// Returns `true` if `pt` lies on the node disc.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        (pt - self.position).hypot2() <= self.radius * self.radius
    }
}

/// Result of a layout pass: node id to placement.
///
/// A `Layout` is never patched in place; new content or a new view mode
/// produces a new value. Iteration follows placement order (each module
/// followed depth-first by its descendants), which doubles as paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    mode: ViewMode,
    nodes: HashMap<NodeId, PositionedNode>,
    order: Vec<NodeId>,
}

impl Layout {
    pub(crate) fn with_capacity(mode: ViewMode, capacity: usize) -> Self {
        Self {
            mode,
            nodes: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, placed: PositionedNode) {
        self.order.push(placed.node.id.clone());
        self.nodes.insert(placed.node.id.clone(), placed);
    }

    /// View mode this layout was computed for.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Placement of `id`, or `None` if it is not drawn in this layout.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` was placed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Placed nodes in placement order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PositionedNode> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Parent/child pairs where both ends were placed, in placement order of the child.
    pub fn edges(&self) -> impl Iterator<Item = (&PositionedNode, &PositionedNode)> + '_ {
        self.iter().filter_map(|child| {
            let parent = self.nodes.get(child.node.parent.as_ref()?)?;
            Some((parent, child))
        })
    }

    /// Union of all node discs, or `None` for an empty layout.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.iter()
            .map(PositionedNode::bounds)
            .reduce(|acc, r| acc.union(r))
    }
}

/// Error returned by [`compute_layout`](crate::compute_layout).
#[derive(Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The node list does not form a valid content tree.
    InvalidTree(TreeError),
}

impl LayoutError {
    /// The node that caused the failure.
    #[must_use]
    pub fn node(&self) -> &NodeId {
        match self {
            Self::InvalidTree(err) => &err.node,
        }
    }
}

impl From<TreeError> for LayoutError {
    fn from(err: TreeError) -> Self {
        Self::InvalidTree(err)
    }
}

impl fmt::Debug for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTree(err) => write!(f, "LayoutError::InvalidTree({err:?})"),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTree(err) => write!(f, "cannot lay out content: {err}"),
        }
    }
}

impl core::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidTree(err) => Some(err),
        }
    }
}
