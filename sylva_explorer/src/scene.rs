// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Line, Rect};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use sylva_content::{ContentNode, NodeId};
use sylva_layout::PositionedNode;

bitflags::bitflags! {
    /// Interaction flags of a node in a [`Scene`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// A pointer hovers the node or a touch rests on it.
        const HOVERED     = 0b0000_0001;
        /// The node is on the path from the hovered node to its module.
        const HIGHLIGHTED = 0b0000_0010;
        /// The node was started.
        const SELECTED    = 0b0000_0100;
        /// The module is expanded.
        const EXPANDED    = 0b0000_1000;
        /// The node is locked.
        const LOCKED      = 0b0001_0000;
        /// The node's detail card is shown.
        const CARD        = 0b0010_0000;
    }
}

/// A node to draw, in world coordinates.
#[derive(Clone, Debug)]
pub struct SceneNode<'a> {
    /// Layout of the node, including its content.
    pub node: &'a PositionedNode,
    /// Interaction flags.
    pub flags: NodeFlags,
    /// Fill color.
    pub fill: Color,
}

/// A parent-child connector, in world coordinates.
#[derive(Clone, Debug)]
pub struct SceneEdge<'a> {
    /// The parent end.
    pub parent: &'a NodeId,
    /// The child end.
    pub child: &'a NodeId,
    /// Center to center segment.
    pub line: Line,
    /// Both ends are on the highlighted path.
    pub highlighted: bool,
}

/// A detail card, in view coordinates.
#[derive(Clone, Debug)]
pub struct SceneCard<'a> {
    /// The node the card describes.
    pub node: &'a PositionedNode,
    /// Card rectangle in view pixels.
    pub rect: Rect,
}

/// Display list for one frame.
///
/// Paint edges, then nodes, then cards, each in order. Node and edge
/// geometry is in world space and goes through [`Scene::transform`]; cards are
/// already in view space.
#[derive(Clone, Debug, Default)]
pub struct Scene<'a> {
    /// World → view transform.
    pub transform: Affine,
    /// Connectors.
    pub edges: Vec<SceneEdge<'a>>,
    /// Nodes, bottom to top.
    pub nodes: Vec<SceneNode<'a>>,
    /// Cards, bottom to top.
    pub cards: Vec<SceneCard<'a>>,
}

impl<'a> Scene<'a> {
    /// Finds the drawn node with this id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SceneNode<'a>> {
        self.nodes.iter().find(|n| n.node.node.id.as_str() == id)
    }

    /// Returns `true` if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty() && self.cards.is_empty()
    }
}

/// Fill used when a node has no usable color.
#[must_use]
pub fn neutral_fill() -> Color {
    Color::from_rgb8(0x9c, 0xa3, 0xaf)
}

/// Fill used for locked nodes regardless of their color.
#[must_use]
pub fn locked_fill() -> Color {
    Color::from_rgb8(0x4b, 0x55, 0x63)
}

/// Resolves the fill of `node` from its CSS color string.
pub(crate) fn node_fill(node: &ContentNode) -> Color {
    if node.is_locked() {
        return locked_fill();
    }
    let css = node.color.trim();
    if css.is_empty() {
        return neutral_fill();
    }
    parse_color(css).map_or_else(|_| neutral_fill(), |c| c.to_alpha_color::<Srgb>())
}
