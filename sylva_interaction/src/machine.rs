// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use sylva_content::{ContentTree, NodeId, NodeKind};

use crate::state::InteractionState;

/// Receives "start this node" requests from [`NodeInteraction::on_node_activate`].
///
/// Implemented for closures taking `(&NodeId, NodeKind)`.
pub trait Navigator {
    /// Starts the branch, unit or lesson `id`.
    fn start(&mut self, id: &NodeId, kind: NodeKind);
}

impl<F> Navigator for F
where
    F: FnMut(&NodeId, NodeKind),
{
    fn start(&mut self, id: &NodeId, kind: NodeKind) {
        self(id, kind);
    }
}

/// Outcome of [`NodeInteraction::on_node_activate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The node is locked or unknown; nothing changed.
    Ignored,
    /// A module was expanded.
    Expanded,
    /// A module was collapsed.
    Collapsed,
    /// A node was selected and handed to the navigator.
    Started,
}

/// Node-level interaction state machine.
///
/// Hover and touch feed the same transitions: entering a node marks it
/// hovered, shows its card unless it is locked, and highlights its path to
/// the module. Several cards may be visible at once; each goes away with its
/// own leave, or all of them with [`on_outside_activate`](Self::on_outside_activate).
///
/// Ids that are not in the current tree are ignored by every operation.
#[derive(Clone, Debug)]
pub struct NodeInteraction {
    tree: Arc<ContentTree>,
    state: InteractionState,
    // Hovered nodes in entry order; the last one owns the highlighted path.
    hover_order: Vec<NodeId>,
}

impl Default for NodeInteraction {
    fn default() -> Self {
        Self::new(Arc::new(ContentTree::empty()))
    }
}

impl NodeInteraction {
    /// Creates a machine over `tree` with empty state.
    #[must_use]
    pub fn new(tree: Arc<ContentTree>) -> Self {
        Self {
            tree,
            state: InteractionState::default(),
            hover_order: Vec::new(),
        }
    }

    /// The current content snapshot.
    #[must_use]
    pub fn tree(&self) -> &Arc<ContentTree> {
        &self.tree
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Replaces the content snapshot and resets all state.
    pub fn set_content(&mut self, tree: Arc<ContentTree>) {
        self.tree = tree;
        self.hover_order.clear();
        self.state.clear();
    }

    /// Pointer entered node `id`.
    pub fn on_node_enter(&mut self, id: &str) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let id = node.id.clone();
        let locked = node.is_locked();

        self.hover_order.retain(|h| *h != id);
        self.hover_order.push(id.clone());
        self.state.hovered.insert(id.clone());
        if !locked {
            self.state.visible_cards.insert(id.clone());
        }
        self.highlight(id.as_str());
        self.state.bump();
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, locked, "node entered");
    }

    /// Pointer left node `id`.
    pub fn on_node_leave(&mut self, id: &str) {
        let was_hovered = self.state.hovered.remove(id);
        let had_card = self.state.visible_cards.remove(id);
        if !was_hovered && !had_card {
            return;
        }
        self.hover_order.retain(|h| h.as_str() != id);
        match self.hover_order.last().cloned() {
            Some(current) => self.highlight(current.as_str()),
            None => self.state.highlighted_path.clear(),
        }
        self.state.bump();
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id, "node left");
    }

    /// Touch started on node `id`. Same as [`on_node_enter`](Self::on_node_enter).
    pub fn on_node_touch_start(&mut self, id: &str) {
        self.on_node_enter(id);
    }

    /// Touch ended on node `id`. Same as [`on_node_leave`](Self::on_node_leave).
    pub fn on_node_touch_end(&mut self, id: &str) {
        self.on_node_leave(id);
    }

    /// Node `id` was clicked or tapped.
    ///
    /// Locked nodes are ignored. Modules toggle their expansion. Any other
    /// node is selected and passed to `navigator`.
    pub fn on_node_activate(&mut self, id: &str, navigator: &mut impl Navigator) -> Activation {
        let Some(node) = self.tree.get(id) else {
            return Activation::Ignored;
        };
        if node.is_locked() {
            #[cfg(feature = "tracing")]
            tracing::debug!(node = id, "activation of locked node ignored");
            return Activation::Ignored;
        }

        let id = node.id.clone();
        let kind = node.kind;
        let outcome = match kind {
            NodeKind::Module => {
                if self.state.expanded.remove(&id) {
                    Activation::Collapsed
                } else {
                    self.state.expanded.insert(id.clone());
                    Activation::Expanded
                }
            }
            NodeKind::Branch | NodeKind::Unit | NodeKind::Lesson => {
                self.state.selected.insert(id.clone());
                navigator.start(&id, kind);
                Activation::Started
            }
        };
        self.state.bump();
        #[cfg(feature = "tracing")]
        tracing::debug!(node = %id, %kind, ?outcome, "node activated");
        outcome
    }

    /// A click or tap landed on neither a node nor a visible card.
    ///
    /// Dismisses every visible card. Expansion and selection are kept.
    pub fn on_outside_activate(&mut self) {
        if self.state.visible_cards.is_empty() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(count = self.state.visible_cards.len(), "cards dismissed");
        self.state.visible_cards.clear();
        self.state.bump();
    }

    /// Collapses every expanded module.
    pub fn collapse_all(&mut self) {
        if self.state.expanded.is_empty() {
            return;
        }
        self.state.expanded.clear();
        self.state.bump();
    }

    /// Whether `id` is drawn in the detailed view.
    ///
    /// Modules and branches always are. Units and lessons only while their
    /// module is expanded.
    #[must_use]
    pub fn is_visible_in_detail(&self, id: &str) -> bool {
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        match node.kind {
            NodeKind::Module | NodeKind::Branch => true,
            NodeKind::Unit | NodeKind::Lesson => self
                .tree
                .module_of(id)
                .is_some_and(|m| self.state.expanded.contains(&m.id)),
        }
    }

    fn highlight(&mut self, id: &str) {
        self.state.highlighted_path.clear();
        self.state
            .highlighted_path
            .extend(self.tree.path_to_root(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_content::ContentNode;

    fn tree() -> Arc<ContentTree> {
        Arc::new(
            ContentTree::new([
                ContentNode::new("m", NodeKind::Module).with_children(["b"]),
                ContentNode::new("b", NodeKind::Branch)
                    .with_parent("m")
                    .with_children(["u"]),
                ContentNode::new("u", NodeKind::Unit).with_parent("b"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut machine = NodeInteraction::new(tree());
        machine.on_node_enter("nope");
        machine.on_node_leave("nope");
        let mut calls = 0;
        let outcome = machine.on_node_activate("nope", &mut |_: &NodeId, _: NodeKind| calls += 1);
        assert_eq!(outcome, Activation::Ignored);
        assert_eq!(calls, 0);
        assert!(machine.state().is_empty());
        assert_eq!(machine.state().revision(), 0);
        assert!(!machine.is_visible_in_detail("nope"));
    }

    #[test]
    fn reentering_moves_node_to_top_of_hover_order() {
        let mut machine = NodeInteraction::new(tree());
        machine.on_node_enter("u");
        machine.on_node_enter("m");
        machine.on_node_enter("u");
        machine.on_node_leave("u");
        assert_eq!(machine.hover_order, [NodeId::from("m")]);
        assert!(machine.state().is_highlighted("m"));
        assert!(!machine.state().is_highlighted("u"));
    }
}
