// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use sylva_content::NodeId;

/// Per-node interaction flags, owned by [`crate::NodeInteraction`].
///
/// Every set is keyed by [`NodeId`]. The state is read-only from outside; the
/// revision counter bumps whenever any set changes so renderers can skip
/// unchanged frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub(crate) hovered: HashSet<NodeId>,
    pub(crate) visible_cards: HashSet<NodeId>,
    pub(crate) highlighted_path: HashSet<NodeId>,
    pub(crate) expanded: HashSet<NodeId>,
    pub(crate) selected: HashSet<NodeId>,
    pub(crate) revision: u64,
}

impl InteractionState {
    /// Nodes under a hovering pointer or a resting touch.
    #[must_use]
    pub fn hovered(&self) -> &HashSet<NodeId> {
        &self.hovered
    }

    /// Nodes whose detail card is shown.
    #[must_use]
    pub fn visible_cards(&self) -> &HashSet<NodeId> {
        &self.visible_cards
    }

    /// The most recently hovered node and its ancestors.
    #[must_use]
    pub fn highlighted_path(&self) -> &HashSet<NodeId> {
        &self.highlighted_path
    }

    /// Modules expanded in the detailed view.
    #[must_use]
    pub fn expanded(&self) -> &HashSet<NodeId> {
        &self.expanded
    }

    /// Nodes that were started.
    #[must_use]
    pub fn selected(&self) -> &HashSet<NodeId> {
        &self.selected
    }

    /// Returns `true` if `id` is hovered.
    #[must_use]
    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.contains(id)
    }

    /// Returns `true` if the card for `id` is shown.
    #[must_use]
    pub fn has_card(&self, id: &str) -> bool {
        self.visible_cards.contains(id)
    }

    /// Returns `true` if `id` is on the highlighted path.
    #[must_use]
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted_path.contains(id)
    }

    /// Returns `true` if `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Monotonic change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if every set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hovered.is_empty()
            && self.visible_cards.is_empty()
            && self.highlighted_path.is_empty()
            && self.expanded.is_empty()
            && self.selected.is_empty()
    }

    pub(crate) fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Empties every set, keeping the revision moving forward.
    pub(crate) fn clear(&mut self) {
        let revision = self.revision;
        *self = Self {
            revision,
            ..Self::default()
        };
        self.bump();
    }
}
