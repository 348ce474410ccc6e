// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use smallvec::SmallVec;

use crate::node::{ContentNode, NodeId, NodeKind};

/// Maximum number of levels in a content tree.
pub const MAX_DEPTH: usize = NodeKind::ALL.len();

/// Why a node snapshot was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeErrorKind {
    /// Another node with the same id appeared earlier in the snapshot.
    DuplicateId,
    /// A module names a parent. Modules are always roots.
    UnexpectedParent(NodeId),
    /// A branch, unit or lesson has no parent.
    MissingParent,
    /// The named parent does not exist.
    UnknownParent(NodeId),
    /// The parent exists but is not of the immediately shallower kind.
    ParentKindMismatch {
        /// The parent that was named.
        parent: NodeId,
        /// The kind the parent should have.
        expected: NodeKind,
        /// The kind the parent has.
        found: NodeKind,
    },
    /// The parent exists but does not list this node among its children.
    NotListedByParent(NodeId),
    /// A listed child does not exist.
    UnknownChild(NodeId),
    /// A listed child names a different parent.
    ChildParentMismatch(NodeId),
    /// A child is listed more than once.
    DuplicateChild(NodeId),
}

/// Error returned when a node snapshot does not form a valid content tree.
#[derive(Clone, PartialEq, Eq)]
pub struct TreeError {
    /// The offending node.
    pub node: NodeId,
    /// What is wrong with it.
    pub kind: TreeErrorKind,
}

impl TreeError {
    fn new(node: &NodeId, kind: TreeErrorKind) -> Self {
        Self {
            node: node.clone(),
            kind,
        }
    }
}

impl fmt::Debug for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeError {{ node: {:?}, kind: {:?} }}", self.node, self.kind)
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.node;
        match &self.kind {
            TreeErrorKind::DuplicateId => write!(f, "node `{node}` appears more than once"),
            TreeErrorKind::UnexpectedParent(parent) => {
                write!(f, "module `{node}` must be a root but names parent `{parent}`")
            }
            TreeErrorKind::MissingParent => write!(f, "node `{node}` has no parent"),
            TreeErrorKind::UnknownParent(parent) => {
                write!(f, "node `{node}` names unknown parent `{parent}`")
            }
            TreeErrorKind::ParentKindMismatch {
                parent,
                expected,
                found,
            } => write!(
                f,
                "node `{node}` needs a {expected} parent but `{parent}` is a {found}"
            ),
            TreeErrorKind::NotListedByParent(parent) => {
                write!(f, "node `{node}` is not listed among the children of `{parent}`")
            }
            TreeErrorKind::UnknownChild(child) => {
                write!(f, "node `{node}` lists unknown child `{child}`")
            }
            TreeErrorKind::ChildParentMismatch(child) => {
                write!(f, "node `{node}` lists child `{child}` which names another parent")
            }
            TreeErrorKind::DuplicateChild(child) => {
                write!(f, "node `{node}` lists child `{child}` more than once")
            }
        }
    }
}

impl core::error::Error for TreeError {}

/// A validated, immutable snapshot of the curriculum.
///
/// Nodes keep the order they were supplied in; roots (modules) are reported in
/// that order and children in the order of their parent's `children` list, so
/// everything derived from a tree is deterministic for a given snapshot.
#[derive(Clone, Debug, Default)]
pub struct ContentTree {
    nodes: Vec<ContentNode>,
    index: HashMap<NodeId, usize>,
    roots: Vec<usize>,
}

impl ContentTree {
    /// Validates `nodes` and builds a tree.
    ///
    /// Fails on the first structural problem found, naming the node at fault.
    pub fn new(nodes: impl IntoIterator<Item = ContentNode>) -> Result<Self, TreeError> {
        let nodes: Vec<ContentNode> = nodes.into_iter().collect();
        let mut index = HashMap::with_capacity(nodes.len());
        for (slot, node) in nodes.iter().enumerate() {
            match index.entry(node.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(TreeError::new(&node.id, TreeErrorKind::DuplicateId));
                }
                Entry::Vacant(v) => {
                    v.insert(slot);
                }
            }
        }

        let mut roots = Vec::new();
        for (slot, node) in nodes.iter().enumerate() {
            match (node.kind.parent_kind(), &node.parent) {
                (None, None) => roots.push(slot),
                (None, Some(parent)) => {
                    return Err(TreeError::new(
                        &node.id,
                        TreeErrorKind::UnexpectedParent(parent.clone()),
                    ));
                }
                (Some(_), None) => {
                    return Err(TreeError::new(&node.id, TreeErrorKind::MissingParent));
                }
                (Some(expected), Some(parent_id)) => {
                    let Some(&parent_slot) = index.get(parent_id) else {
                        return Err(TreeError::new(
                            &node.id,
                            TreeErrorKind::UnknownParent(parent_id.clone()),
                        ));
                    };
                    let parent = &nodes[parent_slot];
                    if parent.kind != expected {
                        return Err(TreeError::new(
                            &node.id,
                            TreeErrorKind::ParentKindMismatch {
                                parent: parent_id.clone(),
                                expected,
                                found: parent.kind,
                            },
                        ));
                    }
                    if !parent.children.contains(&node.id) {
                        return Err(TreeError::new(
                            &node.id,
                            TreeErrorKind::NotListedByParent(parent_id.clone()),
                        ));
                    }
                }
            }

            for (i, child_id) in node.children.iter().enumerate() {
                if node.children[..i].contains(child_id) {
                    return Err(TreeError::new(
                        &node.id,
                        TreeErrorKind::DuplicateChild(child_id.clone()),
                    ));
                }
                let Some(&child_slot) = index.get(child_id) else {
                    return Err(TreeError::new(
                        &node.id,
                        TreeErrorKind::UnknownChild(child_id.clone()),
                    ));
                };
                if nodes[child_slot].parent.as_ref() != Some(&node.id) {
                    return Err(TreeError::new(
                        &node.id,
                        TreeErrorKind::ChildParentMismatch(child_id.clone()),
                    ));
                }
            }
        }

        Ok(Self {
            nodes,
            index,
            roots,
        })
    }

    /// Returns an empty tree.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContentNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Returns `true` if a node with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over all nodes in snapshot order.
    pub fn iter(&self) -> core::slice::Iter<'_, ContentNode> {
        self.nodes.iter()
    }

    /// Iterates over the modules in snapshot order.
    pub fn roots(&self) -> impl Iterator<Item = &ContentNode> + '_ {
        self.roots.iter().map(|&slot| &self.nodes[slot])
    }

    /// Iterates over the children of `id` in their listed order.
    ///
    /// Unknown ids have no children.
    pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a ContentNode> + use<'a> {
        self.get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.get(child.as_str()))
    }

    /// Returns the parent of `id`, if any.
    #[must_use]
    pub fn parent(&self, id: &str) -> Option<&ContentNode> {
        self.get(id)?.parent.as_ref().and_then(|p| self.get(p.as_str()))
    }

    /// Walks from the parent of `id` up to its module.
    ///
    /// The node itself is not yielded. Unknown ids yield nothing.
    #[must_use]
    pub fn ancestors(&self, id: &str) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
            steps: 0,
        }
    }

    /// Returns `id` followed by its ancestors up to the module.
    ///
    /// Empty for unknown ids.
    #[must_use]
    pub fn path_to_root(&self, id: &str) -> SmallVec<[NodeId; MAX_DEPTH]> {
        let mut path = SmallVec::new();
        if let Some(node) = self.get(id) {
            path.push(node.id.clone());
            path.extend(self.ancestors(id).map(|n| n.id.clone()));
        }
        path
    }

    /// Returns the module `id` belongs to (the node itself for modules).
    #[must_use]
    pub fn module_of(&self, id: &str) -> Option<&ContentNode> {
        let node = self.get(id)?;
        match node.kind {
            NodeKind::Module => Some(node),
            _ => self.ancestors(id).last(),
        }
    }
}

impl<'a> IntoIterator for &'a ContentTree {
    type Item = &'a ContentNode;
    type IntoIter = core::slice::Iter<'a, ContentNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the ancestors of a node, nearest first.
///
/// See [`ContentTree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a ContentTree,
    next: Option<&'a ContentNode>,
    steps: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ContentNode;

    fn next(&mut self) -> Option<Self::Item> {
        // Validation bounds the walk; the step cap only guards against misuse.
        if self.steps >= MAX_DEPTH {
            return None;
        }
        let node = self.next.take()?;
        self.steps += 1;
        self.next = node.parent.as_ref().and_then(|p| self.tree.get(p.as_str()));
        Some(node)
    }
}
