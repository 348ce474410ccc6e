// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers, kinds and the immutable content record.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

/// Identifier of a content node.
///
/// Ids come from the content service and are opaque strings. The handle is
/// reference counted so that layouts, interaction sets and scenes can hold
/// copies of it without reallocating.
///
/// `NodeId` borrows as `str`, so maps keyed by it can be queried with a plain
/// `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:?})", &*self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl From<&Self> for NodeId {
    fn from(id: &Self) -> Self {
        id.clone()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NodeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// The level of a node in the curriculum hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum NodeKind {
    /// Top-level module, placed on one of the module rings.
    Module,
    /// Child of a module.
    Branch,
    /// Child of a branch.
    Unit,
    /// Child of a unit; the leaves of the tree.
    Lesson,
}

impl NodeKind {
    /// All kinds, shallowest first.
    pub const ALL: [Self; 4] = [Self::Module, Self::Branch, Self::Unit, Self::Lesson];

    /// Depth of this kind, with modules at `0`.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Module => 0,
            Self::Branch => 1,
            Self::Unit => 2,
            Self::Lesson => 3,
        }
    }

    /// The kind a parent of this kind must have, or `None` for modules.
    #[must_use]
    pub const fn parent_kind(self) -> Option<Self> {
        match self {
            Self::Module => None,
            Self::Branch => Some(Self::Module),
            Self::Unit => Some(Self::Branch),
            Self::Lesson => Some(Self::Unit),
        }
    }

    /// The kind children of this kind must have, or `None` for lessons.
    #[must_use]
    pub const fn child_kind(self) -> Option<Self> {
        match self {
            Self::Module => Some(Self::Branch),
            Self::Branch => Some(Self::Unit),
            Self::Unit => Some(Self::Lesson),
            Self::Lesson => None,
        }
    }

    /// Lowercase name used in logs and serialized data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Branch => "branch",
            Self::Unit => "unit",
            Self::Lesson => "lesson",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Progress status of a node for the current learner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum NodeStatus {
    /// Not yet reachable. Locked nodes never show a detail card and ignore activation.
    Locked,
    /// Reachable but not started.
    #[default]
    Available,
    /// Started but not finished.
    InProgress,
    /// Finished.
    Completed,
}

impl NodeStatus {
    /// Returns `true` for [`NodeStatus::Locked`].
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

/// Which module ring a module is placed on.
///
/// Only consulted for [`NodeKind::Module`] nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Ring {
    /// Inner ring, closest to the center.
    #[default]
    Primary,
    /// Outer ring.
    Secondary,
}

/// Display metrics shown on detail cards.
///
/// The explorer never interprets these; they are carried through to the scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DisplayMetrics {
    /// Human readable time estimate, for example `"45 min"`.
    pub duration: Option<String>,
    /// Experience points awarded on completion.
    pub xp: Option<u32>,
    /// Difficulty label.
    pub difficulty: Option<String>,
}

/// One node of the curriculum, as delivered by the content service.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentNode {
    /// Unique id.
    pub id: NodeId,
    /// Level in the hierarchy.
    pub kind: NodeKind,
    /// Display title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Icon name or glyph.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// CSS color string, for example `"#3b82f6"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
    /// Learner progress.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: NodeStatus,
    /// Parent id; `None` only for modules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent: Option<NodeId>,
    /// Ordered child ids. The order is the placement order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<NodeId>,
    /// Module ring. Ignored for other kinds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ring: Ring,
    /// Opaque display metrics.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metrics: DisplayMetrics,
}

impl ContentNode {
    /// Creates an available node with empty display fields and no links.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            title: String::new(),
            icon: String::new(),
            color: String::new(),
            status: NodeStatus::default(),
            parent: None,
            children: Vec::new(),
            ring: Ring::default(),
            metrics: DisplayMetrics::default(),
        }
    }

    /// Sets the parent id.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the ordered child ids.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the module ring.
    #[must_use]
    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.ring = ring;
        self
    }

    /// Sets the display metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Returns `true` if the learner cannot open this node yet.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }
}
