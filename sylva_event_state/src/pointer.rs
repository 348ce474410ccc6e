// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifies one pointer across its down, move and up events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The mouse. There is only ever one.
    Mouse,
    /// A touch contact, keyed by the platform's touch identifier.
    Touch(u64),
    /// A pen or stylus.
    Pen(u64),
}

impl PointerId {
    /// Returns `true` for touch contacts.
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch(_))
    }
}

/// What a press landed on, as resolved by the host's hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget<K> {
    /// A rendered node.
    Node(K),
    /// The detail card shown for a node.
    Card(K),
    /// Neither a node nor a visible card.
    Background,
}

impl<K> HitTarget<K> {
    /// Returns the node behind a node or card hit.
    pub fn node(&self) -> Option<&K> {
        match self {
            Self::Node(k) | Self::Card(k) => Some(k),
            Self::Background => None,
        }
    }

    /// Returns `true` for [`HitTarget::Background`].
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a wheel event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Modifiers that turn wheel scrolling into zooming.
    pub const ZOOM: Self = Self::CTRL.union(Self::META);

    /// Returns `true` if a zoom modifier is held.
    #[must_use]
    pub fn zooms(self) -> bool {
        self.intersects(Self::ZOOM)
    }
}
