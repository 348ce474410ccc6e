// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::drag::DragState;
use crate::params::GestureParams;
use crate::pinch::{PinchState, PinchStep};
use crate::pointer::{HitTarget, Modifiers, PointerId};

/// Where a zoom is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomAnchor {
    /// The center of the view.
    ViewCenter,
    /// A view-space point that must stay fixed on screen.
    Pivot(Point),
}

impl ZoomAnchor {
    /// The pivot point, or `None` for the view center.
    #[must_use]
    pub fn pivot(self) -> Option<Point> {
        match self {
            Self::ViewCenter => None,
            Self::Pivot(p) => Some(p),
        }
    }
}

/// A classified input event.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture<K> {
    /// Move the view by a delta in view coordinates.
    Pan(Vec2),
    /// Multiply the zoom by `factor` around `anchor`.
    Zoom {
        /// Zoom multiplier.
        factor: f64,
        /// Fixed point of the zoom.
        anchor: ZoomAnchor,
    },
    /// A short, still press and release.
    Tap {
        /// What the press landed on.
        target: HitTarget<K>,
        /// Release position in view coordinates.
        position: Point,
    },
}

impl<K> From<PinchStep> for Gesture<K> {
    fn from(step: PinchStep) -> Self {
        match step {
            PinchStep::Zoom { factor, centroid } => Self::Zoom {
                factor,
                anchor: ZoomAnchor::Pivot(centroid),
            },
            PinchStep::Pan(delta) => Self::Pan(delta),
        }
    }
}

/// Current state of the gesture session, derived from the tracked pointers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    /// No pointer is tracked.
    Idle,
    /// One pointer is down on a node or card; it may still become a tap.
    Pressing,
    /// One pointer drags the view.
    Panning,
    /// Two touches pinch.
    Pinching,
}

#[derive(Clone, Debug)]
struct Contact<K> {
    pointer: PointerId,
    target: HitTarget<K>,
    drag: DragState,
    pans: bool,
}

#[derive(Clone, Debug)]
struct Session<K> {
    contacts: SmallVec<[Contact<K>; 2]>,
    pinch: Option<PinchState>,
    started_ms: u64,
    pinched: bool,
}

impl<K> Session<K> {
    fn contact_mut(&mut self, pointer: PointerId) -> Option<&mut Contact<K>> {
        self.contacts.iter_mut().find(|c| c.pointer == pointer)
    }

    fn pair(&self) -> Option<(Point, Point)> {
        match self.contacts.as_slice() {
            [a, b] => Some((a.drag.position()?, b.drag.position()?)),
            _ => None,
        }
    }

    fn mode(&self) -> GestureMode {
        match self.contacts.as_slice() {
            [] => GestureMode::Idle,
            [c] if c.pans => GestureMode::Panning,
            [_] => GestureMode::Pressing,
            _ => GestureMode::Pinching,
        }
    }
}

/// Turns raw pointer, touch and wheel events into [`Gesture`]s.
///
/// Every entry point returns at most one gesture, so a caller applying the
/// result performs at most one viewport operation per input event. `K` is
/// the application's node key, carried through [`HitTarget`] into taps.
///
/// Sessions run from the first press to the last release:
///
/// - A mouse or pen press, or a single touch, on [`HitTarget::Background`]
///   pans on every move by the movement since the previous position.
/// - A press on a node or card does not pan; it is tracked so its release can
///   be reported as a tap.
/// - A second touch starts a pinch (see [`crate::pinch`]). When one of the two
///   lifts, the other keeps panning from where it is.
/// - Releasing the only pointer of a session that never pinched, moved at most
///   [`GestureParams::tap_slop`] and lasted at most
///   [`GestureParams::tap_timeout_ms`] yields [`Gesture::Tap`].
///
/// Events the session cannot account for (a move from an unknown touch, a
/// third touch, a second press from a pointer already down) reset it to
/// idle. Ups, cancels and moves with nothing tracked are ignored.
#[derive(Clone, Debug)]
pub struct GestureRecognizer<K> {
    params: GestureParams,
    session: Option<Session<K>>,
}

impl<K> Default for GestureRecognizer<K> {
    fn default() -> Self {
        Self::new(GestureParams::default())
    }
}

impl<K> GestureRecognizer<K> {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(params: GestureParams) -> Self {
        Self {
            params,
            session: None,
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn params(&self) -> &GestureParams {
        &self.params
    }

    /// Replaces the thresholds; applies from the next event.
    pub fn set_params(&mut self, params: GestureParams) {
        self.params = params;
    }

    /// Current session mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.session.as_ref().map_or(GestureMode::Idle, Session::mode)
    }

    /// Number of pointers the session tracks.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.contacts.len())
    }

    /// Handles a press of `pointer` at `position` on `target`.
    pub fn on_pointer_down(
        &mut self,
        pointer: PointerId,
        position: Point,
        target: HitTarget<K>,
        time_ms: u64,
    ) {
        let Some(session) = self.session.as_mut() else {
            self.start(pointer, position, target, time_ms);
            return;
        };

        if session.contacts.iter().any(|c| c.pointer == pointer) {
            // The release of the earlier press never arrived.
            self.desync("pointer pressed twice");
            self.start(pointer, position, target, time_ms);
            return;
        }
        if !pointer.is_touch() {
            return;
        }

        match session.contacts.len() {
            1 => {
                let first = &mut session.contacts[0];
                let Some(anchor) = first.drag.position().filter(|_| first.pointer.is_touch())
                else {
                    return;
                };
                first.pans = true;
                let mut drag = DragState::default();
                drag.start(position);
                session.contacts.push(Contact {
                    pointer,
                    target,
                    drag,
                    pans: true,
                });
                session.pinch = Some(PinchState::new(anchor, position));
                session.pinched = true;
                #[cfg(feature = "tracing")]
                tracing::trace!(?pointer, "pinch started");
            }
            _ => self.desync("third touch while pinching"),
        }
    }

    /// Handles a move of a single pointer.
    pub fn on_pointer_move(&mut self, pointer: PointerId, position: Point) -> Option<Gesture<K>> {
        self.advance([(pointer, position)])
    }

    /// Handles a touch move carrying every changed contact.
    ///
    /// All contacts are applied before classifying, so a two-finger move
    /// yields one zoom or one pan rather than one per finger.
    pub fn on_touch_move(&mut self, contacts: &[(u64, Point)]) -> Option<Gesture<K>> {
        self.advance(contacts.iter().map(|&(id, p)| (PointerId::Touch(id), p)))
    }

    /// Handles a release of `pointer` at `position`.
    ///
    /// Returns [`Gesture::Tap`] when the release ends a tap.
    pub fn on_pointer_up(
        &mut self,
        pointer: PointerId,
        position: Point,
        time_ms: u64,
    ) -> Option<Gesture<K>> {
        let session = self.session.as_mut()?;
        let contact = session.contact_mut(pointer)?;
        contact.drag.rebase(position);

        let contact = self.lift(pointer)?;
        let session = self.session.take()?;
        if !session.contacts.is_empty() {
            self.session = Some(session);
            return None;
        }

        let elapsed = time_ms.saturating_sub(session.started_ms);
        if session.pinched
            || contact.drag.travel() > self.params.tap_slop
            || elapsed > self.params.tap_timeout_ms
        {
            return None;
        }
        Some(Gesture::Tap {
            target: contact.target,
            position,
        })
    }

    /// Handles a cancelled pointer. Never produces a tap.
    pub fn on_pointer_cancel(&mut self, pointer: PointerId) {
        if self.lift(pointer).is_some() && self.tracked_count() == 0 {
            self.session = None;
        }
    }

    /// Handles a wheel event with `delta` in pixels.
    ///
    /// Plain wheel pans by `-delta`. With a zoom modifier the vertical
    /// component zooms about the view center by one
    /// [`GestureParams::wheel_zoom_step`], inward for upward scrolls.
    pub fn on_wheel(&mut self, delta: Vec2, modifiers: Modifiers) -> Option<Gesture<K>> {
        if !delta.is_finite() {
            return None;
        }
        if modifiers.zooms() {
            let step = self.params.wheel_zoom_step;
            let factor = if delta.y < 0.0 {
                step
            } else if delta.y > 0.0 {
                1.0 / step
            } else {
                return None;
            };
            return Some(Gesture::Zoom {
                factor,
                anchor: ZoomAnchor::ViewCenter,
            });
        }
        (delta != Vec2::ZERO).then_some(Gesture::Pan(-delta))
    }

    /// Handles the host surface being shown or hidden.
    ///
    /// Either way the session is dropped, so a pinch interrupted by a hide is
    /// never resumed with contacts that no longer exist.
    pub fn on_visibility_change(&mut self, visible: bool) {
        #[cfg(feature = "tracing")]
        tracing::debug!(visible, "visibility changed, gesture session dropped");
        #[cfg(not(feature = "tracing"))]
        let _ = visible;
        self.reset();
    }

    /// Drops the session.
    pub fn reset(&mut self) {
        self.session = None;
    }

    fn start(&mut self, pointer: PointerId, position: Point, target: HitTarget<K>, time_ms: u64) {
        let mut drag = DragState::default();
        drag.start(position);
        let pans = target.is_background();
        let mut contacts = SmallVec::new();
        contacts.push(Contact {
            pointer,
            target,
            drag,
            pans,
        });
        self.session = Some(Session {
            contacts,
            pinch: None,
            started_ms: time_ms,
            pinched: false,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(?pointer, pans, "gesture session started");
    }

    fn advance(
        &mut self,
        moves: impl IntoIterator<Item = (PointerId, Point)>,
    ) -> Option<Gesture<K>> {
        let session = self.session.as_mut()?;
        let mut pan = Vec2::ZERO;
        let mut untracked = false;
        for (pointer, position) in moves {
            match session.contact_mut(pointer) {
                Some(contact) => {
                    let delta = contact.drag.update(position).unwrap_or_default();
                    if contact.pans {
                        pan += delta;
                    }
                }
                None if pointer.is_touch() => {
                    untracked = true;
                    break;
                }
                None => {}
            }
        }
        if untracked {
            self.desync("move for untracked touch");
            return None;
        }

        if session.pinch.is_some() {
            let (a, b) = session.pair()?;
            let pinch = session.pinch.as_mut()?;
            return pinch.update(a, b, &self.params).map(Gesture::from);
        }
        (pan != Vec2::ZERO).then_some(Gesture::Pan(pan))
    }

    /// Removes `pointer` from the session and returns it.
    ///
    /// Ending a pinch hands the remaining contact over to panning from its
    /// current position.
    fn lift(&mut self, pointer: PointerId) -> Option<Contact<K>> {
        let session = self.session.as_mut()?;
        let index = session.contacts.iter().position(|c| c.pointer == pointer)?;
        let contact = session.contacts.remove(index);
        if session.pinch.take().is_some() {
            for rest in &mut session.contacts {
                rest.pans = true;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(?pointer, "pinch ended");
        }
        Some(contact)
    }

    fn desync(&mut self, reason: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason, "gesture session out of sync, resetting");
        #[cfg(not(feature = "tracing"))]
        let _ = reason;
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Recognizer = GestureRecognizer<u32>;

    #[test]
    fn background_mouse_drag_pans_by_increments() {
        let mut r = Recognizer::default();
        r.on_pointer_down(PointerId::Mouse, Point::new(10.0, 10.0), HitTarget::Background, 0);
        assert_eq!(r.mode(), GestureMode::Panning);

        let g = r.on_pointer_move(PointerId::Mouse, Point::new(15.0, 12.0));
        assert_eq!(g, Some(Gesture::Pan(Vec2::new(5.0, 2.0))));
        let g = r.on_pointer_move(PointerId::Mouse, Point::new(15.0, 20.0));
        assert_eq!(g, Some(Gesture::Pan(Vec2::new(0.0, 8.0))));

        assert_eq!(r.on_pointer_up(PointerId::Mouse, Point::new(15.0, 20.0), 50), None);
        assert_eq!(r.mode(), GestureMode::Idle);
    }

    #[test]
    fn node_press_does_not_pan() {
        let mut r = Recognizer::default();
        r.on_pointer_down(PointerId::Mouse, Point::new(0.0, 0.0), HitTarget::Node(3), 0);
        assert_eq!(r.mode(), GestureMode::Pressing);
        assert_eq!(r.on_pointer_move(PointerId::Mouse, Point::new(40.0, 0.0)), None);
    }

    #[test]
    fn hover_moves_without_session_are_ignored() {
        let mut r = Recognizer::default();
        assert_eq!(r.on_pointer_move(PointerId::Mouse, Point::new(1.0, 1.0)), None);
        assert_eq!(r.on_pointer_up(PointerId::Mouse, Point::new(1.0, 1.0), 0), None);
        assert_eq!(r.mode(), GestureMode::Idle);
    }

    #[test]
    fn mouse_does_not_join_a_touch_session() {
        let mut r = Recognizer::default();
        r.on_pointer_down(PointerId::Touch(1), Point::ZERO, HitTarget::Background, 0);
        r.on_pointer_down(PointerId::Mouse, Point::new(5.0, 5.0), HitTarget::Background, 0);
        assert_eq!(r.tracked_count(), 1);
        assert_eq!(r.mode(), GestureMode::Panning);
    }

    #[test]
    fn repeated_press_restarts_session() {
        let mut r = Recognizer::default();
        r.on_pointer_down(PointerId::Mouse, Point::ZERO, HitTarget::Background, 0);
        r.on_pointer_down(PointerId::Mouse, Point::ZERO, HitTarget::Node(1), 10);
        assert_eq!(r.tracked_count(), 1);
        assert_eq!(r.mode(), GestureMode::Pressing);
    }

    #[test]
    fn cancel_ends_without_tap() {
        let mut r = Recognizer::default();
        r.on_pointer_down(PointerId::Pen(4), Point::ZERO, HitTarget::Node(1), 0);
        r.on_pointer_cancel(PointerId::Pen(4));
        assert_eq!(r.mode(), GestureMode::Idle);
        assert_eq!(r.on_pointer_up(PointerId::Pen(4), Point::ZERO, 5), None);
    }

    #[test]
    fn wheel_zoom_needs_modifier() {
        let mut r = Recognizer::default();
        assert_eq!(
            r.on_wheel(Vec2::new(0.0, -30.0), Modifiers::empty()),
            Some(Gesture::Pan(Vec2::new(0.0, 30.0)))
        );
        assert_eq!(
            r.on_wheel(Vec2::new(0.0, -30.0), Modifiers::CTRL),
            Some(Gesture::Zoom {
                factor: 1.1,
                anchor: ZoomAnchor::ViewCenter
            })
        );
        assert_eq!(
            r.on_wheel(Vec2::new(0.0, 30.0), Modifiers::META | Modifiers::SHIFT),
            Some(Gesture::Zoom {
                factor: 1.0 / 1.1,
                anchor: ZoomAnchor::ViewCenter
            })
        );
        assert_eq!(r.on_wheel(Vec2::new(12.0, 0.0), Modifiers::CTRL), None);
        assert_eq!(r.on_wheel(Vec2::ZERO, Modifiers::empty()), None);
    }
}
