// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Line, Point, Rect, Size, Vec2};
use sylva_content::{ContentNode, ContentTree, NodeId};
use sylva_event_state::{Gesture, GestureMode, GestureRecognizer, HitTarget, Modifiers, PointerId};
use sylva_interaction::{Activation, InteractionState, Navigator, NodeInteraction};
use sylva_layout::{Layout, LayoutError, PositionedNode, ViewMode, compute_tree_layout};
use sylva_view2d::Viewport2D;

use crate::config::ExplorerConfig;
use crate::scene::{NodeFlags, Scene, SceneCard, SceneEdge, SceneNode, node_fill};

/// The curriculum tree explorer behind one host surface.
///
/// Owns the content snapshot, the memoized layout, the camera, the gesture
/// recognizer and the node interaction state. Hosts forward raw input to the
/// `pointer_*`, [`touch_move`](Self::touch_move) and [`wheel`](Self::wheel)
/// entry points and paint [`scene`](Self::scene) after each event.
///
/// `N` receives start requests for activated branches, units and lessons.
#[derive(Debug)]
pub struct Explorer<N> {
    config: ExplorerConfig,
    tree: Arc<ContentTree>,
    mode: ViewMode,
    layout: Layout,
    layout_generation: u64,
    viewport: Viewport2D,
    gestures: GestureRecognizer<NodeId>,
    interaction: NodeInteraction,
    navigator: N,
    hover: Option<NodeId>,
    touches: HashMap<PointerId, NodeId>,
}

impl<N: Navigator> Explorer<N> {
    /// Creates an empty explorer over a view of `view_size` pixels.
    pub fn new(config: ExplorerConfig, view_size: Size, navigator: N) -> Self {
        let tree = Arc::new(ContentTree::empty());
        Self {
            config,
            tree: tree.clone(),
            mode: ViewMode::default(),
            layout: Layout::default(),
            layout_generation: 0,
            viewport: Viewport2D::with_params(
                Rect::from_origin_size(Point::ORIGIN, view_size),
                config.viewport,
            ),
            gestures: GestureRecognizer::new(config.gestures),
            interaction: NodeInteraction::new(tree),
            navigator,
            hover: None,
            touches: HashMap::new(),
        }
    }

    /// Replaces the content.
    ///
    /// On success all interaction state and any live gesture are dropped and
    /// the layout is recomputed. A malformed snapshot is rejected and the
    /// previous content stays in place.
    pub fn set_content(&mut self, nodes: Vec<ContentNode>) -> Result<(), LayoutError> {
        let tree = Arc::new(ContentTree::new(nodes)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = tree.len(), "content replaced");
        self.tree = tree.clone();
        self.interaction.set_content(tree);
        self.gestures.reset();
        self.hover = None;
        self.touches.clear();
        self.relayout();
        Ok(())
    }

    /// Switches between overview and detailed view.
    ///
    /// The layout is only recomputed when the mode actually changes.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.relayout();
        self.release_hidden();
    }

    /// Replaces the configuration.
    ///
    /// Layout parameters trigger a relayout; viewport and gesture parameters
    /// apply from the next operation.
    pub fn set_config(&mut self, config: ExplorerConfig) {
        let relayout = config.layout != self.config.layout;
        self.config = config;
        self.viewport.set_params(config.viewport);
        self.gestures.set_params(config.gestures);
        if relayout {
            self.relayout();
            self.release_hidden();
        }
    }

    /// Resizes the view.
    pub fn set_view_size(&mut self, size: Size) {
        let origin = self.viewport.view_rect().origin();
        self.viewport.set_view_rect(Rect::from_origin_size(origin, size));
    }

    /// Current configuration.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Current content snapshot.
    pub fn tree(&self) -> &Arc<ContentTree> {
        &self.tree
    }

    /// Current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Current layout. Includes nodes hidden by collapsed modules.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of layout passes run so far.
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    /// The camera.
    pub fn viewport(&self) -> &Viewport2D {
        &self.viewport
    }

    /// Node interaction state.
    pub fn interaction(&self) -> &InteractionState {
        self.interaction.state()
    }

    /// Mode of the current gesture session.
    pub fn gesture_mode(&self) -> GestureMode {
        self.gestures.mode()
    }

    /// The navigation collaborator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The navigation collaborator, mutably.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Returns `true` if `node` is drawn in the current mode.
    pub fn is_rendered(&self, id: &str) -> bool {
        self.layout.contains(id) && self.shown(id)
    }

    /// Resolves what lies under `view_pt`.
    ///
    /// Visible cards win over nodes, and among either the topmost (last
    /// drawn) wins.
    pub fn hit_test(&self, view_pt: Point) -> HitTarget<NodeId> {
        if let Some(card) = self.cards().rev().find(|c| c.rect.contains(view_pt)) {
            return HitTarget::Card(card.node.node.id.clone());
        }
        let world_pt = self.viewport.view_to_world_point(view_pt);
        self.rendered()
            .rev()
            .find(|p| p.contains(world_pt))
            .map_or(HitTarget::Background, |p| HitTarget::Node(p.node.id.clone()))
    }

    /// A pointer was pressed at `position` (view pixels).
    ///
    /// Returns what the press landed on.
    pub fn pointer_down(
        &mut self,
        pointer: PointerId,
        position: Point,
        time_ms: u64,
    ) -> HitTarget<NodeId> {
        let target = self.hit_test(position);
        if pointer.is_touch()
            && let HitTarget::Node(id) = &target
        {
            self.interaction.on_node_touch_start(id.as_str());
            self.touches.insert(pointer, id.clone());
        }
        self.gestures
            .on_pointer_down(pointer, position, target.clone(), time_ms);
        target
    }

    /// A pointer moved to `position`.
    ///
    /// Mouse and pen moves also drive hover. Returns the applied gesture.
    pub fn pointer_move(&mut self, pointer: PointerId, position: Point) -> Option<Gesture<NodeId>> {
        if !pointer.is_touch() {
            let over = self.hit_test(position).node().cloned();
            self.set_hover(over);
        }
        let gesture = self.gestures.on_pointer_move(pointer, position);
        self.apply(gesture)
    }

    /// Touch contacts moved. Returns the applied gesture.
    pub fn touch_move(&mut self, contacts: &[(u64, Point)]) -> Option<Gesture<NodeId>> {
        let gesture = self.gestures.on_touch_move(contacts);
        self.apply(gesture)
    }

    /// A pointer was released at `position`.
    ///
    /// Taps on nodes and cards activate the node; taps on the background
    /// dismiss all cards. Returns the applied gesture.
    pub fn pointer_up(
        &mut self,
        pointer: PointerId,
        position: Point,
        time_ms: u64,
    ) -> Option<Gesture<NodeId>> {
        self.end_touch(pointer);
        let gesture = self.gestures.on_pointer_up(pointer, position, time_ms);
        self.apply(gesture)
    }

    /// A pointer was cancelled by the platform.
    pub fn pointer_cancel(&mut self, pointer: PointerId) {
        self.end_touch(pointer);
        self.gestures.on_pointer_cancel(pointer);
    }

    /// The mouse or pen left the surface.
    pub fn pointer_leave(&mut self, pointer: PointerId) {
        if !pointer.is_touch() {
            self.set_hover(None);
        }
    }

    /// A wheel event. Returns the applied gesture.
    pub fn wheel(&mut self, delta: Vec2, modifiers: Modifiers) -> Option<Gesture<NodeId>> {
        let gesture = self.gestures.on_wheel(delta, modifiers);
        self.apply(gesture)
    }

    /// The surface was shown or hidden. Drops any live gesture and touch.
    pub fn visibility_changed(&mut self, visible: bool) {
        self.gestures.on_visibility_change(visible);
        let touches: Vec<NodeId> = self.touches.drain().map(|(_, id)| id).collect();
        for id in touches {
            self.interaction.on_node_touch_end(id.as_str());
        }
    }

    /// Activates `id` as if it had been tapped.
    pub fn activate(&mut self, id: &str) -> Activation {
        let activation = self.interaction.on_node_activate(id, &mut self.navigator);
        if activation == Activation::Collapsed {
            self.release_hidden();
        }
        activation
    }

    /// Dismisses every visible card.
    pub fn dismiss_cards(&mut self) {
        self.interaction.on_outside_activate();
    }

    /// Collapses every expanded module.
    pub fn collapse_all(&mut self) {
        self.interaction.collapse_all();
        self.release_hidden();
    }

    /// Zooms in one step around the view center.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Zooms out one step around the view center.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Returns to zoom `1.0` and no pan.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Frames every drawn node. Resets the view when nothing is drawn.
    pub fn fit_to_screen(&mut self) {
        let bounds = self
            .rendered()
            .map(PositionedNode::bounds)
            .reduce(|a, b| a.union(b));
        match bounds {
            Some(bounds) => {
                let size = self.viewport.view_rect().size();
                self.viewport.fit_to_content(bounds, size);
            }
            None => self.viewport.reset(),
        }
    }

    /// Centers the view on `id`. Returns `false` if it is not drawn.
    pub fn focus_node(&mut self, id: &str) -> bool {
        if !self.is_rendered(id) {
            return false;
        }
        let Some(position) = self.layout.get(id).map(|p| p.position) else {
            return false;
        };
        self.viewport.center_on(position);
        true
    }

    /// Builds the display list for the current state.
    ///
    /// Only nodes, edges and cards that touch the visible world rectangle are
    /// included.
    pub fn scene(&self) -> Scene<'_> {
        let visible = self.viewport.visible_world_rect();
        let state = self.interaction.state();

        let edges = self
            .layout
            .edges()
            .filter(|(parent, child)| {
                self.shown(parent.node.id.as_str()) && self.shown(child.node.id.as_str())
            })
            .map(|(parent, child)| (parent, child, Line::new(parent.position, child.position)))
            .filter(|(_, _, line)| overlaps(Rect::from_points(line.p0, line.p1), visible))
            .map(|(parent, child, line)| SceneEdge {
                parent: &parent.node.id,
                child: &child.node.id,
                line,
                highlighted: state.is_highlighted(parent.node.id.as_str())
                    && state.is_highlighted(child.node.id.as_str()),
            })
            .collect();

        let nodes = self
            .rendered()
            .filter(|p| overlaps(p.bounds(), visible))
            .map(|p| SceneNode {
                node: p,
                flags: flags_of(state, &p.node),
                fill: node_fill(&p.node),
            })
            .collect();

        let view = self.viewport.view_rect();
        let cards = self.cards().filter(|c| overlaps(c.rect, view)).collect();

        Scene {
            transform: self.viewport.world_to_view(),
            edges,
            nodes,
            cards,
        }
    }

    fn relayout(&mut self) {
        self.layout = compute_tree_layout(&self.tree, self.mode, &self.config.layout);
        self.layout_generation += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            mode = ?self.mode,
            nodes = self.layout.len(),
            generation = self.layout_generation,
            "layout recomputed"
        );
    }

    /// Detailed view hides units and lessons of collapsed modules.
    fn shown(&self, id: &str) -> bool {
        match self.mode {
            ViewMode::Overview => true,
            ViewMode::Detailed => self.interaction.is_visible_in_detail(id),
        }
    }

    fn rendered(&self) -> impl DoubleEndedIterator<Item = &PositionedNode> + '_ {
        self.layout
            .iter()
            .filter(move |p| self.shown(p.node.id.as_str()))
    }

    fn cards(&self) -> impl DoubleEndedIterator<Item = SceneCard<'_>> + '_ {
        let state = self.interaction.state();
        self.rendered()
            .filter(move |p| state.has_card(p.node.id.as_str()))
            .map(move |p| SceneCard {
                node: p,
                rect: self.card_rect(p),
            })
    }

    /// Cards sit to the right of their node, vertically centered on it.
    fn card_rect(&self, node: &PositionedNode) -> Rect {
        let params = self.config.cards;
        let anchor = self.viewport.world_to_view_point(node.position);
        let rim = node.radius * self.viewport.zoom();
        let origin = anchor + Vec2::new(rim + params.gap, -params.size.height / 2.0);
        Rect::from_origin_size(origin, params.size)
    }

    fn set_hover(&mut self, over: Option<NodeId>) {
        if over == self.hover {
            return;
        }
        if let Some(old) = self.hover.take() {
            self.interaction.on_node_leave(old.as_str());
        }
        if let Some(new) = &over {
            self.interaction.on_node_enter(new.as_str());
        }
        self.hover = over;
    }

    /// Leaves the hovered and touched nodes that are no longer rendered.
    fn release_hidden(&mut self) {
        if let Some(id) = &self.hover
            && !self.is_rendered(id.as_str())
        {
            self.set_hover(None);
        }
        let hidden: Vec<PointerId> = self
            .touches
            .iter()
            .filter(|(_, id)| !self.is_rendered(id.as_str()))
            .map(|(pointer, _)| *pointer)
            .collect();
        for pointer in hidden {
            self.end_touch(pointer);
        }
    }

    fn end_touch(&mut self, pointer: PointerId) {
        if let Some(id) = self.touches.remove(&pointer) {
            self.interaction.on_node_touch_end(id.as_str());
        }
    }

    fn apply(&mut self, gesture: Option<Gesture<NodeId>>) -> Option<Gesture<NodeId>> {
        match gesture.as_ref()? {
            Gesture::Pan(delta) => self.viewport.pan_by(*delta),
            Gesture::Zoom { factor, anchor } => self.viewport.zoom_by(*factor, anchor.pivot()),
            Gesture::Tap { target, .. } => match target.node() {
                Some(id) => {
                    self.activate(id.as_str());
                }
                None => self.interaction.on_outside_activate(),
            },
        }
        gesture
    }
}

fn flags_of(state: &InteractionState, node: &ContentNode) -> NodeFlags {
    let id = node.id.as_str();
    let mut flags = NodeFlags::empty();
    flags.set(NodeFlags::HOVERED, state.is_hovered(id));
    flags.set(NodeFlags::HIGHLIGHTED, state.is_highlighted(id));
    flags.set(NodeFlags::SELECTED, state.is_selected(id));
    flags.set(NodeFlags::EXPANDED, state.is_expanded(id));
    flags.set(NodeFlags::LOCKED, node.is_locked());
    flags.set(NodeFlags::CARD, state.has_card(id));
    flags
}

/// Closed-interval overlap, so shapes touching the edge still count.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
