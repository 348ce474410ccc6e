// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input to display list, through a real layout, camera and state machine.

use kurbo::{Point, Rect, Size, Vec2};
use sylva_content::{ContentNode, NodeId, NodeKind, NodeStatus};
use sylva_explorer::{
    Activation, Explorer, ExplorerConfig, Gesture, GestureMode, HitTarget, Modifiers, Navigator,
    NodeFlags, PointerId, ViewMode,
};

/// Records navigator calls.
#[derive(Debug, Default)]
struct Recorder(Vec<(NodeId, NodeKind)>);

impl Navigator for Recorder {
    fn start(&mut self, id: &NodeId, kind: NodeKind) {
        self.0.push((id.clone(), kind));
    }
}

const VIEW: Size = Size::new(800.0, 600.0);
const CORNER: Point = Point::new(2.0, 2.0);

fn curriculum() -> Vec<ContentNode> {
    vec![
        ContentNode::new("m1", NodeKind::Module)
            .with_children(["b1", "b2"])
            .with_color("#3b82f6"),
        ContentNode::new("b1", NodeKind::Branch)
            .with_parent("m1")
            .with_children(["u1"]),
        ContentNode::new("b2", NodeKind::Branch)
            .with_parent("m1")
            .with_status(NodeStatus::Locked),
        ContentNode::new("u1", NodeKind::Unit)
            .with_parent("b1")
            .with_children(["l1"]),
        ContentNode::new("l1", NodeKind::Lesson).with_parent("u1"),
    ]
}

fn explorer() -> Explorer<Recorder> {
    let mut ex = Explorer::new(ExplorerConfig::default(), VIEW, Recorder::default());
    ex.set_content(curriculum()).unwrap();
    ex.fit_to_screen();
    assert_eq!(ex.hit_test(CORNER), HitTarget::Background);
    ex
}

fn view_pos(ex: &Explorer<Recorder>, id: &str) -> Point {
    let world = ex.layout().get(id).unwrap().position;
    ex.viewport().world_to_view_point(world)
}

fn tap(ex: &mut Explorer<Recorder>, at: Point) -> Option<Gesture<NodeId>> {
    ex.pointer_down(PointerId::Mouse, at, 1_000);
    ex.pointer_up(PointerId::Mouse, at, 1_100)
}

fn near(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}

#[test]
fn hover_shows_card_and_highlights_path() {
    let mut ex = explorer();
    let b1 = view_pos(&ex, "b1");
    ex.pointer_move(PointerId::Mouse, b1);

    let state = ex.interaction();
    assert!(state.is_hovered("b1"));
    assert!(state.has_card("b1"));
    assert!(state.is_highlighted("m1"));

    let scene = ex.scene();
    let flags = scene.node("b1").unwrap().flags;
    assert!(flags.contains(NodeFlags::HOVERED | NodeFlags::HIGHLIGHTED | NodeFlags::CARD));
    assert_eq!(scene.node("m1").unwrap().flags, NodeFlags::HIGHLIGHTED);
    assert!(scene.node("b2").unwrap().flags.contains(NodeFlags::LOCKED));
    assert_eq!(scene.cards.len(), 1);
    for edge in &scene.edges {
        assert_eq!(edge.highlighted, edge.child.as_str() == "b1");
    }

    ex.pointer_leave(PointerId::Mouse);
    assert!(ex.interaction().hovered().is_empty());
    assert!(ex.interaction().visible_cards().is_empty());
}

#[test]
fn cards_win_hit_tests_over_nodes() {
    let mut ex = explorer();
    ex.pointer_move(PointerId::Mouse, view_pos(&ex, "b1"));
    let card = ex.scene().cards[0].rect;
    assert!(card.x0 > view_pos(&ex, "b1").x);

    let inside = card.center();
    assert_eq!(ex.hit_test(inside), HitTarget::Card(NodeId::from("b1")));
    // Moving onto the card keeps the node hovered.
    ex.pointer_move(PointerId::Mouse, inside);
    assert!(ex.interaction().has_card("b1"));

    ex.dismiss_cards();
    assert!(!matches!(ex.hit_test(inside), HitTarget::Card(_)));
}

#[test]
fn tapping_a_branch_starts_it() {
    let mut ex = explorer();
    let b1 = view_pos(&ex, "b1");
    let gesture = tap(&mut ex, b1);
    assert_eq!(
        gesture,
        Some(Gesture::Tap {
            target: HitTarget::Node(NodeId::from("b1")),
            position: b1,
        })
    );
    assert_eq!(ex.navigator().0, [(NodeId::from("b1"), NodeKind::Branch)]);
    assert!(ex.interaction().is_selected("b1"));
}

#[test]
fn tapping_a_card_activates_its_node() {
    let mut ex = explorer();
    ex.pointer_move(PointerId::Mouse, view_pos(&ex, "b1"));
    let card = ex.scene().cards[0].rect.center();
    tap(&mut ex, card);
    assert_eq!(ex.navigator().0, [(NodeId::from("b1"), NodeKind::Branch)]);
}

#[test]
fn slow_press_is_not_a_tap() {
    let mut ex = explorer();
    let b1 = view_pos(&ex, "b1");
    ex.pointer_down(PointerId::Mouse, b1, 0);
    assert_eq!(ex.pointer_up(PointerId::Mouse, b1, 2_000), None);
    assert!(ex.navigator().0.is_empty());
}

#[test]
fn locked_tap_changes_nothing() {
    let mut ex = explorer();
    let revision = ex.interaction().revision();
    let b2 = view_pos(&ex, "b2");
    tap(&mut ex, b2);
    assert!(ex.navigator().0.is_empty());
    assert_eq!(ex.interaction().revision(), revision);
    assert_eq!(ex.activate("b2"), Activation::Ignored);
}

#[test]
fn background_tap_dismisses_cards() {
    let mut ex = explorer();
    ex.pointer_move(PointerId::Mouse, view_pos(&ex, "b1"));
    assert!(ex.interaction().has_card("b1"));

    let gesture = tap(&mut ex, CORNER);
    assert!(matches!(
        gesture,
        Some(Gesture::Tap {
            target: HitTarget::Background,
            ..
        })
    ));
    assert!(ex.interaction().visible_cards().is_empty());
    assert!(ex.interaction().is_hovered("b1"));
}

#[test]
fn expanding_a_module_reveals_units_in_detail() {
    let mut ex = explorer();
    assert_eq!(ex.view_mode(), ViewMode::Detailed);
    assert!(ex.layout().contains("u1"));
    assert!(!ex.is_rendered("u1"));
    assert!(!ex.focus_node("u1"));

    let m1 = view_pos(&ex, "m1");
    tap(&mut ex, m1);
    assert!(ex.interaction().is_expanded("m1"));
    assert!(ex.is_rendered("u1"));
    assert!(ex.is_rendered("l1"));

    ex.fit_to_screen();
    let scene = ex.scene();
    assert!(scene.node("l1").is_some());
    assert_eq!(scene.nodes.len(), 5);
    assert_eq!(scene.edges.len(), 4);

    drop(scene);
    assert_eq!(ex.activate("m1"), Activation::Collapsed);
    assert!(ex.scene().node("l1").is_none());
}

#[test]
fn overview_omits_units_and_lessons() {
    let mut ex = explorer();
    ex.set_view_mode(ViewMode::Overview);
    assert!(!ex.layout().contains("u1"));
    assert!(!ex.layout().contains("l1"));
    assert!(ex.is_rendered("b1"));
    // Expansion does not bring them back.
    ex.activate("m1");
    assert!(!ex.is_rendered("u1"));
}

/// Expands `m1`, refits and hovers `u1` with the mouse.
fn hovering_unit() -> Explorer<Recorder> {
    let mut ex = explorer();
    ex.activate("m1");
    ex.fit_to_screen();
    let u1 = view_pos(&ex, "u1");
    ex.pointer_move(PointerId::Mouse, u1);
    let state = ex.interaction();
    assert!(state.is_hovered("u1"));
    assert!(state.has_card("u1"));
    assert!(state.is_highlighted("m1"));
    ex
}

fn assert_released(ex: &Explorer<Recorder>) {
    assert!(!ex.is_rendered("u1"));
    let state = ex.interaction();
    assert!(state.hovered().is_empty());
    assert!(state.visible_cards().is_empty());
    assert!(state.highlighted_path().is_empty());
    assert!(ex.scene().cards.is_empty());
}

#[test]
fn collapse_all_releases_hovered_unit() {
    let mut ex = hovering_unit();
    ex.collapse_all();
    assert_released(&ex);
}

#[test]
fn collapsing_its_module_releases_hovered_unit() {
    let mut ex = hovering_unit();
    assert_eq!(ex.activate("m1"), Activation::Collapsed);
    assert_released(&ex);
}

#[test]
fn overview_releases_hovered_unit() {
    let mut ex = hovering_unit();
    ex.set_view_mode(ViewMode::Overview);
    assert_released(&ex);
}

#[test]
fn overview_releases_touched_unit() {
    let mut ex = explorer();
    ex.activate("m1");
    ex.fit_to_screen();
    let u1 = view_pos(&ex, "u1");
    assert_eq!(
        ex.pointer_down(PointerId::Touch(7), u1, 0),
        HitTarget::Node(NodeId::from("u1"))
    );
    assert!(ex.interaction().has_card("u1"));

    ex.set_view_mode(ViewMode::Overview);
    assert_released(&ex);

    ex.pointer_cancel(PointerId::Touch(7));
    assert!(ex.interaction().hovered().is_empty());
}

#[test]
fn hover_on_a_still_rendered_node_survives_collapse() {
    let mut ex = explorer();
    let b1 = view_pos(&ex, "b1");
    ex.pointer_move(PointerId::Mouse, b1);
    ex.collapse_all();
    assert!(ex.interaction().is_hovered("b1"));
    assert!(ex.interaction().has_card("b1"));
}

#[test]
fn layout_runs_only_when_inputs_change() {
    let mut ex = explorer();
    let generation = ex.layout_generation();

    ex.set_view_mode(ViewMode::Detailed);
    ex.pointer_move(PointerId::Mouse, view_pos(&ex, "b1"));
    ex.activate("m1");
    ex.zoom_in();
    let _ = ex.scene();
    assert_eq!(ex.layout_generation(), generation);

    ex.set_view_mode(ViewMode::Overview);
    assert_eq!(ex.layout_generation(), generation + 1);

    let mut config = *ex.config();
    config.cards.gap = 40.0;
    ex.set_config(config);
    assert_eq!(ex.layout_generation(), generation + 1);

    config.layout.primary_ring_radius = 400.0;
    ex.set_config(config);
    assert_eq!(ex.layout_generation(), generation + 2);
}

#[test]
fn rejected_content_keeps_the_previous_tree() {
    let mut ex = explorer();
    ex.activate("m1");
    let generation = ex.layout_generation();

    let bad = vec![ContentNode::new("b9", NodeKind::Branch).with_parent("ghost")];
    assert!(ex.set_content(bad).is_err());

    assert_eq!(ex.tree().len(), 5);
    assert_eq!(ex.layout_generation(), generation);
    assert!(ex.interaction().is_expanded("m1"));
}

#[test]
fn new_content_resets_interaction() {
    let mut ex = explorer();
    ex.pointer_move(PointerId::Mouse, view_pos(&ex, "b1"));
    ex.activate("m1");

    ex.set_content(curriculum()).unwrap();
    assert!(ex.interaction().is_empty());

    // The old hover is forgotten, so moving away does not emit a leave.
    let revision = ex.interaction().revision();
    ex.pointer_move(PointerId::Mouse, CORNER);
    assert_eq!(ex.interaction().revision(), revision);
}

#[test]
fn background_drag_pans() {
    let mut ex = explorer();
    let pan = ex.viewport().pan();
    ex.pointer_down(PointerId::Mouse, CORNER, 0);
    let gesture = ex.pointer_move(PointerId::Mouse, CORNER + Vec2::new(50.0, 20.0));
    assert_eq!(gesture, Some(Gesture::Pan(Vec2::new(50.0, 20.0))));
    assert_eq!(ex.viewport().pan(), pan + Vec2::new(50.0, 20.0));

    // Too far for a tap.
    assert_eq!(
        ex.pointer_up(PointerId::Mouse, CORNER + Vec2::new(50.0, 20.0), 50),
        None
    );
}

#[test]
fn wheel_pans_and_zooms_about_view_center() {
    let mut ex = explorer();
    let pan = ex.viewport().pan();
    ex.wheel(Vec2::new(0.0, 30.0), Modifiers::empty());
    assert_eq!(ex.viewport().pan(), pan - Vec2::new(0.0, 30.0));

    let center = Point::new(400.0, 300.0);
    let world = ex.viewport().view_to_world_point(center);
    let zoom = ex.viewport().zoom();
    ex.wheel(Vec2::new(0.0, -120.0), Modifiers::CTRL);
    assert!((ex.viewport().zoom() - zoom * 1.1).abs() < 1e-9);
    assert!(near(ex.viewport().world_to_view_point(world), center));
}

#[test]
fn pinch_zooms_about_the_centroid() {
    let mut ex = explorer();
    ex.reset_view();
    let centroid = Point::new(400.0, 300.0);
    let world = ex.viewport().view_to_world_point(centroid);

    ex.pointer_down(PointerId::Touch(1), Point::new(350.0, 300.0), 0);
    ex.pointer_down(PointerId::Touch(2), Point::new(450.0, 300.0), 5);
    assert_eq!(ex.gesture_mode(), GestureMode::Pinching);

    ex.touch_move(&[(1, Point::new(325.0, 300.0)), (2, Point::new(475.0, 300.0))]);
    ex.touch_move(&[(1, Point::new(300.0, 300.0)), (2, Point::new(500.0, 300.0))]);

    assert!((ex.viewport().zoom() - 2.0).abs() < 1e-9);
    assert!(near(ex.viewport().world_to_view_point(world), centroid));

    // Lifting after a pinch never taps.
    assert_eq!(ex.pointer_up(PointerId::Touch(2), Point::new(500.0, 300.0), 40), None);
    assert_eq!(ex.pointer_up(PointerId::Touch(1), Point::new(300.0, 300.0), 45), None);
    assert!(ex.navigator().0.is_empty());
}

#[test]
fn touch_on_a_node_hovers_until_release() {
    let mut ex = explorer();
    let b1 = view_pos(&ex, "b1");
    assert_eq!(
        ex.pointer_down(PointerId::Touch(7), b1, 0),
        HitTarget::Node(NodeId::from("b1"))
    );
    assert!(ex.interaction().is_hovered("b1"));
    assert!(ex.interaction().has_card("b1"));

    ex.pointer_cancel(PointerId::Touch(7));
    assert!(!ex.interaction().is_hovered("b1"));
    assert_eq!(ex.gesture_mode(), GestureMode::Idle);
}

#[test]
fn hiding_the_surface_ends_touches_and_gestures() {
    let mut ex = explorer();
    ex.pointer_down(PointerId::Touch(1), view_pos(&ex, "b1"), 0);
    ex.pointer_down(PointerId::Touch(2), CORNER, 5);
    assert_eq!(ex.gesture_mode(), GestureMode::Pinching);

    ex.visibility_changed(false);
    assert_eq!(ex.gesture_mode(), GestureMode::Idle);
    assert!(ex.interaction().hovered().is_empty());
}

#[test]
fn scene_is_culled_to_the_visible_region() {
    let mut ex = explorer();
    assert_eq!(ex.scene().nodes.len(), 3);

    ex.wheel(Vec2::new(100_000.0, 0.0), Modifiers::empty());
    assert!(ex.scene().is_empty());

    ex.fit_to_screen();
    assert_eq!(ex.scene().nodes.len(), 3);
}

#[test]
fn fit_frames_every_drawn_node() {
    let mut ex = explorer();
    ex.activate("m1");
    ex.zoom_out();
    ex.wheel(Vec2::new(-300.0, 120.0), Modifiers::empty());
    ex.fit_to_screen();

    let view = Rect::from_origin_size(Point::ORIGIN, VIEW).inflate(1e-6, 1e-6);
    for node in ex.layout().iter() {
        let bounds = ex.viewport().world_to_view_rect(node.bounds());
        assert!(view.contains(bounds.origin()), "{} off screen", node.node.id);
        assert!(
            view.contains(Point::new(bounds.x1, bounds.y1)),
            "{} off screen",
            node.node.id
        );
    }
}

#[test]
fn fit_without_drawn_nodes_resets() {
    let mut ex = Explorer::new(ExplorerConfig::default(), VIEW, Recorder::default());
    ex.zoom_in();
    ex.fit_to_screen();
    assert_eq!(ex.viewport().zoom(), 1.0);
    assert_eq!(ex.viewport().pan(), Vec2::ZERO);
    assert!(ex.scene().is_empty());
}

#[test]
fn focus_centers_a_drawn_node() {
    let mut ex = explorer();
    assert!(ex.focus_node("b2"));
    assert!(near(view_pos(&ex, "b2"), Point::new(400.0, 300.0)));
    assert!(!ex.focus_node("nope"));
}

#[test]
fn resizing_keeps_the_camera() {
    let mut ex = explorer();
    let transform = ex.viewport().transform();
    ex.set_view_size(Size::new(1024.0, 768.0));
    assert_eq!(ex.viewport().transform(), transform);
    assert_eq!(ex.viewport().view_rect().size(), Size::new(1024.0, 768.0));
}

#[cfg(feature = "serde")]
#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: ExplorerConfig =
        serde_json::from_str(r#"{ "viewport": { "zoom_limits": { "min": 0.5, "max": 2.0 } } }"#)
            .unwrap();
    assert_eq!(config.viewport.zoom_limits.min, 0.5);
    assert_eq!(config.viewport.zoom_limits.max, 2.0);
    assert_eq!(config.layout, ExplorerConfig::default().layout);
    assert_eq!(config.cards, ExplorerConfig::default().cards);
}
