use std::cell::RefCell;
use std::rc::Rc;

use gyre_core::prelude::*;
use gyre_core::testing::{ScriptedEngine, TrackCommand};

fn finite(
    slide_count: usize,
    slides_per_view: usize,
) -> VirtualCarousel<ScriptedEngine> {
    VirtualCarousel::new(
        slide_count,
        slides_per_view,
        WrapMode::Finite,
        ScriptedEngine::finite(slide_count, slides_per_view),
    )
    .expect("valid carousel")
}

fn looping(slide_count: usize) -> VirtualCarousel<ScriptedEngine> {
    VirtualCarousel::new(
        slide_count,
        1,
        WrapMode::Infinite,
        ScriptedEngine::looping(slide_count),
    )
    .expect("valid carousel")
}

/// Simulate a user drag: move the track directly, then report it the way a
/// real engine binding fires its change event.
fn drag_to(carousel: &mut VirtualCarousel<ScriptedEngine>, position: usize) {
    carousel.engine_mut().slide_to(position);
    carousel.update_physical_index(position);
}

fn record(
    carousel: &mut VirtualCarousel<ScriptedEngine>,
) -> Rc<RefCell<Vec<ActiveStateChange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    carousel.subscribe(move |change| sink.borrow_mut().push(change));
    seen
}

#[test]
fn next_walks_virtual_past_physical_limit() {
    // 5 slides, 3 visible: the track stops at position 2.
    let mut carousel = finite(5, 3);

    let expected = [(1usize, 1usize), (2, 2), (3, 2), (4, 2)];
    for (active, physical) in expected {
        carousel.go_next();
        assert_eq!(carousel.active_index(), active);
        assert_eq!(carousel.engine().position(), physical);
    }

    // Only the first two steps actually scrolled.
    assert_eq!(
        carousel.engine().commands(),
        [TrackCommand::Next, TrackCommand::Next]
    );

    // At the last slide a further step changes nothing.
    carousel.go_next();
    assert_eq!(carousel.active_index(), 4);
    assert_eq!(carousel.engine().position(), 2);
}

#[test]
fn previous_unwinds_virtual_before_scrolling() {
    let mut carousel = finite(5, 3);
    carousel.go_to(4).expect("in range");

    let expected = [(3usize, 2usize), (2, 2), (1, 1), (0, 0)];
    for (active, physical) in expected {
        carousel.go_previous();
        assert_eq!(carousel.active_index(), active);
        assert_eq!(carousel.engine().position(), physical);
    }

    carousel.go_previous();
    assert_eq!(carousel.active_index(), 0);
    assert_eq!(carousel.engine().position(), 0);
}

#[test]
fn bullet_jump_clamps_track_not_highlight() {
    let mut carousel = finite(5, 3);
    carousel.go_to(4).expect("in range");

    assert_eq!(carousel.active_index(), 4);
    assert_eq!(carousel.engine().position(), 2);
    assert_eq!(carousel.engine().commands(), [TrackCommand::To(2)]);
}

#[test]
fn jump_backward_lands_track_on_target() {
    let mut carousel = finite(5, 3);
    carousel.go_to(4).expect("in range");
    carousel.go_to(1).expect("in range");

    assert_eq!(carousel.active_index(), 1);
    assert_eq!(carousel.engine().position(), 1);
}

#[test]
fn drag_forward_drags_highlight_along() {
    let mut carousel = finite(5, 3);
    drag_to(&mut carousel, 2);
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn drag_back_past_window_resyncs_highlight() {
    let mut carousel = finite(5, 3);
    carousel.go_to(4).expect("in range");

    // Slide 4 is no longer visible from position 1 (window 1..=3).
    drag_to(&mut carousel, 1);
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn drag_back_within_window_keeps_highlight() {
    let mut carousel = finite(5, 3);
    carousel.go_to(3).expect("in range");

    // Slide 3 is still visible from position 1, so the highlight stays.
    drag_to(&mut carousel, 1);
    assert_eq!(carousel.active_index(), 3);
}

#[test]
fn next_after_drag_back_scrolls_track_along() {
    let mut carousel = finite(5, 3);
    carousel.go_to(3).expect("in range");
    drag_to(&mut carousel, 1);

    // Highlight 3 sits at the edge of window 1..=3 with the track short of
    // its limit; stepping to slide 4 must bring the engine along.
    carousel.go_next();
    assert_eq!(carousel.active_index(), 4);
    assert_eq!(carousel.engine().position(), 2);

    // The settled position echoes back like any engine move and changes
    // nothing.
    carousel.update_physical_index(2);
    assert_eq!(carousel.active_index(), 4);
}

#[test]
fn echoed_reports_are_idempotent() {
    let mut carousel = finite(5, 3);
    carousel.go_next();
    carousel.go_next();

    // A controller-driven move echoes back through the engine's change
    // event; replaying the current position must not perturb anything.
    let physical = carousel.engine().position();
    for _ in 0..3 {
        carousel.update_physical_index(physical);
        assert_eq!(carousel.active_index(), 2);
    }
}

#[test]
fn looping_carousel_mirrors_engine() {
    let mut carousel = looping(4);

    carousel.go_previous();
    assert_eq!(carousel.active_index(), 3);

    carousel.go_next();
    assert_eq!(carousel.active_index(), 0);

    carousel.go_to(3).expect("in range");
    carousel.go_next();
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn looping_carousel_never_disables_navigation() {
    let mut carousel = looping(4);
    assert!(carousel.can_go_previous());
    assert!(carousel.can_go_next());

    carousel.go_to(3).expect("in range");
    assert!(carousel.can_go_previous());
    assert!(carousel.can_go_next());
}

#[test]
fn looping_jump_uses_real_addressing() {
    let mut carousel = looping(4);
    carousel.go_to(2).expect("in range");

    assert_eq!(carousel.active_index(), 2);
    assert_eq!(carousel.engine().commands(), [TrackCommand::ToReal(2)]);
}

#[test]
fn looping_reports_reread_engine_real_index() {
    let mut carousel = looping(4);

    // Raw positions from a looping track can point at clone slides; the
    // controller asks the engine for the real index instead.
    carousel.engine_mut().slide_to_real(2);
    carousel.update_physical_index(0);
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn every_operation_emits_one_snapshot() {
    let mut carousel = finite(5, 3);
    let seen = record(&mut carousel);

    carousel.go_next();
    carousel.go_previous();
    carousel.go_to(2).expect("in range");
    carousel.update_physical_index(2);

    assert_eq!(seen.borrow().len(), 4);
}

#[test]
fn snapshots_carry_post_transition_state() {
    let mut carousel = finite(5, 3);
    let seen = record(&mut carousel);

    carousel.go_next();

    let snapshot = *seen.borrow().last().expect("one snapshot");
    assert_eq!(
        snapshot,
        ActiveStateChange {
            active_index: 1,
            can_go_previous: true,
            can_go_next: true,
        }
    );
}

#[test]
fn boundary_noop_still_notifies() {
    let mut carousel = finite(5, 3);
    let seen = record(&mut carousel);

    // Already at the first slide; the index cannot move but the
    // presentation layer still gets a snapshot to apply.
    carousel.go_previous();

    let snapshot = *seen.borrow().last().expect("one snapshot");
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(snapshot.active_index, 0);
    assert!(!snapshot.can_go_previous);
}

#[test]
fn rejected_jump_does_not_notify() {
    let mut carousel = finite(5, 3);
    let seen = record(&mut carousel);

    assert!(carousel.go_to(7).is_err());
    assert!(seen.borrow().is_empty());
}

#[test]
fn listeners_fire_in_subscription_order() {
    let mut carousel = finite(5, 3);
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    carousel.subscribe(move |_| first.borrow_mut().push(1));
    let second = Rc::clone(&order);
    carousel.subscribe(move |_| second.borrow_mut().push(2));

    carousel.go_next();
    assert_eq!(*order.borrow(), [1, 2]);
}

#[test]
fn breakpoint_reinit_preserves_track_position() {
    let mut registry: CarouselRegistry<&str, ScriptedEngine> =
        CarouselRegistry::new();
    registry.insert("related", finite(5, 3));

    let carousel = registry.get_mut(&"related").expect("registered");
    carousel.go_to(4).expect("in range");
    let physical = carousel.engine().position();

    // Viewport narrowed to the tablet tier: rebuild with 2 visible slides
    // on a track resuming where the old one stopped.
    let displaced = registry
        .insert(
            "related",
            VirtualCarousel::new(
                5,
                2,
                WrapMode::Finite,
                ScriptedEngine::finite(5, 2).at(physical),
            )
            .expect("valid carousel"),
        )
        .expect("displaced old instance");
    assert_eq!(displaced.slides_per_view(), 3);

    let rebuilt = registry.get(&"related").expect("registered");
    assert_eq!(rebuilt.slides_per_view(), 2);
    assert_eq!(rebuilt.active_index(), physical);
}

#[test]
fn focus_routes_shared_input_to_hovered_carousel() {
    let mut registry: CarouselRegistry<&str, ScriptedEngine> =
        CarouselRegistry::new();
    registry.insert("featured", finite(5, 3));
    registry.insert("related", finite(8, 3));

    let mut focus = CarouselFocus::new();
    focus.set_pinned(Some("featured"));
    focus.set_hovered(Some("related"));

    let target = *focus.target().expect("focused carousel");
    registry.get_mut(&target).expect("registered").go_next();

    assert_eq!(registry.get(&"related").unwrap().active_index(), 1);
    assert_eq!(registry.get(&"featured").unwrap().active_index(), 0);
}
