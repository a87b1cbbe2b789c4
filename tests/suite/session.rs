//! Whole sessions driven frame by frame, the way the binary runs them.

use std::time::Duration;

use paws_engine::{ContactId, Decision, GesturePhase, HitTarget, Phase, Point, Release};

use crate::common::{NamedDeck, app, app_with_deck, drag, liked_ids, options, run_for};

const MOUSE: ContactId = ContactId(0);

#[test]
fn three_card_session_with_default_timings() {
    let mut app = app(options(3));
    assert_eq!(app.phase(), Phase::Loading);

    run_for(&mut app, Duration::from_millis(500));
    assert_eq!(app.phase(), Phase::Swiping);

    for (expected_index, dx) in [(1, 180.0), (2, -250.0), (3, 101.0)] {
        assert!(matches!(drag(&mut app, MOUSE, dx), Release::Committed(_)));
        run_for(&mut app, Duration::from_millis(300));
        assert_eq!(app.state().current_index(), expected_index);
    }

    // Last card decided; the summary follows after its own pause.
    assert_eq!(app.phase(), Phase::Swiping);
    run_for(&mut app, Duration::from_millis(300));
    assert_eq!(app.phase(), Phase::Summary);
    assert_eq!(liked_ids(&app), ["cat-0", "cat-2"]);
    assert_eq!(app.summary().approval_percentage(), 67);
}

#[test]
fn index_never_decreases_and_likes_stay_ordered() {
    let mut app = app(options(6).without_motion());
    let pattern = [true, true, false, true, false, false];
    let mut last_index = 0;

    for liked in pattern {
        let dx = if liked { 300.0 } else { -300.0 };
        drag(&mut app, MOUSE, dx);
        app.tick(Duration::ZERO);
        let index = app.state().current_index();
        assert!(index > last_index);
        last_index = index;
    }

    assert_eq!(liked_ids(&app), ["cat-0", "cat-1", "cat-3"]);
    assert_eq!(app.summary().total(), 6);
    assert_eq!(app.summary().approval_percentage(), 50);
}

#[test]
fn snap_back_then_commit_counts_once() {
    let mut app = app(options(2).without_motion());
    assert_eq!(drag(&mut app, MOUSE, 99.0), Release::SnappedBack);
    assert_eq!(drag(&mut app, MOUSE, -100.0), Release::SnappedBack);
    app.tick(Duration::ZERO);
    assert_eq!(app.state().current_index(), 0);

    assert_eq!(
        drag(&mut app, MOUSE, -100.5),
        Release::Committed(Decision::Dislike)
    );
    app.tick(Duration::ZERO);
    app.tick(Duration::ZERO);
    assert_eq!(app.state().current_index(), 1);
    assert!(liked_ids(&app).is_empty());
}

#[test]
fn second_contact_cannot_steal_a_drag() {
    let mut app = app(options(2).without_motion());
    let first = ContactId(0);
    let second = ContactId(1);

    app.pointer_down_on(Some(HitTarget::TopCard), first, Point::new(0.0, 0.0));
    app.pointer_down_on(Some(HitTarget::TopCard), second, Point::new(0.0, 0.0));
    app.pointer_move_to(second, Point::new(-500.0, 0.0));
    assert_eq!(app.pointer_up(second), Release::Ignored);
    assert_eq!(app.top_phase(), Some(GesturePhase::Dragging));

    app.pointer_move_to(first, Point::new(150.0, 0.0));
    assert_eq!(app.pointer_up(first), Release::Committed(Decision::Like));
}

#[test]
fn drag_on_card_beneath_changes_nothing() {
    let mut app = app(options(3).without_motion());
    app.pointer_down_on(Some(HitTarget::BeneathCard), MOUSE, Point::new(0.0, 0.0));
    app.pointer_move_to(MOUSE, Point::new(500.0, 0.0));
    assert_eq!(app.pointer_up(MOUSE), Release::Ignored);
    app.tick(Duration::ZERO);

    assert_eq!(app.state().current_index(), 0);
    assert_eq!(app.top_phase(), Some(GesturePhase::Idle));
}

#[test]
fn restart_during_loading_restarts_the_delay() {
    let mut app = app(options(2));
    app.tick(Duration::from_millis(300));
    app.restart();

    app.tick(Duration::from_millis(499));
    assert_eq!(app.phase(), Phase::Loading);
    app.tick(Duration::from_millis(1));
    assert_eq!(app.phase(), Phase::Swiping);
}

#[test]
fn restart_from_summary_deals_a_fresh_deck() {
    let mut app = app(options(2).without_motion());
    drag(&mut app, MOUSE, 200.0);
    app.tick(Duration::ZERO);
    drag(&mut app, MOUSE, 200.0);
    app.tick(Duration::ZERO);
    assert_eq!(app.phase(), Phase::Summary);
    assert_eq!(app.summary().liked_count(), 2);

    app.pointer_down_on(Some(HitTarget::RestartButton), MOUSE, Point::new(0.0, 0.0));
    assert_eq!(app.phase(), Phase::Swiping);
    assert_eq!(app.state().current_index(), 0);
    assert_eq!(app.state().len(), 2);
    assert!(liked_ids(&app).is_empty());
    assert_eq!(app.cards().len(), 2);
}

#[test]
fn restart_during_fly_off_never_reports_the_old_card() {
    let mut app = app(options(1).with_load_delay(Duration::ZERO));
    drag(&mut app, MOUSE, 400.0);
    run_for(&mut app, Duration::from_millis(100));

    app.restart();
    run_for(&mut app, Duration::from_secs(2));

    assert_eq!(app.phase(), Phase::Swiping);
    assert_eq!(app.state().current_index(), 0);
    assert!(liked_ids(&app).is_empty());
}

#[test]
fn custom_deck_source_flows_through_to_summary() {
    let deck = NamedDeck(&["tabby", "calico", "tuxedo"]);
    let mut app = app_with_deck(options(3).without_motion(), deck);

    let names: Vec<_> = app
        .cards()
        .iter()
        .map(|card| card.item.id().to_string())
        .collect();
    assert_eq!(names, ["calico", "tabby"]);

    for dx in [-200.0, 200.0, 200.0] {
        drag(&mut app, MOUSE, dx);
        app.tick(Duration::ZERO);
    }
    assert_eq!(liked_ids(&app), ["calico", "tuxedo"]);
    assert_eq!(
        app.summary().liked_items()[0].image_ref(),
        "memory://calico"
    );
}
