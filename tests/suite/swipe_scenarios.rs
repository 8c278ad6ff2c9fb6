//! End-to-end swipe scenarios on a 240-unit conversation list.

use linkman_core::{GestureSample, ListEvent, RevealState};

use crate::common::{FRAME, conversation_list, id, settle, swipe};

#[test]
fn drag_past_threshold_opens_without_velocity() {
    let mut list = conversation_list(&["a"]);
    swipe(&mut list, "a", -100.0, 0.0);
    // -100 is past 0.3 * 240 = 72.
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingOpen));
    assert_eq!(settle(&mut list), vec![ListEvent::Opened(id("a"))]);
    assert_eq!(list.offset(&id("a")).get(), -240.0);
}

#[test]
fn short_drag_without_velocity_settles_closed() {
    let mut list = conversation_list(&["a"]);
    swipe(&mut list, "a", -60.0, 0.0);
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingClosed));
    let events = settle(&mut list);
    assert_eq!(events, vec![ListEvent::Closed(id("a"))]);
    assert_eq!(list.offset(&id("a")).get(), 0.0);
}

#[test]
fn flick_opens_a_short_drag() {
    let mut list = conversation_list(&["a"]);
    swipe(&mut list, "a", -80.0, -1.5);
    assert_eq!(list.open_row(), Some(&id("a")));
    let events = settle(&mut list);
    assert_eq!(events, vec![ListEvent::Opened(id("a"))]);
    assert_eq!(list.offset(&id("a")).get(), -240.0);
    assert_eq!(list.state(&id("a")), Some(RevealState::Open));
}

#[test]
fn touching_another_row_closes_the_open_one_before_claim() {
    let mut list = conversation_list(&["a", "b"]);
    swipe(&mut list, "a", -80.0, -1.5);
    settle(&mut list);
    assert_eq!(list.state(&id("a")), Some(RevealState::Open));

    list.gesture_start(&id("b"));
    // Row A is already retracting, before B has claimed anything.
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingClosed));
    assert_eq!(list.state(&id("b")), Some(RevealState::Closed));
    assert_eq!(list.open_row(), None);

    assert!(list.gesture_move(GestureSample::moved(-20.0, 0.0)));
    assert_eq!(list.state(&id("b")), Some(RevealState::Dragging));
    list.gesture_move(GestureSample::moved(-160.0, 0.0));
    list.gesture_end(GestureSample::new(-160.0, 0.0, -0.2));
    assert_eq!(list.open_row(), Some(&id("b")));

    let events = settle(&mut list);
    assert!(events.contains(&ListEvent::Closed(id("a"))));
    assert!(events.contains(&ListEvent::Opened(id("b"))));
    assert_eq!(list.offset(&id("a")).get(), 0.0);
    assert_eq!(list.offset(&id("b")).get(), -240.0);
}

#[test]
fn programmatic_open_preempts_a_drag_in_progress() {
    let mut list = conversation_list(&["a", "b"]);
    list.gesture_start(&id("a"));
    list.gesture_move(GestureSample::moved(-90.0, 0.0));
    assert_eq!(list.state(&id("a")), Some(RevealState::Dragging));

    list.open(&id("b"));
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingClosed));
    assert_eq!(list.state(&id("b")), Some(RevealState::SettlingOpen));

    // The rest of A's gesture is swallowed.
    assert!(!list.gesture_move(GestureSample::moved(-200.0, 0.0)));
    list.gesture_end(GestureSample::new(-200.0, 0.0, -3.0));
    assert_eq!(list.open_row(), Some(&id("b")));

    settle(&mut list);
    assert_eq!(list.offset(&id("a")).get(), 0.0);
    assert_eq!(list.state(&id("a")), Some(RevealState::Closed));
    assert_eq!(list.state(&id("b")), Some(RevealState::Open));
}

#[test]
fn terminated_gesture_never_stays_half_open() {
    let mut list = conversation_list(&["a"]);
    list.gesture_start(&id("a"));
    list.gesture_move(GestureSample::moved(-50.0, 0.0));
    list.gesture_terminate();
    settle(&mut list);
    let offset = list.offset(&id("a")).get();
    assert!(offset == 0.0 || offset == -240.0, "left at {offset}");
    assert_eq!(list.state(&id("a")), Some(RevealState::Closed));
}

#[test]
fn scroll_during_touch_terminates_and_closes() {
    let mut list = conversation_list(&["a", "b"]);
    list.open(&id("a"));
    settle(&mut list);

    list.gesture_start(&id("b"));
    list.gesture_move(GestureSample::moved(-2.0, -8.0));
    list.scroll_began();
    settle(&mut list);
    assert_eq!(list.state(&id("a")), Some(RevealState::Closed));
    assert_eq!(list.state(&id("b")), Some(RevealState::Closed));
    assert_eq!(list.open_row(), None);
}

#[test]
fn second_swipe_mid_settle_continues_without_snap() {
    let mut list = conversation_list(&["a"]);
    swipe(&mut list, "a", -150.0, 0.0);
    list.tick(FRAME);
    let live = list.offset(&id("a")).get();
    assert!(live < -150.0 && live > -240.0);

    // Grab it again before it lands and push it back right.
    list.gesture_start(&id("a"));
    list.gesture_move(GestureSample::moved(5.0, 0.0));
    let grabbed = list.offset(&id("a")).get();
    assert!((grabbed - (live + 5.0)).abs() < 1e-3);

    list.gesture_move(GestureSample::moved(200.0, 0.0));
    list.gesture_end(GestureSample::new(200.0, 0.0, 1.0));
    let events = settle(&mut list);
    assert_eq!(events, vec![ListEvent::Closed(id("a"))]);
}

#[test]
fn action_press_outside_open_is_a_noop() {
    let mut list = conversation_list(&["a"]);
    list.gesture_start(&id("a"));
    list.gesture_move(GestureSample::moved(-120.0, 0.0));
    assert!(!list.press_action(&id("a"), 0));
    list.gesture_end(GestureSample::new(-120.0, 0.0, 0.0));
    assert!(!list.press_action(&id("a"), 0));
    settle(&mut list);
    assert!(list.press_action(&id("a"), 0));
    let events = settle(&mut list);
    assert_eq!(
        events,
        vec![
            ListEvent::ActionFired {
                row: id("a"),
                slot: 0
            },
            ListEvent::Closed(id("a"))
        ]
    );
}

#[test]
fn close_twice_is_a_single_animation() {
    let mut list = conversation_list(&["a"]);
    list.close(&id("a"));
    list.close(&id("a"));
    assert!(!list.is_animating());
    assert!(settle(&mut list).is_empty());

    list.open(&id("a"));
    settle(&mut list);
    list.close(&id("a"));
    list.close(&id("a"));
    assert_eq!(settle(&mut list), vec![ListEvent::Closed(id("a"))]);
}

#[test]
fn reordering_does_not_move_the_open_panel() {
    let mut list = conversation_list(&["a", "b", "c"]);
    list.open(&id("b"));
    settle(&mut list);
    list.sync([id("b"), id("a"), id("c")]);
    assert_eq!(list.state(&id("b")), Some(RevealState::Open));
    assert_eq!(list.state(&id("a")), Some(RevealState::Closed));
    assert_eq!(list.open_intent_count(), 1);
}

#[test]
fn unmounting_a_dragged_row_drops_the_gesture_and_its_record() {
    let mut list = conversation_list(&["a", "b"]);
    list.open(&id("a"));
    settle(&mut list);
    assert_eq!(list.open_row(), Some(&id("a")));

    list.gesture_start(&id("a"));
    assert!(list.gesture_move(GestureSample::moved(-20.0, 0.0)));
    list.gesture_move(GestureSample::moved(-100.0, 0.0));
    assert_eq!(list.state(&id("a")), Some(RevealState::Dragging));
    assert_eq!(list.open_row(), Some(&id("a")));

    list.unmount(&id("a"));
    assert_eq!(list.open_row(), None);
    assert_eq!(list.state(&id("a")), None);

    // The rest of the gesture has nowhere to go.
    assert!(!list.gesture_move(GestureSample::moved(-200.0, 0.0)));
    list.gesture_end(GestureSample::new(-200.0, 0.0, -2.0));
    list.gesture_terminate();
    assert!(list.take_events().is_empty());
    assert!(settle(&mut list).is_empty());
    assert_eq!(list.open_intent_count(), 0);

    // The list is still usable afterwards.
    list.open(&id("b"));
    assert_eq!(settle(&mut list), vec![ListEvent::Opened(id("b"))]);
    assert_eq!(list.open_row(), Some(&id("b")));
}

#[test]
fn unmounting_a_settling_row_never_reports_it() {
    let mut list = conversation_list(&["a", "b"]);
    swipe(&mut list, "a", -150.0, 0.0);
    list.tick(FRAME);
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingOpen));
    assert_eq!(list.open_row(), Some(&id("a")));

    list.unmount(&id("a"));
    assert_eq!(list.open_row(), None);
    assert!(settle(&mut list).is_empty());
    assert_eq!(list.open_intent_count(), 0);
}
