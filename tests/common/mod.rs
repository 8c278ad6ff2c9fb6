//! Shared test utilities and fixtures
//!
//! Drives a `SwipeList` the way the screen layer does: gesture samples in,
//! fixed 16ms frames out.

#![allow(dead_code)]

use std::time::Duration;

use linkman_core::{GestureSample, ListEvent, PanelWidth, RowId, SwipeList, SwipeTuning};

pub const FRAME: Duration = Duration::from_millis(16);

pub fn id(raw: &str) -> RowId {
    RowId::from(raw)
}

/// A conversation-list sized list with the three stock action slots.
pub fn conversation_list(ids: &[&str]) -> SwipeList {
    let mut list = SwipeList::new(PanelWidth::STANDARD, SwipeTuning::conversations(), 3);
    list.sync(ids.iter().map(|raw| id(raw)));
    list
}

/// Touch-down, move to `to` in 10-unit steps, release with `velocity_x`.
pub fn swipe(list: &mut SwipeList, row: &str, to: f32, velocity_x: f32) {
    list.gesture_start(&id(row));
    let step = if to < 0.0 { -10.0 } else { 10.0 };
    let mut dx = 0.0_f32;
    while (dx - to).abs() > f32::EPSILON {
        dx = if to < 0.0 { (dx + step).max(to) } else { (dx + step).min(to) };
        list.gesture_move(GestureSample::moved(dx, 0.0));
    }
    list.gesture_end(GestureSample::new(to, 0.0, velocity_x));
}

/// Run frames until nothing animates, checking the single-open invariant
/// on every frame.
pub fn settle(list: &mut SwipeList) -> Vec<ListEvent> {
    let mut events = Vec::new();
    for _ in 0..400 {
        events.extend(list.tick(FRAME));
        assert!(
            list.open_intent_count() <= 1,
            "more than one row open: {list:?}"
        );
        if !list.is_animating() {
            break;
        }
    }
    events
}
