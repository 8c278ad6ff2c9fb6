//! Tuning loaded from a config file changes how lists behave.

use std::fs;

use linkman_config::{ConfigError, LinkmanConfig};
use linkman_core::{GestureSample, ListEvent, PanelWidth, RevealState, SwipeList, SwipeTuning};

use crate::common::{FRAME, id, settle, swipe};

fn load(contents: &str) -> Result<Option<LinkmanConfig>, ConfigError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    LinkmanConfig::load_from(&path)
}

fn list_with(tuning: SwipeTuning, ids: &[&str]) -> SwipeList {
    let mut list = SwipeList::new(PanelWidth::STANDARD, tuning, 3);
    list.sync(ids.iter().map(|raw| id(raw)));
    list
}

#[test]
fn raised_open_fraction_needs_a_longer_drag() {
    let config = load("[swipe]\nopen_fraction = 0.5\n").unwrap().unwrap();
    let ui = config.ui_options_with(None);
    let tuning = config
        .swipe_tuning(SwipeTuning::conversations(), &ui)
        .unwrap();

    let mut list = list_with(tuning, &["a"]);
    swipe(&mut list, "a", -100.0, 0.0);
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingClosed));
    settle(&mut list);

    swipe(&mut list, "a", -130.0, 0.0);
    assert_eq!(list.state(&id("a")), Some(RevealState::SettlingOpen));
}

#[test]
fn reduced_motion_settles_on_the_next_frame() {
    let config = load("[ui]\nreduced_motion = true\n").unwrap().unwrap();
    let ui = config.ui_options_with(None);
    let tuning = config.swipe_tuning(SwipeTuning::contacts(), &ui).unwrap();

    let mut list = list_with(tuning, &["a", "b"]);
    list.open(&id("a"));
    assert_eq!(list.tick(FRAME), vec![ListEvent::Opened(id("a"))]);
    assert_eq!(list.offset(&id("a")).get(), -240.0);

    list.open(&id("b"));
    let events = list.tick(FRAME);
    assert!(events.contains(&ListEvent::Closed(id("a"))));
    assert!(events.contains(&ListEvent::Opened(id("b"))));
    assert!(!list.is_animating());
}

#[test]
fn contacts_tap_box_from_file() {
    let config = load("[swipe]\ntap_slop = 6.0\n").unwrap().unwrap();
    let ui = config.ui_options_with(None);
    let tuning = config.swipe_tuning(SwipeTuning::contacts(), &ui).unwrap();

    let mut list = list_with(tuning, &["a"]);
    list.open(&id("a"));
    settle(&mut list);

    // A 4-unit wobble on the open row stays a tap with the wider box.
    list.gesture_start(&id("a"));
    assert!(!list.gesture_move(GestureSample::moved(-4.0, 1.0)));
    list.gesture_end(GestureSample::moved(-4.0, 1.0));
    let events = settle(&mut list);
    assert_eq!(
        events,
        vec![ListEvent::Closed(id("a")), ListEvent::Activated(id("a"))]
    );
}

#[test]
fn broken_file_is_an_error_with_its_path() {
    let err = load("[swipe]\nopen_fraction = \"lots\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.path().is_some_and(|path| path.ends_with("config.toml")));
}

#[test]
fn invalid_values_fail_validation() {
    let config = load("[swipe]\nclaim_slop = -1.0\n").unwrap().unwrap();
    let err = config
        .swipe_tuning(SwipeTuning::conversations(), &config.ui_options_with(None))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Tuning(_)));
}
