//! Conversation and contact screens driven through the public TUI surface.

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use linkman_config::UiOptions;
use linkman_core::{RevealState, SwipeTuning};
use linkman_tui::{
    App, Contact, Conversation, ListScreen, SwipeScreen, draw, sample_contacts,
    sample_conversations,
};

use crate::common::{FRAME, id};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn chats() -> SwipeScreen<Conversation> {
    SwipeScreen::new(sample_conversations(now()), SwipeTuning::conversations())
}

fn run_frames(screen: &mut dyn ListScreen) -> Vec<String> {
    let mut messages = Vec::new();
    for _ in 0..200 {
        messages.extend(screen.tick(FRAME));
    }
    messages
}

fn index_of(screen: &SwipeScreen<Conversation>, name: &str) -> usize {
    screen
        .items()
        .iter()
        .position(|c| c.name == name)
        .unwrap()
}

#[test]
fn deleting_from_the_panel_removes_the_row() {
    let mut screen = chats();
    let alice = index_of(&screen, "Alice");
    screen.select(alice);
    screen.open_selected();
    run_frames(&mut screen);
    assert_eq!(screen.list().state(&id("c-alice")), Some(RevealState::Open));

    assert!(screen.press_action(alice, 2));
    let messages = screen.drain();
    assert_eq!(messages, vec!["Deleted conversation with Alice".to_string()]);
    assert_eq!(screen.len(), 7);
    assert_eq!(screen.list().len(), 7);
    assert!(screen.list().row(&id("c-alice")).is_none());
    assert_eq!(screen.list().open_intent_count(), 0);
    assert!(screen.list().open_row().is_none());
}

#[test]
fn pinning_reorders_and_selection_follows() {
    let mut screen = chats();
    let bob = index_of(&screen, "Bob");
    screen.select(bob);
    screen.open_selected();
    run_frames(&mut screen);

    assert!(screen.press_action(bob, 0));
    assert_eq!(screen.drain(), vec!["Pinned Bob".to_string()]);
    let bob = index_of(&screen, "Bob");
    assert_eq!(bob, 1);
    assert_eq!(screen.selected(), bob);

    run_frames(&mut screen);
    assert_eq!(screen.list().state(&id("c-bob")), Some(RevealState::Closed));
}

#[test]
fn closed_row_ignores_action_presses() {
    let mut screen = chats();
    assert!(!screen.press_action(0, 2));
    assert!(screen.drain().is_empty());
    assert_eq!(screen.len(), 8);
}

#[test]
fn tapping_a_row_activates_it() {
    let mut screen = SwipeScreen::new(sample_contacts(), SwipeTuning::contacts());
    screen.press_selected();
    let first = screen.items()[0].display_name().to_string();
    let mut messages = screen.drain();
    messages.extend(run_frames(&mut screen));
    assert_eq!(messages, vec![format!("Opening {first}")]);
}

#[test]
fn removing_the_last_contact_leaves_an_empty_list() {
    let mut screen: SwipeScreen<Contact> =
        SwipeScreen::new(sample_contacts().into_iter().take(1).collect(), SwipeTuning::contacts());
    screen.open_selected();
    run_frames(&mut screen);
    assert!(screen.press_action(0, 2));
    screen.drain();
    assert!(screen.is_empty());
    assert!(screen.list().is_empty());
    screen.open_selected();
    screen.press_selected();
    assert!(run_frames(&mut screen).is_empty());
}

#[test]
fn tiny_terminal_still_draws() {
    let mut app = App::new(
        UiOptions::default(),
        SwipeTuning::conversations(),
        SwipeTuning::contacts(),
        sample_conversations(now()),
        sample_contacts(),
        now(),
    );
    for (width, height) in [(80, 24), (12, 4), (1, 1)] {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        for _ in 0..100 {
            app.tick(FRAME);
        }
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
    }
}
