//! Application state: two list screens, the pointer in flight and the
//! status line.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use linkman_config::UiOptions;
use linkman_core::SwipeTuning;

use crate::data::{Contact, Conversation};
use crate::effects::{action_slot_at, row_slide};
use crate::gesture::PointerGesture;
use crate::screen::{ACTION_SLOTS, ListScreen, SwipeScreen};

/// Terminal lines per list row.
pub const ROW_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chats,
    Contacts,
}

impl Screen {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Chats => "Chats",
            Screen::Contacts => "Contacts",
        }
    }

    fn other(self) -> Self {
        match self {
            Screen::Chats => Screen::Contacts,
            Screen::Contacts => Screen::Chats,
        }
    }
}

pub struct App {
    options: UiOptions,
    screen: Screen,
    chats: SwipeScreen<Conversation>,
    contacts: SwipeScreen<Contact>,
    pointer: Option<PointerGesture>,
    /// Where the active list was last drawn.
    list_area: Rect,
    status: Option<String>,
    now: NaiveDateTime,
    quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        options: UiOptions,
        chat_tuning: SwipeTuning,
        contact_tuning: SwipeTuning,
        conversations: Vec<Conversation>,
        contacts: Vec<Contact>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            options,
            screen: Screen::Chats,
            chats: SwipeScreen::new(conversations, chat_tuning),
            contacts: SwipeScreen::new(contacts, contact_tuning),
            pointer: None,
            list_area: Rect::default(),
            status: None,
            now,
            quit: false,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn chats(&self) -> &SwipeScreen<Conversation> {
        &self.chats
    }

    #[must_use]
    pub fn contacts(&self) -> &SwipeScreen<Contact> {
        &self.contacts
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Recorded by the renderer so pointer events can be mapped to rows.
    pub fn set_list_area(&mut self, area: Rect) {
        self.list_area = area;
    }

    #[must_use]
    pub fn list_area(&self) -> Rect {
        self.list_area
    }

    #[must_use]
    pub fn visible_rows(&self) -> usize {
        usize::from(self.list_area.height / ROW_HEIGHT)
    }

    fn active(&self) -> &dyn ListScreen {
        match self.screen {
            Screen::Chats => &self.chats,
            Screen::Contacts => &self.contacts,
        }
    }

    fn active_mut(&mut self) -> &mut dyn ListScreen {
        match self.screen {
            Screen::Chats => &mut self.chats,
            Screen::Contacts => &mut self.contacts,
        }
    }

    /// Advance both lists; the inactive one may still be settling after a
    /// screen switch.
    pub fn tick(&mut self, delta: Duration) {
        let mut messages = self.chats.tick(delta);
        messages.extend(self.contacts.tick(delta));
        self.post(messages);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.chats.list().is_animating() || self.contacts.list().is_animating()
    }

    fn post(&mut self, messages: Vec<String>) {
        if let Some(last) = messages.into_iter().last() {
            debug!(status = %last, "status");
            self.status = Some(last);
        }
    }

    fn drain(&mut self) {
        let messages = self.active_mut().drain();
        self.post(messages);
    }

    pub fn switch_screen(&mut self) {
        self.pointer = None;
        self.active_mut().blur();
        self.screen = self.screen.other();
        debug!(screen = self.screen.title(), "switched screen");
    }

    /// The terminal lost focus: drop the pointer and close the open row.
    pub fn blur(&mut self) {
        self.pointer = None;
        self.active_mut().blur();
        self.drain();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        let visible = self.visible_rows();
        let screen = self.active_mut();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.switch_screen(),
            KeyCode::Up | KeyCode::Char('k') => {
                screen.select_prev();
                screen.keep_selected_visible(visible);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                screen.select_next();
                screen.keep_selected_visible(visible);
            }
            KeyCode::Left | KeyCode::Char('h') => screen.open_selected(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Esc => screen.close_selected(),
            KeyCode::Enter | KeyCode::Char(' ') => screen.press_selected(),
            KeyCode::Char(c @ '1'..='3') => {
                let slot = usize::from(c as u8 - b'1');
                let index = screen.selected();
                if !screen.press_action(index, slot) {
                    self.status = Some("Swipe the row open first".to_string());
                }
            }
            _ => {}
        }
        self.drain();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let area = self.list_area;
        let inside = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !inside {
                    return;
                }
                self.pointer_down(mouse.column, mouse.row, now);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(pointer) = self.pointer.as_mut() {
                    let sample = pointer.sample(mouse.column, mouse.row, now);
                    self.active_mut().gesture_move(sample);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(pointer) = self.pointer.take() {
                    let sample = pointer.release(mouse.column, mouse.row, now);
                    self.active_mut().gesture_end(sample);
                }
            }
            MouseEventKind::ScrollDown if inside => {
                self.pointer = None;
                let visible = self.visible_rows();
                self.active_mut().scroll_by(1, visible);
            }
            MouseEventKind::ScrollUp if inside => {
                self.pointer = None;
                let visible = self.visible_rows();
                self.active_mut().scroll_by(-1, visible);
            }
            _ => {}
        }
        self.drain();
    }

    fn pointer_down(&mut self, column: u16, line: u16, now: Instant) {
        let area = self.list_area;
        let units_per_column = self.options.units_per_column;
        let slot_in_row = (line - area.y) / ROW_HEIGHT;
        let index = self.active().scroll() + usize::from(slot_in_row);

        let screen = self.active_mut();
        if index >= screen.len() {
            screen.tap_outside();
            self.pointer = None;
            return;
        }

        // Buttons on a fully open row take the click themselves.
        if let Some(row) = screen.row(index)
            && row.actions_enabled()
        {
            let row_area = Rect {
                x: area.x,
                y: area.y + slot_in_row * ROW_HEIGHT,
                width: area.width,
                height: ROW_HEIGHT,
            };
            let slide = row_slide(
                row_area,
                row.offset().get(),
                row.width().get(),
                row.panel_translation(),
                units_per_column,
            );
            if let Some(slot) = action_slot_at(&slide, column, ACTION_SLOTS) {
                screen.select(index);
                screen.press_action(index, slot);
                return;
            }
        }

        screen.gesture_start(index);
        self.pointer = Some(PointerGesture::new(index, column, line, units_per_column, now));
    }
}
