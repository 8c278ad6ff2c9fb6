//! A list screen: the backing items, their `SwipeList`, selection and scroll.

use std::time::Duration;

use linkman_core::{
    GestureSample, ListEvent, PanelWidth, RowController, RowId, SwipeList, SwipeTuning,
};

/// Every row carries exactly three action buttons.
pub const ACTION_SLOTS: usize = 3;

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    Primary,
    Neutral,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub label: &'static str,
    pub tone: ActionTone,
}

/// Result of an action applied to the backing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub message: String,
    pub removed: bool,
}

/// Data shown in a swipe list.
pub trait ListItem {
    fn row_id(&self) -> &RowId;

    /// What the row says when it is opened.
    fn title(&self) -> &str;

    /// Action buttons in slot order, reflecting current state.
    fn actions(&self) -> [ActionSpec; ACTION_SLOTS];

    /// Mutate `self` for the action in `slot`.
    fn apply_action(&mut self, slot: usize) -> ActionOutcome;

    /// Display order of the whole list.
    fn sort(items: &mut [Self])
    where
        Self: Sized;
}

/// Operations the app drives on whichever screen is active.
pub trait ListScreen {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn selected(&self) -> usize;
    fn scroll(&self) -> usize;
    fn row_id_at(&self, index: usize) -> Option<RowId>;
    fn row(&self, index: usize) -> Option<&RowController>;

    fn select_next(&mut self);
    fn select_prev(&mut self);
    fn select(&mut self, index: usize);
    fn scroll_by(&mut self, delta: isize, visible: usize);
    fn keep_selected_visible(&mut self, visible: usize);

    fn open_selected(&mut self);
    fn close_selected(&mut self);
    fn press_selected(&mut self);
    fn press_action(&mut self, index: usize, slot: usize) -> bool;

    fn gesture_start(&mut self, index: usize);
    fn gesture_move(&mut self, sample: GestureSample) -> bool;
    fn gesture_end(&mut self, sample: GestureSample);
    fn gesture_terminate(&mut self);
    fn tap_outside(&mut self);
    fn blur(&mut self);

    /// Advance animations and apply whatever the list reported.
    fn tick(&mut self, delta: Duration) -> Vec<String>;
    /// Apply events raised since the last tick.
    fn drain(&mut self) -> Vec<String>;
}

#[derive(Debug)]
pub struct SwipeScreen<T> {
    items: Vec<T>,
    list: SwipeList,
    selected: usize,
    scroll: usize,
}

impl<T: ListItem> SwipeScreen<T> {
    #[must_use]
    pub fn new(mut items: Vec<T>, tuning: SwipeTuning) -> Self {
        T::sort(&mut items);
        let mut list = SwipeList::new(PanelWidth::STANDARD, tuning, ACTION_SLOTS);
        list.sync(items.iter().map(|item| item.row_id().clone()));
        Self {
            items,
            list,
            selected: 0,
            scroll: 0,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn list(&self) -> &SwipeList {
        &self.list
    }

    fn index_of(&self, id: &RowId) -> Option<usize> {
        self.items.iter().position(|item| item.row_id() == id)
    }

    fn resync(&mut self) {
        let selected = self.row_id_at(self.selected);
        T::sort(&mut self.items);
        self.list
            .sync(self.items.iter().map(|item| item.row_id().clone()));
        self.selected = selected
            .and_then(|id| self.index_of(&id))
            .unwrap_or(self.selected)
            .min(self.items.len().saturating_sub(1));
    }

    fn apply(&mut self, events: Vec<ListEvent>) -> Vec<String> {
        let mut messages = Vec::new();
        let mut reorder = false;
        for event in events {
            match event {
                ListEvent::Activated(id) => {
                    if let Some(item) = self.items.iter().find(|item| *item.row_id() == id) {
                        messages.push(format!("Opening {}", item.title()));
                    }
                }
                ListEvent::ActionFired { row, slot } => {
                    let Some(index) = self.index_of(&row) else {
                        continue;
                    };
                    let outcome = self.items[index].apply_action(slot);
                    tracing::debug!(row = %row, slot, removed = outcome.removed, "action applied");
                    if outcome.removed {
                        self.items.remove(index);
                    }
                    messages.push(outcome.message);
                    reorder = true;
                }
                ListEvent::Opened(_) | ListEvent::Closed(_) => {}
            }
        }
        if reorder {
            self.resync();
        }
        messages
    }

    fn selected_id(&self) -> Option<RowId> {
        self.row_id_at(self.selected)
    }
}

impl<T: ListItem> ListScreen for SwipeScreen<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn selected(&self) -> usize {
        self.selected
    }

    fn scroll(&self) -> usize {
        self.scroll
    }

    fn row_id_at(&self, index: usize) -> Option<RowId> {
        self.items.get(index).map(|item| item.row_id().clone())
    }

    fn row(&self, index: usize) -> Option<&RowController> {
        self.items
            .get(index)
            .and_then(|item| self.list.row(item.row_id()))
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    fn scroll_by(&mut self, delta: isize, visible: usize) {
        self.list.scroll_began();
        let visible = visible.max(1);
        let max = self.items.len().saturating_sub(visible);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
        self.selected = self
            .selected
            .clamp(self.scroll, self.scroll + visible - 1)
            .min(self.items.len().saturating_sub(1));
    }

    fn keep_selected_visible(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }
    }

    fn open_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.list.open(&id);
        }
    }

    fn close_selected(&mut self) {
        match self.selected_id() {
            Some(id) if self.list.open_row() == Some(&id) => self.list.close(&id),
            _ => self.list.close_active(),
        }
    }

    /// Keyboard press: a zero-length tap on the selected row.
    fn press_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.list.gesture_start(&id);
            self.list.gesture_end(GestureSample::moved(0.0, 0.0));
        }
    }

    fn press_action(&mut self, index: usize, slot: usize) -> bool {
        match self.row_id_at(index) {
            Some(id) => self.list.press_action(&id, slot),
            None => false,
        }
    }

    fn gesture_start(&mut self, index: usize) {
        if let Some(id) = self.row_id_at(index) {
            self.selected = index;
            self.list.gesture_start(&id);
        }
    }

    fn gesture_move(&mut self, sample: GestureSample) -> bool {
        self.list.gesture_move(sample)
    }

    fn gesture_end(&mut self, sample: GestureSample) {
        self.list.gesture_end(sample);
    }

    fn gesture_terminate(&mut self) {
        self.list.gesture_terminate();
    }

    fn tap_outside(&mut self) {
        self.list.tap_outside();
    }

    fn blur(&mut self) {
        self.list.blur();
    }

    fn tick(&mut self, delta: Duration) -> Vec<String> {
        let events = self.list.tick(delta);
        self.apply(events)
    }

    fn drain(&mut self) -> Vec<String> {
        let events = self.list.take_events();
        self.apply(events)
    }
}
