//! A list of swipeable rows with its coordinator.
//!
//! `SwipeList` owns the row controllers and the coordinator side by side and
//! routes [`RowNotice`]s between them. Hosts feed it gesture events, list
//! lifecycle notifications and frame ticks, and read back per-row offsets and
//! [`ListEvent`]s.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace};

use linkman_types::{GestureSample, Offset, PanelWidth, RevealState, RowId, SwipeTuning};

use crate::coordinator::{ListCoordinator, RowCloser};
use crate::row::{RowController, RowNotice};

/// Outcomes the host reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Opened(RowId),
    Closed(RowId),
    /// The row was pressed; open its conversation.
    Activated(RowId),
    /// An action button fired on a fully open row.
    ActionFired { row: RowId, slot: usize },
}

/// Row controllers in display order, plus the notices they raised.
#[derive(Debug, Default)]
struct RowTable {
    rows: Vec<RowController>,
    outbox: VecDeque<(RowId, RowNotice)>,
}

impl RowTable {
    fn get(&self, id: &RowId) -> Option<&RowController> {
        self.rows.iter().find(|row| row.id() == id)
    }

    fn get_mut(&mut self, id: &RowId) -> Option<&mut RowController> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    fn post(&mut self, id: &RowId, notice: Option<RowNotice>) {
        if let Some(notice) = notice {
            self.outbox.push_back((id.clone(), notice));
        }
    }
}

impl RowCloser for RowTable {
    fn close_row(&mut self, id: &RowId) -> bool {
        let Some(row) = self.get_mut(id) else {
            return false;
        };
        let notice = row.close();
        self.post(id, notice);
        true
    }
}

/// Activation waiting for a closing row to land.
#[derive(Debug, Clone)]
struct PendingActivation {
    row: RowId,
    waiting_on: RowId,
}

#[derive(Debug, Clone)]
struct ActiveGesture {
    row: RowId,
    /// Row closed because this touch landed while it was open.
    closed_on_touch: Option<RowId>,
}

#[derive(Debug)]
pub struct SwipeList {
    width: PanelWidth,
    tuning: SwipeTuning,
    action_slots: usize,
    coordinator: ListCoordinator,
    rows: RowTable,
    gesture: Option<ActiveGesture>,
    activation: Option<PendingActivation>,
    events: Vec<ListEvent>,
}

impl SwipeList {
    #[must_use]
    pub fn new(width: PanelWidth, tuning: SwipeTuning, action_slots: usize) -> Self {
        Self {
            width,
            tuning,
            action_slots,
            coordinator: ListCoordinator::new(),
            rows: RowTable::default(),
            gesture: None,
            activation: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> PanelWidth {
        self.width
    }

    #[must_use]
    pub fn action_slots(&self) -> usize {
        self.action_slots
    }

    #[must_use]
    pub fn open_row(&self) -> Option<&RowId> {
        self.coordinator.open_row()
    }

    #[must_use]
    pub fn row(&self, id: &RowId) -> Option<&RowController> {
        self.rows.get(id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &RowController> {
        self.rows.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.rows.is_empty()
    }

    #[must_use]
    pub fn state(&self, id: &RowId) -> Option<RevealState> {
        self.rows.get(id).map(RowController::state)
    }

    #[must_use]
    pub fn offset(&self, id: &RowId) -> Offset {
        self.rows.get(id).map_or(Offset::CLOSED, RowController::offset)
    }

    /// Rows whose state counts as open. Never more than one.
    #[must_use]
    pub fn open_intent_count(&self) -> usize {
        self.rows
            .rows
            .iter()
            .filter(|row| row.state().is_open_intent())
            .count()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.rows.rows.iter().any(RowController::is_animating)
    }

    /// Reconcile with the rows currently displayed, in display order.
    ///
    /// New ids mount closed, missing ids unmount, survivors keep their state.
    pub fn sync<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RowId>,
    {
        let ids: Vec<RowId> = ids.into_iter().collect();
        let removed: Vec<RowId> = self
            .rows
            .rows
            .iter()
            .map(|row| row.id().clone())
            .filter(|id| !ids.contains(id))
            .collect();
        for id in &removed {
            self.unmount(id);
        }

        let mut ordered = Vec::with_capacity(ids.len());
        for id in ids {
            let existing = self
                .rows
                .rows
                .iter()
                .position(|row| *row.id() == id)
                .map(|index| self.rows.rows.swap_remove(index));
            ordered.push(existing.unwrap_or_else(|| {
                trace!(row = %id, "row mounted");
                RowController::new(id, self.width, self.tuning)
            }));
        }
        self.rows.rows = ordered;
    }

    pub fn mount(&mut self, id: RowId) {
        if self.rows.get(&id).is_some() {
            return;
        }
        trace!(row = %id, "row mounted");
        self.rows
            .rows
            .push(RowController::new(id, self.width, self.tuning));
    }

    /// Drop a row and every reference to it.
    pub fn unmount(&mut self, id: &RowId) {
        let Some(index) = self.rows.rows.iter().position(|row| row.id() == id) else {
            return;
        };
        self.rows.rows.remove(index);
        self.rows.outbox.retain(|(row, _)| row != id);
        self.coordinator.deregister(id);
        if self.gesture.as_ref().is_some_and(|g| g.row == *id) {
            self.gesture = None;
        }
        if let Some(pending) = self.activation.take()
            && pending.row != *id
        {
            if pending.waiting_on == *id {
                self.events.push(ListEvent::Activated(pending.row));
            } else {
                self.activation = Some(pending);
            }
        }
        debug!(row = %id, "row unmounted");
        self.route();
    }

    /// Touch-down on a row.
    pub fn gesture_start(&mut self, id: &RowId) {
        if self.gesture.is_some() {
            self.gesture_terminate();
        }
        let Some(row) = self.rows.get_mut(id) else {
            return;
        };
        let notice = row.handle_gesture_start(&self.coordinator);
        let closed_on_touch = match &notice {
            Some(RowNotice::CloseOther(other)) => Some(other.clone()),
            _ => None,
        };
        self.rows.post(id, notice);
        self.activation = None;
        self.gesture = Some(ActiveGesture {
            row: id.clone(),
            closed_on_touch,
        });
        self.route();
    }

    /// Pointer move for the active gesture. Returns `true` when a row took
    /// it as a horizontal drag; otherwise the host may scroll.
    pub fn gesture_move(&mut self, sample: GestureSample) -> bool {
        let Some(id) = self.gesture.as_ref().map(|g| g.row.clone()) else {
            return false;
        };
        self.rows
            .get_mut(&id)
            .is_some_and(|row| row.handle_gesture_move(sample))
    }

    pub fn gesture_end(&mut self, sample: GestureSample) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        let notice = match self.rows.get_mut(&gesture.row) {
            Some(row) => row.handle_gesture_end(sample),
            None => return,
        };
        self.finish_gesture(&gesture, notice);
    }

    pub fn gesture_terminate(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        let notice = match self.rows.get_mut(&gesture.row) {
            Some(row) => row.handle_gesture_terminate(),
            None => return,
        };
        self.finish_gesture(&gesture, notice);
    }

    /// Programmatic open (keyboard, deep link).
    pub fn open(&mut self, id: &RowId) {
        if let Some(row) = self.rows.get_mut(id) {
            let notice = row.open();
            self.rows.post(id, notice);
            self.route();
        }
    }

    /// Externally requested close, e.g. the conversation changed elsewhere.
    pub fn close(&mut self, id: &RowId) {
        if self.rows.close_row(id) {
            self.route();
        }
    }

    pub fn close_active(&mut self) {
        if self.coordinator.close_active(&mut self.rows).is_some() {
            self.route();
        }
    }

    /// Tap on empty list area.
    pub fn tap_outside(&mut self) {
        self.close_active();
    }

    /// The list began scrolling; any touch on a row now belongs to the scroll.
    pub fn scroll_began(&mut self) {
        self.gesture_terminate();
        self.close_active();
    }

    /// The screen lost focus or is being navigated away from.
    pub fn blur(&mut self) {
        self.gesture_terminate();
        self.activation = None;
        self.close_active();
    }

    /// Press an action button. Ignored unless the row is fully open; a fired
    /// action always closes the row.
    pub fn press_action(&mut self, id: &RowId, slot: usize) -> bool {
        if slot >= self.action_slots {
            trace!(row = %id, slot, "no such action slot");
            return false;
        }
        let Some(row) = self.rows.get(id) else {
            return false;
        };
        if !row.actions_enabled() {
            trace!(row = %id, state = %row.state(), slot, "action ignored");
            return false;
        }
        debug!(row = %id, slot, "action fired");
        self.events.push(ListEvent::ActionFired {
            row: id.clone(),
            slot,
        });
        self.close(id);
        true
    }

    /// Advance every row's animation by one frame.
    pub fn tick(&mut self, delta: Duration) -> Vec<ListEvent> {
        for row in &mut self.rows.rows {
            if let Some(notice) = row.advance(delta) {
                self.rows.outbox.push_back((row.id().clone(), notice));
            }
        }
        self.route();
        self.take_events()
    }

    pub fn take_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.events)
    }

    fn finish_gesture(&mut self, gesture: &ActiveGesture, notice: Option<RowNotice>) {
        if notice == Some(RowNotice::Pressed) {
            self.press_row(gesture);
        } else {
            self.rows.post(&gesture.row, notice);
        }
        self.route();
    }

    fn press_row(&mut self, gesture: &ActiveGesture) {
        let id = &gesture.row;
        let state = self.state(id).unwrap_or_default();
        if state.is_open_intent() {
            // Tap on its own open panel: retract first, then navigate.
            self.rows.close_row(id);
            self.activation = Some(PendingActivation {
                row: id.clone(),
                waiting_on: id.clone(),
            });
            return;
        }
        let still_closing = gesture.closed_on_touch.as_ref().filter(|other| {
            self.state(other) == Some(RevealState::SettlingClosed)
        });
        if let Some(other) = still_closing {
            self.activation = Some(PendingActivation {
                row: id.clone(),
                waiting_on: other.clone(),
            });
        } else {
            self.events.push(ListEvent::Activated(id.clone()));
        }
    }

    fn route(&mut self) {
        while let Some((id, notice)) = self.rows.outbox.pop_front() {
            match notice {
                RowNotice::Opening => {
                    self.coordinator.notify_opening(&id, &mut self.rows);
                    self.preempt_drag(&id);
                }
                RowNotice::Closing => {
                    self.coordinator.notify_closed(&id);
                }
                RowNotice::CloseOther(_) => {
                    self.coordinator.close_active(&mut self.rows);
                }
                RowNotice::Opened => self.events.push(ListEvent::Opened(id)),
                RowNotice::Closed => {
                    if let Some(pending) = self.activation.take() {
                        if pending.waiting_on == id {
                            self.events.push(ListEvent::Closed(id));
                            self.events.push(ListEvent::Activated(pending.row));
                            continue;
                        }
                        self.activation = Some(pending);
                    }
                    self.events.push(ListEvent::Closed(id));
                }
                RowNotice::Pressed => {}
            }
        }
    }

    /// A row other than the one being dragged started opening: the drag
    /// loses and its row animates home.
    fn preempt_drag(&mut self, opening: &RowId) {
        let Some(dragged) = self.gesture.as_ref().map(|g| g.row.clone()) else {
            return;
        };
        if dragged == *opening || self.state(&dragged) != Some(RevealState::Dragging) {
            return;
        }
        debug!(row = %dragged, opening = %opening, "drag pre-empted by open");
        self.rows.close_row(&dragged);
    }
}
