//! Per-row reveal state machine.
//!
//! ```text
//! Closed ──claim──▶ Dragging ──release──▶ SettlingOpen ──settled──▶ Open
//!                      │                                             │
//!                      └──release──▶ SettlingClosed ◀──close()───────┘
//!                                         │
//!                                         └──settled──▶ Closed
//! ```
//!
//! Any state may be force-closed into `SettlingClosed`. Transitions that do
//! not apply in the current state are ignored and report `false`.

use linkman_types::{Offset, PanelWidth, RevealState, SettleTarget};

#[derive(Debug, Clone)]
pub struct RevealMachine {
    state: RevealState,
    width: PanelWidth,
    /// Current visual offset.
    offset: Offset,
    /// Committed rest offset: where the row is, or is heading, when not dragging.
    rest: Offset,
    /// Live offset at the moment the drag was claimed.
    anchor: Offset,
}

impl RevealMachine {
    #[must_use]
    pub fn new(width: PanelWidth) -> Self {
        Self {
            state: RevealState::Closed,
            width,
            offset: Offset::CLOSED,
            rest: Offset::CLOSED,
            anchor: Offset::CLOSED,
        }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn rest_offset(&self) -> Offset {
        self.rest
    }

    #[must_use]
    pub fn width(&self) -> PanelWidth {
        self.width
    }

    /// Enter `Dragging`, anchored at the live offset.
    pub fn begin_drag(&mut self, live: Offset) -> bool {
        if self.state == RevealState::Dragging {
            return false;
        }
        self.anchor = Offset::clamped(live.get(), self.width);
        self.offset = self.anchor;
        self.state = RevealState::Dragging;
        true
    }

    /// Follow the pointer: `clamp(anchor + dx, -W, 0)`.
    pub fn drag_to(&mut self, dx: f32) -> Option<Offset> {
        if self.state != RevealState::Dragging {
            return None;
        }
        self.offset = Offset::clamped(self.anchor.get() + dx, self.width);
        Some(self.offset)
    }

    /// Start animating toward `target`. Returns the state that was left.
    pub fn begin_settle(&mut self, target: SettleTarget) -> RevealState {
        let previous = self.state;
        self.state = target.settling_state();
        self.rest = target.offset(self.width);
        previous
    }

    /// Administrative close from any state.
    ///
    /// Ignored when the row is already closed or a close is in flight.
    pub fn force_close(&mut self) -> bool {
        if matches!(
            self.state,
            RevealState::Closed | RevealState::SettlingClosed
        ) {
            return false;
        }
        self.begin_settle(SettleTarget::Closed);
        true
    }

    /// Land a settle. Only applies while settling toward `target`.
    pub fn settle_complete(&mut self, target: SettleTarget) -> bool {
        if self.state != target.settling_state() {
            return false;
        }
        self.state = target.rest_state();
        self.offset = target.offset(self.width);
        self.rest = self.offset;
        true
    }

    /// Mirror the animator's live value while settling.
    pub fn sync_offset(&mut self, live: Offset) {
        if self.state != RevealState::Dragging {
            self.offset = Offset::clamped(live.get(), self.width);
        }
    }
}
