//! One swipeable row: tracker, state machine and animator bound together.
//!
//! Rows never talk to each other. Everything that concerns another row is
//! returned as a [`RowNotice`] for the hosting list to route.

use std::time::Duration;

use tracing::{debug, trace};

use linkman_types::{GestureSample, Offset, PanelWidth, RevealState, RowId, SettleTarget, SwipeTuning};

use crate::animator::{AnimationTicket, Motion, RevealAnimator};
use crate::coordinator::ListCoordinator;
use crate::drag::{DragTracker, DragUpdate, Release};
use crate::reveal::RevealMachine;

/// Something the hosting list must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowNotice {
    /// A settle toward open just began; the row now holds the open slot.
    Opening,
    /// A settle toward closed just began; the row gives up the open slot.
    Closing,
    /// The panel has fully settled open.
    Opened,
    /// The panel has fully settled closed.
    Closed,
    /// Touch-down on this row while another row is open.
    CloseOther(RowId),
    /// Released without dragging.
    Pressed,
}

#[derive(Debug, Clone, Copy)]
struct PendingSettle {
    ticket: AnimationTicket,
    target: SettleTarget,
}

#[derive(Debug, Clone)]
pub struct RowController {
    id: RowId,
    tuning: SwipeTuning,
    tracker: DragTracker,
    machine: RevealMachine,
    animator: RevealAnimator,
    pending: Option<PendingSettle>,
}

impl RowController {
    #[must_use]
    pub fn new(id: RowId, width: PanelWidth, tuning: SwipeTuning) -> Self {
        Self {
            id,
            tracker: DragTracker::from_tuning(&tuning),
            machine: RevealMachine::new(width),
            animator: RevealAnimator::new(&tuning),
            pending: None,
            tuning,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RowId {
        &self.id
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.machine.state()
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.machine.offset()
    }

    #[must_use]
    pub fn rest_offset(&self) -> Offset {
        self.machine.rest_offset()
    }

    #[must_use]
    pub fn width(&self) -> PanelWidth {
        self.machine.width()
    }

    #[must_use]
    pub fn panel_translation(&self) -> f32 {
        self.offset().panel_translation(self.width())
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.offset().backdrop_opacity(self.width())
    }

    /// Action buttons are live only while fully open.
    #[must_use]
    pub fn actions_enabled(&self) -> bool {
        self.state().accepts_actions()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Touch-down. Asks for any other open row to be closed right away so
    /// its panel starts retracting before this gesture is even claimed.
    pub fn handle_gesture_start(&mut self, coordinator: &ListCoordinator) -> Option<RowNotice> {
        self.tracker.begin(self.state() == RevealState::Open);
        match coordinator.open_row() {
            Some(open) if *open != self.id => Some(RowNotice::CloseOther(open.clone())),
            _ => None,
        }
    }

    /// Pointer move. Returns `true` when the row consumed it as a drag.
    pub fn handle_gesture_move(&mut self, sample: GestureSample) -> bool {
        match self.tracker.track(sample) {
            DragUpdate::Unclaimed => false,
            DragUpdate::Claimed { dx, just_claimed } => {
                if just_claimed {
                    self.claim();
                }
                self.follow(dx);
                true
            }
        }
    }

    /// Pointer release.
    pub fn handle_gesture_end(&mut self, sample: GestureSample) -> Option<RowNotice> {
        let release = self.tracker.finish(sample);
        self.conclude(release)
    }

    /// The platform took the touch away mid-gesture. Same settle path as a
    /// release, using the last sample seen.
    pub fn handle_gesture_terminate(&mut self) -> Option<RowNotice> {
        let release = self.tracker.terminate();
        self.conclude(release)
    }

    /// Forced close. No-op when closed or when a close is already running.
    pub fn close(&mut self) -> Option<RowNotice> {
        let from = self.state();
        if !self.machine.force_close() {
            trace!(row = %self.id, state = %from, "close ignored");
            return None;
        }
        self.tracker.cancel();
        let ticket = self.animator.animate_to(0.0, Motion::Forced);
        self.pending = Some(PendingSettle {
            ticket,
            target: SettleTarget::Closed,
        });
        debug!(row = %self.id, from = %from, offset = %self.offset(), "force close");
        Some(RowNotice::Closing)
    }

    /// Programmatic open, through the same spring as a released drag.
    pub fn open(&mut self) -> Option<RowNotice> {
        if self.state().is_open_intent() {
            trace!(row = %self.id, state = %self.state(), "open ignored");
            return None;
        }
        self.tracker.cancel();
        Some(self.settle_toward(SettleTarget::Open, 0.0))
    }

    /// Step the animator; reports when a settle lands.
    pub fn advance(&mut self, delta: Duration) -> Option<RowNotice> {
        let settled = self.animator.advance(delta);
        self.machine.sync_offset(Offset::raw(self.animator.value()));
        let settled = settled?;
        let pending = self.pending.take()?;
        if pending.ticket != settled.ticket {
            // Only the latest ticket can settle; keep waiting on it.
            self.pending = Some(pending);
            return None;
        }
        if !self.machine.settle_complete(pending.target) {
            return None;
        }
        debug!(row = %self.id, state = %self.state(), "settled");
        Some(match pending.target {
            SettleTarget::Open => RowNotice::Opened,
            SettleTarget::Closed => RowNotice::Closed,
        })
    }

    fn claim(&mut self) {
        // Anchor at the live value so grabbing a settling row does not snap.
        let live = self.animator.stop_and_read();
        self.pending = None;
        let from = self.state();
        self.machine.begin_drag(Offset::raw(live));
        debug!(row = %self.id, from = %from, anchor = live, "drag claimed");
    }

    fn follow(&mut self, dx: f32) {
        if let Some(offset) = self.machine.drag_to(dx) {
            self.animator.set_value(offset.get());
        }
    }

    fn conclude(&mut self, release: Release) -> Option<RowNotice> {
        match release {
            Release::Drag { dx, velocity_x } => {
                if self.state() != RevealState::Dragging {
                    self.claim();
                }
                self.follow(dx);
                Some(self.settle(velocity_x))
            }
            Release::Tap => Some(RowNotice::Pressed),
            Release::Ignored => None,
        }
    }

    fn settle(&mut self, velocity_x: f32) -> RowNotice {
        let live = Offset::raw(self.animator.stop_and_read());
        let target = self
            .tuning
            .settle_target(live, velocity_x, self.machine.width());
        self.settle_toward(target, velocity_x)
    }

    fn settle_toward(&mut self, target: SettleTarget, velocity_x: f32) -> RowNotice {
        let from = self.machine.begin_settle(target);
        let ticket = self.animator.animate_to(
            target.offset(self.machine.width()).get(),
            Motion::Release { velocity_x },
        );
        self.pending = Some(PendingSettle { ticket, target });
        debug!(
            row = %self.id,
            from = %from,
            target = ?target,
            velocity_x,
            "settle"
        );
        match target {
            SettleTarget::Open => RowNotice::Opening,
            SettleTarget::Closed => RowNotice::Closing,
        }
    }
}
