//! Pointer movement to horizontal drag delta.
//!
//! The tracker decides whether a gesture belongs to the row at all (axis
//! claim) and hands the row a horizontal delta once it does. It never
//! touches the offset itself.

use linkman_types::{GestureSample, SwipeTuning};

/// Result of feeding one move sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Not (yet) a horizontal drag; the row must not move.
    Unclaimed,
    /// Horizontal drag. `just_claimed` is set on the sample that claimed it.
    Claimed { dx: f32, just_claimed: bool },
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// A claimed drag; settle using the release velocity.
    Drag { dx: f32, velocity_x: f32 },
    /// Barely moved: route to the row's press handler.
    Tap,
    /// Unclaimed movement (a vertical scroll) or a cancelled drag.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pending { was_open: bool },
    Claimed,
    /// Pre-empted by a forced close; the rest of the stream is ignored.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    claim_slop: f32,
    tap_slop: f32,
    phase: Phase,
    last: GestureSample,
}

impl DragTracker {
    #[must_use]
    pub fn new(claim_slop: f32, tap_slop: f32) -> Self {
        Self {
            claim_slop,
            tap_slop,
            phase: Phase::Idle,
            last: GestureSample::default(),
        }
    }

    #[must_use]
    pub fn from_tuning(tuning: &SwipeTuning) -> Self {
        Self::new(tuning.claim_slop, tuning.tap_slop)
    }

    /// Snapshot the row at touch-down.
    pub fn begin(&mut self, was_open: bool) {
        self.phase = Phase::Pending { was_open };
        self.last = GestureSample::default();
    }

    /// Axis disambiguation.
    ///
    /// Claimed once `|dx|` exceeds the claim slop and dominates `|dy|`. On a
    /// row that was open at touch-down, movement inside the tap box stays a
    /// tap candidate.
    #[must_use]
    pub fn would_claim(&self, sample: &GestureSample, was_open: bool) -> bool {
        if was_open && sample.within(self.tap_slop) {
            return false;
        }
        sample.dx.abs() > self.claim_slop && sample.dx.abs() > sample.dy.abs()
    }

    pub fn track(&mut self, sample: GestureSample) -> DragUpdate {
        match self.phase {
            Phase::Pending { was_open } => {
                self.last = sample;
                if self.would_claim(&sample, was_open) {
                    self.phase = Phase::Claimed;
                    DragUpdate::Claimed {
                        dx: sample.dx,
                        just_claimed: true,
                    }
                } else {
                    DragUpdate::Unclaimed
                }
            }
            Phase::Claimed => {
                self.last = sample;
                DragUpdate::Claimed {
                    dx: sample.dx,
                    just_claimed: false,
                }
            }
            Phase::Idle | Phase::Cancelled => DragUpdate::Unclaimed,
        }
    }

    /// End the gesture with its final sample.
    pub fn finish(&mut self, sample: GestureSample) -> Release {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Claimed => Release::Drag {
                dx: sample.dx,
                velocity_x: sample.velocity_x,
            },
            Phase::Pending { was_open } => {
                if self.would_claim(&sample, was_open) {
                    Release::Drag {
                        dx: sample.dx,
                        velocity_x: sample.velocity_x,
                    }
                } else if sample.within(self.tap_slop.max(self.claim_slop)) {
                    Release::Tap
                } else {
                    Release::Ignored
                }
            }
            Phase::Idle | Phase::Cancelled => Release::Ignored,
        }
    }

    /// End the gesture without a release sample (the platform took the
    /// touch away). A claimed drag settles with the last seen velocity.
    pub fn terminate(&mut self) -> Release {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Claimed => Release::Drag {
                dx: self.last.dx,
                velocity_x: self.last.velocity_x,
            },
            Phase::Pending { .. } | Phase::Idle | Phase::Cancelled => Release::Ignored,
        }
    }

    /// Drop the current gesture; later samples are ignored until `begin`.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Idle {
            self.phase = Phase::Cancelled;
        }
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.phase == Phase::Claimed
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. } | Phase::Claimed)
    }
}
