//! Drives a row's offset toward a rest target.
//!
//! Every [`RevealAnimator::animate_to`] call returns a ticket. Exactly one
//! [`Settled`] carrying that ticket is reported, unless a later call
//! supersedes it first, in which case it is never reported.

use std::time::Duration;

use linkman_types::SwipeTuning;
use linkman_types::ui::{AnimPhase, EaseOut, Spring, SpringParams};

/// Kind of motion used to reach the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// User release: no-overshoot spring seeded with the finger's speed
    /// (units per millisecond).
    Release { velocity_x: f32 },
    /// Administrative close: fixed-duration ease-out from rest.
    Forced,
}

/// Identifies one `animate_to` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationTicket(u64);

/// Completion report for an animation that ran to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub ticket: AnimationTicket,
    pub value: f32,
}

#[derive(Debug, Clone)]
enum Curve {
    Spring(Spring),
    Ease(EaseOut),
    /// Reduced motion: jump on the next frame.
    Instant(f32),
}

#[derive(Debug, Clone)]
struct Active {
    ticket: AnimationTicket,
    curve: Curve,
}

#[derive(Debug, Clone)]
pub struct RevealAnimator {
    value: f32,
    active: Option<Active>,
    next_ticket: u64,
    spring: SpringParams,
    close_duration: Duration,
    reduced_motion: bool,
}

impl RevealAnimator {
    #[must_use]
    pub fn new(tuning: &SwipeTuning) -> Self {
        Self {
            value: 0.0,
            active: None,
            next_ticket: 0,
            spring: tuning.spring,
            close_duration: tuning.close_duration,
            reduced_motion: tuning.reduced_motion,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<AnimationTicket> {
        self.active.as_ref().map(|active| active.ticket)
    }

    /// Drive the value directly (pointer-following). Cancels any motion.
    pub fn set_value(&mut self, value: f32) {
        self.active = None;
        self.value = value;
    }

    /// Cancel the in-flight motion, if any, and return the live value.
    ///
    /// The cancelled ticket will never be reported as settled.
    pub fn stop_and_read(&mut self) -> f32 {
        self.active = None;
        self.value
    }

    /// Start moving toward `target` from wherever the value is right now.
    pub fn animate_to(&mut self, target: f32, motion: Motion) -> AnimationTicket {
        let from = self.stop_and_read();
        let ticket = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;

        let curve = if self.reduced_motion {
            Curve::Instant(target)
        } else {
            match motion {
                Motion::Release { velocity_x } => {
                    Curve::Spring(Spring::new(self.spring, from, target, velocity_x * 1000.0))
                }
                Motion::Forced => Curve::Ease(EaseOut::new(from, target, self.close_duration)),
            }
        };
        self.active = Some(Active { ticket, curve });
        ticket
    }

    /// Step the in-flight motion. Reports completion exactly once.
    pub fn advance(&mut self, delta: Duration) -> Option<Settled> {
        let active = self.active.as_mut()?;
        let done = match &mut active.curve {
            Curve::Spring(spring) => {
                let settled = spring.advance(delta);
                self.value = spring.position();
                settled
            }
            Curve::Ease(ease) => {
                ease.advance(delta);
                self.value = ease.value();
                matches!(ease.phase(), AnimPhase::Completed)
            }
            Curve::Instant(target) => {
                self.value = *target;
                true
            }
        };
        if !done {
            return None;
        }
        let ticket = active.ticket;
        self.active = None;
        Some(Settled {
            ticket,
            value: self.value,
        })
    }
}
