//! Thresholds and motion parameters for swipe rows.

use std::time::Duration;

use thiserror::Error;

use crate::swipe::{Offset, PanelWidth, SettleTarget};
use crate::ui::SpringParams;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidTuning {
    #[error("open_fraction must be in (0, 1), got {0}")]
    OpenFraction(f32),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("close_duration must be non-zero")]
    ZeroCloseDuration,
}

/// Decision thresholds and motion parameters for one list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTuning {
    /// Distance rule: release past `open_fraction * W` opens.
    pub open_fraction: f32,
    /// Flick rule: leftward release faster than this (units/ms) opens.
    pub velocity_threshold: f32,
    /// Horizontal movement required before a gesture is claimed.
    pub claim_slop: f32,
    /// Movement box inside which a touch on an open row stays a tap.
    pub tap_slop: f32,
    /// Duration of the forced-close ease-out.
    pub close_duration: Duration,
    pub spring: SpringParams,
    /// Settle instantly instead of animating.
    pub reduced_motion: bool,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            open_fraction: 0.3,
            velocity_threshold: 0.5,
            claim_slop: 1.0,
            tap_slop: 1.0,
            close_duration: Duration::from_millis(160),
            spring: SpringParams::default(),
            reduced_motion: false,
        }
    }
}

impl SwipeTuning {
    /// Conversation list: tight tap box so a slight drag re-opens.
    #[must_use]
    pub fn conversations() -> Self {
        Self::default()
    }

    /// Contacts list: a slightly looser tap box.
    #[must_use]
    pub fn contacts() -> Self {
        Self {
            tap_slop: 3.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), InvalidTuning> {
        if !(self.open_fraction > 0.0 && self.open_fraction < 1.0) {
            return Err(InvalidTuning::OpenFraction(self.open_fraction));
        }
        for (field, value) in [
            ("velocity_threshold", self.velocity_threshold),
            ("claim_slop", self.claim_slop),
            ("tap_slop", self.tap_slop),
            ("spring.stiffness", self.spring.stiffness),
            ("spring.damping", self.spring.damping),
            ("spring.rest_displacement", self.spring.rest_displacement),
            ("spring.rest_speed", self.spring.rest_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(InvalidTuning::NonPositive { field, value });
            }
        }
        if self.close_duration.is_zero() {
            return Err(InvalidTuning::ZeroCloseDuration);
        }
        Ok(())
    }

    /// Open/close decision at release.
    ///
    /// `offset` must be the live value read from the stopped animator, not
    /// the raw gesture delta.
    #[must_use]
    pub fn settle_target(&self, offset: Offset, velocity_x: f32, width: PanelWidth) -> SettleTarget {
        let far_enough = offset.get() < -self.open_fraction * width.get();
        let flicked = velocity_x < -self.velocity_threshold;
        if far_enough || flicked {
            SettleTarget::Open
        } else {
            SettleTarget::Closed
        }
    }
}
