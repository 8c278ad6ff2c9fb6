//! Damped spring used for user-released settles.

use std::time::Duration;

/// Integration step ceiling, in seconds.
const MAX_STEP_SECS: f32 = 0.001;

/// Physical parameters of a settle spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Settled once closer than this to the target...
    pub rest_displacement: f32,
    /// ...and slower than this, in units per second.
    pub rest_speed: f32,
    /// Snap to the target instead of crossing it.
    pub overshoot_clamping: bool,
}

impl SpringParams {
    /// Map the tension/friction pair used by mobile animation libraries
    /// onto stiffness/damping (origami conversion, unit mass).
    #[must_use]
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            ..Self::default()
        }
    }
}

impl Default for SpringParams {
    /// Tension 80 / friction 12, no overshoot.
    fn default() -> Self {
        Self {
            stiffness: 375.0,
            damping: 37.0,
            mass: 1.0,
            rest_displacement: 0.5,
            rest_speed: 0.5,
            overshoot_clamping: true,
        }
    }
}

/// A spring in flight between its start position and a target.
#[derive(Debug, Clone)]
pub struct Spring {
    params: SpringParams,
    target: f32,
    position: f32,
    /// Units per second.
    velocity: f32,
    start_side: f32,
    settled: bool,
}

impl Spring {
    /// `velocity` is in units per second. A seed pointing away from the
    /// target is dropped.
    #[must_use]
    pub fn new(params: SpringParams, from: f32, to: f32, velocity: f32) -> Self {
        let displacement = from - to;
        let velocity = if velocity * displacement > 0.0 {
            0.0
        } else {
            velocity
        };
        let settled = displacement == 0.0 && velocity.abs() < params.rest_speed;
        Self {
            params,
            target: to,
            position: if settled { to } else { from },
            velocity: if settled { 0.0 } else { velocity },
            start_side: displacement.signum(),
            settled,
        }
    }

    /// Integrate forward. Returns `true` once the spring has come to rest.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let mut remaining = delta.as_secs_f32();
        while !self.settled && remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            remaining -= dt;

            let displacement = self.position - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += force / self.params.mass * dt;
            self.position += self.velocity * dt;

            if self.is_overshooting() || self.is_at_rest() {
                self.position = self.target;
                self.velocity = 0.0;
                self.settled = true;
            }
        }
        self.settled
    }

    fn is_overshooting(&self) -> bool {
        if !self.params.overshoot_clamping {
            return false;
        }
        let displacement = self.position - self.target;
        if self.start_side == 0.0 {
            displacement != 0.0
        } else {
            displacement * self.start_side < 0.0
        }
    }

    fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() <= self.params.rest_displacement
            && self.velocity.abs() <= self.params.rest_speed
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}
