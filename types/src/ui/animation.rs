use std::time::Duration;

/// Where a fixed-duration effect is in its run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

/// Fixed-duration ease-out between two values, seeded with zero velocity.
#[derive(Debug, Clone)]
pub struct EaseOut {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

impl EaseOut {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        match self.timer.phase() {
            AnimPhase::Completed => self.to,
            AnimPhase::Running { progress } => {
                self.from + (self.to - self.from) * ease_out_cubic(progress)
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}
