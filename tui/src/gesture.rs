//! Mouse drags turned into gesture samples.
//!
//! Terminal cells convert to layout units with `units_per_column`; a row is
//! about twice as tall as a column is wide, so vertical motion uses twice the
//! factor. Release velocity is estimated from the last 100ms of samples.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use linkman_core::GestureSample;

/// Samples older than this are ignored for velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);
/// Clamp, in units per millisecond: an 8000/s maximum fling.
const MAX_VELOCITY: f32 = 8.0;

/// One pointer drag, from button-down to button-up.
#[derive(Debug, Clone)]
pub struct PointerGesture {
    row: usize,
    origin: (u16, u16),
    units_per_column: f32,
    history: VecDeque<(Instant, f32)>,
    last: GestureSample,
}

impl PointerGesture {
    #[must_use]
    pub fn new(row: usize, column: u16, line: u16, units_per_column: f32, now: Instant) -> Self {
        let mut history = VecDeque::new();
        history.push_back((now, 0.0));
        Self {
            row,
            origin: (column, line),
            units_per_column,
            history,
            last: GestureSample::moved(0.0, 0.0),
        }
    }

    /// List index the drag started on.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Pointer moved to (`column`, `line`).
    pub fn sample(&mut self, column: u16, line: u16, now: Instant) -> GestureSample {
        let (dx, dy) = self.delta(column, line);
        self.history.push_back((now, dx));
        while let Some(&(at, _)) = self.history.front() {
            if now.duration_since(at) > VELOCITY_WINDOW && self.history.len() > 2 {
                self.history.pop_front();
            } else {
                break;
            }
        }
        self.last = GestureSample::new(dx, dy, self.velocity());
        self.last
    }

    /// Button released at (`column`, `line`).
    pub fn release(mut self, column: u16, line: u16, now: Instant) -> GestureSample {
        self.sample(column, line, now)
    }

    #[must_use]
    pub fn last(&self) -> GestureSample {
        self.last
    }

    fn delta(&self, column: u16, line: u16) -> (f32, f32) {
        let dx = (f32::from(column) - f32::from(self.origin.0)) * self.units_per_column;
        let dy = (f32::from(line) - f32::from(self.origin.1)) * self.units_per_column * 2.0;
        (dx, dy)
    }

    /// Horizontal velocity over the retained window, units per millisecond.
    fn velocity(&self) -> f32 {
        let (Some(&(t0, x0)), Some(&(t1, x1))) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };
        let elapsed = t1.duration_since(t0).as_secs_f32() * 1000.0;
        if elapsed < 1.0 {
            return 0.0;
        }
        ((x1 - x0) / elapsed).clamp(-MAX_VELOCITY, MAX_VELOCITY)
    }
}
