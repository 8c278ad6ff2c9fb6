//! Motion primitives shared by the swipe core and the renderer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod spring;

pub use animation::{AnimPhase, EaseOut, EffectTimer, ease_out_cubic};
pub use spring::{Spring, SpringParams};
