//! Core domain types for Linkman swipe rows.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application: the swipe
//! core drives these values, the renderer only reads them.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod ids;
mod swipe;
mod tuning;
pub mod ui;

pub use ids::RowId;
pub use swipe::{GestureSample, InvalidPanelWidth, Offset, PanelWidth, RevealState, SettleTarget};
pub use tuning::{InvalidTuning, SwipeTuning};
