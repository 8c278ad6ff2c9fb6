//! Swipe-to-reveal rows for Linkman lists.
//!
//! Each row can be dragged left to reveal a panel of action buttons. At most
//! one row per list is open at a time.
//!
//! ```text
//! pointer events ─▶ DragTracker ─▶ RevealMachine ─▶ RevealAnimator ─▶ offset
//!                                        │
//!                               RowNotice (Opening / Closing / ...)
//!                                        ▼
//!                      SwipeList ◀──▶ ListCoordinator (Option<RowId>)
//! ```
//!
//! Everything runs on the UI thread. Rows own their state and animation;
//! the coordinator owns only the identity of the open row.

mod animator;
mod coordinator;
mod drag;
mod list;
mod reveal;
mod row;

pub use animator::{AnimationTicket, Motion, RevealAnimator, Settled};
pub use coordinator::{ListCoordinator, RowCloser};
pub use drag::{DragTracker, DragUpdate, Release};
pub use list::{ListEvent, SwipeList};
pub use reveal::RevealMachine;
pub use row::{RowController, RowNotice};

pub use linkman_types::{
    GestureSample, Offset, PanelWidth, RevealState, RowId, SettleTarget, SwipeTuning,
};
