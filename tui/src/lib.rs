//! Terminal rendering for Linkman's chat and contact lists using ratatui.
//!
//! Rows follow the swipe core in `linkman-core`: mouse drags and key presses
//! are forwarded to a [`linkman_core::SwipeList`] per screen, and the drawn
//! content and action panel track each row's live offset.

mod app;
mod data;
mod effects;
mod format;
mod gesture;
mod input;
mod screen;
mod theme;
mod view;

pub use app::{App, ROW_HEIGHT, Screen};
pub use data::{Contact, Conversation, sample_contacts, sample_conversations};
pub use effects::{RowSlide, action_slot_at, row_slide};
pub use gesture::PointerGesture;
pub use input::{InputPump, handle_events};
pub use screen::{
    ACTION_SLOTS, ActionOutcome, ActionSpec, ActionTone, ListItem, ListScreen, SwipeScreen,
};
pub use theme::{Glyphs, Palette, glyphs, styles, tint};
pub use view::draw;
