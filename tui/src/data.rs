//! In-memory conversations and contacts behind the two list screens.

use chrono::{Duration, NaiveDateTime};

use linkman_core::RowId;

use crate::screen::{ACTION_SLOTS, ActionOutcome, ActionSpec, ActionTone, ListItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: RowId,
    pub name: String,
    pub preview: String,
    pub last_at: NaiveDateTime,
    pub unread: u32,
    pub pinned: bool,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: RowId,
    pub name: String,
    pub remark: Option<String>,
    pub favorite: bool,
    pub online: bool,
}

impl Contact {
    /// Remark wins over the account name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.remark.as_deref().unwrap_or(&self.name)
    }
}

impl ListItem for Conversation {
    fn row_id(&self) -> &RowId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn actions(&self) -> [ActionSpec; ACTION_SLOTS] {
        [
            ActionSpec {
                label: if self.pinned { "Unpin" } else { "Pin" },
                tone: ActionTone::Primary,
            },
            ActionSpec {
                label: if self.unread > 0 { "Read" } else { "Unread" },
                tone: ActionTone::Neutral,
            },
            ActionSpec {
                label: "Delete",
                tone: ActionTone::Danger,
            },
        ]
    }

    fn apply_action(&mut self, slot: usize) -> ActionOutcome {
        let (message, removed) = match slot {
            0 => {
                self.pinned = !self.pinned;
                let message = if self.pinned { "Pinned" } else { "Unpinned" };
                (format!("{message} {}", self.name), false)
            }
            1 => {
                if self.unread > 0 {
                    self.unread = 0;
                    (format!("Marked {} as read", self.name), false)
                } else {
                    self.unread = 1;
                    (format!("Marked {} as unread", self.name), false)
                }
            }
            _ => (format!("Deleted conversation with {}", self.name), true),
        };
        ActionOutcome { message, removed }
    }

    /// Pinned first, then most recent first.
    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| b.last_at.cmp(&a.last_at))
        });
    }
}

impl ListItem for Contact {
    fn row_id(&self) -> &RowId {
        &self.id
    }

    fn title(&self) -> &str {
        self.display_name()
    }

    fn actions(&self) -> [ActionSpec; ACTION_SLOTS] {
        [
            ActionSpec {
                label: if self.favorite { "Unstar" } else { "Star" },
                tone: ActionTone::Primary,
            },
            ActionSpec {
                label: "Remark",
                tone: ActionTone::Neutral,
            },
            ActionSpec {
                label: "Remove",
                tone: ActionTone::Danger,
            },
        ]
    }

    fn apply_action(&mut self, slot: usize) -> ActionOutcome {
        let (message, removed) = match slot {
            0 => {
                self.favorite = !self.favorite;
                let message = if self.favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                };
                (format!("{message}: {}", self.name), false)
            }
            // No text entry in the terminal: toggle between a preset remark
            // and none.
            1 => {
                if self.remark.take().is_some() {
                    (format!("Remark cleared for {}", self.name), false)
                } else {
                    let remark = format!("{} (friend)", self.name);
                    let message = format!("Remark set: {remark}");
                    self.remark = Some(remark);
                    (message, false)
                }
            }
            _ => (format!("Removed {} from friends", self.display_name()), true),
        };
        ActionOutcome { message, removed }
    }

    /// Favorites first, then alphabetical by what is displayed.
    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| {
            b.favorite.cmp(&a.favorite).then_with(|| {
                a.display_name()
                    .to_lowercase()
                    .cmp(&b.display_name().to_lowercase())
            })
        });
    }
}

/// Demo conversations, timestamped relative to `now`.
#[must_use]
pub fn sample_conversations(now: NaiveDateTime) -> Vec<Conversation> {
    let entries: [(&str, &str, &str, i64, u32, bool); 8] = [
        ("c-lobby", "Lobby", "alice: welcome back everyone", 3, 12, true),
        ("c-alice", "Alice", "see you at the station", 25, 2, false),
        ("c-bob", "Bob", "sent a sticker", 60 * 5, 0, false),
        ("c-dev", "Dev Room", "deploy finished in 4m", 60 * 20, 140, false),
        ("c-carol", "Carol", "thanks!", 60 * 30, 0, false),
        ("c-dan", "Dan", "ok", 60 * 24 * 12, 0, false),
        ("c-erin", "Erin", "photo", 60 * 24 * 90, 1, false),
        ("c-frank", "Frank", "happy new year", 60 * 24 * 400, 0, false),
    ];
    entries
        .into_iter()
        .map(|(id, name, preview, minutes_ago, unread, pinned)| Conversation {
            id: RowId::from(id),
            name: name.to_string(),
            preview: preview.to_string(),
            last_at: now - Duration::minutes(minutes_ago),
            unread,
            pinned,
            favorite: name == "Alice",
        })
        .collect()
}

#[must_use]
pub fn sample_contacts() -> Vec<Contact> {
    let entries: [(&str, &str, Option<&str>, bool, bool); 6] = [
        ("u-alice", "alice", Some("Alice W."), true, true),
        ("u-bob", "bob", None, false, true),
        ("u-carol", "carol", None, false, false),
        ("u-dan", "dan", Some("Dan (work)"), false, false),
        ("u-erin", "erin", None, true, false),
        ("u-frank", "frank", None, false, true),
    ];
    entries
        .into_iter()
        .map(|(id, name, remark, favorite, online)| Contact {
            id: RowId::from(id),
            name: name.to_string(),
            remark: remark.map(str::to_string),
            favorite,
            online,
        })
        .collect()
}
