use chrono::{Datelike, NaiveDateTime};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Conversation timestamp as shown in the list.
///
/// Today: `HH:MM`. Yesterday: `Yesterday`. Earlier this year: `MM/DD`.
/// Otherwise `YYYY/MM/DD`.
pub(crate) fn format_list_time(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let day = at.date();
    let today = now.date();
    if day == today {
        return at.format("%H:%M").to_string();
    }
    if today.pred_opt() == Some(day) {
        return "Yesterday".to_string();
    }
    if day.year() == today.year() {
        return at.format("%m/%d").to_string();
    }
    at.format("%Y/%m/%d").to_string()
}

/// Unread badge text. `None` when there is nothing unread.
pub(crate) fn unread_badge(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        n => Some(n.min(99).to_string()),
    }
}

/// Cut `raw` to at most `max` display columns, ending in `...` when cut.
pub(crate) fn truncate_to_width(raw: &str, max: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.width() <= max {
        return trimmed.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let budget = max - 3;
    let mut used = 0;
    let mut head = String::new();
    for ch in trimmed.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        head.push(ch);
    }
    format!("{head}...")
}
