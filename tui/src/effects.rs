//! Row slide geometry: where the content and the action panel land for a
//! given reveal offset.

use ratatui::layout::Rect;

/// Areas for one swipe row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlide {
    /// Row content, shifted left by the offset.
    pub content: Rect,
    /// Revealed part of the action panel, empty when closed.
    pub panel: Rect,
    /// Full panel width in columns.
    pub panel_columns: u16,
    /// Columns of the panel hidden off the right edge.
    pub panel_hidden: u16,
}

/// Lay out a row whose content is offset by `offset` units (non-positive)
/// and whose panel of `panel_width` units slides in `panel_translation`
/// units from the right edge.
#[must_use]
pub fn row_slide(
    area: Rect,
    offset: f32,
    panel_width: f32,
    panel_translation: f32,
    units_per_column: f32,
) -> RowSlide {
    let to_columns = |units: f32| -> u16 {
        (units.max(0.0) / units_per_column).round().min(f32::from(u16::MAX)) as u16
    };
    let panel_columns = to_columns(panel_width).min(area.width);
    let hidden = to_columns(panel_translation).min(panel_columns);
    let shown = panel_columns - hidden;
    let shift = to_columns(-offset).min(area.width);

    let content = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(shift.max(shown)),
        height: area.height,
    };
    let panel = Rect {
        x: area.x + area.width - shown,
        y: area.y,
        width: shown,
        height: area.height,
    };
    RowSlide {
        content,
        panel,
        panel_columns,
        panel_hidden: hidden,
    }
}

/// Which action slot a column falls on, if the panel is fully shown.
#[must_use]
pub fn action_slot_at(slide: &RowSlide, column: u16, slots: usize) -> Option<usize> {
    if slide.panel_hidden != 0 || slide.panel.width == 0 || slots == 0 {
        return None;
    }
    let panel = slide.panel;
    if column < panel.x || column >= panel.x + panel.width {
        return None;
    }
    let rel = usize::from(column - panel.x);
    Some((rel * slots / usize::from(panel.width)).min(slots - 1))
}
