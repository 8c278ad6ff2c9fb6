//! Frame rendering: tab bar, the active list and the status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use linkman_core::RowController;

use crate::app::{App, ROW_HEIGHT, Screen};
use crate::data::{Contact, Conversation};
use crate::effects::{RowSlide, row_slide};
use crate::format::{format_list_time, truncate_to_width, unread_badge};
use crate::screen::{ActionSpec, ActionTone, ListItem, ListScreen, SwipeScreen};
use crate::theme::{Glyphs, Palette, glyphs, styles, tint};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = Palette::standard();
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0], &palette, &glyphs);
    app.set_list_area(chunks[2]);
    match app.screen() {
        Screen::Chats => draw_chats(frame, app, chunks[2], &palette, &glyphs),
        Screen::Contacts => draw_contacts(frame, app, chunks[2], &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![Span::raw(" ")];
    for (i, screen) in [Screen::Chats, Screen::Contacts].into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::tab_inactive(palette),
            ));
        }
        let style = if screen == app.screen() {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(format!(" {} ", screen.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Rows of `screen` that fit in `area`, with their areas.
fn visible_rows<T: ListItem>(
    screen: &SwipeScreen<T>,
    area: Rect,
) -> impl Iterator<Item = (usize, &T, &RowController, Rect)> {
    let capacity = usize::from(area.height / ROW_HEIGHT);
    let scroll = screen.scroll();
    screen
        .items()
        .iter()
        .enumerate()
        .skip(scroll)
        .take(capacity)
        .filter_map(move |(index, item)| {
            let row = screen.list().row(item.row_id())?;
            let slot = u16::try_from(index - scroll).ok()?;
            let rect = Rect {
                x: area.x,
                y: area.y + slot * ROW_HEIGHT,
                width: area.width,
                height: ROW_HEIGHT,
            };
            Some((index, item, row, rect))
        })
}

fn slide_for(app: &App, row: &RowController, rect: Rect) -> RowSlide {
    row_slide(
        rect,
        row.offset().get(),
        row.width().get(),
        row.panel_translation(),
        app.ui_options().units_per_column,
    )
}

fn draw_chats(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let screen = app.chats();
    if screen.is_empty() {
        draw_empty(frame, area, "No conversations", palette);
        return;
    }
    for (index, item, row, rect) in visible_rows(screen, area) {
        let slide = slide_for(app, row, rect);
        let selected = index == screen.selected();
        let bg = if selected {
            palette.bg_highlight
        } else {
            palette.bg_dark
        };
        let lines = conversation_lines(item, app, slide.content.width, palette, glyphs, selected);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(bg)),
            slide.content,
        );
        draw_action_panel(frame, &slide, &item.actions(), palette);
    }
}

fn conversation_lines(
    item: &Conversation,
    app: &App,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
    selected: bool,
) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let marker = if selected { glyphs.selected } else { " " };
    let time = format_list_time(item.last_at, app.now());
    let badge = unread_badge(item.unread);

    let mut head = vec![Span::styled(
        format!("{marker} "),
        Style::default().fg(palette.primary),
    )];
    if item.pinned {
        head.push(Span::styled(
            format!("{} ", glyphs.pinned),
            Style::default().fg(palette.blue),
        ));
    }
    let used: usize = head.iter().map(|span| span.content.width()).sum();
    let star = if item.favorite {
        format!(" {}", glyphs.favorite)
    } else {
        String::new()
    };
    let name_room = width.saturating_sub(used + time.width() + star.width() + 2);
    let name = truncate_to_width(&item.name, name_room);
    let pad = width.saturating_sub(used + name.width() + star.width() + time.width() + 1);
    head.push(Span::styled(name, styles::row_title(palette)));
    head.push(Span::styled(star, Style::default().fg(palette.yellow)));
    head.push(Span::raw(" ".repeat(pad)));
    head.push(Span::styled(time, styles::row_detail(palette)));

    let badge_text = badge.map(|b| format!(" {b} ")).unwrap_or_default();
    let preview_room = width.saturating_sub(2 + badge_text.width() + 2);
    let preview = truncate_to_width(&item.preview, preview_room);
    let pad = width.saturating_sub(2 + preview.width() + badge_text.width() + 1);
    let tail = vec![
        Span::raw("  "),
        Span::styled(preview, styles::row_detail(palette)),
        Span::raw(" ".repeat(pad)),
        Span::styled(badge_text, styles::unread_badge(palette)),
    ];
    vec![Line::from(head), Line::from(tail)]
}

fn draw_contacts(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let screen = app.contacts();
    if screen.is_empty() {
        draw_empty(frame, area, "No friends yet", palette);
        return;
    }
    for (index, item, row, rect) in visible_rows(screen, area) {
        let slide = slide_for(app, row, rect);
        let selected = index == screen.selected();
        let base = if selected {
            palette.bg_highlight
        } else {
            palette.bg_dark
        };
        // The row darkens as its panel comes out.
        let bg = tint(base, Color::Rgb(0, 0, 0), row.backdrop_opacity());
        let lines = contact_lines(item, slide.content.width, palette, glyphs, selected);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(bg)),
            slide.content,
        );
        draw_action_panel(frame, &slide, &item.actions(), palette);
    }
}

fn contact_lines(
    item: &Contact,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
    selected: bool,
) -> Vec<Line<'static>> {
    let marker = if selected { glyphs.selected } else { " " };
    let (dot, dot_color, presence) = if item.online {
        (glyphs.online, palette.success, "online")
    } else {
        (glyphs.offline, palette.text_muted, "offline")
    };
    let star = if item.favorite {
        format!(" {}", glyphs.favorite)
    } else {
        String::new()
    };
    let room = usize::from(width).saturating_sub(4 + star.width());
    let name = truncate_to_width(item.display_name(), room);

    let head = Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(palette.primary)),
        Span::styled(format!("{dot} "), Style::default().fg(dot_color)),
        Span::styled(name, styles::row_title(palette)),
        Span::styled(star, Style::default().fg(palette.yellow)),
    ]);
    let mut detail = presence.to_string();
    if item.remark.is_some() {
        detail = format!("{presence}, {}", item.name);
    }
    let tail = Line::from(vec![
        Span::raw("    "),
        Span::styled(detail, styles::row_detail(palette)),
    ]);
    vec![head, tail]
}

fn tone_color(tone: ActionTone, palette: &Palette) -> Color {
    match tone {
        ActionTone::Primary => palette.orange,
        ActionTone::Neutral => palette.gray,
        ActionTone::Danger => palette.red,
    }
}

/// The panel slides in from the right; buttons keep their full-width
/// positions, so only their left parts show while it is partly revealed.
fn draw_action_panel(frame: &mut Frame, slide: &RowSlide, actions: &[ActionSpec], palette: &Palette) {
    if slide.panel.width == 0 || actions.is_empty() {
        return;
    }
    let total = usize::from(slide.panel_columns);
    let per = total / actions.len();
    let mut buttons: Vec<Span<'static>> = Vec::with_capacity(actions.len());
    for (i, action) in actions.iter().enumerate() {
        let cell = if i + 1 == actions.len() {
            total - per * i
        } else {
            per
        };
        let label = truncate_to_width(action.label, cell.saturating_sub(1));
        let left = cell.saturating_sub(label.width()) / 2;
        let right = cell.saturating_sub(label.width() + left);
        buttons.push(Span::styled(
            format!("{}{label}{}", " ".repeat(left), " ".repeat(right)),
            styles::action_button(palette, tone_color(action.tone, palette)),
        ));
    }

    let line = Line::from(buttons);
    let blank = Line::from(
        line.spans
            .iter()
            .map(|span| Span::styled(" ".repeat(span.content.width()), span.style))
            .collect::<Vec<_>>(),
    );
    let lines = vec![line, blank];
    let bold = Style::default().add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(lines).style(bold), slide.panel);
}

fn draw_empty(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let line = Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(palette.text_muted),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(msg) = app.status() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(msg.to_string(), Style::default().fg(palette.success)),
        ])
    } else {
        let sep = format!(" {} ", glyphs.separator);
        let hint = styles::key_hint(palette);
        Line::from(vec![
            Span::styled(" ←", Style::default().fg(palette.accent)),
            Span::styled(" open", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("→", Style::default().fg(palette.accent)),
            Span::styled(" close", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("1-3", Style::default().fg(palette.accent)),
            Span::styled(" actions", hint),
            Span::styled(sep.clone(), hint),
            Span::styled("Tab", Style::default().fg(palette.accent)),
            Span::styled(" switch", hint),
            Span::styled(sep, hint),
            Span::styled("q", Style::default().fg(palette.accent)),
            Span::styled(" quit", hint),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
