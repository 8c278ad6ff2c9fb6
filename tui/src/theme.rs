//! Color theme and glyphs for the Linkman TUI.
//!
//! Kanagawa Wave palette; action buttons take their own semantic colors.

use ratatui::style::{Color, Modifier, Style};

use linkman_config::UiOptions;

/// Kanagawa Wave colors the list screens use.
mod colors {
    use super::Color;

    pub const SUMI_INK_0: Color = Color::Rgb(22, 22, 29);
    pub const SUMI_INK_4: Color = Color::Rgb(42, 42, 55);
    pub const FUJI_WHITE: Color = Color::Rgb(220, 215, 186);
    pub const FUJI_GRAY: Color = Color::Rgb(114, 113, 105);
    pub const ONI_VIOLET: Color = Color::Rgb(149, 127, 184);
    pub const SPRING_BLUE: Color = Color::Rgb(127, 180, 202);
    pub const SPRING_GREEN: Color = Color::Rgb(152, 187, 108);
    pub const CRYSTAL_BLUE: Color = Color::Rgb(126, 156, 216);
    pub const CARP_YELLOW: Color = Color::Rgb(230, 195, 132);
    pub const SURIMI_ORANGE: Color = Color::Rgb(255, 160, 102);
    pub const PEACH_RED: Color = Color::Rgb(255, 93, 98);
    pub const KATANA_GRAY: Color = Color::Rgb(113, 124, 124);
}

/// Resolved colors for rows, tabs and action buttons.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    /// Selected row.
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub blue: Color,
    pub yellow: Color,
    pub orange: Color,
    pub red: Color,
    pub gray: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::SUMI_INK_0,
            bg_highlight: colors::SUMI_INK_4,
            text_primary: colors::FUJI_WHITE,
            text_muted: colors::FUJI_GRAY,
            primary: colors::ONI_VIOLET,
            accent: colors::SPRING_BLUE,
            success: colors::SPRING_GREEN,
            blue: colors::CRYSTAL_BLUE,
            yellow: colors::CARP_YELLOW,
            orange: colors::SURIMI_ORANGE,
            red: colors::PEACH_RED,
            gray: colors::KATANA_GRAY,
        }
    }
}

/// ASCII/Unicode glyphs for row markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub pinned: &'static str,
    pub favorite: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub selected: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            pinned: "^",
            favorite: "*",
            online: "o",
            offline: ".",
            selected: ">",
            separator: "|",
        }
    } else {
        Glyphs {
            pinned: "▴",
            favorite: "★",
            online: "●",
            offline: "○",
            selected: "▸",
            separator: "│",
        }
    }
}

/// Blend an RGB color toward `toward` by `amount` in `[0, 1]`.
///
/// Non-RGB colors are returned unchanged.
#[must_use]
pub fn tint(base: Color, toward: Color, amount: f32) -> Color {
    let (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) = (base, toward) else {
        return base;
    };
    let t = amount.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
    };
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn row_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn row_detail(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn unread_badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.red)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn action_button(palette: &Palette, color: Color) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }
}
