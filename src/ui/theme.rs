use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> &'static Theme {
        match self {
            ThemeMode::Dark => &DARK_THEME,
            ThemeMode::Light => &LIGHT_THEME,
        }
    }

    /// Glyph on the header button: the mode a click switches to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub muted_bg: Color,
    pub accent: Color,        // Purple
    pub accent_strong: Color, // Deeper purple for buttons
    pub error: Color,
    pub success: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub divider_active: Color,
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(10, 10, 15),
    fg: Color::Rgb(230, 230, 240),
    muted: Color::Rgb(140, 140, 160),
    muted_bg: Color::Rgb(32, 32, 44),
    accent: Color::Rgb(192, 132, 252),
    accent_strong: Color::Rgb(147, 51, 234),
    error: Color::Rgb(243, 139, 168),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(192, 132, 252),
    border_normal: Color::Rgb(60, 60, 78),
    divider_active: Color::Rgb(168, 85, 247),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(250, 250, 252),
    fg: Color::Rgb(24, 24, 32),
    muted: Color::Rgb(100, 100, 116),
    muted_bg: Color::Rgb(236, 236, 242),
    accent: Color::Rgb(126, 34, 206),
    accent_strong: Color::Rgb(107, 33, 168),
    error: Color::Rgb(190, 18, 60),
    success: Color::Rgb(21, 128, 61),
    border_focused: Color::Rgb(126, 34, 206),
    border_normal: Color::Rgb(200, 200, 212),
    divider_active: Color::Rgb(168, 85, 247),
};
