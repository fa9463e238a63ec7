//! Header bar: product title and the theme toggle

use crate::ui::theme::{Theme, ThemeMode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = "BrainrotGenerator";
const BUTTON_WIDTH: u16 = 3;

/// Render the header. Returns the theme button's rectangle.
pub fn render_header(frame: &mut Frame, area: Rect, mode: ThemeMode, palette: &Theme) -> Rect {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(palette.bg))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);

    let button = Rect {
        x: area.right().saturating_sub(BUTTON_WIDTH + 1),
        y: area.y,
        width: BUTTON_WIDTH.min(area.width),
        height: area.height.min(1),
    };
    let icon = Paragraph::new(format!(" {} ", mode.toggle_icon())).style(
        Style::default()
            .bg(palette.muted_bg)
            .fg(palette.accent),
    );
    frame.render_widget(icon, button);

    button
}
