//! Status bar rendering with keybindings and state indicators

use crate::layout::LayoutState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// How the status message is coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Success,
    Error,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    tone: StatusTone,
    layout: &LayoutState,
    is_resizing: bool,
    palette: &Theme,
) {
    // Split status bar into left and right
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_bg = palette.muted_bg;

    // Left side: panel widths and message
    let widths = format!(
        " {:.0}·{:.0}·{:.0} ",
        layout.left(),
        layout.middle(),
        layout.right()
    );
    let left_spans = vec![
        Span::styled(
            widths,
            Style::default()
                .bg(if is_resizing {
                    palette.divider_active
                } else {
                    palette.accent_strong
                })
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().bg(bar_bg).fg(palette.muted)),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(bar_bg).fg(match tone {
                StatusTone::Normal => palette.fg,
                StatusTone::Success => palette.success,
                StatusTone::Error => palette.error,
            }),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(bar_bg))
            .alignment(Alignment::Left),
        halves[0],
    );

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(palette.muted).fg(Color::Black);
    let desc_style = Style::default().bg(bar_bg).fg(palette.fg);
    let sep_style = Style::default().bg(bar_bg).fg(palette.muted);

    let mut right_spans = vec![
        Span::styled(" ⇥ ", key_style),
        Span::styled(" pane ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ^G ", key_style),
        Span::styled(" generate ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ^T ", key_style),
        Span::styled(" theme ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" M-[ ] { } ", key_style),
        Span::styled(" resize ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("esc", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if is_resizing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ⇔ RESIZING ",
            Style::default()
                .bg(palette.divider_active)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(bar_bg))
            .alignment(Alignment::Right),
        halves[1],
    );
}
