use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered pane block, highlighted when focused
pub(crate) fn pane_block<'a>(title: &'a str, is_focused: bool, palette: &Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default()
            .fg(palette.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border_normal)
    };

    Block::default()
        .title(title)
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette.bg).fg(palette.fg))
}

/// Shorten `text` to `width` characters, marking the cut with an ellipsis
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` characters
pub(crate) fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let shortened = truncate(last, width.saturating_sub(1));
            *last = format!("{}…", shortened.trim_end_matches('…'));
        }
    }
    lines
        .into_iter()
        .map(|line| truncate(&line, width))
        .collect()
}
