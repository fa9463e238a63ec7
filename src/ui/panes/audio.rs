//! Generated audio files pane
//!
//! Two columns per entry: the transcript on the left, the file name and its
//! duration/size on the right. Entries are a fixed number of rows tall.

use super::utils::{pane_block, truncate, wrap};
use crate::catalog::AudioCatalog;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ENTRY_HEIGHT: u16 = 3;

/// Data needed to render the audio pane
pub struct AudioRenderData<'a> {
    pub catalog: &'a AudioCatalog,
    pub selected: Option<u32>,
    /// Scroll so the selected entry is visible
    pub follow_selection: bool,
}

/// Render the audio pane. Returns the rectangle of each visible entry by id.
pub fn render_audio_pane(
    frame: &mut Frame,
    area: Rect,
    data: AudioRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
    palette: &Theme,
) -> Vec<(u32, Rect)> {
    let block = pane_block(" Generated Audio Files ", is_focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return Vec::new();
    }

    // Column headings
    let heading = Rect::new(inner.x, inner.y, inner.width, 1);
    let heading_cols = split_columns(heading);
    let heading_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled("Transcript", heading_style)),
        heading_cols[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Audio File", heading_style)),
        heading_cols[1],
    );

    let files = data.catalog.files();
    if files.is_empty() {
        frame.render_widget(
            Paragraph::new("(no audio generated yet)").style(Style::default().fg(palette.muted)),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );
        return Vec::new();
    }

    let list_top = inner.y + 1;
    let list_height = inner.height - 1;
    let visible = (list_height / ENTRY_HEIGHT).max(1) as usize;

    // Bring a newly selected entry into view, then clamp to the list end
    let followed = data
        .selected
        .filter(|_| data.follow_selection)
        .and_then(|id| files.iter().position(|f| f.id == id));
    if let Some(index) = followed {
        if index < *scroll_offset {
            *scroll_offset = index;
        } else if index >= *scroll_offset + visible {
            *scroll_offset = index + 1 - visible;
        }
    }
    *scroll_offset = (*scroll_offset).min(files.len().saturating_sub(visible));

    let mut rows = Vec::new();
    for (slot, (index, file)) in files
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible)
        .enumerate()
    {
        let y = list_top + slot as u16 * ENTRY_HEIGHT;
        let height = ENTRY_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let entry = Rect::new(inner.x, y, inner.width, height);
        let cols = split_columns(entry);
        let is_selected = data.selected == Some(file.id);

        let transcript_width = cols[0].width as usize;
        let transcript: Vec<Line> = wrap(
            AudioCatalog::transcript(index),
            transcript_width,
            (ENTRY_HEIGHT - 1) as usize,
        )
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(palette.fg))))
        .collect();
        frame.render_widget(Paragraph::new(transcript), cols[0]);

        let file_width = cols[1].width as usize;
        let name_style = if is_selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let file_lines = vec![
            Line::from(vec![
                Span::styled("♪ ", Style::default().fg(palette.accent)),
                Span::styled(truncate(&file.name, file_width.saturating_sub(2)), name_style),
            ]),
            Line::from(Span::styled(
                truncate(&file.details(), file_width),
                Style::default().fg(palette.muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(file_lines).style(Style::default().bg(palette.muted_bg)),
            cols[1],
        );

        rows.push((file.id, entry));
    }

    rows
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(area)
}
