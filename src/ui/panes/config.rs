//! Video configuration form pane
//!
//! Fields are stacked top to bottom as label + input rows. Width and height
//! share a row. Fields that do not fit in the pane are not drawn and cannot
//! be clicked, but remain reachable from the keyboard.

use super::utils::{pane_block, truncate};
use crate::form::{FieldKind, FormField, FormModel};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows of fields; most rows hold one field
const FORM_ROWS: [&[FormField]; 7] = [
    &[FormField::SourceUrl],
    &[FormField::Width, FormField::Height],
    &[FormField::MaxLength],
    &[FormField::AudioModel],
    &[FormField::VideoTitle],
    &[FormField::VideoDescription],
    &[FormField::UseImageInIntro],
];

const DESCRIPTION_LINES: u16 = 3;

fn field_height(field: FormField) -> u16 {
    match field.kind() {
        FieldKind::Toggle => 1,
        FieldKind::MultiLine => 1 + DESCRIPTION_LINES,
        _ => 2,
    }
}

/// Render the form. Returns the rectangle of every field that was drawn.
pub fn render_config_pane(
    frame: &mut Frame,
    area: Rect,
    form: &FormModel,
    focused_field: FormField,
    is_focused: bool,
    palette: &Theme,
) -> Vec<(FormField, Rect)> {
    let block = pane_block(" Video Configuration ", is_focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut drawn = Vec::new();
    let mut y = inner.y;

    for row in FORM_ROWS {
        let height = row.iter().copied().map(field_height).max().unwrap_or(1);
        if y + height > inner.bottom() {
            break;
        }
        let row_area = Rect::new(inner.x, y, inner.width, height);
        let constraints = vec![Constraint::Ratio(1, row.len() as u32); row.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .spacing(1)
            .split(row_area);

        for (field, cell) in row.iter().copied().zip(cells.iter().copied()) {
            let is_active = is_focused && field == focused_field;
            render_field(frame, cell, form, field, is_active, palette);
            drawn.push((field, cell));
        }

        // Blank line between rows
        y += height + 1;
    }

    drawn
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormModel,
    field: FormField,
    is_active: bool,
    palette: &Theme,
) {
    let width = area.width as usize;
    let label_style = if is_active {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg)
    };
    let input_style = Style::default().bg(palette.muted_bg).fg(palette.fg);
    let placeholder_style = Style::default().bg(palette.muted_bg).fg(palette.muted);
    let cursor = if is_active { "▏" } else { "" };

    let lines: Vec<Line> = match field.kind() {
        FieldKind::Toggle => {
            let (mark, style) = if form.use_image_in_intro {
                ("[●]", Style::default().fg(palette.accent))
            } else {
                ("[ ]", Style::default().fg(palette.muted))
            };
            vec![Line::from(vec![
                Span::styled(mark, style),
                Span::raw(" "),
                Span::styled(field.label(), label_style),
            ])]
        }
        FieldKind::Select => {
            let value = form.value(field);
            let text = if value.is_empty() {
                Span::styled(
                    pad(&format!("{} ▾", field.placeholder()), width),
                    placeholder_style,
                )
            } else {
                Span::styled(pad(&format!("{} ▾", value), width), input_style)
            };
            vec![
                Line::from(Span::styled(field.label(), label_style)),
                Line::from(text),
            ]
        }
        FieldKind::MultiLine => {
            let value = form.value(field);
            let mut lines = vec![Line::from(Span::styled(field.label(), label_style))];
            if value.is_empty() {
                lines.push(Line::from(Span::styled(
                    pad(&format!("{}{}", cursor, field.placeholder()), width),
                    placeholder_style,
                )));
                for _ in 1..DESCRIPTION_LINES {
                    lines.push(Line::from(Span::styled(pad("", width), input_style)));
                }
            } else {
                // Show the tail so the line being typed stays visible
                let text_lines: Vec<&str> = value.split('\n').collect();
                let skip = text_lines.len().saturating_sub(DESCRIPTION_LINES as usize);
                let shown = text_lines.len() - skip;
                for (i, text) in text_lines.iter().skip(skip).enumerate() {
                    let tail = if i + 1 == shown { cursor } else { "" };
                    lines.push(Line::from(Span::styled(
                        pad(&format!("{}{}", text, tail), width),
                        input_style,
                    )));
                }
                for _ in shown..DESCRIPTION_LINES as usize {
                    lines.push(Line::from(Span::styled(pad("", width), input_style)));
                }
            }
            lines
        }
        FieldKind::Text | FieldKind::Numeric => {
            let value = form.value(field);
            let input = if value.is_empty() {
                Span::styled(
                    pad(&format!("{}{}", cursor, field.placeholder()), width),
                    placeholder_style,
                )
            } else {
                // Keep the end of long values in view
                let shown: String = {
                    let count = value.chars().count();
                    let room = width.saturating_sub(1);
                    value.chars().skip(count.saturating_sub(room)).collect()
                };
                Span::styled(pad(&format!("{}{}", shown, cursor), width), input_style)
            };
            vec![
                Line::from(Span::styled(field.label(), label_style)),
                Line::from(input),
            ]
        }
    };

    frame.render_widget(Paragraph::new(lines), area);
}

/// Fill `text` out to `width` so the input background spans the cell
fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}
