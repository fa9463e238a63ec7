//! Preview pane: tab strip, placeholder and the Generate button
//!
//! The placeholder box takes the aspect ratio of the configured output
//! size. Terminal cells are roughly twice as tall as they are wide, so one
//! row counts as two columns when fitting the box.

use super::utils::{pane_block, truncate};
use crate::form::FormModel;
use crate::ui::app::PreviewTab;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CELL_ASPECT: f32 = 2.0;
const SHARE_TARGETS: [&str; 5] = ["⤓", "IG", "X", "YT", "TT"];

/// Clickable parts of the preview pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewHits {
    pub video_tab: Rect,
    pub image_tab: Rect,
    pub generate: Rect,
}

/// Largest rectangle centred in `area` with the ratio `width:height`
pub fn fit_aspect(area: Rect, width: u32, height: u32) -> Rect {
    if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
        return area;
    }
    let ratio = width as f32 / height as f32;
    let area_cols = f32::from(area.width);
    let area_rows = f32::from(area.height);

    let mut rows = area_rows;
    let mut cols = rows * CELL_ASPECT * ratio;
    if cols > area_cols {
        cols = area_cols;
        rows = cols / (CELL_ASPECT * ratio);
    }

    let cols = (cols.round() as u16).clamp(1, area.width);
    let rows = (rows.round() as u16).clamp(1, area.height);
    Rect {
        x: area.x + (area.width - cols) / 2,
        y: area.y + (area.height - rows) / 2,
        width: cols,
        height: rows,
    }
}

/// Render the preview pane
pub fn render_preview_pane(
    frame: &mut Frame,
    area: Rect,
    tab: PreviewTab,
    form: &FormModel,
    is_focused: bool,
    palette: &Theme,
) -> PreviewHits {
    let block = pane_block(" Preview ", is_focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let (video_tab, image_tab) = render_tabs(frame, sections[0], tab, palette);

    // Placeholder
    let body = sections[1];
    let boxed = match form.aspect_ratio() {
        Some((w, h)) => fit_aspect(body, w, h),
        None => body,
    };
    let (icon, message, hint) = match tab {
        PreviewTab::Video => (
            "▶",
            "Video preview will appear here",
            "Generate a video to see preview",
        ),
        PreviewTab::Image => (
            "▣",
            "Image preview will appear here",
            "Generate a video to see image preview",
        ),
    };
    let placeholder = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border_normal))
        .style(Style::default().bg(palette.muted_bg));
    let text_area = placeholder.inner(boxed);
    frame.render_widget(placeholder, boxed);

    let width = text_area.width as usize;
    let top_pad = text_area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(icon, Style::default().fg(palette.accent))));
    lines.push(Line::from(Span::styled(
        truncate(message, width),
        Style::default().fg(palette.muted),
    )));
    lines.push(Line::from(Span::styled(
        truncate(hint, width),
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    // Generate button
    let generate = sections[2];
    let button = Paragraph::new(Line::from(Span::styled(
        "▶ Generate Video",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent_strong)),
    )
    .style(Style::default().fg(palette.accent).bg(palette.bg));
    frame.render_widget(button, generate);

    // Share row is decorative
    let share: Vec<Span> = SHARE_TARGETS
        .iter()
        .flat_map(|target| {
            [
                Span::styled(format!("({})", target), Style::default().fg(palette.accent)),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(share)).alignment(Alignment::Center),
        sections[3],
    );

    PreviewHits {
        video_tab,
        image_tab,
        generate,
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active: PreviewTab, palette: &Theme) -> (Rect, Rect) {
    const VIDEO: &str = " Video Preview ";
    const IMAGE: &str = " Image Preview ";

    let style_for = |tab: PreviewTab| {
        if tab == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        }
    };

    let video_width = (VIDEO.len() as u16).min(area.width);
    let image_width = (IMAGE.len() as u16).min(area.width.saturating_sub(video_width));
    let video_rect = Rect::new(area.x, area.y, video_width, area.height);
    let image_rect = Rect::new(area.x + video_width, area.y, image_width, area.height);

    frame.render_widget(
        Paragraph::new(Span::styled(VIDEO, style_for(PreviewTab::Video))),
        video_rect,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(IMAGE, style_for(PreviewTab::Image))),
        image_rect,
    );

    (video_rect, image_rect)
}
