use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render a one-column divider, highlighted while it is being dragged
pub fn render_divider(frame: &mut Frame, area: Rect, is_dragging: bool, palette: &Theme) {
    let (glyph, color) = if is_dragging {
        ("┃", palette.divider_active)
    } else {
        ("│", palette.border_normal)
    };
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from(glyph)).collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(color).bg(palette.bg)),
        area,
    );
}
