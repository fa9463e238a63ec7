//! Percentages to terminal cells
//!
//! Each divider is one column wide and sits on the boundary column given by
//! its cumulative percentage, so a pointer on column `c` maps back to the
//! same boundary when fed through the resize controller.

use ratatui::layout::{Position, Rect};

use super::{Divider, LayoutState};

/// Screen rectangles for the three panels and two dividers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub container: Rect,
    pub left: Rect,
    pub left_divider: Rect,
    pub middle: Rect,
    pub right_divider: Rect,
    pub right: Rect,
}

impl PanelGeometry {
    pub fn compute(container: Rect, layout: &LayoutState) -> Self {
        let width = container.width;
        let last = width.saturating_sub(1);

        let first_boundary = percent_of(width, layout.left()).min(last.saturating_sub(2));
        let second_boundary = percent_of(width, layout.left() + layout.middle())
            .max(first_boundary + 2)
            .min(last);

        let column = |offset: u16, span: u16| Rect {
            x: container.x + offset.min(width),
            y: container.y,
            width: span.min(width.saturating_sub(offset)),
            height: container.height,
        };

        PanelGeometry {
            container,
            left: column(0, first_boundary),
            left_divider: column(first_boundary, 1),
            middle: column(
                first_boundary + 1,
                second_boundary.saturating_sub(first_boundary + 1),
            ),
            right_divider: column(second_boundary, 1),
            right: column(second_boundary + 1, width.saturating_sub(second_boundary + 1)),
        }
    }

    /// The divider under a pointer, if any
    pub fn divider_at(&self, column: u16, row: u16) -> Option<Divider> {
        let position = Position::new(column, row);
        if self.left_divider.contains(position) {
            Some(Divider::LeftMiddle)
        } else if self.right_divider.contains(position) {
            Some(Divider::MiddleRight)
        } else {
            None
        }
    }

    pub fn divider_rect(&self, divider: Divider) -> Rect {
        match divider {
            Divider::LeftMiddle => self.left_divider,
            Divider::MiddleRight => self.right_divider,
        }
    }
}

fn percent_of(width: u16, percent: f32) -> u16 {
    (f32::from(width) * percent / 100.0).round() as u16
}
