//! Drag-to-resize controller for the panel dividers
//!
//! A gesture is `begin` → any number of `drag_to` → `release`. While a
//! gesture is open the controller owns a [`DragSession`]; moves that arrive
//! without one are dropped, and releasing twice is harmless.

use tracing::{debug, trace};

use super::{clamp, LayoutLimits, LayoutState};

/// One of the two draggable boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divider {
    /// Between the configuration and preview panels
    LeftMiddle,
    /// Between the preview and audio panels
    MiddleRight,
}

impl Divider {
    pub fn index(self) -> usize {
        match self {
            Divider::LeftMiddle => 0,
            Divider::MiddleRight => 1,
        }
    }
}

/// State captured when a drag begins
#[derive(Debug, Clone, Copy)]
struct DragSession {
    divider: Divider,
    middle_at_start: f32,
}

/// Turns pointer positions into panel widths
#[derive(Debug, Clone)]
pub struct ResizeController {
    limits: LayoutLimits,
    session: Option<DragSession>,
}

impl ResizeController {
    pub fn new(limits: LayoutLimits) -> Self {
        ResizeController {
            limits,
            session: None,
        }
    }

    /// Whether a drag gesture is in progress
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_divider(&self) -> Option<Divider> {
        self.session.map(|s| s.divider)
    }

    /// Open a drag session on `divider`.
    ///
    /// A session left open by a lost release is replaced.
    pub fn begin(&mut self, divider: Divider, layout: &LayoutState) {
        if let Some(stale) = self.session.take() {
            debug!(divider = stale.divider.index(), "replacing unreleased drag session");
        }
        debug!(divider = divider.index(), "resize started");
        self.session = Some(DragSession {
            divider,
            middle_at_start: layout.middle(),
        });
    }

    /// Apply a pointer position to `layout`.
    ///
    /// `pointer_x` and `container_left` are in the same unit as
    /// `container_width` (pixels, terminal columns). Returns `true` when the
    /// layout was updated.
    pub fn drag_to(
        &mut self,
        layout: &mut LayoutState,
        pointer_x: f32,
        container_left: f32,
        container_width: f32,
    ) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let Some(percent) = pointer_percentage(pointer_x, container_left, container_width) else {
            return false;
        };

        let min = self.limits.min_panel;
        match session.divider {
            Divider::LeftMiddle => {
                let left = clamp(percent, min, self.limits.left_ceiling());
                // The middle panel never grows past its drag-start width.
                let middle = clamp(100.0 - left - min, min, session.middle_at_start);
                layout.set(left, middle);
            }
            Divider::MiddleRight => {
                let left = layout.left();
                let middle = clamp(percent - left, min, self.limits.middle_ceiling(left));
                layout.set(left, middle);
            }
        }

        trace!(
            left = layout.left(),
            middle = layout.middle(),
            right = layout.right(),
            "resize"
        );
        true
    }

    /// End the current gesture. Returns `false` if none was open.
    pub fn release(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(divider = session.divider.index(), "resize finished");
                true
            }
            None => false,
        }
    }
}

/// Pointer position as a percentage of the container width
fn pointer_percentage(pointer_x: f32, container_left: f32, container_width: f32) -> Option<f32> {
    if !(container_width > 0.0) || !pointer_x.is_finite() {
        return None;
    }
    Some((pointer_x - container_left) * 100.0 / container_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ResizeController {
        ResizeController::new(LayoutLimits::default())
    }

    #[test]
    fn test_worked_example_in_pixels() {
        let mut resize = controller();
        let mut layout = LayoutState::default();

        resize.begin(Divider::LeftMiddle, &layout);
        assert!(resize.drag_to(&mut layout, 300.0, 0.0, 1000.0));
        resize.release();
        assert_eq!(layout.left(), 30.0);
        assert_eq!(layout.middle(), 30.0);

        resize.begin(Divider::MiddleRight, &layout);
        resize.drag_to(&mut layout, 700.0, 0.0, 1000.0);
        resize.release();
        assert_eq!(layout.middle(), 40.0);
        assert_eq!(layout.right(), 30.0);
    }

    #[test]
    fn test_middle_never_grows_during_left_drag() {
        let mut resize = controller();
        let mut layout = LayoutState::default();

        resize.begin(Divider::LeftMiddle, &layout);
        for x in [30.0, 40.0, 50.0, 45.0, 35.0, 25.0] {
            resize.drag_to(&mut layout, x, 0.0, 100.0);
            assert!(layout.middle() <= 30.0, "middle {}", layout.middle());
        }
        resize.release();
        assert_eq!(layout.left(), 25.0);
        assert_eq!(layout.middle(), 30.0);
        assert_eq!(layout.right(), 45.0);

        resize.begin(Divider::LeftMiddle, &layout);
        resize.drag_to(&mut layout, 50.0, 0.0, 100.0);
        assert_eq!(layout.middle(), 25.0);
        // The middle panel grows back up to its drag-start width, never past it.
        resize.drag_to(&mut layout, 25.0, 0.0, 100.0);
        assert_eq!(layout.left(), 25.0);
        assert_eq!(layout.middle(), 30.0);
        assert_eq!(layout.right(), 45.0);
    }

    #[test]
    fn test_move_without_session_is_ignored() {
        let mut resize = controller();
        let mut layout = LayoutState::default();
        assert!(!resize.drag_to(&mut layout, 80.0, 0.0, 100.0));
        assert_eq!(layout, LayoutState::default());
    }

    #[test]
    fn test_zero_width_container_is_ignored() {
        let mut resize = controller();
        let mut layout = LayoutState::default();
        resize.begin(Divider::MiddleRight, &layout);
        assert!(!resize.drag_to(&mut layout, 10.0, 0.0, 0.0));
        assert_eq!(layout, LayoutState::default());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut resize = controller();
        let layout = LayoutState::default();
        resize.begin(Divider::LeftMiddle, &layout);
        assert!(resize.is_resizing());
        assert!(resize.release());
        assert!(!resize.release());
        assert!(!resize.is_resizing());
    }

    #[test]
    fn test_divider_index() {
        assert_eq!(Divider::LeftMiddle.index(), 0);
        assert_eq!(Divider::MiddleRight.index(), 1);
    }
}
