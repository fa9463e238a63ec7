// Drag-to-resize behaviour of the three-column layout

use brainrot::layout::{Divider, LayoutLimits, LayoutState, ResizeController};

const EPSILON: f32 = 1e-3;

/// Deterministic pointer positions spread across and beyond the container
fn pointer_walk(seed: u64, steps: usize) -> Vec<f32> {
    let mut state = seed;
    (0..steps)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            // -100..1100 px over a 1000 px container
            ((state >> 33) % 1200) as f32 - 100.0
        })
        .collect()
}

fn assert_invariants(layout: &LayoutState, limits: &LayoutLimits) {
    let min = limits.min_panel;
    assert!(layout.left() >= min - EPSILON, "left {}", layout.left());
    assert!(layout.left() <= limits.max_left + EPSILON, "left {}", layout.left());
    assert!(layout.middle() >= min - EPSILON, "middle {}", layout.middle());
    assert!(layout.right() >= min - EPSILON, "right {}", layout.right());
    let total = layout.left() + layout.middle() + layout.right();
    assert!((total - 100.0).abs() < EPSILON);
}

#[test]
fn test_left_divider_drags_keep_every_floor() {
    let limits = LayoutLimits::default();
    for seed in 0..20 {
        let mut resize = ResizeController::new(limits);
        let mut layout = LayoutState::default();

        resize.begin(Divider::LeftMiddle, &layout);
        for x in pointer_walk(seed, 200) {
            resize.drag_to(&mut layout, x, 0.0, 1000.0);
            assert!(layout.left() >= 25.0 && layout.left() <= 60.0);
            assert!(layout.right() >= 25.0 - EPSILON, "right {}", layout.right());
            assert_invariants(&layout, &limits);
        }
        resize.release();
    }
}

#[test]
fn test_middle_divider_drags_respect_middle_ceiling() {
    let limits = LayoutLimits::default();
    for seed in 0..20 {
        let mut resize = ResizeController::new(limits);
        let mut layout = LayoutState::default();

        // Alternate gestures on both dividers
        for (gesture, chunk) in pointer_walk(seed, 240).chunks(12).enumerate() {
            let divider = if gesture % 2 == 0 {
                Divider::MiddleRight
            } else {
                Divider::LeftMiddle
            };
            resize.begin(divider, &layout);
            for &x in chunk {
                resize.drag_to(&mut layout, x, 0.0, 1000.0);
                if divider == Divider::MiddleRight {
                    assert!(layout.middle() <= 100.0 - layout.left() - 25.0 + EPSILON);
                }
                assert_invariants(&layout, &limits);
            }
            assert!(resize.release());
        }
    }
}

#[test]
fn test_loose_limits_reach_the_left_maximum() {
    let limits = LayoutLimits {
        min_panel: 15.0,
        max_left: 60.0,
    };
    let mut resize = ResizeController::new(limits);
    let mut layout = LayoutState::clamped(25.0, 30.0, &limits);

    resize.begin(Divider::LeftMiddle, &layout);
    resize.drag_to(&mut layout, 950.0, 0.0, 1000.0);
    resize.release();

    assert_eq!(layout.left(), 60.0);
    assert_eq!(layout.middle(), 25.0);
    assert_eq!(layout.right(), 15.0);
}

#[test]
fn test_container_offset_is_subtracted() {
    let mut resize = ResizeController::new(LayoutLimits::default());
    let mut layout = LayoutState::default();

    resize.begin(Divider::LeftMiddle, &layout);
    resize.drag_to(&mut layout, 500.0, 200.0, 1000.0);
    resize.release();

    assert_eq!(layout.left(), 30.0);
}

#[test]
fn test_worked_example() {
    let mut resize = ResizeController::new(LayoutLimits::default());
    let mut layout = LayoutState::default();

    resize.begin(Divider::LeftMiddle, &layout);
    resize.drag_to(&mut layout, 300.0, 0.0, 1000.0);
    assert!(resize.release());
    assert_eq!(layout.left(), 30.0);

    resize.begin(Divider::MiddleRight, &layout);
    resize.drag_to(&mut layout, 700.0, 0.0, 1000.0);
    assert!(resize.release());
    assert!(!resize.release());

    assert_eq!(layout.middle(), 40.0);
    assert_eq!(layout.right(), 30.0);
}
