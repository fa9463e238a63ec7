//! Three-column layout model
//!
//! The screen is split into a configuration panel, a preview panel and an
//! audio panel. Their widths are held as percentages of the container:
//! `left` and `middle` are stored, `right` is always derived so the three sum
//! to 100.
//!
//! - [`LayoutLimits`]: the minimum panel width and the left-panel ceiling
//! - [`LayoutState`]: the current widths, always within the limits
//! - [`resize`]: the drag controller that turns pointer motion into widths
//! - [`geometry`]: mapping percentages onto terminal columns

pub mod geometry;
pub mod resize;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use geometry::PanelGeometry;
pub use resize::{Divider, ResizeController};

/// Smallest width any panel may take, in percent
pub const MIN_PANEL_PERCENT: f32 = 25.0;

/// Largest width the left panel may take, in percent
pub const MAX_LEFT_PERCENT: f32 = 60.0;

/// Bounds applied to every width update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutLimits {
    pub min_panel: f32,
    pub max_left: f32,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        LayoutLimits {
            min_panel: MIN_PANEL_PERCENT,
            max_left: MAX_LEFT_PERCENT,
        }
    }
}

impl LayoutLimits {
    /// Reject limits under which three panels cannot coexist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_panel.is_finite() || self.min_panel <= 0.0 {
            return Err(ConfigError::InvalidLimits(format!(
                "min_panel must be positive, got {}",
                self.min_panel
            )));
        }
        if self.min_panel * 3.0 > 100.0 {
            return Err(ConfigError::InvalidLimits(format!(
                "three panels of {}% do not fit",
                self.min_panel
            )));
        }
        if !self.max_left.is_finite() || self.max_left < self.min_panel {
            return Err(ConfigError::InvalidLimits(format!(
                "max_left ({}) is below min_panel ({})",
                self.max_left, self.min_panel
            )));
        }
        Ok(())
    }

    /// Effective upper bound for the left panel.
    ///
    /// `max_left` is further capped so the middle and right panels can both
    /// keep their minimum width.
    pub fn left_ceiling(&self) -> f32 {
        self.max_left.min(100.0 - 2.0 * self.min_panel)
    }

    /// Upper bound for the middle panel given the current left width
    pub fn middle_ceiling(&self, left: f32) -> f32 {
        100.0 - left - self.min_panel
    }
}

/// Current panel widths in percent of the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    left: f32,
    middle: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        LayoutState {
            left: 25.0,
            middle: 30.0,
        }
    }
}

impl LayoutState {
    /// Build a layout from requested widths, pulling them inside `limits`
    pub fn clamped(left: f32, middle: f32, limits: &LayoutLimits) -> Self {
        let left = clamp(left, limits.min_panel, limits.left_ceiling());
        let middle = clamp(middle, limits.min_panel, limits.middle_ceiling(left));
        LayoutState { left, middle }
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn middle(&self) -> f32 {
        self.middle
    }

    /// Right panel width, derived from the other two
    pub fn right(&self) -> f32 {
        100.0 - self.left - self.middle
    }

    pub(crate) fn set(&mut self, left: f32, middle: f32) {
        self.left = left;
        self.middle = middle;
    }
}

/// `value` bounded to `[lo, hi]`; `lo` wins if the bounds cross
pub(crate) fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}
