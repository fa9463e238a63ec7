//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function. Panes that can be clicked
//! return the screen rectangles of their interactive parts so the app can
//! hit-test mouse events against the frame that was actually drawn.
//!
//! # Pane Modules
//!
//! - [`header`]: Title bar with the theme toggle button
//! - [`config`]: Video configuration form
//! - [`divider`]: The draggable column separators
//! - [`preview`]: Video/image preview tabs, Generate button and share row
//! - [`audio`]: Generated audio files with transcripts
//! - [`status`]: Status bar with keybindings and resize indicator
//! - `utils`: Shared block and styling helpers

mod utils;

pub mod audio;
pub mod config;
pub mod divider;
pub mod header;
pub mod preview;
pub mod status;

// Re-export render functions for convenience
pub use audio::{render_audio_pane, AudioRenderData};
pub use config::render_config_pane;
pub use divider::render_divider;
pub use header::render_header;
pub use preview::{fit_aspect, render_preview_pane, PreviewHits};
pub use status::{render_status_bar, StatusTone};
