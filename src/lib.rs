//! # Introduction
//!
//! Brainrot Studio is the front end of an automated short-form video
//! generator: a full-screen terminal application with three resizable
//! columns.
//!
//! ```text
//! ┌ Video Configuration ┐│┌ Preview ──────────┐│┌ Generated Audio Files ┐
//! │ source, size, voice ││ video/image tabs   ││ transcript │ file      │
//! │ title, description  ││ [ Generate Video ] ││ ...        │ ...       │
//! ```
//!
//! 1. [`layout`] — panel widths, the drag-to-resize controller and the
//!    mapping from percentages to terminal columns.
//! 2. [`form`] — the configuration form and its validation into a
//!    [`form::GenerateRequest`].
//! 3. [`catalog`] — the sample audio files and voice models.
//! 4. [`generate`] — the [`generate::Generator`] seam where a real video
//!    service would plug in; the shipped generator only logs.
//! 5. [`config`] — optional TOML configuration.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! All state lives in memory for the lifetime of the process.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod generate;
pub mod layout;
pub mod ui;
