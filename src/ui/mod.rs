//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard and mouse event loop, pane
//!   focus, drag-to-resize wiring
//! - **[`panes`]** — stateless render functions for each visible pane (header,
//!   configuration form, preview, audio list, status bar)
//! - **[`theme`]** — the dark and light colour palettes used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a [`Config`]
//! and a [`Generator`], then call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`Generator`]: crate::generate::Generator
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
