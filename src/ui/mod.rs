//! Ratatui-based TUI; not part of the stable library API

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
