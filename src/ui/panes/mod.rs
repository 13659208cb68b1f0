//! TUI pane rendering modules
//!
//! - [`bars`]: bar-chart view of the array, colored by highlight category
//! - [`pseudocode`]: pseudocode of the selected algorithm with the current
//!   line highlighted
//! - [`stats`]: run counters, speed level and run state
//! - [`info`]: description, complexity and principle of the selected
//!   algorithm
//! - [`status`]: status bar with keybindings and state badge

pub mod bars;
pub mod info;
pub mod pseudocode;
pub mod stats;
pub mod status;

pub use bars::render_bars_pane;
pub use info::render_info_pane;
pub use pseudocode::render_pseudocode_pane;
pub use stats::render_stats_pane;
pub use status::render_status_bar;
