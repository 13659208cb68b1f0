//! # Introduction
//!
//! sortty animates six classic sorting algorithms step by step in the
//! terminal, synchronizing a bar chart of the array, a pseudocode panel
//! with the current line highlighted, and running comparison/swap/step
//! counters.  The UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Generator → RunController → worker thread → Algorithm → StepSink → TUI
//! ```
//!
//! 1. [`generator`] — random / nearly-sorted / reversed demo sequences.
//! 2. [`controller`] — the exclusive run lifecycle (`Idle`/`Running`/
//!    `Paused`), private working copy, atomic commit, cancellation guard.
//! 3. [`engine`] — the six instrumented sort procedures (bubble,
//!    insertion, selection, quick, merge, heap).
//! 4. [`sink`] — the coordination object procedures report through:
//!    highlight index sets, counters, and the cooperative `delay()`
//!    suspension point with pause/resume.
//! 5. [`export`] — JSON run reports.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod controller;
pub mod engine;
pub mod export;
pub mod generator;
pub mod sink;
pub mod ui;
