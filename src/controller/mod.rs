//! Run lifecycle control
//!
//! [`RunController`] owns the "is a sort active" state machine. It
//! guarantees exactly one run at a time: `start` clones the committed
//! sequence into a working copy, spawns the worker thread, and the worker's
//! commit is refused if a reset has superseded it in the meantime. A panic
//! inside a sort procedure is caught at the worker boundary, recorded as a
//! failure message, and the previously committed sequence stays
//! authoritative.

use crate::engine::Algorithm;
use crate::generator::{self, ArrayShape};
use crate::sink::{FrameView, RunState, SharedState, StepSink};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Errors a control operation reports back to the caller. All of them are
/// advisory: the operation is simply not performed and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    NoAlgorithmSelected,
    AlreadyRunning,
    CannotRegenerateWhileRunning,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::NoAlgorithmSelected => {
                write!(f, "No algorithm selected")
            }
            ControlError::AlreadyRunning => {
                write!(f, "A sort is already running")
            }
            ControlError::CannotRegenerateWhileRunning => {
                write!(f, "Cannot regenerate the array while a sort is running")
            }
        }
    }
}

impl std::error::Error for ControlError {}

/// Default demo array: 15 values in 10..=150, as the visualizer starts with
pub const DEFAULT_SIZE: usize = 15;
pub const DEFAULT_MIN: u32 = 10;
pub const DEFAULT_MAX: u32 = 150;

/// Owns the exclusive run lifecycle and the worker thread handle
pub struct RunController {
    shared: Arc<SharedState>,
    selected: Option<Algorithm>,
    worker: Option<JoinHandle<()>>,
}

impl Default for RunController {
    fn default() -> Self {
        Self::new()
    }
}

impl RunController {
    /// Create a controller with a freshly generated random demo array
    pub fn new() -> Self {
        let shared = Arc::new(SharedState::new());
        shared.install_sequence(generator::random(DEFAULT_SIZE, DEFAULT_MIN, DEFAULT_MAX));
        RunController {
            shared,
            selected: None,
            worker: None,
        }
    }

    /// The shared visualizer state the renderer polls
    pub fn shared(&self) -> &Arc<SharedState> {
        &self.shared
    }

    pub fn selected(&self) -> Option<Algorithm> {
        self.selected
    }

    pub fn run_state(&self) -> RunState {
        self.shared.run_state()
    }

    pub fn frame(&self) -> FrameView {
        self.shared.frame()
    }

    /// Choose the algorithm the next `start` will run
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), ControlError> {
        if self.shared.run_state() != RunState::Idle {
            return Err(ControlError::AlreadyRunning);
        }
        self.selected = Some(algorithm);
        Ok(())
    }

    /// Start a run of the selected algorithm on a private copy of the
    /// committed sequence
    pub fn start(&mut self) -> Result<(), ControlError> {
        let algorithm = self.selected.ok_or(ControlError::NoAlgorithmSelected)?;
        self.reap_finished_worker();

        let (sink, working) = self
            .shared
            .begin_run()
            .ok_or(ControlError::AlreadyRunning)?;

        let shared = Arc::clone(&self.shared);
        self.worker = Some(thread::spawn(move || {
            run_worker(shared, sink, algorithm, working);
        }));
        Ok(())
    }

    /// Pause the active run; no-op unless `Running`
    pub fn pause(&self) {
        self.shared.pause();
    }

    /// Resume a paused run; no-op unless `Paused`
    pub fn resume(&self) {
        self.shared.resume();
    }

    /// Cancel any in-flight run and restore the committed sequence.
    /// The aborted run's partial mutations are never committed.
    pub fn reset(&mut self) {
        self.shared.cancel_run();
        if let Some(worker) = self.worker.take() {
            // The worker observes the generation bump at its next
            // suspension point, within one polling interval.
            let _ = worker.join();
        }
    }

    /// Replace the committed sequence with a freshly generated one
    pub fn generate_new(
        &mut self,
        shape: ArrayShape,
        size: usize,
        min: u32,
        max: u32,
    ) -> Result<(), ControlError> {
        if self.shared.run_state() != RunState::Idle {
            return Err(ControlError::CannotRegenerateWhileRunning);
        }
        self.reap_finished_worker();
        self.shared
            .install_sequence(generator::generate(shape, size, min, max));
        Ok(())
    }

    /// Speed level 1..=10; effective at the worker's next suspension point
    pub fn set_speed(&self, level: u8) {
        self.shared.set_speed(level);
    }

    fn reap_finished_worker(&mut self) {
        if self.shared.run_state() == RunState::Idle {
            if let Some(worker) = self.worker.take() {
                let _ = worker.join();
            }
        }
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        self.reset();
    }
}

fn run_worker(shared: Arc<SharedState>, sink: StepSink, algorithm: Algorithm, working: Vec<u32>) {
    let generation = sink.generation();

    let outcome = panic::catch_unwind(AssertUnwindSafe(move || {
        let mut working = working;
        let result = algorithm.sort(&mut working, &sink);
        (working, result)
    }));

    match outcome {
        Ok((working, Ok(()))) => {
            // Refused if a reset superseded this run while it finished
            shared.commit_run(generation, working);
        }
        Ok((_, Err(_))) => {
            // Interrupted by a reset; the cancel already restored state
        }
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            shared.fail_run(generation, format!("{} failed: {}", algorithm.name(), detail));
        }
    }
}
