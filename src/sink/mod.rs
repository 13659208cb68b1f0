//! Shared visualizer state and the step event sink
//!
//! This module holds the single coordination object every sort procedure
//! talks to while it runs:
//!
//! - [`SharedState`] — the long-lived state behind an `Arc`: the committed
//!   sequence, the snapshot the renderer draws, the four highlight index
//!   sets, the run statistics, and the run-state machine.
//! - [`StepSink`] — a per-run view minted by [`SharedState::begin_run`].
//!   It captures the run *generation* at start; once a reset has moved the
//!   generation on, every sink call becomes a no-op and [`StepSink::delay`]
//!   returns [`SortInterrupted`], unwinding the stale worker.
//! - [`StepObserver`] — callback surface for embedders and tests, invoked
//!   synchronously at each event point.
//!
//! The TUI does not install an observer; like the rest of the application it
//! polls [`SharedState::frame`] on every draw tick.

use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// How often a paused or sleeping `delay()` re-checks for wakeup. The
/// condvar is notified on resume/reset, so this is only a backstop.
const WAKE_POLL: Duration = Duration::from_millis(100);

/// Lifecycle of the (at most one) active sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

/// Monotonic counters for the lifetime of one run.
///
/// `steps` is always `comparisons + swaps`; the two increment operations
/// bump it in the same critical section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub steps: u64,
}

/// Highlight index sets at one event point, with indices in ascending order
/// (observer-facing snapshot of the internal hash sets)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub pivot: Vec<usize>,
    pub sorted: Vec<usize>,
}

/// Everything the renderer needs for one frame, cloned out of the shared
/// state so no lock is held while drawing
#[derive(Debug, Clone)]
pub struct FrameView {
    pub values: Vec<u32>,
    pub comparing: FxHashSet<usize>,
    pub swapping: FxHashSet<usize>,
    pub pivot: FxHashSet<usize>,
    pub sorted: FxHashSet<usize>,
    pub stats: Stats,
    pub current_line: Option<u32>,
    pub run_state: RunState,
}

/// Returned by [`StepSink::delay`] when the run it belongs to has been
/// cancelled by a reset. Sort procedures propagate it with `?` to unwind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortInterrupted;

impl fmt::Display for SortInterrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sort run interrupted by reset")
    }
}

impl std::error::Error for SortInterrupted {}

/// Callback surface consumed by embedders and tests. The core calls these
/// synchronously at each event point; implementations must not call back
/// into [`SharedState`] from inside a callback.
pub trait StepObserver: Send {
    /// A highlight set changed, or a new snapshot of the working copy was
    /// published at a suspension point.
    fn on_state_changed(&mut self, _highlights: &Highlights, _values: &[u32]) {}

    /// A counter was bumped (or the statistics were reset to zero).
    fn on_stats_changed(&mut self, _stats: Stats) {}

    /// The pseudocode line pointer moved. Purely advisory.
    fn on_line_highlighted(&mut self, _line: Option<u32>) {}
}

/// Interior state guarded by the mutex in [`SharedState`]
struct VizState {
    /// The authoritative sequence; replaced only by a commit or a regenerate
    committed: Vec<u32>,

    /// Snapshot the renderer draws; updated at each suspension point
    values: Vec<u32>,

    comparing: FxHashSet<usize>,
    swapping: FxHashSet<usize>,
    pivot: FxHashSet<usize>,

    /// Persists across `clear_highlights`; only cleared at run boundaries
    sorted: FxHashSet<usize>,

    stats: Stats,
    current_line: Option<u32>,
    run_state: RunState,

    /// Inter-step interval; takes effect on the next `delay()`
    interval: Duration,

    /// Bumped on every run start and every reset; a sink whose captured
    /// generation no longer matches is stale and must stand down
    generation: u64,

    /// Message from a run that died to a panic, consumed by the status bar
    last_failure: Option<String>,
}

impl VizState {
    fn clear_transient(&mut self) {
        self.comparing.clear();
        self.swapping.clear();
        self.pivot.clear();
    }

    fn clear_all_highlights(&mut self) {
        self.clear_transient();
        self.sorted.clear();
    }

    fn highlights(&self) -> Highlights {
        fn ordered(set: &FxHashSet<usize>) -> Vec<usize> {
            let mut v: Vec<usize> = set.iter().copied().collect();
            v.sort_unstable();
            v
        }
        Highlights {
            comparing: ordered(&self.comparing),
            swapping: ordered(&self.swapping),
            pivot: ordered(&self.pivot),
            sorted: ordered(&self.sorted),
        }
    }
}

/// The long-lived coordination object shared between the run controller,
/// the worker thread and the renderer
pub struct SharedState {
    inner: Mutex<VizState>,
    wake: Condvar,
    observer: Mutex<Option<Box<dyn StepObserver>>>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub fn new() -> Self {
        SharedState {
            inner: Mutex::new(VizState {
                committed: Vec::new(),
                values: Vec::new(),
                comparing: FxHashSet::default(),
                swapping: FxHashSet::default(),
                pivot: FxHashSet::default(),
                sorted: FxHashSet::default(),
                stats: Stats::default(),
                current_line: None,
                run_state: RunState::Idle,
                interval: speed_interval(5),
                generation: 0,
                last_failure: None,
            }),
            wake: Condvar::new(),
            observer: Mutex::new(None),
        }
    }

    /// A panic while the state lock is held (a tripped index check in a
    /// debug build) poisons it on the worker; recover the guard so the
    /// render thread keeps drawing and the run can still be cancelled.
    fn lock(&self) -> MutexGuard<'_, VizState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install the observer callbacks. At most one observer is active.
    pub fn set_observer(&self, observer: Box<dyn StepObserver>) {
        *self.lock_observer() = Some(observer);
    }

    /// A panic escaping an observer callback poisons this mutex; recover
    /// the guard so the failure path can still report the abandoned run.
    fn lock_observer(&self) -> MutexGuard<'_, Option<Box<dyn StepObserver>>> {
        self.observer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify_state(&self, highlights: Highlights, values: Vec<u32>) {
        if let Some(obs) = self.lock_observer().as_mut() {
            obs.on_state_changed(&highlights, &values);
        }
    }

    fn notify_stats(&self, stats: Stats) {
        if let Some(obs) = self.lock_observer().as_mut() {
            obs.on_stats_changed(stats);
        }
    }

    fn notify_line(&self, line: Option<u32>) {
        if let Some(obs) = self.lock_observer().as_mut() {
            obs.on_line_highlighted(line);
        }
    }

    /// Clone out everything the renderer needs for one frame
    pub fn frame(&self) -> FrameView {
        let st = self.lock();
        FrameView {
            values: st.values.clone(),
            comparing: st.comparing.clone(),
            swapping: st.swapping.clone(),
            pivot: st.pivot.clone(),
            sorted: st.sorted.clone(),
            stats: st.stats,
            current_line: st.current_line,
            run_state: st.run_state,
        }
    }

    pub fn stats(&self) -> Stats {
        self.lock().stats
    }

    pub fn run_state(&self) -> RunState {
        self.lock().run_state
    }

    /// Consume the failure message left behind by a run that panicked
    pub fn take_failure(&self) -> Option<String> {
        self.lock().last_failure.take()
    }

    /// Map a speed level (1..=10, clamped) to the inter-step interval:
    /// 1000 ms at level 1 down to 100 ms at level 10. Takes effect on the
    /// next `delay()` call.
    pub fn set_speed(&self, level: u8) {
        self.lock().interval = speed_interval(level);
    }

    /// Set the inter-step interval directly. Used by headless runs and
    /// tests that want the animation delay out of the way.
    pub fn set_step_interval(&self, interval: Duration) {
        self.lock().interval = interval;
    }

    /// Replace the committed sequence with a freshly generated one,
    /// resetting statistics and all highlight sets. The caller (the run
    /// controller) guarantees no run is active.
    pub fn install_sequence(&self, values: Vec<u32>) {
        let (highlights, snapshot) = {
            let mut st = self.lock();
            st.committed.clone_from(&values);
            st.values = values;
            st.clear_all_highlights();
            st.stats = Stats::default();
            st.current_line = None;
            st.last_failure = None;
            (st.highlights(), st.values.clone())
        };
        self.notify_stats(Stats::default());
        self.notify_state(highlights, snapshot);
    }

    /// Transition `Idle -> Running` and mint the sink for a new run.
    ///
    /// Returns the per-run [`StepSink`] together with the working copy the
    /// worker owns for the duration of the run, or `None` if a run is
    /// already active.
    pub fn begin_run(self: &Arc<Self>) -> Option<(StepSink, Vec<u32>)> {
        let (working, generation) = {
            let mut st = self.lock();
            if st.run_state != RunState::Idle {
                return None;
            }
            st.generation += 1;
            st.run_state = RunState::Running;
            st.stats = Stats::default();
            st.clear_all_highlights();
            st.current_line = None;
            st.last_failure = None;
            st.values = st.committed.clone();
            (st.committed.clone(), st.generation)
        };
        self.notify_stats(Stats::default());
        Some((
            StepSink {
                shared: Arc::clone(self),
                generation,
            },
            working,
        ))
    }

    /// Pause the active run. No-op unless `Running`. Takes effect at the
    /// worker's next `delay()`.
    pub fn pause(&self) {
        let mut st = self.lock();
        if st.run_state == RunState::Running {
            st.run_state = RunState::Paused;
            self.wake.notify_all();
        }
    }

    /// Resume a paused run. No-op unless `Paused`.
    pub fn resume(&self) {
        let mut st = self.lock();
        if st.run_state == RunState::Paused {
            st.run_state = RunState::Running;
            self.wake.notify_all();
        }
    }

    /// Cancel whatever run is active and restore the committed sequence as
    /// the displayed one. The stale worker observes the generation bump at
    /// its next suspension point and unwinds; its partial mutations are
    /// discarded with the abandoned working copy.
    pub fn cancel_run(&self) {
        let (highlights, snapshot) = {
            let mut st = self.lock();
            st.generation += 1;
            st.run_state = RunState::Idle;
            st.values = st.committed.clone();
            st.clear_all_highlights();
            st.stats = Stats::default();
            st.current_line = None;
            st.last_failure = None;
            self.wake.notify_all();
            (st.highlights(), st.values.clone())
        };
        self.notify_stats(Stats::default());
        self.notify_state(highlights, snapshot);
    }

    /// Commit a completed run: the working copy becomes the committed
    /// sequence, every position is marked sorted, and the state returns to
    /// `Idle`. Refused (returning `false`) when the run has been superseded
    /// by a reset, so a stale continuation can never overwrite a newer
    /// array.
    pub fn commit_run(&self, generation: u64, working: Vec<u32>) -> bool {
        let (highlights, snapshot) = {
            let mut st = self.lock();
            if st.generation != generation || st.run_state == RunState::Idle {
                return false;
            }
            st.committed.clone_from(&working);
            st.values = working;
            st.clear_transient();
            st.sorted = (0..st.values.len()).collect();
            st.run_state = RunState::Idle;
            st.current_line = None;
            (st.highlights(), st.values.clone())
        };
        self.notify_state(highlights, snapshot);
        true
    }

    /// Record an abnormal run termination. The working copy is abandoned,
    /// the committed sequence stays authoritative, and the failure message
    /// is held for the status bar.
    pub fn fail_run(&self, generation: u64, message: String) {
        let (highlights, snapshot) = {
            let mut st = self.lock();
            if st.generation != generation || st.run_state == RunState::Idle {
                return;
            }
            st.run_state = RunState::Idle;
            st.values = st.committed.clone();
            st.clear_all_highlights();
            st.current_line = None;
            st.last_failure = Some(message);
            (st.highlights(), st.values.clone())
        };
        self.notify_state(highlights, snapshot);
    }
}

/// Speed level (1..=10) to inter-step interval
pub fn speed_interval(level: u8) -> Duration {
    let level = level.clamp(1, 10) as u64;
    Duration::from_millis(1100 - level * 100)
}

/// Per-run handle the sort procedures call into.
///
/// Every operation is silently ignored once the run has been superseded;
/// [`StepSink::delay`] is where a stale run finds out and unwinds.
pub struct StepSink {
    shared: Arc<SharedState>,
    generation: u64,
}

impl StepSink {
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Run `f` against the live state, or do nothing if this sink is stale.
    /// Returns the observer payload to emit after the lock is released.
    fn with_live_state<F>(&self, f: F) -> Option<(Highlights, Vec<u32>)>
    where
        F: FnOnce(&mut VizState),
    {
        let mut st = self.shared.lock();
        if st.generation != self.generation {
            return None;
        }
        f(&mut st);
        Some((st.highlights(), st.values.clone()))
    }

    fn set_transient(&self, target: Target, indices: &[usize]) {
        let payload = self.with_live_state(|st| {
            st.clear_transient();
            let set = match target {
                Target::Comparing => &mut st.comparing,
                Target::Swapping => &mut st.swapping,
                Target::Pivot => &mut st.pivot,
            };
            for &index in indices {
                debug_assert!(index < st.values.len(), "highlight index out of range");
                set.insert(index);
            }
        });
        if let Some((highlights, values)) = payload {
            self.shared.notify_state(highlights, values);
        }
    }

    /// Clear the transient sets, then mark `indices` as being compared
    pub fn set_comparing(&self, indices: &[usize]) {
        self.set_transient(Target::Comparing, indices);
    }

    /// Clear the transient sets, then mark `indices` as being exchanged
    pub fn set_swapping(&self, indices: &[usize]) {
        self.set_transient(Target::Swapping, indices);
    }

    /// Clear the transient sets, then mark `indices` as the pivot
    pub fn set_pivot(&self, indices: &[usize]) {
        self.set_transient(Target::Pivot, indices);
    }

    /// Add `indices` to the persistent sorted set. Nothing is cleared.
    pub fn set_sorted(&self, indices: &[usize]) {
        let payload = self.with_live_state(|st| {
            for &index in indices {
                debug_assert!(index < st.values.len(), "sorted index out of range");
                st.sorted.insert(index);
            }
        });
        if let Some((highlights, values)) = payload {
            self.shared.notify_state(highlights, values);
        }
    }

    /// Clear comparing/swapping/pivot. The sorted set persists.
    pub fn clear_highlights(&self) {
        let payload = self.with_live_state(VizState::clear_transient);
        if let Some((highlights, values)) = payload {
            self.shared.notify_state(highlights, values);
        }
    }

    fn bump(&self, which: Counter) {
        let mut stats = None;
        let _ = self.with_live_state(|st| {
            match which {
                Counter::Comparisons => st.stats.comparisons += 1,
                Counter::Swaps => st.stats.swaps += 1,
            }
            st.stats.steps += 1;
            stats = Some(st.stats);
        });
        if let Some(stats) = stats {
            self.shared.notify_stats(stats);
        }
    }

    /// Bump the comparison counter and the step counter by one
    pub fn increment_comparisons(&self) {
        self.bump(Counter::Comparisons);
    }

    /// Bump the swap counter and the step counter by one
    pub fn increment_swaps(&self) {
        self.bump(Counter::Swaps);
    }

    /// Move the pseudocode line pointer (1-based). Advisory only.
    pub fn highlight_line(&self, line: u32) {
        let mut moved = false;
        let _ = self.with_live_state(|st| {
            st.current_line = Some(line);
            moved = true;
        });
        if moved {
            self.shared.notify_line(Some(line));
        }
    }

    /// The single suspension point.
    ///
    /// Publishes a snapshot of the working copy for the renderer, waits out
    /// the pause gate, then sleeps the configured inter-step interval.
    /// Returns [`SortInterrupted`] as soon as a reset has superseded this
    /// run; the condvar is notified on reset and resume, with a 100 ms poll
    /// as backstop.
    pub fn delay<T: Copy + Into<u32>>(&self, values: &[T]) -> Result<(), SortInterrupted> {
        let payload = self.with_live_state(|st| {
            st.values.clear();
            st.values.extend(values.iter().map(|&v| v.into()));
        });
        match payload {
            Some((highlights, snapshot)) => self.shared.notify_state(highlights, snapshot),
            None => return Err(SortInterrupted),
        }

        // Pause gate
        let mut st = self.shared.lock();
        loop {
            if st.generation != self.generation || st.run_state == RunState::Idle {
                return Err(SortInterrupted);
            }
            if st.run_state == RunState::Running {
                break;
            }
            let (guard, _) = self
                .shared
                .wake
                .wait_timeout(st, WAKE_POLL)
                .unwrap_or_else(PoisonError::into_inner);
            st = guard;
        }

        // Inter-step interval, leaving early on cancellation
        let deadline = Instant::now() + st.interval;
        loop {
            if st.generation != self.generation || st.run_state == RunState::Idle {
                return Err(SortInterrupted);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            let (guard, _) = self
                .shared
                .wake
                .wait_timeout(st, (deadline - now).min(WAKE_POLL))
                .unwrap_or_else(PoisonError::into_inner);
            st = guard;
        }
    }
}

enum Target {
    Comparing,
    Swapping,
    Pivot,
}

enum Counter {
    Comparisons,
    Swaps,
}
