// Engine tests: sorting correctness, counting conventions, stability and
// the instrumented event stream

use sortty::engine::Algorithm;
use sortty::generator::{self, ArrayShape};
use sortty::sink::{Highlights, RunState, SharedState, Stats, StepObserver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Run one algorithm headlessly (zero inter-step interval) and return the
/// sorted values, the final statistics and the shared state for inspection
fn run_engine<T>(algorithm: Algorithm, input: &[T]) -> (Vec<T>, Stats, Arc<SharedState>)
where
    T: Ord + Copy + Into<u32>,
{
    let shared = Arc::new(SharedState::new());
    shared.set_step_interval(Duration::ZERO);
    shared.install_sequence(input.iter().map(|&v| v.into()).collect());

    let (sink, _working) = shared.begin_run().expect("no run should be active");
    let mut values: Vec<T> = input.to_vec();
    algorithm
        .sort(&mut values, &sink)
        .expect("run should not be interrupted");

    let stats = shared.stats();
    (values, stats, shared)
}

/// Element whose ordering ignores its tag, for stability checks
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: u32,
    tag: u8,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl From<Keyed> for u32 {
    fn from(value: Keyed) -> u32 {
        value.key
    }
}

#[test]
fn test_all_algorithms_sort_all_shapes() {
    let shapes = [
        ArrayShape::Random,
        ArrayShape::NearlySorted,
        ArrayShape::Reversed,
    ];

    for algorithm in Algorithm::ALL {
        for shape in shapes {
            let input = generator::generate(shape, 31, 10, 150);
            let mut expected = input.clone();
            expected.sort();

            let (sorted, stats, _) = run_engine(algorithm, &input);
            assert_eq!(
                sorted,
                expected,
                "{} failed on a {} input",
                algorithm.name(),
                shape.label()
            );
            assert_eq!(
                stats.steps,
                stats.comparisons + stats.swaps,
                "{} broke the step invariant",
                algorithm.name()
            );
        }
    }
}

#[test]
fn test_all_positions_marked_sorted() {
    let input = generator::random(17, 10, 150);
    for algorithm in Algorithm::ALL {
        let (_, _, shared) = run_engine(algorithm, &input);
        let frame = shared.frame();
        for index in 0..input.len() {
            assert!(
                frame.sorted.contains(&index),
                "{} left position {} unmarked",
                algorithm.name(),
                index
            );
        }
    }
}

#[test]
fn test_empty_sequence() {
    for algorithm in Algorithm::ALL {
        let (sorted, stats, shared) = run_engine(algorithm, &Vec::<u32>::new());
        assert!(sorted.is_empty());
        assert_eq!(stats, Stats::default(), "{}", algorithm.name());
        assert!(shared.frame().sorted.is_empty());
    }
}

#[test]
fn test_singleton_sequence() {
    for algorithm in Algorithm::ALL {
        let (sorted, stats, shared) = run_engine(algorithm, &[42u32]);
        assert_eq!(sorted, vec![42]);
        assert_eq!(stats, Stats::default(), "{}", algorithm.name());
        assert!(
            shared.frame().sorted.contains(&0),
            "{} did not mark the sole element sorted",
            algorithm.name()
        );
    }
}

#[test]
fn test_bubble_early_exit_on_sorted_input() {
    let input: Vec<u32> = (1..=8).collect();
    let (_, stats, _) = run_engine(Algorithm::Bubble, &input);
    // One full pass, then the early exit fires
    assert_eq!(stats.comparisons, 7);
    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.steps, 7);
}

#[test]
fn test_selection_and_quick_skip_self_swaps_on_sorted_input() {
    let input: Vec<u32> = (10..=40).step_by(3).collect();
    for algorithm in [Algorithm::Selection, Algorithm::Quick] {
        let (sorted, stats, _) = run_engine(algorithm, &input);
        assert_eq!(sorted, input);
        assert_eq!(
            stats.swaps,
            0,
            "{} swapped on an already-sorted input",
            algorithm.name()
        );
    }
}

#[test]
fn test_insertion_counts_shifts_on_swap_counter() {
    let (sorted, stats, _) = run_engine(Algorithm::Insertion, &[3u32, 2, 1]);
    assert_eq!(sorted, vec![1, 2, 3]);
    // Two keys, three one-place shifts between them
    assert_eq!(stats.comparisons, 3);
    assert_eq!(stats.swaps, 3);
    assert_eq!(stats.steps, 6);
}

#[test]
fn test_merge_never_touches_the_swap_counter() {
    let input = generator::reversed(24, 10, 150);
    let (_, stats, _) = run_engine(Algorithm::Merge, &input);
    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.steps, stats.comparisons);
    assert!(stats.comparisons > 0);
}

#[test]
fn test_stable_algorithms_preserve_duplicate_order() {
    let input = [
        Keyed { key: 2, tag: 0 },
        Keyed { key: 1, tag: 1 },
        Keyed { key: 2, tag: 2 },
        Keyed { key: 1, tag: 3 },
        Keyed { key: 2, tag: 4 },
    ];

    for algorithm in [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge] {
        let (sorted, _, _) = run_engine(algorithm, &input);
        let keys: Vec<u32> = sorted.iter().map(|k| k.key).collect();
        let tags: Vec<u8> = sorted.iter().map(|k| k.tag).collect();
        assert_eq!(keys, vec![1, 1, 2, 2, 2], "{}", algorithm.name());
        assert_eq!(
            tags,
            vec![1, 3, 0, 2, 4],
            "{} reordered equal elements",
            algorithm.name()
        );
    }
}

/// Observer that records every highlight snapshot and stats observation
#[derive(Clone, Default)]
struct Recorder {
    states: Arc<Mutex<Vec<Highlights>>>,
    stats: Arc<Mutex<Vec<Stats>>>,
}

impl StepObserver for Recorder {
    fn on_state_changed(&mut self, highlights: &Highlights, _values: &[u32]) {
        self.states.lock().unwrap().push(highlights.clone());
    }

    fn on_stats_changed(&mut self, stats: Stats) {
        self.stats.lock().unwrap().push(stats);
    }
}

/// Collapse a snapshot stream into the sequence of distinct non-empty
/// values one highlight set took, in order
fn transitions(states: &[Highlights], pick: fn(&Highlights) -> &Vec<usize>) -> Vec<Vec<usize>> {
    let mut out: Vec<Vec<usize>> = Vec::new();
    let mut previous: Vec<usize> = Vec::new();
    for state in states {
        let current = pick(state).clone();
        if current != previous && !current.is_empty() {
            out.push(current.clone());
        }
        previous = current;
    }
    out
}

#[test]
fn test_quick_sort_golden_trace() {
    let shared = Arc::new(SharedState::new());
    shared.set_step_interval(Duration::ZERO);
    shared.install_sequence(vec![5, 3, 8, 1]);

    let recorder = Recorder::default();
    shared.set_observer(Box::new(recorder.clone()));

    let (sink, mut working) = shared.begin_run().expect("no run should be active");
    Algorithm::Quick
        .sort(&mut working, &sink)
        .expect("run should not be interrupted");

    assert_eq!(working, vec![1, 3, 5, 8]);

    let stats = shared.stats();
    assert_eq!(stats.comparisons, 5);
    assert_eq!(stats.swaps, 2);
    assert_eq!(stats.steps, 7);

    let states = recorder.states.lock().unwrap();

    // First partition (pivot 1 at index 3) compares 5, 3, 8 against the
    // pivot, then the second partition (pivot 5) compares 3 and 8.
    let comparisons = transitions(&states, |h| &h.comparing);
    assert_eq!(
        comparisons,
        vec![
            vec![0, 3],
            vec![1, 3],
            vec![2, 3],
            vec![1, 3],
            vec![2, 3],
        ]
    );

    // Exactly one exchange per partition: the pivot placements
    let swaps = transitions(&states, |h| &h.swapping);
    assert_eq!(swaps, vec![vec![0, 3], vec![2, 3]]);

    // The step invariant holds at every observation point
    for observed in recorder.stats.lock().unwrap().iter() {
        assert_eq!(observed.steps, observed.comparisons + observed.swaps);
    }
}

#[test]
fn test_step_invariant_at_every_observation() {
    for algorithm in Algorithm::ALL {
        let shared = Arc::new(SharedState::new());
        shared.set_step_interval(Duration::ZERO);
        let input = generator::random(13, 10, 150);
        shared.install_sequence(input.clone());

        let recorder = Recorder::default();
        shared.set_observer(Box::new(recorder.clone()));

        let (sink, mut working) = shared.begin_run().expect("no run should be active");
        algorithm
            .sort(&mut working, &sink)
            .expect("run should not be interrupted");

        for observed in recorder.stats.lock().unwrap().iter() {
            assert_eq!(
                observed.steps,
                observed.comparisons + observed.swaps,
                "{} broke the step invariant mid-run",
                algorithm.name()
            );
        }
    }
}

#[test]
fn test_highlight_set_semantics() {
    let shared = Arc::new(SharedState::new());
    shared.set_step_interval(Duration::ZERO);
    shared.install_sequence(vec![4, 3, 2, 1]);
    let (sink, _working) = shared.begin_run().expect("no run should be active");

    sink.set_comparing(&[0, 1]);
    let frame = shared.frame();
    assert!(frame.comparing.contains(&0) && frame.comparing.contains(&1));

    // Setting the pivot clears the other transient sets
    sink.set_pivot(&[2]);
    let frame = shared.frame();
    assert!(frame.comparing.is_empty());
    assert_eq!(frame.pivot.len(), 1);

    // Sorted persists through transient updates and clears
    sink.set_sorted(&[3]);
    sink.set_swapping(&[0, 2]);
    let frame = shared.frame();
    assert!(frame.pivot.is_empty());
    assert!(frame.swapping.contains(&0) && frame.swapping.contains(&2));
    assert!(frame.sorted.contains(&3));

    sink.clear_highlights();
    let frame = shared.frame();
    assert!(frame.comparing.is_empty() && frame.swapping.is_empty() && frame.pivot.is_empty());
    assert!(frame.sorted.contains(&3));
}

#[test]
fn test_stale_sink_is_inert_after_cancel() {
    let shared = Arc::new(SharedState::new());
    shared.set_step_interval(Duration::ZERO);
    shared.install_sequence(vec![2, 1]);
    let (sink, working) = shared.begin_run().expect("no run should be active");

    shared.cancel_run();

    sink.set_comparing(&[0, 1]);
    assert!(shared.frame().comparing.is_empty());

    sink.increment_comparisons();
    assert_eq!(shared.stats(), Stats::default());

    assert!(sink.delay(&working).is_err());
}

#[test]
fn test_state_stays_readable_after_worker_panic() {
    let shared = Arc::new(SharedState::new());
    shared.set_step_interval(Duration::ZERO);
    shared.install_sequence(vec![3, 1, 2]);
    let (sink, _working) = shared.begin_run().expect("no run should be active");

    // An out-of-range highlight trips the index check in debug builds and
    // unwinds on the worker with the state lock held
    let _ = std::thread::spawn(move || sink.set_comparing(&[99])).join();

    // Whether or not that unwound, the state stays readable and the run
    // can still be cancelled
    let frame = shared.frame();
    assert_eq!(frame.values, vec![3, 1, 2]);
    shared.cancel_run();
    assert_eq!(shared.run_state(), RunState::Idle);
    assert_eq!(shared.frame().values, vec![3, 1, 2]);
}

#[test]
fn test_generator_shapes() {
    let empty = generator::random(0, 10, 150);
    assert!(empty.is_empty());

    let random = generator::random(40, 10, 150);
    assert_eq!(random.len(), 40);
    assert!(random.iter().all(|&v| (10..=150).contains(&v)));

    let reversed = generator::reversed(40, 10, 150);
    assert!(reversed.windows(2).all(|w| w[0] >= w[1]));

    // Nearly sorted: at most ⌊n·0.1⌋ pair swaps away from sorted, so no
    // more than 2·⌊n·0.1⌋ positions differ from the sorted order
    let nearly = generator::nearly_sorted(40, 10, 150);
    let mut sorted = nearly.clone();
    sorted.sort();
    let displaced = nearly
        .iter()
        .zip(sorted.iter())
        .filter(|(a, b)| a != b)
        .count();
    assert!(displaced <= 8, "{} positions displaced", displaced);
}
