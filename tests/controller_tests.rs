// Controller tests: run lifecycle, pause/resume, reset, error reporting
// and JSON export

use sortty::controller::{ControlError, RunController};
use sortty::engine::Algorithm;
use sortty::generator::ArrayShape;
use sortty::sink::{speed_interval, RunState, SharedState, Stats, StepObserver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Spin until the controller returns to `Idle`, or fail the wait
fn wait_for_idle(controller: &RunController, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if controller.run_state() == RunState::Idle {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Run one algorithm headlessly to get its deterministic final statistics
fn reference_stats(algorithm: Algorithm, input: &[u32]) -> Stats {
    let shared = Arc::new(SharedState::new());
    shared.set_step_interval(Duration::ZERO);
    shared.install_sequence(input.to_vec());
    let (sink, mut working) = shared.begin_run().expect("no run should be active");
    algorithm
        .sort(&mut working, &sink)
        .expect("run should not be interrupted");
    shared.stats()
}

#[test]
fn test_new_controller_has_default_demo_array() {
    let controller = RunController::new();
    let frame = controller.frame();
    assert_eq!(frame.values.len(), 15);
    assert!(frame.values.iter().all(|&v| (10..=150).contains(&v)));
    assert_eq!(frame.run_state, RunState::Idle);
    assert_eq!(frame.stats, Stats::default());
    assert!(controller.selected().is_none());
}

#[test]
fn test_run_completes_and_commits() {
    let input = vec![90u32, 12, 77, 45, 3, 60, 28, 101, 19, 88];
    let mut expected = input.clone();
    expected.sort();

    let mut controller = RunController::new();
    controller.shared().install_sequence(input);
    controller.shared().set_step_interval(Duration::ZERO);
    controller
        .select_algorithm(Algorithm::Merge)
        .expect("selection while idle");
    controller.start().expect("start while idle");

    assert!(
        wait_for_idle(&controller, Duration::from_secs(5)),
        "run did not finish"
    );

    let frame = controller.frame();
    assert_eq!(frame.values, expected);
    for index in 0..frame.values.len() {
        assert!(frame.sorted.contains(&index));
    }
    assert!(frame.stats.comparisons > 0);
    assert!(controller.shared().take_failure().is_none());
}

#[test]
fn test_pause_freezes_and_resume_finishes_identically() {
    let input = vec![140u32, 31, 66, 12, 99, 54, 80, 23, 118, 47, 75, 10, 133, 62, 91, 38];
    let expected_stats = reference_stats(Algorithm::Quick, &input);
    let mut expected = input.clone();
    expected.sort();

    let mut controller = RunController::new();
    controller.shared().install_sequence(input);
    controller.shared().set_step_interval(Duration::from_millis(15));
    controller
        .select_algorithm(Algorithm::Quick)
        .expect("selection while idle");
    controller.start().expect("start while idle");

    thread::sleep(Duration::from_millis(60));
    assert_eq!(controller.run_state(), RunState::Running);
    controller.pause();
    assert_eq!(controller.run_state(), RunState::Paused);

    // Give the worker time to reach its suspension point, then verify the
    // counters hold still while paused
    thread::sleep(Duration::from_millis(60));
    let frozen = controller.frame().stats;
    thread::sleep(Duration::from_millis(120));
    assert_eq!(controller.frame().stats, frozen, "counters moved while paused");
    assert_eq!(controller.run_state(), RunState::Paused);

    // Resume and drop the interval so the rest of the run finishes fast
    controller.shared().set_step_interval(Duration::ZERO);
    controller.resume();
    assert!(
        wait_for_idle(&controller, Duration::from_secs(5)),
        "run did not finish after resume"
    );

    let frame = controller.frame();
    assert_eq!(frame.values, expected);
    assert_eq!(frame.stats, expected_stats, "pause changed the outcome");
}

#[test]
fn test_reset_during_run_restores_committed_sequence() {
    let input: Vec<u32> = (1..=20).rev().collect();

    let mut controller = RunController::new();
    controller.shared().install_sequence(input.clone());
    controller.shared().set_step_interval(Duration::from_millis(10));
    controller
        .select_algorithm(Algorithm::Bubble)
        .expect("selection while idle");
    controller.start().expect("start while idle");

    thread::sleep(Duration::from_millis(80));
    assert_eq!(controller.run_state(), RunState::Running);
    controller.reset();

    let frame = controller.frame();
    assert_eq!(frame.run_state, RunState::Idle);
    assert_eq!(frame.values, input, "partial mutations leaked past reset");
    assert_eq!(frame.stats, Stats::default());
    assert!(frame.sorted.is_empty());
    assert!(frame.comparing.is_empty() && frame.swapping.is_empty());

    // The aborted worker has been joined; nothing overwrites the sequence
    thread::sleep(Duration::from_millis(150));
    assert_eq!(controller.frame().values, input);

    // The controller is still usable after the reset
    controller.shared().set_step_interval(Duration::ZERO);
    controller.start().expect("start after reset");
    assert!(
        wait_for_idle(&controller, Duration::from_secs(5)),
        "run after reset did not finish"
    );
    let mut expected = input;
    expected.sort();
    assert_eq!(controller.frame().values, expected);
}

#[test]
fn test_control_errors() {
    let mut controller = RunController::new();
    assert_eq!(controller.start(), Err(ControlError::NoAlgorithmSelected));

    controller.shared().install_sequence((1..=24).rev().collect());
    controller.shared().set_step_interval(Duration::from_millis(20));
    controller
        .select_algorithm(Algorithm::Bubble)
        .expect("selection while idle");
    controller.start().expect("start while idle");

    assert_eq!(controller.start(), Err(ControlError::AlreadyRunning));
    assert_eq!(
        controller.select_algorithm(Algorithm::Heap),
        Err(ControlError::AlreadyRunning)
    );
    assert_eq!(
        controller.generate_new(ArrayShape::Random, 15, 10, 150),
        Err(ControlError::CannotRegenerateWhileRunning)
    );

    controller.reset();
    assert_eq!(controller.run_state(), RunState::Idle);
    assert_eq!(
        controller.generate_new(ArrayShape::Random, 15, 10, 150),
        Ok(())
    );
}

#[test]
fn test_generate_new_replaces_sequence() {
    let mut controller = RunController::new();
    controller
        .generate_new(ArrayShape::Reversed, 30, 5, 99)
        .expect("regenerate while idle");

    let frame = controller.frame();
    assert_eq!(frame.values.len(), 30);
    assert!(frame.values.iter().all(|&v| (5..=99).contains(&v)));
    assert!(frame.values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(frame.stats, Stats::default());
    assert!(frame.sorted.is_empty());
}

#[test]
fn test_speed_interval_mapping() {
    assert_eq!(speed_interval(1), Duration::from_millis(1000));
    assert_eq!(speed_interval(5), Duration::from_millis(600));
    assert_eq!(speed_interval(10), Duration::from_millis(100));
    // Out-of-range levels clamp to the valid band
    assert_eq!(speed_interval(0), Duration::from_millis(1000));
    assert_eq!(speed_interval(99), Duration::from_millis(100));
}

/// Observer that blows up on the worker thread once the run is under way,
/// standing in for an unexpected failure inside a sort procedure
struct Exploding;

impl StepObserver for Exploding {
    fn on_stats_changed(&mut self, stats: Stats) {
        if stats.comparisons > 3 {
            panic!("injected failure");
        }
    }
}

#[test]
fn test_panicking_run_is_abandoned_without_commit() {
    let input: Vec<u32> = (1..=12).rev().collect();

    let mut controller = RunController::new();
    controller.shared().install_sequence(input.clone());
    controller.shared().set_step_interval(Duration::ZERO);
    controller.shared().set_observer(Box::new(Exploding));
    controller
        .select_algorithm(Algorithm::Bubble)
        .expect("selection while idle");
    controller.start().expect("start while idle");

    assert!(
        wait_for_idle(&controller, Duration::from_secs(5)),
        "failed run did not return to idle"
    );

    let failure = controller.shared().take_failure();
    assert!(
        failure.as_deref().is_some_and(|m| m.contains("failed")),
        "no failure message was surfaced: {:?}",
        failure
    );

    // The working copy was abandoned: the committed sequence is untouched
    let frame = controller.frame();
    assert_eq!(frame.values, input);
    assert!(frame.sorted.is_empty());

    // The controller is still usable after the abandoned run
    struct Quiet;
    impl StepObserver for Quiet {}
    controller.shared().set_observer(Box::new(Quiet));
    controller.shared().install_sequence(input.clone());
    controller.start().expect("start after abandoned run");
    assert!(
        wait_for_idle(&controller, Duration::from_secs(5)),
        "run after abandoned run did not finish"
    );
    let mut expected = input;
    expected.sort();
    assert_eq!(controller.frame().values, expected);
}

#[test]
fn test_export_report_shape() {
    use sortty::export::RunReport;

    let input = vec![40u32, 10, 30, 20];
    let mut controller = RunController::new();
    controller.shared().install_sequence(input);
    controller.shared().set_step_interval(Duration::ZERO);
    controller
        .select_algorithm(Algorithm::Selection)
        .expect("selection while idle");
    controller.start().expect("start while idle");
    assert!(wait_for_idle(&controller, Duration::from_secs(5)));

    let report = RunReport::capture(&controller);
    let json = report.to_json().expect("report serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("report parses back");

    assert_eq!(value["algorithm"], "selection");
    assert_eq!(value["arraySize"], 4);
    assert_eq!(value["array"], serde_json::json!([10, 20, 30, 40]));
    assert_eq!(
        value["steps"].as_u64().unwrap(),
        value["comparisons"].as_u64().unwrap() + value["swaps"].as_u64().unwrap()
    );
    assert!(value["timestamp"].as_str().is_some_and(|t| !t.is_empty()));

    let filename = report.suggested_filename();
    assert!(filename.starts_with("sort-data-selection-"));
    assert!(filename.ends_with(".json"));
}
