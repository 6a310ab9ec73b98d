use std::time::Duration;

use sapda_core::config::EngineConfig;
use sapda_core::fixtures::reduplication_no_marker;
use sapda_core::run_with;

/// `w$uw` without a centre marker forces the engine to guess the split
/// point nondeterministically; a long pathological input should exhaust
/// the backtrack-frame ceiling long before it exhausts every guess
/// (reference scenario #5).
#[test]
fn test_pathological_input_times_out() {
    let automaton = reduplication_no_marker();
    let input = "ab".repeat(9); // 18 letters, no marker to anchor the split
    let config = EngineConfig { deadline: Duration::from_millis(500), max_backtrack_frames: 25 };

    let trace = run_with(&automaton, &input, &config);
    assert_eq!(trace, vec!["timeout".to_string()]);
}
