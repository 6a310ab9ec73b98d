use sapda_core::fixtures::reduplication_with_marker;
use sapda_core::run;

#[test]
fn test_accepts_ab_dollar_ab() {
    let automaton = reduplication_with_marker();
    assert!(!run(&automaton, "ab$ab").is_empty());
}

#[test]
fn test_rejects_ab_dollar_ba() {
    let automaton = reduplication_with_marker();
    assert!(run(&automaton, "ab$ba").is_empty());
}

#[test]
fn test_accepts_bare_marker_as_empty_w() {
    let automaton = reduplication_with_marker();
    assert!(!run(&automaton, "$").is_empty());
}
