use sapda_core::fixtures::equal_letter_counts;
use sapda_core::run;

#[test]
fn test_accepts_abcabc() {
    let automaton = equal_letter_counts();
    assert!(!run(&automaton, "abcabc").is_empty());
}

#[test]
fn test_accepts_aabbcc() {
    let automaton = equal_letter_counts();
    assert!(!run(&automaton, "aabbcc").is_empty());
}

#[test]
fn test_rejects_aabcc() {
    let automaton = equal_letter_counts();
    assert!(run(&automaton, "aabcc").is_empty());
}
