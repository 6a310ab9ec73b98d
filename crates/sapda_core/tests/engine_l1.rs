use sapda_core::fixtures::blocks_of_equal_length;
use sapda_core::run;

#[test]
fn test_accepts_aabbcc() {
    let automaton = blocks_of_equal_length();
    assert!(!run(&automaton, "aabbcc").is_empty());
}

#[test]
fn test_accepts_aaabbbccc() {
    let automaton = blocks_of_equal_length();
    assert!(!run(&automaton, "aaabbbccc").is_empty());
}

#[test]
fn test_rejects_aabbbcc() {
    let automaton = blocks_of_equal_length();
    assert!(run(&automaton, "aabbbcc").is_empty());
}

#[test]
fn test_accepts_abc() {
    let automaton = blocks_of_equal_length();
    assert!(!run(&automaton, "abc").is_empty());
}
