use sapda_core::fixtures::powers_of_four;
use sapda_core::run;

#[test]
fn test_accepts_single_zero() {
    let automaton = powers_of_four();
    assert!(!run(&automaton, "0").is_empty());
}

#[test]
fn test_accepts_four_zeros() {
    let automaton = powers_of_four();
    assert!(!run(&automaton, "0000").is_empty());
}

#[test]
fn test_rejects_three_zeros() {
    let automaton = powers_of_four();
    assert!(run(&automaton, "000").is_empty());
}
