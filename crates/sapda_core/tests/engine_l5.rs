use sapda_core::fixtures::recursive_mixed_arity;
use sapda_core::run;

#[test]
fn test_accepts_single_a_via_terminal_alternative() {
    let automaton = recursive_mixed_arity();
    assert!(!run(&automaton, "a").is_empty());
}

#[test]
fn test_accepts_single_b_via_terminal_alternative() {
    let automaton = recursive_mixed_arity();
    assert!(!run(&automaton, "b").is_empty());
}

#[test]
fn test_rejects_empty_input() {
    // `S` never rewrites to the empty word directly; every alternative at
    // `(q, S, e)` pushes at least one terminal symbol, so a leaf stuck at
    // `(q, e, S)` can never reach an emptied stack.
    let automaton = recursive_mixed_arity();
    assert!(run(&automaton, "e").is_empty());
}
