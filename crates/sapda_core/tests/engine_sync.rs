use sapda_core::automaton::{AutomatonBuilder, Conjunct};
use sapda_core::run;

/// Forks immediately into two branches that each empty their one-symbol
/// stack on the same letter and land in the same state — the textbook
/// synchronisation scenario (reference scenario #6).
fn forking_automaton() -> sapda_core::automaton::Automaton {
    AutomatonBuilder::new()
        .states(["q0", "qa", "qb", "qc"])
        .input_alphabet(['a'])
        .stack_alphabet(['Z'])
        .initial("q0", 'Z')
        .transition("q0", 'Z', 'e', [Conjunct::new("qa", vec!['Z']), Conjunct::new("qb", vec!['Z'])])
        .transition("qa", 'Z', 'a', [Conjunct::new("qc", vec![])])
        .transition("qb", 'Z', 'a', [Conjunct::new("qc", vec![])])
        .build()
        .unwrap()
}

#[test]
fn test_accepts_via_synchronisation() {
    let automaton = forking_automaton();
    let trace = run(&automaton, "a");
    assert!(!trace.is_empty(), "both branches converge on qc with the input consumed, so this must accept");
}

#[test]
fn test_trace_contains_a_fork_and_a_rejoin() {
    let automaton = forking_automaton();
    let trace = run(&automaton, "a");
    assert!(trace.iter().any(|step| step.contains('[')), "at least one step must show the forked Tree");
    let last = trace.last().expect("non-empty trace");
    assert!(last.contains("(qc, e, e)"), "the final step must be the single collapsed accepting leaf");
}
