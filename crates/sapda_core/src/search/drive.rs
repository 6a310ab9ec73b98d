//! Top-level entry points: malformed-input short-circuit, the
//! deterministic drive, and falling through to DFS when a choice point is
//! reached (`spec` §6 "Engine API").

use crate::automaton::Automaton;
use crate::computation::{Computation, Verdict};
use crate::config::Cancellation;
use crate::render::{IndentedRenderer, TreeRenderer};

use super::{bfs, dfs, Outcome};

fn render_trace(computation: &Computation) -> Vec<String> {
    let renderer = IndentedRenderer;
    computation
        .trace()
        .iter()
        .enumerate()
        .map(|(i, structure)| format!("Step {}\n\n{}", i + 1, renderer.render(structure)))
        .collect()
}

/// `run(automaton, input) → trace | [] | ["timeout"]` (`spec` §6), using
/// the primary DFS driver when no forced move settles the question.
pub fn run(automaton: &Automaton, input: &str, cancellation: &dyn Cancellation, max_backtrack_frames: usize) -> Vec<String> {
    if !automaton.validate_input(input) {
        return Vec::new();
    }

    let mut computation = Computation::new(automaton, input);
    match computation.run_deterministic_transitions() {
        Verdict::Accept => render_trace(&computation),
        Verdict::Reject => Vec::new(),
        Verdict::Indeterminate => match dfs::search(computation, cancellation, max_backtrack_frames) {
            Outcome::Accept(accepted) => render_trace(&accepted),
            Outcome::Reject => Vec::new(),
            Outcome::Timeout => vec!["timeout".to_string()],
        },
    }
}

/// `run_bfs(automaton, input)`: identical contract, BFS exploration
/// (`spec` §6).
pub fn run_bfs(automaton: &Automaton, input: &str, cancellation: &dyn Cancellation, max_frontier: usize) -> Vec<String> {
    if !automaton.validate_input(input) {
        return Vec::new();
    }

    let mut computation = Computation::new(automaton, input);
    match computation.run_deterministic_transitions() {
        Verdict::Accept => render_trace(&computation),
        Verdict::Reject => Vec::new(),
        Verdict::Indeterminate => match bfs::search(computation, cancellation, max_frontier) {
            Outcome::Accept(accepted) => render_trace(&accepted),
            Outcome::Reject => Vec::new(),
            Outcome::Timeout => vec!["timeout".to_string()],
        },
    }
}
