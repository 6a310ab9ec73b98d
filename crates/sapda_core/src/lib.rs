//! SAPDA (Synchronised Alternating Pushdown Automaton) simulator engine:
//! decides acceptance of an input string against a SAPDA description and,
//! on success, returns the sequence of configurations witnessing it.

pub mod automaton;
pub mod computation;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod fixtures;
pub mod input;
pub mod render;
pub mod search;
pub mod stack;
pub mod structure;
pub mod sync;
pub mod transition;

use config::EngineConfig;

/// `run(automaton, input_string) → trace | [] | ["timeout"]` (`spec` §6).
/// Uses the primary DFS driver with backtracking.
#[must_use]
pub fn run(automaton: &automaton::Automaton, input: &str) -> Vec<String> {
    run_with(automaton, input, &EngineConfig::default())
}

/// Same contract as [`run`], with an explicit [`EngineConfig`] (deadline
/// and backtrack-frame ceiling) instead of the 20-second default.
#[must_use]
pub fn run_with(automaton: &automaton::Automaton, input: &str, config: &EngineConfig) -> Vec<String> {
    let deadline = config::Deadline::starting_now(config.deadline);
    search::drive::run(automaton, input, &deadline, config.max_backtrack_frames)
}

/// `run_bfs(automaton, input_string)`: identical contract, BFS exploration
/// (`spec` §6).
#[must_use]
pub fn run_bfs(automaton: &automaton::Automaton, input: &str) -> Vec<String> {
    run_bfs_with(automaton, input, &EngineConfig::default())
}

#[must_use]
pub fn run_bfs_with(automaton: &automaton::Automaton, input: &str, config: &EngineConfig) -> Vec<String> {
    let deadline = config::Deadline::starting_now(config.deadline);
    search::drive::run_bfs(automaton, input, &deadline, config.max_backtrack_frames)
}

/// Runs `run` with no timeout at all — only for callers (tests, the demo
/// binary) that want the engine to search until it finds a verdict.
#[must_use]
pub fn run_unbounded(automaton: &automaton::Automaton, input: &str) -> Vec<String> {
    search::drive::run(automaton, input, &config::Never, EngineConfig::default().max_backtrack_frames)
}
