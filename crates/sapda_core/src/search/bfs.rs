//! Alternative BFS driver: finds the shallowest accepting computation at
//! the cost of holding the whole frontier in memory (`spec` §4.5 BFS).

use std::collections::VecDeque;

use crate::computation::{Computation, Verdict};
use crate::config::Cancellation;

use super::Outcome;

/// Explores `current`'s descendants breadth-first. Unlike [`super::dfs`],
/// every `(leaf, candidate)` pair is tried — there is no single-leaf
/// short-circuit, matching the reference `bfs` method's flat double loop.
pub fn search<'a>(current: Computation<'a>, cancellation: &dyn Cancellation, max_frontier: usize) -> Outcome<'a> {
    let mut frontier: VecDeque<Computation<'a>> = VecDeque::new();
    frontier.push_back(current);

    while let Some(computation) = frontier.pop_front() {
        if cancellation.is_cancelled() || frontier.len() > max_frontier {
            return Outcome::Timeout;
        }

        for leaf in computation.order_active_branches() {
            let leaf_key = leaf.key();
            for (letter, conjunction) in computation.order_transitions(leaf) {
                let Ok(new_structure) = computation.apply_transition(&leaf_key, letter, &conjunction) else {
                    continue;
                };
                let mut next = computation.clone();
                next.update(new_structure);
                match next.run_deterministic_transitions() {
                    Verdict::Accept => return Outcome::Accept(next),
                    Verdict::Reject => continue,
                    Verdict::Indeterminate => frontier.push_back(next),
                }
            }
        }
    }

    Outcome::Reject
}
