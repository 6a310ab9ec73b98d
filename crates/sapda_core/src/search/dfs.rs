//! Primary DFS with explicit backtrack frames (`spec` §4.5(b), §4.5(c),
//! §9 "Backtracking frames" — a `Vec<Frame>` in place of host recursion).

use crate::automaton::{Conjunction, Letter};
use crate::computation::{Computation, Verdict};
use crate::config::Cancellation;
use crate::structure::LeafKey;

use super::Outcome;

/// A committed-but-reversible choice: `snapshot` is the `Computation` as it
/// stood *before* `letter`/`conjunction` was tried at `leaf_key`
/// (`spec` §9 "a snapshot pointer suffices under copy-on-write").
struct Frame<'a> {
    leaf_key: LeafKey,
    letter: Letter,
    conjunction: Conjunction,
    snapshot: Computation<'a>,
}

/// Runs DFS from `current` (already past the deterministic drive) until it
/// finds an accepting computation, exhausts every choice, or hits the
/// cancellation/backtrack-frame ceiling.
///
/// Mirrors the reference `dfs`/`backtrack` pair. The reference's outer
/// `for leaf in order_active_branches()` loop only ever fully explores the
/// *first* leaf with a non-empty candidate list — its last-candidate
/// rejection immediately triggers backtrack (or terminal rejection at
/// depth 0) without advancing to the next leaf. This rewrite makes that
/// explicit rather than relying on the accident of early returns.
pub fn search<'a>(
    mut current: Computation<'a>,
    cancellation: &dyn Cancellation,
    max_frames: usize,
) -> Outcome<'a> {
    let mut frames: Vec<Frame<'a>> = Vec::new();

    loop {
        if cancellation.is_cancelled() || frames.len() > max_frames {
            return Outcome::Timeout;
        }

        let branches = current.order_active_branches();
        let chosen = branches
            .into_iter()
            .map(|leaf| (leaf.key(), current.order_transitions(leaf)))
            .find(|(_, candidates)| !candidates.is_empty());

        let Some((leaf_key, candidates)) = chosen else {
            // No active leaf has any candidate transition: reject here.
            match backtrack(&mut frames, &mut current) {
                Some(()) => continue,
                None => return Outcome::Reject,
            }
        };

        let mut advanced = false;
        for (index, (letter, conjunction)) in candidates.iter().enumerate() {
            let mut attempt = current.clone();
            attempt.dictionary_mut().restrict_to(&leaf_key, *letter, conjunction.clone());

            match attempt.run_deterministic_transitions() {
                Verdict::Accept => return Outcome::Accept(attempt),
                Verdict::Reject => {
                    if index + 1 == candidates.len() {
                        match backtrack(&mut frames, &mut current) {
                            Some(()) => {
                                advanced = true;
                                break;
                            }
                            None => return Outcome::Reject,
                        }
                    }
                    // Not the last candidate: try the next one.
                }
                Verdict::Indeterminate => {
                    frames.push(Frame {
                        leaf_key: leaf_key.clone(),
                        letter: *letter,
                        conjunction: conjunction.clone(),
                        snapshot: current.clone(),
                    });
                    current = attempt;
                    advanced = true;
                    break;
                }
            }
        }

        // The reference's DFS silently falls off its end here if every
        // candidate rejected without the last one being caught above —
        // treated as rejection (`spec` §9 Open Question).
        if !advanced {
            match backtrack(&mut frames, &mut current) {
                Some(()) => continue,
                None => return Outcome::Reject,
            }
        }
    }
}

/// Pops the most recent frame, restores its snapshot, and removes the
/// tried alternative so the restored leaf won't offer it again
/// (`spec` §4.5(c)). Returns `None` if there is nothing left to backtrack
/// to (depth 0 exhausted).
fn backtrack<'a>(frames: &mut Vec<Frame<'a>>, current: &mut Computation<'a>) -> Option<()> {
    let frame = frames.pop()?;
    let mut restored = frame.snapshot;
    restored.dictionary_mut().remove_alternative(&frame.leaf_key, frame.letter, &frame.conjunction);
    *current = restored;
    Some(())
}
