//! Search: chases forced moves, then explores choice points with ordering
//! heuristics and backtracking (`spec` §4.5).

pub mod bfs;
pub mod dfs;
pub mod drive;

use crate::computation::Computation;

/// What a complete search attempt settled on.
pub enum Outcome<'a> {
    Accept(Computation<'a>),
    Reject,
    Timeout,
}
