//! The SAPDA stack: an ordered sequence of `Γ` symbols, top at index 0, with
//! the sentinel `['e']` meaning "emptied" (`spec` §3).

use crate::automaton::EPSILON;
use crate::errors::Invariant;

/// A SAPDA stack. Invariant: never the empty `Vec` — an emptied stack is
/// represented by the single-element sentinel `['e']`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackSeq(Vec<char>);

impl StackSeq {
    /// The emptied sentinel `['e']`.
    #[must_use]
    pub fn emptied() -> Self {
        Self(vec![EPSILON])
    }

    /// Builds a stack from concrete `Γ` symbols. An empty slice collapses
    /// to the emptied sentinel.
    #[must_use]
    pub fn from_symbols(symbols: impl Into<Vec<char>>) -> Self {
        let symbols = symbols.into();
        if symbols.is_empty() { Self::emptied() } else { Self(symbols) }
    }

    #[must_use]
    pub fn is_emptied(&self) -> bool {
        self.0.len() == 1 && self.0[0] == EPSILON
    }

    #[must_use]
    pub fn top(&self) -> Option<char> {
        if self.is_emptied() { None } else { self.0.first().copied() }
    }

    #[must_use]
    pub fn as_symbols(&self) -> &[char] {
        &self.0
    }

    /// The stack below the top symbol — what a branching point retains as
    /// its `internal_stack` (`spec` §4.2).
    #[must_use]
    pub fn below_top(&self) -> Self {
        if self.0.len() <= 1 { Self::emptied() } else { Self(self.0[1..].to_vec()) }
    }

    /// Renders the stack as a string, top symbol first (matching the
    /// reference crate's `get_stack_string` / `Display` conventions).
    #[must_use]
    pub fn render(&self) -> String {
        self.0.iter().collect()
    }

    /// Applies the pop/push half of an ordinary or conjunctive transition
    /// (`spec` §4.2 step 3–4): pop `pop_symbol` off the top, then push each
    /// symbol of `push` at the head in reverse order (so the leftmost
    /// pushed symbol ends up on top), stripping a single trailing `e`.
    pub fn transition(&self, pop_symbol: char, push: &[char]) -> Result<Self, Invariant> {
        let found = self.top().ok_or(Invariant::PopMismatch { expected: pop_symbol, found: EPSILON })?;
        if found != pop_symbol {
            return Err(Invariant::PopMismatch { expected: pop_symbol, found });
        }
        let popped = self.below_top();
        if push.is_empty() {
            return Ok(popped);
        }

        let mut combined: Vec<char> = push.to_vec();
        if !popped.is_emptied() {
            combined.extend_from_slice(popped.as_symbols());
        }
        if combined.len() > 1 && combined.last() == Some(&EPSILON) {
            combined.pop();
        }
        Ok(Self::from_symbols(combined))
    }
}

impl std::fmt::Display for StackSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptied_is_never_the_empty_vec() {
        assert_eq!(StackSeq::emptied().as_symbols(), &['e']);
        assert_eq!(StackSeq::from_symbols(vec![]).as_symbols(), &['e']);
    }

    #[test]
    fn pop_of_last_symbol_yields_emptied() {
        let stack = StackSeq::from_symbols(vec!['A']);
        assert_eq!(stack.below_top(), StackSeq::emptied());
    }

    #[test]
    fn transition_pops_and_pushes_in_order() {
        let stack = StackSeq::from_symbols(vec!['Z']);
        let next = stack.transition('Z', &['A', 'B']).unwrap();
        assert_eq!(next.as_symbols(), &['A', 'B']);
    }

    #[test]
    fn transition_rejects_mismatched_pop_symbol() {
        let stack = StackSeq::from_symbols(vec!['Z']);
        let err = stack.transition('A', &[]).unwrap_err();
        assert_eq!(err, Invariant::PopMismatch { expected: 'A', found: 'Z' });
    }

    #[test]
    fn transition_strips_trailing_epsilon() {
        let stack = StackSeq::from_symbols(vec!['Z']);
        let next = stack.transition('Z', &['A', 'e']).unwrap();
        assert_eq!(next.as_symbols(), &['A']);
    }

    #[test]
    fn transition_with_empty_push_just_pops() {
        let stack = StackSeq::from_symbols(vec!['A', 'Z']);
        let next = stack.transition('A', &[]).unwrap();
        assert_eq!(next.as_symbols(), &['Z']);
    }
}
