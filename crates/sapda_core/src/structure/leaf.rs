//! `Leaf`: a configuration labelled by `(state, remaining input, stack)`
//! (`spec` §3).

use crate::automaton::{Automaton, Letter, State};
use crate::input::RemainingInput;
use crate::stack::StackSeq;

/// Full local identity of a leaf, used as the active-leaf dictionary key
/// (`spec` §4.3, §9 "Transition dictionary identity"). `depth` and
/// `internal_stack` do not affect which transitions are enabled, but they
/// disambiguate otherwise-identical siblings at different tree positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafKey {
    pub state: State,
    pub remaining_input: String,
    pub stack: Vec<char>,
    pub internal_stack: Vec<char>,
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub state: State,
    pub remaining_input: RemainingInput,
    pub stack: StackSeq,
    /// The parent tree's stack suffix at the moment this leaf was created,
    /// kept only for identity/keying (`spec` §3).
    pub internal_stack: StackSeq,
    pub depth: u32,
}

impl Leaf {
    #[must_use]
    pub fn root(automaton: &Automaton, input: &str) -> Self {
        Self {
            state: automaton.initial_state().clone(),
            remaining_input: RemainingInput::whole(input),
            stack: StackSeq::from_symbols(vec![automaton.initial_stack_symbol()]),
            internal_stack: StackSeq::emptied(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn key(&self) -> LeafKey {
        LeafKey {
            state: self.state.clone(),
            remaining_input: self.remaining_input.render(),
            stack: self.stack.as_symbols().to_vec(),
            internal_stack: self.internal_stack.as_symbols().to_vec(),
            depth: self.depth,
        }
    }

    /// Invariant 2/3 of `spec` §3: a leaf with an emptied stack has no
    /// enabled transition; otherwise it has one only if `δ` has an entry
    /// for `(state, stack[0])` keyed by the next letter or by `e`.
    #[must_use]
    pub fn has_valid_transition(&self, automaton: &Automaton) -> bool {
        let Some(top) = self.stack.top() else { return false };
        let has_letter_move = self
            .remaining_input
            .first_letter()
            .is_some_and(|c| automaton.transitions_for(&self.state, top, Letter::Symbol(c)).is_some());
        let has_epsilon_move = automaton.transitions_for(&self.state, top, Letter::Epsilon).is_some();
        has_letter_move || has_epsilon_move
    }

    /// Acceptance predicate restricted to a single leaf (`spec` §4.5):
    /// input fully consumed and stack emptied.
    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.remaining_input.is_emptied() && self.stack.is_emptied()
    }

    /// Denotation used for trace rendering: `(state, remaining input,
    /// stack)` (`spec` §3, §6).
    #[must_use]
    pub fn render_label(&self) -> String {
        format!("({}, {}, {})", self.state, self.remaining_input.render(), self.stack.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonBuilder, Conjunct};

    fn one_transition_automaton() -> Automaton {
        AutomatonBuilder::new()
            .states(["q0", "q1"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .initial("q0", 'Z')
            .transition("q0", 'Z', 'a', [Conjunct::new("q1", vec![])])
            .build()
            .unwrap()
    }

    #[test]
    fn root_leaf_matches_initial_configuration() {
        let automaton = one_transition_automaton();
        let leaf = Leaf::root(&automaton, "a");
        assert_eq!(leaf.state.as_ref(), "q0");
        assert_eq!(leaf.stack.as_symbols(), &['Z']);
        assert_eq!(leaf.depth, 0);
    }

    #[test]
    fn emptied_stack_has_no_valid_transition() {
        let automaton = one_transition_automaton();
        let leaf = Leaf {
            state: automaton.initial_state().clone(),
            remaining_input: crate::input::RemainingInput::whole("a"),
            stack: StackSeq::emptied(),
            internal_stack: StackSeq::emptied(),
            depth: 0,
        };
        assert!(!leaf.has_valid_transition(&automaton));
    }

    #[test]
    fn leaf_with_matching_letter_has_valid_transition() {
        let automaton = one_transition_automaton();
        let leaf = Leaf::root(&automaton, "a");
        assert!(leaf.has_valid_transition(&automaton));
    }
}
