//! Active-Leaf Dictionary: a cache from a leaf's full local identity to its
//! enabled transitions, so repeated lookups during search don't re-walk
//! `δ` (`spec` §4.3).

use indexmap::IndexMap;

use crate::automaton::{Automaton, Conjunction, Letter};
use crate::structure::{Leaf, LeafKey, Structure};

/// `(letter, conjuncts)` — one enabled alternative at a leaf.
pub type Entry = Vec<(Letter, Conjunction)>;

fn compute_entry(leaf: &Leaf, automaton: &Automaton) -> Entry {
    let Some(top) = leaf.stack.top() else { return Vec::new() };
    let mut entries = Vec::new();

    if let Some(letter) = leaf.remaining_input.first_letter() {
        if let Some(conjunctions) = automaton.transitions_for(&leaf.state, top, Letter::Symbol(letter)) {
            entries.extend(conjunctions.iter().cloned().map(|c| (Letter::Symbol(letter), c)));
        }
    }
    // ε-moves coexist with letter-moves; when the input is already exhausted
    // this is the only source of transitions (`remaining_input[0] = e`).
    if let Some(conjunctions) = automaton.transitions_for(&leaf.state, top, Letter::Epsilon) {
        entries.extend(conjunctions.iter().cloned().map(|c| (Letter::Epsilon, c)));
    }

    entries
}

/// `IndexMap<LeafKey, Entry>`. Cloned wholesale at each DFS choice point
/// (`spec` §5 "Shared resources") — cheap because entries are small and
/// `IndexMap::clone` is a flat copy.
#[derive(Debug, Clone, Default)]
pub struct ActiveLeafDictionary(IndexMap<LeafKey, Entry>);

impl ActiveLeafDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    #[must_use]
    pub fn get(&self, key: &LeafKey) -> Option<&Entry> {
        self.0.get(key)
    }

    /// Inserts `key`'s entry if absent; never recomputes an existing entry
    /// (`spec` §4.3: "entries already present are not recomputed").
    pub fn ensure(&mut self, leaf: &Leaf, automaton: &Automaton) -> &Entry {
        self.0.entry(leaf.key()).or_insert_with(|| compute_entry(leaf, automaton))
    }

    /// Walks every active leaf of `structure` and ensures each has a
    /// dictionary entry.
    pub fn populate(&mut self, structure: &Structure, automaton: &Automaton) {
        for leaf in structure.active_branches(automaton) {
            self.ensure(leaf, automaton);
        }
    }

    /// Replaces `key`'s entry with a single-alternative entry — how DFS
    /// commits to one candidate before re-entering the deterministic drive
    /// (`spec` §4.5(b)).
    pub fn restrict_to(&mut self, key: &LeafKey, letter: Letter, conjunction: Conjunction) {
        self.0.insert(key.clone(), vec![(letter, conjunction)]);
    }

    /// Drops one `(letter, conjunction)` alternative from `key`'s entry —
    /// how backtracking removes an already-tried transition before
    /// retrying (`spec` §4.5(c)).
    pub fn remove_alternative(&mut self, key: &LeafKey, letter: Letter, conjunction: &Conjunction) {
        if let Some(entry) = self.0.get_mut(key) {
            entry.retain(|(l, c)| !(*l == letter && c == conjunction));
        }
    }

    /// True if any active leaf's entry is empty — a rejection predicate
    /// (`spec` §4.5 "Rejection predicates" #3).
    #[must_use]
    pub fn has_exhausted_entry(&self) -> bool {
        self.0.values().any(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonBuilder, Conjunct};
    use crate::input::RemainingInput;
    use crate::stack::StackSeq;
    use std::rc::Rc;

    fn automaton_with_letter_and_epsilon() -> Automaton {
        AutomatonBuilder::new()
            .states(["q0", "q1", "q2"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .initial("q0", 'Z')
            .transition("q0", 'Z', 'a', [Conjunct::new("q1", vec!['Z'])])
            .transition("q0", 'Z', 'e', [Conjunct::new("q2", vec!['Z'])])
            .build()
            .unwrap()
    }

    fn leaf(input: &str) -> Leaf {
        Leaf {
            state: Rc::from("q0"),
            remaining_input: RemainingInput::whole(input),
            stack: StackSeq::from_symbols(vec!['Z']),
            internal_stack: StackSeq::emptied(),
            depth: 0,
        }
    }

    #[test]
    fn letter_and_epsilon_moves_coexist() {
        let automaton = automaton_with_letter_and_epsilon();
        let entry = compute_entry(&leaf("a"), &automaton);
        assert_eq!(entry.len(), 2);
        assert!(entry.iter().any(|(l, _)| *l == Letter::Symbol('a')));
        assert!(entry.iter().any(|(l, _)| *l == Letter::Epsilon));
    }

    #[test]
    fn exhausted_input_only_yields_epsilon_moves() {
        let automaton = automaton_with_letter_and_epsilon();
        let entry = compute_entry(&leaf(""), &automaton);
        assert_eq!(entry, vec![(Letter::Epsilon, vec![Conjunct::new("q2", vec!['Z'])])]);
    }

    #[test]
    fn ensure_does_not_recompute_an_existing_entry() {
        let automaton = automaton_with_letter_and_epsilon();
        let mut dict = ActiveLeafDictionary::new();
        let l = leaf("a");
        dict.ensure(&l, &automaton);
        dict.restrict_to(&l.key(), Letter::Symbol('a'), vec![Conjunct::new("q1", vec!['Z'])]);
        dict.ensure(&l, &automaton);
        assert_eq!(dict.get(&l.key()).unwrap().len(), 1, "restriction must survive a second ensure()");
    }

    #[test]
    fn remove_alternative_drops_only_the_matching_pair() {
        let automaton = automaton_with_letter_and_epsilon();
        let mut dict = ActiveLeafDictionary::new();
        let l = leaf("a");
        dict.ensure(&l, &automaton);
        dict.remove_alternative(&l.key(), Letter::Symbol('a'), &vec![Conjunct::new("q1", vec!['Z'])]);
        let remaining = dict.get(&l.key()).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].0, Letter::Epsilon);
    }

    #[test]
    fn has_exhausted_entry_detects_empty_entries() {
        let automaton = automaton_with_letter_and_epsilon();
        let mut dict = ActiveLeafDictionary::new();
        let l = leaf("b"); // 'b' is outside the alphabet here but still exercises lookup miss
        dict.ensure(&l, &automaton);
        assert!(dict.has_exhausted_entry());
    }
}
