//! `Computation`: bundles the current `Structure`, its trace, and the
//! active-leaf dictionary, and drives synchronisation plus the
//! deterministic part of the search (`spec` §4.4, §4.5(a)).

use std::rc::Rc;

use crate::automaton::{Automaton, Conjunction, Letter};
use crate::dictionary::ActiveLeafDictionary;
use crate::structure::{Leaf, LeafKey, Structure};
use crate::sync;
use crate::transition;

/// Outcome of running the deterministic drive to its end (`spec` §4.5(a)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
    /// No forced move and no terminal verdict: a choice point was reached.
    Indeterminate,
}

#[derive(Debug, Clone)]
pub struct Computation<'a> {
    automaton: &'a Automaton,
    input_len: usize,
    structure: Rc<Structure>,
    trace: Vec<Rc<Structure>>,
    dictionary: ActiveLeafDictionary,
    is_leaf: bool,
}

impl<'a> Computation<'a> {
    /// The initial configuration: a single Leaf `(q₀, input, [Z₀])`
    /// (`spec` §3 "Lifecycle").
    #[must_use]
    pub fn new(automaton: &'a Automaton, input: &str) -> Self {
        let root = Structure::leaf(Leaf::root(automaton, input));
        let mut dictionary = ActiveLeafDictionary::new();
        dictionary.populate(&root, automaton);
        let input_len = if input == "e" { 0 } else { input.chars().count() };
        Self {
            automaton,
            input_len,
            trace: vec![Rc::clone(&root)],
            structure: root,
            dictionary,
            is_leaf: true,
        }
    }

    #[must_use]
    pub fn structure(&self) -> &Rc<Structure> {
        &self.structure
    }

    #[must_use]
    pub fn dictionary(&self) -> &ActiveLeafDictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut ActiveLeafDictionary {
        &mut self.dictionary
    }

    /// The trace rendered into `"Step i\n\n<tree>"` strings (`spec` §6).
    #[must_use]
    pub fn trace(&self) -> &[Rc<Structure>] {
        &self.trace
    }

    /// Replaces the current `Structure`, appends it to the trace, ensures
    /// dictionary entries for its active leaves, and refreshes `is_leaf`
    /// (`spec` §4.6).
    pub fn update(&mut self, new_structure: Rc<Structure>) {
        self.trace.push(Rc::clone(&new_structure));
        self.is_leaf = new_structure.is_leaf();
        self.dictionary.populate(&new_structure, self.automaton);
        self.structure = new_structure;
    }

    /// Applies [`sync::synchronise_fixpoint`] one pass at a time, appending
    /// every non-trivial pass to the trace, matching the reference's
    /// recursive `synchronise_loop` (`spec` §4.4 "Fixpoint loop").
    pub fn synchronise_loop(&mut self) {
        loop {
            let next = sync::synchronise_fixpoint(&self.structure);
            if Rc::ptr_eq(&next, &self.structure) {
                return;
            }
            self.update(next);
        }
    }

    /// `spec` §4.5 "Acceptance predicate".
    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.is_leaf
            && self
                .structure
                .as_leaf()
                .is_some_and(Leaf::is_accepting)
    }

    /// `spec` §4.5 "Rejection predicates" (any of the four).
    #[must_use]
    pub fn is_rejecting(&self) -> bool {
        if self.is_accepting() {
            return false;
        }
        let active = self.structure.active_branches(self.automaton);
        if active.is_empty() {
            return true;
        }
        if self.structure.tree_depth() as usize > self.input_len {
            return true;
        }
        if self.dictionary.has_exhausted_entry() {
            return true;
        }
        self.structure
            .all_leaves()
            .into_iter()
            .any(|leaf| !(leaf.has_valid_transition(self.automaton) || leaf.stack.is_emptied()))
    }

    /// Active leaves ordered shortest-work-first by
    /// `|remaining_input| + |stack|` (`spec` §4.5(b)).
    #[must_use]
    pub fn order_active_branches(&self) -> Vec<&Leaf> {
        let mut branches = self.structure.active_branches(self.automaton);
        branches.sort_by_key(|leaf| leaf.remaining_input.char_len() + leaf.stack.as_symbols().len());
        branches
    }

    /// `true` if some active leaf has exactly one enabled transition
    /// (`spec` §4.5(a): "pick any active leaf whose enabled-transition list
    /// has length 1").
    #[must_use]
    pub fn has_deterministic_transition(&self) -> bool {
        self.structure
            .active_branches(self.automaton)
            .into_iter()
            .any(|leaf| self.dictionary.get(&leaf.key()).is_some_and(|e| e.len() == 1))
    }

    /// Transitions enabled at `leaf`, ordered so that non-ε or
    /// single-conjunct alternatives come first, and within a multi-conjunct
    /// ε-alternative, conjuncts that would push the leaf back into its own
    /// `(state, stack_top)` are moved last (`spec` §4.5(b) loop-avoidance).
    #[must_use]
    pub fn order_transitions(&self, leaf: &Leaf) -> Vec<(Letter, Conjunction)> {
        let Some(entry) = self.dictionary.get(&leaf.key()) else { return Vec::new() };
        let mut ordered = Vec::with_capacity(entry.len());

        for (letter, conjuncts) in entry {
            if *letter != Letter::Epsilon || conjuncts.len() == 1 {
                ordered.push((*letter, conjuncts.clone()));
            }
        }

        for (letter, conjuncts) in entry {
            if *letter == Letter::Epsilon && conjuncts.len() > 1 {
                // A push of "nothing" denotes by `e` itself in the source
                // material, which can never equal a real (non-epsilon)
                // stack top — so an empty `push` never counts as a self-loop.
                let top = leaf.stack.top().unwrap_or(crate::automaton::EPSILON);
                let is_self_loop = |conjunct: &crate::automaton::Conjunct| {
                    conjunct.next_state == leaf.state
                        && conjunct.push.first().copied().unwrap_or(crate::automaton::EPSILON) == top
                };
                let mut reordered: Conjunction = conjuncts.iter().filter(|c| !is_self_loop(c)).cloned().collect();
                reordered.extend(conjuncts.iter().filter(|c| is_self_loop(c)).cloned());
                ordered.push((*letter, reordered));
            }
        }

        ordered
    }

    /// Applies `(letter, conjunction)` to the leaf keyed by `leaf_key` and
    /// rewrites the `Structure` in place of it.
    pub fn apply_transition(
        &self,
        leaf_key: &LeafKey,
        letter: Letter,
        conjunction: &Conjunction,
    ) -> Result<Rc<Structure>, crate::errors::Invariant> {
        self.structure.rewrite_leaf(leaf_key, &|l| transition::apply(l, letter, conjunction))
    }

    /// Chases every forced move (`spec` §4.5(a)): synchronise to fixpoint,
    /// check for a terminal verdict, apply the sole enabled transition at
    /// some deterministic leaf, and repeat.
    pub fn run_deterministic_transitions(&mut self) -> Verdict {
        self.synchronise_loop();
        while self.has_deterministic_transition() {
            self.synchronise_loop();
            if self.is_accepting() {
                return Verdict::Accept;
            }
            if self.is_rejecting() {
                return Verdict::Reject;
            }

            let Some(leaf) = self
                .structure
                .active_branches(self.automaton)
                .into_iter()
                .find(|leaf| self.dictionary.get(&leaf.key()).is_some_and(|e| e.len() == 1))
                .cloned()
            else {
                break;
            };
            let key = leaf.key();
            let (letter, conjunction) = self.dictionary.get(&key).unwrap()[0].clone();
            match self.apply_transition(&key, letter, &conjunction) {
                Ok(new_structure) => {
                    self.update(new_structure);
                    self.synchronise_loop();
                }
                Err(err) => {
                    tracing::error!(?err, "invariant violation during deterministic drive");
                    return Verdict::Reject;
                }
            }
        }

        if self.is_accepting() {
            Verdict::Accept
        } else if self.is_rejecting() {
            Verdict::Reject
        } else {
            Verdict::Indeterminate
        }
    }
}
