//! Transition Engine: applies a chosen transition to a chosen leaf,
//! handling stack pop/push and conjunctive split (`spec` §4.2).

use crate::automaton::{Conjunct, Conjunction, Letter, EPSILON};
use crate::errors::Invariant;
use crate::input::RemainingInput;
use crate::stack::StackSeq;
use crate::structure::{Leaf, Structure, Tree};

/// Applies `conjunction` (read under `letter`) to `leaf`, producing either
/// an updated `Leaf` (single conjunct — an ordinary transition) or a
/// `Tree` (two or more conjuncts — a conjunctive transition and split).
pub fn apply(leaf: &Leaf, letter: Letter, conjunction: &Conjunction) -> Result<Structure, Invariant> {
    match conjunction {
        [] => Err(Invariant::EmptyStackTransition),
        [only] => apply_ordinary(leaf, letter, only).map(Structure::Leaf),
        many => apply_conjunctive(leaf, letter, many).map(Structure::Tree),
    }
}

fn consume(remaining: &RemainingInput, letter: Letter) -> Result<RemainingInput, Invariant> {
    match letter {
        Letter::Epsilon => Ok(remaining.clone()),
        Letter::Symbol(expected) => match remaining.first_letter() {
            Some(found) if found == expected => Ok(remaining.advance()),
            Some(found) => Err(Invariant::LetterMismatch { expected, found }),
            None => Err(Invariant::LetterMismatch { expected, found: EPSILON }),
        },
    }
}

/// Ordinary transition (`spec` §4.2 steps 1–4): consume the letter (or not,
/// for `e`), move to the next state, and rewrite the stack.
pub fn apply_ordinary(leaf: &Leaf, letter: Letter, conjunct: &Conjunct) -> Result<Leaf, Invariant> {
    let pop_symbol = leaf.stack.top().ok_or(Invariant::EmptyStackTransition)?;
    let remaining_input = consume(&leaf.remaining_input, letter)?;
    let stack = leaf.stack.transition(pop_symbol, &conjunct.push)?;

    Ok(Leaf {
        state: conjunct.next_state.clone(),
        remaining_input,
        stack,
        internal_stack: leaf.internal_stack.clone(),
        depth: leaf.depth,
    })
}

/// Conjunctive transition (`spec` §4.2): splits `leaf` into a `Tree` whose
/// `stack` is the internal stack (everything below the popped top symbol),
/// with one child `Leaf` per conjunct.
pub fn apply_conjunctive(leaf: &Leaf, letter: Letter, conjuncts: &[Conjunct]) -> Result<Tree, Invariant> {
    if leaf.stack.is_emptied() {
        return Err(Invariant::EmptyStackTransition);
    }
    let internal_stack = leaf.stack.below_top();
    let child_input = consume(&leaf.remaining_input, letter)?;

    let children = conjuncts
        .iter()
        .map(|conjunct| {
            Structure::leaf(Leaf {
                state: conjunct.next_state.clone(),
                remaining_input: child_input.clone(),
                stack: StackSeq::from_symbols(conjunct.push.clone()),
                internal_stack: internal_stack.clone(),
                depth: leaf.depth + 1,
            })
        })
        .collect();

    Ok(Tree::new(internal_stack, children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::State;
    use std::rc::Rc;

    fn leaf(state: &str, stack: &[char], input: &str) -> Leaf {
        Leaf {
            state: Rc::from(state) as State,
            remaining_input: RemainingInput::whole(input),
            stack: StackSeq::from_symbols(stack.to_vec()),
            internal_stack: StackSeq::emptied(),
            depth: 0,
        }
    }

    #[test]
    fn ordinary_transition_consumes_letter_and_rewrites_stack() {
        let l = leaf("q0", &['Z'], "ab");
        let conjunct = Conjunct::new("q1", vec!['A', 'Z']);
        let next = apply_ordinary(&l, Letter::Symbol('a'), &conjunct).unwrap();
        assert_eq!(next.state.as_ref(), "q1");
        assert_eq!(next.remaining_input.as_str(), "b");
        assert_eq!(next.stack.as_symbols(), &['A', 'Z']);
    }

    #[test]
    fn epsilon_transition_leaves_input_untouched() {
        let l = leaf("q0", &['Z'], "ab");
        let conjunct = Conjunct::new("q0", vec![]);
        let next = apply_ordinary(&l, Letter::Epsilon, &conjunct).unwrap();
        assert_eq!(next.remaining_input.as_str(), "ab");
        assert!(next.stack.is_emptied());
    }

    #[test]
    fn conjunctive_transition_splits_into_tree_with_internal_stack() {
        let l = leaf("q0", &['Z'], "a");
        let conjuncts = vec![Conjunct::new("q1", vec!['Z']), Conjunct::new("q2", vec!['Z'])];
        let tree = apply_conjunctive(&l, Letter::Epsilon, &conjuncts).unwrap();
        assert!(tree.stack.is_emptied(), "internal stack is below the single popped 'Z'");
        assert_eq!(tree.children.len(), 2);
        let first = tree.children[0].as_leaf().unwrap();
        assert_eq!(first.state.as_ref(), "q1");
        assert_eq!(first.depth, 1);
    }

    #[test]
    fn conjunctive_transition_on_emptied_stack_is_an_invariant_violation() {
        let l = leaf("q0", &[], "a");
        let conjuncts = vec![Conjunct::new("q1", vec![]), Conjunct::new("q2", vec![])];
        assert_eq!(apply_conjunctive(&l, Letter::Epsilon, &conjuncts).unwrap_err(), Invariant::EmptyStackTransition);
    }

    #[test]
    fn wrong_letter_is_a_letter_mismatch() {
        let l = leaf("q0", &['Z'], "b");
        let conjunct = Conjunct::new("q1", vec![]);
        assert_eq!(
            apply_ordinary(&l, Letter::Symbol('a'), &conjunct).unwrap_err(),
            Invariant::LetterMismatch { expected: 'a', found: 'b' }
        );
    }
}
