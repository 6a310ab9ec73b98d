//! The configuration tree: a `Leaf` or a `Tree` of child `Structure`s
//! (`spec` §3). `Tree` children are `Rc`-shared so that rewriting one leaf
//! only reallocates the spine from the root down to it (`spec` §9
//! "Copy-on-write").

pub mod leaf;
pub mod tree;

use std::rc::Rc;

pub use leaf::{Leaf, LeafKey};
pub use tree::Tree;

use crate::automaton::Automaton;
use crate::errors::Invariant;

#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    Leaf(Leaf),
    Tree(Tree),
}

impl Structure {
    #[must_use]
    pub fn leaf(leaf: Leaf) -> Rc<Structure> {
        Rc::new(Structure::Leaf(leaf))
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Structure::Leaf(l) => Some(l),
            Structure::Tree(_) => None,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Structure::Leaf(_))
    }

    /// Distance from this node to its deepest descendant. A bare `Leaf` is
    /// depth 0; this matches the *tree* depth used by the search's cutoff,
    /// not an individual leaf's `depth` field (`spec` §4.5).
    #[must_use]
    pub fn tree_depth(&self) -> u32 {
        match self {
            Structure::Leaf(_) => 0,
            Structure::Tree(tree) => 1 + tree.children.iter().map(|c| c.tree_depth()).max().unwrap_or(0),
        }
    }

    #[must_use]
    pub fn all_leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        match self {
            Structure::Leaf(l) => out.push(l),
            Structure::Tree(tree) => {
                for child in &tree.children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Leaves with at least one enabled transition (`spec` §4.5 "Active
    /// branch").
    #[must_use]
    pub fn active_branches(&self, automaton: &Automaton) -> Vec<&Leaf> {
        self.all_leaves().into_iter().filter(|l| l.has_valid_transition(automaton)).collect()
    }

    fn contains_key(&self, target: &LeafKey) -> bool {
        match self {
            Structure::Leaf(l) => &l.key() == target,
            Structure::Tree(tree) => tree.children.iter().any(|c| c.contains_key(target)),
        }
    }

    /// Rebuilds the structure with the leaf matching `target` replaced by
    /// whatever `f` produces (a `Leaf` for an ordinary transition, or a
    /// `Tree` for a conjunctive one). Only the path from the root to that
    /// leaf is reallocated; untouched siblings keep their `Rc`.
    pub fn rewrite_leaf(
        self: &Rc<Structure>,
        target: &LeafKey,
        f: &dyn Fn(&Leaf) -> Result<Structure, Invariant>,
    ) -> Result<Rc<Structure>, Invariant> {
        match self.as_ref() {
            Structure::Leaf(l) => {
                if &l.key() == target { Ok(Rc::new(f(l)?)) } else { Err(Invariant::LeafNotFound) }
            }
            Structure::Tree(tree) => {
                let mut new_children = Vec::with_capacity(tree.children.len());
                let mut found = false;
                for child in &tree.children {
                    if !found && child.contains_key(target) {
                        new_children.push(child.rewrite_leaf(target, f)?);
                        found = true;
                    } else {
                        new_children.push(Rc::clone(child));
                    }
                }
                if !found {
                    return Err(Invariant::LeafNotFound);
                }
                Ok(Rc::new(Structure::Tree(Tree::new(tree.stack.clone(), new_children))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RemainingInput;
    use crate::stack::StackSeq;

    fn leaf(state: &str, depth: u32) -> Leaf {
        Leaf {
            state: Rc::from(state),
            remaining_input: RemainingInput::whole("a"),
            stack: StackSeq::from_symbols(vec!['Z']),
            internal_stack: StackSeq::emptied(),
            depth,
        }
    }

    #[test]
    fn bare_leaf_has_tree_depth_zero() {
        assert_eq!(Structure::Leaf(leaf("q0", 0)).tree_depth(), 0);
    }

    #[test]
    fn tree_depth_is_one_plus_deepest_child() {
        let tree = Structure::Tree(Tree::new(
            StackSeq::emptied(),
            vec![Structure::leaf(leaf("q0", 1)), Structure::leaf(leaf("q1", 1))],
        ));
        assert_eq!(tree.tree_depth(), 1);
    }

    #[test]
    fn rewrite_leaf_only_touches_the_matching_child() {
        let untouched = Structure::leaf(leaf("q1", 1));
        let target = Structure::leaf(leaf("q0", 1));
        let target_key = target.as_leaf().unwrap().key();
        let tree = Rc::new(Structure::Tree(Tree::new(
            StackSeq::emptied(),
            vec![Rc::clone(&target), Rc::clone(&untouched)],
        )));

        let rewritten = tree
            .rewrite_leaf(&target_key, &|l| Ok(Structure::Leaf(Leaf { depth: l.depth + 10, ..l.clone() })))
            .unwrap();

        let Structure::Tree(t) = rewritten.as_ref() else { panic!("expected tree") };
        assert!(Rc::ptr_eq(&t.children[1], &untouched), "untouched sibling must keep its Rc identity");
        assert_eq!(t.children[0].as_leaf().unwrap().depth, 11);
    }
}
