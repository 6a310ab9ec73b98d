//! `Tree`: a branching point holding an internal stack and the ordered
//! children produced by a conjunctive transition (`spec` §3, §4.2).

use std::rc::Rc;

use crate::stack::StackSeq;

use super::Structure;

#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    /// The internal stack: the portion of the branching leaf's stack below
    /// the symbol that triggered the split. Restored on synchronisation.
    pub stack: StackSeq,
    /// At least two children (invariant 1 of `spec` §3).
    pub children: Vec<Rc<Structure>>,
}

impl Tree {
    #[must_use]
    pub fn new(stack: StackSeq, children: Vec<Rc<Structure>>) -> Self {
        debug_assert!(children.len() >= 2, "a Tree must have at least two children");
        Self { stack, children }
    }
}
