//! Synchroniser: collapses a `Tree` whose children have all emptied their
//! stacks and agree on `(state, remaining_input)` back into a single
//! `Leaf`, restoring the tree's internal stack (`spec` §4.4).

use std::rc::Rc;

use crate::stack::StackSeq;
use crate::structure::{Leaf, Structure, Tree};

fn try_collapse(tree: &Tree) -> Option<Leaf> {
    let first = tree.children.first()?.as_leaf()?;
    if !first.stack.is_emptied() {
        return None;
    }
    let all_agree = tree.children.iter().all(|child| {
        child
            .as_leaf()
            .is_some_and(|l| l.stack.is_emptied() && l.remaining_input == first.remaining_input && l.state == first.state)
    });
    if !all_agree {
        return None;
    }
    Some(Leaf {
        state: first.state.clone(),
        remaining_input: first.remaining_input.clone(),
        stack: tree.stack.clone(),
        // A synchronised leaf rejoins the parent's frame fresh (`spec` §9
        // Open Question): internal stack and depth both reset.
        internal_stack: StackSeq::emptied(),
        depth: 0,
    })
}

/// One synchronisation pass: tries to collapse `node` itself, else recurses
/// into every child `Tree` (so a single pass can collapse several
/// independent branches). A node's own collapse check runs against its
/// children as they stood *before* this pass's recursion, so a multi-level
/// nested collapse still needs [`synchronise_fixpoint`]'s repeated passes.
/// Returns `(node, true)` if a rewrite happened, else the original `Rc`.
fn synchronise_once(node: &Rc<Structure>) -> (Rc<Structure>, bool) {
    let Structure::Tree(tree) = node.as_ref() else {
        return (Rc::clone(node), false);
    };

    if let Some(collapsed) = try_collapse(tree) {
        return (Structure::leaf(collapsed), true);
    }

    let mut changed = false;
    let mut new_children = Vec::with_capacity(tree.children.len());
    for child in &tree.children {
        if matches!(child.as_ref(), Structure::Tree(_)) {
            let (rewritten, child_changed) = synchronise_once(child);
            changed |= child_changed;
            new_children.push(rewritten);
        } else {
            new_children.push(Rc::clone(child));
        }
    }

    if changed {
        (Rc::new(Structure::Tree(Tree::new(tree.stack.clone(), new_children))), true)
    } else {
        (Rc::clone(node), false)
    }
}

/// Applies [`synchronise_once`] until the structure stops changing
/// (`spec` §4.4 "Fixpoint loop"). Idempotent once the fixpoint is reached.
#[must_use]
pub fn synchronise_fixpoint(node: &Rc<Structure>) -> Rc<Structure> {
    let mut current = Rc::clone(node);
    loop {
        let (next, changed) = synchronise_once(&current);
        if !changed {
            return current;
        }
        current = next;
    }
}
