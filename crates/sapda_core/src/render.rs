//! Tree rendering seam (`spec` §6): formats a `Structure` into the
//! multi-line text that becomes one trace step. The richer visual renderer
//! is the excluded front-end's job; this crate ships one dependency-free
//! implementation so it is exercisable standalone.

use crate::structure::Structure;

/// Consumed by the (out-of-scope) rendering collaborator: anything that can
/// turn a `Structure` into display text. Kept as a trait, not a free
/// function, so a caller can substitute a richer renderer without touching
/// `search`.
pub trait TreeRenderer {
    fn render(&self, structure: &Structure) -> String;
}

/// Indents each nesting level by two spaces; a `Leaf` renders as its
/// `(state, remaining_input, stack)` triple, a `Tree` as its internal
/// stack followed by each child on its own indented line.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentedRenderer;

impl IndentedRenderer {
    fn render_at(&self, structure: &Structure, depth: usize) -> String {
        let indent = "  ".repeat(depth);
        match structure {
            Structure::Leaf(leaf) => format!("{indent}{}", leaf.render_label()),
            Structure::Tree(tree) => {
                let mut lines = vec![format!("{indent}[{}]", tree.stack.render())];
                for child in &tree.children {
                    lines.push(self.render_at(child, depth + 1));
                }
                lines.join("\n")
            }
        }
    }
}

impl TreeRenderer for IndentedRenderer {
    fn render(&self, structure: &Structure) -> String {
        self.render_at(structure, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RemainingInput;
    use crate::stack::StackSeq;
    use crate::structure::{Leaf, Tree};
    use std::rc::Rc;

    fn leaf(state: &str) -> Leaf {
        Leaf {
            state: Rc::from(state),
            remaining_input: RemainingInput::whole("a"),
            stack: StackSeq::from_symbols(vec!['Z']),
            internal_stack: StackSeq::emptied(),
            depth: 0,
        }
    }

    #[test]
    fn renders_a_bare_leaf_on_one_line() {
        let rendered = IndentedRenderer.render(&Structure::Leaf(leaf("q0")));
        assert_eq!(rendered, "(q0, a, Z)");
    }

    #[test]
    fn renders_a_tree_with_indented_children() {
        let tree = Structure::Tree(Tree::new(
            StackSeq::emptied(),
            vec![Structure::leaf(leaf("q0")), Structure::leaf(leaf("q1"))],
        ));
        let rendered = IndentedRenderer.render(&tree);
        assert_eq!(rendered, "[e]\n  (q0, a, Z)\n  (q1, a, Z)");
    }
}
