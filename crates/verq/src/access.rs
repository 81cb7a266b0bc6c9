//! Positional accessors.
//!
//! Every accessor degrades to `None` on unexpected structure: wrong parent kind,
//! offset past the production's arity or past the slots actually present, an
//! `Empty` slot, or a child of the wrong kind. Trees may come from a parse that
//! recovered from errors, so none of these cases is treated as a failure.
//!
//! Slot offsets are named in [`verq_syntax::slots`].

use verq_syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Non-trivia children of `node`, in order. `Empty` placeholders are included.
pub fn slots(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> {
    node.children_with_tokens().filter(|c| !c.kind().is_trivia())
}

pub fn slot_count(node: &SyntaxNode) -> usize {
    slots(node).count()
}

/// Raw slot lookup without kind checks. `Empty` placeholders are returned as-is.
pub(crate) fn slot(node: &SyntaxNode, index: usize) -> Option<SyntaxElement> {
    slots(node).nth(index)
}

/// Child at `index` of a node of kind `expected`.
pub fn child_at(node: &SyntaxNode, expected: SyntaxKind, index: usize) -> Option<SyntaxElement> {
    if node.kind() != expected {
        return None;
    }
    if expected.arity().is_some_and(|arity| index >= arity) {
        return None;
    }
    slot(node, index).filter(|child| child.kind() != SyntaxKind::Empty)
}

/// Like [`child_at`], but the child must be a node of kind `child_kind`.
pub fn child_node_at(
    node: &SyntaxNode,
    expected: SyntaxKind,
    index: usize,
    child_kind: SyntaxKind,
) -> Option<SyntaxNode> {
    child_at(node, expected, index)?
        .into_node()
        .filter(|child| child.kind() == child_kind)
}

/// Like [`child_at`], but the child must be a leaf.
pub fn child_leaf_at(node: &SyntaxNode, expected: SyntaxKind, index: usize) -> Option<SyntaxToken> {
    child_at(node, expected, index)?.into_token()
}
