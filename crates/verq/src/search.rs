//! Depth-first subtree search.

use rowan::{NodeOrToken, WalkEvent};
use verq_syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

use crate::matcher::Matcher;

/// A subtree found by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchMatch {
    pub node: SyntaxNode,
    /// Nesting depth below the search root (the root itself is 0).
    pub depth: usize,
}

/// Anything a search can start from: a node, a leaf, or either.
pub trait SearchRoot {
    fn root_node(&self) -> Option<&SyntaxNode>;
}

impl SearchRoot for SyntaxNode {
    fn root_node(&self) -> Option<&SyntaxNode> {
        Some(self)
    }
}

impl SearchRoot for SyntaxToken {
    fn root_node(&self) -> Option<&SyntaxNode> {
        None
    }
}

impl SearchRoot for SyntaxElement {
    fn root_node(&self) -> Option<&SyntaxNode> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }
}

/// Collects every node under `root` (inclusive) that satisfies `matcher`.
///
/// Results are in pre-order, left to right. Matched subtrees are still descended
/// into, so nested matches are reported after their enclosing match. Leaves and
/// `Empty` slots are never reported.
pub fn search(root: &impl SearchRoot, matcher: &Matcher) -> Vec<SearchMatch> {
    let Some(root) = root.root_node() else {
        return Vec::new();
    };

    let mut matches = Vec::new();
    let mut depth = 0usize;
    for event in root.preorder() {
        match event {
            WalkEvent::Enter(node) => {
                if node.kind() != SyntaxKind::Empty && matcher.matches_node(&node) {
                    matches.push(SearchMatch { node, depth });
                }
                depth += 1;
            }
            WalkEvent::Leave(_) => depth -= 1,
        }
    }
    matches
}
