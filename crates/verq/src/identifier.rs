//! Identifier normalization.

use rowan::NodeOrToken;
use verq_syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, slots};

use crate::access::{child_at, child_leaf_at};
use crate::matcher::matchers;
use crate::search::{SearchMatch, SearchRoot, search};

/// Normalizes every identifier spelling to its leaf.
///
/// A plain or escaped identifier leaf is returned unchanged; an `UnqualifiedId`
/// wrapper yields its identifier slot. Anything else is `None`.
pub fn auto_unwrap_identifier(symbol: &SyntaxElement) -> Option<SyntaxToken> {
    match symbol {
        NodeOrToken::Token(token) => token.kind().is_identifier().then(|| token.clone()),
        NodeOrToken::Node(node) => match node.kind() {
            SyntaxKind::UnqualifiedId => child_leaf_at(
                node,
                SyntaxKind::UnqualifiedId,
                slots::unqualified_id::IDENTIFIER,
            )
            .filter(|leaf| leaf.kind().is_identifier()),
            _ => None,
        },
    }
}

pub fn find_all_identifier_unpacked_dimensions(root: &impl SearchRoot) -> Vec<SearchMatch> {
    search(root, &matchers::identifier_unpacked_dimensions())
}

pub fn identifier_from_identifier_unpacked_dimensions(node: &SyntaxNode) -> Option<SyntaxToken> {
    let identifier = child_at(
        node,
        SyntaxKind::IdentifierUnpackedDimensions,
        slots::identifier_unpacked_dimensions::IDENTIFIER,
    )?;
    auto_unwrap_identifier(&identifier)
}
