//! Declarative node-kind matchers.
//!
//! A matcher is a conjunction: the element's kind must equal the matcher's kind, and
//! every positional child constraint must hold. Grammar kinds are disjoint, so there
//! is nothing to backtrack over.

use verq_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};

use crate::access::slot;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matcher {
    kind: SyntaxKind,
    children: Vec<(usize, Matcher)>,
}

impl Matcher {
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Additionally require the slot at `index` to satisfy `matcher`.
    ///
    /// Child matchers may name token kinds: `Matcher::new(ModulePortDeclaration)
    /// .child(0, Matcher::new(KwInput))` selects input declarations only.
    pub fn child(mut self, index: usize, matcher: Matcher) -> Self {
        self.children.push((index, matcher));
        self
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn matches(&self, element: &SyntaxElement) -> bool {
        if element.kind() != self.kind {
            return false;
        }
        match element.as_node() {
            Some(node) => self.children_match(node),
            None => self.children.is_empty(),
        }
    }

    pub fn matches_node(&self, node: &SyntaxNode) -> bool {
        node.kind() == self.kind && self.children_match(node)
    }

    /// Slots past the production's arity never satisfy a constraint, as in
    /// [`child_at`](crate::access::child_at). `Empty` slots stay visible so a child
    /// matcher can require `Empty`.
    fn children_match(&self, node: &SyntaxNode) -> bool {
        self.children.iter().all(|(index, m)| {
            self.kind.arity().is_none_or(|arity| *index < arity)
                && slot(node, *index).is_some_and(|child| m.matches(&child))
        })
    }
}

/// Matchers for the constructs the extraction layer searches for.
pub mod matchers {
    use verq_syntax::SyntaxKind;

    use super::Matcher;

    pub fn port_declaration() -> Matcher {
        Matcher::new(SyntaxKind::PortDeclaration)
    }

    pub fn module_port_declaration() -> Matcher {
        Matcher::new(SyntaxKind::ModulePortDeclaration)
    }

    pub fn port() -> Matcher {
        Matcher::new(SyntaxKind::Port)
    }

    pub fn port_reference() -> Matcher {
        Matcher::new(SyntaxKind::PortReference)
    }

    pub fn actual_named_port() -> Matcher {
        Matcher::new(SyntaxKind::ActualNamedPort)
    }

    pub fn port_item() -> Matcher {
        Matcher::new(SyntaxKind::PortItem)
    }

    pub fn identifier_unpacked_dimensions() -> Matcher {
        Matcher::new(SyntaxKind::IdentifierUnpackedDimensions)
    }
}
