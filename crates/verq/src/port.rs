//! Port constructs: declarations, references, task/function formals, and named
//! connections.
//!
//! Each wrapper casts from a `SyntaxNode` of the right kind and exposes the
//! fragments a downstream consumer needs. Accessors follow the absence rules in
//! [`crate::access`].

use verq_syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, slots};

use crate::access::{child_at, child_leaf_at, child_node_at};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::identifier::{
    auto_unwrap_identifier, find_all_identifier_unpacked_dimensions,
    identifier_from_identifier_unpacked_dimensions,
};
use crate::matcher::matchers;
use crate::search::{SearchMatch, SearchRoot, search};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(PortDeclaration, PortDeclaration);
ast_node!(ModulePortDeclaration, ModulePortDeclaration);
ast_node!(Port, Port);
ast_node!(PortReference, PortReference);
ast_node!(PortItem, PortItem);
ast_node!(ActualNamedPort, ActualNamedPort);

pub fn find_all_port_declarations(root: &impl SearchRoot) -> Vec<SearchMatch> {
    search(root, &matchers::port_declaration())
}

pub fn find_all_module_port_declarations(root: &impl SearchRoot) -> Vec<SearchMatch> {
    search(root, &matchers::module_port_declaration())
}

/// Entries of non-ANSI port lists. Use [`Port::port_reference`] to reach the reference.
pub fn find_all_port_references(root: &impl SearchRoot) -> Vec<SearchMatch> {
    search(root, &matchers::port())
}

pub fn find_all_actual_named_ports(root: &impl SearchRoot) -> Vec<SearchMatch> {
    search(root, &matchers::actual_named_port())
}

pub fn find_all_task_function_port_items(root: &impl SearchRoot) -> Vec<SearchMatch> {
    search(root, &matchers::port_item())
}

fn direction_leaf(node: &SyntaxNode, kind: SyntaxKind, index: usize) -> Option<SyntaxToken> {
    child_leaf_at(node, kind, index).filter(|leaf| leaf.kind().is_direction())
}

impl PortDeclaration {
    /// `None` when the direction is implicit.
    pub fn direction(&self) -> Option<SyntaxToken> {
        direction_leaf(
            &self.0,
            SyntaxKind::PortDeclaration,
            slots::port_declaration::DIRECTION,
        )
    }

    pub fn identifier(&self) -> Option<SyntaxToken> {
        let identifier = child_at(
            &self.0,
            SyntaxKind::PortDeclaration,
            slots::port_declaration::IDENTIFIER,
        )?;
        auto_unwrap_identifier(&identifier)
    }
}

impl ModulePortDeclaration {
    /// `None` when the direction is implicit.
    pub fn direction(&self) -> Option<SyntaxToken> {
        direction_leaf(
            &self.0,
            SyntaxKind::ModulePortDeclaration,
            slots::module_port_declaration::DIRECTION,
        )
    }

    /// Name of the declared port.
    ///
    /// The grammar allows one `IdentifierUnpackedDimensions` per declaration. If the
    /// tree holds several, the first one wins and a `DuplicateIdentifier` diagnostic
    /// is emitted.
    pub fn identifier(&self, diagnostics: &mut Diagnostics) -> Option<SyntaxToken> {
        let found = find_all_identifier_unpacked_dimensions(&self.0);
        let first = found.first()?;
        if found.len() > 1 {
            diagnostics
                .report(DiagnosticKind::DuplicateIdentifier, self.0.text_range())
                .message(format!("port declaration has {}", found.len()))
                .related_to("first identifier used", first.node.text_range())
                .emit();
        }
        identifier_from_identifier_unpacked_dimensions(&first.node)
    }
}

impl Port {
    pub fn port_reference(&self) -> Option<PortReference> {
        child_node_at(
            &self.0,
            SyntaxKind::Port,
            slots::port::REFERENCE,
            SyntaxKind::PortReference,
        )
        .map(PortReference)
    }
}

impl PortReference {
    pub fn identifier(&self) -> Option<SyntaxToken> {
        let identifier = child_at(
            &self.0,
            SyntaxKind::PortReference,
            slots::port_reference::IDENTIFIER,
        )?;
        auto_unwrap_identifier(&identifier)
    }
}

impl PortItem {
    fn type_id_dimensions(&self) -> Option<SyntaxNode> {
        child_node_at(
            &self.0,
            SyntaxKind::PortItem,
            slots::port_item::TYPE_ID_DIMENSIONS,
            SyntaxKind::DataTypeImplicitBasicIdDimensions,
        )
    }

    /// `DataType` node; `None` for an implicit type.
    pub fn data_type(&self) -> Option<SyntaxNode> {
        child_node_at(
            &self.type_id_dimensions()?,
            SyntaxKind::DataTypeImplicitBasicIdDimensions,
            slots::type_id_dimensions::DATA_TYPE,
            SyntaxKind::DataType,
        )
    }

    pub fn identifier(&self) -> Option<SyntaxToken> {
        let identifier = child_at(
            &self.type_id_dimensions()?,
            SyntaxKind::DataTypeImplicitBasicIdDimensions,
            slots::type_id_dimensions::IDENTIFIER,
        )?;
        auto_unwrap_identifier(&identifier)
    }

    pub fn unpacked_dimensions(&self) -> Option<SyntaxNode> {
        child_node_at(
            &self.type_id_dimensions()?,
            SyntaxKind::DataTypeImplicitBasicIdDimensions,
            slots::type_id_dimensions::UNPACKED_DIMENSIONS,
            SyntaxKind::UnpackedDimensions,
        )
    }
}

impl ActualNamedPort {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_leaf_at(
            &self.0,
            SyntaxKind::ActualNamedPort,
            slots::actual_named_port::NAME,
        )
    }

    /// Parenthesized connection, uninterpreted. `None` for `.name` shorthand.
    pub fn paren_group(&self) -> Option<SyntaxElement> {
        child_at(
            &self.0,
            SyntaxKind::ActualNamedPort,
            slots::actual_named_port::PAREN_GROUP,
        )
    }
}
