//! Construction of frozen syntax trees.
//!
//! The parser (or a test fixture) drives a `TreeBuilder`; the result is a `SyntaxTree`
//! that is never mutated again. Misuse is recorded, not panicked on: the first
//! violation poisons the builder and `finish()` reports it.

use rowan::{GreenNode, GreenNodeBuilder, GreenNodeData, Language, NodeOrToken};

use crate::kind::{SyntaxKind, SyntaxNode, VerilogLang};

/// Errors from building a tree with mismatched calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("`{0:?}` is not a node kind")]
    NotANodeKind(SyntaxKind),

    #[error("`{0:?}` is not a token kind")]
    NotATokenKind(SyntaxKind),

    #[error("`{0:?}` must be nested inside a node")]
    LeafOutsideNode(SyntaxKind),

    #[error("`finish_node` called with no open node")]
    UnbalancedFinish,

    #[error("{0} node(s) left open")]
    Unclosed(u32),

    #[error("tree has no root node")]
    NoRoot,

    #[error("tree has more than one root node")]
    MultipleRoots,

    #[error("raw kind {0} is not a Verilog syntax kind")]
    UnknownKind(u16),
}

/// An immutable syntax tree.
///
/// Owns the green tree, which is `Send + Sync`. Cursors (`SyntaxNode`) are not;
/// every thread calls `root()` to get its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    green: GreenNode,
}

impl SyntaxTree {
    /// Creates a cursor at the root. Cheap: the green tree is shared, not copied.
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Source text covered by the tree.
    pub fn text(&self) -> String {
        self.root().text().to_string()
    }
}

/// Adopts a green tree built elsewhere, after checking every kind in it.
impl TryFrom<GreenNode> for SyntaxTree {
    type Error = BuildError;

    fn try_from(green: GreenNode) -> Result<Self, BuildError> {
        check_green(&green)?;
        Ok(Self { green })
    }
}

fn check_green(node: &GreenNodeData) -> Result<(), BuildError> {
    let kind = check_kind(node.kind())?;
    if !kind.is_node() {
        return Err(BuildError::NotANodeKind(kind));
    }
    for child in node.children() {
        match child {
            NodeOrToken::Node(n) => check_green(n)?,
            NodeOrToken::Token(t) => {
                let kind = check_kind(t.kind())?;
                if !kind.is_token() {
                    return Err(BuildError::NotATokenKind(kind));
                }
            }
        }
    }
    Ok(())
}

fn check_kind(raw: rowan::SyntaxKind) -> Result<SyntaxKind, BuildError> {
    if raw.0 >= SyntaxKind::__LAST as u16 {
        return Err(BuildError::UnknownKind(raw.0));
    }
    Ok(VerilogLang::kind_from_raw(raw))
}

pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
    depth: u32,
    roots: u32,
    error: Option<BuildError>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            depth: 0,
            roots: 0,
            error: None,
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if !kind.is_node() {
            return self.poison(BuildError::NotANodeKind(kind));
        }
        if self.depth == 0 {
            if self.roots > 0 {
                return self.poison(BuildError::MultipleRoots);
            }
            self.roots += 1;
        }
        self.depth += 1;
        self.builder.start_node(kind.into());
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if self.depth == 0 {
            return self.poison(BuildError::UnbalancedFinish);
        }
        self.depth -= 1;
        self.builder.finish_node();
        self
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if !kind.is_token() {
            return self.poison(BuildError::NotATokenKind(kind));
        }
        if self.depth == 0 {
            return self.poison(BuildError::LeafOutsideNode(kind));
        }
        self.builder.token(kind.into(), text);
        self
    }

    /// Fills the next slot with an absent-element placeholder.
    pub fn empty(&mut self) -> &mut Self {
        if self.error.is_none() && self.depth == 0 {
            return self.poison(BuildError::LeafOutsideNode(SyntaxKind::Empty));
        }
        self.start_node(SyntaxKind::Empty).finish_node()
    }

    /// Opens `kind`, lets `children` fill its slots, then closes it.
    pub fn node(&mut self, kind: SyntaxKind, children: impl FnOnce(&mut Self)) -> &mut Self {
        self.start_node(kind);
        children(self);
        self.finish_node()
    }

    pub fn finish(self) -> Result<SyntaxTree, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.depth > 0 {
            return Err(BuildError::Unclosed(self.depth));
        }
        if self.roots == 0 {
            return Err(BuildError::NoRoot);
        }
        Ok(SyntaxTree {
            green: self.builder.finish(),
        })
    }

    fn poison(&mut self, err: BuildError) -> &mut Self {
        self.error = Some(err);
        self
    }
}
