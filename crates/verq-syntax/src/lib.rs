#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Concrete syntax tree model for Verilog/SystemVerilog.
//!
//! The tree is a Rowan green tree: tagged internal nodes with ordered child slots,
//! and leaf tokens carrying their source text. Absent optional grammar elements
//! occupy their slot as a zero-width `SyntaxKind::Empty` node, so slot positions
//! stay fixed per production (see [`slots`]).
//!
//! Trees are built once through [`TreeBuilder`] and never mutated afterwards.

pub mod builder;
pub mod kind;
pub mod printer;
pub mod slots;


pub use builder::{BuildError, SyntaxTree, TreeBuilder};
pub use kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet, VerilogLang, token_sets};
pub use printer::{TreePrinter, dump};
