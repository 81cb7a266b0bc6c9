//! Verq: structural queries over Verilog/SystemVerilog concrete syntax trees.
//!
//! Two layers sit on top of the [`verq_syntax`] tree model:
//!
//! - [`search`] finds every subtree matching a [`Matcher`], in document order.
//! - [`access`] fetches fixed-position children, degrading to `None` on any
//!   unexpected shape.
//!
//! [`port`] composes both into extractors for port constructs.
//!
//! # Example
//!
//! ```
//! use verq::port::{PortItem, find_all_task_function_port_items};
//! use verq_syntax::{SyntaxKind, TreeBuilder};
//!
//! let mut b = TreeBuilder::new();
//! b.node(SyntaxKind::PortItem, |b| {
//!     b.token(SyntaxKind::KwInput, "input");
//!     b.node(SyntaxKind::DataTypeImplicitBasicIdDimensions, |b| {
//!         b.empty().token(SyntaxKind::SymbolIdentifier, "step").empty();
//!     });
//! });
//! let tree = b.finish().expect("balanced tree");
//!
//! let items = find_all_task_function_port_items(&tree.root());
//! let item = PortItem::cast(items[0].node.clone()).unwrap();
//! assert_eq!(item.identifier().unwrap().text(), "step");
//! assert!(item.data_type().is_none());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod access;
pub mod diagnostics;
pub mod identifier;
pub mod matcher;
pub mod port;
pub mod search;

#[cfg(test)]
mod test_utils;

pub use access::{child_at, child_leaf_at, child_node_at};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use matcher::{Matcher, matchers};
pub use search::{SearchMatch, SearchRoot, search};
