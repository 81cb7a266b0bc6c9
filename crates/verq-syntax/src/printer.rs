use std::fmt::Write;

use rowan::NodeOrToken;

use crate::kind::{SyntaxElement, SyntaxNode};

/// Builder-pattern printer for subtrees.
///
/// Nodes print as `Kind`, leaves as `Kind "text"`, one per line, indented by depth.
pub struct TreePrinter<'e> {
    element: &'e SyntaxElement,
    trivia: bool,
    spans: bool,
}

impl<'e> TreePrinter<'e> {
    pub fn new(element: &'e SyntaxElement) -> Self {
        Self {
            element,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.element {
            NodeOrToken::Node(n) => self.format_node(n, 0, w),
            NodeOrToken::Token(t) => writeln!(
                w,
                "{:?}{} {:?}",
                t.kind(),
                self.span_str(t.text_range()),
                t.text()
            ),
        }
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.text_range()))?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            self.span_str(t.text_range()),
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

/// Renders `element` without trivia or spans.
pub fn dump(element: &SyntaxElement) -> String {
    TreePrinter::new(element).dump()
}
