//! Rendering of collected diagnostics.
//!
//! Without a source text every diagnostic is one plain line (its `Display` form).
//! Given the text the tree was built from, each renders as an annotated snippet
//! with related locations marked as context.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// Text covered by the tree the diagnostics were reported against.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// File name shown in the snippet header. Ignored without a source.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match self.source {
                Some(source) => {
                    let group = snippet_group(diag, source, self.path);
                    write!(w, "{}", renderer.render(&[group]))?;
                }
                None => write!(w, "{diag}")?,
            }
        }
        Ok(())
    }
}

fn snippet_group<'a>(diag: &'a DiagnosticMessage, source: &'a str, path: Option<&'a str>) -> Group<'a> {
    let len = source.len();
    // Unlabeled: the title carries the message.
    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(snippet_range(diag.range, len)));
    if let Some(path) = path {
        snippet = snippet.path(path);
    }
    let snippet = diag.related.iter().fold(snippet, |snippet, related| {
        snippet.annotation(
            AnnotationKind::Context
                .span(snippet_range(related.range, len))
                .label(&related.message),
        )
    });

    level(diag.severity())
        .primary_title(&diag.message)
        .element(snippet)
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Byte range clamped to the source; zero-width ranges widen to one byte so the
/// marker stays visible.
fn snippet_range(range: TextRange, len: usize) -> Range<usize> {
    let start = usize::from(range.start()).min(len);
    let end = usize::from(range.end()).min(len);
    if start == end {
        return start..(end + 1).min(len);
    }
    start..end
}
