//! Diagnostics sink for structural anomalies.
//!
//! Accessors that can detect a broken grammar guarantee take `&mut Diagnostics`.
//! Emitting is observational: each message is stored here and mirrored to `tracing`.

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

/// Anomalies collected while querying one tree, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a diagnostic of `kind` spanning `range`, carrying the kind's fallback
    /// message until `.message()` supplies detail. Nothing is recorded before `.emit()`.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            sink: self,
            pending: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        self.messages.as_slice()
    }

    /// Number of diagnostics at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.iter().filter(|d| d.severity() == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.iter().any(DiagnosticMessage::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.iter().any(DiagnosticMessage::is_warning)
    }

    /// Appends `other` after the messages already collected.
    pub fn extend(&mut self, other: impl IntoIterator<Item = DiagnosticMessage>) {
        self.messages.extend(other);
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl IntoIterator for Diagnostics {
    type Item = DiagnosticMessage;
    type IntoIter = std::vec::IntoIter<DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    sink: &'a mut Diagnostics,
    pending: DiagnosticMessage,
}

impl DiagnosticBuilder<'_> {
    /// Detail appended to the kind's fallback message.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail: String = detail.into();
        self.pending.message = self.pending.kind.message(Some(&detail));
        self
    }

    /// Points at a second location, e.g. the occurrence a fallback picked.
    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.pending.related.push(RelatedInfo::new(range, msg));
        self
    }

    /// Records the diagnostic and logs it at its severity.
    pub fn emit(self) {
        let Self { sink, pending } = self;
        let (start, end) = (u32::from(pending.range.start()), u32::from(pending.range.end()));
        match pending.severity() {
            Severity::Error => tracing::error!(
                target: "verq::diagnostics",
                kind = ?pending.kind,
                start,
                end,
                "{}",
                pending.message
            ),
            Severity::Warning => tracing::warn!(
                target: "verq::diagnostics",
                kind = ?pending.kind,
                start,
                end,
                "{}",
                pending.message
            ),
        }
        sink.messages.push(pending);
    }
}
