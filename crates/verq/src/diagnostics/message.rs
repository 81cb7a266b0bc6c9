use std::fmt;

use rowan::TextRange;

/// Structural anomalies the query layer can detect.
///
/// An anomaly never changes what an accessor returns: the accessor still falls back
/// to a deterministic answer and the diagnostic only records that the tree broke a
/// grammar guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// More identifier nodes than the production allows.
    DuplicateIdentifier,
}

impl DiagnosticKind {
    pub fn default_severity(self) -> Severity {
        match self {
            Self::DuplicateIdentifier => Severity::Error,
        }
    }

    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::DuplicateIdentifier => "expected one identifier node",
        }
    }

    /// `fallback: detail`, or the bare fallback without detail.
    pub fn message(self, detail: Option<&str>) -> String {
        match detail {
            Some(detail) => format!("{}: {detail}", self.fallback_message()),
            None => self.fallback_message().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// Secondary location attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Span of the offending subtree.
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.message(None),
            related: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

fn write_range(f: &mut fmt::Formatter<'_>, range: TextRange) -> fmt::Result {
    write!(f, "{}..{}", u32::from(range.start()), u32::from(range.end()))
}

/// `error at 0..10: message (related: note at 6..7)`
impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ", self.severity())?;
        write_range(f, self.range)?;
        write!(f, ": {}", self.message)?;
        for related in &self.related {
            write!(f, " (related: {} at ", related.message)?;
            write_range(f, related.range)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}
