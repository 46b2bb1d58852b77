//! Diagnostic records and the append-only sink that collects them

use text_size::TextSize;

use super::codes::DiagCode;
use crate::base::{LineCol, LineIndex};

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Input is malformed; the tree contains placeholders or skipped text
    #[default]
    Error,
    /// Input is suspicious but well-formed
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A (code, location) record with optional detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagCode,
    /// Byte offset the diagnostic points at
    pub location: TextSize,
    pub severity: Severity,
    /// Overrides the code's default message
    pub message: Option<String>,
}

impl Diagnostic {
    pub fn new(code: DiagCode, location: TextSize) -> Self {
        Self {
            code,
            location,
            severity: Severity::Error,
            message: None,
        }
    }

    /// Set the message
    pub fn with_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Set the severity
    pub fn with_severity(&mut self, severity: Severity) -> &mut Self {
        self.severity = severity;
        self
    }

    /// Message to show, falling back to the code's default
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.code.default_message())
    }

    pub fn line_col(&self, index: &LineIndex) -> LineCol {
        index.line_col(self.location)
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        format!("{}[{}]: {}", self.severity.as_str(), self.code, self.message())
    }
}

/// Append-only, ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) -> &mut Diagnostic {
        let index = self.items.len();
        self.items.push(diagnostic);
        &mut self.items[index]
    }

    pub fn add_error(&mut self, code: DiagCode, location: TextSize) -> &mut Diagnostic {
        self.add(Diagnostic::new(code, location))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|diag| diag.severity.is_error())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Codes in insertion order
    pub fn codes(&self) -> Vec<DiagCode> {
        self.items.iter().map(|diag| diag.code).collect()
    }

    /// Stable sort by location; diagnostics at one offset keep their order
    pub fn sort_by_location(&mut self) {
        self.items.sort_by_key(|diag| diag.location);
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
