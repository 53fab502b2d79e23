//! Diagnostic types and message lookup for the type translator.
//!
//! Message data lives in `data.rs`. Translation never fails with a `Result`:
//! problems are reported into a [`DiagnosticSink`] and translation continues
//! with a best-effort rendering.

use serde::Serialize;

use crate::span::Span;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A translation diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a diagnostic from a message definition, filling `{0}`, `{1}`, ... with `args`.
    #[must_use]
    pub fn from_message(
        file: String,
        span: Span,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file,
            start: span.start,
            length: span.len(),
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
///
/// Returns the template string with `{0}`, `{1}`, etc. placeholders.
/// Use `format_message()` to fill in the placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver of non-fatal diagnostics.
pub trait DiagnosticSink {
    /// Report `message` (a message-table entry) at `span`.
    fn report(&mut self, span: Span, message: &DiagnosticMessage, args: &[&str]);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, span: Span, message: &DiagnosticMessage, args: &[&str]) {
        self.push(Diagnostic::from_message(String::new(), span, message, args));
    }
}

/// Collects diagnostics for a single source file.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DiagnosticBag {
    file: String,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Serialize collected diagnostics as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticBag {
    fn report(&mut self, span: Span, message: &DiagnosticMessage, args: &[&str]) {
        self.diagnostics
            .push(Diagnostic::from_message(self.file.clone(), span, message, args));
    }
}
