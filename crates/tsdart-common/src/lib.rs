//! Common types and utilities for the tsdart translator.
//!
//! This crate provides foundational types used across all tsdart crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticSink`, `DiagnosticBag`) and the message table
//! - Translation limits and thresholds
//! - Tracing subscriber setup

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;
#[cfg(test)]
#[path = "tests/span_tests.rs"]
mod span_tests;

// Diagnostics reported while translating type nodes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticCategory, DiagnosticSink};
#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;

// Centralized limits and thresholds
pub mod limits;

// Tracing subscriber configuration (TSDART_LOG / TSDART_LOG_FORMAT)
pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
