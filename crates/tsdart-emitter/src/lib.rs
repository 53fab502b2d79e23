//! TypeScript-to-Dart type translation.
//!
//! The [`TypeTranslator`](translator::TypeTranslator) walks a TypeScript type
//! node and emits the equivalent Dart type as a stream of tokens. Where Dart
//! has no faithful equivalent (structural object types, unions, function
//! types) it falls back to `dynamic` and keeps the original type text in an
//! adjacent comment.
//!
//! ```text
//! number[]                 -> List<num>
//! {[k: string]: boolean}   -> Map<String, bool>
//! string | number          -> dynamic /* String|num */
//! <string[]>[]             -> <String>[]
//! ```
//!
//! The translator owns no formatting and no name resolution. It is wired to
//! three collaborators:
//! - a [`TokenSink`](sink::TokenSink) receiving tokens in order
//!   ([`TokenWriter`](sink::TokenWriter) formats them as Dart source),
//! - a [`NameResolver`](resolver::NameResolver) deciding how type names are
//!   spelled ([`FacadeResolver`](resolver::FacadeResolver) by default),
//! - an [`ExpressionPrinter`](expressions::ExpressionPrinter) rendering the
//!   operand of a type assertion.

pub mod sink;
pub use sink::{TokenSink, TokenWriter};

pub mod options;
pub use options::TranslateOptions;

pub mod resolver;
pub use resolver::{FacadeResolver, NameResolver};

pub mod expressions;
pub use expressions::{ExpressionPrinter, SourceExpressionPrinter};

pub mod translator;
pub use translator::TypeTranslator;
