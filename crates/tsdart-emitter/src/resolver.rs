//! Type-name resolution.
//!
//! Every identifier or qualified name used as a type is handed to a
//! [`NameResolver`], which decides how it is spelled in Dart.

use rustc_hash::FxHashMap;
use tracing::trace;
use tsdart_common::DiagnosticSink;
use tsdart_syntax::{EntityName, Identifier, QualifiedName};

use crate::options::TranslateOptions;
use crate::sink::TokenSink;

/// Decides the rendered form of names in type position.
///
/// Implementations must be `Send + Sync`: one resolver is shared by every
/// translator, including translators running on other threads.
pub trait NameResolver: Send + Sync {
    /// Emit the Dart spelling of a single identifier.
    fn resolve_identifier(
        &self,
        ident: &Identifier,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    );

    /// Emit the Dart spelling of a dotted name such as `ns.Foo`.
    ///
    /// By default each segment is resolved on its own, left to right.
    fn resolve_qualified_name(
        &self,
        qualified: &QualifiedName,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) {
        self.resolve_type_name(&qualified.left, out, diagnostics);
        out.emit(".");
        self.resolve_identifier(&qualified.right, out, diagnostics);
    }

    /// Emit the Dart spelling of a type reference's name.
    fn resolve_type_name(
        &self,
        name: &EntityName,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) {
        match name {
            EntityName::Identifier(ident) => self.resolve_identifier(ident, out, diagnostics),
            EntityName::QualifiedName(qualified) => {
                self.resolve_qualified_name(qualified, out, diagnostics);
            }
        }
    }
}

/// TypeScript standard-library types with a differently named Dart counterpart.
const DEFAULT_TYPE_RENAMES: &[(&str, &str)] = &[
    ("Array", "List"),
    ("ReadonlyArray", "List"),
    ("Promise", "Future"),
    ("PromiseLike", "Future"),
    ("Date", "DateTime"),
    ("Record", "Map"),
    ("ReadonlyMap", "Map"),
    ("ReadonlySet", "Set"),
    ("Symbol", "dynamic"),
];

/// Table-driven resolver mapping TypeScript library types onto their Dart facades.
///
/// Names are looked up by their full dotted text: `Rx.Observable` matches a
/// `Rx.Observable` entry and never an `Observable` one. A match is renamed
/// and then prefixed with its library prefix if one is configured; anything
/// else is emitted as written.
#[derive(Clone, Debug)]
pub struct FacadeResolver {
    renames: FxHashMap<String, String>,
    library_prefixes: FxHashMap<String, String>,
}

impl Default for FacadeResolver {
    fn default() -> Self {
        Self::from_options(&TranslateOptions::default())
    }
}

impl FacadeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in renames overlaid with `options.type_renames`.
    pub fn from_options(options: &TranslateOptions) -> Self {
        let mut renames: FxHashMap<String, String> = DEFAULT_TYPE_RENAMES
            .iter()
            .map(|&(from, to)| (from.to_string(), to.to_string()))
            .collect();
        renames.extend(
            options
                .type_renames
                .iter()
                .map(|(from, to)| (from.clone(), to.clone())),
        );
        Self {
            renames,
            library_prefixes: options.library_prefixes.clone(),
        }
    }

    /// The Dart spelling of `name` without any library prefix.
    pub fn renamed<'n>(&'n self, name: &'n str) -> &'n str {
        self.renames.get(name).map_or(name, String::as_str)
    }

    fn emit_prefixed(&self, path: &str, out: &mut dyn TokenSink) {
        if let Some(prefix) = self.library_prefixes.get(path) {
            out.emit(prefix);
            out.emit(".");
        }
    }

    fn emit_verbatim(name: &EntityName, out: &mut dyn TokenSink) {
        match name {
            EntityName::Identifier(ident) => out.emit(&ident.name),
            EntityName::QualifiedName(qualified) => {
                Self::emit_verbatim(&qualified.left, out);
                out.emit(".");
                out.emit(&qualified.right.name);
            }
        }
    }
}

impl NameResolver for FacadeResolver {
    fn resolve_identifier(
        &self,
        ident: &Identifier,
        out: &mut dyn TokenSink,
        _diagnostics: &mut dyn DiagnosticSink,
    ) {
        let renamed = self.renamed(&ident.name);
        if renamed != ident.name {
            trace!(from = %ident.name, to = renamed, "renamed type");
        }
        self.emit_prefixed(&ident.name, out);
        out.emit(renamed);
    }

    fn resolve_qualified_name(
        &self,
        qualified: &QualifiedName,
        out: &mut dyn TokenSink,
        _diagnostics: &mut dyn DiagnosticSink,
    ) {
        let path = qualified.text();
        self.emit_prefixed(&path, out);
        match self.renames.get(&path) {
            Some(renamed) => {
                trace!(from = %path, to = %renamed, "renamed type");
                out.emit(renamed);
            }
            None => {
                Self::emit_verbatim(&qualified.left, out);
                out.emit(".");
                out.emit(&qualified.right.name);
            }
        }
    }
}
