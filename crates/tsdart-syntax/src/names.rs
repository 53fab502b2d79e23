//! Identifiers and (possibly qualified) entity names.

use serde::{Deserialize, Serialize};
use tsdart_common::Span;

/// A name in type position, e.g. `Foo` in `let x: Foo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// `left.right`, e.g. `ns.Foo` or `a.b.C` (parsed as `(a.b).C`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    pub left: EntityName,
    pub right: Identifier,
    pub span: Span,
}

/// The `typeName` of a type reference: a bare identifier or a qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EntityName {
    Identifier(Identifier),
    QualifiedName(Box<QualifiedName>),
}

impl EntityName {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            EntityName::Identifier(ident) => ident.span,
            EntityName::QualifiedName(qualified) => qualified.span,
        }
    }

    /// The dotted source text, e.g. `a.b.C`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            EntityName::Identifier(ident) => ident.name.clone(),
            EntityName::QualifiedName(qualified) => qualified.text(),
        }
    }
}

impl QualifiedName {
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}.{}", self.left.text(), self.right.name)
    }
}
