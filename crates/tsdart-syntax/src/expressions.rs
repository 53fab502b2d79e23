//! Expression shapes that can appear under a type assertion.
//!
//! Only array and object literals are modeled structurally; everything else
//! is opaque source text.

use serde::{Deserialize, Serialize};
use tsdart_common::Span;

use crate::types::TypeAssertion;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    ArrayLiteral(ArrayLiteral),
    ObjectLiteral(ObjectLiteral),
    TypeAssertion(Box<TypeAssertion>),
    Opaque(OpaqueExpression),
}

impl Expression {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Expression::ArrayLiteral(e) => e.span,
            Expression::ObjectLiteral(e) => e.span,
            Expression::TypeAssertion(e) => e.span,
            Expression::Opaque(e) => e.span,
        }
    }

}

/// `[a, b, c]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub span: Span,
}

/// `{a: 1, 'b': 2}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectLiteral {
    pub properties: Vec<PropertyAssignment>,
    pub span: Span,
}

/// `name: initializer`. `name` is the unquoted property name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyAssignment {
    pub name: String,
    pub initializer: Expression,
    pub span: Span,
}

/// Any expression the translator does not look into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueExpression {
    pub text: String,
    pub span: Span,
}
