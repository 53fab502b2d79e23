//! TypeScript type-syntax tree.
//!
//! This crate models the type-bearing subset of an already parsed TypeScript
//! source file: type expressions, the members of type literals, entity names,
//! and the handful of expression shapes a type assertion can wrap. The tree is
//! built once by the parser and only read afterwards.
//!
//! All nodes derive `Serialize`/`Deserialize` so trees can be captured as
//! JSON fixtures.

pub mod names;
pub use names::{EntityName, Identifier, QualifiedName};

pub mod types;
pub use types::{
    ArrayType, FunctionType, IndexSignature, IntersectionType, Keyword, KeywordType, LiteralType,
    MethodSignature, Parameter, ParenthesizedType, PropertySignature, SignatureText, TupleType,
    TypeAssertion, TypeLiteral, TypeMember, TypeNode, TypeParameter, TypeReference, UnionType,
};

pub mod expressions;
pub use expressions::{
    ArrayLiteral, Expression, ObjectLiteral, OpaqueExpression, PropertyAssignment,
};

// Builders for synthesized trees
pub mod factory;

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod types_tests;
