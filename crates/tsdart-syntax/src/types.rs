//! Type expressions and type-literal members.

use serde::{Deserialize, Serialize};
use tsdart_common::Span;

use crate::expressions::Expression;
use crate::names::{EntityName, Identifier, QualifiedName};

// =============================================================================
// Type Nodes
// =============================================================================

/// A syntax node occurring in a type-annotation position.
///
/// Variants cover every kind the type translator dispatches on plus the
/// kinds it deliberately leaves to its caller (tuples, intersections,
/// parenthesized and literal types).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeNode {
    TypeLiteral(TypeLiteral),
    UnionType(UnionType),
    TypeReference(TypeReference),
    TypeAssertion(Box<TypeAssertion>),
    TypeParameter(Box<TypeParameter>),
    ArrayType(Box<ArrayType>),
    FunctionType(FunctionType),
    QualifiedName(Box<QualifiedName>),
    Identifier(Identifier),
    Keyword(KeywordType),
    TupleType(TupleType),
    IntersectionType(IntersectionType),
    ParenthesizedType(Box<ParenthesizedType>),
    LiteralType(LiteralType),
}

impl TypeNode {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            TypeNode::TypeLiteral(n) => n.span,
            TypeNode::UnionType(n) => n.span,
            TypeNode::TypeReference(n) => n.span,
            TypeNode::TypeAssertion(n) => n.span,
            TypeNode::TypeParameter(n) => n.span,
            TypeNode::ArrayType(n) => n.span,
            TypeNode::FunctionType(n) => n.span,
            TypeNode::QualifiedName(n) => n.span,
            TypeNode::Identifier(n) => n.span,
            TypeNode::Keyword(n) => n.span,
            TypeNode::TupleType(n) => n.span,
            TypeNode::IntersectionType(n) => n.span,
            TypeNode::ParenthesizedType(n) => n.span,
            TypeNode::LiteralType(n) => n.span,
        }
    }

    /// Syntax kind name, used in logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::TypeLiteral(_) => "TypeLiteral",
            TypeNode::UnionType(_) => "UnionType",
            TypeNode::TypeReference(_) => "TypeReference",
            TypeNode::TypeAssertion(_) => "TypeAssertion",
            TypeNode::TypeParameter(_) => "TypeParameter",
            TypeNode::ArrayType(_) => "ArrayType",
            TypeNode::FunctionType(_) => "FunctionType",
            TypeNode::QualifiedName(_) => "QualifiedName",
            TypeNode::Identifier(_) => "Identifier",
            TypeNode::Keyword(k) => k.keyword.kind_name(),
            TypeNode::TupleType(_) => "TupleType",
            TypeNode::IntersectionType(_) => "IntersectionType",
            TypeNode::ParenthesizedType(_) => "ParenthesizedType",
            TypeNode::LiteralType(_) => "LiteralType",
        }
    }
}

/// `{ a: string; [k: string]: number }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeLiteral {
    pub members: Vec<TypeMember>,
    pub span: Span,
}

/// `A | B | C`. Always holds at least one member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionType {
    pub types: Vec<TypeNode>,
    pub span: Span,
}

/// `Foo`, `ns.Foo<T, U>`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeReference {
    pub type_name: EntityName,
    pub type_arguments: Option<Vec<TypeNode>>,
    pub span: Span,
}

/// `<T>expr` or `expr as T`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertion {
    pub expression: Expression,
    pub type_node: TypeNode,
    pub span: Span,
}

/// `T` or `T extends Bound` in a type parameter list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: Identifier,
    pub constraint: Option<TypeNode>,
    pub span: Span,
}

/// `T[]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub element_type: TypeNode,
    pub span: Span,
}

/// `(a: A) => R`, kept opaque: only the verbatim source text is retained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub text: String,
    pub span: Span,
}

/// `[A, B]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TupleType {
    pub elements: Vec<TypeNode>,
    pub span: Span,
}

/// `A & B`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionType {
    pub types: Vec<TypeNode>,
    pub span: Span,
}

/// `(T)`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedType {
    pub type_node: TypeNode,
    pub span: Span,
}

/// A literal type such as `"on"`, `42` or `true`, kept as source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralType {
    pub text: String,
    pub span: Span,
}

// =============================================================================
// Keywords
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Number,
    String,
    Boolean,
    Void,
    Any,
    Unknown,
    Never,
    Null,
    Undefined,
    Object,
    Symbol,
    BigInt,
}

impl Keyword {
    #[must_use]
    pub const fn kind_name(self) -> &'static str {
        match self {
            Keyword::Number => "NumberKeyword",
            Keyword::String => "StringKeyword",
            Keyword::Boolean => "BooleanKeyword",
            Keyword::Void => "VoidKeyword",
            Keyword::Any => "AnyKeyword",
            Keyword::Unknown => "UnknownKeyword",
            Keyword::Never => "NeverKeyword",
            Keyword::Null => "NullKeyword",
            Keyword::Undefined => "UndefinedKeyword",
            Keyword::Object => "ObjectKeyword",
            Keyword::Symbol => "SymbolKeyword",
            Keyword::BigInt => "BigIntKeyword",
        }
    }

}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordType {
    pub keyword: Keyword,
    pub span: Span,
}

// =============================================================================
// Type Literal Members
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeMember {
    IndexSignature(IndexSignature),
    PropertySignature(PropertySignature),
    MethodSignature(MethodSignature),
    CallSignature(SignatureText),
    ConstructSignature(SignatureText),
}

impl TypeMember {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            TypeMember::IndexSignature(m) => m.span,
            TypeMember::PropertySignature(m) => m.span,
            TypeMember::MethodSignature(m) => m.span,
            TypeMember::CallSignature(m) | TypeMember::ConstructSignature(m) => m.span,
        }
    }
}

/// `[key: K]: V`. The grammar allows exactly one parameter; recovered parse
/// trees may carry zero or several.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSignature {
    pub parameters: Vec<Parameter>,
    pub type_annotation: Option<TypeNode>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Identifier,
    pub type_annotation: Option<TypeNode>,
    pub span: Span,
}

/// `name?: T`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: Identifier,
    pub optional: bool,
    pub type_annotation: Option<TypeNode>,
    pub span: Span,
}

/// `name(a: A): R`, kept as source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: Identifier,
    pub text: String,
    pub span: Span,
}

/// Call or construct signature (`(a: A): R`, `new (a: A): R`), kept as source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureText {
    pub text: String,
    pub span: Span,
}
