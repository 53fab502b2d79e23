//! Builders for synthesized type trees.
//!
//! Every node gets `Span::dummy()`. Drivers that rewrite types (and the test
//! suites) use these instead of spelling out struct literals.

use tsdart_common::Span;

use crate::expressions::{
    ArrayLiteral, Expression, ObjectLiteral, OpaqueExpression, PropertyAssignment,
};
use crate::names::{EntityName, Identifier, QualifiedName};
use crate::types::{
    ArrayType, FunctionType, IndexSignature, Keyword, KeywordType, Parameter, PropertySignature,
    TypeAssertion, TypeLiteral, TypeMember, TypeNode, TypeParameter, TypeReference, UnionType,
};

#[must_use]
pub fn identifier(name: &str) -> Identifier {
    Identifier {
        name: name.to_string(),
        span: Span::dummy(),
    }
}

/// Parse a dotted path (`a.b.C`) into a left-associated entity name.
#[must_use]
pub fn entity_name(path: &str) -> EntityName {
    let mut parts = path.split('.');
    let mut name = EntityName::Identifier(identifier(parts.next().unwrap_or_default()));
    for part in parts {
        name = EntityName::QualifiedName(Box::new(QualifiedName {
            left: name,
            right: identifier(part),
            span: Span::dummy(),
        }));
    }
    name
}

#[must_use]
pub fn keyword(keyword: Keyword) -> TypeNode {
    TypeNode::Keyword(KeywordType {
        keyword,
        span: Span::dummy(),
    })
}

#[must_use]
pub fn type_identifier(name: &str) -> TypeNode {
    TypeNode::Identifier(identifier(name))
}

#[must_use]
pub fn qualified_name(left: EntityName, right: &str) -> TypeNode {
    TypeNode::QualifiedName(Box::new(QualifiedName {
        left,
        right: identifier(right),
        span: Span::dummy(),
    }))
}

#[must_use]
pub fn type_reference(path: &str, type_arguments: Option<Vec<TypeNode>>) -> TypeNode {
    TypeNode::TypeReference(TypeReference {
        type_name: entity_name(path),
        type_arguments,
        span: Span::dummy(),
    })
}

#[must_use]
pub fn array_type(element_type: TypeNode) -> TypeNode {
    TypeNode::ArrayType(Box::new(ArrayType {
        element_type,
        span: Span::dummy(),
    }))
}

#[must_use]
pub fn union_type(types: Vec<TypeNode>) -> TypeNode {
    TypeNode::UnionType(UnionType {
        types,
        span: Span::dummy(),
    })
}

#[must_use]
pub fn function_type(text: &str) -> TypeNode {
    TypeNode::FunctionType(FunctionType {
        text: text.to_string(),
        span: Span::dummy(),
    })
}

#[must_use]
pub fn type_parameter(name: &str, constraint: Option<TypeNode>) -> TypeNode {
    TypeNode::TypeParameter(Box::new(TypeParameter {
        name: identifier(name),
        constraint,
        span: Span::dummy(),
    }))
}

#[must_use]
pub fn parameter(name: &str, type_annotation: Option<TypeNode>) -> Parameter {
    Parameter {
        name: identifier(name),
        type_annotation,
        span: Span::dummy(),
    }
}

/// `[name: key_type]: value_type`
#[must_use]
pub fn index_signature(name: &str, key_type: TypeNode, value_type: TypeNode) -> TypeMember {
    TypeMember::IndexSignature(IndexSignature {
        parameters: vec![parameter(name, Some(key_type))],
        type_annotation: Some(value_type),
        span: Span::dummy(),
    })
}

#[must_use]
pub fn property_signature(name: &str, type_annotation: Option<TypeNode>) -> TypeMember {
    TypeMember::PropertySignature(PropertySignature {
        name: identifier(name),
        optional: false,
        type_annotation,
        span: Span::dummy(),
    })
}

#[must_use]
pub fn type_literal(members: Vec<TypeMember>) -> TypeLiteral {
    TypeLiteral {
        members,
        span: Span::dummy(),
    }
}

#[must_use]
pub fn type_literal_node(members: Vec<TypeMember>) -> TypeNode {
    TypeNode::TypeLiteral(type_literal(members))
}

#[must_use]
pub fn type_assertion(expression: Expression, type_node: TypeNode) -> TypeAssertion {
    TypeAssertion {
        expression,
        type_node,
        span: Span::dummy(),
    }
}

#[must_use]
pub fn array_literal(elements: Vec<Expression>) -> Expression {
    Expression::ArrayLiteral(ArrayLiteral {
        elements,
        span: Span::dummy(),
    })
}

#[must_use]
pub fn object_literal(properties: Vec<(&str, Expression)>) -> Expression {
    Expression::ObjectLiteral(ObjectLiteral {
        properties: properties
            .into_iter()
            .map(|(name, initializer)| PropertyAssignment {
                name: name.to_string(),
                initializer,
                span: Span::dummy(),
            })
            .collect(),
        span: Span::dummy(),
    })
}

#[must_use]
pub fn opaque(text: &str) -> Expression {
    Expression::Opaque(OpaqueExpression {
        text: text.to_string(),
        span: Span::dummy(),
    })
}
