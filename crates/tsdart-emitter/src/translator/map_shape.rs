//! Map-shaped type literals.
//!
//! `{[key: K]: V}` is the only structural type with a faithful Dart
//! rendering: `Map<K, V>`. A type literal is map-shaped iff it has exactly
//! one member and that member is an index signature.

use tsdart_common::diagnostics::diagnostic_messages;
use tsdart_common::{DiagnosticSink, Span};
use tsdart_syntax::{TypeLiteral, TypeMember, TypeNode};

/// Key and value types of a map-shaped type literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexShape<'n> {
    pub key: &'n TypeNode,
    pub value: &'n TypeNode,
}

/// A sole index signature that cannot be read as a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapShapeError {
    /// The signature declares zero or several parameters.
    Arity { span: Span, found: usize },
    /// The parameter or the signature itself has no type annotation.
    MissingTypeAnnotation { span: Span },
}

impl MapShapeError {
    pub fn report(&self, diagnostics: &mut dyn DiagnosticSink) {
        match *self {
            MapShapeError::Arity { span, found } => diagnostics.report(
                span,
                &diagnostic_messages::INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER_FOUND,
                &[&found.to_string()],
            ),
            MapShapeError::MissingTypeAnnotation { span } => diagnostics.report(
                span,
                &diagnostic_messages::INDEX_SIGNATURE_IS_MISSING_A_TYPE_ANNOTATION,
                &[],
            ),
        }
    }
}

/// Split a map-shaped type literal into its key and value types.
///
/// Returns `Ok(None)` when the literal is not map-shaped (no members, several
/// members, or a sole member that is not an index signature) and `Err` when
/// the sole index signature is malformed. Signatures with several parameters
/// are rejected rather than truncated to the first one.
pub fn destructure_index_type(
    literal: &TypeLiteral,
) -> Result<Option<IndexShape<'_>>, MapShapeError> {
    let [TypeMember::IndexSignature(signature)] = literal.members.as_slice() else {
        return Ok(None);
    };

    let [parameter] = signature.parameters.as_slice() else {
        return Err(MapShapeError::Arity {
            span: signature.span,
            found: signature.parameters.len(),
        });
    };

    match (&parameter.type_annotation, &signature.type_annotation) {
        (Some(key), Some(value)) => Ok(Some(IndexShape { key, value })),
        _ => Err(MapShapeError::MissingTypeAnnotation {
            span: signature.span,
        }),
    }
}

/// One-line summary of a type literal's members, e.g. `{ a; b(); [k] }`.
pub fn describe_type_literal(literal: &TypeLiteral) -> String {
    if literal.members.is_empty() {
        return "{}".to_string();
    }
    let members: Vec<String> = literal
        .members
        .iter()
        .map(|member| match member {
            TypeMember::IndexSignature(sig) => {
                let names: Vec<&str> =
                    sig.parameters.iter().map(|p| p.name.name.as_str()).collect();
                format!("[{}]", names.join(", "))
            }
            TypeMember::PropertySignature(prop) if prop.optional => format!("{}?", prop.name.name),
            TypeMember::PropertySignature(prop) => prop.name.name.clone(),
            TypeMember::MethodSignature(method) => format!("{}()", method.name.name),
            TypeMember::CallSignature(_) => "()".to_string(),
            TypeMember::ConstructSignature(_) => "new()".to_string(),
        })
        .collect();
    format!("{{ {} }}", members.join("; "))
}
