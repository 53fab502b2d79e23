//! Reified generic literals.
//!
//! TypeScript types a list or map literal after the fact (`<string[]>[]`,
//! `{} as {[k: string]: number}`); Dart wants the type arguments written
//! in front of the literal (`<String>[]`, `<String, num>{}`). Assertions of
//! those two shapes are reordered instead of being rendered as casts.

use tracing::trace;
use tsdart_common::diagnostics::diagnostic_messages;
use tsdart_syntax::{Expression, TypeAssertion, TypeNode};

use super::map_shape::destructure_index_type;
use super::{Cx, TypeTranslator};

impl TypeTranslator<'_> {
    pub(super) fn try_reified_literal(&self, node: &TypeAssertion, cx: &mut Cx<'_>) -> bool {
        match (&node.expression, &node.type_node) {
            (Expression::ArrayLiteral(_), TypeNode::ArrayType(array)) => {
                trace!("reified list literal");
                cx.emit("<");
                self.visit_child(&array.element_type, cx);
                cx.emit(">");
            }
            (Expression::ObjectLiteral(_), TypeNode::TypeLiteral(literal)) => {
                // A malformed index signature is reported again, with its own
                // message, when the cast fallback visits the type literal.
                let Ok(Some(shape)) = destructure_index_type(literal) else {
                    cx.diagnostics.report(
                        node.span,
                        &diagnostic_messages::EXPECTED_A_SINGLE_PARAMETER_INDEX_SIGNATURE_TYPE_LITERAL_ON_AN_OBJECT_LITERAL,
                        &[],
                    );
                    return false;
                };
                trace!("reified map literal");
                cx.emit("<");
                self.visit_child(shape.key, cx);
                cx.emit(",");
                self.visit_child(shape.value, cx);
                cx.emit(">");
            }
            _ => return false,
        }

        self.expressions
            .print_expression(&node.expression, self, &mut *cx.out, &mut *cx.diagnostics);
        true
    }
}
