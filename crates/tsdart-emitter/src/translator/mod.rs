//! Type Node Translator
//!
//! Renders a TypeScript type node as Dart tokens by pre-order, depth-first
//! recursion over the (acyclic, read-only) type tree.
//!
//! | TypeScript                  | Dart                          |
//! |-----------------------------|-------------------------------|
//! | `number` `string` `boolean` | `num` `String` `bool`         |
//! | `void` `any`                | `void` `dynamic`              |
//! | `T[]`                       | `List<T>`                     |
//! | `{[k: K]: V}`               | `Map<K, V>`                   |
//! | `{a: A}`                    | `dynamic`                     |
//! | `A \| B`                    | `dynamic /* A\|B */`          |
//! | `(a: A) => R`               | `dynamic /* (a: A) => R */`   |
//! | `ns.Foo<T>`                 | resolver(`ns.Foo`)`<T>`       |
//! | `T extends B`               | `T extends B`                 |
//! | `<T>expr`, `expr as T`      | `(expr as T)`                 |
//! | `<T[]>[...]`                | `<T>[...]`                    |
//! | `<{[k: K]: V}>{...}`        | `<K, V>{...}`                 |
//!
//! Tuples, intersections, parenthesized types, literal types and the keyword
//! types without a Dart spelling are not handled: `translate` returns `false`
//! for them so the caller can apply its own fallback. Nested inside a handled
//! node they render as `dynamic`.

mod keywords;
mod map_shape;
mod reified;

pub use keywords::{DYNAMIC, dart_keyword};
pub use map_shape::{IndexShape, MapShapeError, describe_type_literal, destructure_index_type};

use tracing::{debug, debug_span, trace};
use tsdart_common::diagnostics::diagnostic_messages;
use tsdart_common::{DiagnosticSink, Span};
use tsdart_syntax::{QualifiedName, TypeAssertion, TypeLiteral, TypeNode};

use crate::expressions::ExpressionPrinter;
use crate::options::TranslateOptions;
use crate::resolver::NameResolver;
use crate::sink::TokenSink;

/// Output side of a single translation: where tokens and diagnostics go,
/// and how deep the recursion currently is.
struct Cx<'s> {
    out: &'s mut dyn TokenSink,
    diagnostics: &'s mut dyn DiagnosticSink,
    depth: u32,
}

impl Cx<'_> {
    fn emit(&mut self, token: &str) {
        self.out.emit(token);
    }
}

/// Translates TypeScript type nodes into Dart tokens.
///
/// Holds only shared references to its collaborators, so it is `Copy`,
/// `Sync`, and retains no state between calls: translating the same node
/// twice yields the same tokens.
#[derive(Clone, Copy)]
pub struct TypeTranslator<'a> {
    resolver: &'a dyn NameResolver,
    expressions: &'a dyn ExpressionPrinter,
    options: &'a TranslateOptions,
}

impl std::fmt::Debug for TypeTranslator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeTranslator")
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> TypeTranslator<'a> {
    pub fn new(
        resolver: &'a dyn NameResolver,
        expressions: &'a dyn ExpressionPrinter,
        options: &'a TranslateOptions,
    ) -> Self {
        Self {
            resolver,
            expressions,
            options,
        }
    }

    pub fn options(&self) -> &TranslateOptions {
        self.options
    }

    // =========================================================================
    // Entry Points
    // =========================================================================

    /// Emit the Dart rendering of `node` into `out`.
    ///
    /// Returns `false`, emitting nothing, when the node kind is not one the
    /// translator handles. Structural problems are reported to `diagnostics`
    /// and never abort translation.
    pub fn translate(
        &self,
        node: &TypeNode,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> bool {
        let _span = debug_span!("translate_type", kind = node.kind_name()).entered();
        let mut cx = Cx {
            out,
            diagnostics,
            depth: 0,
        };
        let handled = self.visit(node, &mut cx);
        if !handled {
            debug!(kind = node.kind_name(), "type node left to caller");
        }
        handled
    }

    /// Emit a type assertion: as a reified generic literal when possible,
    /// otherwise as a parenthesized cast.
    pub fn translate_assertion(
        &self,
        node: &TypeAssertion,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> bool {
        let mut cx = Cx {
            out,
            diagnostics,
            depth: 0,
        };
        self.visit_type_assertion(node, &mut cx);
        true
    }

    /// Emit `node` as a reified generic literal (`<T>[...]`, `<K, V>{...}`).
    ///
    /// Returns `false`, emitting nothing, when the assertion does not have
    /// one of the two reifiable shapes.
    pub fn try_reified_generic(
        &self,
        node: &TypeAssertion,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> bool {
        let mut cx = Cx {
            out,
            diagnostics,
            depth: 0,
        };
        self.try_reified_literal(node, &mut cx)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn visit(&self, node: &TypeNode, cx: &mut Cx<'_>) -> bool {
        if cx.depth >= self.options.max_type_depth {
            cx.diagnostics.report(
                node.span(),
                &diagnostic_messages::TYPE_NESTING_EXCEEDS_THE_MAXIMUM_DEPTH_OF_TRANSLATED_TO_DYNAMIC,
                &[&self.options.max_type_depth.to_string()],
            );
            debug!(depth = cx.depth, "type nesting limit reached");
            cx.emit(keywords::DYNAMIC);
            return true;
        }

        cx.depth += 1;
        let handled = self.visit_kind(node, cx);
        cx.depth -= 1;
        handled
    }

    fn visit_kind(&self, node: &TypeNode, cx: &mut Cx<'_>) -> bool {
        match node {
            TypeNode::TypeLiteral(literal) => self.visit_type_literal(literal, cx),
            TypeNode::UnionType(union) => {
                // Buffer the members so the same text can feed a lossy-type warning.
                let mut members: Vec<String> = Vec::new();
                {
                    let mut inner = Cx {
                        out: &mut members,
                        diagnostics: &mut *cx.diagnostics,
                        depth: cx.depth,
                    };
                    self.visit_list(&union.types, "|", &mut inner);
                }
                self.report_lossy(union.span, &members.concat(), cx);
                self.emit_fidelity_comment(&members, cx);
            }
            TypeNode::TypeReference(type_ref) => {
                self.resolver
                    .resolve_type_name(&type_ref.type_name, &mut *cx.out, &mut *cx.diagnostics);
                if let Some(args) = &type_ref.type_arguments
                    && !args.is_empty()
                {
                    cx.emit("<");
                    self.visit_list(args, ",", cx);
                    cx.emit(">");
                }
            }
            TypeNode::TypeAssertion(assertion) => self.visit_type_assertion(assertion, cx),
            TypeNode::TypeParameter(param) => {
                cx.emit(&param.name.name);
                if let Some(constraint) = &param.constraint {
                    cx.emit(keywords::EXTENDS);
                    self.visit_child(constraint, cx);
                }
            }
            TypeNode::ArrayType(array) => {
                cx.emit(keywords::LIST);
                cx.emit("<");
                self.visit_child(&array.element_type, cx);
                cx.emit(">");
            }
            TypeNode::FunctionType(func) => {
                self.report_lossy(func.span, &func.text, cx);
                self.emit_fidelity_comment(&[keywords::comment_safe(&func.text)], cx);
            }
            TypeNode::QualifiedName(qualified) => self.visit_qualified_name(qualified, cx),
            TypeNode::Identifier(ident) => {
                self.resolver
                    .resolve_identifier(ident, &mut *cx.out, &mut *cx.diagnostics);
            }
            TypeNode::Keyword(keyword) => {
                let Some(dart) = keywords::dart_keyword(keyword.keyword) else {
                    return false;
                };
                cx.emit(dart);
            }
            TypeNode::TupleType(_)
            | TypeNode::IntersectionType(_)
            | TypeNode::ParenthesizedType(_)
            | TypeNode::LiteralType(_) => return false,
        }
        true
    }

    /// Visit a child type node. Children the translator does not handle are
    /// rendered as `dynamic` so the enclosing type stays well formed.
    fn visit_child(&self, node: &TypeNode, cx: &mut Cx<'_>) {
        if !self.visit(node, cx) {
            debug!(kind = node.kind_name(), "unhandled nested type node; using dynamic");
            cx.emit(keywords::DYNAMIC);
        }
    }

    fn visit_list(&self, nodes: &[TypeNode], separator: &str, cx: &mut Cx<'_>) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                cx.emit(separator);
            }
            self.visit_child(node, cx);
        }
    }

    // =========================================================================
    // Node Kinds
    // =========================================================================

    fn visit_type_literal(&self, literal: &TypeLiteral, cx: &mut Cx<'_>) {
        match self.map_shape(literal, cx) {
            Some(shape) => {
                cx.emit(keywords::MAP);
                cx.emit("<");
                self.visit_child(shape.key, cx);
                cx.emit(",");
                self.visit_child(shape.value, cx);
                cx.emit(">");
            }
            None => {
                trace!("structural type literal; using dynamic");
                self.report_lossy(literal.span, &describe_type_literal(literal), cx);
                cx.emit(keywords::DYNAMIC);
            }
        }
    }

    fn visit_qualified_name(&self, qualified: &QualifiedName, cx: &mut Cx<'_>) {
        self.resolver
            .resolve_qualified_name(qualified, &mut *cx.out, &mut *cx.diagnostics);
    }

    fn visit_type_assertion(&self, node: &TypeAssertion, cx: &mut Cx<'_>) {
        if self.try_reified_literal(node, cx) {
            return;
        }
        cx.emit("(");
        self.expressions
            .print_expression(&node.expression, self, &mut *cx.out, &mut *cx.diagnostics);
        cx.emit(keywords::CAST);
        self.visit_child(&node.type_node, cx);
        cx.emit(")");
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Map shape of `literal`, reporting a malformed sole index signature.
    fn map_shape<'n>(&self, literal: &'n TypeLiteral, cx: &mut Cx<'_>) -> Option<IndexShape<'n>> {
        match destructure_index_type(literal) {
            Ok(shape) => shape,
            Err(err) => {
                err.report(&mut *cx.diagnostics);
                None
            }
        }
    }

    /// `dynamic /* <text> */`
    fn emit_fidelity_comment(&self, text: &[String], cx: &mut Cx<'_>) {
        trace!(text = %text.concat(), "lossy type; using dynamic");
        cx.emit(keywords::DYNAMIC);
        cx.emit(keywords::COMMENT_OPEN);
        for token in text {
            cx.emit(token);
        }
        cx.emit(keywords::COMMENT_CLOSE);
    }

    fn report_lossy(&self, span: Span, text: &str, cx: &mut Cx<'_>) {
        if self.options.report_lossy_types {
            cx.diagnostics.report(
                span,
                &diagnostic_messages::TYPE_HAS_NO_FAITHFUL_DART_EQUIVALENT_AND_WAS_TRANSLATED_TO_DYNAMIC,
                &[text],
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/map_shape_tests.rs"]
mod map_shape_tests;

#[cfg(test)]
#[path = "tests/keywords_tests.rs"]
mod keywords_tests;
