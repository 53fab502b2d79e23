//! Rendering of type-assertion operands.

use tsdart_common::DiagnosticSink;
use tsdart_syntax::Expression;

use crate::sink::TokenSink;
use crate::translator::TypeTranslator;

/// Renders the expression wrapped by a type assertion.
///
/// The printer receives the translator so nested type assertions can re-enter it.
pub trait ExpressionPrinter: Send + Sync {
    fn print_expression(
        &self,
        expression: &Expression,
        translator: &TypeTranslator<'_>,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    );
}

/// Prints array and object literals structurally and anything else as its
/// original source text. Identifier keys are emitted as single-quoted strings,
/// Dart map literals having no bare-identifier keys; numeric keys stay numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceExpressionPrinter;

impl SourceExpressionPrinter {
    fn is_numeric_key(name: &str) -> bool {
        if let Some(hex) = name.strip_prefix("0x").or_else(|| name.strip_prefix("0X")) {
            return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        name.starts_with(|c: char| c.is_ascii_digit())
            && !name.ends_with('.')
            && name.parse::<f64>().is_ok()
    }

    fn quote_key(name: &str) -> String {
        if name.starts_with('\'') || name.starts_with('"') || Self::is_numeric_key(name) {
            name.to_string()
        } else {
            format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
        }
    }
}

impl ExpressionPrinter for SourceExpressionPrinter {
    fn print_expression(
        &self,
        expression: &Expression,
        translator: &TypeTranslator<'_>,
        out: &mut dyn TokenSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) {
        match expression {
            Expression::ArrayLiteral(array) => {
                out.emit("[");
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        out.emit(",");
                    }
                    self.print_expression(element, translator, out, diagnostics);
                }
                out.emit("]");
            }
            Expression::ObjectLiteral(object) => {
                out.emit("{");
                for (i, property) in object.properties.iter().enumerate() {
                    if i > 0 {
                        out.emit(",");
                    }
                    out.emit(&Self::quote_key(&property.name));
                    out.emit(":");
                    self.print_expression(&property.initializer, translator, out, diagnostics);
                }
                out.emit("}");
            }
            Expression::TypeAssertion(assertion) => {
                translator.translate_assertion(assertion, out, diagnostics);
            }
            Expression::Opaque(opaque) => out.emit(&opaque.text),
        }
    }
}
