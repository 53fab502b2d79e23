//! Shared fixtures for the emitter integration tests.

#![allow(dead_code)]

use tsdart_common::{Diagnostic, DiagnosticSink};
use tsdart_emitter::{
    NameResolver, SourceExpressionPrinter, TokenSink, TokenWriter, TranslateOptions, TypeTranslator,
};
use tsdart_syntax::{Identifier, TypeAssertion, TypeNode};

/// Emits every identifier exactly as written.
pub struct EchoResolver;

impl NameResolver for EchoResolver {
    fn resolve_identifier(
        &self,
        ident: &Identifier,
        out: &mut dyn TokenSink,
        _diagnostics: &mut dyn DiagnosticSink,
    ) {
        out.emit(&ident.name);
    }
}

pub struct Translation {
    pub handled: bool,
    pub tokens: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn translate_with(
    resolver: &dyn NameResolver,
    options: &TranslateOptions,
    node: &TypeNode,
) -> Translation {
    let translator = TypeTranslator::new(resolver, &SourceExpressionPrinter, options);
    let mut tokens: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let handled = translator.translate(node, &mut tokens, &mut diagnostics);
    Translation {
        handled,
        tokens,
        diagnostics,
    }
}

pub fn translate(node: &TypeNode) -> Translation {
    translate_with(&EchoResolver, &TranslateOptions::default(), node)
}

pub fn translate_assertion(node: TypeAssertion) -> Translation {
    translate(&TypeNode::TypeAssertion(Box::new(node)))
}

/// Formatted Dart text of `node`.
pub fn render(node: &TypeNode) -> String {
    let options = TranslateOptions::default();
    let translator = TypeTranslator::new(&EchoResolver, &SourceExpressionPrinter, &options);
    let mut writer = TokenWriter::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    translator.translate(node, &mut writer, &mut diagnostics);
    writer.finish()
}

pub fn toks(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_string()).collect()
}
