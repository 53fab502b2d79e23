//! Reading and translating one input document.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info_span};
use tsdart_common::{Diagnostic, DiagnosticBag, DiagnosticCategory};
use tsdart_emitter::{
    FacadeResolver, SourceExpressionPrinter, TokenWriter, TranslateOptions, TypeTranslator,
};
use tsdart_syntax::TypeNode;

use crate::args::CliArgs;

/// Rendered in place of a top-level node the translator leaves to its caller.
const UNHANDLED_FALLBACK: &str = "dynamic";

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Many(Vec<TypeNode>),
    One(TypeNode),
}

/// Result of translating one input document.
#[derive(Debug)]
pub struct TranslationOutput {
    /// One Dart type per input node, in input order.
    pub lines: Vec<String>,
    pub diagnostics: DiagnosticBag,
    /// Kind names of top-level nodes that were rendered as `dynamic` by the driver.
    pub unhandled: Vec<&'static str>,
}

/// Options file (if any) with command-line overrides applied on top.
pub fn resolve_options(args: &CliArgs) -> Result<TranslateOptions> {
    let mut options = match &args.options {
        Some(path) => TranslateOptions::load(path)?,
        None => TranslateOptions::default(),
    };
    if args.report_lossy_types {
        options.report_lossy_types = true;
    }
    if let Some(depth) = args.max_type_depth {
        options.max_type_depth = depth;
    }
    Ok(options)
}

/// Parse a JSON document holding one type node or an array of them.
pub fn parse_input(text: &str) -> Result<Vec<TypeNode>> {
    let document: InputDocument =
        serde_json::from_str(text).context("invalid type node document")?;
    Ok(match document {
        InputDocument::Many(nodes) => nodes,
        InputDocument::One(node) => vec![node],
    })
}

/// Translate every node of `file`, collecting diagnostics into one bag.
pub fn translate_document(
    file: &str,
    nodes: &[TypeNode],
    options: &TranslateOptions,
) -> TranslationOutput {
    let _span = info_span!("translate_document", file, nodes = nodes.len()).entered();
    let resolver = FacadeResolver::from_options(options);
    let translator = TypeTranslator::new(&resolver, &SourceExpressionPrinter, options);
    let mut diagnostics = DiagnosticBag::new(file);
    let mut unhandled = Vec::new();

    let lines: Vec<String> = nodes
        .iter()
        .map(|node| {
            let mut writer = TokenWriter::new();
            if translator.translate(node, &mut writer, &mut diagnostics) {
                writer.finish()
            } else {
                debug!(kind = node.kind_name(), "top-level node left to driver");
                unhandled.push(node.kind_name());
                UNHANDLED_FALLBACK.to_string()
            }
        })
        .collect();

    TranslationOutput {
        lines,
        diagnostics,
        unhandled,
    }
}

/// Read `path` and translate its contents.
pub fn translate_file(path: &Path, options: &TranslateOptions) -> Result<TranslationOutput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let nodes =
        parse_input(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(translate_document(&path.display().to_string(), &nodes, options))
}

pub fn run(args: &CliArgs) -> Result<TranslationOutput> {
    let options = resolve_options(args)?;
    translate_file(&args.input, &options)
}

/// `file(start): error TSD90001: message`
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let category = match diagnostic.category {
        DiagnosticCategory::Error => "error",
        DiagnosticCategory::Warning => "warning",
        DiagnosticCategory::Suggestion => "suggestion",
        DiagnosticCategory::Message => "message",
    };
    format!(
        "{}({}): {} TSD{}: {}",
        diagnostic.file, diagnostic.start, category, diagnostic.code, diagnostic.message_text
    )
}
