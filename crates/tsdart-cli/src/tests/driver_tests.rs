use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tsdart_common::diagnostics::diagnostic_codes;
use tsdart_common::{DiagnosticCategory, Span};
use tsdart_emitter::TranslateOptions;
use tsdart_syntax::factory::{self, keyword};
use tsdart_syntax::{IndexSignature, Keyword, TypeMember, TypeNode};

use crate::args::{CliArgs, DiagnosticsFormat};
use crate::driver::{format_diagnostic, parse_input, resolve_options, run, translate_document};

fn sample_nodes() -> Vec<TypeNode> {
    vec![
        factory::array_type(keyword(Keyword::Number)),
        factory::type_reference("Promise", Some(vec![keyword(Keyword::String)])),
        keyword(Keyword::Unknown),
    ]
}

fn args(input: PathBuf) -> CliArgs {
    CliArgs {
        input,
        options: None,
        report_lossy_types: false,
        max_type_depth: None,
        diagnostics: DiagnosticsFormat::Text,
    }
}

#[test]
fn test_cli_args_parse() {
    let parsed = CliArgs::try_parse_from([
        "tsdart",
        "types.json",
        "-p",
        "tsdart.json",
        "--reportLossyTypes",
        "--max-type-depth",
        "32",
        "--diagnostics",
        "json",
    ])
    .unwrap();
    assert_eq!(parsed.input, PathBuf::from("types.json"));
    assert_eq!(parsed.options, Some(PathBuf::from("tsdart.json")));
    assert!(parsed.report_lossy_types);
    assert_eq!(parsed.max_type_depth, Some(32));
    assert_eq!(parsed.diagnostics, DiagnosticsFormat::Json);

    assert!(CliArgs::try_parse_from(["tsdart"]).is_err());
}

#[test]
fn test_parse_input_accepts_one_node_or_many() {
    let node = factory::array_type(keyword(Keyword::Boolean));
    let one = serde_json::to_string(&node).unwrap();
    assert_eq!(parse_input(&one).unwrap(), vec![node.clone()]);

    let many = serde_json::to_string(&vec![node.clone(), node.clone()]).unwrap();
    assert_eq!(parse_input(&many).unwrap().len(), 2);

    let err = parse_input(r#"{ "kind": "Nonsense" }"#).unwrap_err();
    assert!(err.to_string().contains("invalid type node document"));
}

#[test]
fn test_translate_document_renders_one_line_per_node() {
    let output = translate_document("a.ts", &sample_nodes(), &TranslateOptions::default());
    assert_eq!(output.lines, vec!["List<num>", "Future<String>", "dynamic"]);
    assert_eq!(output.unhandled, vec!["UnknownKeyword"]);
    assert!(output.diagnostics.diagnostics().is_empty());
    assert_eq!(output.diagnostics.file(), "a.ts");
}

#[test]
fn test_translate_document_collects_diagnostics() {
    let malformed = TypeMember::IndexSignature(IndexSignature {
        parameters: vec![factory::parameter("k", Some(keyword(Keyword::String)))],
        type_annotation: None,
        span: Span::new(4, 20),
    });
    let nodes = vec![
        factory::union_type(vec![keyword(Keyword::String), keyword(Keyword::Number)]),
        factory::type_literal_node(vec![malformed]),
    ];
    let output = translate_document("b.ts", &nodes, &TranslateOptions::default());

    assert_eq!(output.lines, vec!["dynamic /* String|num */", "dynamic"]);
    let codes: Vec<u32> = output.diagnostics.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![diagnostic_codes::INDEX_SIGNATURE_IS_MISSING_A_TYPE_ANNOTATION]
    );
    assert!(output.diagnostics.has_errors());
    assert_eq!(output.diagnostics.diagnostics()[0].file, "b.ts");
}

#[test]
fn test_command_line_flags_override_options_file() {
    let mut options_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        options_file,
        r#"{{ "maxTypeDepth": 8, "typeRenames": {{ "Foo": "Bar" }} }}"#
    )
    .unwrap();

    let mut cli = args(PathBuf::from("unused.json"));
    cli.options = Some(options_file.path().to_path_buf());
    cli.report_lossy_types = true;
    let options = resolve_options(&cli).unwrap();
    assert!(options.report_lossy_types);
    assert_eq!(options.max_type_depth, 8);
    assert_eq!(options.type_renames.get("Foo").map(String::as_str), Some("Bar"));

    cli.max_type_depth = Some(2);
    assert_eq!(resolve_options(&cli).unwrap().max_type_depth, 2);
}

#[test]
fn test_run_translates_input_file() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "{}", serde_json::to_string(&sample_nodes()).unwrap()).unwrap();

    let output = run(&args(input.path().to_path_buf())).unwrap();
    assert_eq!(output.lines, vec!["List<num>", "Future<String>", "dynamic"]);
    assert_eq!(output.diagnostics.file(), input.path().display().to_string());
}

#[test]
fn test_run_names_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&args(dir.path().join("missing.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn test_format_diagnostic() {
    let options = TranslateOptions {
        report_lossy_types: true,
        ..TranslateOptions::default()
    };
    let output = translate_document("c.ts", &[factory::function_type("() => void")], &options);
    let diagnostic = &output.diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.category, DiagnosticCategory::Warning);
    assert_eq!(
        format_diagnostic(diagnostic),
        "c.ts(0): warning TSD90004: Type '() => void' has no faithful Dart equivalent and was translated to 'dynamic'."
    );
}
