//! Tests for the default facade name resolver.

mod support;

use support::{toks, translate_with};
use tsdart_common::Diagnostic;
use tsdart_emitter::{FacadeResolver, NameResolver, TokenWriter, TranslateOptions};
use tsdart_syntax::Keyword;
use tsdart_syntax::factory::{self, keyword};

fn render_with(resolver: &FacadeResolver, node: &tsdart_syntax::TypeNode) -> Vec<String> {
    translate_with(resolver, &TranslateOptions::default(), node).tokens
}

#[test]
fn test_library_types_are_renamed() {
    let resolver = FacadeResolver::new();

    let promise = factory::type_reference("Promise", Some(vec![keyword(Keyword::Number)]));
    assert_eq!(render_with(&resolver, &promise), toks(&["Future", "<", "num", ">"]));

    let date = factory::type_reference("Date", None);
    assert_eq!(render_with(&resolver, &date), toks(&["DateTime"]));

    let array = factory::type_reference("Array", Some(vec![keyword(Keyword::String)]));
    assert_eq!(render_with(&resolver, &array), toks(&["List", "<", "String", ">"]));

    let record = factory::type_reference(
        "Record",
        Some(vec![keyword(Keyword::String), keyword(Keyword::Boolean)]),
    );
    assert_eq!(
        render_with(&resolver, &record),
        toks(&["Map", "<", "String", ",", "bool", ">"])
    );
}

#[test]
fn test_unknown_names_pass_through() {
    let resolver = FacadeResolver::new();
    let node = factory::type_reference("Widget", None);
    assert_eq!(render_with(&resolver, &node), toks(&["Widget"]));
    assert_eq!(resolver.renamed("Widget"), "Widget");
    assert_eq!(resolver.renamed("Promise"), "Future");
}

#[test]
fn test_option_renames_override_defaults() {
    let options = TranslateOptions::from_json_str(
        r#"{ "typeRenames": { "Observable": "Stream", "Date": "Instant" } }"#,
    )
    .unwrap();
    let resolver = FacadeResolver::from_options(&options);

    let observable = factory::type_reference("Observable", Some(vec![keyword(Keyword::Number)]));
    assert_eq!(
        render_with(&resolver, &observable),
        toks(&["Stream", "<", "num", ">"])
    );
    assert_eq!(
        render_with(&resolver, &factory::type_reference("Date", None)),
        toks(&["Instant"])
    );
    // Defaults not overridden remain in place.
    assert_eq!(
        render_with(&resolver, &factory::type_reference("Promise", None)),
        toks(&["Future"])
    );
}

#[test]
fn test_library_prefix() {
    let options = TranslateOptions::from_json_str(
        r#"{
            "typeRenames": { "Observable": "Stream" },
            "libraryPrefixes": { "Observable": "async" }
        }"#,
    )
    .unwrap();
    let resolver = FacadeResolver::from_options(&options);

    let node = factory::type_reference("Observable", Some(vec![keyword(Keyword::String)]));
    let mut writer = TokenWriter::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    resolver.resolve_type_name(&factory::entity_name("Observable"), &mut writer, &mut diagnostics);
    assert_eq!(writer.finish(), "async.Stream");

    assert_eq!(
        render_with(&resolver, &node),
        toks(&["async", ".", "Stream", "<", "String", ">"])
    );
}

#[test]
fn test_qualified_type_name_full_path_rename() {
    let options = TranslateOptions::from_json_str(
        r#"{ "typeRenames": { "Rx.Observable": "Stream" } }"#,
    )
    .unwrap();
    let resolver = FacadeResolver::from_options(&options);

    let node = factory::type_reference("Rx.Observable", Some(vec![keyword(Keyword::Number)]));
    assert_eq!(render_with(&resolver, &node), toks(&["Stream", "<", "num", ">"]));
}

#[test]
fn test_qualified_type_name_is_otherwise_verbatim() {
    let resolver = FacadeResolver::new();
    // Only a full dotted-path match renames; `Promise` inside a namespace is left alone.
    let node = factory::type_reference("legacy.Promise", None);
    assert_eq!(render_with(&resolver, &node), toks(&["legacy", ".", "Promise"]));
}

#[test]
fn test_qualified_name_node_renders_like_qualified_reference() {
    let options =
        TranslateOptions::from_json_str(r#"{ "libraryPrefixes": { "Stream": "async" } }"#).unwrap();
    let resolver = FacadeResolver::from_options(&options);

    let as_node = factory::qualified_name(factory::entity_name("rx"), "Stream");
    let as_reference = factory::type_reference("rx.Stream", None);
    assert_eq!(render_with(&resolver, &as_node), toks(&["rx", ".", "Stream"]));
    assert_eq!(
        render_with(&resolver, &as_node),
        render_with(&resolver, &as_reference)
    );
}

#[test]
fn test_qualified_name_node_segments_are_not_renamed() {
    let resolver = FacadeResolver::new();

    let node = factory::qualified_name(factory::entity_name("lib"), "Promise");
    assert_eq!(render_with(&resolver, &node), toks(&["lib", ".", "Promise"]));

    let node = factory::qualified_name(factory::entity_name("Date"), "Foo");
    assert_eq!(render_with(&resolver, &node), toks(&["Date", ".", "Foo"]));
}

#[test]
fn test_qualified_name_node_full_path_rename_and_prefix() {
    let options = TranslateOptions::from_json_str(
        r#"{
            "typeRenames": { "Rx.Observable": "Stream" },
            "libraryPrefixes": { "Rx.Observable": "async" }
        }"#,
    )
    .unwrap();
    let resolver = FacadeResolver::from_options(&options);

    let node = factory::qualified_name(factory::entity_name("Rx"), "Observable");
    assert_eq!(
        render_with(&resolver, &node),
        toks(&["async", ".", "Stream"])
    );
    let reference = factory::type_reference("Rx.Observable", Some(vec![keyword(Keyword::Number)]));
    assert_eq!(
        render_with(&resolver, &reference),
        toks(&["async", ".", "Stream", "<", "num", ">"])
    );
}

#[test]
fn test_type_parameter_names_are_not_renamed() {
    let resolver = FacadeResolver::new();
    let node = factory::type_parameter("Date", None);
    assert_eq!(render_with(&resolver, &node), toks(&["Date"]));
}
