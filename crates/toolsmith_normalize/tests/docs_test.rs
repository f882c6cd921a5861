//! Tests for documentation extractors.

use toolsmith_normalize::{DocExtractor, DocStyle, GoogleDocs, PlainDocs, RustDocs};

#[test]
fn test_google_summary_and_args() {
    let docs = GoogleDocs.extract(
        "Search the web for a query.\n\
         \n\
         Args:\n\
         \x20   query (str): Text to search for\n\
         \x20   limit: Maximum number of results,\n\
         \x20       capped at fifty\n\
         \n\
         Returns:\n\
         \x20   A list of results.\n",
    );

    assert_eq!(docs.summary(), "Search the web for a query.");
    assert_eq!(docs.param("query"), Some("Text to search for"));
    assert_eq!(
        docs.param("limit"),
        Some("Maximum number of results, capped at fifty")
    );
    assert_eq!(docs.params().len(), 2);
}

#[test]
fn test_google_multi_paragraph_summary() {
    let docs = GoogleDocs.extract(
        "First line\ncontinues here.\n\nSecond paragraph.\n\nRaises:\n    ValueError: never",
    );
    assert_eq!(docs.summary(), "First line continues here.\n\nSecond paragraph.");
    assert!(docs.params().is_empty());
}

#[test]
fn test_google_attributes_and_star_args() {
    let docs = GoogleDocs.extract("Model.\n\nAttributes:\n    name: The name\n\nKeyword Args:\n    **extra: Anything else");
    assert_eq!(docs.param("name"), Some("The name"));
    assert_eq!(docs.param("extra"), Some("Anything else"));
}

#[test]
fn test_google_without_sections() {
    let docs = GoogleDocs.extract("  Just a summary.  ");
    assert_eq!(docs.summary(), "Just a summary.");
    assert!(docs.params().is_empty());
}

#[test]
fn test_rustdoc_arguments() {
    let docs = RustDocs.extract(
        "Multiply two integers together.\n\n# Arguments\n\n* `a` - First integer\n* `b` - Second\n  integer\n\n# Errors\n\nNever fails.",
    );
    assert_eq!(docs.summary(), "Multiply two integers together.");
    assert_eq!(docs.param("a"), Some("First integer"));
    assert_eq!(docs.param("b"), Some("Second integer"));
    assert_eq!(docs.params().len(), 2);
}

#[test]
fn test_plain_keeps_everything() {
    let docs = PlainDocs.extract("Does a thing.\n\nArgs:\n    a: ignored");
    assert_eq!(docs.summary(), "Does a thing.\n\nArgs: a: ignored");
    assert!(docs.params().is_empty());
}

#[test]
fn test_doc_style_parsing() {
    assert_eq!("google".parse::<DocStyle>().unwrap(), DocStyle::Google);
    assert_eq!("RUSTDOC".parse::<DocStyle>().unwrap(), DocStyle::Rustdoc);
    assert!("numpy".parse::<DocStyle>().is_err());
    assert_eq!(DocStyle::Plain.to_string(), "plain");
    assert_eq!(DocStyle::default(), DocStyle::Google);
}

#[test]
fn test_doc_style_extractor() {
    let docs = DocStyle::Google.extractor().extract("Hi.\n\nArgs:\n    x: An x");
    assert_eq!(docs.param("x"), Some("An x"));
}

#[test]
fn test_google_params_named_like_sections() {
    let docs = GoogleDocs.extract(
        "Render a widget.\n\
         \n\
         Args:\n\
         \x20   example:\n\
         \x20       Sample input to render\n\
         \x20   returns: Whether to return the widget\n\
         \x20   size: Widget size\n\
         \n\
         Returns:\n\
         \x20   The rendered widget.\n",
    );

    assert_eq!(docs.param("example"), Some("Sample input to render"));
    assert_eq!(docs.param("returns"), Some("Whether to return the widget"));
    assert_eq!(docs.param("size"), Some("Widget size"));
    assert_eq!(docs.params().len(), 3);
}
