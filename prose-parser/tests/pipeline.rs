//! Transform pipeline scenarios over built documents.

use std::collections::HashSet;

use prose_parser::prose::ast::Document;
use prose_parser::prose::loader::DocumentLoader;
use prose_parser::prose::transforms::stages::{Lowercase, StripLiterals, StripWhitespace};
use prose_parser::prose::transforms::standard::STRING_TO_DOCUMENT;
use prose_parser::prose::transforms::Transform;

#[test]
fn case_folding_touches_words_only() {
    let doc = Document::from_source("Call ACME at 555, now!").unwrap();
    assert_eq!(doc.lower().to_string(), "call acme at 555, now!");
    assert_eq!(doc.upper().to_string(), "CALL ACME AT 555, NOW!");
}

#[test]
fn filtering_preserves_sentence_grouping() {
    let doc = Document::from_source("Hello, world! Bye.").unwrap();
    let stripped = doc.without_punctuation();
    assert_eq!(stripped.paragraphs()[0].len(), 2);
    assert_eq!(stripped.paragraphs()[0].sentences()[0].to_string(), "Hello world");
    assert_eq!(stripped.paragraphs()[0].sentences()[1].to_string(), " Bye");
}

#[test]
fn without_is_case_sensitive_and_exact() {
    let literals: HashSet<String> = ["the".to_string()].into_iter().collect();
    let doc = Document::from_source("the theme of The play.").unwrap();
    // Only the standalone lowercase word goes; "theme" and "The" stay
    assert_eq!(doc.without(&literals).to_string(), " theme of The play.");
}

#[test]
fn without_drops_matching_tokens_of_any_kind() {
    let literals: HashSet<String> = [",".to_string(), "9".to_string()].into_iter().collect();
    let doc = Document::from_source("so, 9 lives.").unwrap();
    assert_eq!(doc.without(&literals).to_string(), "so  lives.");
}

#[test]
fn transforms_leave_the_input_untouched() {
    let doc = Document::from_source("Keep Me Intact.").unwrap();
    let _ = doc.lower().without_whitespace();
    assert_eq!(doc.to_string(), "Keep Me Intact.");
}

#[test]
fn loader_runs_assembled_pipelines() {
    let pipeline = Transform::from_fn(Ok)
        .then_transform(&STRING_TO_DOCUMENT)
        .then(Lowercase::new())
        .then(StripWhitespace::new());
    let doc = DocumentLoader::from_string("Tight Fit.")
        .with(&pipeline)
        .unwrap();
    assert_eq!(doc.to_string(), "tightfit.");
}

#[test]
fn strip_literals_composes_with_other_stages() {
    let literals: HashSet<String> = ["noise".to_string()].into_iter().collect();
    let pipeline = Transform::from_fn(Ok)
        .then_transform(&STRING_TO_DOCUMENT)
        .then(StripLiterals::new(literals));
    let doc = pipeline.run("signal noise signal.".to_string()).unwrap();
    assert_eq!(doc.to_string(), "signal  signal.");
}
