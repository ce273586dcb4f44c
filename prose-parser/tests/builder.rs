//! End-to-end construction scenarios through the public API.

use prose_parser::prose::ast::Document;
use prose_parser::prose::lexing::LexError;
use prose_parser::prose::testing::factories::{punctuation, sentence, whitespace, word};

#[test]
fn one_line_splits_into_complete_sentences() {
    let doc = Document::from_source("Hello, world! Bye.").unwrap();
    assert_eq!(doc.len(), 1);

    let paragraph = &doc.paragraphs()[0];
    assert_eq!(paragraph.len(), 2);
    assert_eq!(paragraph.sentences()[0].to_string(), "Hello, world!");
    // The space between sentences opens the second sentence
    assert_eq!(paragraph.sentences()[1].to_string(), " Bye.");
}

#[test]
fn sentence_tokens_match_the_classifier_output() {
    let doc = Document::from_source("Hello, world! Bye.").unwrap();
    let paragraph = &doc.paragraphs()[0];
    assert_eq!(
        paragraph.sentences()[0],
        sentence(vec![
            word("Hello"),
            punctuation(","),
            whitespace(" "),
            word("world"),
            punctuation("!"),
        ])
    );
    assert_eq!(
        paragraph.sentences()[1],
        sentence(vec![whitespace(" "), word("Bye"), punctuation(".")])
    );
}

#[test]
fn unterminated_line_contributes_an_empty_paragraph() {
    let doc = Document::from_source("no ending here").unwrap();
    assert_eq!(doc.len(), 1);
    assert!(doc.paragraphs()[0].is_empty());
}

#[test]
fn round_trip_drops_the_unterminated_tail() {
    let doc = Document::from_source("Kept. dropped tail").unwrap();
    assert_eq!(doc.to_string(), "Kept.");
}

#[test]
fn untransformed_terminated_input_round_trips() {
    let source = "A number: 12.345,67 and (quotes)!\nSecond line?";
    let doc = Document::from_source(source).unwrap();
    assert_eq!(doc.to_string(), "A number: 12.345,67 and (quotes)!\n\nSecond line?");
}

#[test]
fn blank_and_whitespace_lines_yield_empty_paragraphs() {
    let doc = Document::from_source("First.\n\n   \nLast.").unwrap();
    assert_eq!(doc.len(), 4);
    assert!(doc.paragraphs()[1].is_empty());
    assert!(doc.paragraphs()[2].is_empty());
    assert_eq!(doc.paragraphs()[3].to_string(), "Last.");
}

#[test]
fn from_lines_accepts_owned_and_borrowed_lines() {
    let borrowed = Document::from_lines(["One.", "Two!"]).unwrap();
    let owned = Document::from_lines(vec!["One.".to_string(), "Two!".to_string()]).unwrap();
    assert_eq!(borrowed, owned);
    assert_eq!(borrowed.len(), 2);
}

#[test]
fn classification_failure_propagates_from_any_line() {
    let result = Document::from_source("First is fine.\nsecond has a € sign.");
    assert_eq!(
        result,
        Err(LexError::InvalidToken("€ sign.".to_string()))
    );
}

#[test]
fn sentences_never_span_lines() {
    let doc = Document::from_source("dangling start\nfinished here.").unwrap();
    assert!(doc.paragraphs()[0].is_empty());
    assert_eq!(doc.paragraphs()[1].len(), 1);
    assert_eq!(doc.paragraphs()[1].to_string(), "finished here.");
}
