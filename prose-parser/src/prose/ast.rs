//! Document model: sentences, paragraphs, documents.
//!
//!     The hierarchy is Document → Paragraph → Sentence → Token. Each
//!     container exclusively owns its children; there is no sharing and no
//!     back-references. The containers are wrapper types over ordered
//!     sequences, exposing only the sanctioned operations: append during
//!     construction (crate-internal, used by the builder), structural
//!     transform and filter, and rendering. Every transform or filter
//!     returns a fresh, independently owned structure of the same shape;
//!     the input is never mutated.
//!
//! Membership invariants
//!
//!     A sentence placed into a paragraph ends with a terminal punctuation
//!     token (`.`, `?`, `!`) — the builder only closes sentences on such a
//!     token. A paragraph holds the complete sentences of exactly one input
//!     line, and may be empty. A document holds one paragraph per input
//!     line, in input order.
//!
//!     Filtering operates on tokens inside every sentence; it never merges,
//!     reorders, or drops sentences or paragraphs, even when a filtered
//!     sentence becomes empty.

use crate::prose::building;
use crate::prose::lexing::LexError;
use crate::prose::token::{detokenize, Token};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// An ordered sequence of tokens forming one sentence.
///
/// Rendering concatenates the tokens' text in order, so an untransformed
/// sentence reproduces its slice of the source line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new() -> Self {
        Sentence { tokens: Vec::new() }
    }

    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        Sentence { tokens }
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Map every token through `f`, producing a new sentence.
    pub fn transform<F>(&self, f: F) -> Sentence
    where
        F: Fn(&Token) -> Token,
    {
        Sentence {
            tokens: self.tokens.iter().map(f).collect(),
        }
    }

    /// Keep only the tokens for which `keep` holds.
    pub fn filter<F>(&self, keep: F) -> Sentence
    where
        F: Fn(&Token) -> bool,
    {
        Sentence {
            tokens: self.tokens.iter().filter(|t| keep(t)).cloned().collect(),
        }
    }

    /// Case-fold every word token to lowercase.
    pub fn lower(&self) -> Sentence {
        self.transform(Token::lowercased)
    }

    /// Case-fold every word token to uppercase.
    pub fn upper(&self) -> Sentence {
        self.transform(Token::uppercased)
    }

    /// Drop all punctuation tokens.
    pub fn without_punctuation(&self) -> Sentence {
        self.filter(|t| !t.is_punctuation())
    }

    /// Drop punctuation tokens except sentence terminals.
    pub fn without_punctuation_except_terminal(&self) -> Sentence {
        self.filter(|t| !t.is_punctuation() || t.is_terminal())
    }

    /// Drop all whitespace tokens.
    pub fn without_whitespace(&self) -> Sentence {
        self.filter(|t| !t.is_whitespace())
    }

    /// Drop all number tokens.
    pub fn without_numbers(&self) -> Sentence {
        self.filter(|t| !t.is_number())
    }

    /// Drop any token whose text equals a member of `literals`, whatever
    /// its kind.
    pub fn without(&self, literals: &HashSet<String>) -> Sentence {
        self.filter(|t| !literals.contains(t.text()))
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&detokenize(&self.tokens))
    }
}

/// The complete sentences derived from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn new() -> Self {
        Paragraph {
            sentences: Vec::new(),
        }
    }

    pub(crate) fn from_sentences(sentences: Vec<Sentence>) -> Self {
        Paragraph { sentences }
    }

    pub(crate) fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Map every sentence through `f`, producing a new paragraph.
    pub fn transform<F>(&self, f: F) -> Paragraph
    where
        F: Fn(&Sentence) -> Sentence,
    {
        Paragraph {
            sentences: self.sentences.iter().map(f).collect(),
        }
    }

    /// Keep only the sentences for which `keep` holds.
    pub fn filter<F>(&self, keep: F) -> Paragraph
    where
        F: Fn(&Sentence) -> bool,
    {
        Paragraph {
            sentences: self.sentences.iter().filter(|s| keep(s)).cloned().collect(),
        }
    }

    pub fn lower(&self) -> Paragraph {
        self.transform(Sentence::lower)
    }

    pub fn upper(&self) -> Paragraph {
        self.transform(Sentence::upper)
    }

    pub fn without_punctuation(&self) -> Paragraph {
        self.transform(Sentence::without_punctuation)
    }

    pub fn without_punctuation_except_terminal(&self) -> Paragraph {
        self.transform(Sentence::without_punctuation_except_terminal)
    }

    pub fn without_whitespace(&self) -> Paragraph {
        self.transform(Sentence::without_whitespace)
    }

    pub fn without_numbers(&self) -> Paragraph {
        self.transform(Sentence::without_numbers)
    }

    pub fn without(&self, literals: &HashSet<String>) -> Paragraph {
        self.transform(|s| s.without(literals))
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sentence in &self.sentences {
            write!(f, "{}", sentence)?;
        }
        Ok(())
    }
}

/// An ordered sequence of paragraphs, one per input line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            paragraphs: Vec::new(),
        }
    }

    pub(crate) fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Document { paragraphs }
    }

    pub(crate) fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Build a document from source text, one paragraph per line.
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        building::document_from_source(source)
    }

    /// Build a document from an ordered sequence of line strings.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        building::document_from_lines(lines)
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Paragraph> {
        self.paragraphs.iter()
    }

    /// Every token in the document, in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.paragraphs
            .iter()
            .flat_map(|p| p.iter().flat_map(Sentence::iter))
    }

    /// Map every paragraph through `f`, producing a new document.
    pub fn transform<F>(&self, f: F) -> Document
    where
        F: Fn(&Paragraph) -> Paragraph,
    {
        Document {
            paragraphs: self.paragraphs.iter().map(f).collect(),
        }
    }

    /// Keep only the paragraphs for which `keep` holds.
    pub fn filter<F>(&self, keep: F) -> Document
    where
        F: Fn(&Paragraph) -> bool,
    {
        Document {
            paragraphs: self
                .paragraphs
                .iter()
                .filter(|p| keep(p))
                .cloned()
                .collect(),
        }
    }

    pub fn lower(&self) -> Document {
        self.transform(Paragraph::lower)
    }

    pub fn upper(&self) -> Document {
        self.transform(Paragraph::upper)
    }

    pub fn without_punctuation(&self) -> Document {
        self.transform(Paragraph::without_punctuation)
    }

    pub fn without_punctuation_except_terminal(&self) -> Document {
        self.transform(Paragraph::without_punctuation_except_terminal)
    }

    pub fn without_whitespace(&self) -> Document {
        self.transform(Paragraph::without_whitespace)
    }

    pub fn without_numbers(&self) -> Document {
        self.transform(Paragraph::without_numbers)
    }

    pub fn without(&self, literals: &HashSet<String>) -> Document {
        self.transform(|p| p.without(literals))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.paragraphs.iter().map(Paragraph::to_string).collect();
        f.write_str(&rendered.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prose::testing::factories::{
        document, paragraph, punctuation, sentence, whitespace, word,
    };

    fn greeting() -> Sentence {
        sentence(vec![
            word("Hello"),
            punctuation(","),
            whitespace(" "),
            word("world"),
            punctuation("!"),
        ])
    }

    #[test]
    fn sentence_renders_by_concatenation() {
        assert_eq!(greeting().to_string(), "Hello, world!");
    }

    #[test]
    fn transform_returns_a_fresh_sentence() {
        let original = greeting();
        let lowered = original.lower();
        assert_eq!(lowered.to_string(), "hello, world!");
        assert_eq!(original.to_string(), "Hello, world!");
    }

    #[test]
    fn filter_preserves_order_of_survivors() {
        let stripped = greeting().without_punctuation();
        assert_eq!(stripped.to_string(), "Hello world");
        assert_eq!(stripped.len(), 3);
    }

    #[test]
    fn without_punctuation_except_terminal_keeps_the_ender() {
        let stripped = greeting().without_punctuation_except_terminal();
        assert_eq!(stripped.to_string(), "Hello world!");
    }

    #[test]
    fn without_matches_literal_text_exactly() {
        let literals: HashSet<String> = ["Hello".to_string()].into_iter().collect();
        let stripped = greeting().without(&literals);
        assert_eq!(stripped.to_string(), ", world!");
    }

    #[test]
    fn paragraph_renders_sentences_in_order() {
        let p = paragraph(vec![
            sentence(vec![word("One"), punctuation(".")]),
            sentence(vec![whitespace(" "), word("Two"), punctuation(".")]),
        ]);
        assert_eq!(p.to_string(), "One. Two.");
    }

    #[test]
    fn paragraph_filters_delegate_to_every_sentence() {
        let p = paragraph(vec![
            sentence(vec![word("A"), punctuation("!")]),
            sentence(vec![word("B"), punctuation("?")]),
        ]);
        let stripped = p.without_punctuation();
        assert_eq!(stripped.len(), 2);
        assert_eq!(stripped.to_string(), "AB");
    }

    #[test]
    fn empty_sentences_survive_filtering() {
        let p = paragraph(vec![sentence(vec![punctuation(".")])]);
        let stripped = p.without_punctuation();
        assert_eq!(stripped.len(), 1);
        assert!(stripped.sentences()[0].is_empty());
    }

    #[test]
    fn document_renders_paragraphs_joined_by_blank_line() {
        let doc = document(vec![
            paragraph(vec![sentence(vec![word("One"), punctuation(".")])]),
            paragraph(vec![]),
            paragraph(vec![sentence(vec![word("Two"), punctuation(".")])]),
        ]);
        assert_eq!(doc.to_string(), "One.\n\n\n\nTwo.");
    }

    #[test]
    fn empty_document_renders_empty() {
        assert_eq!(Document::new().to_string(), "");
    }

    #[test]
    fn tokens_iterates_in_document_order() {
        let doc = document(vec![
            paragraph(vec![sentence(vec![word("a"), punctuation(".")])]),
            paragraph(vec![sentence(vec![word("b"), punctuation("!")])]),
        ]);
        let texts: Vec<&str> = doc.tokens().map(Token::text).collect();
        assert_eq!(texts, vec!["a", ".", "b", "!"]);
    }

    #[test]
    fn child_level_filter_drops_whole_paragraphs() {
        let doc = document(vec![
            paragraph(vec![sentence(vec![word("keep"), punctuation(".")])]),
            paragraph(vec![]),
        ]);
        let kept = doc.filter(|p| !p.is_empty());
        assert_eq!(kept.len(), 1);
    }
}
