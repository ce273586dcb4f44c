//! Test factories for the prose model.
//!
//! Tests assemble tokens and containers through these helpers instead of
//! hand-building structures, keeping the construction path in one place.
//! The token factories go through the validated constructors and panic on
//! out-of-class text, so a typo in a test fixture fails loudly.

pub mod factories {
    use crate::prose::ast::{Document, Paragraph, Sentence};
    use crate::prose::token::Token;

    /// A word token; panics on text outside the word class.
    pub fn word(text: &str) -> Token {
        Token::word(text).expect("word factory text")
    }

    /// A punctuation token; panics on text outside the punctuation class.
    pub fn punctuation(text: &str) -> Token {
        Token::punctuation(text).expect("punctuation factory text")
    }

    /// A number token; panics on text outside the number class.
    pub fn number(text: &str) -> Token {
        Token::number(text).expect("number factory text")
    }

    /// A whitespace token; panics on text outside the whitespace class.
    pub fn whitespace(text: &str) -> Token {
        Token::whitespace(text).expect("whitespace factory text")
    }

    /// A sentence from the given token sequence.
    pub fn sentence(tokens: Vec<Token>) -> Sentence {
        Sentence::from_tokens(tokens)
    }

    /// A paragraph from the given sentences.
    pub fn paragraph(sentences: Vec<Sentence>) -> Paragraph {
        Paragraph::from_sentences(sentences)
    }

    /// A document from the given paragraphs.
    pub fn document(paragraphs: Vec<Paragraph>) -> Document {
        Document::from_paragraphs(paragraphs)
    }
}
