//! Core token type for the prose model.
//!
//! A token is an immutable lexeme belonging to exactly one of four lexical
//! kinds: word, punctuation, number, or whitespace. The kind is always
//! re-verifiable from the text: the public constructors validate their input
//! against the kind's anchored pattern and fail with
//! [`LexError::InvalidConstruction`] when the text does not belong to the
//! class. Tokens are produced by the classifier (see
//! [`classify`](crate::prose::lexing::classify)) or by the kind-preserving
//! case transforms; construction is validated either way.

use crate::prose::lexing::LexError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// Anchored character-class patterns, one per kind, in classifier priority
// order. Compiled once and treated as read-only configuration.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z-]+$").unwrap());
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\]\[.,;:?!(){}_@#/&$%~`'"*=+-]$"#).unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)*$").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+$").unwrap());

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Word,
    Punctuation,
    Number,
    Whitespace,
}

impl Kind {
    /// The anchored pattern accepting exactly this kind's texts.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Kind::Word => &WORD,
            Kind::Punctuation => &PUNCTUATION,
            Kind::Number => &NUMBER,
            Kind::Whitespace => &WHITESPACE,
        }
    }

    /// Whether `text` belongs to this kind's character class.
    pub fn accepts(self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Word => "word",
            Kind::Punctuation => "punctuation",
            Kind::Number => "number",
            Kind::Whitespace => "whitespace",
        };
        f.write_str(name)
    }
}

/// An immutable lexeme.
///
/// The variant is the token's kind; the payload is the raw source text,
/// which always satisfies the kind's character-class pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    Word(String),
    Punctuation(String),
    Number(String),
    Whitespace(String),
}

impl Token {
    /// A word token: one or more ASCII letters or hyphens.
    pub fn word(text: impl Into<String>) -> Result<Self, LexError> {
        Self::validated(Kind::Word, text.into())
    }

    /// A punctuation token: exactly one character from the punctuation set.
    pub fn punctuation(text: impl Into<String>) -> Result<Self, LexError> {
        Self::validated(Kind::Punctuation, text.into())
    }

    /// A number token: digits, optionally in `.`/`,`-separated groups.
    pub fn number(text: impl Into<String>) -> Result<Self, LexError> {
        Self::validated(Kind::Number, text.into())
    }

    /// A whitespace token: a run of one or more whitespace characters.
    pub fn whitespace(text: impl Into<String>) -> Result<Self, LexError> {
        Self::validated(Kind::Whitespace, text.into())
    }

    fn validated(kind: Kind, text: String) -> Result<Self, LexError> {
        if !kind.accepts(&text) {
            return Err(LexError::InvalidConstruction { kind, text });
        }
        Ok(match kind {
            Kind::Word => Token::Word(text),
            Kind::Punctuation => Token::Punctuation(text),
            Kind::Number => Token::Number(text),
            Kind::Whitespace => Token::Whitespace(text),
        })
    }

    /// The raw source text of this token.
    pub fn text(&self) -> &str {
        match self {
            Token::Word(text)
            | Token::Punctuation(text)
            | Token::Number(text)
            | Token::Whitespace(text) => text,
        }
    }

    /// The lexical category of this token.
    pub fn kind(&self) -> Kind {
        match self {
            Token::Word(_) => Kind::Word,
            Token::Punctuation(_) => Kind::Punctuation,
            Token::Number(_) => Kind::Number,
            Token::Whitespace(_) => Kind::Whitespace,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Punctuation(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// Sentence-terminal punctuation: `.`, `?` or `!`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Token::Punctuation(text) if matches!(text.as_str(), "." | "?" | "!"))
    }

    /// Integer value of a plain digit-run number token.
    ///
    /// Grouped forms such as `12.345` have no single integer value and
    /// return `None`, as do tokens of any other kind.
    pub fn integer_value(&self) -> Option<i64> {
        match self {
            Token::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Case-fold a word token to lowercase; other kinds pass through.
    pub fn lowercased(&self) -> Token {
        match self {
            Token::Word(text) => Token::Word(text.to_lowercase()),
            other => other.clone(),
        }
    }

    /// Case-fold a word token to uppercase; other kinds pass through.
    pub fn uppercased(&self) -> Token {
        match self {
            Token::Word(text) => Token::Word(text.to_uppercase()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
