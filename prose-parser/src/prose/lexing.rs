//! Token classifier.
//!
//!     Classification runs a fixed table of four character-class patterns
//!     against the front of the remaining input, in a fixed priority order:
//!
//!         1. Word         one or more ASCII letters or hyphens
//!         2. Punctuation  exactly one character from the punctuation set
//!         3. Number       digits, optionally in `.`/`,`-separated groups
//!         4. Whitespace   a run of whitespace characters
//!
//!     The first class (in the order above) whose pattern matches at the
//!     cursor wins; word, number, and whitespace matches are greedy, while a
//!     punctuation match is always a single character. A character that
//!     belongs to an earlier class never resolves to a later one: a hyphen
//!     is a valid word start as well as a punctuation character, and always
//!     classifies as a word.
//!
//!     The table is expressed as a logos lexer. Logos picks the longest
//!     match and breaks length ties by explicit priority; the only
//!     cross-class overlap in this table is the hyphen (word vs punctuation,
//!     both length 1 at the point of conflict), which the priorities resolve
//!     in favor of word. Every other class starts from a disjoint character
//!     set, so longest-match and priority-order classification agree.
//!
//!     When no pattern matches at the cursor, classification fails with
//!     [`LexError::InvalidToken`] carrying the full remaining text. The
//!     failure is fatal for the line being classified; there is no skipping
//!     or resynchronization.

use crate::prose::token::{Kind, Token};
use logos::Logos;
use std::fmt;

/// Classification patterns in priority order.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawToken {
    #[regex(r"[A-Za-z-]+", priority = 3)]
    Word,

    #[regex(r#"[\]\[.,;:?!(){}_@#/&$%~`'"*=+-]"#, priority = 2)]
    Punctuation,

    #[regex(r"[0-9]+(?:[.,][0-9]+)*", priority = 3)]
    Number,

    #[regex(r"\s+", priority = 2)]
    Whitespace,
}

/// Errors raised while classifying text or constructing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No classification pattern matches the remaining text.
    InvalidToken(String),
    /// A kind-specific constructor was given text outside that kind's class.
    InvalidConstruction { kind: Kind, text: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidToken(text) => write!(f, "Invalid token: {}", text),
            LexError::InvalidConstruction { kind, text } => {
                write!(f, "Invalid {}: {}", kind, text)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Classify the next token of `remaining`.
///
/// Returns the token and the number of bytes consumed, or `Ok(None)` once
/// the input is empty. The consumed length is always at least one byte, so
/// repeated classification strictly shrinks the remaining input.
///
/// The matched text goes through the kind's validated constructor, the same
/// boundary every other producer of tokens crosses.
pub fn classify(remaining: &str) -> Result<Option<(Token, usize)>, LexError> {
    let mut lexer = RawToken::lexer(remaining);
    match lexer.next() {
        None => Ok(None),
        Some(Err(_)) => Err(LexError::InvalidToken(remaining.to_string())),
        Some(Ok(raw)) => {
            let text = lexer.slice();
            let consumed = lexer.span().end;
            let token = match raw {
                RawToken::Word => Token::word(text)?,
                RawToken::Punctuation => Token::punctuation(text)?,
                RawToken::Number => Token::number(text)?,
                RawToken::Whitespace => Token::whitespace(text)?,
            };
            Ok(Some((token, consumed)))
        }
    }
}

/// Classify an entire line into its token sequence.
///
/// Fails with the first classification error; tokens already classified on
/// the line are discarded along with it.
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut remaining = line;
    while let Some((token, consumed)) = classify(remaining)? {
        tokens.push(token);
        remaining = &remaining[consumed..];
    }
    Ok(tokens)
}
