//! Detokenizer for the prose model.
//!
//! Converts tokens back into source text. The document model's rendering is
//! built on this: a sentence is the concatenation of its tokens' text, so a
//! token stream that has not been filtered or case-folded reproduces the
//! exact spacing and punctuation layout of its source line.

use super::core::Token;

/// Trait for converting a token to its source string representation.
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        self.text().to_string()
    }
}

/// Detokenize a stream of tokens into a string.
///
/// Concatenates the tokens' text in order. No separator is inserted;
/// whitespace survives only as whitespace tokens in the stream.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(token.text());
    }
    result
}
