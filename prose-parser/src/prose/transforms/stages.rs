//! Individual pipeline stages.
//!
//! Each stage wraps one document operation as a [`Runnable`] so it can be
//! chained with `Transform::then`. The document-to-document stages are
//! total: they delegate to the pure operations on [`Document`] and never
//! fail. Only [`Construction`] can fail, when classification rejects the
//! input.

use crate::prose::ast::Document;
use crate::prose::transforms::{Runnable, TransformError};
use std::collections::HashSet;

/// String → Document construction stage.
///
/// Splits the source into lines and builds one paragraph per line.
#[derive(Default)]
pub struct Construction;

impl Construction {
    pub fn new() -> Self {
        Construction
    }
}

impl Runnable<String, Document> for Construction {
    fn run(&self, input: String) -> Result<Document, TransformError> {
        Document::from_source(&input).map_err(|e| TransformError::StageFailed {
            stage: "construction".to_string(),
            message: e.to_string(),
        })
    }
}

/// Case-fold every word token to lowercase.
#[derive(Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Lowercase
    }
}

impl Runnable<Document, Document> for Lowercase {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.lower())
    }
}

/// Case-fold every word token to uppercase.
#[derive(Default)]
pub struct Uppercase;

impl Uppercase {
    pub fn new() -> Self {
        Uppercase
    }
}

impl Runnable<Document, Document> for Uppercase {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.upper())
    }
}

/// Drop all punctuation tokens.
#[derive(Default)]
pub struct StripPunctuation;

impl StripPunctuation {
    pub fn new() -> Self {
        StripPunctuation
    }
}

impl Runnable<Document, Document> for StripPunctuation {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.without_punctuation())
    }
}

/// Drop punctuation tokens except sentence terminals.
#[derive(Default)]
pub struct StripPunctuationExceptTerminal;

impl StripPunctuationExceptTerminal {
    pub fn new() -> Self {
        StripPunctuationExceptTerminal
    }
}

impl Runnable<Document, Document> for StripPunctuationExceptTerminal {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.without_punctuation_except_terminal())
    }
}

/// Drop all whitespace tokens.
#[derive(Default)]
pub struct StripWhitespace;

impl StripWhitespace {
    pub fn new() -> Self {
        StripWhitespace
    }
}

impl Runnable<Document, Document> for StripWhitespace {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.without_whitespace())
    }
}

/// Drop all number tokens.
#[derive(Default)]
pub struct StripNumbers;

impl StripNumbers {
    pub fn new() -> Self {
        StripNumbers
    }
}

impl Runnable<Document, Document> for StripNumbers {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.without_numbers())
    }
}

/// Drop tokens whose text equals one of the given literals.
pub struct StripLiterals {
    literals: HashSet<String>,
}

impl StripLiterals {
    pub fn new(literals: HashSet<String>) -> Self {
        StripLiterals { literals }
    }
}

impl Runnable<Document, Document> for StripLiterals {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        Ok(input.without(&self.literals))
    }
}
