//! Document construction.
//!
//! Builds the Document → Paragraph → Sentence → Token hierarchy line by
//! line. Each input line is processed independently into one paragraph;
//! sentences never span lines. Construction is a single pass with no
//! backtracking: every successful classification consumes at least one
//! character of the line, and a classification failure aborts the whole
//! build.

use crate::prose::ast::{Document, Paragraph, Sentence};
use crate::prose::lexing::{classify, LexError};

/// Build one paragraph from one input line.
///
/// Tokens accumulate into an in-progress sentence. A terminal punctuation
/// token (`.`, `?`, `!`) closes the sentence into the paragraph and starts
/// a new one. A sentence still open when the line is exhausted is dropped:
/// a line with no terminal punctuation anywhere yields an empty paragraph,
/// and tokens after the last terminal on a line do not survive the build.
pub fn paragraph_from_line(line: &str) -> Result<Paragraph, LexError> {
    let mut paragraph = Paragraph::new();
    let mut sentence = Sentence::new();
    let mut remaining = line;

    while let Some((token, consumed)) = classify(remaining)? {
        remaining = &remaining[consumed..];
        let terminal = token.is_terminal();
        sentence.push(token);
        if terminal {
            paragraph.push(std::mem::take(&mut sentence));
        }
    }

    Ok(paragraph)
}

/// Build a document from source text, one paragraph per line.
pub fn document_from_source(source: &str) -> Result<Document, LexError> {
    document_from_lines(source.lines())
}

/// Build a document from an ordered sequence of lines.
pub fn document_from_lines<I, S>(lines: I) -> Result<Document, LexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = Document::new();
    for line in lines {
        document.push(paragraph_from_line(line.as_ref())?);
    }
    Ok(document)
}
