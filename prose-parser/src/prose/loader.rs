//! Document loading utilities.
//!
//! `DocumentLoader` loads source text from a file, a string, or any
//! readable stream, and runs transforms on it. Used by both the CLI and
//! tests.
//!
//! ```rust,ignore
//! use prose_parser::prose::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("notes.txt")?.parse()?;
//! let doc = DocumentLoader::from_string("Hello there.").parse()?;
//! let doc = DocumentLoader::from_reader(std::io::stdin())?.parse()?;
//! ```

use crate::prose::ast::Document;
use crate::prose::transforms::standard::STRING_TO_DOCUMENT;
use crate::prose::transforms::{Transform, TransformError};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Error that can occur when loading documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error while reading the source
    Io(String),
    /// Transform/parsing error
    Transform(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Transform(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::Transform(err)
    }
}

/// Document loader with transform shortcuts.
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Read all input from a readable stream.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(DocumentLoader { source })
    }

    /// The loaded source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run a custom transform on the source.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Parse the source into a [`Document`].
    ///
    /// Shortcut for `.with(&STRING_TO_DOCUMENT)`.
    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.with(&STRING_TO_DOCUMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_string_parses_the_source() {
        let doc = DocumentLoader::from_string("Hi there. Bye.").parse().unwrap();
        assert_eq!(doc.paragraphs()[0].len(), 2);
    }

    #[test]
    fn from_reader_drains_the_stream() {
        let reader = Cursor::new("One.\nTwo.");
        let loader = DocumentLoader::from_reader(reader).unwrap();
        assert_eq!(loader.source(), "One.\nTwo.");
        assert_eq!(loader.parse().unwrap().len(), 2);
    }

    #[test]
    fn from_path_reports_missing_files() {
        let result = DocumentLoader::from_path("definitely/not/here.txt");
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn parse_surfaces_transform_errors() {
        let result = DocumentLoader::from_string("bad § char.").parse();
        assert!(matches!(result, Err(LoaderError::Transform(_))));
    }
}
