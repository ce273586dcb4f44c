//! # prose-parser
//!
//! A tokenizer and hierarchical document model for plain prose text.
//!
//! Source text is split into lines; each line is classified token by token
//! into one of four lexical kinds (word, punctuation, number, whitespace)
//! and grouped into sentences and paragraphs, producing a
//! Document → Paragraph → Sentence → Token hierarchy. On top of that
//! hierarchy the crate exposes a functional transformation/filter pipeline:
//! case folding of words, stripping punctuation, numbers, or whitespace,
//! and removing specific literal tokens. Every operation returns a new,
//! independently owned structure; nothing is mutated after construction.
//!
//! Entry points:
//!
//! - [`prose::ast::Document`] — the document model and its operations
//! - [`prose::lexing::classify`] — the token classifier contract
//! - [`prose::loader::DocumentLoader`] — loading from files, strings, or readers
//! - [`prose::transforms`] — the composable pipeline infrastructure

pub mod prose;
