//! Command-line preprocessor for prose text.
//!
//! Reads a document from a file or standard input, applies the requested
//! transforms, and writes the rendered result to a file or standard
//! output. Any classification failure is reported on stderr and the
//! process exits non-zero.

use clap::{Arg, ArgAction, ArgMatches, Command};
use prose_parser::prose::ast::Document;
use prose_parser::prose::loader::DocumentLoader;
use prose_parser::prose::transforms::stages::{
    Lowercase, StripLiterals, StripNumbers, StripPunctuation, StripWhitespace, Uppercase,
};
use prose_parser::prose::transforms::standard::STRING_TO_DOCUMENT;
use prose_parser::prose::transforms::Transform;
use std::collections::HashSet;
use std::io::Write;

fn main() {
    let matches = Command::new("prose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Preprocess a text document")
        .arg(
            Arg::new("source")
                .help("Input file (defaults to standard input)")
                .index(1),
        )
        .arg(
            Arg::new("destination")
                .help("Output file (defaults to standard output)")
                .index(2),
        )
        .arg(
            Arg::new("lower")
                .long("lower")
                .short('l')
                .help("Convert words to lowercase")
                .action(ArgAction::SetTrue)
                .conflicts_with("upper"),
        )
        .arg(
            Arg::new("upper")
                .long("upper")
                .short('u')
                .help("Convert words to uppercase")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("without-punct")
                .long("without-punct")
                .short('p')
                .help("Remove punctuation tokens")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("without-whitespace")
                .long("without-whitespace")
                .short('w')
                .help("Remove whitespace tokens")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("without-number")
                .long("without-number")
                .short('n')
                .help("Remove number tokens")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("without")
                .long("without")
                .short('x')
                .help("Remove the given literal tokens")
                .value_name("TOKEN")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .get_matches();

    let loader = match matches.get_one::<String>("source") {
        Some(path) => DocumentLoader::from_path(path),
        None => DocumentLoader::from_reader(std::io::stdin()),
    }
    .unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let pipeline = build_pipeline(&matches);
    let document = loader.with(&pipeline).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    write_destination(matches.get_one::<String>("destination"), &document);
}

/// Assemble the transform pipeline selected by the command-line flags.
fn build_pipeline(matches: &ArgMatches) -> Transform<String, Document> {
    let mut pipeline = Transform::from_fn(Ok).then_transform(&STRING_TO_DOCUMENT);

    if matches.get_flag("lower") {
        pipeline = pipeline.then(Lowercase::new());
    }
    if matches.get_flag("upper") {
        pipeline = pipeline.then(Uppercase::new());
    }
    if matches.get_flag("without-punct") {
        pipeline = pipeline.then(StripPunctuation::new());
    }
    if matches.get_flag("without-whitespace") {
        pipeline = pipeline.then(StripWhitespace::new());
    }
    if matches.get_flag("without-number") {
        pipeline = pipeline.then(StripNumbers::new());
    }
    if let Some(tokens) = matches.get_many::<String>("without") {
        let literals: HashSet<String> = tokens.cloned().collect();
        pipeline = pipeline.then(StripLiterals::new(literals));
    }

    pipeline
}

/// Write the rendered document, with a trailing newline, to the selected
/// destination.
fn write_destination(path: Option<&String>, document: &Document) {
    let result = match path {
        Some(path) => std::fs::write(path, format!("{}\n", document)),
        None => writeln!(std::io::stdout(), "{}", document),
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
