//! TeX hyphenation pattern tables.
//!
//! This crate turns the text of a TeX pattern file (`\patterns{...}` and
//! `\hyphenation{...}` groups) into a [`RuleSet`]: a trie of
//! digit-annotated patterns plus a dictionary of whole-word exceptions.
//!
//! # Architecture
//!
//! - [`pattern`] -- Decoding of single pattern tokens (`hy3ph`)
//! - [`trie`] -- Character-keyed pattern trie with placeholder nodes
//! - [`exceptions`] -- Whole-word exception dictionary (`as-so-ciate`)
//! - [`rules`] -- The immutable rule set handed to the hyphenator
//! - [`parser`] -- Table text parser
//! - [`diagnostics`] -- Sink for warnings and errors raised while loading

pub mod diagnostics;
pub mod exceptions;
pub mod parser;
pub mod pattern;
pub mod rules;
pub mod trie;

pub use diagnostics::{Diagnostics, Severity};
pub use parser::{TableParser, parse, parse_reader};
pub use rules::RuleSet;

/// Error type for pattern table loading. Any error aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: unknown keyword '\\{name}'")]
    UnknownGroup { name: String, line: usize },
    #[error("line {line}: end of input before '{{' after '\\{name_start}..'")]
    MissingOpenBrace { name_start: String, line: usize },
    #[error("line {line}: end of input before '}}' closing '\\{group}'")]
    UnterminatedGroup { group: String, line: usize },
    #[error("failed to read pattern table: {0}")]
    Io(#[from] std::io::Error),
}
