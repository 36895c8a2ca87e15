// RuleSet: the immutable pair of pattern trie and exception table

use texhyph_core::weights::Weight;

use crate::exceptions::ExceptionTable;
use crate::trie::{PatternNode, PatternTrie};

/// Everything the hyphenator needs to know about a language.
///
/// A `RuleSet` is built once and only read afterwards, so it can be shared
/// between threads (for example behind an `Arc`) without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    patterns: PatternTrie,
    exceptions: ExceptionTable,
}

impl RuleSet {
    pub fn new(patterns: PatternTrie, exceptions: ExceptionTable) -> Self {
        Self {
            patterns,
            exceptions,
        }
    }

    /// A rule set with no patterns and no exceptions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Top-level trie node for patterns starting with `c`.
    pub fn pattern_tree(&self, c: char) -> Option<&PatternNode> {
        self.patterns.lookup(c)
    }

    /// Explicit weights for `word`, if it is an exception.
    pub fn exception(&self, word: &str) -> Option<&[Weight]> {
        self.exceptions.lookup(word)
    }

    pub fn patterns(&self) -> &PatternTrie {
        &self.patterns
    }

    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    /// Number of patterns (placeholder nodes excluded).
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Dump the patterns starting with `c`, e.g. `((w [0, 0] (a [0, 0, 0])))`,
    /// or `()` if there are none.
    pub fn describe(&self, c: char) -> String {
        match self.pattern_tree(c) {
            Some(node) => format!("({node})"),
            None => "()".to_string(),
        }
    }
}
