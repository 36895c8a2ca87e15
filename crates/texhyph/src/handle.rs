// Hyphenator: shareable handle pairing a loaded RuleSet with options.
//
// The rule set sits behind an Arc so that one loaded table can serve many
// handles (and threads) with different minimums. Every method takes &self
// and keeps no per-call state, so a handle may be used concurrently.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use texhyph_core::character::{SOFT_HYPHEN, ZERO_WIDTH_SPACE, is_visible_hyphen};
use texhyph_core::weights::Weight;
use texhyph_patterns::diagnostics::TracingDiagnostics;
use texhyph_patterns::{Diagnostics, ParseError, RuleSet, TableParser};

use crate::hyphenator::{self, HyphenationOptions};

/// Error type for building a [`Hyphenator`] from a table.
#[derive(Debug, thiserror::Error)]
pub enum HyphenatorError {
    /// The table text is malformed.
    #[error("failed to parse pattern table: {0}")]
    Parse(#[from] ParseError),

    /// The table file could not be read.
    #[error("failed to read pattern table {}: {source}", path.display())]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded rule set plus the minimums used by [`Hyphenator::hyphenate`].
#[derive(Debug, Clone)]
pub struct Hyphenator {
    rules: Arc<RuleSet>,
    options: HyphenationOptions,
}

impl Hyphenator {
    /// Wrap an existing rule set with default options (1, 1).
    pub fn new(rules: impl Into<Arc<RuleSet>>) -> Self {
        Self::with_options(rules, HyphenationOptions::default())
    }

    pub fn with_options(rules: impl Into<Arc<RuleSet>>, options: HyphenationOptions) -> Self {
        Self {
            rules: rules.into(),
            options,
        }
    }

    /// Parse table text, reporting diagnostics through `tracing`.
    pub fn from_table_str(text: &str) -> Result<Self, HyphenatorError> {
        Self::from_table_str_with(text, &TracingDiagnostics)
    }

    pub fn from_table_str_with(
        text: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, HyphenatorError> {
        let rules = TableParser::new(diagnostics).parse(text)?;
        Ok(Self::new(rules))
    }

    /// Read and parse a UTF-8 table from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, HyphenatorError> {
        let rules = TableParser::new(&TracingDiagnostics).parse_reader(reader)?;
        Ok(Self::new(rules))
    }

    /// Read and parse a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HyphenatorError> {
        Self::from_path_with(path, &TracingDiagnostics)
    }

    pub fn from_path_with(
        path: impl AsRef<Path>,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, HyphenatorError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HyphenatorError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;
        let hyphenator = Self::from_table_str_with(&text, diagnostics)?;
        tracing::info!(
            path = %path.display(),
            patterns = hyphenator.rules.pattern_count(),
            exceptions = hyphenator.rules.exception_count(),
            "loaded hyphenation table"
        );
        Ok(hyphenator)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The shared rule set, for building further handles.
    pub fn shared_rules(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rules)
    }

    pub fn options(&self) -> HyphenationOptions {
        self.options
    }

    pub fn set_options(&mut self, options: HyphenationOptions) {
        self.options = options;
    }

    pub fn set_left_min(&mut self, value: usize) {
        self.options.left_min = value;
    }

    pub fn set_right_min(&mut self, value: usize) {
        self.options.right_min = value;
    }

    /// Hyphenate a phrase with the handle's options.
    pub fn hyphenate(&self, phrase: &str) -> String {
        hyphenator::hyphenate_phrase(&self.rules, phrase, self.options)
    }

    /// Hyphenate a phrase with explicit minimums, ignoring the handle's
    /// options.
    pub fn hyphenate_with(&self, phrase: &str, left_min: usize, right_min: usize) -> String {
        hyphenator::hyphenate_phrase(
            &self.rules,
            phrase,
            HyphenationOptions::new(left_min, right_min),
        )
    }

    /// Raw break weights for `word`, one per character. The whole string is
    /// treated as a single word.
    pub fn word_weights(&self, word: &str) -> Vec<Weight> {
        let chars: Vec<char> = word.chars().collect();
        hyphenator::word_weights(&self.rules, &chars)
    }

    /// Hyphenate a phrase and render each break point with `separator`.
    ///
    /// Soft hyphens become `separator`; the zero-width spaces added after
    /// visible dashes are dropped. Zero-width spaces already present in
    /// the input are kept.
    pub fn insert_hyphens(&self, phrase: &str, separator: &str) -> String {
        let marked = self.hyphenate(phrase);
        let mut result = String::with_capacity(marked.len());
        let mut after_dash = false;

        for c in marked.chars() {
            match c {
                SOFT_HYPHEN => result.push_str(separator),
                ZERO_WIDTH_SPACE if after_dash => {}
                _ => result.push(c),
            }
            after_dash = is_visible_hyphen(c);
        }
        result
    }
}
