// Exception dictionary: whole-word hyphenations that bypass the patterns

use std::borrow::Cow;

use hashbrown::HashMap;
use texhyph_core::character::{HYPHEN_MINUS, fold_case, is_folded, simple_lower};
use texhyph_core::weights::Weight;

/// Words whose hyphenation is given explicitly, e.g. `as-so-ciate`.
///
/// Each entry maps the case-folded word (hyphens removed) to one weight
/// per letter: `1` after a letter that was followed by `-` in the table,
/// `0` elsewhere. The weight at index `i` therefore means "may break after
/// letter `i`", the same convention the engine uses for pattern results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionTable {
    entries: HashMap<String, Vec<Weight>>,
}

impl ExceptionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hyphen-annotated word.
    ///
    /// A hyphen before the first letter has no letter to attach to and is
    /// dropped. Tokens made only of hyphens are ignored. A later entry for
    /// the same word replaces the earlier one.
    pub fn insert(&mut self, raw: &str) {
        let mut word = String::with_capacity(raw.len());
        let mut weights: Vec<Weight> = Vec::with_capacity(raw.len());

        for c in raw.chars() {
            if c == HYPHEN_MINUS {
                if let Some(last) = weights.last_mut() {
                    *last = 1;
                }
            } else {
                word.push(simple_lower(c));
                weights.push(0);
            }
        }

        if word.is_empty() {
            return;
        }
        self.entries.insert(word, weights);
    }

    /// Look up a word, ignoring case. Only exact matches count.
    pub fn lookup(&self, word: &str) -> Option<&[Weight]> {
        let key: Cow<'_, str> = if is_folded(word) {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(fold_case(word))
        };
        self.entries.get(key.as_ref()).map(Vec::as_slice)
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, weights)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Weight])> {
        self.entries
            .iter()
            .map(|(word, weights)| (word.as_str(), weights.as_slice()))
    }
}
