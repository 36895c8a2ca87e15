// Hyphenation engine -- Knuth-Liang pattern matching over a RuleSet
//
// The engine works by:
// 1. Splitting a phrase into words (maximal runs of letters)
// 2. Computing a break weight after every letter of each word, from the
//    exception table or from every matching pattern
// 3. Inserting a soft hyphen after each letter with an odd weight that is
//    far enough from both ends of the word
//
// Visible dashes outside words get a zero-width space after them so that
// lines may wrap there too.

use texhyph_core::character::{
    SOFT_HYPHEN, WORD_BOUNDARY, ZERO_WIDTH_SPACE, is_visible_hyphen, is_word_char, simple_lower,
};
use texhyph_core::weights::{Weight, is_break, merge_max};
use texhyph_patterns::RuleSet;

// ---------------------------------------------------------------------------
// Hyphenation options
// ---------------------------------------------------------------------------

/// Minimum number of letters kept together at each end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphenationOptions {
    /// Letters that must stay unbroken at the start of a word (TeX's
    /// `\lefthyphenmin`). Values below 1 are treated as 1.
    pub left_min: usize,

    /// Letters that must stay unbroken at the end of a word (TeX's
    /// `\righthyphenmin`). Values below 1 are treated as 1.
    pub right_min: usize,
}

impl Default for HyphenationOptions {
    fn default() -> Self {
        Self {
            left_min: 1,
            right_min: 1,
        }
    }
}

impl HyphenationOptions {
    pub fn new(left_min: usize, right_min: usize) -> Self {
        Self {
            left_min,
            right_min,
        }
    }

    /// Both minimums raised to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            left_min: self.left_min.max(1),
            right_min: self.right_min.max(1),
        }
    }
}

// ---------------------------------------------------------------------------
// Word weights
// ---------------------------------------------------------------------------

/// Compute one break weight per letter of `word`.
///
/// `weights[i]` is the weight of the position right after letter `i`; an
/// odd value allows a break there. Exceptions take precedence over
/// patterns.
///
/// Pattern matching pads the case-folded word with a boundary dot on each
/// side and, for every start offset, walks the trie as deep as the padded
/// word allows. Every node on the walk contributes its weights by
/// elementwise maximum, so the order in which patterns match never
/// matters. With the patterns `hy3ph`, `he2n`, `hena4`, `hen5at`, `1na`,
/// `n2at`, `1tio`, `2io` and `o2n`, the word "hyphenation" gets
///
/// ```text
///  h y p h e n a t i o n
///  0 3 0 0 2 5 4 2 0 2 0
/// ```
///
/// and breaks as "hy-phen-ation".
pub fn word_weights(rules: &RuleSet, word: &[char]) -> Vec<Weight> {
    let folded: Vec<char> = word.iter().map(|&c| simple_lower(c)).collect();

    let key: String = folded.iter().collect();
    if let Some(weights) = rules.exception(&key) {
        return weights.to_vec();
    }

    pattern_weights(rules, &folded)
}

/// Pattern-only weights for an already case-folded word.
fn pattern_weights(rules: &RuleSet, folded: &[char]) -> Vec<Weight> {
    let len = folded.len();

    let mut padded = Vec::with_capacity(len + 2);
    padded.push(WORD_BOUNDARY);
    padded.extend_from_slice(folded);
    padded.push(WORD_BOUNDARY);

    // values[j] is the weight before padded[j]; the last slot is the
    // position after the trailing dot.
    let mut values: Vec<Weight> = vec![0; len + 3];

    for start in 0..len {
        let Some(node) = rules.pattern_tree(padded[start]) else {
            continue;
        };
        for matched in node.walk(&padded[start + 1..]) {
            merge_max(&mut values, start, matched.weights());
        }
    }

    // The position after letter i sits before padded[i + 2].
    values[2..len + 2].to_vec()
}

// ---------------------------------------------------------------------------
// Phrase scanning
// ---------------------------------------------------------------------------

/// Scanner state while walking a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Copying non-letters.
    OutsideWord,
    /// Collecting letters of the word that began at `start`.
    InsideWord { start: usize },
}

/// Insert soft hyphens into every word of `phrase`, and a zero-width space
/// after every visible dash outside words.
///
/// No character of the input is changed, removed or reordered; only
/// U+00AD and U+200B are added. Phrases shorter than
/// `left_min + right_min` characters are returned unchanged.
pub fn hyphenate_phrase(rules: &RuleSet, phrase: &str, options: HyphenationOptions) -> String {
    let options = options.clamped();
    let chars: Vec<char> = phrase.chars().collect();
    if chars.len() < options.left_min + options.right_min {
        return phrase.to_string();
    }

    let mut out = String::with_capacity(phrase.len() + phrase.len() / 2);
    let mut state = ScanState::OutsideWord;
    let mut pos = 0;

    loop {
        match state {
            ScanState::InsideWord { start } => {
                if chars.get(pos).is_some_and(|&c| is_word_char(c)) {
                    pos += 1;
                } else {
                    // the terminating character is handled outside the word
                    emit_word(rules, &chars[start..pos], options, &mut out);
                    state = ScanState::OutsideWord;
                }
            }
            ScanState::OutsideWord => {
                let Some(&c) = chars.get(pos) else {
                    break;
                };
                if is_word_char(c) {
                    state = ScanState::InsideWord { start: pos };
                } else {
                    out.push(c);
                    if is_visible_hyphen(c) {
                        out.push(ZERO_WIDTH_SPACE);
                    }
                }
                pos += 1;
            }
        }
    }

    out
}

/// Append `word` to `out` with soft hyphens at the admissible break points.
///
/// Breaks are allowed after letters `left_min - 1 ..= len - right_min - 1`.
fn emit_word(rules: &RuleSet, word: &[char], options: HyphenationOptions, out: &mut String) {
    let len = word.len();
    if options.left_min + options.right_min > len {
        out.extend(word);
        return;
    }

    let weights = word_weights(rules, word);
    for (i, &c) in word.iter().enumerate() {
        out.push(c);
        let admissible = i + 1 >= options.left_min && i + options.right_min < len;
        if admissible && weights.get(i).copied().is_some_and(is_break) {
            out.push(SOFT_HYPHEN);
        }
    }
}

/// Letter indices after which [`hyphenate_phrase`] would break `word`.
pub fn break_points(rules: &RuleSet, word: &[char], options: HyphenationOptions) -> Vec<usize> {
    let options = options.clamped();
    let len = word.len();
    if options.left_min + options.right_min > len {
        return Vec::new();
    }
    let weights = word_weights(rules, word);
    (options.left_min - 1..len - options.right_min)
        .filter(|&i| weights.get(i).copied().is_some_and(is_break))
        .collect()
}
