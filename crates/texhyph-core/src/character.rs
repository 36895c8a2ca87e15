// Character classification and the invisible break markers

// ---------------------------------------------------------------------------
// Marker code points
// ---------------------------------------------------------------------------

/// SOFT HYPHEN: an invisible, conditional line-break opportunity.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// ZERO WIDTH SPACE: an invisible, unconditional line-break opportunity.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// HYPHEN-MINUS, the ASCII dash.
pub const HYPHEN_MINUS: char = '\u{002D}';

/// HYPHEN, the typographic dash.
pub const HYPHEN: char = '\u{2010}';

/// Padding character placed around a word before pattern matching.
/// Patterns use it to anchor themselves to the start or end of a word.
pub const WORD_BOUNDARY: char = '.';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character belongs to a hyphenatable word.
///
/// Every alphabetic code point counts; digits, punctuation and whitespace
/// end the word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether a character is a visible dash after which a zero-width
/// space is inserted (HYPHEN-MINUS or HYPHEN).
pub fn is_visible_hyphen(c: char) -> bool {
    matches!(c, HYPHEN_MINUS | HYPHEN)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Hyphenation works on one weight per letter, so case folding must never
// change the number of characters. The standard library's to_lowercase can
// expand a character into several; only the first one is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character, keeping the mapping one-to-one.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Fold a string with [`simple_lower`], one character at a time.
pub fn fold_case(s: &str) -> String {
    s.chars().map(simple_lower).collect()
}

/// Returns true if [`fold_case`] would leave the string unchanged.
pub fn is_folded(s: &str) -> bool {
    s.chars().all(|c| simple_lower(c) == c)
}

// ---------------------------------------------------------------------------
// Marker removal
// ---------------------------------------------------------------------------

/// Remove every break marker a hyphenator inserts.
///
/// Soft hyphens are dropped everywhere. A zero-width space is dropped only
/// when it directly follows a visible dash, since only those were inserted;
/// any other zero-width space belongs to the original text.
pub fn strip_break_markers(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_dash = false;
    for c in s.chars() {
        if c == SOFT_HYPHEN {
            continue;
        }
        if c == ZERO_WIDTH_SPACE && after_dash {
            after_dash = false;
            continue;
        }
        after_dash = is_visible_hyphen(c);
        out.push(c);
    }
    out
}
