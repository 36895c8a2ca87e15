//! Properties that must hold for every phrase and every rule set, checked
//! over a fixed corpus.
//!
//! Run: cargo test -p texhyph --test properties

use texhyph::{HyphenationOptions, Hyphenator};
use texhyph_core::character::{SOFT_HYPHEN, is_word_char, strip_break_markers};
use texhyph_patterns::diagnostics::SilentDiagnostics;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const PATTERNS: &[&str] = &[
    "hy3ph", "he2n", "hena4", "hen5at", "1na", "n2at", "1tio", "2io", "o2n", ".re1", "1ba",
    "2bl", "1ca", "c4k", "1de", "e1f", "4ing", "i2n", "o1r", "1ment", "a1t", "3tr", "1i",
    "s1s", "2ss.", "1ty", "ab1", ".un1",
];

const EXCEPTIONS: &[&str] = &["ta-ble", "as-so-ciate", "pro-ject", "Uni-code"];

const CORPUS: &[&str] = &[
    "",
    "a",
    "-",
    "--",
    "UTF-8",
    "hyphenation",
    "Hyphenation of natural-language text with TeX patterns.",
    "Continues the work by David Tolpin. Specifically, adding UTF-8 support for pattern files.",
    "The table of associated projects, re-released in Unicode\u{2010}aware form!",
    "unbelievable backtracking, mostly; definitely\ttabbed\nand newlined",
    "  leading and trailing spaces  ",
    "numbers 12345 and mixed a1b2c3 tokens",
    "Übergrößenträger, ÉTUDE, naïveté",
    "кириллица и латиница вместе",
    "zero\u{200B}width spaces already present",
    "dash-at-end-",
    "ALLCAPS HYPHENATION ASSOCIATE",
];

fn table(patterns: &[&str], exceptions: &[&str]) -> String {
    format!(
        "\\patterns{{\n{}\n}}\n\\hyphenation{{\n{}\n}}\n",
        patterns.join("\n"),
        exceptions.join("\n")
    )
}

fn hyphenator() -> Hyphenator {
    Hyphenator::from_table_str_with(&table(PATTERNS, EXCEPTIONS), &SilentDiagnostics).unwrap()
}

fn minimums() -> Vec<(usize, usize)> {
    vec![(0, 0), (1, 1), (2, 2), (2, 3), (3, 2), (1, 5), (5, 1), (10, 10)]
}

/// Split hyphenated output into `(letter_count, break_indices)` per word,
/// where a break index `i` means a soft hyphen right after letter `i`.
fn word_breaks(output: &str) -> Vec<(usize, Vec<usize>)> {
    let mut words = Vec::new();
    let mut letters = 0usize;
    let mut breaks = Vec::new();

    for c in output.chars() {
        if is_word_char(c) {
            letters += 1;
        } else if c == SOFT_HYPHEN && letters > 0 {
            breaks.push(letters - 1);
        } else if letters > 0 {
            words.push((letters, std::mem::take(&mut breaks)));
            letters = 0;
        }
    }
    if letters > 0 {
        words.push((letters, breaks));
    }
    words
}

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

#[test]
fn removing_markers_restores_input() {
    let rule_sets = [hyphenator(), Hyphenator::new(texhyph::RuleSet::empty())];
    for h in &rule_sets {
        for (left, right) in minimums() {
            for phrase in CORPUS {
                let marked = h.hyphenate_with(phrase, left, right);
                assert_eq!(
                    strip_break_markers(&marked),
                    *phrase,
                    "phrase {phrase:?} with minimums {left}/{right}"
                );
            }
        }
    }
}

#[test]
fn only_two_code_points_are_added() {
    let h = hyphenator();
    for phrase in CORPUS {
        let marked = h.hyphenate(phrase);
        let without_markers = |s: &str| -> String {
            s.chars()
                .filter(|c| !matches!(c, '\u{00AD}' | '\u{200B}'))
                .collect()
        };
        assert_eq!(without_markers(&marked), without_markers(phrase), "phrase {phrase:?}");
    }
}

#[test]
fn empty_rule_set_only_marks_dashes() {
    let h = Hyphenator::new(texhyph::RuleSet::empty());
    assert_eq!(h.hyphenate("UTF-8"), "UTF-\u{200B}8");
    for phrase in CORPUS {
        let marked = h.hyphenate(phrase);
        assert!(!marked.contains(SOFT_HYPHEN), "phrase {phrase:?}");
    }
}

// ---------------------------------------------------------------------------
// Minimums
// ---------------------------------------------------------------------------

#[test]
fn breaks_respect_minimums() {
    let h = hyphenator();
    for (left, right) in minimums() {
        let options = HyphenationOptions::new(left, right).clamped();
        for phrase in CORPUS {
            let marked = h.hyphenate_with(phrase, left, right);
            for (len, breaks) in word_breaks(&marked) {
                if len < options.left_min + options.right_min {
                    assert!(breaks.is_empty(), "short word broken in {marked:?}");
                    continue;
                }
                for i in breaks {
                    assert!(i + 1 >= options.left_min, "break {i} too early in {marked:?}");
                    assert!(i + options.right_min < len, "break {i} too late in {marked:?}");
                }
            }
        }
    }
}

#[test]
fn raising_minimums_never_adds_breaks() {
    let h = hyphenator();
    for phrase in CORPUS {
        let loose = h.hyphenate_with(phrase, 1, 1).matches(SOFT_HYPHEN).count();
        let tight = h.hyphenate_with(phrase, 3, 3).matches(SOFT_HYPHEN).count();
        assert!(tight <= loose, "phrase {phrase:?}");
    }
}

// ---------------------------------------------------------------------------
// Exception precedence
// ---------------------------------------------------------------------------

#[test]
fn exceptions_decide_break_points() {
    // without the exception these patterns break "table" three times
    let h = Hyphenator::from_table_str_with(
        &table(&["1a", "1b", "1l", "1e"], &["ta-ble"]),
        &SilentDiagnostics,
    )
    .unwrap();
    assert_eq!(h.word_weights("table"), vec![0, 1, 0, 0, 0]);
    assert_eq!(h.hyphenate("table"), "ta\u{00AD}ble");
    assert_eq!(h.hyphenate("TABLE"), "TA\u{00AD}BLE");

    // the same letters without the exception
    let plain =
        Hyphenator::from_table_str_with(&table(&["1a", "1b", "1l", "1e"], &[]), &SilentDiagnostics)
            .unwrap();
    assert_eq!(plain.hyphenate("table"), "t\u{00AD}a\u{00AD}b\u{00AD}le");
}

#[test]
fn exception_breaks_match_weight_vector() {
    let h = hyphenator();
    for word in ["associate", "project", "Unicode", "table"] {
        let weights = h.word_weights(word);
        assert_eq!(weights.len(), word.chars().count());
        let expected: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|&(i, w)| w % 2 == 1 && i + 1 < weights.len())
            .map(|(i, _)| i)
            .collect();
        let marked = h.hyphenate(word);
        assert_eq!(word_breaks(&marked), vec![(weights.len(), expected)], "word {word}");
    }
}

// ---------------------------------------------------------------------------
// Order independence
// ---------------------------------------------------------------------------

#[test]
fn pattern_order_does_not_matter() {
    let forward = hyphenator();

    let mut reversed: Vec<&str> = PATTERNS.to_vec();
    reversed.reverse();
    let mut rotated: Vec<&str> = PATTERNS.to_vec();
    rotated.rotate_left(PATTERNS.len() / 3);

    for patterns in [reversed, rotated] {
        let other =
            Hyphenator::from_table_str_with(&table(&patterns, EXCEPTIONS), &SilentDiagnostics)
                .unwrap();
        for phrase in CORPUS {
            assert_eq!(forward.hyphenate(phrase), other.hyphenate(phrase), "phrase {phrase:?}");
        }
        for word in ["hyphenation", "backtracking", "definitely", "unbelievable"] {
            assert_eq!(forward.word_weights(word), other.word_weights(word), "word {word}");
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism and sharing
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_are_identical() {
    let h = hyphenator();
    for phrase in CORPUS {
        let first = h.hyphenate(phrase);
        for _ in 0..3 {
            assert_eq!(h.hyphenate(phrase), first);
        }
    }
}

#[test]
fn shared_across_threads() {
    let h = hyphenator();
    let expected: Vec<String> = CORPUS.iter().map(|p| h.hyphenate(p)).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let h = &h;
            let expected = &expected;
            scope.spawn(move || {
                for _ in 0..10 {
                    for (phrase, want) in CORPUS.iter().zip(expected) {
                        assert_eq!(&h.hyphenate(phrase), want);
                    }
                }
            });
        }
    });
}

#[test]
fn handles_with_different_options_share_one_rule_set() {
    let h = hyphenator();
    let loose = Hyphenator::with_options(h.shared_rules(), HyphenationOptions::new(1, 1));
    let tight = Hyphenator::with_options(h.shared_rules(), HyphenationOptions::new(4, 4));

    std::thread::scope(|scope| {
        let a = scope.spawn(|| loose.hyphenate("hyphenation"));
        let b = scope.spawn(|| tight.hyphenate("hyphenation"));
        assert_eq!(a.join().unwrap(), h.hyphenate_with("hyphenation", 1, 1));
        assert_eq!(b.join().unwrap(), h.hyphenate_with("hyphenation", 4, 4));
    });
}
