//! Golden tests: hyphenate phrases against hand-checked expected output.
//!
//! Each case in `tests/golden/cases.json` carries its own pattern table,
//! the phrase, the minimums and the expected result. Cases with a
//! `separator` compare `insert_hyphens` instead of `hyphenate`.
//!
//! Run: cargo test -p texhyph --test golden

use std::path::PathBuf;

use serde::Deserialize;
use texhyph::Hyphenator;
use texhyph_patterns::diagnostics::SilentDiagnostics;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    table: String,
    phrase: String,
    left_min: usize,
    right_min: usize,
    #[serde(default)]
    separator: Option<String>,
    expected: String,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/cases.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

/// Show invisible markers so mismatches are readable.
fn escape(s: &str) -> String {
    s.replace('\u{00AD}', "<SHY>").replace('\u{200B}', "<ZWSP>")
}

#[test]
fn golden_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty(), "no golden cases loaded");

    let mut failures = Vec::new();
    for case in &cases {
        let mut hyphenator = Hyphenator::from_table_str_with(&case.table, &SilentDiagnostics)
            .unwrap_or_else(|e| panic!("case '{}': table failed to load: {e}", case.name));
        hyphenator.set_left_min(case.left_min);
        hyphenator.set_right_min(case.right_min);

        let actual = match &case.separator {
            Some(separator) => hyphenator.insert_hyphens(&case.phrase, separator),
            None => hyphenator.hyphenate(&case.phrase),
        };
        if actual != case.expected {
            failures.push(format!(
                "  {}: expected '{}', got '{}'",
                case.name,
                escape(&case.expected),
                escape(&actual)
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} golden cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_cases_agree_with_explicit_minimums() {
    for case in load_cases().iter().filter(|c| c.separator.is_none()) {
        let hyphenator = Hyphenator::from_table_str_with(&case.table, &SilentDiagnostics)
            .unwrap_or_else(|e| panic!("case '{}': table failed to load: {e}", case.name));
        assert_eq!(
            hyphenator.hyphenate_with(&case.phrase, case.left_min, case.right_min),
            case.expected,
            "case '{}'",
            case.name
        );
    }
}
