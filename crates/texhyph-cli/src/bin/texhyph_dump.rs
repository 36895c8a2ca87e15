// texhyph-dump: Inspect a loaded pattern table.
//
// Prints the pattern trie below each requested start character, or a
// summary and every top-level subtree when no characters are given.
//
// Usage:
//   texhyph-dump [-t TABLE] [--exceptions] [CHARS...]
//
// Options:
//   -t, --table PATH   Pattern table file (or directory containing hyph.tex)
//   --exceptions       List the exception dictionary instead of the trie
//   -h, --help         Print help

use std::io::{self, Write};

use texhyph_core::weights::format_weights;
use texhyph_patterns::RuleSet;
use texhyph_patterns::diagnostics::TracingDiagnostics;

fn main() {
    texhyph_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = texhyph_cli::parse_table_path(&args);

    if texhyph_cli::wants_help(&args) {
        println!("texhyph-dump: Inspect a TeX pattern table.");
        println!();
        println!("Usage: texhyph-dump [-t TABLE] [--exceptions] [CHARS...]");
        println!();
        println!("Each character of each CHARS argument selects the patterns starting");
        println!("with it. Without CHARS, prints a summary and every subtree.");
        println!();
        println!("Options:");
        println!("  -t, --table PATH   Pattern table file (or directory containing hyph.tex)");
        println!("  --exceptions       List the exception dictionary instead of the trie");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut show_exceptions = false;
    let mut starts: Vec<char> = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--exceptions" => show_exceptions = true,
            s if s.starts_with("--") => texhyph_cli::fatal(&format!("unknown option: {s}")),
            s => starts.extend(s.chars()),
        }
    }

    let hyphenator = texhyph_cli::load_hyphenator(table_path.as_deref(), &TracingDiagnostics)
        .unwrap_or_else(|e| texhyph_cli::fatal(&e));
    let rules = hyphenator.rules();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if show_exceptions {
        write_exceptions(rules, &mut out)
    } else {
        write_patterns(rules, &starts, &mut out)
    };
    if let Err(e) = result.and_then(|()| out.flush()) {
        texhyph_cli::fatal(&format!("error writing output: {e}"));
    }
}

fn write_patterns(rules: &RuleSet, starts: &[char], out: &mut impl Write) -> io::Result<()> {
    if !starts.is_empty() {
        for &c in starts {
            writeln!(out, "{c}: {}", rules.describe(c))?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "patterns: {}, exceptions: {}",
        rules.pattern_count(),
        rules.exception_count()
    )?;
    let mut roots: Vec<char> = rules
        .patterns()
        .root()
        .children()
        .filter_map(|node| node.last_char())
        .collect();
    roots.sort_unstable();
    for c in roots {
        writeln!(out, "{c}: {}", rules.describe(c))?;
    }
    Ok(())
}

fn write_exceptions(rules: &RuleSet, out: &mut impl Write) -> io::Result<()> {
    let mut entries: Vec<_> = rules.exceptions().iter().collect();
    entries.sort_unstable_by_key(|(word, _)| *word);
    for (word, weights) in entries {
        writeln!(out, "{word} {}", format_weights(weights))?;
    }
    Ok(())
}
