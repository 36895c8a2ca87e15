// texhyph-hyphenate: Hyphenate text with a TeX pattern table.
//
// Reads lines from stdin (or takes the phrases given as arguments) and
// prints each one with soft hyphens inserted. A visible separator can be
// used instead, or the raw break weights of every word shown.
//
// Usage:
//   texhyph-hyphenate [-t TABLE] [OPTIONS] [PHRASE...]
//
// Options:
//   -t, --table PATH   Pattern table file (or directory containing hyph.tex)
//   --left-min N       Letters kept together at the start of a word (default: 1)
//   --right-min N      Letters kept together at the end of a word (default: 1)
//   --separator SEP    Show break points as SEP instead of soft hyphens
//   --weights          Print the break weights of each word
//   --strict           Refuse tables that produce warnings
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use texhyph::{HyphenationOptions, Hyphenator};
use texhyph_core::character::is_word_char;
use texhyph_core::weights::format_weights;
use texhyph_patterns::Severity;
use texhyph_patterns::diagnostics::{CollectingDiagnostics, TracingDiagnostics};

enum Output {
    Marked,
    Separator(String),
    Weights,
}

fn main() {
    texhyph_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = texhyph_cli::parse_table_path(&args);

    if texhyph_cli::wants_help(&args) {
        println!("texhyph-hyphenate: Hyphenate text with TeX patterns.");
        println!();
        println!("Usage: texhyph-hyphenate [-t TABLE] [OPTIONS] [PHRASE...]");
        println!();
        println!("If PHRASE arguments are given, hyphenates each phrase.");
        println!("Otherwise reads phrases from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -t, --table PATH   Pattern table file (or directory containing hyph.tex)");
        println!("  --left-min N       Letters kept together at the start of a word (default: 1)");
        println!("  --right-min N      Letters kept together at the end of a word (default: 1)");
        println!("  --separator SEP    Show break points as SEP instead of soft hyphens");
        println!("  --weights          Print the break weights of each word");
        println!("  --strict           Refuse tables that produce warnings");
        println!("  -h, --help         Print this help");
        println!();
        println!("Set TEXHYPH_LOG (e.g. TEXHYPH_LOG=debug) to control log output.");
        return;
    }

    let mut options = HyphenationOptions::default();
    let mut output = Output::Marked;
    let mut strict = false;
    let mut phrases: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--left-min" => options.left_min = texhyph_cli::parse_count(arg, iter.next()),
            "--right-min" => options.right_min = texhyph_cli::parse_count(arg, iter.next()),
            "--separator" => match iter.next() {
                Some(sep) => output = Output::Separator(sep.clone()),
                None => texhyph_cli::fatal("--separator requires a value"),
            },
            "--weights" => output = Output::Weights,
            "--strict" => strict = true,
            s if s.starts_with("--") => texhyph_cli::fatal(&format!("unknown option: {s}")),
            _ => phrases.push(arg.clone()),
        }
    }

    let mut hyphenator = if strict {
        load_strict(table_path.as_deref())
    } else {
        texhyph_cli::load_hyphenator(table_path.as_deref(), &TracingDiagnostics)
            .unwrap_or_else(|e| texhyph_cli::fatal(&e))
    };
    hyphenator.set_options(options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let process = |phrase: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = match &output {
            Output::Marked => writeln!(out, "{}", hyphenator.hyphenate(phrase)),
            Output::Separator(sep) => writeln!(out, "{}", hyphenator.insert_hyphens(phrase, sep)),
            Output::Weights => write_weights(&hyphenator, phrase, out),
        };
        if let Err(e) = result {
            texhyph_cli::fatal(&format!("error writing output: {e}"));
        }
    };

    if phrases.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            process(&line, &mut out);
        }
    } else {
        for phrase in &phrases {
            process(phrase, &mut out);
        }
    }

    if let Err(e) = out.flush() {
        texhyph_cli::fatal(&format!("error writing output: {e}"));
    }
}

/// Load the table, treating every warning as fatal.
fn load_strict(table_path: Option<&str>) -> Hyphenator {
    let diagnostics = CollectingDiagnostics::new();
    let loaded = texhyph_cli::load_hyphenator(table_path, &diagnostics);
    let warnings = diagnostics.messages(Severity::Warning);
    if !warnings.is_empty() {
        for warning in &warnings {
            eprintln!("warning: {warning}");
        }
        texhyph_cli::fatal(&format!(
            "pattern table produced {} warning(s) in strict mode",
            warnings.len()
        ));
    }
    loaded.unwrap_or_else(|e| texhyph_cli::fatal(&e))
}

/// One line per word: the word followed by its weight vector.
fn write_weights(hyphenator: &Hyphenator, phrase: &str, out: &mut impl Write) -> io::Result<()> {
    for word in phrase.split(|c: char| !is_word_char(c)).filter(|w| !w.is_empty()) {
        writeln!(out, "{word} {}", format_weights(&hyphenator.word_weights(word)))?;
    }
    Ok(())
}
