// texhyph-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use texhyph::{Hyphenator, HyphenatorError};
use texhyph_patterns::Diagnostics;

/// Pattern table file name looked up in each search directory.
const TABLE_FILE: &str = "hyph.tex";

/// Environment variable naming a table file or a directory holding one.
const TABLE_ENV: &str = "TEXHYPH_TABLE";

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "TEXHYPH_LOG";

/// Install a `tracing` subscriber writing to stderr.
///
/// The filter is read from `TEXHYPH_LOG` (for example `debug` or
/// `texhyph_patterns=debug`) and defaults to `warn`. Calling this more than
/// once is harmless.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init fails only if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Find a pattern table and load it.
///
/// Search order:
/// 1. `table_path` argument (if provided; nothing else is tried)
/// 2. `TEXHYPH_TABLE` environment variable (a file, or a directory
///    containing `hyph.tex`)
/// 3. `~/.texhyph/hyph.tex`
/// 4. `/usr/share/texhyph/hyph.tex`
/// 5. `hyph.tex` in the current directory
pub fn load_hyphenator(
    table_path: Option<&str>,
    diagnostics: &dyn Diagnostics,
) -> Result<Hyphenator, String> {
    let candidates = build_search_paths(
        table_path,
        std::env::var(TABLE_ENV).ok(),
        home_dir(),
        std::env::current_dir().ok(),
    );

    for path in &candidates {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using pattern table");
            return Hyphenator::from_path_with(path, diagnostics)
                .map_err(|e: HyphenatorError| e.to_string());
        }
    }

    Err(format!(
        "could not find a pattern table in any of the search paths:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate table files, most specific first.
fn build_search_paths(
    table_path: Option<&str>,
    env_table: Option<String>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    // 1. Explicit path from argument
    if let Some(p) = table_path {
        return vec![table_file(PathBuf::from(p))];
    }

    let mut paths = Vec::new();

    // 2. TEXHYPH_TABLE environment variable
    if let Some(env_path) = env_table.filter(|p| !p.is_empty()) {
        paths.push(table_file(PathBuf::from(env_path)));
    }

    // 3. Home directory
    if let Some(home) = home {
        paths.push(home.join(".texhyph").join(TABLE_FILE));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/texhyph").join(TABLE_FILE));

    // 5. Current directory
    if let Some(cwd) = cwd {
        paths.push(cwd.join(TABLE_FILE));
    }

    paths
}

/// A directory stands for the `hyph.tex` inside it.
fn table_file(path: PathBuf) -> PathBuf {
    if path.is_dir() {
        path.join(TABLE_FILE)
    } else {
        path
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--table=PATH` or `-t PATH` argument from command line args.
///
/// Returns `(table_path, remaining_args)`.
pub fn parse_table_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut table_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--table=") {
            table_path = Some(val.to_string());
        } else if arg == "--table" || arg == "-t" {
            match iter.next() {
                Some(val) => table_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (table_path, remaining)
}

/// Parse a non-negative count given to `flag`, or exit with an error.
pub fn parse_count(flag: &str, value: Option<&String>) -> usize {
    let Some(value) = value else {
        fatal(&format!("{flag} requires a value"));
    };
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid number for {flag}: {value}")))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
