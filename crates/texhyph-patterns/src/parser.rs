// TeX pattern table parser
//
// Accepted input is a sequence of `\patterns{...}` and `\hyphenation{...}`
// groups. `%` starts a comment that runs to the end of the line, at the
// top level, inside a group name and inside a group body. Group bodies are
// split on whitespace; every token of a `patterns` group goes into the
// trie and every token of a `hyphenation` group into the exception table.
// Several groups of the same kind accumulate.

use std::io::Read;
use std::str::Chars;

use crate::ParseError;
use crate::diagnostics::{Diagnostics, Severity, TracingDiagnostics};
use crate::exceptions::ExceptionTable;
use crate::pattern::Pattern;
use crate::rules::RuleSet;
use crate::trie::{Insertion, PatternTrie};

const COMMENT: char = '%';
const ESCAPE: char = '\\';
const GROUP_OPEN: char = '{';
const GROUP_CLOSE: char = '}';

/// How much of an unterminated group name is quoted in the error.
const NAME_PREVIEW_LEN: usize = 20;

/// The group keywords the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Patterns,
    Hyphenation,
}

impl Group {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "patterns" => Some(Group::Patterns),
            "hyphenation" => Some(Group::Hyphenation),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Group::Patterns => "patterns",
            Group::Hyphenation => "hyphenation",
        }
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// Character reader that tracks the 1-based line number.
struct Cursor<'a> {
    chars: Chars<'a>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            line: 1,
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consume everything up to and including the next newline.
    fn skip_comment(&mut self) {
        while let Some(c) = self.next() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Read a group name up to (and consuming) the opening brace.
    fn read_group_name(&mut self, line: usize) -> Result<String, ParseError> {
        let mut name = String::new();
        while let Some(c) = self.next() {
            match c {
                GROUP_OPEN => return Ok(name),
                COMMENT => self.skip_comment(),
                _ => name.push(c),
            }
        }
        Err(ParseError::MissingOpenBrace {
            name_start: name.trim_start().chars().take(NAME_PREVIEW_LEN).collect(),
            line,
        })
    }

    /// Read the whitespace-separated tokens of a group body up to (and
    /// consuming) the closing brace. Each token comes with its line.
    fn read_group_body(
        &mut self,
        group: Group,
        line: usize,
    ) -> Result<Vec<(String, usize)>, ParseError> {
        let mut tokens = Vec::new();
        let mut token = String::new();
        let mut token_line = self.line;

        let flush = |token: &mut String, token_line: usize, tokens: &mut Vec<(String, usize)>| {
            if !token.is_empty() {
                tokens.push((std::mem::take(token), token_line));
            }
        };

        while let Some(c) = self.next() {
            match c {
                GROUP_CLOSE => {
                    flush(&mut token, token_line, &mut tokens);
                    return Ok(tokens);
                }
                COMMENT => {
                    flush(&mut token, token_line, &mut tokens);
                    self.skip_comment();
                }
                c if c.is_whitespace() => flush(&mut token, token_line, &mut tokens),
                c => {
                    if token.is_empty() {
                        token_line = self.line;
                    }
                    token.push(c);
                }
            }
        }

        Err(ParseError::UnterminatedGroup {
            group: group.as_str().to_string(),
            line,
        })
    }
}

// ---------------------------------------------------------------------------
// TableParser
// ---------------------------------------------------------------------------

/// Builds a [`RuleSet`] from pattern table text.
///
/// Warnings (duplicate patterns, multi-digit weights) and failures are
/// reported to the diagnostics sink given at construction. A failed parse
/// never yields a partial rule set.
pub struct TableParser<'d> {
    diagnostics: &'d dyn Diagnostics,
}

impl<'d> TableParser<'d> {
    pub fn new(diagnostics: &'d dyn Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Parse a complete table.
    pub fn parse(&self, text: &str) -> Result<RuleSet, ParseError> {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        self.parse_groups(text).map_err(|err| self.fail(err))
    }

    /// Read a complete table from `reader` (UTF-8) and parse it.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<RuleSet, ParseError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|err| self.fail(ParseError::from(err)))?;
        self.parse(&text)
    }

    fn fail(&self, err: ParseError) -> ParseError {
        self.diagnostics.report(Severity::Error, &err.to_string());
        err
    }

    fn warn(&self, line: usize, message: &str) {
        self.diagnostics
            .report(Severity::Warning, &format!("line {line}: {message}"));
    }

    fn parse_groups(&self, text: &str) -> Result<RuleSet, ParseError> {
        let mut patterns = PatternTrie::new();
        let mut exceptions = ExceptionTable::new();
        let mut cursor = Cursor::new(text);

        while let Some(c) = cursor.next() {
            match c {
                COMMENT => cursor.skip_comment(),
                ESCAPE => {
                    let line = cursor.line;
                    let name = cursor.read_group_name(line)?;
                    let Some(group) = Group::from_name(name.trim()) else {
                        return Err(ParseError::UnknownGroup {
                            name: name.trim().to_string(),
                            line,
                        });
                    };
                    let tokens = cursor.read_group_body(group, line)?;
                    match group {
                        Group::Patterns => {
                            for (token, token_line) in &tokens {
                                self.add_pattern(&mut patterns, token, *token_line);
                            }
                        }
                        Group::Hyphenation => {
                            for (token, _) in &tokens {
                                exceptions.insert(token);
                            }
                        }
                    }
                }
                // stray text between groups is ignored
                _ => {}
            }
        }

        tracing::debug!(
            patterns = patterns.len(),
            exceptions = exceptions.len(),
            "pattern table loaded"
        );
        Ok(RuleSet::new(patterns, exceptions))
    }

    fn add_pattern(&self, patterns: &mut PatternTrie, token: &str, line: usize) {
        let pattern = Pattern::parse(token);
        if pattern.multi_digit {
            self.warn(line, &format!("multi-digit weight in pattern '{token}'"));
        }
        match patterns.insert(pattern) {
            Insertion::Added => {}
            Insertion::Replaced { previous } => {
                self.warn(
                    line,
                    &format!("duplicate pattern: '{token}' replaces '{previous}'"),
                );
            }
            Insertion::Ignored => {
                self.warn(line, &format!("pattern '{token}' has no letters, ignored"));
            }
        }
    }
}

/// Parse a table, reporting diagnostics through `tracing`.
pub fn parse(text: &str) -> Result<RuleSet, ParseError> {
    TableParser::new(&TracingDiagnostics).parse(text)
}

/// Read and parse a table, reporting diagnostics through `tracing`.
pub fn parse_reader<R: Read>(reader: R) -> Result<RuleSet, ParseError> {
    TableParser::new(&TracingDiagnostics).parse_reader(reader)
}
