// Diagnostics sink for table loading
//
// The parser reports malformed-but-usable input (duplicate patterns,
// multi-digit weights) and fatal failures to a sink passed in by the
// caller. Nothing in the crate depends on the sink doing anything.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// How serious a reported condition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The table is loaded anyway; the source is probably malformed.
    Warning,
    /// Loading is aborted.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Receiver of `(severity, message)` reports.
pub trait Diagnostics {
    fn report(&self, severity: Severity, message: &str);
}

impl<F> Diagnostics for F
where
    F: Fn(Severity, &str),
{
    fn report(&self, severity: Severity, message: &str) {
        self(severity, message)
    }
}

/// Forwards reports to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _severity: Severity, _message: &str) {}
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything reported so far.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages reported with the given severity.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }

    /// Number of warnings reported so far.
    pub fn warning_count(&self) -> usize {
        self.messages(Severity::Warning).len()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_string()));
    }
}
