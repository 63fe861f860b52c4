//! Line-tagged errors and warnings collected while processing one source.
//!
//! A `Diagnostics` value is owned by whoever drives the scan, so separate
//! scans never share state.

use std::fmt::{self, Display};

use tracing::debug;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    line: usize,
    location: String,
    message: String,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(severity: Severity, line: usize, message: S) -> Self {
        Self {
            severity,
            line,
            location: String::new(),
            message: message.into(),
        }
    }

    /// Qualifies where on the line the problem was found, e.g. `" at end"`.
    pub fn at<S: Into<String>>(mut self, location: S) -> Self {
        self.location = location.into();
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "[line {}] {}{}: {}", self.line, label, self.location, self.message)
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    had_errors: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_error<S: Into<String>>(&mut self, line: usize, message: S) {
        self.push(Diagnostic::new(Severity::Error, line, message));
    }

    pub fn report_warning<S: Into<String>>(&mut self, line: usize, message: S) {
        self.push(Diagnostic::new(Severity::Warning, line, message));
    }

    /// Records an error raised elsewhere in the crate.
    pub fn report(&mut self, error: &Error) {
        self.report_error(error.line().unwrap_or(0), error.message());
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        debug!(
            line = diagnostic.line,
            severity = ?diagnostic.severity,
            message = %diagnostic.message,
            "diagnostic reported"
        );
        if diagnostic.severity == Severity::Error {
            self.had_errors = true;
        }
        self.entries.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.had_errors
    }

    /// Every diagnostic in the order it was reported.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.had_errors = false;
    }
}
