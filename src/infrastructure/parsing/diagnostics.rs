//! Per-entry diagnostics
//!
//! Problems with a single documentation entry never abort a build. They are
//! rendered in a fixed, human readable format and handed to a
//! [`DiagnosticSink`]; the entry itself is skipped.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::domain::EntryKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No classification rule matched a definition term
    UnknownType {
        text: String,
        name: String,
        class_name: String,
    },
    /// A classified link had an empty name or an empty decoded href
    MalformedLink {
        name: String,
        kind: EntryKind,
        path: String,
    },
    /// Last entry accepted before a malformed link, to help locate the bad markup
    MostRecentValue {
        name: String,
        kind: EntryKind,
        path: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType {
                text,
                name,
                class_name,
            } => write!(
                f,
                "Unknown type found. Please submit a bug report. (Text: {text}, Name: {name}, className: {class_name})"
            ),
            Self::MalformedLink { name, kind, path } => write!(
                f,
                "Something went wrong with parsing a link, possibly unescaped tags in Javadoc. (Name: {name}, Type: {kind}, Link: {path})"
            ),
            Self::MostRecentValue { name, kind, path } => write!(
                f,
                "Most recently parsed value was: (Name: {name}, Type: {kind}, Path: {path})"
            ),
        }
    }
}

/// Destination for per-entry diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Writes every diagnostic as one line on the process error stream
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: Diagnostic) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{diagnostic}");
    }
}

/// Keeps diagnostics in memory so callers can inspect them after a run
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered diagnostic lines, in report order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics().iter().map(ToString::to_string).collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
