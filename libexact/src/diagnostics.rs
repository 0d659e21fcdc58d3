//! Diagnostics reported on malformed expression text.
//!
//! Every error diagnostic carries a stable code (like `P0002`). Codes are grouped into
//! registries by the phase that produces them, and each code has a long-form explanation that
//! can be looked up with [`Diagnostic::all_codes_with_explanations`].

use crate::common::Span;
use crate::parser::errors::ParseErrors;
use crate::scanner::errors::ScanErrors;

use std::collections::HashMap;
use std::fmt;

/// The kind of a diagnostic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic. The expression containing it has no value.
    Error,
    /// A note diagnostic is a generic annotation with no specific connotation like `error`. It
    /// is most useful as an associated diagnostic, for example in expanding on a primary error.
    Note,
    /// A help diagnostic should instruct the user how their expression can be fixed.
    Help,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Note => "note",
            Self::Help => "help",
        })
    }
}

/// A secondary diagnostic associated with a primary `Diagnostic`.
#[derive(Clone, PartialEq, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub msg: String,
}

/// A diagnostic for an expression.
#[derive(Clone, PartialEq, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub title: String,
    pub code: Option<&'static str>,
    pub msg: Option<String>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
    pub unspanned_associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    /// Creates an error diagnostic at a span.
    pub(crate) fn span_err<S, M, N>(span: S, title: M, code: &'static str, msg: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            span: span.into(),
            title: title.into(),
            code: Some(code),
            msg: msg.into(),
            associated_diagnostics: Vec::with_capacity(2),
            unspanned_associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Note,
                span: self.span,
                msg: note.into(),
            });
        self
    }

    /// Adds a note to the diagnostic at a different span.
    pub(crate) fn with_spanned_note<S, M>(mut self, span: S, note: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Note,
            span: span.into(),
            msg: note.into(),
        });
        self
    }

    /// Adds a help message to the diagnostic.
    pub(crate) fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Help,
                span: self.span,
                msg: help.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic, possibly at a different span.
    pub(crate) fn with_spanned_help<S, M>(mut self, span: S, help: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            span: span.into(),
            msg: help.into(),
        });
        self
    }

    /// Returns all diagnostic codes and their explanations.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
        let mut map = HashMap::new();
        map.extend(ScanErrors::codes_with_explanations());
        map.extend(ParseErrors::codes_with_explanations());
        map
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.kind, code, self.title),
            None => write!(f, "{}: {}", self.kind, self.title),
        }
    }
}

/// A record of a single diagnostic code.
pub(crate) trait DiagnosticRecord {
    /// The stable code of the diagnostic, like `P0001`.
    const CODE: &'static str;
    /// A long-form explanation of the diagnostic.
    const EXPLANATION: &'static str;
}

/// A collection of diagnostic records produced by one phase.
pub(crate) trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}
