//! Public error types.
//!
//! Internal errors (see [`crate::signature::ParseError`]) are converted into
//! these at the API boundary so callers only ever match on [`Error`].

use core::fmt;

use crate::signature::{ParseError, Span};

/// Public error type for every fallible operation in this crate.
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid API usage, e.g. a member name that is not positional.
    Api(String),

    /// The input text could not be turned into a signature, or the signature
    /// is unusable for what was asked of it.
    ///
    /// Carries one or more diagnostics pointing into `source`.
    Compilation {
        diagnostics: Vec<Diagnostic>,
        source: String,
        filename: Option<String>,
    },
}

impl Error {
    /// Build a single-diagnostic compilation error.
    pub fn compilation(diagnostic: Diagnostic, source: impl Into<String>) -> Self {
        Error::Compilation {
            diagnostics: vec![diagnostic],
            source: source.into(),
            filename: None,
        }
    }

    /// Set the filename for this error.
    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        match self {
            Error::Compilation {
                diagnostics,
                source,
                ..
            } => Error::Compilation {
                diagnostics,
                source,
                filename: Some(filename.into()),
            },
            other => other,
        }
    }

    /// Set the filename if provided, otherwise return self unchanged.
    pub fn with_filename_opt(self, filename: Option<&str>) -> Self {
        match filename {
            Some(f) => self.with_filename(f),
            None => self,
        }
    }

    /// Get the filename associated with this error, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Error::Compilation { filename, .. } => filename.as_deref(),
            Error::Api(_) => None,
        }
    }

    /// Diagnostics carried by this error; empty for [`Error::Api`].
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            Error::Api(_) => &[],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Api(msg) => write!(f, "API error: {}", msg),
            Error::Compilation { diagnostics, .. } => {
                let errors = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Error)
                    .count();
                match diagnostics.first() {
                    Some(first) if diagnostics.len() == 1 => write!(f, "{}", first.message),
                    _ => write!(f, "signature rejected with {} error(s)", errors),
                }
            }
        }
    }
}

impl std::error::Error for Error {}

/// A diagnostic message with a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Byte range of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help messages suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Error code (e.g. "P001") for documentation lookup.
    pub code: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, message, span)
    }

    fn new(severity: Severity, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            span,
            related: Vec::new(),
            help: Vec::new(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            span,
            message: message.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The input cannot be used.
    Error,
    /// The input is usable but the generated code would be suspicious.
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g. "first declared here").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let diagnostic = err.to_diagnostic();
        Error::compilation(diagnostic, err.input)
    }
}
