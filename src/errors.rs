//! Sift error handling - unified encapsulated API.
//!
//! One error type, a closed kind enum, and miette-powered diagnostics.
//! Both parse and resolution failures are raised synchronously and
//! propagate to the caller; there is no retry or recovery layer here.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};

use crate::parser::Span;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// The source text an error points into, with a display name for reports.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Wraps a DSL expression string for error reporting.
    pub fn from_expression(content: impl Into<String>) -> Self {
        Self {
            name: "tag expression".to_string(),
            content: content.into(),
        }
    }

    /// Wraps a requested suite key for error reporting.
    pub fn from_suite_key(key: impl Into<String>) -> Self {
        Self {
            name: "suite selection".to_string(),
            content: key.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// THE ERROR TYPE
// ============================================================================

/// The single error type - no wrapper, no variants, just essential data.
#[derive(Debug)]
pub struct SiftError {
    /// What went wrong (kind-specific data)
    pub kind: ErrorKind,
    /// Where it happened (source text and primary span)
    pub source_info: SourceInfo,
    /// How to help (auto-populated per kind)
    pub diagnostic_info: DiagnosticInfo,
}

/// All error kinds as a clean enum.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    // Parse errors - malformed DSL text
    EmptyExpression,
    ExpectedTag { found: String },
    TrailingTokens { first: String },

    // Resolution errors - suite catalog lookups
    UnknownSuite { key: String },
}

/// Context-specific source information.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

impl ErrorKind {
    /// Get the error category for test assertions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyExpression | Self::ExpectedTag { .. } | Self::TrailingTokens { .. } => {
                ErrorCategory::Parse
            }
            Self::UnknownSuite { .. } => ErrorCategory::Resolve,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::EmptyExpression => "empty_expression",
            Self::ExpectedTag { .. } => "expected_tag",
            Self::TrailingTokens { .. } => "trailing_tokens",
            Self::UnknownSuite { .. } => "unknown_suite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Resolve,
}

impl std::error::Error for SiftError {}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::EmptyExpression => {
                write!(f, "Parse error: empty tag expression")
            }
            ErrorKind::ExpectedTag { found } => {
                write!(f, "Parse error: expected a tag, found {}", found)
            }
            ErrorKind::TrailingTokens { first } => {
                write!(f, "Parse error: unexpected {} after the expression", first)
            }
            ErrorKind::UnknownSuite { key } => {
                write!(f, "Resolution error: unknown suite '{}'", key)
            }
        }
    }
}

impl Diagnostic for SiftError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl SiftError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::EmptyExpression => "nothing to parse".into(),
            ErrorKind::ExpectedTag { .. } => "tag expected here".into(),
            ErrorKind::TrailingTokens { .. } => "unconsumed input starts here".into(),
            ErrorKind::UnknownSuite { .. } => "not a known suite".into(),
        }
    }
}

// ============================================================================
// ERROR CONSTRUCTORS
// ============================================================================

fn parse_error(
    kind: ErrorKind,
    source: &SourceContext,
    span: SourceSpan,
    help: Option<String>,
) -> SiftError {
    let error_code = format!("sift::parse::{}", kind.code_suffix());
    SiftError {
        kind,
        source_info: SourceInfo {
            source: source.to_named_source(),
            primary_span: span,
            phase: "parse".into(),
        },
        diagnostic_info: DiagnosticInfo { help, error_code },
    }
}

pub(crate) fn empty_expression(source: &SourceContext) -> SiftError {
    parse_error(
        ErrorKind::EmptyExpression,
        source,
        unspanned(),
        Some("a tag expression needs at least one tag, e.g. `@smoke`".into()),
    )
}

pub(crate) fn expected_tag(source: &SourceContext, found: &str, span: Span) -> SiftError {
    parse_error(
        ErrorKind::ExpectedTag {
            found: found.into(),
        },
        source,
        to_source_span(span),
        Some("operators `&&`, `||` and `!` must be followed by a tag".into()),
    )
}

pub(crate) fn trailing_tokens(source: &SourceContext, first: &str, span: Span) -> SiftError {
    parse_error(
        ErrorKind::TrailingTokens {
            first: first.into(),
        },
        source,
        to_source_span(span),
        Some("tags must be joined with `&&` or `||`".into()),
    )
}

pub(crate) fn unknown_suite(key: &str, known: &[&str]) -> SiftError {
    let source = SourceContext::from_suite_key(key);
    SiftError {
        kind: ErrorKind::UnknownSuite { key: key.into() },
        source_info: SourceInfo {
            source: source.to_named_source(),
            primary_span: (0..key.len()).into(),
            phase: "resolve".into(),
        },
        diagnostic_info: DiagnosticInfo {
            help: Some(format!("known suites: {}", known.join(", "))),
            error_code: "sift::resolve::unknown_suite".into(),
        },
    }
}

// ============================================================================
// SPAN UTILITIES
// ============================================================================

/// Creates a placeholder span for errors not tied to a specific location in
/// the source text. This makes the intent of an empty span explicit and
/// searchable.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Converts a token span to a miette SourceSpan.
pub fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a SiftError with full miette diagnostics.
///
/// This provides rich error formatting with source spans, labels, and help
/// text. Use this for user-facing error display in CLI contexts.
pub fn print_error(error: SiftError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
