//! Diagnostic infrastructure.
//!
//! This module provides infrastructure for collecting and formatting
//! compilation errors and warnings. It works with byte spans rather than raw
//! string positions.
//!
//! # Components
//!
//! - `Diagnostic` - A single diagnostic message with location and severity
//! - `DiagnosticBag` - A collection of diagnostics for a compilation phase
//! - `DiagnosticSeverity` - Error, Warning, Info, or Hint
//! - `codes` - stable sable error codes
//!
//! # Example
//!
//! ```ignore
//! let mut bag = DiagnosticBag::with_file("main.sb");
//! bag.error(span, "Cannot find name 'foo'", codes::UNRESOLVED_NAME);
//!
//! for diag in bag.iter() {
//!     println!("{diag}");
//! }
//! ```

use crate::span::{Span, offset_to_line_col};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable diagnostic codes emitted by the sable front end.
pub mod codes {
    /// A simple name could not be resolved in the current scope.
    pub const UNRESOLVED_NAME: u32 = 103;
    /// A member access named a member the receiver type does not define.
    pub const UNKNOWN_MEMBER: u32 = 117;
    /// An anonymous record member declarator is not a name-bearing shape.
    pub const INVALID_MEMBER_DECLARATOR: u32 = 746;
    /// A value cannot be used as an anonymous record property (void, unsafe,
    /// restricted, or typeless).
    pub const BAD_PROPERTY_VALUE_TYPE: u32 = 828;
    /// Two properties of one anonymous record share a name.
    pub const DUPLICATE_PROPERTY_NAME: u32 = 833;
    /// Anonymous record creation is not permitted in the enclosing context.
    pub const ANONYMOUS_TYPE_NOT_AVAILABLE: u32 = 836;
    /// A call target is not a function.
    pub const NOT_CALLABLE: u32 = 1955;
}

// =============================================================================
// Diagnostic Severity
// =============================================================================

/// The severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// A hint (lowest severity)
    Hint = 4,
    /// Informational message
    Info = 3,
    /// A warning
    Warning = 2,
    /// An error (highest severity)
    Error = 1,
}

impl DiagnosticSeverity {
    /// Get the severity name for display.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
            DiagnosticSeverity::Hint => "hint",
        }
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticSeverity::Error)
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for DiagnosticSeverity {
    fn default() -> Self {
        DiagnosticSeverity::Error
    }
}

// =============================================================================
// Related Information
// =============================================================================

/// Additional information related to a diagnostic.
///
/// Used for "see also" locations, such as the first occurrence of a name
/// when reporting a duplicate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiagnosticRelatedInfo {
    /// File containing the related information
    pub file_name: String,
    /// Location span
    pub span: Span,
    /// Message explaining the relationship
    pub message: String,
}

impl DiagnosticRelatedInfo {
    /// Create new related information.
    pub fn new(file_name: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        DiagnosticRelatedInfo {
            file_name: file_name.into(),
            span,
            message: message.into(),
        }
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A diagnostic message with location, severity, and error code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The file containing the diagnostic
    pub file_name: String,
    /// The source span (byte offsets)
    pub span: Span,
    /// The diagnostic message
    pub message: String,
    /// The severity level
    pub severity: DiagnosticSeverity,
    /// The diagnostic code (e.g., SB0833)
    pub code: u32,
    /// Optional related information
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub related: Vec<DiagnosticRelatedInfo>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        severity: DiagnosticSeverity,
        code: u32,
    ) -> Self {
        Diagnostic {
            file_name: file_name.into(),
            span,
            message: message.into(),
            severity,
            code,
            related: Vec::new(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self::new(file_name, span, message, DiagnosticSeverity::Error, code)
    }

    /// Create a warning diagnostic.
    pub fn warning(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self::new(file_name, span, message, DiagnosticSeverity::Warning, code)
    }

    /// Add related information.
    pub fn with_related(mut self, info: DiagnosticRelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Format the diagnostic against its source text.
    ///
    /// Returns a string like: `main.sb(1,5): error SB0103: Cannot find name 'foo'`
    pub fn format(&self, source: &str) -> String {
        let (line, col) = offset_to_line_col(source, self.span.start);
        format!(
            "{}({},{}): {} SB{:04}: {}",
            self.file_name,
            line + 1,
            col + 1,
            self.severity,
            self.code,
            self.message
        )
    }

    /// Format the diagnostic in a simple format.
    ///
    /// Returns a string like: `error[SB0103]: Cannot find name 'foo'`
    pub fn format_simple(&self) -> String {
        format!("{}[SB{:04}]: {}", self.severity, self.code, self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

// =============================================================================
// DiagnosticBag
// =============================================================================

/// A collection of diagnostics for a compilation phase.
///
/// DiagnosticBag provides a convenient interface for collecting diagnostics
/// during binding. It tracks error counts and provides filtering capabilities.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    /// The collected diagnostics
    diagnostics: Vec<Diagnostic>,
    /// The file name for diagnostics added without explicit file
    default_file: String,
    /// Error count
    error_count: usize,
}

impl DiagnosticBag {
    /// Create a new empty diagnostic bag.
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    /// Create a new diagnostic bag with a default file name.
    pub fn with_file(file_name: impl Into<String>) -> Self {
        DiagnosticBag {
            diagnostics: Vec::new(),
            default_file: file_name.into(),
            error_count: 0,
        }
    }

    /// Get the default file name.
    pub fn default_file(&self) -> &str {
        &self.default_file
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == DiagnosticSeverity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Add an error diagnostic.
    pub fn error(&mut self, span: Span, message: impl Into<String>, code: u32) {
        self.add(Diagnostic::error(&self.default_file, span, message, code));
    }

    /// Add a warning diagnostic.
    pub fn warning(&mut self, span: Span, message: impl Into<String>, code: u32) {
        self.add(Diagnostic::warning(&self.default_file, span, message, code));
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the error count.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get all diagnostics as a slice.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Get only errors.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Filter diagnostics by code.
    pub fn by_code(&self, code: u32) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    /// Sort diagnostics by file, then by position.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| match a.file_name.cmp(&b.file_name) {
                std::cmp::Ordering::Equal => a.span.start.cmp(&b.span.start),
                other => other,
            });
    }

    /// Take all diagnostics, leaving the bag empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Merge another DiagnosticBag into this one.
    pub fn merge(&mut self, other: DiagnosticBag) {
        for diag in other.diagnostics {
            self.add(diag);
        }
    }

    /// Get error codes as a vector (for testing).
    pub fn error_codes(&self) -> Vec<u32> {
        self.errors().map(|d| d.code).collect()
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl Extend<Diagnostic> for DiagnosticBag {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        for diag in iter {
            self.add(diag);
        }
    }
}

// =============================================================================
// Diagnostic Formatting Utilities
// =============================================================================

/// Format a diagnostic message with placeholders.
///
/// Replaces {0}, {1}, etc. with the provided arguments.
///
/// # Example
/// ```ignore
/// let msg = format_message("Cannot assign '{0}' to anonymous record property", &["void"]);
/// ```
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Format a code snippet with a span underline.
///
/// Returns a string like:
/// ```text
/// let x = 1;
///     ^
/// ```
pub fn format_code_snippet(text: &str, span: Span) -> String {
    let mut result = String::new();

    // Find line containing the span start
    let mut line_start = 0;
    for (i, ch) in text.char_indices() {
        if i >= span.start as usize {
            break;
        }
        if ch == '\n' {
            line_start = i + 1;
        }
    }

    // Find line end
    let line_end = text[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(text.len());

    let line_text = &text[line_start..line_end];
    result.push_str(line_text);
    result.push('\n');

    // Create underline
    let col = (span.start as usize).saturating_sub(line_start);
    let underline_len = (span.len() as usize)
        .min(line_end.saturating_sub(span.start as usize))
        .max(1);
    result.push_str(&" ".repeat(col));
    result.push_str(&"^".repeat(underline_len));

    result
}

// =============================================================================
// Tests
// =============================================================================
