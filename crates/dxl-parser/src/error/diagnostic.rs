//! The core diagnostic type for the DXL error system.
//!
//! A [`Diagnostic`] represents the fatal failure of a parse with an optional
//! error code, the origin of the offending token, labeled source spans, and
//! help text.

use std::fmt;

use dxl_core::origin::Origin;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E103]: Expected interval end after its start at people.dxl (4,50); found '|2020-01-01T00:00:00Z|'.
///   --> people.dxl:4:50
///    |
///  4 |   age = 3 valid-during |2021-01-01T00:00:00Z|..|2020-01-01T00:00:00Z|
///    |                        ---------------------   ^^^^^^^^^^^^^^^^^^^^^ interval ends here
///    |                        |
///    |                        interval starts here
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    origin: Origin,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use dxl_parser::error::{Diagnostic, ErrorCode};
    /// # use dxl_parser::Span;
    ///
    /// let diag = Diagnostic::error("Expected expression.")
    ///     .with_code(ErrorCode::E101)
    ///     .with_label(Span::new(10..10), "input ends here");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            origin: Origin::Null,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the origin of the offending token, [`Origin::Null`] at true end of input.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the origin of the offending token.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
