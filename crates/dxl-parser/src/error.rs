//! Error and diagnostic system for the DXL parser.
//!
//! Parsing is all-or-nothing: the first violated expectation produces a
//! single [`Diagnostic`], wrapped in a [`ParseError`] at the public API. The
//! scanner never fails; malformed input becomes error tokens, and the
//! diagnostic raised when the parser meets one carries a lexical error code.
//!
//! # Example
//!
//! ```
//! # use dxl_parser::error::{Diagnostic, ErrorCode};
//! # use dxl_parser::Span;
//!
//! let diag = Diagnostic::error("Expected ';' at people.dxl (1,6); found 'bob'.")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(6..9), "unexpected token")
//!     .with_help("end each declaration with `;`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
