//! Error types for DXL operations.
//!
//! This module provides the main error type [`DxlError`] which wraps the
//! failures that can occur while reading, parsing and checking DXL text.

use std::io;

use thiserror::Error;

use dxl_parser::error::ParseError;

/// The main error type for DXL operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the parsed source next to the error so callers
/// can render the diagnostic's labelled spans against it.
#[derive(Debug, Error)]
pub enum DxlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{path} is not in canonical form")]
    NotCanonical { path: String },
}

impl DxlError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
