//! Error codes for the DXL diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexical errors, one per error token kind
//! - `E1xx` - Parser errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexical Errors (E0xx)
    // =========================================================================
    /// Unterminated string literal.
    ///
    /// A `"` was opened but the line ended before the closing quote.
    E001,

    /// Unterminated character literal.
    ///
    /// A `'` was opened but the line ended before the closing quote.
    E002,

    /// Unterminated documentation.
    ///
    /// A `#` documentation block reached the end of input without a final
    /// line break.
    E003,

    /// Unterminated bounded literal.
    ///
    /// A `|` literal hit whitespace or the end of input before its closing `|`.
    E004,

    /// Invalid bounded literal.
    ///
    /// The text between `|` delimiters is not a date, time, date-time or URL.
    E005,

    /// Invalid floating point literal.
    ///
    /// A decimal integer followed by `.` and digits did not form a valid
    /// floating point number.
    E006,

    /// Invalid symbol name.
    ///
    /// Symbol names must not end with `_`.
    E007,

    /// Invalid placeholder name.
    ///
    /// Placeholder names start and end with `_`.
    E008,

    /// Invalid character.
    ///
    /// A character that cannot start any token.
    E009,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered a token it did not expect at this position.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before a complete construct was parsed.
    E101,

    /// Invalid literal value.
    ///
    /// A literal is lexically well formed but does not denote a value, such
    /// as a date-time that is not a valid instant.
    E102,

    /// Invalid time interval.
    ///
    /// A `valid-during` interval does not end after it starts.
    E103,

    /// Alias target not qualified.
    ///
    /// The name after `as` in an alias must have at least two segments.
    E104,

    /// Empty document.
    ///
    /// A document must contain at least one declaration.
    E105,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E006 => "E006",
            ErrorCode::E007 => "E007",
            ErrorCode::E008 => "E008",
            ErrorCode::E009 => "E009",
            // Parser errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::E001 => "unterminated string literal",
            ErrorCode::E002 => "unterminated character literal",
            ErrorCode::E003 => "unterminated documentation",
            ErrorCode::E004 => "unterminated bounded literal",
            ErrorCode::E005 => "invalid bounded literal",
            ErrorCode::E006 => "invalid floating point literal",
            ErrorCode::E007 => "invalid symbol name",
            ErrorCode::E008 => "invalid placeholder name",
            ErrorCode::E009 => "invalid character",
            // Parser errors
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "invalid literal value",
            ErrorCode::E103 => "invalid time interval",
            ErrorCode::E104 => "alias target not qualified",
            ErrorCode::E105 => "empty document",
        }
    }

    /// Returns `true` for codes raised because of an error token.
    pub fn is_lexical(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
