//! Token kinds and tokens produced by the scanner.

use std::{fmt, sync::Arc};

use dxl_core::origin::Origin;

use crate::{error::ErrorCode, span::Span};

/// The kind of a scanned token.
///
/// Error kinds are ordinary tokens: the scanner never fails, and the parser
/// reports an error token when it cannot use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Absent,
    Alias,
    And,
    As,
    NoLonger,
    TransactedAt,
    ValidAsOf,
    ValidDuring,
    With,

    // Punctuation
    Ampersand,
    At,
    Backslash,
    Caret,
    Colon,
    Comma,
    Dot,
    DoubleDot,
    Equals,
    Exclamation,
    LeftBrace,
    LeftBracket,
    LeftParenthesis,
    Percent,
    QuestionMark,
    RightBrace,
    RightBracket,
    RightParenthesis,
    Semicolon,
    Tilde,

    // Literals
    BooleanLiteral,
    CharacterLiteral,
    DateLiteral,
    DateTimeLiteral,
    FloatingPointLiteral,
    IntegerLiteral,
    RationalNumberLiteral,
    StringLiteral,
    TimeLiteral,
    UrlLiteral,
    UuidLiteral,

    // Names and documentation
    Documentation,
    PlaceholderName,
    SymbolName,

    // Errors
    InvalidBoundedLiteral,
    InvalidCharacter,
    InvalidFloatingPointLiteral,
    InvalidPlaceholderName,
    InvalidSymbolName,
    UnterminatedBoundedLiteral,
    UnterminatedCharacterLiteral,
    UnterminatedDocumentation,
    UnterminatedStringLiteral,

    EndOfInput,
}

impl TokenKind {
    /// The text used for this kind in "expected" messages.
    pub fn text(&self) -> &'static str {
        match self {
            TokenKind::Absent => "absent",
            TokenKind::Alias => "alias",
            TokenKind::And => "and",
            TokenKind::As => "as",
            TokenKind::NoLonger => "no-longer",
            TokenKind::TransactedAt => "transacted-at",
            TokenKind::ValidAsOf => "valid-as-of",
            TokenKind::ValidDuring => "valid-during",
            TokenKind::With => "with",

            TokenKind::Ampersand => "'&'",
            TokenKind::At => "'@'",
            TokenKind::Backslash => "'\\'",
            TokenKind::Caret => "'^'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::DoubleDot => "'..'",
            TokenKind::Equals => "'='",
            TokenKind::Exclamation => "'!'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::LeftBracket => "'['",
            TokenKind::LeftParenthesis => "'('",
            TokenKind::Percent => "'%'",
            TokenKind::QuestionMark => "'?'",
            TokenKind::RightBrace => "'}'",
            TokenKind::RightBracket => "']'",
            TokenKind::RightParenthesis => "')'",
            TokenKind::Semicolon => "';'",
            TokenKind::Tilde => "'~'",

            TokenKind::BooleanLiteral => "[boolean literal]",
            TokenKind::CharacterLiteral => "[character literal]",
            TokenKind::DateLiteral => "[date literal]",
            TokenKind::DateTimeLiteral => "[date-time literal]",
            TokenKind::FloatingPointLiteral => "[floating point literal]",
            TokenKind::IntegerLiteral => "[integer literal]",
            TokenKind::RationalNumberLiteral => "[rational number literal]",
            TokenKind::StringLiteral => "[string literal]",
            TokenKind::TimeLiteral => "[time literal]",
            TokenKind::UrlLiteral => "[URL literal]",
            TokenKind::UuidLiteral => "[UUID literal]",

            TokenKind::Documentation => "[documentation]",
            TokenKind::PlaceholderName => "[placeholder name]",
            TokenKind::SymbolName => "[symbol name]",

            TokenKind::InvalidBoundedLiteral => "[invalid bounded literal]",
            TokenKind::InvalidCharacter => "[invalid character]",
            TokenKind::InvalidFloatingPointLiteral => "[invalid floating point literal]",
            TokenKind::InvalidPlaceholderName => "[invalid placeholder name]",
            TokenKind::InvalidSymbolName => "[invalid symbol name]",
            TokenKind::UnterminatedBoundedLiteral => "[unterminated bounded literal]",
            TokenKind::UnterminatedCharacterLiteral => "[unterminated character literal]",
            TokenKind::UnterminatedDocumentation => "[unterminated documentation]",
            TokenKind::UnterminatedStringLiteral => "[unterminated string literal]",

            TokenKind::EndOfInput => "[end of input]",
        }
    }

    /// Returns `true` for the kinds that mark malformed input.
    pub fn is_error(&self) -> bool {
        self.error_code().is_some()
    }

    /// The lexical error code of an error kind.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            TokenKind::UnterminatedStringLiteral => Some(ErrorCode::E001),
            TokenKind::UnterminatedCharacterLiteral => Some(ErrorCode::E002),
            TokenKind::UnterminatedDocumentation => Some(ErrorCode::E003),
            TokenKind::UnterminatedBoundedLiteral => Some(ErrorCode::E004),
            TokenKind::InvalidBoundedLiteral => Some(ErrorCode::E005),
            TokenKind::InvalidFloatingPointLiteral => Some(ErrorCode::E006),
            TokenKind::InvalidSymbolName => Some(ErrorCode::E007),
            TokenKind::InvalidPlaceholderName => Some(ErrorCode::E008),
            TokenKind::InvalidCharacter => Some(ErrorCode::E009),
            _ => None,
        }
    }

    /// A hint for fixing an error token.
    pub fn error_help(&self) -> Option<&'static str> {
        match self {
            TokenKind::UnterminatedStringLiteral => {
                Some("close the string with `\"` before the end of the line")
            }
            TokenKind::UnterminatedCharacterLiteral => {
                Some("close the character literal with `'` before the end of the line")
            }
            TokenKind::UnterminatedDocumentation => {
                Some("end the documentation block with a line break")
            }
            TokenKind::UnterminatedBoundedLiteral => {
                Some("bounded literals cannot contain whitespace; close them with `|`")
            }
            TokenKind::InvalidBoundedLiteral => Some(
                "use a date `|2021-06-01|`, a time `|T10:15:30Z|`, \
                 a date-time `|2021-06-01T10:15:30Z|` or a URL `|https://example.org|`",
            ),
            TokenKind::InvalidFloatingPointLiteral => {
                Some("write floating point numbers like `1.5`, `1.5e-3` or `2.0'f64`")
            }
            TokenKind::InvalidSymbolName => Some("symbol names must not end with `_`"),
            TokenKind::InvalidPlaceholderName => Some("placeholder names must end with `_`"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A scanned token: its kind, raw source text and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, line: u32, column: u32, span: Span) -> Self {
        Self {
            kind,
            text,
            line,
            column,
            span,
        }
    }

    /// Length of the token text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The origin of this token within the named source.
    pub fn origin(&self, file_name: &Arc<str>) -> Origin {
        Origin::new(Arc::clone(file_name), self.line, self.column)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:'{}'@{},{}",
            self.kind.text(),
            self.text,
            self.line,
            self.column
        )
    }
}
