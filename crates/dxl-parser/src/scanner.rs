//! Lexical scanner for DXL source text.
//!
//! The scanner hands out one [`Token`] per call to [`Scanner::next_token`]. It never
//! fails: malformed input becomes an error-kind token, and the end of input
//! is reported by an [`TokenKind::EndOfInput`] token on every later call.

use crate::{
    cursor::Cursor,
    literals,
    tokens::{Token, TokenKind},
};

/// Scans DXL tokens out of a source string.
#[derive(Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Skips whitespace and returns the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        let mut next_char = self.cursor.look_ahead();
        while next_char.is_some_and(is_whitespace) {
            next_char = self.cursor.advance_and_look_ahead();
        }

        self.cursor.mark_and_advance();

        let Some(ch) = next_char else {
            return self.cursor.extract_slice(TokenKind::EndOfInput);
        };

        match ch {
            '&' => self.cursor.extract_slice(TokenKind::Ampersand),
            '@' => self.cursor.extract_slice(TokenKind::At),
            '\\' => self.cursor.extract_slice(TokenKind::Backslash),
            '^' => self.cursor.extract_slice(TokenKind::Caret),
            ':' => self.cursor.extract_slice(TokenKind::Colon),
            ',' => self.cursor.extract_slice(TokenKind::Comma),
            '!' => self.cursor.extract_slice(TokenKind::Exclamation),
            '{' => self.cursor.extract_slice(TokenKind::LeftBrace),
            '[' => self.cursor.extract_slice(TokenKind::LeftBracket),
            '(' => self.cursor.extract_slice(TokenKind::LeftParenthesis),
            '?' => self.cursor.extract_slice(TokenKind::QuestionMark),
            '%' => self.cursor.extract_slice(TokenKind::Percent),
            '}' => self.cursor.extract_slice(TokenKind::RightBrace),
            ']' => self.cursor.extract_slice(TokenKind::RightBracket),
            ')' => self.cursor.extract_slice(TokenKind::RightParenthesis),
            ';' => self.cursor.extract_slice(TokenKind::Semicolon),
            '~' => self.cursor.extract_slice(TokenKind::Tilde),
            '.' => self.scan_dots(),
            '#' => self.scan_documentation(),
            '"' => self.scan_quoted(
                '"',
                TokenKind::StringLiteral,
                TokenKind::UnterminatedStringLiteral,
            ),
            '\'' => self.scan_quoted(
                '\'',
                TokenKind::CharacterLiteral,
                TokenKind::UnterminatedCharacterLiteral,
            ),
            '|' => self.scan_bounded_literal(),
            '_' => self.scan_placeholder_name(),
            ch if is_symbolic_start(ch) => self.scan_symbolic_token(),
            _ => self.cursor.extract_slice(TokenKind::InvalidCharacter),
        }
    }

    fn scan_dots(&mut self) -> Token<'src> {
        if self.cursor.look_ahead() == Some('.') {
            self.cursor.advance_and_extract_slice(TokenKind::DoubleDot)
        } else {
            self.cursor.extract_slice(TokenKind::Dot)
        }
    }

    /// Consecutive `#` lines form one block; indentation before a
    /// continuation line is part of the token text.
    fn scan_documentation(&mut self) -> Token<'src> {
        loop {
            loop {
                match self.cursor.look_ahead() {
                    None => return self.cursor.extract_slice(TokenKind::UnterminatedDocumentation),
                    Some('\n') => break,
                    Some(_) => self.cursor.advance(),
                }
            }

            let mut next_char = self.cursor.advance_and_look_ahead();
            while matches!(next_char, Some(' ' | '\t')) {
                next_char = self.cursor.advance_and_look_ahead();
            }

            if next_char != Some('#') {
                return self.cursor.extract_slice(TokenKind::Documentation);
            }
        }
    }

    /// Scans a single-line literal up to its closing `delimiter`.
    fn scan_quoted(
        &mut self,
        delimiter: char,
        kind: TokenKind,
        unterminated: TokenKind,
    ) -> Token<'src> {
        loop {
            match self.cursor.look_ahead() {
                None | Some('\n') => return self.cursor.extract_slice(unterminated),
                Some(ch) if ch == delimiter => return self.cursor.advance_and_extract_slice(kind),
                Some(_) => self.cursor.advance(),
            }
        }
    }

    fn scan_bounded_literal(&mut self) -> Token<'src> {
        loop {
            match self.cursor.look_ahead() {
                Some('|') => break,
                None => return self.cursor.extract_slice(TokenKind::UnterminatedBoundedLiteral),
                Some(ch) if is_whitespace(ch) => {
                    return self.cursor.extract_slice(TokenKind::UnterminatedBoundedLiteral);
                }
                Some(_) => self.cursor.advance(),
            }
        }

        let inner = &self.cursor.extracted_text()[1..];
        let kind = if literals::is_date_time(inner) {
            TokenKind::DateTimeLiteral
        } else if literals::is_date(inner) {
            TokenKind::DateLiteral
        } else if literals::is_time(inner) {
            TokenKind::TimeLiteral
        } else if literals::is_url(inner) {
            TokenKind::UrlLiteral
        } else {
            TokenKind::InvalidBoundedLiteral
        };

        self.cursor.advance_and_extract_slice(kind)
    }

    fn scan_placeholder_name(&mut self) -> Token<'src> {
        while self.cursor.look_ahead().is_some_and(is_placeholder_part) {
            self.cursor.advance();
        }

        if self.cursor.extracted_text().ends_with('_') {
            self.cursor.extract_slice(TokenKind::PlaceholderName)
        } else {
            self.cursor.extract_slice(TokenKind::InvalidPlaceholderName)
        }
    }

    /// Names, numbers, keywords and operator symbols share one character
    /// set, so the run is captured first and classified afterwards.
    fn scan_symbolic_token(&mut self) -> Token<'src> {
        self.skip_symbolic_part();

        let text = self.cursor.extracted_text();
        if let Some(kind) = keyword_kind(text) {
            return self.cursor.extract_slice(kind);
        }

        if literals::is_uuid(text) {
            return self.cursor.extract_slice(TokenKind::UuidLiteral);
        }

        if literals::is_integer(text) {
            let continues_as_float = literals::is_decimal_number(text)
                && self.cursor.look_ahead() == Some('.')
                && self
                    .cursor
                    .look_ahead_second()
                    .is_some_and(|ch| ch.is_ascii_digit());

            if !continues_as_float {
                return self.cursor.extract_slice(TokenKind::IntegerLiteral);
            }

            self.cursor.advance();
            self.skip_symbolic_part();

            return if literals::is_floating_point(self.cursor.extracted_text()) {
                self.cursor.extract_slice(TokenKind::FloatingPointLiteral)
            } else {
                self.cursor
                    .extract_slice(TokenKind::InvalidFloatingPointLiteral)
            };
        }

        if literals::is_floating_point(text) {
            return self.cursor.extract_slice(TokenKind::FloatingPointLiteral);
        }

        if literals::is_rational_number(text) {
            return self.cursor.extract_slice(TokenKind::RationalNumberLiteral);
        }

        if text.ends_with('_') {
            return self.cursor.extract_slice(TokenKind::InvalidSymbolName);
        }

        self.cursor.extract_slice(TokenKind::SymbolName)
    }

    fn skip_symbolic_part(&mut self) {
        while self.cursor.look_ahead().is_some_and(is_symbolic_part) {
            self.cursor.advance();
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to and including the end-of-input token.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.kind == TokenKind::EndOfInput;
        Some(token)
    }
}

fn keyword_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "absent" => TokenKind::Absent,
        "alias" => TokenKind::Alias,
        "and" => TokenKind::And,
        "as" => TokenKind::As,
        "no-longer" => TokenKind::NoLonger,
        "transacted-at" => TokenKind::TransactedAt,
        "valid-as-of" => TokenKind::ValidAsOf,
        "valid-during" => TokenKind::ValidDuring,
        "with" => TokenKind::With,
        "true" | "false" => TokenKind::BooleanLiteral,
        "=" => TokenKind::Equals,
        _ => return None,
    };
    Some(kind)
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn is_placeholder_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '\'' | '-' | '$')
}

fn is_symbolic_start(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '$' | '+' | '-' | '/' | '*' | '=' | '<' | '>')
}

fn is_symbolic_part(ch: char) -> bool {
    is_symbolic_start(ch) || matches!(ch, '_' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scans `source` and checks each token's kind, text and position, then
    /// that the input is exhausted.
    fn check_scan(source: &str, expected: &[(TokenKind, &str, u32, u32)]) {
        let mut scanner = Scanner::new(source);

        for &(kind, text, line, column) in expected {
            let token = scanner.next_token();
            assert_eq!(token.kind, kind, "kind of `{text}`");
            assert_eq!(token.text, text);
            assert_eq!((token.line, token.column), (line, column), "position of `{text}`");
            assert_eq!(token.len(), text.chars().count());
        }

        assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
    }

    /// Checks that each source scans as a single token of `kind`.
    fn check_single(kind: TokenKind, sources: &[&str]) {
        for source in sources {
            let token = Scanner::new(source).next_token();
            assert_eq!(token.kind, kind, "kind of `{source}`");
            assert_eq!(token.text, *source);
            assert_eq!((token.line, token.column), (1, 1));
        }
    }

    #[test]
    fn test_punctuation() {
        use TokenKind::*;

        check_scan(
            " { } ( ) [ ] . : , = ; - ~ % @ \\ / ^ & * ! .. ? ",
            &[
                (LeftBrace, "{", 1, 2),
                (RightBrace, "}", 1, 4),
                (LeftParenthesis, "(", 1, 6),
                (RightParenthesis, ")", 1, 8),
                (LeftBracket, "[", 1, 10),
                (RightBracket, "]", 1, 12),
                (Dot, ".", 1, 14),
                (Colon, ":", 1, 16),
                (Comma, ",", 1, 18),
                (Equals, "=", 1, 20),
                (Semicolon, ";", 1, 22),
                (SymbolName, "-", 1, 24),
                (Tilde, "~", 1, 26),
                (Percent, "%", 1, 28),
                (At, "@", 1, 30),
                (Backslash, "\\", 1, 32),
                (SymbolName, "/", 1, 34),
                (Caret, "^", 1, 36),
                (Ampersand, "&", 1, 38),
                (SymbolName, "*", 1, 40),
                (Exclamation, "!", 1, 42),
                (DoubleDot, "..", 1, 44),
                (QuestionMark, "?", 1, 47),
            ],
        );
    }

    #[test]
    fn test_placeholder_names() {
        check_single(
            TokenKind::PlaceholderName,
            &["_", "_abc_", "_Ab_234_", "_1_", "_1st_", "_has-been_", "_'pod'_"],
        );
        check_single(
            TokenKind::InvalidPlaceholderName,
            &["_abc", "_Ab_234", "_1", "_1st", "_has-been"],
        );
    }

    #[test]
    fn test_symbol_names() {
        check_single(
            TokenKind::SymbolName,
            &[
                "a", "a'", "abc", "Ab234", "1st", "1_time", "do_something", "<", "<>", "<seven>",
                "isn't", "<7>", "==", "+", "-", "/", "*", "**", "--", "++", "+=", "has-been",
            ],
        );
        check_single(
            TokenKind::InvalidSymbolName,
            &[
                "a_", "abc_", "Ab234_", "1st_", "1_time_", "do_something__", "<_", "has-been_",
            ],
        );
    }

    #[test]
    fn test_keywords_and_booleans() {
        check_single(TokenKind::Absent, &["absent"]);
        check_single(TokenKind::Alias, &["alias"]);
        check_single(TokenKind::And, &["and"]);
        check_single(TokenKind::As, &["as"]);
        check_single(TokenKind::NoLonger, &["no-longer"]);
        check_single(TokenKind::TransactedAt, &["transacted-at"]);
        check_single(TokenKind::ValidAsOf, &["valid-as-of"]);
        check_single(TokenKind::ValidDuring, &["valid-during"]);
        check_single(TokenKind::With, &["with"]);
        check_single(TokenKind::BooleanLiteral, &["true", "false"]);
    }

    #[test]
    fn test_names_across_lines() {
        check_scan(
            "abc pqrs \n\n xyz_123 \n",
            &[
                (TokenKind::SymbolName, "abc", 1, 1),
                (TokenKind::SymbolName, "pqrs", 1, 5),
                (TokenKind::SymbolName, "xyz_123", 3, 2),
            ],
        );
        check_scan(
            "~abc ~pqrs",
            &[
                (TokenKind::Tilde, "~", 1, 1),
                (TokenKind::SymbolName, "abc", 1, 2),
                (TokenKind::Tilde, "~", 1, 6),
                (TokenKind::SymbolName, "pqrs", 1, 7),
            ],
        );
    }

    #[test]
    fn test_string_and_character_literals() {
        check_scan(
            " \"abc\" \n \"qrs\"",
            &[
                (TokenKind::StringLiteral, "\"abc\"", 1, 2),
                (TokenKind::StringLiteral, "\"qrs\"", 2, 2),
            ],
        );
        check_scan(
            " 'a' '\\n' '\\t' 'Q' ",
            &[
                (TokenKind::CharacterLiteral, "'a'", 1, 2),
                (TokenKind::CharacterLiteral, "'\\n'", 1, 6),
                (TokenKind::CharacterLiteral, "'\\t'", 1, 11),
                (TokenKind::CharacterLiteral, "'Q'", 1, 16),
            ],
        );
    }

    #[test]
    fn test_numeric_literals() {
        check_single(
            TokenKind::IntegerLiteral,
            &[
                "123", "123_456", "123'i32", "456'I64", "-123", "123'u8", "1234'U16", "0x7F",
                "0b1010", "0o17",
            ],
        );
        check_single(
            TokenKind::FloatingPointLiteral,
            &[
                "123.0", "123F32", "123'f64", "123_456e78'f", "1.00E-30F64", "456_654d",
                "456_654.0'D", "-2.5",
            ],
        );
        check_single(TokenKind::RationalNumberLiteral, &["1/3", "-22/7"]);
        check_single(TokenKind::InvalidFloatingPointLiteral, &["1.5x", "12.3_"]);
    }

    #[test]
    fn test_integer_followed_by_dot() {
        check_scan(
            "1.x",
            &[
                (TokenKind::IntegerLiteral, "1", 1, 1),
                (TokenKind::Dot, ".", 1, 2),
                (TokenKind::SymbolName, "x", 1, 3),
            ],
        );
    }

    #[test]
    fn test_uuid_literals() {
        check_scan(
            "12345678-ABCD-EFab-cdef-901234567890\n11111111-2222-3333-4444-555555555555",
            &[
                (TokenKind::UuidLiteral, "12345678-ABCD-EFab-cdef-901234567890", 1, 1),
                (TokenKind::UuidLiteral, "11111111-2222-3333-4444-555555555555", 2, 1),
            ],
        );
    }

    #[test]
    fn test_bounded_literals() {
        check_single(TokenKind::DateLiteral, &["|2021-06-01|"]);
        check_single(TokenKind::TimeLiteral, &["|T10:15:30Z|"]);
        check_single(TokenKind::DateTimeLiteral, &["|2021-06-01T10:15:30.5+02:00|"]);
        check_single(TokenKind::UrlLiteral, &["|https://example.org/a?b=c|"]);
    }

    #[test]
    fn test_documentation_blocks() {
        check_scan(
            "# this is a block of documentation\n\n # this is ** another\n\n # This one \n# crosses lines\n",
            &[
                (TokenKind::Documentation, "# this is a block of documentation\n", 1, 1),
                (TokenKind::Documentation, "# this is ** another\n", 3, 2),
                (TokenKind::Documentation, "# This one \n# crosses lines\n", 5, 2),
            ],
        );
    }

    #[test]
    fn test_documentation_keeps_continuation_indent() {
        check_scan(
            "# one\n  # two\n  thing",
            &[
                (TokenKind::Documentation, "# one\n  # two\n  ", 1, 1),
                (TokenKind::SymbolName, "thing", 3, 3),
            ],
        );
    }

    #[test]
    fn test_unterminated_literals() {
        check_scan(
            " key \"first \n\"second ",
            &[
                (TokenKind::SymbolName, "key", 1, 2),
                (TokenKind::UnterminatedStringLiteral, "\"first ", 1, 6),
                (TokenKind::UnterminatedStringLiteral, "\"second ", 2, 1),
            ],
        );
        check_scan(
            " key '1\n'2",
            &[
                (TokenKind::SymbolName, "key", 1, 2),
                (TokenKind::UnterminatedCharacterLiteral, "'1", 1, 6),
                (TokenKind::UnterminatedCharacterLiteral, "'2", 2, 1),
            ],
        );
        check_scan(
            "# starts but does not end",
            &[(TokenKind::UnterminatedDocumentation, "# starts but does not end", 1, 1)],
        );
    }

    #[test]
    fn test_invalid_bounded_literals() {
        check_scan(
            " |1234-1234-1234 |abcW |123456789--|",
            &[
                (TokenKind::UnterminatedBoundedLiteral, "|1234-1234-1234", 1, 2),
                (TokenKind::UnterminatedBoundedLiteral, "|abcW", 1, 18),
                (TokenKind::InvalidBoundedLiteral, "|123456789--|", 1, 24),
            ],
        );
        check_scan(
            "|2021",
            &[(TokenKind::UnterminatedBoundedLiteral, "|2021", 1, 1)],
        );
    }

    #[test]
    fn test_integer_then_symbol_on_next_line() {
        check_scan(
            "key 2\n- ok",
            &[
                (TokenKind::SymbolName, "key", 1, 1),
                (TokenKind::IntegerLiteral, "2", 1, 5),
                (TokenKind::SymbolName, "-", 2, 1),
                (TokenKind::SymbolName, "ok", 2, 3),
            ],
        );
    }

    #[test]
    fn test_invalid_characters() {
        check_scan(
            "a é `",
            &[
                (TokenKind::SymbolName, "a", 1, 1),
                (TokenKind::InvalidCharacter, "é", 1, 3),
                (TokenKind::InvalidCharacter, "`", 1, 5),
            ],
        );
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut scanner = Scanner::new("  ");
        assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
        assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_next_token_then_iterate_remaining() {
        let mut scanner = Scanner::new("alice knows bob;");
        assert_eq!(scanner.next_token().text, "alice");

        let rest: Vec<_> = scanner.by_ref().map(|token| token.text).collect();
        assert_eq!(rest, ["knows", "bob", ";", ""]);
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_iterator_stops_after_end_of_input() {
        let kinds: Vec<_> = Scanner::new("a;").map(|token| token.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::SymbolName,
                TokenKind::Semicolon,
                TokenKind::EndOfInput
            ]
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Strategy for symbol names that are neither keywords nor numbers.
    fn symbol_name_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9'$-]{0,12}[a-z0-9]".prop_filter("avoid keywords", |s| {
            keyword_kind(s).is_none()
        })
    }

    /// Strategy for arbitrary printable ASCII with line breaks.
    fn arbitrary_source_strategy() -> impl Strategy<Value = String> {
        "[ -~\n\t]{0,80}"
    }

    // ===================
    // Property Test Functions
    // ===================

    fn check_symbol_names_scan_whole(name: &str) -> Result<(), TestCaseError> {
        let source = format!("  {name} ");
        let token = Scanner::new(&source).next_token();

        prop_assert_eq!(token.kind, TokenKind::SymbolName);
        prop_assert_eq!(token.text, name);
        prop_assert_eq!(token.column, 3);
        Ok(())
    }

    /// Token spans are ordered, slice the source exactly and end with a
    /// single end-of-input token.
    fn check_tokens_cover_source(source: &str) -> Result<(), TestCaseError> {
        let tokens: Vec<_> = Scanner::new(source).collect();

        let last = tokens.last();
        prop_assert_eq!(last.map(|token| token.kind), Some(TokenKind::EndOfInput));

        let mut previous_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start() >= previous_end);
            prop_assert_eq!(&source[token.span.start()..token.span.end()], token.text);
            previous_end = token.span.end();
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn symbol_names_scan_whole(name in symbol_name_strategy()) {
            check_symbol_names_scan_whole(&name)?;
        }

        #[test]
        fn tokens_cover_source(source in arbitrary_source_strategy()) {
            check_tokens_cover_source(&source)?;
        }
    }
}
