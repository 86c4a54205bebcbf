//! Look-ahead buffer over the scanner with expectation reporting.
//!
//! Tokens are scanned on demand. Look-ahead positions are 1-based and
//! position 0 is the most recently consumed token. The end-of-input token is
//! buffered once; past it there is nothing left to look at.

use std::{collections::VecDeque, sync::Arc};

use dxl_core::origin::Origin;
use log::trace;

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    scanner::Scanner,
    tokens::{Token, TokenKind},
};

#[derive(Debug)]
pub(crate) struct TokenBuffer<'src> {
    scanner: Scanner<'src>,
    file_name: Arc<str>,
    pending: VecDeque<Token<'src>>,
    last_consumed: Option<Token<'src>>,
    end_reached: bool,
}

impl<'src> TokenBuffer<'src> {
    pub fn new(file_name: Arc<str>, source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            file_name,
            pending: VecDeque::new(),
            last_consumed: None,
            end_reached: false,
        }
    }

    /// The origin of `token` within this buffer's source.
    pub fn origin(&self, token: &Token<'_>) -> Origin {
        token.origin(&self.file_name)
    }

    fn fill(&mut self, count: usize) {
        while self.pending.len() < count && !self.end_reached {
            let token = self.scanner.next_token();
            self.end_reached = token.kind == TokenKind::EndOfInput;
            self.pending.push_back(token);
        }
    }

    /// The token `n` positions ahead; `0` is the last consumed token.
    pub fn look_ahead(&mut self, n: usize) -> Option<Token<'src>> {
        if n == 0 {
            return self.last_consumed;
        }

        self.fill(n);
        self.pending.get(n - 1).copied()
    }

    pub fn has_look_ahead(&mut self, kind: TokenKind) -> bool {
        self.has_look_ahead_at(1, kind)
    }

    pub fn has_look_ahead_at(&mut self, n: usize, kind: TokenKind) -> bool {
        self.look_ahead(n).is_some_and(|token| token.kind == kind)
    }

    /// Whether the next token starts on a later line than the last consumed
    /// one, or the input is exhausted.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn has_look_ahead_on_new_line(&mut self) -> bool {
        if self.has_look_ahead(TokenKind::EndOfInput) {
            return true;
        }

        match (self.look_ahead(0), self.look_ahead(1)) {
            (Some(last), Some(next)) => last.line < next.line,
            _ => false,
        }
    }

    fn consume(&mut self) -> Option<Token<'src>> {
        self.fill(1);
        let token = self.pending.pop_front()?;
        trace!(kind:% = token.kind, line = token.line, column = token.column; "Consumed token");
        self.last_consumed = Some(token);
        Some(token)
    }

    /// Consumes the next token, whatever its kind.
    pub fn read(&mut self) -> Result<Token<'src>> {
        match self.consume() {
            Some(token) => Ok(token),
            None => Err(self.expected("more input")),
        }
    }

    /// Consumes the next token, which must be of `kind`.
    pub fn read_kind(&mut self, kind: TokenKind) -> Result<Token<'src>> {
        if !self.has_look_ahead(kind) {
            return Err(self.expected_kinds(&[kind]));
        }
        self.read()
    }

    /// Consumes the next token, which must be one of `kinds`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn read_one_of(&mut self, kinds: &[TokenKind]) -> Result<Token<'src>> {
        if !kinds.iter().any(|&kind| self.has_look_ahead(kind)) {
            return Err(self.expected_kinds(kinds));
        }
        self.read()
    }

    /// Consumes the next token only when it is of `kind`.
    pub fn consume_when(&mut self, kind: TokenKind) -> bool {
        if self.has_look_ahead(kind) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Builds the failure for an unmet expectation at the next token.
    pub fn expected(&mut self, description: &str) -> Diagnostic {
        match self.look_ahead(1) {
            Some(token) => self.expected_at(&token, description),
            None => Diagnostic::error(format!("Expected {description}."))
                .with_code(ErrorCode::E101),
        }
    }

    /// Expectation failure listing the acceptable token kinds.
    pub fn expected_kinds(&mut self, kinds: &[TokenKind]) -> Diagnostic {
        self.expected(&describe_kinds(kinds))
    }

    /// Expectation failure with a description and the acceptable kinds.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn expected_described(&mut self, description: &str, kinds: &[TokenKind]) -> Diagnostic {
        self.expected(&format!("{description} - {}", describe_kinds(kinds)))
    }

    /// Expectation failure pointing at `token`, coded by what was found.
    pub fn expected_at(&self, token: &Token<'_>, description: &str) -> Diagnostic {
        let found = if token.kind == TokenKind::EndOfInput {
            "found end of input.".to_string()
        } else {
            format!("found '{}'.", token.text)
        };
        let diagnostic = Diagnostic::error(format!(
            "Expected {description} at {}; {found}",
            self.origin(token)
        ))
        .with_origin(self.origin(token));

        if token.kind == TokenKind::EndOfInput {
            return diagnostic
                .with_code(ErrorCode::E101)
                .with_label(token.span, "input ends here");
        }

        match token.kind.error_code() {
            Some(code) => {
                let diagnostic = diagnostic
                    .with_code(code)
                    .with_label(token.span, code.description());
                match token.kind.error_help() {
                    Some(help) => diagnostic.with_help(help),
                    None => diagnostic,
                }
            }
            None => diagnostic
                .with_code(ErrorCode::E100)
                .with_label(token.span, "unexpected token"),
        }
    }

    /// A failure with a specific code for an unusable but well-formed token.
    pub fn error_at(&self, token: &Token<'_>, code: ErrorCode, description: &str) -> Diagnostic {
        Diagnostic::error(format!(
            "Expected {description} at {}; found '{}'.",
            self.origin(token),
            token.text
        ))
        .with_code(code)
        .with_origin(self.origin(token))
        .with_label(token.span, code.description())
    }
}

fn describe_kinds(kinds: &[TokenKind]) -> String {
    match kinds {
        [kind] => kind.text().to_string(),
        _ => {
            let texts: Vec<_> = kinds.iter().map(TokenKind::text).collect();
            format!("one of {{ {} }}", texts.join(", "))
        }
    }
}
