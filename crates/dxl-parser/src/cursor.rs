//! Character cursor over source text.
//!
//! The cursor keeps two positions: the look-ahead, i.e. the next unconsumed
//! character, and the mark, i.e. the start of the token being scanned. Tokens
//! are sliced from the mark up to (not including) the look-ahead.

use crate::{
    span::Span,
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy)]
struct Position {
    index: usize,
    line: u32,
    column: u32,
}

impl Position {
    const START: Position = Position {
        index: 0,
        line: 1,
        column: 1,
    };
}

#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    look_ahead: Position,
    marked: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            look_ahead: Position::START,
            marked: Position::START,
        }
    }

    /// The next unconsumed character, `None` at end of input.
    pub fn look_ahead(&self) -> Option<char> {
        self.source[self.look_ahead.index..].chars().next()
    }

    /// The character after the look-ahead character.
    pub fn look_ahead_second(&self) -> Option<char> {
        self.source[self.look_ahead.index..].chars().nth(1)
    }

    /// Consumes one character; a line feed moves to column 1 of the next line.
    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        let Some(ch) = self.look_ahead() else {
            return;
        };

        self.look_ahead.index += ch.len_utf8();
        if ch == '\n' {
            self.look_ahead.line += 1;
            self.look_ahead.column = 1;
        } else {
            self.look_ahead.column += 1;
        }
    }

    /// Advances and returns the new look-ahead character.
    pub fn advance_and_look_ahead(&mut self) -> Option<char> {
        self.advance();
        self.look_ahead()
    }

    /// Starts a new token at the look-ahead position.
    pub fn mark(&mut self) {
        self.marked = self.look_ahead;
    }

    pub fn mark_and_advance(&mut self) {
        self.mark();
        self.advance();
    }

    /// The text from the mark up to the look-ahead.
    pub fn extracted_text(&self) -> &'src str {
        &self.source[self.marked.index..self.look_ahead.index]
    }

    /// Produces a token spanning the mark up to the look-ahead.
    pub fn extract_slice(&self, kind: TokenKind) -> Token<'src> {
        Token::new(
            kind,
            self.extracted_text(),
            self.marked.line,
            self.marked.column,
            Span::new(self.marked.index..self.look_ahead.index),
        )
    }

    /// Consumes the look-ahead character into the token, then extracts it.
    pub fn advance_and_extract_slice(&mut self, kind: TokenKind) -> Token<'src> {
        self.advance();
        self.extract_slice(kind)
    }
}
