//! Indentation-aware text writer.
//!
//! Text is collected one physical line at a time. A line receives the
//! current indentation only when its first non-blank fragment is written,
//! and trailing blanks are stripped when the line is accepted. A carriage
//! return before a line feed counts as blank, so output always uses bare
//! line feeds.

use std::ops::{Deref, DerefMut};

const TRAILING_BLANKS: [char; 3] = [' ', '\t', '\r'];

/// Builds generated source text line by line.
#[derive(Debug)]
pub struct CodeWriter {
    output: String,
    current_line: String,
    indent_unit: String,
    indent_level: usize,
}

impl CodeWriter {
    /// Creates a writer indenting each level with `indent_unit`.
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            current_line: String::new(),
            indent_unit: indent_unit.into(),
            indent_level: 0,
        }
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Appends text that may span several lines.
    pub fn append(&mut self, snippet: &str) {
        let mut lines = snippet.split('\n');

        if let Some(first) = lines.next() {
            self.append_to_current_line(first);
        }
        for line in lines {
            self.accept_current_line();
            self.append_to_current_line(line);
        }
    }

    pub fn append_new_line(&mut self) {
        self.append("\n");
    }

    fn append_to_current_line(&mut self, fragment: &str) {
        if self.current_line.is_empty() && !fragment.trim_end_matches(TRAILING_BLANKS).is_empty() {
            for _ in 0..self.indent_level {
                self.current_line.push_str(&self.indent_unit);
            }
            self.current_line
                .push_str(fragment.trim_start_matches([' ', '\t']));
        } else {
            self.current_line.push_str(fragment);
        }
    }

    fn accept_current_line(&mut self) {
        self.output
            .push_str(self.current_line.trim_end_matches(TRAILING_BLANKS));
        self.output.push('\n');
        self.current_line.clear();
    }

    /// Enters one indentation level until the returned guard is dropped.
    pub fn indent(&mut self) -> Indented<'_> {
        self.indent_level += 1;
        Indented { writer: self }
    }

    /// Runs `write` one indentation level deeper.
    ///
    /// The level is restored however `write` exits, including by an error
    /// return or a panic.
    pub fn indented<R>(&mut self, write: impl FnOnce(&mut CodeWriter) -> R) -> R {
        let mut writer = self.indent();
        write(&mut writer)
    }

    fn unindent(&mut self) {
        debug_assert!(self.indent_level > 0, "unbalanced unindent");
        self.indent_level = self.indent_level.saturating_sub(1);

        if self.current_line.trim().is_empty() {
            self.current_line.clear();
        }
    }

    /// Flushes the pending line and returns the text, which ends with
    /// exactly one line feed.
    pub fn finish(mut self) -> String {
        let pending = self.current_line.trim_end_matches(TRAILING_BLANKS).to_string();
        self.output.push_str(&pending);

        let mut text = self.output.trim_end_matches('\n').to_string();
        text.push('\n');
        text
    }
}

/// Scope guard returned by [`CodeWriter::indent`].
#[derive(Debug)]
pub struct Indented<'w> {
    writer: &'w mut CodeWriter,
}

impl Deref for Indented<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for Indented<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for Indented<'_> {
    fn drop(&mut self) {
        self.writer.unindent();
    }
}
