//! Helper functions for the lexer.
//!
//! This module contains the low-level scanning primitives the tag readers are
//! built from:
//! - Input/character handling ("consume the next input character")
//! - Bounded lookahead for terminator sequences
//! - Word, quoted-value and whitespace readers

use super::core::Lexer;
use super::error::LexError;
use super::token::Position;

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl Lexer<'_> {
    /// The position of the next input character.
    pub(super) const fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the character at the current position and advances past it,
    /// keeping the line/column counters in step.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume one character, discarding it.
    pub(super) fn advance(&mut self) {
        let _ = self.consume();
    }

    /// Peek at a codepoint at the given offset from the current position
    /// without consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// Check if the next few characters match the target string exactly.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// Check if the next few characters match the target string using ASCII
    /// case-insensitive comparison.
    #[must_use]
    pub fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        let rest = self.input[self.current_pos..].as_bytes();
        rest.len() >= target.len() && rest[..target.len()].eq_ignore_ascii_case(target.as_bytes())
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) fn consume_string(&mut self, target: &str) {
        for _ in target.chars() {
            self.advance();
        }
    }

    /// Tab, line feed, form feed, carriage return and space.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C' | '\r')
    }
}

// =============================================================================
// Readers
// =============================================================================

impl<'a> Lexer<'a> {
    /// Skip any run of whitespace.
    pub(super) fn absorb_whitespace(&mut self) {
        while self.peek_codepoint(0).is_some_and(Self::is_whitespace_char) {
            self.advance();
        }
    }

    /// Read the maximal run up to whitespace, `=`, `/` or `>`.
    ///
    /// Used for tag names and attribute keys.
    pub(super) fn read_word(&mut self) -> &'a str {
        let input = self.input;
        let start = self.current_pos;
        while self
            .peek_codepoint(0)
            .is_some_and(|c| !Self::is_whitespace_char(c) && !matches!(c, '=' | '/' | '>'))
        {
            self.advance();
        }
        &input[start..self.current_pos]
    }

    /// Read an unquoted attribute value: everything up to whitespace, `>`, or
    /// a `/` that closes the tag.
    pub(super) fn read_unquoted_value(&mut self) -> &'a str {
        let input = self.input;
        let start = self.current_pos;
        loop {
            match self.peek_codepoint(0) {
                None | Some('>') => break,
                Some('/') if self.peek_codepoint(1) == Some('>') => break,
                Some(c) if Self::is_whitespace_char(c) => break,
                Some(_) => self.advance(),
            }
        }
        &input[start..self.current_pos]
    }

    /// Read a value enclosed in `quote`, which must be the next character.
    ///
    /// A backslash protects the character after it from ending the value; the
    /// text is returned verbatim, backslashes included.
    pub(super) fn read_quoted(&mut self, quote: char) -> Result<&'a str, LexError> {
        let input = self.input;
        let position = self.current_position();
        self.advance();
        let start = self.current_pos;

        loop {
            match self.consume() {
                None => return Err(LexError::UnterminatedQuote { position }),
                Some('\\') => {
                    if self.consume().is_none() {
                        return Err(LexError::UnterminatedQuote { position });
                    }
                }
                Some(c) if c == quote => {
                    return Ok(&input[start..self.current_pos - c.len_utf8()]);
                }
                Some(_) => {}
            }
        }
    }

    /// Advance until `terminator` is the next input, returning everything
    /// skipped. The terminator itself is left unconsumed.
    ///
    /// Returns None (having consumed the rest of the input) if the
    /// terminator never appears.
    pub(super) fn read_until(&mut self, terminator: &str, case_insensitive: bool) -> Option<&'a str> {
        let input = self.input;
        let start = self.current_pos;
        loop {
            let found = if case_insensitive {
                self.next_few_characters_are_case_insensitive(terminator)
            } else {
                self.next_few_characters_are(terminator)
            };
            if found {
                return Some(&input[start..self.current_pos]);
            }
            if self.consume().is_none() {
                return None;
            }
        }
    }
}
