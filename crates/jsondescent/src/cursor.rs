//! Forward-only cursor over the input bytes and the lexical primitives built
//! on it.
//!
//! The cursor never moves backwards: every primitive either consumes bytes or
//! leaves the position untouched.

use bstr::ByteSlice;

use crate::error::{DecodeError, ErrorKind, Expected, Found};

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Bytes allowed right after a keyword. End of input is accepted as well.
#[inline]
fn is_keyword_delimiter(b: u8) -> bool {
    matches!(b, b'}' | b']' | b',') || is_whitespace(b)
}

#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Next byte without consuming it; running out is an error because the
    /// caller still needs `expected`.
    #[inline]
    pub fn peek_byte(&self, expected: Expected) -> Result<u8, DecodeError> {
        self.peek().ok_or_else(|| self.unexpected_end(expected))
    }

    /// Consumes `n` bytes. Callers only pass lengths they have already seen.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.bytes.len());
        self.pos += n;
    }

    /// Consumes and returns one byte.
    #[inline]
    pub fn next_byte(&mut self, expected: Expected) -> Result<u8, DecodeError> {
        let b = self.peek_byte(expected)?;
        self.pos += 1;
        Ok(b)
    }

    /// Consumes one byte that must equal `expected`.
    pub fn expect_byte(&mut self, expected: u8) -> Result<(), DecodeError> {
        match self.peek() {
            Some(b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(self.invalid(b, Expected::Byte(expected))),
            None => Err(self.unexpected_end(Expected::Byte(expected))),
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes `word` if it comes next and is followed by a delimiter or the
    /// end of input. Leaves the cursor untouched otherwise.
    pub fn try_match_keyword(&mut self, word: &[u8]) -> bool {
        let rest = self.remaining();
        if !rest.starts_with(word) {
            return false;
        }
        match rest.get(word.len()) {
            Some(&b) if !is_keyword_delimiter(b) => false,
            _ => {
                self.pos += word.len();
                true
            }
        }
    }

    /// Consumes the longest run of bytes satisfying `pred`.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let rest = self.remaining();
        let len = rest.iter().position(|&b| !pred(b)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    // --------------------------------------------------------------------
    // Error construction
    // --------------------------------------------------------------------

    pub fn error_at(&self, offset: usize, kind: ErrorKind) -> DecodeError {
        let consumed = &self.bytes[..offset.min(self.bytes.len())];
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = consumed.rfind_byte(b'\n').map_or(0, |i| i + 1);
        DecodeError {
            kind,
            offset,
            line,
            column: offset - line_start + 1,
        }
    }

    pub fn unexpected_end(&self, expected: Expected) -> DecodeError {
        self.error_at(self.pos, ErrorKind::UnexpectedEndOfInput { expected })
    }

    /// `found` is the byte at the current position.
    pub fn invalid(&self, found: u8, expected: Expected) -> DecodeError {
        self.invalid_at(self.pos, found, expected)
    }

    pub fn invalid_at(&self, offset: usize, found: u8, expected: Expected) -> DecodeError {
        self.error_at(
            offset,
            ErrorKind::InvalidCharacter {
                found: Found(found),
                expected,
            },
        )
    }

    pub fn end_of_input(&self) -> DecodeError {
        self.error_at(self.pos, ErrorKind::EndOfInput)
    }
}
