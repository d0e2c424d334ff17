//! Decode errors.
//!
//! Every failure carries an [`ErrorKind`] plus the byte offset, line and
//! column where it was raised. Errors are terminal: the decode that produced
//! one is abandoned and no partial value is returned.

use core::fmt;

use thiserror::Error;

/// An error raised while decoding, positioned in the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct DecodeError {
    pub(crate) kind: ErrorKind,
    pub(crate) offset: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl DecodeError {
    /// The kind of failure and its context.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input at which the error was raised.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column, counted in bytes, of [`offset`](Self::offset).
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns `true` for the clean "no further value" condition reported by
    /// [`Decoder::next_value`](crate::Decoder::next_value).
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.kind, ErrorKind::EndOfInput)
    }
}

/// What went wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Only whitespace remained where another top-level value could start.
    #[error("end of input")]
    EndOfInput,
    /// The input ended while something was still required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// What the grammar required at that point.
        expected: Expected,
    },
    /// A byte was present that the grammar does not allow at that point.
    #[error("invalid character {found}, expected {expected}")]
    InvalidCharacter {
        /// The offending byte.
        found: Found,
        /// What the grammar required at that point.
        expected: Expected,
    },
}

/// The construct the decoder was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One specific byte.
    Byte(u8),
    /// Either `,` or the given closing byte.
    CommaOr(u8),
    /// The start of any value.
    Value,
    /// A hexadecimal digit of a `\u` escape.
    HexDigit,
    /// A byte following `\` inside a string.
    EscapeSelector,
    /// A `\u` escape holding a low surrogate.
    LowSurrogate,
    /// A `\u` code unit that is not a lone low surrogate.
    CodeUnit,
    /// A raw string byte that continues a valid UTF-8 sequence.
    Utf8,
    /// A well-formed, finite number literal.
    Number,
    /// Nesting no deeper than the configured limit.
    Depth(usize),
    /// Nothing but whitespace after the top-level value.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Byte(b) => write!(f, "{}", Found(*b)),
            Expected::CommaOr(close) => write!(f, "',' or {}", Found(*close)),
            Expected::Value => f.write_str("a value"),
            Expected::HexDigit => f.write_str("a hex digit"),
            Expected::EscapeSelector => f.write_str("an escape character"),
            Expected::LowSurrogate => f.write_str("a low surrogate escape"),
            Expected::CodeUnit => f.write_str("a non-surrogate code unit"),
            Expected::Utf8 => f.write_str("valid UTF-8"),
            Expected::Number => f.write_str("a well-formed number"),
            Expected::Depth(limit) => write!(f, "nesting depth of at most {limit}"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A raw input byte as reported in errors.
///
/// Printable ASCII displays quoted (`'a'`), anything else as hex (`0xFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub u8);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "'{}'", self.0 as char)
        } else {
            write!(f, "0x{:02X}", self.0)
        }
    }
}
