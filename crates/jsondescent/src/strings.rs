//! Quoted string decoding.

use alloc::string::String;

use crate::{
    cursor::Cursor,
    error::{DecodeError, Expected},
    escape_buffer::{UnicodeEscapeBuffer, combine_surrogates, is_high_surrogate, is_low_surrogate},
};

/// One logical character of string content.
#[derive(Debug, PartialEq)]
enum StringChar {
    Char(char),
    /// The unescaped closing quote.
    End,
}

/// Decodes a quoted string starting at the opening `"`.
pub(crate) fn decode_string(cur: &mut Cursor<'_>) -> Result<String, DecodeError> {
    cur.expect_byte(b'"')?;
    let mut out = String::new();
    loop {
        match read_string_char(cur)? {
            StringChar::Char(c) => out.push(c),
            StringChar::End => return Ok(out),
        }
    }
}

fn read_string_char(cur: &mut Cursor<'_>) -> Result<StringChar, DecodeError> {
    let b = cur.peek_byte(Expected::Byte(b'"'))?;
    if !b.is_ascii() {
        let bytes = cur.remaining();
        let (ch, len) = bstr::decode_utf8(bytes);
        return match ch {
            Some(c) => {
                cur.advance(len);
                Ok(StringChar::Char(c))
            }
            None if is_truncated_utf8(bytes, len) => Err(cur.unexpected_end(Expected::Utf8)),
            None => Err(cur.invalid(b, Expected::Utf8)),
        };
    }
    cur.advance(1);
    match b {
        b'"' => Ok(StringChar::End),
        b'\\' => read_escape(cur).map(StringChar::Char),
        _ => Ok(StringChar::Char(char::from(b))),
    }
}

/// The rest of the input is a valid UTF-8 prefix that stops short of a full
/// sequence. `len` is the invalid length reported by `bstr::decode_utf8`.
fn is_truncated_utf8(bytes: &[u8], len: usize) -> bool {
    len == bytes.len()
        && core::str::from_utf8(bytes)
            .err()
            .is_some_and(|e| e.error_len().is_none())
}

/// Resolves the escape whose `\` has just been consumed.
fn read_escape(cur: &mut Cursor<'_>) -> Result<char, DecodeError> {
    let escape_start = cur.offset() - 1;
    let selector = cur.next_byte(Expected::EscapeSelector)?;
    let c = match selector {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\u{0008}',
        b'f' => '\u{000C}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return read_unicode_escape(cur, escape_start),
        other => {
            return Err(cur.invalid_at(cur.offset() - 1, other, Expected::EscapeSelector));
        }
    };
    Ok(c)
}

/// Decodes the code unit after `\u`, pairing a high surrogate with the
/// low-surrogate escape that must follow it.
fn read_unicode_escape(cur: &mut Cursor<'_>, escape_start: usize) -> Result<char, DecodeError> {
    let unit = read_code_unit(cur)?;

    if is_low_surrogate(unit) {
        return Err(cur.invalid_at(escape_start, b'\\', Expected::CodeUnit));
    }
    if !is_high_surrogate(unit) {
        return char::from_u32(u32::from(unit))
            .ok_or_else(|| cur.invalid_at(escape_start, b'\\', Expected::CodeUnit));
    }

    let low_start = cur.offset();
    match cur.remaining() {
        [b'\\', b'u', ..] => cur.advance(2),
        [] | [b'\\'] => return Err(cur.unexpected_end(Expected::LowSurrogate)),
        [b, ..] => return Err(cur.invalid(*b, Expected::LowSurrogate)),
    }
    let low = read_code_unit(cur)?;
    if !is_low_surrogate(low) {
        return Err(cur.invalid_at(low_start, b'\\', Expected::LowSurrogate));
    }
    combine_surrogates(unit, low)
        .ok_or_else(|| cur.invalid_at(low_start, b'\\', Expected::LowSurrogate))
}

fn read_code_unit(cur: &mut Cursor<'_>) -> Result<u16, DecodeError> {
    let mut buf = UnicodeEscapeBuffer::new();
    loop {
        let b = cur.peek_byte(Expected::HexDigit)?;
        let fed = buf.feed(b).map_err(|_| cur.invalid(b, Expected::HexDigit))?;
        cur.advance(1);
        if let Some(unit) = fed {
            return Ok(unit);
        }
    }
}
