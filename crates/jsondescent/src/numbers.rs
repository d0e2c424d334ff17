//! Number literal decoding.
//!
//! The decoder first takes the longest run of bytes from the number alphabet
//! and only then checks the run against the JSON number grammar and parses
//! it. A malformed run is reported at its first byte.

use crate::{
    cursor::Cursor,
    error::{DecodeError, Expected},
};

#[inline]
fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
}

/// Decodes the number starting at the cursor (a `-` or a digit).
pub(crate) fn decode_number(cur: &mut Cursor<'_>) -> Result<f64, DecodeError> {
    let start = cur.offset();
    let lexeme = cur.take_while(is_number_byte);
    let Some(&first) = lexeme.first() else {
        return Err(match cur.peek() {
            Some(b) => cur.invalid(b, Expected::Number),
            None => cur.unexpected_end(Expected::Number),
        });
    };
    let malformed = || cur.invalid_at(start, first, Expected::Number);

    if !is_json_number(lexeme) {
        return Err(malformed());
    }
    // The grammar check leaves only ASCII.
    let text = core::str::from_utf8(lexeme).map_err(|_| malformed())?;
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(malformed()),
    }
}

/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn is_json_number(s: &[u8]) -> bool {
    fn digits(s: &[u8], i: &mut usize) -> usize {
        let start = *i;
        while s.get(*i).is_some_and(u8::is_ascii_digit) {
            *i += 1;
        }
        *i - start
    }

    let mut i = 0;
    if s.first() == Some(&b'-') {
        i += 1;
    }
    match s.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            digits(s, &mut i);
        }
        _ => return false,
    }
    if s.get(i) == Some(&b'.') {
        i += 1;
        if digits(s, &mut i) == 0 {
            return false;
        }
    }
    if matches!(s.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(s.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if digits(s, &mut i) == 0 {
            return false;
        }
    }
    i == s.len()
}
