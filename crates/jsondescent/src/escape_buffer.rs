//! Accumulation of the four hexadecimal digits of a `\u` escape.
//!
//! The [`UnicodeEscapeBuffer`] type takes one ASCII hex digit at a time
//! (`0-9`, `A-F`, `a-f`) and yields the 16-bit code unit once the fourth
//! digit arrives, then resets for the next escape. Code units in the
//! surrogate range are returned as-is; pairing them up is the string
//! decoder's job (see [`combine_surrogates`]).

/// The byte fed to [`UnicodeEscapeBuffer::feed`] was not a hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NotHexDigit;

#[derive(Debug, Default)]
/// Buffer for accumulating up to four hexadecimal digits into a UTF-16 code
/// unit.
pub(crate) struct UnicodeEscapeBuffer {
    unit: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a single ASCII hexadecimal digit into the buffer.
    ///
    /// - Returns `Ok(None)` if fewer than four digits have been provided so
    ///   far.
    /// - Returns `Ok(Some(unit))` once the fourth digit arrives, and resets.
    /// - Returns `Err` if `b` is not an ASCII hex digit; the buffer keeps the
    ///   digits it already holds.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, NotHexDigit> {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return Err(NotHexDigit),
        };
        self.unit = (self.unit << 4) | u16::from(digit);
        self.len += 1;

        if self.len == 4 {
            let unit = self.unit;
            *self = Self::default();
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Joins a high and a low surrogate into the code point they encode.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code)
}
