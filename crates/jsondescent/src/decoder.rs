//! Recursive-descent value decoding.
//!
//! [`Decoder`] walks one input buffer. The value decoder dispatches on the
//! next significant byte; the object and array decoders re-enter it for
//! their members, so recursion depth follows nesting depth and is bounded
//! by [`DecoderOptions::max_depth`].
//!
//! Whitespace is skipped before and after every value, so a value decoded in
//! any position leaves the cursor on the next significant byte.

use alloc::vec::Vec;

use crate::{
    DecoderOptions, Map, Value,
    cursor::Cursor,
    error::{DecodeError, Expected},
    literal::Keyword,
    numbers::decode_number,
    strings::decode_string,
};

/// A decoder over one complete input buffer.
///
/// Most callers want [`decode`](crate::decode). `Decoder` is for inputs that
/// hold several top-level values: call [`next_value`](Self::next_value)
/// repeatedly, or iterate.
///
/// # Examples
///
/// ```
/// use jsondescent::{Decoder, DecoderOptions, Value};
///
/// let options = DecoderOptions {
///     allow_multiple_json_values: true,
///     ..Default::default()
/// };
/// let values: Result<Vec<_>, _> = Decoder::new(b"1 [true] {}", options).collect();
/// assert_eq!(values.unwrap().len(), 3);
/// ```
#[derive(Debug)]
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    options: DecoderOptions,
    depth: usize,
    /// Values handed out through the iterator.
    yielded: usize,
    done: bool,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a [u8], options: DecoderOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
            yielded: 0,
            done: false,
        }
    }

    /// Byte offset of the first byte not yet consumed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// The options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Decodes the next top-level value.
    ///
    /// This does not consult
    /// [`allow_multiple_json_values`](DecoderOptions::allow_multiple_json_values):
    /// every call decodes whatever value comes next. Call
    /// [`finish`](Self::finish) after the first value to reject trailing
    /// bytes, or iterate, which honors the option.
    ///
    /// # Errors
    ///
    /// Returns an error whose [`is_end_of_input`](DecodeError::is_end_of_input)
    /// is `true` when only whitespace remains, and any other decode error if
    /// the next value is malformed. After an error the decoder must not be
    /// used again.
    pub fn next_value(&mut self) -> Result<Value, DecodeError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return Err(self.cursor.end_of_input());
        }
        self.decode_value()
    }

    /// Checks that nothing but whitespace remains.
    ///
    /// # Errors
    ///
    /// Returns an invalid-character error naming the first trailing byte.
    pub fn finish(&mut self) -> Result<(), DecodeError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Ok(()),
            Some(b) => Err(self.cursor.invalid(b, Expected::EndOfInput)),
        }
    }

    pub(crate) fn decode_value(&mut self) -> Result<Value, DecodeError> {
        self.cursor.skip_whitespace();
        let value = match self.cursor.peek_byte(Expected::Value)? {
            b'"' => Value::String(decode_string(&mut self.cursor)?),
            b'{' => self.decode_object()?,
            b'[' => self.decode_array()?,
            b'-' | b'0'..=b'9' => Value::Number(decode_number(&mut self.cursor)?),
            b => self.decode_literal(b)?,
        };
        self.cursor.skip_whitespace();
        Ok(value)
    }

    fn decode_literal(&mut self, first: u8) -> Result<Value, DecodeError> {
        for keyword in Keyword::ALL {
            if self.cursor.try_match_keyword(keyword.text()) {
                return Ok(keyword.value());
            }
        }
        Err(self.cursor.invalid(first, Expected::Value))
    }

    fn decode_object(&mut self) -> Result<Value, DecodeError> {
        self.enter(b'{')?;
        let mut map = Map::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.advance(1);
        } else {
            loop {
                self.cursor.skip_whitespace();
                let key = decode_string(&mut self.cursor)?;
                self.cursor.skip_whitespace();
                self.cursor.expect_byte(b':')?;
                let value = self.decode_value()?;
                map.insert(key, value);
                if !self.continues(b'}')? {
                    break;
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn decode_array(&mut self) -> Result<Value, DecodeError> {
        self.enter(b'[')?;
        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b']') {
            self.cursor.advance(1);
        } else {
            loop {
                items.push(self.decode_value()?);
                if !self.continues(b']')? {
                    break;
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Consumes the opening byte of a container, enforcing the depth limit.
    fn enter(&mut self, open: u8) -> Result<(), DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(self
                .cursor
                .invalid(open, Expected::Depth(self.options.max_depth)));
        }
        self.cursor.expect_byte(open)?;
        self.depth += 1;
        Ok(())
    }

    /// Consumes the byte after a member: `,` means another member follows,
    /// `close` ends the container.
    fn continues(&mut self, close: u8) -> Result<bool, DecodeError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(b',') => {
                self.cursor.advance(1);
                Ok(true)
            }
            Some(b) if b == close => {
                self.cursor.advance(1);
                Ok(false)
            }
            Some(b) => Err(self.cursor.invalid(b, Expected::CommaOr(close))),
            None => Err(self.cursor.unexpected_end(Expected::CommaOr(close))),
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Value, DecodeError>;

    /// Yields each top-level value. Without
    /// [`allow_multiple_json_values`](DecoderOptions::allow_multiple_json_values)
    /// only the first value is yielded, and trailing bytes after it are
    /// reported as an error. Iteration ends after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.yielded > 0 && !self.options.allow_multiple_json_values {
            self.done = true;
            return self.finish().err().map(Err);
        }
        match self.next_value() {
            Ok(value) => {
                self.yielded += 1;
                Some(Ok(value))
            }
            Err(err) => {
                self.done = true;
                if err.is_end_of_input() && self.yielded > 0 {
                    None
                } else if err.is_end_of_input() {
                    Some(Err(self.cursor.unexpected_end(Expected::Value)))
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}

impl core::iter::FusedIterator for Decoder<'_> {}
