//! A recursive-descent JSON decoder over raw bytes.
//!
//! [`decode`] turns a complete input buffer into a [`Value`] tree. Numbers
//! are normalized to `f64`, duplicate object keys keep the last value, and
//! nesting is bounded by [`DecoderOptions::max_depth`].
//!
//! ```
//! use jsondescent::{Value, decode};
//!
//! let v = decode(br#"{"a": [1, 2, 3], "b": null}"#).unwrap();
//! assert_eq!(v.get("a").and_then(|a| a.get_index(2)), Some(&Value::Number(3.0)));
//! assert!(v.get("b").is_some_and(Value::is_null));
//! ```
//!
//! Every error aborts the whole decode; see [`DecodeError`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod decoder;
mod error;
mod escape_buffer;
mod literal;
mod numbers;
mod options;
mod strings;
mod value;

#[cfg(test)]
mod tests;

pub use decoder::Decoder;
pub use error::{DecodeError, ErrorKind, Expected, Found};
pub use options::{DEFAULT_MAX_DEPTH, DecoderOptions};
pub use value::{Array, Map, Value};

/// Decodes one JSON value with the default options.
///
/// Whitespace around the value is allowed; anything else after it is an
/// error.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered.
///
/// # Examples
///
/// ```
/// use jsondescent::{ErrorKind, Value, decode};
///
/// assert_eq!(
///     decode(b"[1,2,3]").unwrap(),
///     Value::Array(vec![1.0.into(), 2.0.into(), 3.0.into()])
/// );
/// assert!(matches!(
///     decode(b"[1,2,").unwrap_err().kind(),
///     ErrorKind::UnexpectedEndOfInput { .. }
/// ));
/// ```
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    decode_with(input, DecoderOptions::default())
}

/// Decodes one JSON value with explicit options.
///
/// With [`allow_multiple_json_values`](DecoderOptions::allow_multiple_json_values)
/// the input may continue with further whitespace-separated values; each is
/// decoded and the last one is returned. Use [`decode_values`] to keep them
/// all.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered, including trailing bytes
/// when multiple values are not allowed.
pub fn decode_with(input: &[u8], options: DecoderOptions) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new(input, options);
    let mut value = decoder.decode_value()?;
    if options.allow_multiple_json_values {
        loop {
            match decoder.next_value() {
                Ok(next) => value = next,
                Err(err) if err.is_end_of_input() => break,
                Err(err) => return Err(err),
            }
        }
    } else {
        decoder.finish()?;
    }
    Ok(value)
}

/// Iterates over the top-level values of `input`.
///
/// Enable [`allow_multiple_json_values`](DecoderOptions::allow_multiple_json_values)
/// for concatenated or newline-delimited documents; otherwise the iterator
/// yields one value and then reports any trailing bytes.
///
/// ```
/// use jsondescent::{DecoderOptions, Value, decode_values};
///
/// let options = DecoderOptions {
///     allow_multiple_json_values: true,
///     ..Default::default()
/// };
/// let values: Vec<Value> = decode_values(b"{\"n\":1}\n{\"n\":2}\n", options)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(values.len(), 2);
/// ```
#[must_use]
pub fn decode_values(input: &[u8], options: DecoderOptions) -> Decoder<'_> {
    Decoder::new(input, options)
}
