/// Default nesting limit for objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the decoder.
///
/// # Examples
///
/// ```rust
/// use jsondescent::{DecoderOptions, decode_with};
///
/// let options = DecoderOptions {
///     max_depth: 2,
///     ..Default::default()
/// };
/// assert!(decode_with(b"[[1]]", options).is_ok());
/// assert!(decode_with(b"[[[1]]]", options).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions {
    /// Maximum number of objects and arrays that may be open at once.
    ///
    /// Opening one more raises an invalid-character error at the offending
    /// `{` or `[` rather than exhausting the call stack.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,

    /// Whether to accept multiple JSON values in a single input.
    ///
    /// When `false`, anything other than whitespace after the first complete
    /// value is an error. When `true`, the input may hold any number of
    /// whitespace-separated values, as in JSON Lines (JSONL) or
    /// newline-delimited JSON; each must decode successfully.
    ///
    /// # Examples
    ///
    /// ```json
    /// {}{}{}
    /// ```
    ///
    /// ```json
    /// 123 45 678 9
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub allow_multiple_json_values: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_multiple_json_values: false,
        }
    }
}
