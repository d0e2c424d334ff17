use alloc::{string::ToString, vec::Vec};

use rstest::rstest;

use crate::{
    DEFAULT_MAX_DEPTH, DecodeError, DecoderOptions, ErrorKind, Expected, Found, decode,
    decode_with,
};

fn assert_err_contains(err: &DecodeError, expected_sub: &str, line: usize, col: usize) {
    let s = err.to_string();
    assert!(s.contains(expected_sub), "expected substring {expected_sub:?} in {s:?}");
    assert_eq!(err.line(), line, "line of {s:?}");
    assert_eq!(err.column(), col, "column of {s:?}");
}

fn invalid(found: u8, expected: Expected) -> ErrorKind {
    ErrorKind::InvalidCharacter {
        found: Found(found),
        expected,
    }
}

fn unexpected_end(expected: Expected) -> ErrorKind {
    ErrorKind::UnexpectedEndOfInput { expected }
}

#[rstest]
#[case::leading_plus(b"+0", invalid(b'+', Expected::Value), 1)]
#[case::truncated_keyword(b"tru", invalid(b't', Expected::Value), 1)]
#[case::keyword_with_suffix(b"truefoo", invalid(b't', Expected::Value), 1)]
#[case::truncated_null(b"[nul]", invalid(b'n', Expected::Value), 2)]
#[case::bare_word(b"a", invalid(b'a', Expected::Value), 1)]
#[case::comment(b"/", invalid(b'/', Expected::Value), 1)]
#[case::escaped_whitespace_outside_string(b"\\n1", invalid(b'\\', Expected::Value), 1)]
#[case::object_trailing_comma(br#"{"a":1,}"#, invalid(b'}', Expected::Byte(b'"')), 8)]
#[case::array_trailing_comma(b"[1,]", invalid(b']', Expected::Value), 4)]
#[case::missing_comma(b"[1 2]", invalid(b'2', Expected::CommaOr(b']')), 4)]
#[case::missing_colon(br#"{"a" 1}"#, invalid(b'1', Expected::Byte(b':')), 6)]
#[case::unquoted_key(b"{a:1}", invalid(b'a', Expected::Byte(b'"')), 2)]
#[case::object_wrong_close(br#"{"a":1]"#, invalid(b']', Expected::CommaOr(b'}')), 7)]
#[case::bad_escape(br#""\q""#, invalid(b'q', Expected::EscapeSelector), 3)]
#[case::double_decimal_point(b"1.2.3", invalid(b'1', Expected::Number), 1)]
#[case::lone_minus(b"[-]", invalid(b'-', Expected::Number), 2)]
#[case::leading_zero(b"012", invalid(b'0', Expected::Number), 1)]
#[case::trailing_garbage(b"{} x", invalid(b'x', Expected::EndOfInput), 4)]
#[case::extra_close(b"[1]]", invalid(b']', Expected::EndOfInput), 4)]
#[case::second_value(b"1 2", invalid(b'2', Expected::EndOfInput), 3)]
#[case::invalid_utf8_at_end(b"\"\xFF", invalid(0xFF, Expected::Utf8), 2)]
#[case::continuation_byte_at_end(b"\"\x80", invalid(0x80, Expected::Utf8), 2)]
#[case::number_suffix(b"1x", invalid(b'x', Expected::EndOfInput), 2)]
fn rejects_invalid_character(#[case] input: &[u8], #[case] kind: ErrorKind, #[case] col: usize) {
    let err = decode(input).unwrap_err();
    assert_eq!(err.kind(), kind, "{:?}", core::str::from_utf8(input));
    assert_eq!(err.column(), col);
}

#[rstest]
#[case::empty(b"", unexpected_end(Expected::Value), 1)]
#[case::only_whitespace(b" \n ", unexpected_end(Expected::Value), 2)]
#[case::array_after_comma(b"[1,2,", unexpected_end(Expected::Value), 6)]
#[case::array_after_value(b"[1", unexpected_end(Expected::CommaOr(b']')), 3)]
#[case::array_open(b"[", unexpected_end(Expected::Value), 2)]
#[case::object_open(b"{", unexpected_end(Expected::Byte(b'"')), 2)]
#[case::object_after_key(br#"{"a""#, unexpected_end(Expected::Byte(b':')), 5)]
#[case::object_after_colon(br#"{"a":"#, unexpected_end(Expected::Value), 6)]
#[case::object_after_value(br#"{"a":1"#, unexpected_end(Expected::CommaOr(b'}')), 7)]
#[case::unterminated_string(br#"["abc"#, unexpected_end(Expected::Byte(b'"')), 6)]
#[case::mid_escape(br#""\"#, unexpected_end(Expected::EscapeSelector), 3)]
#[case::mid_hex(br#""\u00"#, unexpected_end(Expected::HexDigit), 6)]
#[case::mid_utf8_sequence(b"\"\xE2\x82", unexpected_end(Expected::Utf8), 2)]
fn rejects_truncated_input(#[case] input: &[u8], #[case] kind: ErrorKind, #[case] col: usize) {
    let err = decode(input).unwrap_err();
    assert_eq!(err.kind(), kind, "{:?}", core::str::from_utf8(input));
    assert_eq!(err.column(), col);
}

#[test]
fn error_empty_document() {
    let err = decode(b"").unwrap_err();
    assert_err_contains(&err, "unexpected end of input, expected a value", 1, 1);
    assert!(!err.is_end_of_input());
}

#[test]
fn error_leading_plus() {
    let err = decode(b"+0").unwrap_err();
    assert_err_contains(&err, "invalid character '+', expected a value", 1, 1);
}

#[test]
fn error_reports_line_and_column() {
    let err = decode(b"{\n  \"a\": x\n}").unwrap_err();
    assert_err_contains(&err, "invalid character 'x'", 2, 8);
    assert_eq!(err.offset(), 9);
}

#[test]
fn error_non_printable_byte_is_hex() {
    let err = decode(b"[\x01]").unwrap_err();
    assert_err_contains(&err, "invalid character 0x01, expected a value", 1, 2);
}

#[test]
fn error_nesting_too_deep() {
    let mut input = Vec::new();
    input.resize(DEFAULT_MAX_DEPTH + 1, b'[');
    input.resize(2 * (DEFAULT_MAX_DEPTH + 1), b']');
    let err = decode(&input).unwrap_err();
    assert_eq!(err.kind(), invalid(b'[', Expected::Depth(DEFAULT_MAX_DEPTH)));
    assert_eq!(err.offset(), DEFAULT_MAX_DEPTH);
    assert_err_contains(&err, "expected nesting depth of at most 128", 1, 129);
}

#[test]
fn error_nesting_limit_is_configurable() {
    let options = DecoderOptions {
        max_depth: 0,
        ..Default::default()
    };
    assert!(decode_with(b"1", options).is_ok());
    let err = decode_with(b"{}", options).unwrap_err();
    assert_eq!(err.kind(), invalid(b'{', Expected::Depth(0)));
}

#[test]
fn error_in_later_value_with_multiple_values() {
    let options = DecoderOptions {
        allow_multiple_json_values: true,
        ..Default::default()
    };
    let err = decode_with(b"{} [1,]", options).unwrap_err();
    assert_eq!(err.kind(), invalid(b']', Expected::Value));
    assert_eq!(err.offset(), 6);
}

#[test]
fn error_lone_surrogate() {
    let err = decode(br#"["\udc00"]"#).unwrap_err();
    assert_eq!(err.kind(), invalid(b'\\', Expected::CodeUnit));
    assert_eq!(err.offset(), 2);

    let err = decode(br#""\ud800\u0041""#).unwrap_err();
    assert_eq!(err.kind(), invalid(b'\\', Expected::LowSurrogate));
}

#[test]
fn error_invalid_utf8_in_string() {
    let err = decode(b"[\"\xC3\x28\"]").unwrap_err();
    assert_eq!(err.kind(), invalid(0xC3, Expected::Utf8));
    assert_eq!(err.offset(), 2);
}

#[test]
fn error_number_overflow() {
    let err = decode(b"[1e400]").unwrap_err();
    assert_eq!(err.kind(), invalid(b'1', Expected::Number));
    assert_eq!(err.offset(), 1);
}
