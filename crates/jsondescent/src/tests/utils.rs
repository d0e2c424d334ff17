//! Test-only rendering of [`Value`] trees back to JSON text.

use alloc::string::String;
use core::fmt::Write;

use crate::Value;

/// Escapes `src` for inclusion in a JSON string literal.
pub(crate) fn write_escaped_string<W: Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Renders `value` as JSON, inserting `ws` around every structural byte.
pub(crate) fn render_with(value: &Value, ws: &str, out: &mut String) -> core::fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => {
            out.write_char('"')?;
            write_escaped_string(s, out)?;
            out.write_char('"')
        }
        Value::Array(items) => {
            write!(out, "[{ws}")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(out, "{ws},{ws}")?;
                }
                render_with(item, ws, out)?;
            }
            write!(out, "{ws}]")
        }
        Value::Object(map) => {
            write!(out, "{{{ws}")?;
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    write!(out, "{ws},{ws}")?;
                }
                out.write_char('"')?;
                write_escaped_string(k, out)?;
                write!(out, "\"{ws}:{ws}")?;
                render_with(v, ws, out)?;
            }
            write!(out, "{ws}}}")
        }
    }
}

pub(crate) fn render(value: &Value) -> String {
    let mut out = String::new();
    render_with(value, "", &mut out).expect("writing to a String cannot fail");
    out
}

pub(crate) fn render_spaced(value: &Value, ws: &str) -> String {
    let mut out = String::new();
    render_with(value, ws, &mut out).expect("writing to a String cannot fail");
    out
}
