//! Printing decoded values.

use std::io::Write;

use jsondescent::Value;

use crate::{CliError, Format};

/// Writes `value` followed by a newline.
pub fn write_value(out: &mut impl Write, value: &Value, format: Format) -> Result<(), CliError> {
    match format {
        Format::Debug => writeln!(out, "{value:#?}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Short name of the value's kind, for logs.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
