#![allow(missing_docs, dead_code)]
#![expect(clippy::needless_raw_string_hashes)]

use jsondescent::{Map, Value};

/// A structured tool-call response with nested objects and arrays, escapes,
/// non-ASCII text and every number shape.
pub const ORIGINAL: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null,
        "score": 0.0125
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ],
            "incremental": true,
            "lto": false
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")",
        "let path = \"C:\\\\tmp\";\n",
        "caf\u00e9 \ud83d\ude00 \u00e9t\u00e9"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main",
            "line": 1
        },
        {
            "type": "macro",
            "name": "println",
            "line": -2
        }
    ],
    "matrix": [
        [
            "a"
        ],
        [],
        [[[]]]
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        "t",
        [
            "u"
        ],
        1e3,
        -0,
        2.5E-3,
        "end"
    ],
    "trailing": {
        "status": "ok"
    },
    "object_in_array_last": [
        {
            "a": 1
        }
    ],
    "nested_objects": {
        "outer": {
            "inner": 1
        }
    },
    "日本語": "テキスト",
    "": {}
}"#;

/// The same document with every optional whitespace byte removed.
pub fn compact() -> String {
    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    serde_json::to_string(&value).unwrap()
}

/// Converts a `serde_json` value into the decoder's value model.
pub fn from_serde(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap()),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_serde).collect())
        }
        serde_json::Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(k, v)| (k, from_serde(v)))
                .collect::<Map>(),
        ),
    }
}
