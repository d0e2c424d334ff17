#![no_main]

use arbitrary::Arbitrary;
use jsondescent::{DecoderOptions, decode, decode_values, decode_with};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    allow_multiple_json_values: bool,
    max_depth: u8,
    data: &'a [u8],
}

fn check(input: &Input<'_>) {
    let options = DecoderOptions {
        max_depth: usize::from(input.max_depth),
        allow_multiple_json_values: input.allow_multiple_json_values,
    };

    // Must never panic, whatever the bytes.
    let last = decode_with(input.data, options);
    let all: Vec<_> = decode_values(input.data, options).collect();

    // The iterator and the one-shot decoder agree on the outcome.
    match (&last, all.last()) {
        (Ok(value), Some(Ok(item))) => assert_eq!(value, item),
        (Err(err), Some(Err(item))) => assert_eq!(err, item),
        (last, item) => panic!("decode_with gave {last:?}, decode_values ended with {item:?}"),
    }

    // Anything serde_json accepts as a single document decodes here as well.
    // Its recursion limit keeps accepted documents within the default depth.
    if serde_json::from_slice::<serde_json::Value>(input.data).is_ok() {
        if let Err(err) = decode(input.data) {
            panic!(
                "rejected input serde_json accepts: {err}\n{:?}",
                String::from_utf8_lossy(input.data)
            );
        }
    }
}

fuzz_target!(|input: Input<'_>| check(&input));
