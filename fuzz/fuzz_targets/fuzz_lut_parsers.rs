#![no_main]

use libfuzzer_sys::fuzz_target;
use luts::binary::{BinaryDecoder, DecodeOptions};
use luts::metadata::{parse_metadata, shape_of};
use luts::naming::NamingGrammar;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Names and schemas must either parse or fail cleanly, never panic
    let _ = NamingGrammar::default().parse(Path::new(text));

    if let Ok(dims) = parse_metadata(text, Path::new("fuzz.txt")) {
        let shape = shape_of(&dims);
        // Decode the input itself against the schema it declared
        let _ = BinaryDecoder::decode_bytes(data, &shape, &DecodeOptions::default());
    }
});
