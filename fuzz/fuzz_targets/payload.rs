#![no_main]

use libfuzzer_sys::fuzz_target;
use propkeys::{
    tables::{current, legacy},
    wire,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = wire::decode_payload::<current::PropertyKey>(text);
        let _ = wire::decode_payload::<legacy::PropertyKey>(text);
    }
});
