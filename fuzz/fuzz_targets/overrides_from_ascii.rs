#![no_main]

use chessboard::inventory::Overrides;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(overrides) = Overrides::from_ascii(data) else {
        return;
    };
    let roundtripped = Overrides::from_ascii(overrides.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(overrides, roundtripped);
});
