#![no_main]

use bookveil_decoy::book_cipher::decode_token;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // decode_token must never panic, whatever the token looks like
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode_token(s);

        // Exercise the numeric paths with a hyphen wedged in
        let hyphenated = format!("{}-{}", s, s);
        let _ = decode_token(&hyphenated);
    }
});
