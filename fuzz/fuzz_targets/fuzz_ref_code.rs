#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(code) = cadastro::referral::ref_code_from_query(s) {
            assert!(!code.is_empty());
        }
    }
});
