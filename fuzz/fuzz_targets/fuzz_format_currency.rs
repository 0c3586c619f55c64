#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Split into amount text and code — must not panic on either.
        let mut mid = s.len() / 2;
        while !s.is_char_boundary(mid) {
            mid -= 1;
        }
        let (amount, code) = s.split_at(mid);
        let amount = serde_json::Value::String(amount.to_string());
        let _ = invoview::core::format_currency(&amount, code);
    }
});
