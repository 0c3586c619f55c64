#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any parseable JSON must normalize and render without panicking.
    if let Ok(raw) = serde_json::from_slice::<serde_json::Value>(data) {
        let invoice = invoview::core::normalize(&raw);
        let _ = invoview::report::render(&invoice, &raw, None);
    }
});
