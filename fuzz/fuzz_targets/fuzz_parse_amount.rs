#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let amount = daftar::core::parse_amount(s);
        let _ = daftar::core::format_amount(amount);
        let _ = daftar::core::format_display(amount);
    }
});
