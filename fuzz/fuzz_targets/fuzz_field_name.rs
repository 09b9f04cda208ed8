#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut ret = daftar::vat::Vat201Return::default();
        // Unknown names are errors, never panics.
        if ret.update_named(s, s).is_ok() {
            let _ = ret.summary();
        }
    }
});
