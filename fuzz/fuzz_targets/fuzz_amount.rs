#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(v) = grants990::core::parse_amount(data) {
        assert!(v.is_finite());
    }
});
