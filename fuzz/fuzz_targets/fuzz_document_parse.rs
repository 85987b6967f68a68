#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are fine, panics are bugs.
    let Ok(xml) = grants990::xml::decode_xml(data) else {
        return;
    };
    if let Ok(doc) = grants990::xml::Document::parse(&xml) {
        let extraction = grants990::extract::GrantExtractor::default().extract(&doc);
        for row in &extraction.rows {
            assert!(!row.recipient.is_empty());
            assert!(row.amount.is_finite());
        }
    }
});
