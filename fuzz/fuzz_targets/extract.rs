#![no_main]

use libfuzzer_sys::fuzz_target;
use regex::bytes::Regex;
use trans_finder::catalog::CatalogIds;
use trans_finder::extract::{extract_msgids, extract_raw_tags};

fuzz_target!(|inputs: (&[u8], Vec<Vec<u8>>)| {
    let (text, existing) = inputs;
    let existing = existing.into_iter().collect::<CatalogIds>();

    let extracted = extract_msgids(text, &existing);
    assert_eq!(extracted, extract_msgids(text, &existing));
    assert!(extracted.msgids.len() + extracted.skipped <= extract_raw_tags(text).len());

    let placeholder = Regex::new(r"(?-u)\{\{\s*[A-Za-z_][A-Za-z0-9_.]*\s*\}\}").unwrap();
    for msgid in &extracted.msgids {
        assert!(!placeholder.is_match(msgid));
    }
});
