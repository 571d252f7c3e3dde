//! Fuzz target for LabelMe JSON parsing and shape conversion.
//!
//! Run with:
//!   cargo +nightly fuzz run labelme_json_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use yoloset::labelme::fuzz_parse_record;

fuzz_target!(|data: &[u8]| {
    // Real LabelMe files without embedded image data are small.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = fuzz_parse_record(data);
});
