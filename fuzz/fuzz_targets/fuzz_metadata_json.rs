//! Fuzz target for bundle metadata decoding.
//!
//! The metadata entry of a bundle is attacker-controlled JSON. Decoding must
//! reject malformed documents and condition-set cardinality violations
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use litzip_bundle::BundleMetadata;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = BundleMetadata::from_json(text);
    }
});
