//! Fuzz target for zip archive loading.
//!
//! Serialized archives may come from untrusted sources. Loading must never
//! panic, only return an error, and anything that loads must reserialize.

#![no_main]

use libfuzzer_sys::fuzz_target;
use litzip_archive::{Compressor, ZipCompressor};

fuzz_target!(|data: &[u8]| {
    if let Ok(archive) = ZipCompressor::load(data) {
        let _ = archive.to_bytes();
    }
});
