//! Fuzz target for decoding arbitrary bytes as a presentation package
//!
//! # Invariants
//!
//! - Decoding returns `Ok` or `Err`, never panics
//! - Errors always carry a non-empty diagnostic

#![no_main]

use libfuzzer_sys::fuzz_target;
use slidedeck_app::Decode;
use slidedeck_pptx::PptxDecoder;

fuzz_target!(|data: &[u8]| {
    if let Err(e) = PptxDecoder::new().decode(data) {
        assert!(!e.message().is_empty());
    }
});
