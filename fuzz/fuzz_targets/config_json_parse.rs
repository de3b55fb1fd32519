//! Fuzz target for config JSON parsing.
//!
//! Feeds arbitrary bytes to the config decoder and, when decoding succeeds,
//! to the pretrain path parser, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pretrain_path::config::from_json_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(config) = from_json_slice(data) {
        let _ = config.pretrain_reference();
    }
});
