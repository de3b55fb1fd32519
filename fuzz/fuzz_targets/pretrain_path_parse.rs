//! Fuzz target for the pretrain path parser on raw strings.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pretrain_path::parse_pretrain;

fuzz_target!(|data: &str| {
    if let Ok(Some(reference)) = parse_pretrain(data) {
        let prefix = format!("{}/{}", reference.owner(), reference.repo());
        assert!(reference.file().starts_with(&prefix));
        assert!(reference.file().split('/').count() >= 3);
    }
});
