#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A path segment that survives normalization untouched: no slashes and no
/// leading/trailing whitespace.
pub fn arb_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,12}"
}

/// A segment that may be empty, as produced by consecutive slashes.
pub fn arb_loose_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{0,8}"
}

/// Surrounding noise that normalization strips: whitespace, then slashes.
pub fn arb_padding() -> impl Strategy<Value = (String, String, String, String)> {
    ("[ \t\n]{0,3}", "/{0,3}", "/{0,3}", "[ \t\n]{0,3}")
}

/// Wraps an already-normalized path in strippable padding.
pub fn pad(normalized: &str, padding: &(String, String, String, String)) -> String {
    let (ws_left, slash_left, slash_right, ws_right) = padding;
    format!("{ws_left}{slash_left}{normalized}{slash_right}{ws_right}")
}
