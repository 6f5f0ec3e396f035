//! Tests for the deduplicated warning system.

mod common;

use trellis_common::warning::warn_once;

#[test]
fn test_warning_emitted_once_per_message() {
    common::install();
    warn_once("test", "duplicate message for dedup test");
    warn_once("test", "duplicate message for dedup test");
    assert_eq!(
        common::targets_of("duplicate message for dedup test"),
        vec!["trellis::test"]
    );
}

#[test]
fn test_same_message_different_component() {
    common::install();
    warn_once("alpha", "shared message across components");
    warn_once("beta", "shared message across components");
    warn_once("alpha", "shared message across components");
    assert_eq!(
        common::targets_of("shared message across components"),
        vec!["trellis::alpha", "trellis::beta"]
    );
}
