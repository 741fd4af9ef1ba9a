//! Shared proptest configuration for integration tests.
//!
//! Env knobs:
//! - PROPTEST_CASES: number of cases per property (e.g. 32, 800, 5000).
//! - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//!
//! Generate valid inputs by construction rather than filtering with `prop_assume!`.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    // Project default is 32 cases; clamp to at least 1
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // Integration tests run from the workspace; skip regression files
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
