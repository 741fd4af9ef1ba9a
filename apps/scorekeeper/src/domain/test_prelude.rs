//! Proptest configuration shared by the domain property tests.
//!
//! `PROPTEST_CASES` overrides the case count (default 64).

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
