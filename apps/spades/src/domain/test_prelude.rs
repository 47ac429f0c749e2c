//! Shared proptest configuration for the domain property suites.

use proptest::prelude::ProptestConfig;

/// Case count stays modest so the full suite runs quickly; set
/// `PROPTEST_CASES` to crank it up locally.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(128);
    ProptestConfig {
        cases,
        max_shrink_iters: 1024,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}
