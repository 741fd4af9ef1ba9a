//! Scorekeeper test support utilities
//!
//! Shared helpers for the scorekeeper integration tests: unified logging
//! initialization and proptest configuration.

pub mod logging;
pub mod proptest_config;
