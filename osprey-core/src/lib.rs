//! Osprey Core - Record types and report persistence
//!
//! This crate provides the foundational pieces shared by the tools:
//! - Leak search records parsed from breach-index tables
//! - JSON report writing with directory creation

pub mod records;
pub mod report;

pub use records::*;
pub use report::*;

/// Default path for leak search results
pub const DEFAULT_RESULT_PATH: &str = "output/leaksearch_result.json";
