//! Osprey Phone-Intel Helpers
//!
//! Two standalone utilities around phone-number OSINT:
//! - Indian mobile-number prefix lookup from a static CSV table
//! - PhoneInfoga output post-processing (URL filtering and deduplication)

pub mod links;
pub mod prefix;

pub use links::*;
pub use prefix::*;
