//! Osprey Net Layer
//!
//! Provides the dual-route networking for the leak search tool:
//! - HTTP client construction, direct or via a SOCKS5h proxy (DNS via Tor)
//! - Breach-index result table parsing
//! - Route-fallback search loop (clearnet first, then the onion mirror)

pub mod client;
pub mod search;
pub mod table;

pub use client::*;
pub use search::*;
pub use table::*;
