//! Leak search record types
//!
//! One record per row of a breach-index result table. Field order matches
//! the table column order; duplicates are kept as served.

use serde::{Deserialize, Serialize};

/// One parsed leak-data row with five fixed string fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeakRecord {
    /// Dump file the credential was found in
    pub filename: String,
    /// Leaked email address
    pub email: String,
    /// Plaintext password, if the dump had one
    pub password: String,
    /// Password hash, if the dump had one
    pub hash: String,
    /// Breach the dump is attributed to
    pub source: String,
}

impl LeakRecord {
    /// Build a record from the first five cells of a table row.
    ///
    /// Returns `None` when the row has fewer than five cells; extra cells
    /// are ignored.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        if cells.len() < 5 {
            return None;
        }
        Some(Self {
            filename: cells[0].clone(),
            email: cells[1].clone(),
            password: cells[2].clone(),
            hash: cells[3].clone(),
            source: cells[4].clone(),
        })
    }
}
