//! JSON report persistence
//!
//! Writes result arrays as pretty-printed JSON, creating the parent
//! directory when needed and overwriting any prior file.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors from report writing
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Save a slice of records as a 2-space-indented JSON array
pub fn save_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
