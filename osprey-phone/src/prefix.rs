//! Indian mobile-number prefix lookup
//!
//! Maps the first four digits of a 10-digit Indian mobile number to its
//! issuing operator and telecom circle. The table is a static CSV with
//! columns prefix/operator/circle; a bundled copy ships with the crate.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Prefix table bundled with the crate
const BUNDLED_CSV: &str = include_str!("../data/mobile-prefix.csv");

/// Placeholder for prefixes and fields the table does not cover
const UNKNOWN: &str = "Unknown";

/// Errors from table loading and number lookup
#[derive(Debug, Error)]
pub enum PrefixError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input must be a 10-digit Indian mobile number")]
    InvalidNumber,
}

#[derive(Debug, Deserialize)]
struct PrefixRow {
    prefix: String,
    operator: String,
    circle: String,
}

/// Result of one prefix lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixLookup {
    /// The normalized 10-digit number
    pub input: String,
    /// Issuing operator, or "Unknown"
    pub operator: String,
    /// Telecom circle, or "Unknown"
    pub circle: String,
}

/// In-memory prefix → (operator, circle) table
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: HashMap<String, (String, String)>,
}

impl PrefixTable {
    /// Load a table from any CSV reader with prefix/operator/circle columns
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PrefixError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = HashMap::new();

        for row in csv_reader.deserialize() {
            let row: PrefixRow = row?;
            entries.insert(
                row.prefix.trim().to_string(),
                (row.operator.trim().to_string(), row.circle.trim().to_string()),
            );
        }

        debug!("Loaded {} mobile prefixes", entries.len());
        Ok(Self { entries })
    }

    /// Load a table from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self, PrefixError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load the table bundled with the crate
    pub fn bundled() -> Result<Self, PrefixError> {
        Self::from_reader(BUNDLED_CSV.as_bytes())
    }

    /// Look up a number: strip non-digits, require exactly 10 digits,
    /// index the table by the first four.
    pub fn lookup(&self, number: &str) -> Result<PrefixLookup, PrefixError> {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 10 {
            return Err(PrefixError::InvalidNumber);
        }

        let (operator, circle) = match self.entries.get(&digits[..4]) {
            Some((operator, circle)) => (
                non_empty_or_unknown(operator),
                non_empty_or_unknown(circle),
            ),
            None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
        };

        Ok(PrefixLookup {
            input: digits,
            operator,
            circle,
        })
    }
}

fn non_empty_or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_loads() {
        let table = PrefixTable::bundled().unwrap();
        let result = table.lookup("9876543210").unwrap();
        assert_eq!(result.input, "9876543210");
        assert_eq!(result.operator, "Airtel");
        assert_eq!(result.circle, "Punjab");
    }

    #[test]
    fn test_formatted_ten_digits_accepted() {
        let table = PrefixTable::bundled().unwrap();
        let result = table.lookup("(98765) 43210").unwrap();
        assert_eq!(result.input, "9876543210");
    }

    #[test]
    fn test_country_code_rejected() {
        // stripping leaves 12 digits, which is not a bare mobile number
        let table = PrefixTable::bundled().unwrap();
        assert!(matches!(
            table.lookup("+91 98765-43210"),
            Err(PrefixError::InvalidNumber)
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let table = PrefixTable::bundled().unwrap();
        assert!(matches!(table.lookup("12345"), Err(PrefixError::InvalidNumber)));
        assert!(matches!(
            table.lookup("919876543210"),
            Err(PrefixError::InvalidNumber)
        ));
    }

    #[test]
    fn test_unknown_prefix() {
        let table = PrefixTable::bundled().unwrap();
        let result = table.lookup("1234567890").unwrap();
        assert_eq!(result.operator, "Unknown");
        assert_eq!(result.circle, "Unknown");
    }

    #[test]
    fn test_empty_field_becomes_unknown() {
        let csv = "prefix,operator,circle\n9000, ,Telangana\n";
        let table = PrefixTable::from_reader(csv.as_bytes()).unwrap();
        let result = table.lookup("9000123456").unwrap();
        assert_eq!(result.operator, "Unknown");
        assert_eq!(result.circle, "Telangana");
    }

    #[test]
    fn test_fields_trimmed_on_load() {
        let csv = "prefix,operator,circle\n 9000 , Jio , Telangana \n";
        let table = PrefixTable::from_reader(csv.as_bytes()).unwrap();
        let result = table.lookup("9000123456").unwrap();
        assert_eq!(result.operator, "Jio");
        assert_eq!(result.circle, "Telangana");
    }
}
