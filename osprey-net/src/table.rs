//! Breach-index result table parsing
//!
//! The search endpoint answers with an HTML page holding a single result
//! table: one header row, then one row per hit with cells
//! filename / email / password / hash / source.

use osprey_core::LeakRecord;
use scraper::{Html, Selector};

/// Parse the first result table out of a response body.
///
/// Skips the header row, trims every cell, drops rows with fewer than five
/// cells and ignores cells past the fifth. No `<table>` element at all
/// degrades to an empty result, same as a zero-row table.
pub fn parse_leak_table(html: &str) -> Vec<LeakRecord> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = match document.select(&table_selector).next() {
        Some(t) => t,
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if let Some(record) = LeakRecord::from_cells(&cells) {
            records.push(record);
        }
    }

    records
}
