//! PhoneInfoga output post-processing
//!
//! PhoneInfoga prints scan results as plain text: `Results for <scanner>`
//! headings, section headers such as `Social media:`, and `URL: <link>`
//! lines underneath. These helpers pull the URLs out of chosen sections,
//! deduplicate them, and render them either as a copy-friendly listing or
//! as structured JSON rows.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;
use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

static URL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^URL:\s*(\S+)").unwrap());

/// Errors from link extraction
#[derive(Debug, Error)]
pub enum LinksError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// One extracted URL with the section it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRow {
    /// Section header the URL appeared under
    pub category: String,
    /// The URL itself
    pub url: String,
}

/// Parse a comma-separated section list into a keep-set
pub fn keep_set(spec: &str) -> HashSet<String> {
    spec.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Scan PhoneInfoga text output for URLs inside the kept sections.
///
/// A `Results for …` line resets the current section; a line ending in `:`
/// opens a new one. Rows come back in encounter order, duplicates included.
pub fn extract_links<R: BufRead>(
    reader: R,
    keep: &HashSet<String>,
) -> Result<Vec<LinkRow>, LinksError> {
    let mut current: Option<String> = None;
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // a new scanner section invalidates the block context
        if line.starts_with("Results for") {
            current = None;
            continue;
        }

        // block headers like "Social media:"
        if let Some(header) = line.strip_suffix(':') {
            current = Some(header.to_string());
            continue;
        }

        let in_kept_block = current.as_deref().is_some_and(|c| keep.contains(c));
        if !in_kept_block {
            continue;
        }

        if let Some(captures) = URL_LINE.captures(line) {
            rows.push(LinkRow {
                category: current.clone().unwrap_or_default(),
                url: captures[1].to_string(),
            });
        }
    }

    debug!("Extracted {} URL rows", rows.len());
    Ok(rows)
}

/// Group rows by category, deduplicating URLs while preserving first-seen
/// order within each category. Categories come back sorted.
pub fn dedupe_by_category(rows: &[LinkRow]) -> BTreeMap<String, Vec<String>> {
    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for row in rows {
        if seen.insert((row.category.clone(), row.url.clone())) {
            buckets.entry(row.category.clone()).or_default().push(row.url.clone());
        }
    }

    buckets
}

/// Render deduplicated buckets as a numbered, copy-friendly listing
pub fn format_report(buckets: &BTreeMap<String, Vec<String>>) -> String {
    let total: usize = buckets.values().map(Vec::len).sum();
    let kept: Vec<&str> = buckets.keys().map(String::as_str).collect();
    let kept_label = if kept.is_empty() {
        "none".to_string()
    } else {
        kept.join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "\n=== PhoneInfoga Links — {} total (kept: {}) ===\n", total, kept_label);

    for (category, urls) in buckets {
        let _ = writeln!(out, "-- {} ({}) --", category, urls.len());
        for (idx, url) in urls.iter().enumerate() {
            let _ = writeln!(out, "{:2}) {}", idx + 1, url);
        }
        let _ = writeln!(out);
    }

    if total == 0 {
        let _ = writeln!(out, "No links found. Try a different --keep list.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Results for googlesearch
Social media:
URL: https://facebook.com/u/1
URL: https://twitter.com/u1
Reputation:
URL: https://whosenumber.info/q
Individuals:
URL: https://people.example/u1
Results for numverify
Social media:
URL: https://facebook.com/u/1
";

    #[test]
    fn test_extract_kept_sections_only() {
        let keep = keep_set("Social media,Reputation");
        let rows = extract_links(SAMPLE.as_bytes(), &keep).unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.category != "Individuals"));
        assert_eq!(rows[0].url, "https://facebook.com/u/1");
        assert_eq!(rows[2].category, "Reputation");
        // duplicate from the second scanner is kept at this stage
        assert_eq!(rows[3].url, "https://facebook.com/u/1");
    }

    #[test]
    fn test_results_line_resets_section() {
        let input = "\
Social media:
URL: https://a.example/1
Results for scanner
URL: https://b.example/orphan
";
        let keep = keep_set("Social media");
        let rows = extract_links(input.as_bytes(), &keep).unwrap();

        // the orphan URL after the reset has no section and is dropped
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].url, "https://a.example/1");
    }

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let keep = keep_set("Social media,Reputation,Individuals");
        let rows = extract_links(SAMPLE.as_bytes(), &keep).unwrap();
        let buckets = dedupe_by_category(&rows);

        assert_eq!(
            buckets["Social media"],
            vec!["https://facebook.com/u/1", "https://twitter.com/u1"]
        );
        assert_eq!(buckets["Individuals"], vec!["https://people.example/u1"]);
    }

    #[test]
    fn test_keep_set_trims_and_drops_empties() {
        let keep = keep_set(" Social media , ,Reputation,");
        assert_eq!(keep.len(), 2);
        assert!(keep.contains("Social media"));
        assert!(keep.contains("Reputation"));
    }

    #[test]
    fn test_format_report_counts_and_numbers() {
        let keep = keep_set("Social media,Reputation");
        let rows = extract_links(SAMPLE.as_bytes(), &keep).unwrap();
        let report = format_report(&dedupe_by_category(&rows));

        assert!(report.contains("3 total"));
        assert!(report.contains("-- Reputation (1) --"));
        assert!(report.contains(" 1) https://facebook.com/u/1"));
        assert!(report.contains(" 2) https://twitter.com/u1"));
    }

    #[test]
    fn test_format_report_empty() {
        let report = format_report(&BTreeMap::new());
        assert!(report.contains("0 total"));
        assert!(report.contains("kept: none"));
        assert!(report.contains("No links found"));
    }
}
