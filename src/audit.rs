// src/audit.rs

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, warn};
use unicode_width::UnicodeWidthChar;

use crate::table::tsv_reader;

/// Column the audit inspects by default: the derived English column.
pub const DEFAULT_FIELD: usize = 4;

/// True for characters whose East Asian Width property is Full or Wide
/// (the ones that occupy two terminal cells).
pub fn is_fullwidth(c: char) -> bool {
    c.width() == Some(2)
}

/// Sorted set of distinct full-width characters in `text`.
pub fn fullwidth_chars(text: &str) -> String {
    let set: BTreeSet<char> = text.chars().filter(|c| is_fullwidth(*c)).collect();
    set.into_iter().collect()
}

/// Scan `input` and report every row whose `field` column still contains
/// full-width characters. Rows with fewer than three fields, or without the
/// designated column, are skipped. Read-only: the report goes to the
/// console, nothing is written. Returns the number of flagged rows.
pub fn audit_fullwidth(input: &Path, field: usize) -> Result<u64> {
    let mut reader = tsv_reader(input)?;

    let mut flagged = 0u64;
    for row in reader.records() {
        let row = row.with_context(|| format!("reading {}", input.display()))?;
        if row.len() < 3 {
            continue;
        }
        let text = match row.get(field) {
            Some(text) => text,
            None => continue,
        };
        let found = fullwidth_chars(text);
        if !found.is_empty() {
            flagged += 1;
            warn!(
                id = &row[0],
                value = text,
                chars = %found,
                "full-width characters remain"
            );
        }
    }

    info!(flagged, input = %input.display(), "full-width audit complete");
    Ok(flagged)
}
