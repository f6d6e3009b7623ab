// src/corrections/english.rs

use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::{load_table_upper, CorrectionTable};
use crate::table::{read_records, write_records};

/// Clean one pipe-delimited English name list: trim each segment, look it
/// up upper-cased against the table, and on a hit take the table value
/// verbatim. Segments are rejoined with a bare `|`. Each table hit is
/// logged with the record's id.
pub fn clean_names(id: &str, raw: &str, table: &CorrectionTable) -> String {
    raw.split('|')
        .map(|segment| {
            let trimmed = segment.trim();
            match table.get(&trimmed.to_uppercase()) {
                Some(correct) => {
                    info!(id, from = trimmed, to = %correct, "name replaced");
                    correct.clone()
                }
                None => trimmed.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Rewrite `architectEn_cleaned` for every record that already has one.
/// The upstream passes leave the column empty for rows still waiting on a
/// Japanese cleanup, and those pass through unchanged.
pub fn clean_english(input: &Path, table_path: &Path, output: &Path) -> Result<()> {
    let table = load_table_upper(table_path)?;
    info!(entries = table.len(), table = %table_path.display(), "correction table loaded");

    let mut records = read_records(input)?;
    let mut corrected = 0u64;
    for rec in &mut records {
        if rec.architect_en_cleaned.is_empty() {
            continue;
        }
        let cleaned = clean_names(&rec.architect_id, &rec.architect_en_cleaned, &table);
        if cleaned != rec.architect_en_cleaned {
            corrected += 1;
        }
        rec.architect_en_cleaned = cleaned;
    }

    write_records(output, &records)?;
    info!(
        corrected,
        total = records.len(),
        output = %output.display(),
        "english pass complete"
    );
    Ok(())
}
