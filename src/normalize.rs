// src/normalize.rs

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::table::{tsv_reader, tsv_writer};

/// Map one full-width character to its half-width equivalent.
///
/// Covers the whole full-width ASCII block (U+FF01..=U+FF5E) plus the four
/// characters the dataset uses that sit outside it: the ideographic space,
/// the long-vowel mark, the ideographic full stop, and the full-width
/// backslash (which the data owners use as an alternate slash). Kana and
/// kanji pass through untouched; leftovers are caught by the audit stage.
pub fn to_halfwidth_char(c: char) -> char {
    match c {
        '　' => ' ',
        'ー' => '-',
        '。' => '.',
        '＼' => '/',
        '！'..='～' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

pub fn to_halfwidth(s: &str) -> String {
    s.chars().map(to_halfwidth_char).collect()
}

/// Derive the cleaned English column: upper-case, then fold full-width
/// characters to half-width.
pub fn derive_cleaned(field: &str) -> String {
    to_halfwidth(&field.to_uppercase())
}

/// Append two columns to every row of `input` and write the result to
/// `output`: a blank placeholder for `architectJa_cleaned` and the derived
/// `architectEn_cleaned` built from the third column. Rows with fewer than
/// three fields are dropped silently.
pub fn normalize_table(input: &Path, output: &Path) -> Result<()> {
    let mut reader = tsv_reader(input)?;
    let mut writer = tsv_writer(output)?;

    let mut kept = 0u64;
    let mut dropped = 0u64;
    for row in reader.records() {
        let row = row.with_context(|| format!("reading {}", input.display()))?;
        if row.len() < 3 {
            dropped += 1;
            continue;
        }
        let derived = derive_cleaned(&row[2]);
        let mut out: Vec<&str> = row.iter().collect();
        out.push("");
        out.push(&derived);
        writer
            .write_record(&out)
            .with_context(|| format!("writing {}", output.display()))?;
        kept += 1;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", output.display()))?;

    info!(kept, dropped, output = %output.display(), "normalized table written");
    Ok(())
}
