// src/corrections/japanese.rs

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::info;

use super::{load_table, CorrectionTable};
use crate::table::{read_records, write_records};

static RE_LATIN: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z]").unwrap());

/// Clean one pipe-delimited Japanese name list: trim each segment, replace
/// exact correction-table hits (case-sensitive), then upper-case any segment
/// containing Latin letters. Segments are rejoined with a bare `|`. Each
/// table hit is logged with the record's id.
pub fn clean_names(id: &str, raw: &str, table: &CorrectionTable) -> String {
    raw.split('|')
        .map(|segment| {
            let trimmed = segment.trim();
            let mut name = match table.get(trimmed) {
                Some(correct) => {
                    info!(id, from = trimmed, to = %correct, "name replaced");
                    correct.clone()
                }
                None => trimmed.to_string(),
            };
            if RE_LATIN.is_match(&name) {
                name = name.to_uppercase();
            }
            name
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Fill `architectJa_cleaned` for every record that does not have one yet.
/// Records already carrying a cleaned value pass through untouched, so
/// re-running the pass is a no-op for them.
pub fn clean_japanese(input: &Path, table_path: &Path, output: &Path) -> Result<()> {
    let table = load_table(table_path)?;
    info!(entries = table.len(), table = %table_path.display(), "correction table loaded");

    let mut records = read_records(input)?;
    let mut filled = 0u64;
    for rec in &mut records {
        if !rec.architect_ja_cleaned.is_empty() {
            continue;
        }
        rec.architect_ja_cleaned = clean_names(&rec.architect_id, &rec.architect_ja, &table);
        filled += 1;
    }

    write_records(output, &records)?;
    info!(
        filled,
        total = records.len(),
        output = %output.display(),
        "japanese pass complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;
    use anyhow::Result;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_of(pairs: &[(&str, &str)]) -> CorrectionTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_exact_match_then_uppercases_latin() {
        let table = table_of(&[("tanaka", "TANAKA_CORRECT")]);
        // first segment hits the table; second is not a key (lookup is
        // case-sensitive) and is already upper-case
        assert_eq!(
            clean_names("A1", "tanaka|TANAKA", &table),
            "TANAKA_CORRECT|TANAKA"
        );
    }

    #[test]
    fn trims_segments_and_joins_without_spaces() {
        let table = table_of(&[]);
        assert_eq!(
            clean_names("A1", "山田太郎 | yamada taro", &table),
            "山田太郎|YAMADA TARO"
        );
    }

    #[test]
    fn kanji_only_segments_keep_their_case_handling_out() {
        let table = table_of(&[("山田 太郎", "山田太郎")]);
        assert_eq!(
            clean_names("A1", "山田 太郎|安藤忠雄", &table),
            "山田太郎|安藤忠雄"
        );
    }

    #[test]
    fn already_cleaned_records_are_untouched() -> Result<()> {
        let mut input = NamedTempFile::new()?;
        writeln!(input, "#architect_id\tarchitectJa\tarchitectEn\tarchitectJa_cleaned\tarchitectEn_cleaned")?;
        writeln!(input, "A1\ttanaka\ttanaka\t手付かず\tTANAKA")?;
        writeln!(input, "A2\ttanaka\ttanaka\t\tTANAKA")?;

        let mut corrections = NamedTempFile::new()?;
        writeln!(corrections, "tanaka\t田中")?;

        let output = NamedTempFile::new()?;
        clean_japanese(input.path(), corrections.path(), output.path())?;

        let records = read_records(output.path())?;
        assert_eq!(
            records[0],
            Record {
                architect_id: "A1".into(),
                architect_ja: "tanaka".into(),
                architect_en: "tanaka".into(),
                architect_ja_cleaned: "手付かず".into(),
                architect_en_cleaned: "TANAKA".into(),
            }
        );
        assert_eq!(records[1].architect_ja_cleaned, "田中");

        // second run over its own output changes nothing
        let rerun = NamedTempFile::new()?;
        clean_japanese(output.path(), corrections.path(), rerun.path())?;
        assert_eq!(
            fs::read_to_string(output.path())?,
            fs::read_to_string(rerun.path())?
        );
        Ok(())
    }
}
