// src/corrections/mod.rs

pub mod english;
pub mod japanese;

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Wrong spelling → correct spelling, loaded fully before any record is
/// touched and read-only afterwards.
pub type CorrectionTable = HashMap<String, String>;

/// Parse a two-column tab-delimited side file into (line, wrong, correct)
/// triples. Blank lines and `#` comments are skipped; anything else must be
/// exactly two tab-separated fields or the whole load aborts.
fn read_pairs(path: &Path) -> Result<Vec<(usize, String, String)>> {
    let file =
        File::open(path).with_context(|| format!("opening correction table {}", path.display()))?;

    let mut pairs = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("reading {} line {}", path.display(), lineno))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split('\t').collect();
        if fields.len() != 2 {
            bail!(
                "{} line {} is not a wrong<TAB>correct pair: {:?}",
                path.display(),
                lineno,
                trimmed
            );
        }
        pairs.push((
            lineno,
            fields[0].trim().to_string(),
            fields[1].trim().to_string(),
        ));
    }
    Ok(pairs)
}

/// Load a correction table keeping key and value casing exactly as written.
/// Later lines win on duplicate keys.
pub fn load_table(path: &Path) -> Result<CorrectionTable> {
    let mut table = CorrectionTable::new();
    for (_, wrong, correct) in read_pairs(path)? {
        debug!(%wrong, %correct, "correction loaded");
        table.insert(wrong, correct);
    }
    Ok(table)
}

/// Load a correction table for case-insensitive lookup: keys are
/// upper-cased, and a corrected value that still contains lowercase is
/// upper-cased with a warning. Later lines win on duplicate keys.
pub fn load_table_upper(path: &Path) -> Result<CorrectionTable> {
    let mut table = CorrectionTable::new();
    for (lineno, wrong, correct) in read_pairs(path)? {
        let correct = if correct.chars().any(|c| c.is_lowercase()) {
            warn!(
                line = lineno,
                value = %correct,
                "lowercase in corrected value, upper-casing"
            );
            correct.to_uppercase()
        } else {
            correct
        };
        let wrong = wrong.to_uppercase();
        debug!(%wrong, %correct, "correction loaded");
        table.insert(wrong, correct);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_file(contents: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(contents.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn loads_trimmed_pairs_and_skips_comments() -> Result<()> {
        let tmp = table_file("# wrong\tcorrect\n\n山田 太郎\t山田太郎\n tanaka \tTANAKA\n")?;
        let table = load_table(tmp.path())?;
        assert_eq!(table.len(), 2);
        assert_eq!(table["山田 太郎"], "山田太郎");
        assert_eq!(table["tanaka"], "TANAKA");
        Ok(())
    }

    #[test]
    fn malformed_line_aborts_with_line_number() -> Result<()> {
        let tmp = table_file("a\tb\nno-tab-here\nc\td\n")?;
        let err = load_table(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");

        let tmp = table_file("a\tb\tc\n")?;
        let err = load_table(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("line 1"), "got: {err}");
        Ok(())
    }

    #[test]
    fn duplicate_keys_last_entry_wins() -> Result<()> {
        let tmp = table_file("kuma\tKUMA\nkuma\tKENGO KUMA\n")?;
        let table = load_table(tmp.path())?;
        assert_eq!(table["kuma"], "KENGO KUMA");
        Ok(())
    }

    #[test]
    fn upper_variant_folds_keys_and_lowercase_values() -> Result<()> {
        let tmp = table_file("Smith\tSmith-Fixed\nJONES\tJONES&CO\n")?;
        let table = load_table_upper(tmp.path())?;
        // key upper-cased, lowercase-containing value upper-cased
        assert_eq!(table["SMITH"], "SMITH-FIXED");
        // already-upper value kept verbatim
        assert_eq!(table["JONES"], "JONES&CO");
        Ok(())
    }
}
