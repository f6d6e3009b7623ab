// src/table.rs

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::fs::File;
use std::path::Path;
use tracing::warn;

/// Header written as the first line of every corrector output file.
pub const OUTPUT_HEADER: [&str; 5] = [
    "#architect_id",
    "architectJa",
    "architectEn",
    "architectJa_cleaned",
    "architectEn_cleaned",
];

/// One dataset row after normalization: identifier, the two raw name lists,
/// and the two derived cleaned columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub architect_id: String,
    pub architect_ja: String,
    pub architect_en: String,
    pub architect_ja_cleaned: String,
    pub architect_en_cleaned: String,
}

impl Record {
    /// Build from a positional TSV row. Returns `None` when the row is too
    /// short to carry all five columns; extra trailing fields are ignored.
    pub fn from_fields(fields: &StringRecord) -> Option<Self> {
        if fields.len() < 5 {
            return None;
        }
        Some(Self {
            architect_id: fields[0].to_string(),
            architect_ja: fields[1].to_string(),
            architect_en: fields[2].to_string(),
            architect_ja_cleaned: fields[3].to_string(),
            architect_en_cleaned: fields[4].to_string(),
        })
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            &self.architect_id,
            &self.architect_ja,
            &self.architect_en,
            &self.architect_ja_cleaned,
            &self.architect_en_cleaned,
        ]
    }
}

/// Tab-separated positional reader over `path`. Ragged rows are allowed;
/// nothing is treated as a header line.
pub fn tsv_reader(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

/// Tab-separated writer to `path`, created fresh.
pub fn tsv_writer(path: &Path) -> Result<Writer<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(file))
}

/// Read a five-column table into memory, consuming the first line as the
/// header. Short rows are skipped with a warning; corrector inputs are
/// machine-produced, so a short row means something upstream went wrong.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("reading {}", path.display()))?;
        match Record::from_fields(&row) {
            Some(rec) => records.push(rec),
            // +2: one for the header line, one for the zero-based index
            None => warn!(
                line = idx + 2,
                file = %path.display(),
                "row has fewer than 5 fields, skipped"
            ),
        }
    }
    Ok(records)
}

/// Write the fixed header followed by every record, tab-separated.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = tsv_writer(path)?;
    writer
        .write_record(OUTPUT_HEADER)
        .context("writing header")?;
    for rec in records {
        writer
            .write_record(rec.fields())
            .with_context(|| format!("writing record {}", rec.architect_id))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
