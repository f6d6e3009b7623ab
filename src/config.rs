// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "archclean.yaml";

/// File names for every stage of the pipeline. The defaults mirror the
/// fixed names the dataset export is delivered under; drop an
/// `archclean.yaml` next to the data to point a stage elsewhere.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Raw three-column export.
    pub input: PathBuf,
    /// Normalizer output, five columns.
    pub normalized: PathBuf,
    /// Japanese wrong→correct side file.
    pub ja_table: PathBuf,
    /// Japanese pass output.
    pub ja_cleaned: PathBuf,
    /// English wrong→correct side file.
    pub en_table: PathBuf,
    /// English pass output.
    pub en_cleaned: PathBuf,
    /// Column inspected by the full-width audit.
    pub audit_field: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: "architects_table.tsv".into(),
            normalized: "architects_table_cleaned.tsv".into(),
            ja_table: "architectJa_corrections.tsv".into(),
            ja_cleaned: "architects_table_cleaned_01.tsv".into(),
            en_table: "architectEn_corrections.tsv".into(),
            en_cleaned: "architects_table_cleaned_02.tsv".into(),
            audit_field: crate::audit::DEFAULT_FIELD,
        }
    }
}

impl PipelineConfig {
    /// Load `archclean.yaml` from the working directory, falling back to
    /// the defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        info!(config = %path.display(), "pipeline config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let config = PipelineConfig::load_from(Path::new("does-not-exist.yaml"))?;
        assert_eq!(config, PipelineConfig::default());
        Ok(())
    }

    #[test]
    fn yaml_overrides_defaults_per_field() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "input: export_0828.tsv")?;
        writeln!(tmp, "audit_field: 2")?;

        let config = PipelineConfig::load_from(tmp.path())?;
        assert_eq!(config.input, PathBuf::from("export_0828.tsv"));
        assert_eq!(config.audit_field, 2);
        // untouched fields keep their defaults
        assert_eq!(config.ja_table, PipelineConfig::default().ja_table);
        Ok(())
    }
}
