use anyhow::Result;
use archclean::{config::PipelineConfig, corrections::japanese};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = PipelineConfig::load()?;
    info!(
        input = %config.normalized.display(),
        output = %config.ja_cleaned.display(),
        "running japanese correction pass"
    );
    japanese::clean_japanese(&config.normalized, &config.ja_table, &config.ja_cleaned)
}
