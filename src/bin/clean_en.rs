use anyhow::Result;
use archclean::{config::PipelineConfig, corrections::english};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = PipelineConfig::load()?;
    info!(
        input = %config.ja_cleaned.display(),
        output = %config.en_cleaned.display(),
        "running english correction pass"
    );
    english::clean_english(&config.ja_cleaned, &config.en_table, &config.en_cleaned)
}
