use anyhow::Result;
use archclean::{config::PipelineConfig, normalize};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = PipelineConfig::load()?;
    info!(
        input = %config.input.display(),
        output = %config.normalized.display(),
        "normalizing raw export"
    );
    normalize::normalize_table(&config.input, &config.normalized)
}
