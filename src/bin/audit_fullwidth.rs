use anyhow::Result;
use archclean::{audit, config::PipelineConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = PipelineConfig::load()?;
    info!(
        input = %config.normalized.display(),
        field = config.audit_field,
        "auditing for leftover full-width characters"
    );
    let flagged = audit::audit_fullwidth(&config.normalized, config.audit_field)?;
    if flagged > 0 {
        warn!(flagged, "rows still carry full-width characters; fix the inputs and re-run");
    } else {
        info!("table is clean");
    }
    Ok(())
}
