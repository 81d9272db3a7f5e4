use ssmrun_core::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing system.
///
/// Lambda forwards stdout/stderr to CloudWatch, which adds its own timestamps
/// and does not render ANSI colour, so both are disabled here.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init()?;

    Ok(())
}
