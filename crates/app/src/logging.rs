use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tracker_core=debug,app=debug";

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}
