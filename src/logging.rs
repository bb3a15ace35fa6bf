use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Logs to stderr at INFO unless `RUST_LOG` says otherwise; stdout is left for the result line.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
