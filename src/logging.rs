use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging.
///
/// Log level resolution order: `RUST_LOG`, then the `LINEAGE_LOG`
/// environment variable, then the `level` argument (default `warn`,
/// scoped to this crate). Fails if a global subscriber is already set.
pub fn init_tracing(level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let level = level.unwrap_or("warn");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("LINEAGE_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("lineage={}", level)
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init()?;

    Ok(())
}
