//! Process-wide tracing setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays free for rendering.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(())
}
