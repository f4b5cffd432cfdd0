use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LoggingConfig;

/// Installs the global fmt subscriber. Fails if one is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.min_level)
        .map_err(|e| anyhow!("invalid log level {}: {}", config.min_level, e))?;

    let builder = FmtSubscriber::builder().with_env_filter(filter);
    let result = match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        "full" => builder.try_init(),
        other => anyhow::bail!("unknown log format: {}", other),
    };

    result.map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
