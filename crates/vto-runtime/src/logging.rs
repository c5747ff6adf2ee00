//! Logging bootstrap

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use vto_core::{VtoError, VtoResult};

fn init_err<E: std::fmt::Display>(e: E) -> VtoError {
    VtoError::LoggingInit(e.to_string())
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-readable
    #[default]
    Pretty,
    /// Single-line
    Compact,
    /// Structured JSON
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Base level filter (e.g. "info", "debug")
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Per-target overrides (e.g. `vto_time=trace`)
    #[serde(default)]
    pub directives: Vec<String>,
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
            format: LogFormat::default(),
            directives: Vec::new(),
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Build the filter this config describes
    pub fn filter(&self) -> VtoResult<EnvFilter> {
        let mut filter = EnvFilter::try_new(&self.level).map_err(init_err)?;
        for d in &self.directives {
            let directive: Directive = d.parse().map_err(init_err)?;
            filter = filter.add_directive(directive);
        }
        Ok(filter)
    }
}

/// Install the global subscriber
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> VtoResult<()> {
    let registry = tracing_subscriber::registry().with(config.filter()?);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(config.ansi))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_ansi(config.ansi))
            .try_init(),
    }
    .map_err(init_err)?;

    tracing::info!(
        level = %config.level,
        format = ?config.format,
        directives = ?config.directives,
        "logging initialized"
    );
    Ok(())
}
