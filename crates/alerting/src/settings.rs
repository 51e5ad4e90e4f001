//! Alert presentation settings
//!
//! Safe ranges are fixed; only where alerts go is configurable.

use crate::sink::{ConsoleSink, FanoutSink, LogSink};
use crate::AlertError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Where alerts are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertChannel {
    /// `tracing` warnings
    #[default]
    Log,
    /// Plain stderr lines
    Console,
    /// Both of the above
    Both,
}

/// Alert configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Delivery channel (default: log)
    pub channel: AlertChannel,
    /// ANSI colors on console output (default: off)
    pub use_colors: bool,
}

/// Prefix of the environment variables read by [`AlertConfig::load`]
const ENV_PREFIX: &str = "VITALS_ALERT";

impl AlertConfig {
    /// Load from an optional file, then `VITALS_ALERT_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, AlertError> {
        Self::from_sources(path, Some(Self::environment()))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    fn from_sources(
        path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, AlertError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        let config: Self = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| AlertError::Config(e.to_string()))?;

        info!("Loaded alert config: {:?}", config);
        Ok(config)
    }
}

/// Build the sinks described by `config`
pub fn build_sink(config: &AlertConfig) -> FanoutSink {
    let console = ConsoleSink::new(config.use_colors);
    match config.channel {
        AlertChannel::Log => FanoutSink::new().with(LogSink),
        AlertChannel::Console => FanoutSink::new().with(console),
        AlertChannel::Both => FanoutSink::new().with(LogSink).with(console),
    }
}
