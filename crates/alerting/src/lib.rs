//! Vital Sign Alerting
//!
//! Provides the alert event raised for out-of-range vitals, the sinks that
//! deliver it, and configuration for how alerts are presented.

mod logging;
mod settings;
mod sink;
mod types;

pub use logging::init_logging;
pub use settings::{build_sink, AlertChannel, AlertConfig};
pub use sink::{AlertSink, ConsoleSink, FanoutSink, LogSink, RecordingSink};
pub use types::{Vital, VitalAlert};

use thiserror::Error;

/// Alerting errors
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Alert config error: {0}")]
    Config(String),
    #[error("Failed to install log subscriber: {0}")]
    Subscriber(String),
}
