//! Logging setup

use crate::AlertError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `tracing` subscriber
///
/// Honours `RUST_LOG`, falling back to `info`. Fails if a global subscriber
/// is already installed.
pub fn init_logging() -> Result<(), AlertError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AlertError::Subscriber(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_fails() {
        assert!(init_logging().is_ok());
        assert!(matches!(init_logging(), Err(AlertError::Subscriber(_))));
    }
}
