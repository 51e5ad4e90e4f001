//! Vital Check Error Types

use thiserror::Error;

/// Errors during vital checking
///
/// Out-of-range readings are not errors; they return `false` and fire an alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VitalError {
    /// Reading is not an integer or floating-point number
    #[error("Invalid input type for {argument}: expected a number, got {found}")]
    InvalidInputType {
        argument: &'static str,
        found: &'static str,
    },
}
