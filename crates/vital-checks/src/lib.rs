//! Vital Sign Checks
//!
//! Checks temperature, pulse rate, and SpO2 readings against fixed safe
//! ranges. Every failing check fires one alert through an injected
//! [`AlertSink`]; non-numeric readings are rejected before any check runs.

mod checker;
mod error;
mod monitor;
mod reading;

pub use alerting::{AlertSink, Vital, VitalAlert};
pub use checker::{RangeCheck, SafeRange};
pub use error::VitalError;
pub use monitor::{
    assess, is_pulse_rate_ok, is_spo2_ok, is_temperature_ok, vitals_ok, VitalsMonitor,
    VitalsReport,
};
pub use reading::Reading;
