//! Vital checks and the combined check
//!
//! The free functions take the alert sink as an argument; [`VitalsMonitor`]
//! owns one.

use crate::checker::RangeCheck;
use crate::error::VitalError;
use crate::reading::Reading;
use alerting::{AlertSink, LogSink, Vital};

/// Outcome of checking all three vitals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitalsReport {
    /// Whether every vital is in range
    pub valid: bool,
    /// Vitals that failed, in evaluation order
    pub failures: Vec<Vital>,
    /// Number of vitals evaluated
    pub vitals_checked: usize,
}

impl VitalsReport {
    fn from_outcomes(outcomes: &[(Vital, bool)]) -> Self {
        let failures: Vec<Vital> = outcomes
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(vital, _)| *vital)
            .collect();
        Self {
            valid: failures.is_empty(),
            failures,
            vitals_checked: outcomes.len(),
        }
    }

    /// Whether `vital` passed
    pub fn is_ok(&self, vital: Vital) -> bool {
        !self.failures.contains(&vital)
    }
}

/// Check body temperature against [95.0, 102.0]
pub fn is_temperature_ok<S>(value: impl Into<Reading>, sink: &S) -> Result<bool, VitalError>
where
    S: AlertSink + ?Sized,
{
    RangeCheck::TEMPERATURE.check(&value.into(), sink)
}

/// Check pulse rate against [60, 100]
pub fn is_pulse_rate_ok<S>(value: impl Into<Reading>, sink: &S) -> Result<bool, VitalError>
where
    S: AlertSink + ?Sized,
{
    RangeCheck::PULSE_RATE.check(&value.into(), sink)
}

/// Check SpO2 against a lower bound of 90
pub fn is_spo2_ok<S>(value: impl Into<Reading>, sink: &S) -> Result<bool, VitalError>
where
    S: AlertSink + ?Sized,
{
    RangeCheck::SPO2.check(&value.into(), sink)
}

/// Check all three vitals and report which failed
///
/// Every argument is type-checked before any range check runs, so a type
/// error fires no alert. Range checks do not short-circuit: each failing vital
/// fires its own alert.
pub fn assess<S>(
    temperature: impl Into<Reading>,
    pulse_rate: impl Into<Reading>,
    spo2: impl Into<Reading>,
    sink: &S,
) -> Result<VitalsReport, VitalError>
where
    S: AlertSink + ?Sized,
{
    let temperature = temperature.into().magnitude(Vital::Temperature.name())?;
    let pulse_rate = pulse_rate.into().magnitude(Vital::PulseRate.name())?;
    let spo2 = spo2.into().magnitude(Vital::Spo2.name())?;

    let outcomes = [
        (Vital::Temperature, RangeCheck::TEMPERATURE.evaluate(temperature, sink)),
        (Vital::PulseRate, RangeCheck::PULSE_RATE.evaluate(pulse_rate, sink)),
        (Vital::Spo2, RangeCheck::SPO2.evaluate(spo2, sink)),
    ];
    Ok(VitalsReport::from_outcomes(&outcomes))
}

/// `true` iff temperature, pulse rate, and SpO2 are all in range
pub fn vitals_ok<S>(
    temperature: impl Into<Reading>,
    pulse_rate: impl Into<Reading>,
    spo2: impl Into<Reading>,
    sink: &S,
) -> Result<bool, VitalError>
where
    S: AlertSink + ?Sized,
{
    Ok(assess(temperature, pulse_rate, spo2, sink)?.valid)
}

/// Vital checks bound to an alert sink
#[derive(Debug, Default)]
pub struct VitalsMonitor<S = LogSink> {
    sink: S,
}

impl<S: AlertSink> VitalsMonitor<S> {
    /// Create a new monitor alerting through `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Get the alert sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the monitor, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// See [`is_temperature_ok`]
    pub fn is_temperature_ok(&self, value: impl Into<Reading>) -> Result<bool, VitalError> {
        is_temperature_ok(value, &self.sink)
    }

    /// See [`is_pulse_rate_ok`]
    pub fn is_pulse_rate_ok(&self, value: impl Into<Reading>) -> Result<bool, VitalError> {
        is_pulse_rate_ok(value, &self.sink)
    }

    /// See [`is_spo2_ok`]
    pub fn is_spo2_ok(&self, value: impl Into<Reading>) -> Result<bool, VitalError> {
        is_spo2_ok(value, &self.sink)
    }

    /// See [`assess`]
    pub fn assess(
        &self,
        temperature: impl Into<Reading>,
        pulse_rate: impl Into<Reading>,
        spo2: impl Into<Reading>,
    ) -> Result<VitalsReport, VitalError> {
        assess(temperature, pulse_rate, spo2, &self.sink)
    }

    /// See [`vitals_ok`]
    pub fn vitals_ok(
        &self,
        temperature: impl Into<Reading>,
        pulse_rate: impl Into<Reading>,
        spo2: impl Into<Reading>,
    ) -> Result<bool, VitalError> {
        vitals_ok(temperature, pulse_rate, spo2, &self.sink)
    }
}
