//! Range-checked vitals

use crate::error::VitalError;
use crate::reading::Reading;
use alerting::{AlertSink, Vital, VitalAlert};
use std::fmt;
use tracing::debug;

/// Inclusive safe range for a vital
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeRange {
    pub low: f64,
    /// `None` means no upper bound
    pub high: Option<f64>,
}

impl SafeRange {
    /// Body temperature (°F)
    pub const TEMPERATURE: SafeRange = SafeRange::closed(95.0, 102.0);
    /// Pulse rate (bpm)
    pub const PULSE_RATE: SafeRange = SafeRange::closed(60.0, 100.0);
    /// SpO2 (%)
    pub const SPO2: SafeRange = SafeRange::at_least(90.0);

    /// `[low, high]`
    pub const fn closed(low: f64, high: f64) -> Self {
        Self {
            low,
            high: Some(high),
        }
    }

    /// `[low, +inf)`
    pub const fn at_least(low: f64) -> Self {
        Self { low, high: None }
    }

    /// Whether `value` lies in the range, bounds included. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && self.high.map_or(true, |high| value <= high)
    }
}

impl fmt::Display for SafeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "[{}, {}]", self.low, high),
            None => write!(f, "[{}, inf)", self.low),
        }
    }
}

/// A vital paired with its safe range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCheck {
    pub vital: Vital,
    pub range: SafeRange,
}

impl RangeCheck {
    pub const TEMPERATURE: RangeCheck = RangeCheck::new(Vital::Temperature, SafeRange::TEMPERATURE);
    pub const PULSE_RATE: RangeCheck = RangeCheck::new(Vital::PulseRate, SafeRange::PULSE_RATE);
    pub const SPO2: RangeCheck = RangeCheck::new(Vital::Spo2, SafeRange::SPO2);

    /// Create a new check
    pub const fn new(vital: Vital, range: SafeRange) -> Self {
        Self { vital, range }
    }

    /// The fixed check for `vital`
    pub const fn for_vital(vital: Vital) -> Self {
        match vital {
            Vital::Temperature => Self::TEMPERATURE,
            Vital::PulseRate => Self::PULSE_RATE,
            Vital::Spo2 => Self::SPO2,
        }
    }

    /// Validate the reading's type, then evaluate it
    ///
    /// A type error fires no alert.
    pub fn check<S>(&self, reading: &Reading, sink: &S) -> Result<bool, VitalError>
    where
        S: AlertSink + ?Sized,
    {
        let value = reading.magnitude(self.vital.name())?;
        Ok(self.evaluate(value, sink))
    }

    /// Compare a numeric value against the range, alerting once on failure
    pub fn evaluate<S>(&self, value: f64, sink: &S) -> bool
    where
        S: AlertSink + ?Sized,
    {
        let ok = self.range.contains(value);
        debug!(vital = self.vital.name(), value, ok, "Vital evaluated");

        if !ok {
            sink.alert(&VitalAlert::new(
                self.vital,
                value,
                self.range.low,
                self.range.high,
            ));
        }
        ok
    }
}
