//! Alert Event Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vital sign under observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vital {
    /// Body temperature (°F)
    Temperature,
    /// Pulse rate (beats per minute)
    PulseRate,
    /// Blood-oxygen saturation (%)
    Spo2,
}

impl Vital {
    /// All vitals in evaluation order
    pub const ALL: [Vital; 3] = [Vital::Temperature, Vital::PulseRate, Vital::Spo2];

    /// Machine-readable name, used as the log field and argument name
    pub fn name(&self) -> &'static str {
        match self {
            Vital::Temperature => "temperature",
            Vital::PulseRate => "pulse_rate",
            Vital::Spo2 => "spo2",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Vital::Temperature => "Temperature",
            Vital::PulseRate => "Pulse rate",
            Vital::Spo2 => "SpO2",
        }
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Notification fired when a reading falls outside its safe range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalAlert {
    /// Vital that failed
    pub vital: Vital,
    /// Offending value
    pub value: f64,
    /// Inclusive lower bound of the safe range
    pub low: f64,
    /// Inclusive upper bound, `None` when the range is open above
    pub high: Option<f64>,
}

impl VitalAlert {
    /// Create a new alert
    pub fn new(vital: Vital, value: f64, low: f64, high: Option<f64>) -> Self {
        Self {
            vital,
            value,
            low,
            high,
        }
    }

    /// Expected range in display form
    pub fn expected_range(&self) -> String {
        match self.high {
            Some(high) => format!("[{}, {}]", self.low, high),
            None => format!(">= {}", self.low),
        }
    }
}

impl fmt::Display for VitalAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reading {} is outside the safe range {}",
            self.vital,
            self.value,
            self.expected_range()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_message_closed_range() {
        let alert = VitalAlert::new(Vital::Temperature, 94.0, 95.0, Some(102.0));
        assert_eq!(
            alert.to_string(),
            "Temperature reading 94 is outside the safe range [95, 102]"
        );
    }

    #[test]
    fn test_alert_message_open_range() {
        let alert = VitalAlert::new(Vital::Spo2, 89.5, 90.0, None);
        assert_eq!(alert.expected_range(), ">= 90");
        assert!(alert.to_string().starts_with("SpO2 reading 89.5"));
    }

    #[test]
    fn test_alert_serializes_vital_name() {
        let alert = VitalAlert::new(Vital::PulseRate, 120.0, 60.0, Some(100.0));
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["vital"], "pulse_rate");
        assert_eq!(json["high"], 100.0);
    }
}
