//! Alert Sinks
//!
//! A sink is the single notification call site invoked by a failing vital
//! check. Sinks never report errors back to the checker.

use crate::types::{Vital, VitalAlert};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, warn};

/// Notification channel for vital alerts
pub trait AlertSink: Send + Sync {
    /// Deliver an alert
    fn alert(&self, alert: &VitalAlert);

    /// Channel name for identification
    fn name(&self) -> &'static str;
}

impl<S: AlertSink + ?Sized> AlertSink for &S {
    fn alert(&self, alert: &VitalAlert) {
        (**self).alert(alert)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: AlertSink + ?Sized> AlertSink for Box<S> {
    fn alert(&self, alert: &VitalAlert) {
        (**self).alert(alert)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: AlertSink + ?Sized> AlertSink for Arc<S> {
    fn alert(&self, alert: &VitalAlert) {
        (**self).alert(alert)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Emits alerts as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AlertSink for LogSink {
    fn alert(&self, alert: &VitalAlert) {
        warn!(
            vital = alert.vital.name(),
            value = alert.value,
            low = alert.low,
            high = ?alert.high,
            "Vital alert: {}",
            alert
        );
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Writes alerts to stderr, optionally with ANSI colors
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    /// Create a new console sink
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Write one formatted alert line
    fn write_alert<W: Write>(&self, out: &mut W, alert: &VitalAlert) -> io::Result<()> {
        writeln!(out, "{}", self.format_alert(alert))
    }

    fn format_alert(&self, alert: &VitalAlert) -> String {
        if self.use_colors {
            format!("\x1b[31m\x1b[1mALERT\x1b[0m {}", alert)
        } else {
            format!("ALERT {}", alert)
        }
    }
}

impl AlertSink for ConsoleSink {
    fn alert(&self, alert: &VitalAlert) {
        let mut handle = io::stderr().lock();
        if let Err(e) = self.write_alert(&mut handle, alert) {
            error!("Failed to write alert to console: {}", e);
        }
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// Keeps every alert in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    alerts: Mutex<Vec<VitalAlert>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored; recorded alerts stay readable.
    fn lock(&self) -> MutexGuard<'_, Vec<VitalAlert>> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of recorded alerts in firing order
    pub fn alerts(&self) -> Vec<VitalAlert> {
        self.lock().clone()
    }

    /// Total alerts recorded
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Alerts recorded for one vital
    pub fn count_for(&self, vital: Vital) -> usize {
        self.lock().iter().filter(|a| a.vital == vital).count()
    }

    /// Forget all recorded alerts
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl AlertSink for RecordingSink {
    fn alert(&self, alert: &VitalAlert) {
        self.lock().push(alert.clone());
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Dispatches each alert to several sinks
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl FanoutSink {
    /// Create a fanout with no sinks
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink
    pub fn with(mut self, sink: impl AlertSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Number of sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sinks are attached
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Names of the attached sinks, in dispatch order
    pub fn names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }
}

impl AlertSink for FanoutSink {
    fn alert(&self, alert: &VitalAlert) {
        for sink in &self.sinks {
            sink.alert(alert);
        }
    }

    fn name(&self) -> &'static str {
        "fanout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low_temperature() -> VitalAlert {
        VitalAlert::new(Vital::Temperature, 94.0, 95.0, Some(102.0))
    }

    #[test]
    fn test_recording_sink_counts_per_vital() {
        let sink = RecordingSink::new();
        sink.alert(&low_temperature());
        sink.alert(&VitalAlert::new(Vital::Spo2, 80.0, 90.0, None));
        sink.alert(&low_temperature());

        assert_eq!(sink.count(), 3);
        assert_eq!(sink.count_for(Vital::Temperature), 2);
        assert_eq!(sink.count_for(Vital::Spo2), 1);
        assert_eq!(sink.count_for(Vital::PulseRate), 0);

        sink.clear();
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_fanout_reaches_every_sink() {
        let first = Arc::new(RecordingSink::new());
        let second = Arc::new(RecordingSink::new());
        let fanout = FanoutSink::new()
            .with(Arc::clone(&first))
            .with(Arc::clone(&second));

        fanout.alert(&low_temperature());

        assert_eq!(fanout.len(), 2);
        assert_eq!(fanout.names(), vec!["recording", "recording"]);
        assert_eq!(first.alerts(), vec![low_temperature()]);
        assert_eq!(second.count(), 1);
    }

    #[test]
    fn test_reference_and_box_forward() {
        let recorder = RecordingSink::new();
        {
            let by_ref: &dyn AlertSink = &recorder;
            by_ref.alert(&low_temperature());
            let boxed: Box<dyn AlertSink + '_> = Box::new(&recorder);
            boxed.alert(&low_temperature());
        }
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_console_writes_line() {
        let mut out = Vec::new();
        ConsoleSink::new(false)
            .write_alert(&mut out, &low_temperature())
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ALERT Temperature reading 94 is outside the safe range [95, 102]\n"
        );
    }

    #[test]
    fn test_log_sink_emits_warning() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || CapturedWriter(Arc::clone(&writer)))
            .finish();

        tracing::subscriber::with_default(subscriber, || LogSink.alert(&low_temperature()));

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Vital alert: Temperature reading 94"));
        assert!(output.contains("vital=\"temperature\""));
    }

    struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_names_forward() {
        let boxed: Box<dyn AlertSink> = Box::new(ConsoleSink::default());
        assert_eq!(boxed.name(), "console");
        assert_eq!(Arc::new(RecordingSink::new()).name(), "recording");
        assert_eq!(FanoutSink::new().with(LogSink).name(), "fanout");
    }

    #[test]
    fn test_console_format() {
        let plain = ConsoleSink::new(false).format_alert(&low_temperature());
        assert_eq!(
            plain,
            "ALERT Temperature reading 94 is outside the safe range [95, 102]"
        );

        let colored = ConsoleSink::new(true).format_alert(&low_temperature());
        assert!(colored.starts_with("\x1b[31m"));
        assert!(colored.ends_with("[95, 102]"));
    }
}
