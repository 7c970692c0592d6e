// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Fan-out logger delivering each accepted event to the managed local
//! logger, the console streams, and the report bus.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::cause::Cause;
use crate::config::LoggingConfig;
use crate::console::ConsoleStreams;
use crate::error::LoggingError;
use crate::host::resolve_host_name;
use crate::logger::Logger;
use crate::reporter::{KafkaReporter, Reporter};
use crate::severity::Severity;

/// Logger variant fanning each accepted event out to three sinks, in
/// fixed order: managed local logger, console stream, report bus.
///
/// One instance is created per logical identity at client startup and held
/// for that identity's lifetime. The host name is resolved once and the
/// bus producer is built once, both at construction; producer construction
/// failure is the only fatal outcome. Calls execute synchronously on the
/// caller's thread; only the bus enqueue can briefly stall, per the
/// transport's own buffering policy. Failure of one sink never prevents
/// the remaining sinks from being attempted.
pub struct SynthesizedLogger {
    identity: String,
    threshold: Severity,
    host_name: String,
    console: ConsoleStreams,
    reporter: Arc<dyn Reporter>,
}

impl SynthesizedLogger {
    /// Create a logger for `identity`, publishing to the topic
    /// `<identity>_report`.
    pub fn new(
        identity: impl Into<String>,
        config: &LoggingConfig,
    ) -> Result<Self, LoggingError> {
        let reporter = KafkaReporter::new(&config.kafka)?;
        Ok(Self::with_sinks(
            identity,
            config.threshold(),
            resolve_host_name(),
            ConsoleStreams::stdio(),
            Arc::new(reporter),
        ))
    }

    /// Create a logger with explicit sinks. Used by embedders that bring
    /// their own transport and by test harnesses stubbing the sinks out.
    pub fn with_sinks(
        identity: impl Into<String>,
        threshold: Severity,
        host_name: impl Into<String>,
        console: ConsoleStreams,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            identity: identity.into(),
            threshold,
            host_name: host_name.into(),
            console,
            reporter,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Drain outstanding bus records, waiting at most `timeout`.
    ///
    /// Call from the owning client's shutdown path; whatever is still
    /// undelivered afterwards is logged by the transport and dropped.
    pub fn shutdown(&self, timeout: Duration) {
        self.reporter.flush(timeout);
    }
}

impl Logger for SynthesizedLogger {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn log(&self, severity: Severity, message: &dyn fmt::Display, cause: Option<&Cause>) {
        if severity < self.threshold {
            return;
        }
        let line = format_event_line(severity, &self.host_name, &self.identity, message, cause);
        emit_managed(severity, &line);
        self.console.write_line(severity, &line);
        self.reporter.report(&self.identity, &line);
        // The flattened trace travels only on the bus; the other sinks
        // already carry the cause inline.
        if let Some(cause) = cause {
            self.reporter.report(&self.identity, &cause.flattened());
        }
    }
}

fn format_event_line(
    severity: Severity,
    host_name: &str,
    identity: &str,
    message: &dyn fmt::Display,
    cause: Option<&Cause>,
) -> String {
    match cause {
        Some(cause) => format!("[{severity}]\t{host_name}\t{identity}:\t{message}: {cause}"),
        None => format!("[{severity}]\t{host_name}\t{identity}:\t{message}"),
    }
}

/// Hand the formatted line to the managed local logger at matching
/// severity; its own filtering, formatting and rotation apply
/// independently. The managed backend has no FATAL level, so FATAL events
/// land at its highest one.
fn emit_managed(severity: Severity, line: &str) {
    match severity {
        Severity::Debug => debug!("{line}"),
        Severity::Info => info!("{line}"),
        Severity::Warn => warn!("{line}"),
        Severity::Error | Severity::Fatal => error!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_support::captured_streams;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    struct NullReporter;

    impl Reporter for NullReporter {
        fn publish(&self, _topic: &str, _key: &str, _value: &str) {}
    }

    struct CountingReporter(Mutex<usize>);

    impl Reporter for CountingReporter {
        fn publish(&self, _topic: &str, _key: &str, _value: &str) {
            let mut count = self.0.lock().unwrap();
            *count += 1;
        }
    }

    fn captured_logger(threshold: Severity, reporter: Arc<dyn Reporter>) -> SynthesizedLogger {
        let (streams, _out, _err) = captured_streams();
        SynthesizedLogger::with_sinks("alice", threshold, "node7", streams, reporter)
    }

    #[test]
    fn test_format_event_line() {
        let line = format_event_line(Severity::Info, "node7", "alice", &"starting", None);
        assert_eq!(line, "[INFO]\tnode7\talice:\tstarting");
    }

    #[test]
    fn test_format_event_line_appends_cause() {
        let cause = Cause::new("broker unreachable");
        let line = format_event_line(
            Severity::Error,
            "node7",
            "alice",
            &"publish failed",
            Some(&cause),
        );
        assert_eq!(
            line,
            "[ERROR]\tnode7\talice:\tpublish failed: broker unreachable"
        );
    }

    #[traced_test]
    #[test]
    fn test_managed_sink_receives_formatted_line() {
        let logger = captured_logger(Severity::Info, Arc::new(NullReporter));
        logger.info(&"starting");
        assert!(logs_contain("[INFO]\tnode7\talice:\tstarting"));
    }

    #[traced_test]
    #[test]
    fn test_managed_sink_untouched_below_threshold() {
        let logger = captured_logger(Severity::Info, Arc::new(NullReporter));
        logger.debug(&"hidden");
        assert!(!logs_contain("hidden"));
    }

    #[traced_test]
    #[test]
    fn test_fatal_lands_at_managed_error_level() {
        let logger = captured_logger(Severity::Info, Arc::new(NullReporter));
        logger.fatal(&"going down");
        assert!(logs_contain("[FATAL]\tnode7\talice:\tgoing down"));
    }

    #[test]
    fn test_accessors() {
        let logger = captured_logger(Severity::Info, Arc::new(NullReporter));
        assert_eq!(logger.identity(), "alice");
        assert_eq!(logger.host_name(), "node7");
        assert_eq!(logger.threshold(), Severity::Info);
    }

    #[test]
    fn test_shutdown_flushes_reporter() {
        struct FlushProbe(Mutex<bool>);

        impl Reporter for FlushProbe {
            fn publish(&self, _topic: &str, _key: &str, _value: &str) {}

            fn flush(&self, _timeout: Duration) {
                let mut flushed = self.0.lock().unwrap();
                *flushed = true;
            }
        }

        let probe = Arc::new(FlushProbe(Mutex::new(false)));
        let logger = captured_logger(Severity::Info, probe.clone());
        logger.shutdown(Duration::from_millis(10));
        assert!(*probe.0.lock().unwrap());
    }

    #[test]
    fn test_cause_doubles_bus_records_only() {
        let counter = Arc::new(CountingReporter(Mutex::new(0)));
        let logger = captured_logger(Severity::Info, counter.clone());
        logger.error(&"plain");
        assert_eq!(*counter.0.lock().unwrap(), 1);
        logger.error_with(&"with cause", &Cause::new("boom"));
        assert_eq!(*counter.0.lock().unwrap(), 3);
    }
}
