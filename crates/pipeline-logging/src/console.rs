// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Console sink shared by the logger variants, plus the console-only
//! logger used for local diagnostics and test harnesses.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::cause::Cause;
use crate::logger::Logger;
use crate::severity::Severity;

/// The pair of local console streams events are written to.
///
/// DEBUG and INFO lines go to the `out` stream, WARN and above to `err`.
/// Defaults to the process stdout/stderr; tests and embedders can supply
/// their own writers. Writes are best-effort and write failures are
/// ignored.
pub struct ConsoleStreams {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleStreams {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Streams backed by the process stdout/stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub(crate) fn write_line(&self, severity: Severity, line: &str) {
        let stream = if severity.uses_stderr() {
            &self.err
        } else {
            &self.out
        };
        if let Ok(mut guard) = stream.lock() {
            let _ = writeln!(guard, "{line}");
        }
    }

    pub(crate) fn write_error_block(&self, block: &str) {
        if let Ok(mut guard) = self.err.lock() {
            let _ = write!(guard, "{block}");
        }
    }
}

impl Default for ConsoleStreams {
    fn default() -> Self {
        Self::stdio()
    }
}

/// Logger variant that only writes to the local console streams.
///
/// Used where the full fan-out is unwanted, e.g. standalone tools and test
/// harnesses driving pipeline components locally.
pub struct ConsoleLogger {
    threshold: Severity,
    streams: ConsoleStreams,
}

impl ConsoleLogger {
    pub fn new(threshold: Severity) -> Self {
        Self::with_streams(threshold, ConsoleStreams::stdio())
    }

    pub fn with_streams(threshold: Severity, streams: ConsoleStreams) -> Self {
        Self { threshold, streams }
    }
}

impl Logger for ConsoleLogger {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn log(&self, severity: Severity, message: &dyn fmt::Display, cause: Option<&Cause>) {
        if severity < self.threshold {
            return;
        }
        let line = match cause {
            Some(cause) => format!("[{severity}]\t{message}: {cause}"),
            None => format!("[{severity}]\t{message}"),
        };
        self.streams.write_line(severity, &line);
        // With no bus to carry the flattened trace, echo it locally.
        if let Some(cause) = cause {
            let trace = cause.flattened();
            if !trace.is_empty() {
                self.streams.write_error_block(&trace);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Arc;

    /// In-memory console stream capture for sink assertions.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Console streams capturing into the returned out/err buffers.
    pub(crate) fn captured_streams() -> (ConsoleStreams, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let streams = ConsoleStreams::new(Box::new(out.clone()), Box::new(err.clone()));
        (streams, out, err)
    }
}
