// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Synthesized leveled logging for distributed pipeline clients.
//!
//! Each pipeline client constructs one [`SynthesizedLogger`] per logical
//! identity at startup and logs through it for that identity's lifetime.
//! Every accepted event is delivered to three sinks in fixed order: the
//! process-local managed logger (`tracing`), the local console streams,
//! and a per-identity report topic on the message bus, where a central
//! monitor aggregates events from all running clients. Delivery to the bus
//! is fire-and-forget; observability must never block or fail the caller's
//! primary work.
//!
//! [`ConsoleLogger`] is the console-only variant for local diagnostics and
//! test harnesses. Both variants implement the [`Logger`] contract.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod cause;
pub mod config;
pub mod console;
pub mod error;
pub mod host;
pub mod logger;
pub mod reporter;
pub mod severity;
pub mod synthesized;

pub use cause::Cause;
pub use config::{KafkaConfig, LoggingConfig};
pub use console::{ConsoleLogger, ConsoleStreams};
pub use error::LoggingError;
pub use host::{resolve_host_name, UNKNOWN_HOST};
pub use logger::Logger;
pub use reporter::{report_topic, KafkaReporter, Reporter};
pub use severity::Severity;
pub use synthesized::SynthesizedLogger;

#[cfg(test)]
mod tests {
    use super::*;

    /// Ensures callers can construct the console variant through the crate
    /// root and use it as the contract type.
    #[test]
    fn console_variant_is_reexported() {
        let logger: Box<dyn Logger> = Box::new(ConsoleLogger::new(Severity::Fatal));
        assert_eq!(logger.threshold(), Severity::Fatal);
    }
}
