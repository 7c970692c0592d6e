// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The leveled logging contract shared by every logger variant.

use std::fmt;

use crate::cause::Cause;
use crate::severity::Severity;

/// Leveled logging capability.
///
/// Implementations hold one immutable severity threshold and must drop any
/// event below it before doing any formatting work. A logging call never
/// panics and never reports a delivery failure back to the caller; a sink
/// that misbehaves must not prevent the remaining sinks from being
/// attempted.
///
/// The per-level convenience methods are provided; implementations only
/// supply [`Logger::threshold`] and [`Logger::log`].
pub trait Logger: Send + Sync {
    /// Minimum severity this logger delivers to any sink.
    fn threshold(&self) -> Severity;

    /// Deliver `message` (with an optional cause) at `severity`.
    fn log(&self, severity: Severity, message: &dyn fmt::Display, cause: Option<&Cause>);

    fn debug(&self, message: &dyn fmt::Display) {
        self.log(Severity::Debug, message, None);
    }

    fn debug_with(&self, message: &dyn fmt::Display, cause: &Cause) {
        self.log(Severity::Debug, message, Some(cause));
    }

    fn info(&self, message: &dyn fmt::Display) {
        self.log(Severity::Info, message, None);
    }

    fn info_with(&self, message: &dyn fmt::Display, cause: &Cause) {
        self.log(Severity::Info, message, Some(cause));
    }

    fn warn(&self, message: &dyn fmt::Display) {
        self.log(Severity::Warn, message, None);
    }

    fn warn_with(&self, message: &dyn fmt::Display, cause: &Cause) {
        self.log(Severity::Warn, message, Some(cause));
    }

    fn error(&self, message: &dyn fmt::Display) {
        self.log(Severity::Error, message, None);
    }

    fn error_with(&self, message: &dyn fmt::Display, cause: &Cause) {
        self.log(Severity::Error, message, Some(cause));
    }

    fn fatal(&self, message: &dyn fmt::Display) {
        self.log(Severity::Fatal, message, None);
    }

    fn fatal_with(&self, message: &dyn fmt::Display, cause: &Cause) {
        self.log(Severity::Fatal, message, Some(cause));
    }
}
