// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! One-shot resolution of the local machine's network name.

use std::ffi::OsString;
use std::io;

use tracing::warn;

/// Placeholder substituted when the local host name cannot be resolved.
pub const UNKNOWN_HOST: &str = "unknown-host";

/// Resolve the local host name, falling back to [`UNKNOWN_HOST`].
///
/// Called once at logger construction. Resolution failure is never fatal
/// and is not retried; it only degrades the host label on emitted events.
pub fn resolve_host_name() -> String {
    host_name_from(hostname::get())
}

fn host_name_from(result: io::Result<OsString>) -> String {
    match result {
        Ok(name) => {
            let name = name.to_string_lossy();
            if name.trim().is_empty() {
                UNKNOWN_HOST.to_string()
            } else {
                name.into_owned()
            }
        }
        Err(err) => {
            warn!("Failed to resolve local host name, using placeholder: {err}");
            UNKNOWN_HOST.to_string()
        }
    }
}
