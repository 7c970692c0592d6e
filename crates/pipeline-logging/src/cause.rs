// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Causal error data attached to a leveled logging call.

use std::error::Error;
use std::fmt;

/// The causal error carried by a logging call.
///
/// A cause is data to be rendered, never a logging failure: it holds a
/// one-line summary (its `Display`) and an ordered list of descriptive
/// frames, newest context first. When built from a [`std::error::Error`],
/// the frames are the `source()` chain below the top error; an error with
/// no source has zero frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    summary: String,
    frames: Vec<String>,
}

impl Cause {
    /// Cause with a summary and no frames.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            frames: Vec::new(),
        }
    }

    /// Cause with caller-supplied frame lines.
    pub fn with_frames(summary: impl Into<String>, frames: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            frames,
        }
    }

    /// Build a cause from an error, flattening its source chain into frames.
    pub fn from_error(err: &dyn Error) -> Self {
        let mut frames = Vec::new();
        let mut source = err.source();
        while let Some(inner) = source {
            frames.push(inner.to_string());
            source = inner.source();
        }
        Self {
            summary: err.to_string(),
            frames,
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Render the frames as one block, one line per frame, each terminated
    /// by a newline. Zero frames render as the empty string. Never fails.
    pub fn flattened(&self) -> String {
        let mut block = String::new();
        for frame in &self.frames {
            block.push_str(frame);
            block.push('\n');
        }
        block
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}
