// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;

use crate::error::LoggingError;
use crate::severity::Severity;

const ENV_VERBOSE: &str = "PIPELINE_LOG_VERBOSE";
const ENV_KAFKA_BROKERS: &str = "PIPELINE_KAFKA_BROKERS";
const ENV_KAFKA_CLIENT_ID: &str = "PIPELINE_KAFKA_CLIENT_ID";

const DEFAULT_BROKERS: &str = "localhost:9092";

/// Configuration for pipeline-client logging.
///
/// Passed explicitly into the logger constructor; there is no ambient
/// process-wide lookup. Carries exactly the recognized options: the
/// verbosity flag selecting the severity threshold, and the bus connection
/// settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Verbose logging lowers the threshold from INFO to DEBUG.
    pub verbose: bool,
    /// Message-bus producer settings.
    pub kafka: KafkaConfig,
}

/// Connection settings for the bus producer.
#[derive(Debug, Clone)]
pub struct KafkaConfig {
    /// Broker address list, `host:port[,host:port...]`.
    pub brokers: String,
    /// Optional client id reported to the brokers.
    pub client_id: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            kafka: KafkaConfig::default(),
        }
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: DEFAULT_BROKERS.to_string(),
            client_id: None,
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let verbose = lookup(ENV_VERBOSE)
            .map(|val| matches!(val.to_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);
        let brokers = lookup(ENV_KAFKA_BROKERS).unwrap_or_else(|| DEFAULT_BROKERS.to_string());
        if brokers.trim().is_empty() {
            return Err(LoggingError::InvalidConfig(format!(
                "{ENV_KAFKA_BROKERS} must not be empty"
            )));
        }
        let client_id = lookup(ENV_KAFKA_CLIENT_ID).filter(|id| !id.trim().is_empty());
        Ok(Self {
            verbose,
            kafka: KafkaConfig { brokers, client_id },
        })
    }

    /// Severity threshold selected by the verbosity flag.
    pub fn threshold(&self) -> Severity {
        if self.verbose {
            Severity::Debug
        } else {
            Severity::Info
        }
    }
}
