// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur when constructing a logger.
///
/// Logging calls themselves never return errors; only construction can
/// fail, and only when no bus producer can be created or the supplied
/// configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid logging configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to create bus producer: {0}")]
    ProducerCreation(#[from] rdkafka::error::KafkaError),
}
