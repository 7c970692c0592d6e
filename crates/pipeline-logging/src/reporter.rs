// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Bus reporting adapter.
//!
//! Events accepted by the synthesized logger are published to the topic
//! `<identity>_report`, keyed by identity, so a central monitor can
//! aggregate events from many concurrently running pipeline clients. Two
//! record shapes share that topic: the formatted event line, and, after a
//! call carrying a cause, one additional record holding the flattened
//! frame block. Records are intentionally untagged; the shapes are
//! distinguishable only heuristically by consumers.

use std::time::Duration;

use rdkafka::client::ClientContext;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{BaseRecord, DeliveryResult, Producer, ProducerContext, ThreadedProducer};
use rdkafka::Message;
use tracing::warn;

use crate::config::KafkaConfig;
use crate::error::LoggingError;

const REPORT_TOPIC_SUFFIX: &str = "_report";

// Undeliverable records are abandoned by the transport after this long.
const MESSAGE_TIMEOUT_MS: &str = "5000";

/// Destination topic for a logging client's events.
pub fn report_topic(identity: &str) -> String {
    format!("{identity}{REPORT_TOPIC_SUFFIX}")
}

/// Fire-and-forget publisher of report records.
///
/// `publish` must never block the caller beyond the transport's own
/// enqueue policy and must never surface a delivery error: delivery
/// outcomes are observable only through the transport's own callbacks and
/// diagnostics, never through the logging call's return path.
pub trait Reporter: Send + Sync {
    fn publish(&self, topic: &str, key: &str, value: &str);

    /// Publish `value` on the identity's report topic, keyed by identity.
    fn report(&self, identity: &str, value: &str) {
        self.publish(&report_topic(identity), identity, value);
    }

    /// Drain outstanding records, waiting at most `timeout`.
    fn flush(&self, _timeout: Duration) {}
}

/// Logs failed deliveries; the records themselves are already gone.
struct DeliveryContext;

impl ClientContext for DeliveryContext {}

impl ProducerContext for DeliveryContext {
    type DeliveryOpaque = ();

    fn delivery(&self, delivery_result: &DeliveryResult<'_>, _opaque: ()) {
        if let Err((err, message)) = delivery_result {
            warn!(
                "Report delivery to topic {} failed: {err}",
                message.topic()
            );
        }
    }
}

/// Kafka-backed [`Reporter`] owning exactly one producer client.
///
/// The producer is created eagerly from [`KafkaConfig`] and polled by a
/// background thread for the reporter's lifetime. Dropping the reporter
/// stops that thread; call [`Reporter::flush`] first when outstanding
/// records should be drained deterministically.
pub struct KafkaReporter {
    producer: ThreadedProducer<DeliveryContext>,
}

impl KafkaReporter {
    pub fn new(config: &KafkaConfig) -> Result<Self, LoggingError> {
        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", MESSAGE_TIMEOUT_MS);
        if let Some(client_id) = &config.client_id {
            client_config.set("client.id", client_id);
        }
        let producer: ThreadedProducer<DeliveryContext> =
            client_config.create_with_context(DeliveryContext)?;
        Ok(Self { producer })
    }
}

impl Reporter for KafkaReporter {
    fn publish(&self, topic: &str, key: &str, value: &str) {
        let record = BaseRecord::to(topic).key(key).payload(value);
        if let Err((err, _record)) = self.producer.send(record) {
            // Transport saturated or down: drop the record, keep the caller going.
            warn!("Dropping report for topic {topic}: {err}");
        }
    }

    fn flush(&self, timeout: Duration) {
        if let Err(err) = self.producer.flush(timeout) {
            warn!("Flushing bus producer failed: {err}");
        }
        let in_flight = self.producer.in_flight_count();
        if in_flight > 0 {
            warn!("{in_flight} report(s) still undelivered after flush");
        }
    }
}
