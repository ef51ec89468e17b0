//! Message-queue client that is configured but never connected.
//!
//! Nothing in the firmware publishes or subscribes yet. The client only
//! carries its topics and buffer size so they show up in the boot log.

use crate::settings::Settings;

/// Receive buffer reserved for the client, in bytes.
pub const RX_BUFFER_BYTES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InertMqttClient {
    publish_topic: &'static str,
    subscribe_topic: &'static str,
    rx_buffer_bytes: usize,
}

impl InertMqttClient {
    pub fn new(publish_topic: &'static str, subscribe_topic: &'static str) -> Self {
        Self {
            publish_topic,
            subscribe_topic,
            rx_buffer_bytes: RX_BUFFER_BYTES,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.mqtt_publish_topic, settings.mqtt_subscribe_topic)
    }

    pub fn publish_topic(&self) -> &'static str {
        self.publish_topic
    }

    pub fn subscribe_topic(&self) -> &'static str {
        self.subscribe_topic
    }

    pub fn rx_buffer_bytes(&self) -> usize {
        self.rx_buffer_bytes
    }
}
