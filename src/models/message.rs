use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Inbound product-submission payload. Every field is required, but absence
/// is detected by the mapper rather than the deserializer, so defaults keep
/// incomplete bodies deserializable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default)]
    pub channel: String,

    #[serde(default)]
    pub datetime_expire: String,

    #[serde(default)]
    pub datetime_send_message: String,

    #[serde(default)]
    pub template_name: String,

    #[serde(default)]
    pub template_params: Option<JsonValue>,

    #[serde(default)]
    pub users: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub name: String,
    pub params: JsonValue,
}

/// Canonical outbound message. Field order is the wire order; no other
/// top-level keys are ever emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub id: String,
    pub template: MessageTemplate,
    pub channel: String,
    pub users: Vec<String>,
    pub send_time: String,
    pub expires: String,
}

impl MessageEnvelope {
    /// Destination queue for this envelope, derived from the channel verbatim.
    pub fn queue_name(&self) -> String {
        format!("{}_channel", self.channel)
    }
}
