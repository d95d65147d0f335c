use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Event kinds a webhook can subscribe to.
pub enum WebHookEventType {
    /// A new SMS was received by the device.
    #[serde(rename = "sms:received")]
    SmsReceived,
    /// Periodic liveness ping from the device.
    #[serde(rename = "system:ping")]
    SystemPing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `POST /webhooks`.
///
/// Without an `id` a new webhook is created; with one, the existing webhook is
/// replaced.
pub struct RegisterWebHookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub event: WebHookEventType,
    pub url: String,
}

impl RegisterWebHookRequest {
    /// Request a new webhook for `event` delivered to `url`.
    pub fn new(event: WebHookEventType, url: impl Into<String>) -> Self {
        Self {
            id: None,
            event,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Webhook as stored by the gateway.
pub struct WebHook {
    pub id: String,
    pub event: WebHookEventType,
    pub url: String,
}

impl From<WebHook> for RegisterWebHookRequest {
    fn from(value: WebHook) -> Self {
        Self {
            id: Some(value.id),
            event: value.event,
            url: value.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsReceivedPayload {
    pub message: String,
    /// Sender number.
    pub phone_number: String,
    /// ISO-8601 timestamp, kept as sent by the device.
    pub received_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Payload of `system:ping`; always the empty object.
pub struct SystemPingPayload {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
/// Event-specific part of a [`WebHookEvent`], keyed by the `event` field.
pub enum WebHookPayload {
    #[serde(rename = "sms:received")]
    SmsReceived(SmsReceivedPayload),
    #[serde(rename = "system:ping")]
    SystemPing(SystemPingPayload),
}

impl WebHookPayload {
    /// Event kind matching this payload arm.
    pub fn event_type(&self) -> WebHookEventType {
        match self {
            Self::SmsReceived(_) => WebHookEventType::SmsReceived,
            Self::SystemPing(_) => WebHookEventType::SystemPing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request body the gateway POSTs to a registered webhook URL.
///
/// On the wire the envelope fields sit next to `event` and `payload`:
///
/// ```json
/// { "id": "..", "webhookId": "..", "deviceId": "..", "event": "system:ping", "payload": {} }
/// ```
pub struct WebHookEvent {
    pub id: String,
    pub webhook_id: String,
    pub device_id: String,
    #[serde(flatten)]
    pub payload: WebHookPayload,
}

impl WebHookEvent {
    /// Event kind carried by the `event` field.
    pub fn event_type(&self) -> WebHookEventType {
        self.payload.event_type()
    }
}
