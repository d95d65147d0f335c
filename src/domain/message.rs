use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outgoing SMS as accepted by `POST /message`.
///
/// Optional fields left as `None` are omitted from the request body, so the
/// gateway applies its own defaults. No client-side validation is performed;
/// in particular an empty `phone_numbers` list is sent as-is.
pub struct Message {
    /// Message id; generated by the gateway when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text body.
    pub message: String,
    /// Time-to-live in seconds. `None` means the message never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    /// Destination numbers, in the order given.
    pub phone_numbers: Vec<String>,
    /// Originating SIM slot (1-based). `None` selects the device default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sim_number: Option<u8>,
    /// Whether to request delivery reports. The gateway treats `None` as `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_delivery_report: Option<bool>,
}

impl Message {
    /// Create a message with only the required fields set.
    pub fn new(message: impl Into<String>, phone_numbers: Vec<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
            ttl: None,
            phone_numbers,
            sim_number: None,
            with_delivery_report: None,
        }
    }

    /// Use a caller-chosen message id instead of a generated one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Expire the message after `seconds`.
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.ttl = Some(seconds);
        self
    }

    /// Send from the given SIM slot.
    pub fn with_sim_number(mut self, sim_number: u8) -> Self {
        self.sim_number = Some(sim_number);
        self
    }

    /// Explicitly enable or disable delivery reports.
    pub fn with_delivery_report(mut self, enabled: bool) -> Self {
        self.with_delivery_report = Some(enabled);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Processing state of a message or of a single recipient.
///
/// The success path is `Pending -> Processed -> Sent -> Delivered`; `Failed`
/// may follow any non-terminal state.
pub enum ProcessState {
    Pending,
    Processed,
    Sent,
    Delivered,
    Failed,
}

impl ProcessState {
    /// Whether no further transitions are expected (`Delivered` or `Failed`).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Delivery state of one destination number of a message.
pub struct RecipientState {
    pub phone_number: String,
    pub state: ProcessState,
    /// Failure reason; only set when `state` is [`ProcessState::Failed`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Gateway view of a message, returned by `send` and `get_state`.
///
/// Partial failures are reported per recipient; the recipient order is not
/// guaranteed to match the request.
pub struct MessageState {
    pub id: String,
    pub state: ProcessState,
    pub recipients: Vec<RecipientState>,
}
