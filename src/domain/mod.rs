//! Domain layer: wire-compatible value types (no I/O).
//!
//! All types are plain data; the gateway is the only validator.

mod message;
mod webhook;

pub use message::{Message, MessageState, ProcessState, RecipientState};
pub use webhook::{
    RegisterWebHookRequest, SmsReceivedPayload, SystemPingPayload, WebHook, WebHookEvent,
    WebHookEventType, WebHookPayload,
};
