//! Typed Rust client for the Android SMS Gateway 3rd-party HTTP API.
//!
//! The crate is split into three layers: a domain layer of plain wire types,
//! a transport layer (the [`HttpClient`] capability and its reqwest adapter),
//! and a thin client layer that shapes requests and hands them to the transport.
//!
//! ```rust,no_run
//! use android_sms_gateway::{Client, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), android_sms_gateway::TransportError> {
//!     let client = Client::builder("login", "password").build()?;
//!     let message = Message::new("hello", vec!["+79251234567".to_owned()]);
//!     let state = client.send(&message).await?;
//!     let _state = client.get_state(&state.id).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod transport;

pub use client::{BASE_URL, Client, ClientBuilder, USER_AGENT};
pub use domain::{
    Message, MessageState, ProcessState, RecipientState, RegisterWebHookRequest,
    SmsReceivedPayload, SystemPingPayload, WebHook, WebHookEvent, WebHookEventType,
    WebHookPayload,
};
pub use transport::{BoxFuture, Headers, HttpClient, ReqwestTransport, TransportError};
