//! Client layer: builds URLs and headers and delegates to the transport.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde::de::IgnoredAny;

use crate::domain::{Message, MessageState, RegisterWebHookRequest, WebHook};
use crate::transport::{Headers, HttpClient, ReqwestTransport, TransportError};

/// Default API root of the hosted gateway.
pub const BASE_URL: &str = "https://sms.capcom.me/api/3rdparty/v1";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "android-sms-gateway/1.0 (client; js)";

const AUTHORIZATION_HEADER: &str = "Authorization";
const USER_AGENT_HEADER: &str = "User-Agent";
const CONTENT_TYPE_HEADER: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
/// Builder for a [`Client`].
///
/// Use this when you need a custom base URL or a request timeout for the
/// default reqwest transport.
pub struct ClientBuilder {
    login: String,
    password: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a builder with the default base URL and no timeout.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            base_url: BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Override the API root, e.g. to talk to a gateway in local mode.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a timeout applied to each whole request of the reqwest transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a [`Client`] backed by [`ReqwestTransport`].
    pub fn build(self) -> Result<Client<ReqwestTransport>, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = ReqwestTransport::from_client(builder.build()?);
        Ok(self.build_with(http))
    }

    /// Build a [`Client`] on top of a caller-provided transport.
    ///
    /// The timeout setting only applies to [`ClientBuilder::build`] and is
    /// ignored here.
    pub fn build_with<H: HttpClient>(self, http: H) -> Client<H> {
        Client::with_base_url(self.login, self.password, http, self.base_url)
    }
}

#[derive(Clone)]
/// Android SMS Gateway client.
///
/// Each operation builds the request URL by appending a path to the base URL,
/// attaches the `Authorization` and `User-Agent` headers computed at
/// construction (plus `Content-Type` when a body is sent) and awaits the
/// transport once. Results and errors of the transport are returned as-is;
/// the client performs no validation, retries or caching.
///
/// Path parameters such as message and webhook ids are inserted verbatim and
/// must already be valid URL path segments.
pub struct Client<H> {
    base_url: String,
    default_headers: Headers,
    http: H,
}

impl Client<ReqwestTransport> {
    /// Start building a reqwest-backed client with custom settings.
    pub fn builder(login: impl Into<String>, password: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(login, password)
    }
}

impl<H: HttpClient> Client<H> {
    /// Create a client for the default [`BASE_URL`].
    pub fn new(login: impl Into<String>, password: impl Into<String>, http: H) -> Self {
        Self::with_base_url(login, password, http, BASE_URL)
    }

    /// Create a client for a custom API root.
    pub fn with_base_url(
        login: impl Into<String>,
        password: impl Into<String>,
        http: H,
        base_url: impl Into<String>,
    ) -> Self {
        let (login, password): (String, String) = (login.into(), password.into());
        let mut default_headers = Headers::new();
        default_headers.insert(
            AUTHORIZATION_HEADER.to_owned(),
            basic_auth(&login, &password),
        );
        default_headers.insert(USER_AGENT_HEADER.to_owned(), USER_AGENT.to_owned());

        Self {
            base_url: base_url.into(),
            default_headers,
            http,
        }
    }

    /// API root all request paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Enqueue a message for sending (`POST /message`).
    ///
    /// A successful result may still carry failed recipients; inspect
    /// [`MessageState::recipients`].
    pub async fn send(&self, message: &Message) -> Result<MessageState, H::Error> {
        let url = format!("{}/message", self.base_url);
        debug!("POST {url}");
        self.http.post(&url, message, self.json_headers()).await
    }

    /// Fetch the current state of a message (`GET /message/{id}`).
    pub async fn get_state(&self, message_id: &str) -> Result<MessageState, H::Error> {
        let url = format!("{}/message/{message_id}", self.base_url);
        debug!("GET {url}");
        self.http.get(&url, self.default_headers.clone()).await
    }

    /// List registered webhooks (`GET /webhooks`).
    pub async fn get_webhooks(&self) -> Result<Vec<WebHook>, H::Error> {
        let url = format!("{}/webhooks", self.base_url);
        debug!("GET {url}");
        self.http.get(&url, self.default_headers.clone()).await
    }

    /// Create or replace a webhook (`POST /webhooks`).
    pub async fn register_webhook(
        &self,
        request: &RegisterWebHookRequest,
    ) -> Result<WebHook, H::Error> {
        let url = format!("{}/webhooks", self.base_url);
        debug!("POST {url}");
        self.http.post(&url, request, self.json_headers()).await
    }

    /// Remove a webhook (`DELETE /webhooks/{id}`).
    ///
    /// Any 2xx response counts as success; the response body is ignored.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), H::Error> {
        let url = format!("{}/webhooks/{webhook_id}", self.base_url);
        debug!("DELETE {url}");
        self.http
            .delete::<IgnoredAny>(&url, self.default_headers.clone())
            .await
            .map(|_| ())
    }

    fn json_headers(&self) -> Headers {
        let mut headers = self.default_headers.clone();
        headers.insert(CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned());
        headers
    }
}

fn basic_auth(login: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{login}:{password}")))
}
