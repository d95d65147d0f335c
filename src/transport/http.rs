use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{BoxFuture, Headers, HttpClient};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ReqwestTransport`].
///
/// The client passes these through untouched, so they are also the error type
/// of every [`Client`](crate::Client) operation backed by reqwest.
pub enum TransportError {
    /// HTTP client failure (DNS, TLS, timeouts, invalid headers, body encoding).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status code returned by the gateway.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded into the expected type.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
/// [`HttpClient`] backed by a `reqwest::Client`.
///
/// Request bodies are sent as JSON. Successful responses are decoded as JSON;
/// an empty body is decoded as `null`, which lets `()` stand for "no content".
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn request(
        &self,
        method: reqwest::Method,
        url: &str,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        headers
            .iter()
            .fold(self.client.request(method, url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            })
    }

    async fn execute<T>(&self, request: reqwest::RequestBuilder) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("gateway responded with HTTP {status}");

        if !(200..=299).contains(&status) {
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body)
            };
            return Err(TransportError::HttpStatus { status, body });
        }

        decode_json_body(&body)
    }
}

impl HttpClient for ReqwestTransport {
    type Error = TransportError;

    fn get<'a, T>(&'a self, url: &'a str, headers: Headers) -> BoxFuture<'a, Result<T, Self::Error>>
    where
        T: DeserializeOwned + Send + 'a,
    {
        let request = self.request(reqwest::Method::GET, url, &headers);
        Box::pin(async move { self.execute(request).await })
    }

    fn post<'a, B, T>(
        &'a self,
        url: &'a str,
        body: &'a B,
        headers: Headers,
    ) -> BoxFuture<'a, Result<T, Self::Error>>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send + 'a,
    {
        // Headers first: `json` only sets Content-Type when it is not already present.
        let request = self.request(reqwest::Method::POST, url, &headers).json(body);
        Box::pin(async move { self.execute(request).await })
    }

    fn delete<'a, T>(
        &'a self,
        url: &'a str,
        headers: Headers,
    ) -> BoxFuture<'a, Result<T, Self::Error>>
    where
        T: DeserializeOwned + Send + 'a,
    {
        let request = self.request(reqwest::Method::DELETE, url, &headers);
        Box::pin(async move { self.execute(request).await })
    }
}

fn decode_json_body<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(TransportError::Parse)
}
