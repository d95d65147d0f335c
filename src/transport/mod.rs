//! Transport layer: the HTTP capability the client delegates to.
//!
//! The client never touches the network itself. It hands a URL, a header map
//! and (for `post`) a serializable body to an [`HttpClient`], and returns
//! whatever that implementation resolves to.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use serde::de::DeserializeOwned;

mod http;

pub use http::{ReqwestTransport, TransportError};

/// Boxed `Send` future returned by [`HttpClient`] methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Request headers, keyed by header name.
pub type Headers = BTreeMap<String, String>;

/// Minimal HTTP capability consumed by [`Client`](crate::Client).
///
/// Implementations own JSON encoding of request bodies and decoding of
/// responses into `T`, as well as anything network related (TLS, timeouts,
/// retries). Failures are reported through [`HttpClient::Error`] and reach
/// the caller of the client unchanged.
pub trait HttpClient: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    fn get<'a, T>(&'a self, url: &'a str, headers: Headers) -> BoxFuture<'a, Result<T, Self::Error>>
    where
        T: DeserializeOwned + Send + 'a;

    fn post<'a, B, T>(
        &'a self,
        url: &'a str,
        body: &'a B,
        headers: Headers,
    ) -> BoxFuture<'a, Result<T, Self::Error>>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send + 'a;

    fn delete<'a, T>(
        &'a self,
        url: &'a str,
        headers: Headers,
    ) -> BoxFuture<'a, Result<T, Self::Error>>
    where
        T: DeserializeOwned + Send + 'a;
}
