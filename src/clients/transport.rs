//! The transport seam.
//!
//! A [`Transport`] performs the actual HTTP call. The crate ships
//! [`HttpTransport`](crate::clients::HttpTransport) as the default, and any
//! other implementation can be injected through the client configuration,
//! which is how tests swap in recording stubs.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::{HttpMethod, HttpResponse, RequestOptions, TransportError};

/// A transport shared by a client and every resource it instantiates.
pub type SharedTransport = Arc<dyn Transport>;

/// Performs HTTP requests on behalf of resources.
///
/// Implementations own their default headers behind interior mutability so
/// that [`RestClient::set_auth_method`](crate::RestClient::set_auth_method)
/// can update them through a shared reference. Defaults apply to requests
/// issued after the change; per-request headers in [`RequestOptions`] win
/// over defaults with the same name.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use std::sync::Mutex;
///
/// use async_trait::async_trait;
/// use snorlax::clients::{HttpMethod, HttpResponse, RequestOptions, Transport, TransportError};
///
/// #[derive(Debug, Default)]
/// struct Canned {
///     defaults: Mutex<HashMap<String, String>>,
/// }
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn request(
///         &self,
///         _method: HttpMethod,
///         _uri: &str,
///         _options: RequestOptions,
///     ) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::empty(204))
///     }
///
///     fn set_default_header(&self, name: &str, value: &str) {
///         self.defaults.lock().unwrap().insert(name.to_string(), value.to_string());
///     }
///
///     fn default_headers(&self) -> HashMap<String, String> {
///         self.defaults.lock().unwrap().clone()
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for network failures, non-2xx responses,
    /// or any failure specific to the implementation.
    async fn request(
        &self,
        method: HttpMethod,
        uri: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, TransportError>;

    /// Sets a header sent with every later request, replacing any previous
    /// value for the same name.
    fn set_default_header(&self, name: &str, value: &str);

    /// Returns a snapshot of the current default headers.
    fn default_headers(&self) -> HashMap<String, String>;
}

/// Merges default headers with per-request headers, request values winning.
///
/// Header names are compared case-insensitively; the request's spelling is
/// kept when it overrides a default.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn merge_headers(
    defaults: &HashMap<String, String>,
    extra: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut merged = defaults.clone();
    if let Some(extra) = extra {
        for (key, value) in extra {
            merged.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
