//! Default HTTP transport backed by `reqwest`.
//!
//! This module provides [`HttpTransport`], used whenever the client
//! configuration supplies neither a transport instance nor a factory.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::{HttpResponseError, TransportError};
use crate::clients::transport::{merge_headers, Transport};
use crate::clients::{HttpMethod, HttpResponse, RequestOptions};
use crate::config::TransportParams;
use crate::error::ConfigError;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport built on a `reqwest` client.
///
/// The transport handles:
/// - Joining relative resource URIs onto the configured base URL
/// - Default headers including `User-Agent` and `Accept`
/// - Merging per-request headers over the defaults
/// - Mapping non-2xx responses to [`TransportError::Response`]
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`; default headers sit behind a lock so
/// they can be changed while the transport is shared.
///
/// # Example
///
/// ```rust
/// use snorlax::TransportParams;
/// use snorlax::clients::{HttpTransport, Transport};
///
/// let transport = HttpTransport::new(
///     &TransportParams::new().base_url("https://pokeapi.example.com/api"),
/// ).unwrap();
///
/// assert_eq!(
///     transport.resolve_uri("pokemons/143").unwrap(),
///     "https://pokeapi.example.com/api/pokemons/143",
/// );
/// assert_eq!(
///     transport.default_headers().get("Accept"),
///     Some(&"application/json".to_string()),
/// );
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL relative URIs are joined onto.
    base_url: Option<String>,
    /// Default headers to include in all requests.
    default_headers: RwLock<HashMap<String, String>>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a new transport from the given params.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the params fail validation or the
    /// underlying reqwest client cannot be created.
    pub fn new(params: &TransportParams) -> Result<Self, ConfigError> {
        params.validate()?;

        if params.cache {
            tracing::warn!(
                "Response caching was requested but the default transport has no caching layer; supply a custom transport to enable it"
            );
        }

        // Build User-Agent header
        let user_agent_prefix = params
            .user_agent_prefix
            .as_deref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Snorlax REST Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        let default_headers = merge_headers(&default_headers, Some(&params.default_headers));

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(secs) = params.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        tracing::debug!(
            base_url = params.base_url.as_deref().unwrap_or("<none>"),
            "Created default HTTP transport"
        );

        Ok(Self {
            client,
            base_url: params.base_url.clone(),
            default_headers: RwLock::new(default_headers),
        })
    }

    /// Returns the base URL, if configured.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolves a resource URI to an absolute URL.
    ///
    /// Absolute `http`/`https` URIs pass through unchanged; anything else is
    /// joined onto the base URL with exactly one `/` between them.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUri`] for a relative URI when no
    /// base URL is configured.
    pub fn resolve_uri(&self, uri: &str) -> Result<String, TransportError> {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return Ok(uri.to_string());
        }

        let base = self.base_url.as_deref().ok_or_else(|| TransportError::InvalidUri {
            uri: uri.to_string(),
        })?;

        Ok(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            uri.trim_start_matches('/')
        ))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }

    const fn reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: HttpMethod,
        uri: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, TransportError> {
        let url = self.resolve_uri(uri)?;
        let headers = merge_headers(&self.default_headers(), options.headers.as_ref());

        tracing::debug!(%method, %url, "Sending request");

        let mut req_builder = self.client.request(Self::reqwest_method(method), &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &options.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &options.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        if !response.is_ok() {
            return Err(TransportError::Response(HttpResponseError {
                code,
                request_id: response.request_id().map(String::from),
                body: response.body,
            }));
        }

        Ok(response)
    }

    fn set_default_header(&self, name: &str, value: &str) {
        let mut headers = self
            .default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        headers.insert(name.to_string(), value.to_string());
    }

    fn default_headers(&self) -> HashMap<String, String> {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
