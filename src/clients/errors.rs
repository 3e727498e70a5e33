//! Transport-level error types.
//!
//! Everything a [`Transport`](crate::clients::Transport) can fail with is
//! expressed as a [`TransportError`]. Resources never reinterpret these; they
//! reach the caller wrapped in [`ResourceError::Transport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use snorlax::clients::TransportError;
//!
//! match pokemons.invoke("get", ActionArgs::new().arg(143)).await {
//!     Ok(body) => println!("{body}"),
//!     Err(ResourceError::Transport(TransportError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```
//!
//! [`ResourceError::Transport`]: crate::rest::ResourceError::Transport

use thiserror::Error;

/// Error returned when the remote API answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use snorlax::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"error":"Not found"}"#.to_string(),
///     request_id: None,
/// };
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub request_id: Option<String>,
}

/// Error returned when a string is not a supported HTTP method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid HTTP method '{method}'.")]
pub struct InvalidHttpMethodError {
    /// The method string that was provided.
    pub method: String,
}

/// Unified error type for everything a transport can fail with.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request URI could not be resolved against the base URL.
    #[error("Cannot resolve request URI '{uri}' without a base URL.")]
    InvalidUri {
        /// The URI that could not be resolved.
        uri: String,
    },

    /// An error raised by a user-provided transport.
    #[error("Transport error: {message}")]
    Custom {
        /// A description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Creates a [`TransportError::Custom`] from any message.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_body() {
        let error = HttpResponseError {
            code: 422,
            body: r#"{"errors":{"name":["can't be blank"]}}"#.to_string(),
            request_id: Some("abc-123".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("can't be blank"));
    }

    #[test]
    fn test_invalid_method_error_message() {
        let error = InvalidHttpMethodError {
            method: "FETCH".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid HTTP method 'FETCH'.");
    }

    #[test]
    fn test_status_is_only_present_for_response_errors() {
        let response = TransportError::from(HttpResponseError {
            code: 500,
            body: String::new(),
            request_id: None,
        });
        assert_eq!(response.status(), Some(500));

        let custom = TransportError::custom("socket closed");
        assert_eq!(custom.status(), None);
        assert_eq!(custom.to_string(), "Transport error: socket closed");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &TransportError::custom("x");
        let _: &dyn std::error::Error = &InvalidHttpMethodError {
            method: "x".to_string(),
        };
    }
}
