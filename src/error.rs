//! Error types for client configuration.
//!
//! This module contains the error returned while a [`RestClient`] is being
//! constructed, before any resource has been touched.
//!
//! # Example
//!
//! ```rust
//! use snorlax::{ConfigError, TransportParams};
//!
//! let params = TransportParams::new().base_url("not a url");
//! assert!(matches!(params.validate(), Err(ConfigError::InvalidBaseUrl { .. })));
//! ```
//!
//! [`RestClient`]: crate::RestClient

use thiserror::Error;

/// Errors that can occur while configuring a client or its transport.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL passed in the transport params is not an absolute HTTP URL.
    #[error("Invalid base URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A default header was configured with an empty name.
    #[error("Default header names cannot be empty.")]
    EmptyHeaderName,

    /// The underlying HTTP client could not be built.
    #[error("Failed to build the default HTTP transport: {0}")]
    TransportBuild(#[from] reqwest::Error),

    /// A custom transport factory refused the given params.
    #[error("Transport factory failed: {reason}")]
    FactoryFailed {
        /// The reason reported by the factory.
        reason: String,
    },
}
