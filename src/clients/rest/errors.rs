//! Registry-level error types.
//!
//! # Error Handling
//!
//! - [`ClientError::ResourceNotImplemented`]: the name was never registered
//! - [`ClientError::Config`]: the transport could not be built
//! - [`ClientError::Resource`]: an action call failed
//!
//! # Example
//!
//! ```rust,ignore
//! use snorlax::ClientError;
//!
//! match client.resource("digimons") {
//!     Ok(resource) => println!("Found {}", resource.name()),
//!     Err(ClientError::ResourceNotImplemented { name }) => {
//!         println!("No resource registered as {name}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;
use crate::rest::ResourceError;

/// Error type for [`RestClient`](crate::RestClient) operations.
///
/// # Example
///
/// ```rust
/// use snorlax::ClientError;
///
/// let error = ClientError::ResourceNotImplemented { name: "digimons".to_string() };
/// assert_eq!(error.to_string(), r#"Resource "digimons" is not implemented"#);
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// No resource is registered under the requested name.
    #[error("Resource \"{name}\" is not implemented")]
    ResourceNotImplemented {
        /// The name that was requested.
        name: String,
    },

    /// The client configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A resource operation failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
