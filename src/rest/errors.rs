//! Resource-level error types.
//!
//! # Error Handling
//!
//! - [`ResourceError::ActionNotFound`]: the action is not in the resource's table
//! - [`ResourceError::InvalidArguments`]: the path arguments do not satisfy the template
//! - [`ResourceError::Transport`]: the transport failed; passed through untouched
//! - [`ResourceError::Decode`]: the response body is not valid JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use snorlax::rest::{ActionArgs, ResourceError};
//!
//! match pokemons.invoke("evolve", ActionArgs::new().arg(133)).await {
//!     Ok(body) => println!("{body}"),
//!     Err(ResourceError::ActionNotFound { action, resource }) => {
//!         println!("{resource} has no action {action}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::TransportError;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use snorlax::rest::ResourceError;
///
/// let error = ResourceError::ActionNotFound {
///     action: "evolve".to_string(),
///     resource: "pokemons".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     r#"Action "evolve" is not defined on resource "pokemons""#,
/// );
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested action is not defined on the resource.
    #[error("Action \"{action}\" is not defined on resource \"{resource}\"")]
    ActionNotFound {
        /// The action that was requested.
        action: String,
        /// The name of the resource.
        resource: String,
    },

    /// The call-time arguments cannot fill the action's path template.
    #[error("Invalid arguments for action \"{action}\": {reason}")]
    InvalidArguments {
        /// The action being invoked.
        action: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be decoded as JSON.
    #[error("Failed to decode response of action \"{action}\": {source}")]
    Decode {
        /// The action whose response failed to decode.
        action: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
