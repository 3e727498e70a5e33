//! Bearer token authorization.

use std::fmt;

use crate::auth::Authorization;

/// Bearer authorization: the token is sent verbatim.
///
/// # Example
///
/// ```rust
/// use snorlax::{Authorization, BearerAuth};
///
/// let auth = BearerAuth::new("abc.def");
/// assert_eq!(auth.header_value(), "Bearer abc.def");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    /// Creates Bearer credentials from a token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authorization for BearerAuth {
    fn credentials(&self) -> String {
        self.token.clone()
    }

    fn auth_type(&self) -> &str {
        "Bearer"
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"*****")
            .finish()
    }
}
