//! HTTP Basic authorization.

use std::fmt;

use base64::prelude::*;

use crate::auth::Authorization;

/// Basic authorization: the credentials are `base64("username:password")`
/// using the standard padded alphabet.
///
/// The password is redacted from `Debug` output.
///
/// # Example
///
/// ```rust
/// use snorlax::{Authorization, BasicAuth};
///
/// let auth = BasicAuth::new("ash", "pikachu");
/// assert_eq!(auth.credentials(), "YXNoOnBpa2FjaHU=");
/// assert_eq!(auth.auth_type(), "Basic");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates Basic credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Authorization for BasicAuth {
    fn credentials(&self) -> String {
        BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password))
    }

    fn auth_type(&self) -> &str {
        "Basic"
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_are_base64_of_user_colon_password() {
        let auth = BasicAuth::new("user", "password");
        assert_eq!(auth.credentials(), "dXNlcjpwYXNzd29yZA==");
        assert_eq!(auth.header_value(), "Basic dXNlcjpwYXNzd29yZA==");
    }

    #[test]
    fn test_empty_password_keeps_separator() {
        let auth = BasicAuth::new("user", "");
        assert_eq!(BASE64_STANDARD.decode(auth.credentials()).unwrap(), b"user:");
    }

    #[test]
    fn test_non_ascii_credentials_are_utf8_encoded() {
        let auth = BasicAuth::new("sacha", "pokémon");
        let decoded = BASE64_STANDARD.decode(auth.credentials()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "sacha:pokémon");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", BasicAuth::new("user", "hunter2"));
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
