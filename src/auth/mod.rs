//! Authorization strategies.
//!
//! An [`Authorization`] produces the value of the `Authorization` header a
//! [`RestClient`](crate::RestClient) installs on its transport through
//! [`set_auth_method`](crate::RestClient::set_auth_method).
//!
//! # Overview
//!
//! - [`BasicAuth`]: `Basic base64(username:password)`
//! - [`BearerAuth`]: `Bearer <token>`
//!
//! Other schemes can be added by implementing the trait.
//!
//! # Example
//!
//! ```rust
//! use snorlax::{Authorization, BasicAuth, BearerAuth};
//!
//! let basic = BasicAuth::new("user", "password");
//! assert_eq!(basic.header_value(), "Basic dXNlcjpwYXNzd29yZA==");
//!
//! let bearer = BearerAuth::new("token");
//! assert_eq!(bearer.header_value(), "Bearer token");
//! ```

mod basic;
mod bearer;

pub use basic::BasicAuth;
pub use bearer::BearerAuth;

/// A credential scheme for the `Authorization` header.
pub trait Authorization: Send + Sync {
    /// The credential string placed after the scheme.
    fn credentials(&self) -> String;

    /// The scheme name, e.g. `Basic` or `Bearer`.
    fn auth_type(&self) -> &str;

    /// The full header value: `<auth_type> <credentials>`.
    fn header_value(&self) -> String {
        format!("{} {}", self.auth_type(), self.credentials())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ApiKey(&'static str);

    impl Authorization for ApiKey {
        fn credentials(&self) -> String {
            self.0.to_string()
        }

        fn auth_type(&self) -> &str {
            "ApiKey"
        }
    }

    #[test]
    fn test_custom_scheme_uses_default_header_value() {
        assert_eq!(ApiKey("abc").header_value(), "ApiKey abc");
    }

    #[test]
    fn test_authorization_is_object_safe() {
        let schemes: Vec<Box<dyn Authorization>> = vec![
            Box::new(BasicAuth::new("user", "password")),
            Box::new(BearerAuth::new("token")),
        ];
        let types: Vec<&str> = schemes.iter().map(|s| s.auth_type()).collect();
        assert_eq!(types, vec!["Basic", "Bearer"]);
    }
}
