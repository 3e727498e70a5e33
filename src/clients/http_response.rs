//! HTTP response types.
//!
//! [`HttpResponse`] is the raw response a transport returns: status code,
//! headers, and the undecoded body text. Resources keep the most recent one
//! around for introspection.

use std::collections::HashMap;

use serde_json::Value;

/// A raw HTTP response returned by a transport.
///
/// Header names are stored lower-cased; a header may carry several values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_ascii_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Creates a response with a JSON body and a matching `Content-Type`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snorlax::clients::HttpResponse;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::json(200, &json!({"pokemons": []}));
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    #[must_use]
    pub fn json(code: u16, body: &Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        Self::new(code, headers, body.to_string())
    }

    /// Creates a response without headers or body.
    #[must_use]
    pub fn empty(code: u16) -> Self {
        Self::new(code, HashMap::new(), String::new())
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns `true` if the body is empty or whitespace.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            assert!(HttpResponse::empty(code).is_ok(), "code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        assert!(!HttpResponse::empty(400).is_ok());
        assert!(!HttpResponse::empty(404).is_ok());
        assert!(!HttpResponse::empty(500).is_ok());
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, "");
        assert_eq!(response.header("x-request-id"), Some("abc-123"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc-123"));
        assert_eq!(response.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_json_constructor_serializes_body() {
        let response = HttpResponse::json(201, &json!({"id": 143}));
        assert_eq!(response.code, 201);
        assert_eq!(response.body, r#"{"id":143}"#);
    }

    #[test]
    fn test_empty_body_detection() {
        assert!(HttpResponse::empty(204).is_body_empty());
        assert!(HttpResponse::new(200, HashMap::new(), "  \n").is_body_empty());
        assert!(!HttpResponse::new(200, HashMap::new(), "{}").is_body_empty());
    }
}
