//! HTTP request types.
//!
//! This module provides [`HttpMethod`] and [`RequestOptions`], the pieces a
//! resource hands to its transport for every call.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::errors::InvalidHttpMethodError;

/// HTTP methods an action can be declared with.
///
/// Methods serialize as upper-case strings (`"GET"`) and parse
/// case-insensitively, so action tables can be written as plain JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
    /// HTTP HEAD method.
    Head,
    /// HTTP OPTIONS method.
    Options,
}

impl HttpMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Returns `true` for write-style verbs whose options payload is sent
    /// as the request body rather than as query parameters.
    #[must_use]
    pub const fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(InvalidHttpMethodError {
                method: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = InvalidHttpMethodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Per-request options passed alongside the method and URI.
///
/// # Example
///
/// ```rust
/// use snorlax::clients::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .query_param("limit", "50")
///     .header("X-Trace", "on")
///     .body(json!({"pokemon_id": 143}));
///
/// assert!(!options.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// JSON body to send.
    pub body: Option<Value>,
    /// Headers that override the transport defaults for this request.
    pub headers: Option<HashMap<String, String>>,
}

/// Keys recognized when a mapping is converted with
/// [`RequestOptions::from_mapping`].
const OPTION_KEYS: &[&str] = &["query", "body", "json", "headers"];

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns `true` when no query, body, or header is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_none() && self.body.is_none() && self.headers.is_none()
    }

    /// Builds options from a loosely typed JSON mapping.
    ///
    /// When every key is one of `query`, `body`, `json`, or `headers`, and
    /// `query`/`headers` hold objects, each key is routed to its field (`json`
    /// is an alias for `body`). Otherwise the whole mapping is the payload: it
    /// becomes the body for write-style verbs and the query string for
    /// everything else.
    #[must_use]
    pub fn from_mapping(method: HttpMethod, mapping: Map<String, Value>) -> Self {
        let structured = !mapping.is_empty()
            && mapping.iter().all(|(key, value)| match key.as_str() {
                "query" | "headers" => value.is_object(),
                other => OPTION_KEYS.contains(&other),
            });

        if !structured {
            if mapping.is_empty() {
                return Self::default();
            }
            return if method.carries_body() {
                Self::new().body(Value::Object(mapping))
            } else {
                Self::new().query(string_map(&mapping))
            };
        }

        let mut options = Self::default();
        for (key, value) in mapping {
            match (key.as_str(), value) {
                ("query", Value::Object(map)) => options.query = Some(string_map(&map)),
                ("headers", Value::Object(map)) => options.headers = Some(string_map(&map)),
                // "body" | "json"
                (_, value) => options.body = Some(value),
            }
        }
        options
    }
}

/// Converts a scalar JSON value to the string form used in URLs.
///
/// Strings are used verbatim, `null` becomes empty, and everything else is
/// rendered as JSON text.
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_map(map: &Map<String, Value>) -> HashMap<String, String> {
    map.iter()
        .map(|(k, v)| (k.clone(), value_to_string(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_is_upper_case() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn test_http_method_parses_case_insensitively() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("FETCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_http_method_serde_uses_method_names() {
        let method: HttpMethod = serde_json::from_value(json!("patch")).unwrap();
        assert_eq!(method, HttpMethod::Patch);
        assert_eq!(serde_json::to_value(HttpMethod::Post).unwrap(), json!("POST"));
        assert!(serde_json::from_value::<HttpMethod>(json!("LINK")).is_err());
    }

    #[test]
    fn test_carries_body_only_for_write_verbs() {
        assert!(HttpMethod::Post.carries_body());
        assert!(HttpMethod::Put.carries_body());
        assert!(HttpMethod::Patch.carries_body());
        assert!(!HttpMethod::Get.carries_body());
        assert!(!HttpMethod::Delete.carries_body());
    }

    #[test]
    fn test_builder_methods_populate_fields() {
        let options = RequestOptions::new()
            .query_param("limit", "50")
            .header("X-Custom-Header", "custom-value")
            .body(json!({"a": 1}));

        assert_eq!(
            options.query.as_ref().unwrap().get("limit"),
            Some(&"50".to_string())
        );
        assert_eq!(
            options.headers.as_ref().unwrap().get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
        assert_eq!(options.body, Some(json!({"a": 1})));
    }

    #[test]
    fn test_empty_options() {
        assert!(RequestOptions::new().is_empty());
        assert!(!RequestOptions::new().query_param("a", "b").is_empty());
    }

    #[test]
    fn test_from_mapping_routes_recognized_keys() {
        let Value::Object(map) = json!({
            "body": {"pokemon_id": 143},
            "headers": {"X-Trainer": "red"}
        }) else {
            unreachable!()
        };

        let options = RequestOptions::from_mapping(HttpMethod::Post, map);
        assert_eq!(options.body, Some(json!({"pokemon_id": 143})));
        assert_eq!(
            options.headers.unwrap().get("X-Trainer"),
            Some(&"red".to_string())
        );
        assert!(options.query.is_none());
    }

    #[test]
    fn test_from_mapping_json_is_alias_for_body() {
        let Value::Object(map) = json!({"json": [1, 2]}) else {
            unreachable!()
        };
        let options = RequestOptions::from_mapping(HttpMethod::Put, map);
        assert_eq!(options.body, Some(json!([1, 2])));
    }

    #[test]
    fn test_from_mapping_bare_payload_is_query_for_reads() {
        let Value::Object(map) = json!({"limit": 20, "type": "normal"}) else {
            unreachable!()
        };
        let options = RequestOptions::from_mapping(HttpMethod::Get, map);
        let query = options.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"20".to_string()));
        assert_eq!(query.get("type"), Some(&"normal".to_string()));
        assert!(options.body.is_none());
    }

    #[test]
    fn test_from_mapping_bare_payload_is_body_for_writes() {
        let Value::Object(map) = json!({"name": "Snorlax"}) else {
            unreachable!()
        };
        let options = RequestOptions::from_mapping(HttpMethod::Patch, map);
        assert_eq!(options.body, Some(json!({"name": "Snorlax"})));
        assert!(options.query.is_none());
    }

    #[test]
    fn test_from_mapping_non_object_query_is_bare_payload() {
        let Value::Object(map) = json!({"query": "limit=5"}) else {
            unreachable!()
        };
        let options = RequestOptions::from_mapping(HttpMethod::Get, map);
        assert_eq!(
            options.query.unwrap().get("query"),
            Some(&"limit=5".to_string())
        );
        assert!(options.headers.is_none());

        let Value::Object(map) = json!({"headers": ["X-Trainer"], "body": {"id": 1}}) else {
            unreachable!()
        };
        let options = RequestOptions::from_mapping(HttpMethod::Post, map);
        assert_eq!(
            options.body,
            Some(json!({"headers": ["X-Trainer"], "body": {"id": 1}}))
        );
        assert!(options.headers.is_none());
    }

    #[test]
    fn test_from_mapping_empty_map_is_empty_options() {
        let options = RequestOptions::from_mapping(HttpMethod::Post, Map::new());
        assert!(options.is_empty());
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("rest")), "rest");
        assert_eq!(value_to_string(&json!(143)), "143");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(null)), "");
    }
}
