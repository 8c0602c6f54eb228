//! HTTP transport types shared by the operation client and the verifiers.
//!
//! # Design
//! Requests and responses are plain data. `PlayerApiClient::build_*` methods
//! produce `HttpRequest` values without touching the network, which keeps
//! request construction deterministic and unit-testable; `Transport` executes
//! them and hands back an `HttpResponse` carrying the captured status,
//! headers, body, and elapsed round-trip time.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::HarnessError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `PlayerApiClient::build_*` methods and executed by `Transport`.
/// Query pairs are kept separate from the path so the transport can encode
/// them; test data deliberately includes characters that need escaping.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A captured HTTP response.
///
/// Non-2xx statuses are valid data here, not errors — negative-path tests
/// assert on them directly.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub elapsed: Duration,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the response carries a decodable body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty() && self.header("content-length") != Some("0")
    }

    /// Decode the body into `T`. Failures carry the operation context so the
    /// error message names which response shape did not match.
    pub fn decode<T: DeserializeOwned>(&self, context: &'static str) -> Result<T, HarnessError> {
        serde_json::from_str(&self.body).map_err(|source| HarnessError::Decode { context, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response(200, "{}");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn empty_body_is_not_decodable() {
        assert!(!response(204, "").has_body());
        assert!(response(200, "{}").has_body());
    }

    #[test]
    fn zero_content_length_counts_as_empty() {
        let mut resp = response(200, "ignored");
        resp.headers.push(("Content-Length".to_string(), "0".to_string()));
        assert!(!resp.has_body());
    }

    #[test]
    fn decode_failure_names_the_context() {
        let err = response(200, "not json")
            .decode::<serde_json::Value>("player response")
            .unwrap_err();
        assert!(err.to_string().contains("player response"));
    }
}
