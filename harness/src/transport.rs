//! Synchronous HTTP executor built on a reusable `ureq` agent.
//!
//! # Design
//! The agent is configured once from `HarnessConfig` (timeouts) and
//! disables ureq's status-code-as-error behavior so 4xx/5xx
//! responses come back as data — negative-path tests assert on them.
//! `execute` measures the full round-trip so verifiers can check the
//! response-time contract.

use std::time::Instant;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Reusable HTTP transport. One per `PlayerApiClient`.
#[derive(Debug)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new(config: &HarnessConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.request_timeout()))
            .timeout_connect(Some(config.connect_timeout()))
            .build()
            .new_agent();
        Self { agent }
    }

    /// Execute a request and capture the response.
    ///
    /// Every header on the request is transmitted as-is; the content type
    /// comes from the builder that attached it, not from the transport.
    /// Only transport-level faults (connection refused, timeout) are errors;
    /// any HTTP status is returned as data.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HarnessError> {
        let started = Instant::now();

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&request.path), &request.headers)
                .query_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .call(),
            (HttpMethod::Delete, None) => {
                with_headers(self.agent.delete(&request.path), &request.headers).call()
            }
            (HttpMethod::Delete, Some(body)) => {
                with_headers(self.agent.delete(&request.path), &request.headers)
                    .force_send_body()
                    .send(body.as_bytes())
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&request.path), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&request.path), &request.headers).send_empty()
            }
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&request.path), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => {
                with_headers(self.agent.patch(&request.path), &request.headers).send_empty()
            }
        };

        let mut response = result?;
        let elapsed = started.elapsed();

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers,
            body,
            elapsed,
        })
    }
}

fn with_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
