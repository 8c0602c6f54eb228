//! Error types for the harness.
//!
//! # Design
//! Only unrecoverable faults surface as `HarnessError`: a broken transport,
//! a response body that does not match the expected shape, or a bad request
//! payload or configuration. Expected-failure responses (400/403/404 and
//! friends) are data, asserted through the verifiers, and never appear here.
//! Assertion failures panic with a descriptive message instead of going
//! through this type — they are the test outcome, not a harness fault.

use thiserror::Error;

/// Unrecoverable harness-level failures.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Connection, timeout, or other network-level fault. Not retried.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body did not match the expected entity shape.
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
