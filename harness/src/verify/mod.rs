//! Fluent verification services, one per player operation.
//!
//! # Design
//! Each verifier issues its HTTP call at construction time — by the time the
//! value exists, the response has been captured and, on the operation's
//! success status, decoded. Construction returns `Err` only for transport or
//! decode faults; any HTTP status is captured as data.
//!
//! The chainable `verify_*` methods return `&Self` and panic with a
//! descriptive message on failure. Field-level checks inside a single
//! verifier are collected with [`Soft`] and reported together; failures
//! across different chained calls short-circuit at the first failing call.
//! The shared checks (status, response time, schema) are free helpers taking
//! the captured response — composition instead of a base-class hierarchy.

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

pub use create::CreateVerifier;
pub use delete::DeleteVerifier;
pub use get_all::GetAllVerifier;
pub use get_by_id::GetByIdVerifier;
pub use update::{UpdateVerifier, UpdateVerifierBuilder};

use std::fmt::Debug;
use std::time::Duration;

use crate::http::HttpResponse;
use crate::schema;

/// Soft-assertion collector: gathers every failed check in one verifier
/// call, then reports them together from `finish`.
#[derive(Debug)]
pub struct Soft {
    context: &'static str,
    failures: Vec<String>,
}

impl Soft {
    pub fn new(context: &'static str) -> Self {
        Self {
            context,
            failures: Vec::new(),
        }
    }

    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.failures.push(message.into());
        }
    }

    pub fn check_eq<T: PartialEq + Debug + ?Sized>(&mut self, actual: &T, expected: &T, label: &str) {
        if actual != expected {
            self.failures
                .push(format!("{label}: expected {expected:?}, got {actual:?}"));
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Panics with all collected failures, or returns quietly if none.
    #[track_caller]
    pub fn finish(self) {
        if !self.failures.is_empty() {
            panic!(
                "{} failed:\n  - {}",
                self.context,
                self.failures.join("\n  - ")
            );
        }
    }
}

/// Assert the captured status equals the expectation.
#[track_caller]
pub(crate) fn expect_status(response: &HttpResponse, expected: u16) {
    if response.status != expected {
        panic!(
            "status code mismatch: expected {expected}, got {} (body: {})",
            response.status, response.body
        );
    }
}

/// Assert the round-trip stayed strictly under the configured timeout.
#[track_caller]
pub(crate) fn expect_response_time(response: &HttpResponse, timeout: Duration) {
    if response.elapsed >= timeout {
        panic!(
            "response time {} ms exceeded timeout {} ms",
            response.elapsed.as_millis(),
            timeout.as_millis()
        );
    }
}

/// Assert the raw body validates against a schema document.
#[track_caller]
pub(crate) fn expect_schema(response: &HttpResponse, schema_src: &str, name: &str) {
    if let Err(errors) = schema::validate(&response.body, schema_src) {
        panic!(
            "response body does not match the {name} schema:\n  - {}",
            errors.join("\n  - ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str, elapsed_ms: u64) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
            elapsed: Duration::from_millis(elapsed_ms),
        }
    }

    #[test]
    fn soft_passes_when_all_checks_hold() {
        let mut soft = Soft::new("example");
        soft.check(true, "never shown");
        soft.check_eq(&1, &1, "one");
        assert!(soft.is_clean());
        soft.finish();
    }

    #[test]
    fn soft_reports_every_failure_together() {
        let mut soft = Soft::new("player fields");
        soft.check_eq(&"a", &"b", "login");
        soft.check(false, "age should be positive");
        let err = std::panic::catch_unwind(move || soft.finish()).unwrap_err();
        let msg = err.downcast_ref::<String>().unwrap();
        assert!(msg.contains("login"), "got: {msg}");
        assert!(msg.contains("age should be positive"));
    }

    #[test]
    fn expect_status_accepts_match() {
        expect_status(&response(404, "", 1), 404);
    }

    #[test]
    #[should_panic(expected = "status code mismatch")]
    fn expect_status_panics_on_mismatch() {
        expect_status(&response(500, "boom", 1), 200);
    }

    #[test]
    #[should_panic(expected = "exceeded timeout")]
    fn expect_response_time_panics_when_too_slow() {
        expect_response_time(&response(200, "", 50), Duration::from_millis(10));
    }

    #[test]
    fn expect_response_time_accepts_fast_responses() {
        expect_response_time(&response(200, "", 5), Duration::from_millis(100));
    }
}
