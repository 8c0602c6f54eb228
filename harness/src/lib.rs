//! Black-box test harness for the player management HTTP API.
//!
//! # Overview
//! Exercises the five player endpoints (create, delete, get-by-id, get-all,
//! update) with positive, negative, boundary, and injection inputs, and
//! asserts the observable contract: status codes, response timing, JSON
//! schema conformance, and field-level correctness.
//!
//! # Design
//! - `PlayerApiClient` splits every operation into a pure `build_*` request
//!   constructor and a synchronous issuing method; non-2xx statuses are data,
//!   not errors.
//! - Each `verify::*Verifier` fires its HTTP call at construction, decodes
//!   the body on the operation's success status, and exposes chainable
//!   assertions that panic with collected, descriptive messages.
//! - `CleanupLedger` tracks created player ids per scenario and guarantees a
//!   best-effort deletion sweep at teardown.
//! - Configuration is loaded once (`HarnessConfig::load`) and passed by
//!   reference; there is no global state.

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod http;
pub mod ledger;
pub mod model;
pub mod schema;
pub mod transport;
pub mod validation;
pub mod verify;

pub use client::PlayerApiClient;
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use ledger::CleanupLedger;
pub use model::{CreatePlayer, DeletePlayer, GetPlayer, Player, PlayerList, PlayerSummary, UpdatePlayer};
pub use verify::{
    CreateVerifier, DeleteVerifier, GetAllVerifier, GetByIdVerifier, UpdateVerifier,
};
