//! Wire-format entity shapes for the player API.
//!
//! # Design
//! These types mirror the remote service's JSON contract but are defined
//! independently of the mock server crate; the integration tests catch any
//! drift between the two. Unknown response fields are ignored, and absent
//! optional request fields are omitted from the serialized JSON so partial
//! updates only touch the fields the test supplies.

use serde::{Deserialize, Serialize};

/// A full player entity as returned by create, get-by-id, and update.
///
/// `password` is present on create and get responses and absent on update
/// responses, hence the `Option`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub login: String,
    pub role: String,
    pub age: i64,
    pub gender: String,
    pub screen_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request payload for creating a player. Sent as query parameters on the
/// create endpoint; `password` is the only optional field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
    pub age: i64,
    pub gender: String,
    pub screen_name: String,
}

/// Partial-update payload: only the fields present in the JSON are applied,
/// omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
}

/// Body of the delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlayer {
    pub player_id: i64,
}

/// Body of the get-by-id endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPlayer {
    pub player_id: i64,
}

/// Reduced projection used by the list endpoint: no login, no password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: i64,
    pub age: i64,
    pub gender: String,
    pub role: String,
    pub screen_name: String,
}

/// Response of the get-all endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerList {
    pub players: Vec<PlayerSummary>,
}
