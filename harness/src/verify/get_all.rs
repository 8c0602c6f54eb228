//! Verification service for the player list.
//!
//! The list endpoint is actor-agnostic: the wire path carries no editor
//! segment, so the service answers identically regardless of who asks.

use crate::client::PlayerApiClient;
use crate::error::HarnessError;
use crate::http::HttpResponse;
use crate::model::{Player, PlayerList, PlayerSummary};
use crate::schema;
use crate::verify::{expect_response_time, expect_schema, expect_status, Soft};

const SUCCESS_STATUS: u16 = 200;

/// Baseline player seeded by the service; always present in the list.
const SUPERVISOR_ID: i64 = 1;

#[derive(Debug)]
pub struct GetAllVerifier<'a> {
    client: &'a PlayerApiClient,
    expected_status: u16,
    response: HttpResponse,
    players: Option<Vec<PlayerSummary>>,
}

impl<'a> GetAllVerifier<'a> {
    pub fn new(client: &'a PlayerApiClient) -> Result<Self, HarnessError> {
        Self::issue(client, SUCCESS_STATUS)
    }

    pub fn expecting(
        client: &'a PlayerApiClient,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        Self::issue(client, expected_status)
    }

    fn issue(client: &'a PlayerApiClient, expected_status: u16) -> Result<Self, HarnessError> {
        let response = client.get_all()?;
        let players = if response.status == SUCCESS_STATUS && response.has_body() {
            Some(response.decode::<PlayerList>("player list response")?.players)
        } else {
            None
        };
        Ok(Self {
            client,
            expected_status,
            response,
            players,
        })
    }

    #[track_caller]
    pub fn verify_status_code(&self) -> &Self {
        expect_status(&self.response, self.expected_status);
        self
    }

    #[track_caller]
    pub fn verify_status_code_is(&self, code: u16) -> &Self {
        expect_status(&self.response, code);
        self
    }

    #[track_caller]
    pub fn verify_response_time(&self) -> &Self {
        expect_response_time(&self.response, self.client.config().request_timeout());
        self
    }

    #[track_caller]
    pub fn verify_json_schema(&self) -> &Self {
        expect_schema(&self.response, schema::PLAYER_LIST, "player list");
        self
    }

    #[track_caller]
    pub fn verify_json_schema_against(&self, schema_src: &str) -> &Self {
        expect_schema(&self.response, schema_src, "supplied");
        self
    }

    /// The service seeds at least a supervisor and an admin; anything less
    /// means the environment is broken.
    #[track_caller]
    pub fn verify_player_list_amount(&self) -> &Self {
        let players = self.decoded_players();
        if players.len() < 2 {
            panic!(
                "player list should contain at least the seeded supervisor and admin, got {} entries",
                players.len()
            );
        }
        self
    }

    /// Baseline availability: the supervisor id and at least one other
    /// player must be present.
    #[track_caller]
    pub fn verify_mandatory_players(&self) -> &Self {
        let players = self.decoded_players();
        let mut soft = Soft::new("mandatory players verification");
        soft.check(
            players.iter().any(|item| item.id == SUPERVISOR_ID),
            "no supervisor in the player list",
        );
        soft.check(
            players.iter().any(|item| item.id != SUPERVISOR_ID),
            "no player besides the supervisor in the list",
        );
        soft.finish();
        self
    }

    /// Asserts the list contains the given freshly created player.
    #[track_caller]
    pub fn verify_contains(&self, created: &Player) -> &Self {
        let players = self.decoded_players();
        if !players.iter().any(|item| item.id == created.id) {
            panic!("no player with id {} in the list", created.id);
        }
        self
    }

    /// Asserts the list does not contain the given id (post-deletion check).
    #[track_caller]
    pub fn verify_absent(&self, player_id: i64) -> &Self {
        let players = self.decoded_players();
        if players.iter().any(|item| item.id == player_id) {
            panic!("player {player_id} was not removed - still present in the list");
        }
        self
    }

    /// Ids in the captured list; unordered contract, returned as captured.
    pub fn player_ids(&self) -> Vec<i64> {
        self.decoded_players().iter().map(|item| item.id).collect()
    }

    pub fn players(&self) -> Option<&[PlayerSummary]> {
        self.players.as_deref()
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    #[track_caller]
    fn decoded_players(&self) -> &[PlayerSummary] {
        match &self.players {
            Some(players) => players,
            None => panic!(
                "player list was not decoded (status {})",
                self.response.status
            ),
        }
    }
}
