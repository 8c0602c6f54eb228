//! Verification service for get-by-id.

use crate::client::PlayerApiClient;
use crate::error::HarnessError;
use crate::http::HttpResponse;
use crate::model::Player;
use crate::schema;
use crate::verify::{expect_response_time, expect_schema, expect_status, Soft};

const SUCCESS_STATUS: u16 = 200;
const NOT_FOUND_STATUS: u16 = 404;

/// Issues a get-by-id call at construction. The operation carries no editor.
#[derive(Debug)]
pub struct GetByIdVerifier<'a> {
    client: &'a PlayerApiClient,
    player_id: i64,
    expected_status: u16,
    response: HttpResponse,
    retrieved: Option<Player>,
}

impl<'a> GetByIdVerifier<'a> {
    /// Positive-path constructor: expects 200.
    pub fn new(client: &'a PlayerApiClient, player_id: i64) -> Result<Self, HarnessError> {
        Self::issue(client, player_id, SUCCESS_STATUS)
    }

    /// Negative-path constructor with a custom expected status.
    pub fn expecting(
        client: &'a PlayerApiClient,
        player_id: i64,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        Self::issue(client, player_id, expected_status)
    }

    fn issue(
        client: &'a PlayerApiClient,
        player_id: i64,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        let response = client.get_by_id(player_id)?;
        let retrieved = if response.status == SUCCESS_STATUS && response.has_body() {
            Some(response.decode::<Player>("player get response")?)
        } else {
            None
        };
        Ok(Self {
            client,
            player_id,
            expected_status,
            response,
            retrieved,
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
        expect_schema(&self.response, schema::PLAYER, "player");
        self
    }

    #[track_caller]
    pub fn verify_json_schema_against(&self, schema_src: &str) -> &Self {
        expect_schema(&self.response, schema_src, "supplied");
        self
    }

    /// Asserts the expected status; when the expectation is success, also
    /// asserts the decoded entity is present, matches the requested id, and
    /// carries well-formed fields.
    #[track_caller]
    pub fn verify_retrieved_player(&self) -> &Self {
        let mut soft = Soft::new("retrieved player verification");
        soft.check_eq(&self.response.status, &self.expected_status, "retrieval status");

        if self.expected_status == SUCCESS_STATUS {
            soft.check(self.retrieved.is_some(), "retrieved player should be decoded");
            if let Some(player) = &self.retrieved {
                soft.check_eq(&player.id, &self.player_id, "player id");
                soft.check(!player.login.is_empty(), "login should not be empty");
                soft.check(!player.role.is_empty(), "role should not be empty");
                soft.check(player.age > 0, format!("age should be positive, got {}", player.age));
                soft.check(!player.gender.is_empty(), "gender should not be empty");
                soft.check(
                    !player.screen_name.is_empty(),
                    "screen name should not be empty",
                );
            }
        }

        expect_response_time(&self.response, self.client.config().request_timeout());
        soft.finish();
        tracing::info!(player_id = self.player_id, "player retrieval verified");
        self
    }

    /// Field-by-field comparison against an expected entity, on top of the
    /// base retrieval checks.
    #[track_caller]
    pub fn verify_retrieved_player_matches(&self, expected: &Player) -> &Self {
        self.verify_retrieved_player();

        if self.expected_status == SUCCESS_STATUS {
            if let Some(player) = &self.retrieved {
                let mut soft = Soft::new("retrieved player comparison");
                soft.check_eq(player.login.as_str(), expected.login.as_str(), "login");
                soft.check_eq(player.role.as_str(), expected.role.as_str(), "role");
                soft.check_eq(&player.age, &expected.age, "age");
                soft.check_eq(player.gender.as_str(), expected.gender.as_str(), "gender");
                soft.check_eq(
                    player.screen_name.as_str(),
                    expected.screen_name.as_str(),
                    "screen name",
                );
                if expected.password.is_some() {
                    soft.check_eq(&player.password, &expected.password, "password");
                }
                soft.finish();
            }
        }
        self
    }

    /// Asserts a 404 outcome with no decoded entity.
    #[track_caller]
    pub fn verify_player_not_found(&self) -> &Self {
        let mut soft = Soft::new("player not-found verification");
        soft.check_eq(&self.response.status, &NOT_FOUND_STATUS, "status");
        soft.check(
            self.retrieved.is_none(),
            "no player should be decoded for a not-found response",
        );
        expect_response_time(&self.response, self.client.config().request_timeout());
        soft.finish();
        tracing::info!(player_id = self.player_id, "player not-found verified");
        self
    }

    pub fn retrieved_player(&self) -> Option<&Player> {
        self.retrieved.as_ref()
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }
}
