//! Verification service for player creation.

use crate::client::PlayerApiClient;
use crate::error::HarnessError;
use crate::http::HttpResponse;
use crate::ledger::CleanupLedger;
use crate::model::{CreatePlayer, Player};
use crate::schema;
use crate::verify::{expect_response_time, expect_schema, expect_status, Soft};

const SUCCESS_STATUS: u16 = 200;

/// Issues a create call at construction and exposes chainable assertions on
/// the outcome. On success the new player's id is recorded in the cleanup
/// ledger, so a later failure in the test still leads to eventual deletion.
#[derive(Debug)]
pub struct CreateVerifier<'a> {
    client: &'a PlayerApiClient,
    request: CreatePlayer,
    editor: String,
    expected_status: u16,
    response: HttpResponse,
    created: Option<Player>,
}

impl<'a> CreateVerifier<'a> {
    /// Positive-path constructor: configured supervisor editor, expects 200.
    pub fn new(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        request: CreatePlayer,
    ) -> Result<Self, HarnessError> {
        let editor = client.config().supervisor_editor.clone();
        Self::issue(client, ledger, request, editor, SUCCESS_STATUS)
    }

    /// Custom editor, default expectation.
    pub fn as_editor(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        request: CreatePlayer,
        editor: &str,
    ) -> Result<Self, HarnessError> {
        Self::issue(client, ledger, request, editor.to_string(), SUCCESS_STATUS)
    }

    /// Negative-path constructor: custom editor and expected status.
    pub fn expecting(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        request: CreatePlayer,
        editor: &str,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        Self::issue(client, ledger, request, editor.to_string(), expected_status)
    }

    fn issue(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        request: CreatePlayer,
        editor: String,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        let response = client.create(&editor, &request)?;

        // Decode on the operation's success status, not the expected one: a
        // negative test that unexpectedly succeeds must still be tracked for
        // cleanup.
        let created = if response.status == SUCCESS_STATUS && response.has_body() {
            Some(response.decode::<Player>("player create response")?)
        } else {
            None
        };
        if let Some(player) = &created {
            ledger.record(player.id);
        }

        Ok(Self {
            client,
            request,
            editor,
            expected_status,
            response,
            created,
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

    /// Full field-by-field verification of the created entity against the
    /// request. Password is only compared when the request supplied one.
    #[track_caller]
    pub fn verify_created_player(&self) -> &Self {
        let mut soft = Soft::new("created player verification");
        soft.check_eq(&self.response.status, &SUCCESS_STATUS, "creation status");
        soft.check(self.created.is_some(), "created player should be decoded");

        if let Some(created) = &self.created {
            soft.check(created.id > 0, format!("id should be positive, got {}", created.id));
            soft.check_eq(created.login.as_str(), self.request.login.as_str(), "login");
            soft.check_eq(created.role.as_str(), self.request.role.as_str(), "role");
            soft.check_eq(&created.age, &self.request.age, "age");
            soft.check_eq(created.gender.as_str(), self.request.gender.as_str(), "gender");
            soft.check_eq(
                created.screen_name.as_str(),
                self.request.screen_name.as_str(),
                "screen name",
            );
            if self.request.password.is_some() {
                soft.check_eq(&created.password, &self.request.password, "password");
            }
        }

        expect_response_time(&self.response, self.client.config().request_timeout());
        soft.finish();
        tracing::info!(editor = %self.editor, "player creation verified");
        self
    }

    pub fn created_player(&self) -> Option<&Player> {
        self.created.as_ref()
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn request(&self) -> &CreatePlayer {
        &self.request
    }
}
