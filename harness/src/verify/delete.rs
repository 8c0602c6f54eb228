//! Verification service for player deletion.

use crate::client::PlayerApiClient;
use crate::error::HarnessError;
use crate::http::HttpResponse;
use crate::ledger::CleanupLedger;
use crate::model::PlayerList;
use crate::verify::{expect_response_time, expect_status};

/// Canonical success status for deletion. The service answers 204 with an
/// empty body; the ledger entry is released only on this status so a refused
/// deletion keeps the player tracked for the teardown sweep.
const SUCCESS_STATUS: u16 = 204;

#[derive(Debug)]
pub struct DeleteVerifier<'a> {
    client: &'a PlayerApiClient,
    player_id: i64,
    editor: String,
    expected_status: u16,
    response: HttpResponse,
}

impl<'a> DeleteVerifier<'a> {
    /// Positive-path constructor: configured supervisor editor, expects 204.
    pub fn new(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        player_id: i64,
    ) -> Result<Self, HarnessError> {
        let editor = client.config().supervisor_editor.clone();
        Self::issue(client, ledger, player_id, editor, SUCCESS_STATUS)
    }

    /// Custom editor, default expectation.
    pub fn as_editor(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        player_id: i64,
        editor: &str,
    ) -> Result<Self, HarnessError> {
        Self::issue(client, ledger, player_id, editor.to_string(), SUCCESS_STATUS)
    }

    /// Negative-path constructor: custom editor and expected status.
    pub fn expecting(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        player_id: i64,
        editor: &str,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        Self::issue(client, ledger, player_id, editor.to_string(), expected_status)
    }

    fn issue(
        client: &'a PlayerApiClient,
        ledger: &CleanupLedger,
        player_id: i64,
        editor: String,
        expected_status: u16,
    ) -> Result<Self, HarnessError> {
        let response = client.delete(&editor, player_id)?;
        if response.status == SUCCESS_STATUS {
            ledger.release(player_id);
        }
        Ok(Self {
            client,
            player_id,
            editor,
            expected_status,
            response,
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

    /// Re-fetches the full list and asserts the deleted id is gone.
    #[track_caller]
    pub fn verify_deleted_player(&self) -> &Self {
        let response = match self.client.get_all() {
            Ok(response) => response,
            Err(error) => panic!("list fetch during deletion verification failed: {error}"),
        };
        let list: PlayerList = match response.decode("player list response") {
            Ok(list) => list,
            Err(error) => panic!("list decode during deletion verification failed: {error}"),
        };
        if list.players.iter().any(|item| item.id == self.player_id) {
            panic!(
                "player {} was not removed - still exists in the system",
                self.player_id
            );
        }
        tracing::info!(player_id = self.player_id, editor = %self.editor, "player deletion verified");
        self
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }
}
