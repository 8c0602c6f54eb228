//! Verification service for partial player updates.
//!
//! Built through [`UpdateVerifierBuilder`] because update scenarios have the
//! most optional configuration: editor, expected status, and the pre-update
//! entity snapshot used by the partial-update checks.

use crate::client::PlayerApiClient;
use crate::error::HarnessError;
use crate::http::HttpResponse;
use crate::model::{Player, UpdatePlayer};
use crate::schema;
use crate::verify::{expect_response_time, expect_schema, expect_status, Soft};

const SUCCESS_STATUS: u16 = 200;

#[derive(Debug)]
pub struct UpdateVerifier<'a> {
    client: &'a PlayerApiClient,
    player_id: i64,
    request: UpdatePlayer,
    editor: String,
    expected_status: u16,
    response: HttpResponse,
    updated: Option<Player>,
    initial: Option<Player>,
}

/// Builder for update scenarios; `issue` performs the HTTP call.
#[derive(Debug)]
pub struct UpdateVerifierBuilder<'a> {
    client: &'a PlayerApiClient,
    player_id: i64,
    request: UpdatePlayer,
    editor: Option<String>,
    expected_status: u16,
    initial: Option<Player>,
}

impl<'a> UpdateVerifier<'a> {
    pub fn builder(
        client: &'a PlayerApiClient,
        player_id: i64,
        request: UpdatePlayer,
    ) -> UpdateVerifierBuilder<'a> {
        UpdateVerifierBuilder {
            client,
            player_id,
            request,
            editor: None,
            expected_status: SUCCESS_STATUS,
            initial: None,
        }
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
        expect_schema(&self.response, schema::PLAYER_UPDATE, "player update");
        self
    }

    #[track_caller]
    pub fn verify_json_schema_against(&self, schema_src: &str) -> &Self {
        expect_schema(&self.response, schema_src, "supplied");
        self
    }

    /// Asserts the expected status; on success, every field present in the
    /// request must be reflected in the response, and required fields must
    /// still be well-formed.
    #[track_caller]
    pub fn verify_player_updated(&self) -> &Self {
        let mut soft = Soft::new("player update verification");
        soft.check_eq(&self.response.status, &self.expected_status, "update status");

        if self.expected_status == SUCCESS_STATUS {
            soft.check(self.updated.is_some(), "updated player should be decoded");
            if let Some(updated) = &self.updated {
                soft.check_eq(&updated.id, &self.player_id, "id should remain unchanged");

                if let Some(login) = &self.request.login {
                    soft.check_eq(&updated.login, login, "login should be updated");
                }
                if let Some(role) = &self.request.role {
                    soft.check_eq(&updated.role, role, "role should be updated");
                }
                if let Some(age) = &self.request.age {
                    soft.check_eq(&updated.age, age, "age should be updated");
                }
                if let Some(gender) = &self.request.gender {
                    soft.check_eq(&updated.gender, gender, "gender should be updated");
                }
                if let Some(screen_name) = &self.request.screen_name {
                    soft.check_eq(
                        &updated.screen_name,
                        screen_name,
                        "screen name should be updated",
                    );
                }

                soft.check(!updated.login.is_empty(), "login should not be empty after update");
                soft.check(!updated.role.is_empty(), "role should not be empty after update");
                soft.check(
                    updated.age > 0,
                    format!("age should be positive after update, got {}", updated.age),
                );
                soft.check(!updated.gender.is_empty(), "gender should not be empty after update");
                soft.check(
                    !updated.screen_name.is_empty(),
                    "screen name should not be empty after update",
                );
            }
        }

        expect_response_time(&self.response, self.client.config().request_timeout());
        soft.finish();
        tracing::info!(player_id = self.player_id, editor = %self.editor, "player update verified");
        self
    }

    /// Partial-update contract: every field *absent* from the request must
    /// still equal its pre-update value.
    #[track_caller]
    pub fn verify_partial_update(&self, original: &Player) -> &Self {
        self.verify_player_updated();

        if self.expected_status == SUCCESS_STATUS {
            if let Some(updated) = &self.updated {
                let mut soft = Soft::new("partial update verification");

                if self.request.login.is_none() {
                    soft.check_eq(&updated.login, &original.login, "untouched login");
                }
                if self.request.role.is_none() {
                    soft.check_eq(&updated.role, &original.role, "untouched role");
                }
                if self.request.age.is_none() {
                    soft.check_eq(&updated.age, &original.age, "untouched age");
                }
                if self.request.gender.is_none() {
                    soft.check_eq(&updated.gender, &original.gender, "untouched gender");
                }
                if self.request.screen_name.is_none() {
                    soft.check_eq(&updated.screen_name, &original.screen_name, "untouched screen name");
                }

                soft.finish();
            }
        }
        self
    }

    /// Same contract, against the snapshot supplied at build time.
    #[track_caller]
    pub fn verify_partial_update_against_initial(&self) -> &Self {
        match self.initial.clone() {
            Some(initial) => self.verify_partial_update(&initial),
            None => {
                tracing::warn!(
                    player_id = self.player_id,
                    "no initial player snapshot available for comparison"
                );
                self
            }
        }
    }

    pub fn updated_player(&self) -> Option<&Player> {
        self.updated.as_ref()
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn request(&self) -> &UpdatePlayer {
        &self.request
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }
}

impl<'a> UpdateVerifierBuilder<'a> {
    pub fn editor(mut self, editor: &str) -> Self {
        self.editor = Some(editor.to_string());
        self
    }

    pub fn expected_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Pre-update snapshot for `verify_partial_update_against_initial`.
    pub fn initial_player(mut self, player: Player) -> Self {
        self.initial = Some(player);
        self
    }

    /// Execute the update call and capture the outcome.
    pub fn issue(self) -> Result<UpdateVerifier<'a>, HarnessError> {
        let editor = self
            .editor
            .unwrap_or_else(|| self.client.config().supervisor_editor.clone());
        let response = self.client.update(&editor, self.player_id, &self.request)?;

        let updated = if response.status == SUCCESS_STATUS && response.has_body() {
            Some(response.decode::<Player>("player update response")?)
        } else {
            None
        };

        Ok(UpdateVerifier {
            client: self.client,
            player_id: self.player_id,
            request: self.request,
            editor,
            expected_status: self.expected_status,
            response,
            updated,
            initial: self.initial,
        })
    }
}
