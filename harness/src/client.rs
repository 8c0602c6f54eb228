//! Operation client for the five player endpoints.
//!
//! # Design
//! `PlayerApiClient` owns the configuration and a reusable `Transport`.
//! Each operation is split into a pure `build_*` method producing an
//! `HttpRequest` (unit-testable without I/O) and an issuing method that
//! executes it synchronously. Issuing methods return the raw response
//! without interpretation: non-2xx statuses are expected outcomes for
//! negative-path tests, so only transport faults are `Err`. Every call emits
//! one structured log line with operation, endpoint, status, and elapsed
//! time.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::{CreatePlayer, DeletePlayer, GetPlayer, UpdatePlayer};
use crate::transport::Transport;

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Synchronous client for the player API.
#[derive(Debug)]
pub struct PlayerApiClient {
    config: HarnessConfig,
    transport: Transport,
    base_url: String,
}

impl PlayerApiClient {
    pub fn new(config: HarnessConfig) -> Self {
        let transport = Transport::new(&config);
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            config,
            transport,
            base_url,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    // --- request construction ---

    /// Create goes over GET with the player fields as query parameters —
    /// that is the service's documented (if unusual) contract.
    pub fn build_create(&self, editor: &str, data: &CreatePlayer) -> HttpRequest {
        let mut query = vec![("login".to_string(), data.login.clone())];
        if let Some(password) = &data.password {
            query.push(("password".to_string(), password.clone()));
        }
        query.push(("role".to_string(), data.role.clone()));
        query.push(("age".to_string(), data.age.to_string()));
        query.push(("gender".to_string(), data.gender.clone()));
        query.push(("screenName".to_string(), data.screen_name.clone()));

        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/player/create/{editor}", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, editor: &str, player_id: i64) -> Result<HttpRequest, HarnessError> {
        let body = encode(&DeletePlayer { player_id })?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/player/delete/{editor}", self.base_url),
            query: Vec::new(),
            headers: vec![json_header()],
            body: Some(body),
        })
    }

    pub fn build_get_by_id(&self, player_id: i64) -> Result<HttpRequest, HarnessError> {
        let body = encode(&GetPlayer { player_id })?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/player/get", self.base_url),
            query: Vec::new(),
            headers: vec![json_header()],
            body: Some(body),
        })
    }

    pub fn build_get_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/player/get/all", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update(
        &self,
        editor: &str,
        player_id: i64,
        data: &UpdatePlayer,
    ) -> Result<HttpRequest, HarnessError> {
        let body = encode(data)?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/player/update/{editor}/{player_id}", self.base_url),
            query: Vec::new(),
            headers: vec![json_header()],
            body: Some(body),
        })
    }

    // --- issuing ---

    pub fn create(&self, editor: &str, data: &CreatePlayer) -> Result<HttpResponse, HarnessError> {
        self.issue("CREATE_PLAYER", self.build_create(editor, data))
    }

    pub fn delete(&self, editor: &str, player_id: i64) -> Result<HttpResponse, HarnessError> {
        self.issue("DELETE_PLAYER", self.build_delete(editor, player_id)?)
    }

    pub fn get_by_id(&self, player_id: i64) -> Result<HttpResponse, HarnessError> {
        self.issue("GET_PLAYER_BY_ID", self.build_get_by_id(player_id)?)
    }

    pub fn get_all(&self) -> Result<HttpResponse, HarnessError> {
        self.issue("GET_ALL_PLAYERS", self.build_get_all())
    }

    pub fn update(
        &self,
        editor: &str,
        player_id: i64,
        data: &UpdatePlayer,
    ) -> Result<HttpResponse, HarnessError> {
        self.issue("UPDATE_PLAYER", self.build_update(editor, player_id, data)?)
    }

    fn issue(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, HarnessError> {
        let response = self.transport.execute(&request)?;
        tracing::info!(
            operation,
            endpoint = %request.path,
            status = response.status,
            elapsed_ms = response.elapsed.as_millis() as u64,
            "player api call"
        );
        Ok(response)
    }
}

fn json_header() -> (String, String) {
    (
        JSON_CONTENT_TYPE.0.to_string(),
        JSON_CONTENT_TYPE.1.to_string(),
    )
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, HarnessError> {
    serde_json::to_string(value).map_err(HarnessError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UpdatePlayer;

    fn client() -> PlayerApiClient {
        let config = HarnessConfig {
            base_url: "http://localhost:3000".to_string(),
            ..HarnessConfig::default()
        };
        PlayerApiClient::new(config)
    }

    fn create_data() -> CreatePlayer {
        CreatePlayer {
            login: "u1".to_string(),
            password: Some("p1".to_string()),
            role: "user".to_string(),
            age: 30,
            gender: "MALE".to_string(),
            screen_name: "S1".to_string(),
        }
    }

    #[test]
    fn build_create_uses_get_with_query_params() {
        let req = client().build_create("supervisor", &create_data());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/player/create/supervisor");
        assert!(req.body.is_none());
        let keys: Vec<&str> = req.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["login", "password", "role", "age", "gender", "screenName"]
        );
        assert!(req
            .query
            .contains(&("age".to_string(), "30".to_string())));
    }

    #[test]
    fn build_create_omits_absent_password() {
        let mut data = create_data();
        data.password = None;
        let req = client().build_create("supervisor", &data);
        assert!(!req.query.iter().any(|(k, _)| k == "password"));
    }

    #[test]
    fn build_delete_carries_player_id_body() {
        let req = client().build_delete("supervisor", 42).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/player/delete/supervisor");
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["playerId"], 42);
    }

    #[test]
    fn build_get_by_id_posts_to_fixed_path() {
        let req = client().build_get_by_id(7).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/player/get");
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["playerId"], 7);
    }

    #[test]
    fn build_get_all_has_no_payload() {
        let req = client().build_get_all();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/player/get/all");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_substitutes_editor_and_id() {
        let update = UpdatePlayer {
            screen_name: Some("NewName".to_string()),
            ..UpdatePlayer::default()
        };
        let req = client().build_update("admin", 9, &update).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:3000/player/update/admin/9");
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["screenName"], "NewName");
        assert!(body.get("login").is_none());
    }

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let config = HarnessConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..HarnessConfig::default()
        };
        let client = PlayerApiClient::new(config);
        let req = client.build_get_all();
        assert_eq!(req.path, "http://localhost:3000/player/get/all");
    }
}
