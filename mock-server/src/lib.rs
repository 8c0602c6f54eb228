//! In-process implementation of the player service wire contract.
//!
//! Used by the harness's integration tests as the remote system. Types are
//! defined independently of the harness crate so the integration tests catch
//! schema drift between the two. Seeded with the two baseline players the
//! real service guarantees: supervisor (id 1) and admin (id 2).

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

const AGE_MIN: i64 = 17;
const AGE_MAX: i64 = 59;
const LOGIN_MIN: usize = 3;
const LOGIN_MAX: usize = 50;
const SCREEN_NAME_MIN: usize = 2;
const SCREEN_NAME_MAX: usize = 30;
const CREATABLE_ROLES: &[&str] = &["user", "admin"];
const GENDERS: &[&str] = &["MALE", "FEMALE", "OTHER"];

/// Stored player record. Serialized in full (password included) by the
/// create and get endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
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

/// Update responses never expose the password.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedPlayer {
    pub id: i64,
    pub login: String,
    pub role: String,
    pub age: i64,
    pub gender: String,
    pub screen_name: String,
}

/// Reduced projection for the list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub id: i64,
    pub age: i64,
    pub gender: String,
    pub role: String,
    pub screen_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerList {
    pub players: Vec<PlayerItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    pub login: String,
    pub password: Option<String>,
    pub role: String,
    /// Arrives as a query-string value; parsed and range-checked by hand.
    pub age: String,
    pub gender: String,
    pub screen_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdBody {
    pub player_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBody {
    pub login: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub screen_name: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    db: Arc<RwLock<HashMap<i64, Player>>>,
    next_id: Arc<AtomicI64>,
}

impl AppState {
    fn seeded() -> Self {
        let mut players = HashMap::new();
        players.insert(
            1,
            Player {
                id: 1,
                login: "supervisor".to_string(),
                role: "supervisor".to_string(),
                age: 35,
                gender: "MALE".to_string(),
                screen_name: "Supervisor".to_string(),
                password: Some("supervisorPass".to_string()),
            },
        );
        players.insert(
            2,
            Player {
                id: 2,
                login: "admin".to_string(),
                role: "admin".to_string(),
                age: 32,
                gender: "FEMALE".to_string(),
                screen_name: "Admin".to_string(),
                password: Some("adminPass".to_string()),
            },
        );
        Self {
            db: Arc::new(RwLock::new(players)),
            next_id: Arc::new(AtomicI64::new(3)),
        }
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/player/create/{editor}", get(create_player))
        .route("/player/delete/{editor}", delete(delete_player))
        .route("/player/get", post(get_player))
        .route("/player/get/all", get(get_all_players))
        .route("/player/update/{editor}/{id}", patch(update_player))
        .with_state(AppState::seeded())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Editors must be existing players holding an editing role.
async fn authorize(state: &AppState, editor: &str) -> Result<(), StatusCode> {
    let db = state.db.read().await;
    let allowed = db
        .values()
        .any(|p| p.login == editor && (p.role == "supervisor" || p.role == "admin"));
    if allowed {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

fn valid_login(login: &str) -> bool {
    login.len() >= LOGIN_MIN
        && login.len() <= LOGIN_MAX
        && login
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn valid_screen_name(screen_name: &str) -> bool {
    screen_name.len() >= SCREEN_NAME_MIN
        && screen_name.len() <= SCREEN_NAME_MAX
        && screen_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ' ')
}

fn valid_age(age: i64) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&age)
}

async fn create_player(
    State(state): State<AppState>,
    Path(editor): Path<String>,
    Query(params): Query<CreateParams>,
) -> Result<Json<Player>, StatusCode> {
    authorize(&state, &editor).await?;

    let age: i64 = params.age.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    if !valid_age(age)
        || !valid_login(&params.login)
        || !valid_screen_name(&params.screen_name)
        || !CREATABLE_ROLES.contains(&params.role.as_str())
        || !GENDERS.contains(&params.gender.as_str())
    {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut db = state.db.write().await;
    if db.values().any(|p| p.login == params.login) {
        return Err(StatusCode::FORBIDDEN);
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let player = Player {
        id,
        login: params.login,
        role: params.role,
        age,
        gender: params.gender,
        screen_name: params.screen_name,
        password: params.password,
    };
    db.insert(id, player.clone());
    tracing::debug!(id, "player created");
    Ok(Json(player))
}

async fn delete_player(
    State(state): State<AppState>,
    Path(editor): Path<String>,
    Json(body): Json<PlayerIdBody>,
) -> Result<StatusCode, StatusCode> {
    authorize(&state, &editor).await?;

    let mut db = state.db.write().await;
    let target = db.get(&body.player_id).ok_or(StatusCode::NOT_FOUND)?;
    if target.role == "supervisor" {
        return Err(StatusCode::FORBIDDEN);
    }
    db.remove(&body.player_id);
    tracing::debug!(id = body.player_id, "player deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn get_player(
    State(state): State<AppState>,
    Json(body): Json<PlayerIdBody>,
) -> Result<Json<Player>, StatusCode> {
    let db = state.db.read().await;
    db.get(&body.player_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_all_players(State(state): State<AppState>) -> Json<PlayerList> {
    let db = state.db.read().await;
    let players = db
        .values()
        .map(|p| PlayerItem {
            id: p.id,
            age: p.age,
            gender: p.gender.clone(),
            role: p.role.clone(),
            screen_name: p.screen_name.clone(),
        })
        .collect();
    Json(PlayerList { players })
}

async fn update_player(
    State(state): State<AppState>,
    Path((editor, id)): Path<(String, i64)>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<UpdatedPlayer>, StatusCode> {
    authorize(&state, &editor).await?;

    let mut db = state.db.write().await;
    let player = db.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    // Validate before applying anything so a bad field leaves the entity
    // untouched.
    if let Some(login) = &body.login {
        if !valid_login(login) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    if let Some(age) = body.age {
        if !valid_age(age) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    if let Some(gender) = &body.gender {
        if !GENDERS.contains(&gender.as_str()) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    if let Some(role) = &body.role {
        if !CREATABLE_ROLES.contains(&role.as_str()) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    if let Some(screen_name) = &body.screen_name {
        if !valid_screen_name(screen_name) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    if let Some(login) = body.login {
        player.login = login;
    }
    if let Some(password) = body.password {
        player.password = Some(password);
    }
    if let Some(role) = body.role {
        player.role = role;
    }
    if let Some(age) = body.age {
        player.age = age;
    }
    if let Some(gender) = body.gender {
        player.gender = gender;
    }
    if let Some(screen_name) = body.screen_name {
        player.screen_name = screen_name;
    }

    tracing::debug!(id, "player updated");
    Ok(Json(UpdatedPlayer {
        id: player.id,
        login: player.login.clone(),
        role: player.role.clone(),
        age: player.age,
        gender: player.gender.clone(),
        screen_name: player.screen_name.clone(),
    }))
}
