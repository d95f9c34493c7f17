//! Shared test utilities for integration tests.
//!
//! Spawns a throw-away backend on an ephemeral port that speaks the same
//! REST contract as the real competition backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, NaiveDate, Utc};
use domain::models::{InvitationRecord, MatchRef, RoundRecord};
use ryder_cup_client::config::BackendConfig;
use ryder_cup_client::repositories::HttpBackend;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Default)]
pub struct BackendState {
    pub invitations: HashMap<String, InvitationRecord>,
    pub rounds: HashMap<String, RoundRecord>,
    /// Authorization header of every request, in arrival order.
    pub authorization: Vec<Option<String>>,
    /// Bodies received on the accept/decline endpoints.
    pub responses: Vec<(String, InvitationRecord)>,
    /// When set, every endpoint answers 500.
    pub fail: bool,
}

pub type SharedState = Arc<Mutex<BackendState>>;

pub struct TestBackend {
    pub base_url: String,
    pub state: SharedState,
}

impl TestBackend {
    pub fn client(&self) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            base_url: self.base_url.clone(),
            api_token: Some(TEST_TOKEN.to_string()),
            request_timeout_secs: 5,
        })
        .expect("Failed to build HTTP backend")
    }

    pub fn insert_invitation(&self, record: InvitationRecord) {
        self.state
            .lock()
            .unwrap()
            .invitations
            .insert(record.id.clone(), record);
    }

    pub fn insert_round(&self, record: RoundRecord) {
        self.state
            .lock()
            .unwrap()
            .rounds
            .insert(record.id.clone(), record);
    }

    pub fn invitation(&self, id: &str) -> Option<InvitationRecord> {
        self.state.lock().unwrap().invitations.get(id).cloned()
    }

    pub fn set_failing(&self) {
        self.state.lock().unwrap().fail = true;
    }
}

/// Starts the fake backend and returns once it is accepting connections.
pub async fn spawn_backend() -> TestBackend {
    let state: SharedState = Arc::new(Mutex::new(BackendState::default()));

    let app = Router::new()
        .route("/api/invitations/:id", get(get_invitation))
        .route("/api/invitations/:id/accept", post(accept_invitation))
        .route("/api/invitations/:id/decline", post(decline_invitation))
        .route(
            "/api/competitions/:id/invitations",
            get(list_invitations).post(create_invitation),
        )
        .route("/api/rounds/:id", get(get_round))
        .route("/api/competitions/:id/rounds", get(list_rounds))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test backend crashed");
    });

    TestBackend {
        base_url: format!("http://{}/api", addr),
        state,
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn record_request(state: &SharedState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    state.authorization.push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    if state.fail {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "database unavailable".to_string(),
        ));
    }
    Ok(())
}

async fn get_invitation(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<InvitationRecord> {
    record_request(&state, &headers)?;
    let state = state.lock().unwrap();
    state
        .invitations
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "not found".to_string()))
}

async fn list_invitations(
    State(state): State<SharedState>,
    Path(competition_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Vec<InvitationRecord>> {
    record_request(&state, &headers)?;
    let state = state.lock().unwrap();
    let mut records: Vec<InvitationRecord> = state
        .invitations
        .values()
        .filter(|r| r.competition_id == competition_id)
        .cloned()
        .collect();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(Json(records))
}

async fn create_invitation(
    State(state): State<SharedState>,
    Path(competition_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<InvitationRecord>,
) -> ApiResult<InvitationRecord> {
    record_request(&state, &headers)?;
    if body.competition_id != competition_id || body.status != "PENDING" {
        return Err((StatusCode::BAD_REQUEST, "invalid invitation".to_string()));
    }
    let mut state = state.lock().unwrap();
    state.invitations.insert(body.id.clone(), body.clone());
    Ok(Json(body))
}

async fn accept_invitation(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<InvitationRecord>,
) -> ApiResult<InvitationRecord> {
    store_response(&state, &headers, "accept", &id, body, "ACCEPTED")
}

async fn decline_invitation(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<InvitationRecord>,
) -> ApiResult<InvitationRecord> {
    store_response(&state, &headers, "decline", &id, body, "DECLINED")
}

fn store_response(
    state: &SharedState,
    headers: &HeaderMap,
    action: &str,
    id: &str,
    body: InvitationRecord,
    expected_status: &str,
) -> ApiResult<InvitationRecord> {
    record_request(state, headers)?;
    let mut state = state.lock().unwrap();
    state.responses.push((action.to_string(), body.clone()));

    let stored = state
        .invitations
        .get_mut(id)
        .ok_or((StatusCode::NOT_FOUND, "not found".to_string()))?;
    if stored.status != "PENDING" {
        return Err((StatusCode::CONFLICT, "already responded".to_string()));
    }
    if body.status != expected_status {
        return Err((StatusCode::BAD_REQUEST, "status mismatch".to_string()));
    }

    *stored = body;
    Ok(Json(stored.clone()))
}

async fn get_round(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<RoundRecord> {
    record_request(&state, &headers)?;
    let state = state.lock().unwrap();
    state
        .rounds
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "not found".to_string()))
}

async fn list_rounds(
    State(state): State<SharedState>,
    Path(competition_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Vec<RoundRecord>> {
    record_request(&state, &headers)?;
    let state = state.lock().unwrap();
    Ok(Json(
        state
            .rounds
            .values()
            .filter(|r| r.competition_id == competition_id)
            .cloned()
            .collect(),
    ))
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn invitation_record(id: &str, status: &str) -> InvitationRecord {
    let now = Utc::now();
    InvitationRecord {
        id: id.to_string(),
        competition_id: "comp-1".to_string(),
        inviter_id: "creator-1".to_string(),
        invitee_email: format!("{}@example.com", id),
        invitee_user_id: Some(format!("user-{}", id)),
        status: status.to_string(),
        personal_message: Some("Fancy a game?".to_string()),
        expires_at: Some(now + Duration::days(7)),
        responded_at: if status == "PENDING" { None } else { Some(now) },
        created_at: now - Duration::days(1),
        updated_at: now - Duration::days(1),
    }
}

pub fn round_record(id: &str, day: u32, session: &str, status: &str) -> RoundRecord {
    let now = Utc::now();
    RoundRecord {
        id: id.to_string(),
        competition_id: "comp-1".to_string(),
        golf_course_id: "course-1".to_string(),
        round_date: NaiveDate::from_ymd_opt(2026, 10, day).expect("valid date"),
        session_type: session.to_string(),
        match_format: "SINGLES".to_string(),
        handicap_mode: Some("MATCH_PLAY".to_string()),
        allowance_percentage: Some(95),
        effective_allowance: Some(95.0),
        status: status.to_string(),
        matches: vec![MatchRef {
            id: format!("{}-m1", id),
            match_number: 1,
        }],
        created_at: now,
        updated_at: now,
    }
}
