//! Conversation session handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions                      - Start a conversation
//! - GET    /api/v1/sessions/{id}                 - Phase and lead draft
//! - PUT    /api/v1/sessions/{id}/fields/{field}  - Overwrite one lead field
//! - POST   /api/v1/sessions/{id}/utterances      - Feed one user utterance
//! - POST   /api/v1/sessions/{id}/save            - Flush the draft as a lead
//! - DELETE /api/v1/sessions/{id}                 - Abandon (draft discarded)
//!
//! Saved sessions stay in the registry until deleted (or evicted once idle
//! past `[server] session_ttl_secs`) so clients can read the final state;
//! further writes return 409 `ALREADY_SAVED`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pwsdr_core::conversation::registry::ConversationHandle;
use pwsdr_types::conversation::{ConversationPhase, ConversationSnapshot, TurnReply};
use pwsdr_types::error::ConversationError;
use pwsdr_types::lead::LeadRecord;
use pwsdr_types::tool::SAVE_LEAD_CONFIRMATION;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UtteranceRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UtteranceResponse {
    pub session_id: Uuid,
    pub phase: ConversationPhase,
    /// True when this utterance ended the conversation.
    pub closing: bool,
    pub reply: TurnReply,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub session_id: Uuid,
    pub phase: ConversationPhase,
    pub message: String,
    pub record: LeadRecord,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub session_id: Uuid,
    pub deleted: bool,
}

/// Parse a UUID from a path parameter, returning a 400 error on invalid format.
fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Validation(format!("Invalid UUID: {s}")))
}

fn lookup(state: &AppState, id: &str) -> Result<(Uuid, ConversationHandle), AppError> {
    let id = parse_uuid(id)?;
    let handle = state
        .sessions
        .get(&id)
        .ok_or(ConversationError::SessionNotFound)?;
    Ok((id, handle))
}

fn session_link(id: &Uuid) -> String {
    format!("/api/v1/sessions/{id}")
}

/// POST /api/v1/sessions
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<ConversationSnapshot>>), AppError> {
    let timer = RequestTimer::start();

    let id = state.sessions.create();
    let handle = state
        .sessions
        .get(&id)
        .ok_or_else(|| AppError::Internal(format!("session {id} vanished after creation")))?;
    let snapshot = handle.lock().await.snapshot();

    let resp = ApiResponse::success(snapshot, timer).with_link("self", &session_link(&id));
    Ok((StatusCode::CREATED, Json(resp)))
}

/// GET /api/v1/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<ConversationSnapshot>>, AppError> {
    let timer = RequestTimer::start();
    let (id, handle) = lookup(&state, &session_id)?;

    let snapshot = handle.lock().await.snapshot();
    Ok(Json(
        ApiResponse::success(snapshot, timer).with_link("self", &session_link(&id)),
    ))
}

/// PUT /api/v1/sessions/{id}/fields/{field}
pub async fn set_field(
    State(state): State<AppState>,
    Path((session_id, field)): Path<(String, String)>,
    payload: Result<Json<SetFieldRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ConversationSnapshot>>, AppError> {
    let timer = RequestTimer::start();
    let (id, handle) = lookup(&state, &session_id)?;
    let Json(body) = payload?;

    let mut convo = handle.lock().await;
    convo.update_named(&field, body.value)?;
    let snapshot = convo.snapshot();

    Ok(Json(
        ApiResponse::success(snapshot, timer).with_link("session", &session_link(&id)),
    ))
}

/// POST /api/v1/sessions/{id}/utterances
pub async fn post_utterance(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<UtteranceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UtteranceResponse>>, AppError> {
    let timer = RequestTimer::start();
    let (id, handle) = lookup(&state, &session_id)?;
    let Json(body) = payload?;

    let mut convo = handle.lock().await;
    let reply = convo.handle_utterance(&body.text, &state.content)?;

    let resp = UtteranceResponse {
        session_id: id,
        phase: convo.phase(),
        closing: matches!(reply, TurnReply::Summary(_)),
        reply,
    };

    let mut envelope = ApiResponse::success(resp, timer).with_link("session", &session_link(&id));
    if convo.phase() == ConversationPhase::Closing {
        envelope = envelope.with_link("save", &format!("{}/save", session_link(&id)));
    }
    Ok(Json(envelope))
}

/// POST /api/v1/sessions/{id}/save
pub async fn save_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<SaveResponse>>, AppError> {
    let timer = RequestTimer::start();
    let (id, handle) = lookup(&state, &session_id)?;

    let mut convo = handle.lock().await;
    let record = convo.save(state.lead_service.as_ref()).await?;

    let resp = SaveResponse {
        session_id: id,
        phase: convo.phase(),
        message: SAVE_LEAD_CONFIRMATION.to_string(),
        record,
    };
    Ok(Json(
        ApiResponse::success(resp, timer).with_link("leads", "/api/v1/leads"),
    ))
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DeleteResponse>>, AppError> {
    let timer = RequestTimer::start();
    let id = parse_uuid(&session_id)?;

    if !state.sessions.remove(&id) {
        return Err(ConversationError::SessionNotFound.into());
    }

    Ok(Json(ApiResponse::success(
        DeleteResponse {
            session_id: id,
            deleted: true,
        },
        timer,
    )))
}
