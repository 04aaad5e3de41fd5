//! FAQ lookup endpoint.
//!
//! - GET /api/v1/faq?q=... - answer or specialist fallback

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use pwsdr_core::faq::lookup;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FaqQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FaqAnswer {
    pub query: String,
    pub matched: bool,
    /// The FAQ question that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub answer: String,
}

/// GET /api/v1/faq
pub async fn ask(
    State(state): State<AppState>,
    query: Result<Query<FaqQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<FaqAnswer>>, AppError> {
    let timer = RequestTimer::start();
    let Query(query) = query?;

    let q = query
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("query parameter 'q' is required".to_string()))?;

    let found = lookup(&q, &state.content);
    tracing::debug!(matched = found.matched(), "faq lookup");

    let body = FaqAnswer {
        matched: found.matched(),
        question: found.entry.map(|e| e.question.clone()),
        answer: found.answer().to_string(),
        query: q,
    };

    Ok(Json(ApiResponse::success(body, timer)))
}
