//! Lead listing endpoint.
//!
//! - GET /api/v1/leads - every stored lead, oldest first

use axum::Json;
use axum::extract::State;

use pwsdr_types::lead::LeadRecord;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/leads
pub async fn list_leads(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LeadRecord>>>, AppError> {
    let timer = RequestTimer::start();
    let leads = state.lead_service.list_leads().await?;
    Ok(Json(ApiResponse::success(leads, timer).with_link("self", "/api/v1/leads")))
}
