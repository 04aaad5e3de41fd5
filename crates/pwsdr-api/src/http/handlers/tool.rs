//! Tool invocation endpoint for the external LLM agent.
//!
//! - POST /api/v1/tools/{name} - body is the tool's argument object
//!
//! Only `save_lead` exists. A failed save returns 500 `LEAD_STORE_ERROR`,
//! never the confirmation string.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use pwsdr_core::agent::tools::{ToolOutput, invoke_tool};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// POST /api/v1/tools/{name}
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ApiResponse<ToolOutput>>, AppError> {
    let timer = RequestTimer::start();
    let Json(arguments) = payload?;

    let output = invoke_tool(state.lead_service.as_ref(), &name, arguments).await?;

    Ok(Json(
        ApiResponse::success(output, timer).with_link("leads", "/api/v1/leads"),
    ))
}
