//! Agent configuration endpoints.
//!
//! - GET /api/v1/agent   - instructions, greeting, tools and voice settings
//! - GET /api/v1/content - the loaded company/FAQ document

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use pwsdr_core::agent::prompt::{build_instructions, greeting};
use pwsdr_core::agent::tools::tool_definitions;
use pwsdr_types::config::VoiceSettings;
use pwsdr_types::content::FaqContent;
use pwsdr_types::tool::ToolDefinition;

use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Everything a voice worker needs to start an agent session.
#[derive(Debug, Serialize)]
pub struct AgentView {
    pub company: String,
    pub greeting: String,
    pub instructions: String,
    pub tools: Vec<ToolDefinition>,
    pub voice: VoiceSettings,
}

/// GET /api/v1/agent
pub async fn get_agent(State(state): State<AppState>) -> Json<ApiResponse<AgentView>> {
    let timer = RequestTimer::start();

    let view = AgentView {
        company: state.content.company.name.clone(),
        greeting: greeting(&state.content),
        instructions: build_instructions(&state.content),
        tools: tool_definitions(),
        voice: state.config.voice.clone(),
    };

    Json(
        ApiResponse::success(view, timer)
            .with_link("self", "/api/v1/agent")
            .with_link("content", "/api/v1/content"),
    )
}

/// GET /api/v1/content
pub async fn get_content(State(state): State<AppState>) -> Json<ApiResponse<FaqContent>> {
    let timer = RequestTimer::start();
    Json(ApiResponse::success(state.content.as_ref().clone(), timer).with_link("self", "/api/v1/content"))
}
