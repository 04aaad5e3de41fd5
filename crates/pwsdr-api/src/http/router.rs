//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/v1/`; `/health` sits at the root.
//! Middleware: CORS and request tracing.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Agent setup
        .route("/agent", get(handlers::agent::get_agent))
        .route("/content", get(handlers::agent::get_content))
        .route("/faq", get(handlers::faq::ask))
        // Leads
        .route("/leads", get(handlers::lead::list_leads))
        .route("/tools/{name}", post(handlers::tool::call_tool))
        // Conversations
        .route("/sessions", post(handlers::session::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::session::get_session).delete(handlers::session::delete_session),
        )
        .route(
            "/sessions/{id}/fields/{field}",
            put(handlers::session::set_field),
        )
        .route(
            "/sessions/{id}/utterances",
            post(handlers::session::post_utterance),
        )
        .route("/sessions/{id}/save", post(handlers::session::save_session));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn app() -> (TempDir, AppState, Router) {
        let tmp = TempDir::new().unwrap();
        let state = AppState::init_at(tmp.path()).await.unwrap();
        let router = build_router(state.clone());
        (tmp, state, router)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn error_code(body: &Value) -> &str {
        body["errors"][0]["code"].as_str().unwrap_or_default()
    }

    async fn stored_leads(state: &AppState) -> Vec<Value> {
        let raw = tokio::fs::read_to_string(&state.leads_path).await.unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (_tmp, _state, app) = app().await;
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn agent_exposes_instructions_tools_and_voice() {
        let (_tmp, _state, app) = app().await;
        let (status, body) = send(&app, "GET", "/api/v1/agent", None).await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["company"], "Physics Wallah");
        assert!(data["instructions"].as_str().unwrap().contains("save_lead"));
        assert_eq!(data["tools"][0]["name"], "save_lead");
        assert_eq!(data["voice"]["stt_model"], "nova-3");
        assert!(body["meta"]["request_id"].is_string());
        assert_eq!(body["_links"]["self"], "/api/v1/agent");
    }

    #[tokio::test]
    async fn content_returns_default_document() {
        let (_tmp, _state, app) = app().await;
        let (status, body) = send(&app, "GET", "/api/v1/content", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["faq"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["faq"][1]["q"], "Is there a free trial?");
    }

    #[tokio::test]
    async fn faq_lookup_hit_miss_and_missing_query() {
        let (_tmp, _state, app) = app().await;

        let (status, body) = send(&app, "GET", "/api/v1/faq?q=free%20trial%20please", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["matched"], true);
        assert_eq!(
            body["data"]["answer"],
            "Yes! Many PW courses include free demo lectures and sample chapter tests."
        );

        let (_, body) = send(&app, "GET", "/api/v1/faq?q=hello", None).await;
        assert_eq!(body["data"]["matched"], false);
        assert_eq!(
            body["data"]["answer"],
            "I don't have information on that, but I can connect you to a specialist."
        );

        let (status, body) = send(&app, "GET", "/api/v1/faq", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn session_flow_collects_closes_and_saves() {
        let (_tmp, state, app) = app().await;

        let (status, body) = send(&app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["phase"], "collecting");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/fields/name"),
            Some(json!({"value": "Asha"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/fields/interest"),
            Some(json!({"value": "NEET"})),
        )
        .await;
        assert_eq!(body["data"]["draft"]["interest"], "NEET");

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/utterances"),
            Some(json!({"text": "what courses do you offer?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["closing"], false);
        assert_eq!(body["data"]["reply"]["kind"], "answer");

        let (_, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/utterances"),
            Some(json!({"text": "thanks, that's all"})),
        )
        .await;
        assert_eq!(body["data"]["closing"], true);
        assert_eq!(body["data"]["phase"], "closing");
        assert_eq!(body["data"]["reply"]["kind"], "summary");
        let summary = body["data"]["reply"]["text"].as_str().unwrap();
        assert!(summary.contains("Asha is interested in NEET"));
        assert!(body["_links"]["save"].is_string());

        let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/save"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "Lead saved successfully ✔");
        assert_eq!(body["data"]["phase"], "saved");

        let leads = stored_leads(&state).await;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0]["name"], "Asha");
        assert!(leads[0]["timeline"].is_null());

        let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/save"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error_code(&body), "ALREADY_SAVED");

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/fields/role"),
            Some(json!({"value": "parent"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(stored_leads(&state).await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_session_and_bad_ids() {
        let (_tmp, _state, app) = app().await;

        let missing = uuid::Uuid::now_v7();
        let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(&body), "SESSION_NOT_FOUND");

        let (status, body) = send(&app, "GET", "/api/v1/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn unknown_field_and_bad_body_are_rejected() {
        let (_tmp, _state, app) = app().await;
        let (_, body) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/fields/phone"),
            Some(json!({"value": "12345"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "UNKNOWN_FIELD");

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/utterances"),
            Some(json!({"words": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn delete_discards_session_without_saving() {
        let (_tmp, state, app) = app().await;
        let (_, body) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["deleted"], true);

        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert!(state.sessions.is_empty());
        assert!(stored_leads(&state).await.is_empty());
    }

    #[tokio::test]
    async fn save_lead_tool_confirms_and_lists() {
        let (_tmp, _state, app) = app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/tools/save_lead",
            Some(json!({
                "name": "Rahul",
                "email": "rahul@example.com",
                "role": "student",
                "interest": "JEE",
                "timeline": "now"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "Lead saved successfully ✔");
        assert_eq!(body["data"]["record"]["interest"], "JEE");

        let (status, body) = send(&app, "GET", "/api/v1/leads", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn tool_errors_map_to_codes() {
        let (_tmp, state, app) = app().await;

        let (status, body) = send(&app, "POST", "/api/v1/tools/save_lead", Some(json!({"name": "A"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), "VALIDATION_ERROR");

        let (status, body) = send(&app, "POST", "/api/v1/tools/book_demo", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(&body), "TOOL_NOT_FOUND");

        assert!(stored_leads(&state).await.is_empty());
    }
}
