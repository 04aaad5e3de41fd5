//! Application error type mapping to HTTP status codes and the envelope.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pwsdr_types::error::{ConversationError, LeadStoreError, ToolError};

use crate::http::response::{ApiResponse, RequestTimer};

#[derive(Debug)]
pub enum AppError {
    Conversation(ConversationError),
    LeadStore(LeadStoreError),
    Tool(ToolError),
    /// Bad path, query or body.
    Validation(String),
    Internal(String),
}

impl From<ConversationError> for AppError {
    fn from(e: ConversationError) -> Self {
        AppError::Conversation(e)
    }
}

impl From<LeadStoreError> for AppError {
    fn from(e: LeadStoreError) -> Self {
        AppError::LeadStore(e)
    }
}

impl From<ToolError> for AppError {
    fn from(e: ToolError) -> Self {
        AppError::Tool(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Conversation(ConversationError::SessionNotFound) => {
                (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND", "Session not found".to_string())
            }
            AppError::Conversation(ConversationError::AlreadySaved) => (
                StatusCode::CONFLICT,
                "ALREADY_SAVED",
                "Conversation already saved".to_string(),
            ),
            AppError::Conversation(e @ ConversationError::UnknownField(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_FIELD", e.to_string())
            }
            AppError::Conversation(e @ ConversationError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "LEAD_STORE_ERROR", e.to_string())
            }
            AppError::LeadStore(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "LEAD_STORE_ERROR", e.to_string())
            }
            AppError::Tool(e @ ToolError::UnknownTool(_)) => {
                (StatusCode::NOT_FOUND, "TOOL_NOT_FOUND", e.to_string())
            }
            AppError::Tool(e @ ToolError::InvalidArguments { .. }) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Tool(e @ ToolError::Failed { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "LEAD_STORE_ERROR", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(code, error = %message, "request failed");
        }

        let body = ApiResponse::error(code, &message, RequestTimer::start());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_errors_map_to_codes() {
        let cases = [
            (ConversationError::SessionNotFound, StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            (ConversationError::AlreadySaved, StatusCode::CONFLICT, "ALREADY_SAVED"),
            (
                ConversationError::UnknownField("phone".to_string()),
                StatusCode::BAD_REQUEST,
                "UNKNOWN_FIELD",
            ),
            (
                ConversationError::Store(LeadStoreError::Io("disk full".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
                "LEAD_STORE_ERROR",
            ),
        ];

        for (err, status, code) in cases {
            let (got_status, got_code, _) = AppError::from(err).parts();
            assert_eq!(got_status, status);
            assert_eq!(got_code, code);
        }
    }

    #[test]
    fn failed_tool_is_a_store_error() {
        let err = AppError::from(ToolError::Failed {
            tool: "save_lead".to_string(),
            source: LeadStoreError::Io("read-only".to_string()),
        });
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "LEAD_STORE_ERROR");
        assert!(message.contains("read-only"));
    }

    #[test]
    fn unknown_tool_is_not_found() {
        let (status, code, _) = AppError::from(ToolError::UnknownTool("book_demo".to_string())).parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "TOOL_NOT_FOUND");
    }
}
