// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/messages, DELETE /v1/sessions/{id},
//! GET /v1/sessions/{id}/history, GET /health.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use showroom_core::ChatRole;

use crate::server::GatewayState;

/// Overall turn deadline. A turn that outlives it answers 504; the
/// session's own history stays consistent (at most the user append).
const TURN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

/// Session id used when the caller does not supply one.
const DEFAULT_SESSION_ID: &str = "default";

/// Request body for POST /v1/messages.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    /// Customer message text.
    pub message: String,
    /// Session to continue; a fresh one is created on first use.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for POST /v1/messages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Assistant reply text.
    pub response: String,
    /// Session the reply belongs to.
    pub session_id: String,
    /// ISO 8601 timestamp.
    pub timestamp: String,
}

/// One history entry for GET /v1/sessions/{id}/history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

/// Response body for GET /v1/sessions/{id}/history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub session_id: String,
    pub messages: Vec<HistoryEntry>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// POST /v1/messages
///
/// Runs one conversation turn for the given (or default) session.
pub async fn post_messages(
    State(state): State<GatewayState>,
    Json(body): Json<MessageRequest>,
) -> Response {
    if body.message.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Message is required");
    }

    let session_id = body
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

    let turn = state.directory.submit(&session_id, &body.message);
    match tokio::time::timeout(TURN_TIMEOUT, turn).await {
        Ok(response) => (
            StatusCode::OK,
            Json(MessageResponse {
                response,
                session_id,
                timestamp: chrono::Utc::now().to_rfc3339(),
            }),
        )
            .into_response(),
        Err(_) => {
            tracing::warn!(session_id, "turn exceeded gateway deadline");
            error_response(StatusCode::GATEWAY_TIMEOUT, "response timeout (120s)")
        }
    }
}

/// DELETE /v1/sessions/{id}
///
/// Destroys a session and its history.
pub async fn delete_session(
    State(state): State<GatewayState>,
    Path(session_id): Path<String>,
) -> Response {
    if state.directory.clear(&session_id) {
        (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Session cleared" })),
        )
            .into_response()
    } else {
        error_response(StatusCode::NOT_FOUND, "Session not found")
    }
}

/// GET /v1/sessions/{id}/history
///
/// Returns the session's messages for display, system message filtered
/// out and tool plumbing reduced to role + content.
pub async fn get_history(
    State(state): State<GatewayState>,
    Path(session_id): Path<String>,
) -> Response {
    match state.directory.history(&session_id).await {
        Some(messages) => {
            let messages = messages
                .into_iter()
                .filter(|m| m.role != ChatRole::System)
                .map(|m| HistoryEntry {
                    role: m.role.to_string(),
                    content: m.content,
                })
                .collect();
            (
                StatusCode::OK,
                Json(HistoryResponse {
                    session_id,
                    messages,
                }),
            )
                .into_response()
        }
        None => error_response(StatusCode::NOT_FOUND, "Session not found"),
    }
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
