// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The browser widget and
//! any other front-end are external collaborators; CORS stays permissive.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use showroom_agent::SessionDirectory;
use showroom_core::ShowroomError;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The session directory every handler operates on.
    pub directory: Arc<SessionDirectory>,
}

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the gateway router.
///
/// Routes:
/// - POST /v1/messages
/// - DELETE /v1/sessions/{id}
/// - GET /v1/sessions/{id}/history
/// - GET /health
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/messages", post(handlers::post_messages))
        .route("/v1/sessions/{id}", delete(handlers::delete_session))
        .route("/v1/sessions/{id}/history", get(handlers::get_history))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the gateway HTTP server and serves until the process stops.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), ShowroomError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ShowroomError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ShowroomError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use showroom_agent::TurnOptions;
    use showroom_catalog::Catalog;
    use showroom_engine::QueryEngine;
    use showroom_test_utils::ScriptedProvider;
    use showroom_tools::dealership_registry;

    fn state(provider: Arc<ScriptedProvider>) -> GatewayState {
        let registry = Arc::new(dealership_registry(Arc::new(QueryEngine::new(Arc::new(
            Catalog::sample(),
        )))));
        GatewayState {
            directory: Arc::new(SessionDirectory::new(
                provider,
                registry,
                TurnOptions::default(),
                "sistema",
            )),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn post_messages_round_trips() {
        let provider = Arc::new(ScriptedProvider::with_replies(vec!["¡Hola!".into()]));
        let app = build_router(state(provider));

        let response = app
            .oneshot(post(
                "/v1/messages",
                serde_json::json!({"message": "Buenos días", "sessionId": "cust-1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], "¡Hola!");
        assert_eq!(json["sessionId"], "cust-1");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn empty_message_is_a_400() {
        let provider = Arc::new(ScriptedProvider::new());
        let app = build_router(state(provider));

        let response = app
            .oneshot(post("/v1/messages", serde_json::json!({"message": "  "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Message is required");
    }

    #[tokio::test]
    async fn missing_session_id_uses_the_default_session() {
        let provider = Arc::new(ScriptedProvider::with_replies(vec!["ok".into()]));
        let app = build_router(state(provider));

        let response = app
            .oneshot(post("/v1/messages", serde_json::json!({"message": "hola"})))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["sessionId"], "default");
    }

    #[tokio::test]
    async fn history_filters_the_system_message() {
        let provider = Arc::new(ScriptedProvider::with_replies(vec!["respuesta".into()]));
        let gateway_state = state(provider);
        let app = build_router(gateway_state.clone());

        app.clone()
            .oneshot(post(
                "/v1/messages",
                serde_json::json!({"message": "pregunta", "sessionId": "cust-9"}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/sessions/cust-9/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[1]["role"], "assistant");
        assert!(messages.iter().all(|m| m["role"] != "system"));
    }

    #[tokio::test]
    async fn delete_clears_and_then_404s() {
        let provider = Arc::new(ScriptedProvider::with_replies(vec!["ok".into()]));
        let app = build_router(state(provider));

        app.clone()
            .oneshot(post(
                "/v1/messages",
                serde_json::json!({"message": "hola", "sessionId": "cust-2"}),
            ))
            .await
            .unwrap();

        let delete_request = || {
            Request::builder()
                .method("DELETE")
                .uri("/v1/sessions/cust-2")
                .body(Body::empty())
                .unwrap()
        };
        let response = app.clone().oneshot(delete_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(delete_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_history_is_a_404() {
        let provider = Arc::new(ScriptedProvider::new());
        let app = build_router(state(provider));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/sessions/nobody/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let provider = Arc::new(ScriptedProvider::new());
        let app = build_router(state(provider));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }
}
