// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation loop and session management for the Showroom assistant.
//!
//! The turn engine runs the two-phase exchange with the LLM provider
//! (request, optional tool execution, final request). Two ownership modes
//! share it: [`ChatSession`] owns its history across calls, while
//! [`run_detached_turn`] lets the caller supply and receive the history
//! explicitly. [`SessionDirectory`] keys stateful sessions by an opaque
//! identifier and serializes turns per session.

pub mod directory;
pub mod prompt;
pub mod session;
pub mod turn;

pub use directory::SessionDirectory;
pub use prompt::{load_system_prompt, DEFAULT_SYSTEM_PROMPT};
pub use session::ChatSession;
pub use turn::{run_detached_turn, trim_history, SessionState, TurnOptions};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use showroom_catalog::Catalog;
    use showroom_core::{ChatMessage, ChatRole};
    use showroom_engine::QueryEngine;
    use showroom_test_utils::ScriptedProvider;
    use showroom_tools::dealership_registry;

    #[tokio::test]
    async fn detached_turn_matches_stateful_behavior() {
        let registry = dealership_registry(Arc::new(QueryEngine::new(Arc::new(
            Catalog::sample(),
        ))));
        let provider = ScriptedProvider::new();
        provider.push_tool_call("call-1", "getBusinessInfo", r#"{"infoType":"contact"}"#);
        provider.push_text("Nuestro teléfono es (555) 123-4567.");

        let history = vec![ChatMessage::system("sistema")];
        let (reply, updated) = run_detached_turn(
            &provider,
            &registry,
            &TurnOptions::default(),
            history,
            "¿Cuál es su teléfono?",
        )
        .await;

        assert_eq!(reply, "Nuestro teléfono es (555) 123-4567.");
        assert_eq!(updated.len(), 5);
        assert_eq!(updated[3].role, ChatRole::Tool);
        assert_eq!(updated[4].content, reply);
    }

    #[tokio::test]
    async fn detached_turn_failure_returns_fallback_and_user_append() {
        let registry = dealership_registry(Arc::new(QueryEngine::new(Arc::new(
            Catalog::sample(),
        ))));
        let provider = ScriptedProvider::new();
        provider.push_error("down");

        let history = vec![ChatMessage::system("sistema")];
        let (reply, updated) = run_detached_turn(
            &provider,
            &registry,
            &TurnOptions::default(),
            history,
            "hola",
        )
        .await;

        assert!(reply.starts_with("Lo siento"));
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[1].role, ChatRole::User);
    }
}
