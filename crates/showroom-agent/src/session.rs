// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stateful conversation session.
//!
//! A [`ChatSession`] owns one ordered message history (exactly one system
//! message, always first) and runs the two-phase tool turn against it.
//! The turn executes on a scratch copy: a failed turn commits nothing
//! beyond the user-message append, so the session stays usable for the
//! next turn.

use std::sync::Arc;

use showroom_core::{ChatMessage, ChatProvider, ChatRole};
use showroom_tools::ToolRegistry;
use tracing::warn;

use crate::turn::{self, trim_history, SessionState, TurnOptions};

/// One customer's conversation: history, FSM state, and the shared
/// provider/registry handles needed to run turns.
pub struct ChatSession {
    provider: Arc<dyn ChatProvider>,
    registry: Arc<ToolRegistry>,
    opts: TurnOptions,
    state: SessionState,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates a session whose history starts with the given system prompt.
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        registry: Arc<ToolRegistry>,
        opts: TurnOptions,
        system_prompt: &str,
    ) -> Self {
        Self {
            provider,
            registry,
            opts,
            state: SessionState::Idle,
            history: vec![ChatMessage::system(system_prompt)],
        }
    }

    /// Current FSM state. Outside a running turn this is always `Idle`.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The full ordered history, system message included.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Runs one user turn and returns the assistant's reply.
    ///
    /// Any provider or transport failure is caught here: the customer gets
    /// the configured fallback reply, the committed history keeps only the
    /// user-message append, and the session returns to `Idle`.
    pub async fn submit(&mut self, user_text: &str) -> String {
        let mut scratch = self.history.clone();

        match turn::execute(
            self.provider.as_ref(),
            &self.registry,
            &self.opts,
            &mut self.state,
            &mut scratch,
            user_text,
        )
        .await
        {
            Ok(reply) => {
                self.history = scratch;
                reply
            }
            Err(e) => {
                warn!(error = %e, "turn failed, session history rolled back");
                self.state = SessionState::Idle;
                self.history.push(ChatMessage::user(user_text));
                trim_history(&mut self.history, self.opts.max_history_messages);
                self.opts.fallback_reply.clone()
            }
        }
    }

    /// Resets the history to just the system message.
    pub fn clear(&mut self) {
        self.history.truncate(1);
        debug_assert_eq!(self.history[0].role, ChatRole::System);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_catalog::Catalog;
    use showroom_core::ChatRole;
    use showroom_engine::QueryEngine;
    use showroom_test_utils::ScriptedProvider;
    use showroom_tools::dealership_registry;

    fn registry() -> Arc<ToolRegistry> {
        Arc::new(dealership_registry(Arc::new(QueryEngine::new(Arc::new(
            Catalog::sample(),
        )))))
    }

    fn session(provider: Arc<ScriptedProvider>) -> ChatSession {
        ChatSession::new(
            provider,
            registry(),
            TurnOptions::default(),
            "Eres un asistente de ventas.",
        )
    }

    #[tokio::test]
    async fn plain_turn_appends_user_and_assistant() {
        let provider = Arc::new(ScriptedProvider::with_replies(vec!["¡Hola!".into()]));
        let mut session = session(Arc::clone(&provider));

        let reply = session.submit("Buenos días").await;
        assert_eq!(reply, "¡Hola!");

        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].role, ChatRole::System);
        assert_eq!(history[1].content, "Buenos días");
        assert_eq!(history[2].content, "¡Hola!");
        assert_eq!(session.state(), SessionState::Idle);
        // No tool calls, so exactly one provider round-trip.
        assert_eq!(provider.request_count(), 1);
    }

    #[tokio::test]
    async fn tool_turn_round_trips_call_ids_in_order() {
        let provider = Arc::new(ScriptedProvider::new());
        provider.push_tool_calls(
            "",
            vec![
                showroom_core::ToolCallRequest {
                    id: "call-a".into(),
                    name: "getBusinessInfo".into(),
                    arguments: r#"{"infoType":"hours"}"#.into(),
                },
                showroom_core::ToolCallRequest {
                    id: "call-b".into(),
                    name: "searchInventory".into(),
                    arguments: r#"{"budget":"economico"}"#.into(),
                },
            ],
        );
        provider.push_text("Tenemos varias opciones económicas.");

        let mut session = session(Arc::clone(&provider));
        let reply = session.submit("Busco algo barato, ¿a qué hora abren?").await;
        assert_eq!(reply, "Tenemos varias opciones económicas.");

        let history = session.history();
        // system, user, assistant(tool_calls), tool, tool, assistant.
        assert_eq!(history.len(), 6);
        assert_eq!(history[2].tool_calls.len(), 2);
        assert_eq!(history[3].role, ChatRole::Tool);
        assert_eq!(history[3].tool_call_id.as_deref(), Some("call-a"));
        assert_eq!(history[4].tool_call_id.as_deref(), Some("call-b"));

        // One result per request, same order, and the payloads are real
        // engine output.
        let hours: serde_json::Value = serde_json::from_str(&history[3].content).unwrap();
        assert_eq!(hours["success"], true);
        assert!(hours["hours"].is_array());
        let search: serde_json::Value = serde_json::from_str(&history[4].content).unwrap();
        assert_eq!(search["success"], true);

        // Second provider call carries no tool definitions.
        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].tools.is_some());
        assert!(requests[1].tools.is_none());
        // The second request saw the tool results inline.
        assert!(requests[1]
            .messages
            .iter()
            .any(|m| m.role == ChatRole::Tool));
    }

    #[tokio::test]
    async fn unknown_tool_still_reaches_the_final_call() {
        let provider = Arc::new(ScriptedProvider::new());
        provider.push_tool_call("call-x", "createInvoice", "{}");
        provider.push_text("No puedo crear facturas.");

        let mut session = session(Arc::clone(&provider));
        let reply = session.submit("Hazme una factura").await;
        assert_eq!(reply, "No puedo crear facturas.");

        let tool_msg = &session.history()[3];
        let payload: serde_json::Value = serde_json::from_str(&tool_msg.content).unwrap();
        assert_eq!(payload["success"], false);
        assert!(payload["error"].as_str().unwrap().contains("Unknown tool"));
    }

    #[tokio::test]
    async fn provider_failure_yields_fallback_and_rolls_back() {
        let provider = Arc::new(ScriptedProvider::new());
        provider.push_error("api unreachable");
        provider.push_text("ahora sí");

        let mut session = session(Arc::clone(&provider));
        let reply = session.submit("Hola").await;
        assert!(reply.starts_with("Lo siento"));

        // Only the user append committed -- no partial assistant/tool mess.
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, ChatRole::User);
        assert_eq!(session.state(), SessionState::Idle);

        // The session remains usable.
        let reply = session.submit("¿Sigues ahí?").await;
        assert_eq!(reply, "ahora sí");
        assert_eq!(session.history().len(), 4);
    }

    #[tokio::test]
    async fn failure_during_second_call_discards_tool_messages() {
        let provider = Arc::new(ScriptedProvider::new());
        provider.push_tool_call("call-1", "searchInventory", "{}");
        provider.push_error("timeout");

        let mut session = session(Arc::clone(&provider));
        let reply = session.submit("Busco un auto").await;
        assert!(reply.starts_with("Lo siento"));

        // The assistant tool-call message and tool results were not committed.
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|m| m.role != ChatRole::Tool));
    }

    #[tokio::test]
    async fn history_trims_to_system_plus_cap() {
        let provider = Arc::new(ScriptedProvider::new());
        let mut session = session(Arc::clone(&provider));

        // 15 turns append 30 non-system messages; cap is 20.
        for i in 0..15 {
            provider.push_text(format!("r{i}"));
            session.submit(&format!("m{i}")).await;
        }

        let history = session.history();
        assert_eq!(history.len(), 21);
        assert_eq!(history[0].role, ChatRole::System);
        // The most recent messages survive in original order.
        assert_eq!(history[19].content, "m14");
        assert_eq!(history[20].content, "r14");
    }

    #[tokio::test]
    async fn clear_keeps_only_the_system_message() {
        let provider = Arc::new(ScriptedProvider::with_replies(vec!["ok".into()]));
        let mut session = session(provider);
        session.submit("hola").await;
        assert_eq!(session.history().len(), 3);

        session.clear();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, ChatRole::System);
    }
}
