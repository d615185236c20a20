// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted LLM provider for deterministic testing.
//!
//! `ScriptedProvider` implements `ChatProvider` with a FIFO queue of
//! pre-configured responses (plain text, tool-call turns, or errors) and
//! records every request it receives, so tests can assert on what the
//! conversation loop actually sent -- message ordering, tool definitions,
//! tool-result round-tripping.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use showroom_core::{
    ChatProvider, ProviderRequest, ProviderResponse, ShowroomError, TokenUsage, ToolCallRequest,
};

/// One scripted provider turn.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Plain assistant text.
    Text(String),
    /// Assistant turn requesting tool calls, with optional leading text.
    ToolCalls {
        content: String,
        calls: Vec<ToolCallRequest>,
    },
    /// Simulated provider failure.
    Error(String),
}

/// A mock provider that replays scripted replies in order.
///
/// When the queue is empty, a default "scripted reply" text is returned.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<ProviderRequest>>,
    counter: Mutex<u64>,
}

impl ScriptedProvider {
    /// Creates a provider with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            counter: Mutex::new(0),
        }
    }

    /// Creates a provider pre-loaded with plain text replies.
    pub fn with_replies(texts: Vec<String>) -> Self {
        let provider = Self::new();
        for text in texts {
            provider.push_text(text);
        }
        provider
    }

    /// Queues a plain text reply.
    pub fn push_text(&self, text: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Text(text.into()));
    }

    /// Queues a tool-call turn with a single call.
    pub fn push_tool_call(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) {
        self.push_tool_calls(
            "",
            vec![ToolCallRequest {
                id: id.into(),
                name: name.into(),
                arguments: arguments.into(),
            }],
        );
    }

    /// Queues a tool-call turn with optional leading text.
    pub fn push_tool_calls(&self, content: impl Into<String>, calls: Vec<ToolCallRequest>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::ToolCalls {
                content: content.into(),
                calls,
            });
    }

    /// Queues a provider failure.
    pub fn push_error(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Error(message.into()));
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of completed `complete` calls.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ShowroomError> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ScriptedReply::Text("scripted reply".to_string()));

        let id = {
            let mut counter = self.counter.lock().unwrap();
            *counter += 1;
            format!("scripted-resp-{counter}")
        };

        let (content, tool_calls, stop_reason) = match reply {
            ScriptedReply::Text(text) => (text, Vec::new(), "end_turn"),
            ScriptedReply::ToolCalls { content, calls } => (content, calls, "tool_use"),
            ScriptedReply::Error(message) => return Err(ShowroomError::provider(message)),
        };

        Ok(ProviderResponse {
            id,
            content,
            tool_calls,
            model: request.model,
            stop_reason: Some(stop_reason.to_string()),
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 20,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::ChatMessage;

    fn request() -> ProviderRequest {
        ProviderRequest {
            model: "test-model".into(),
            system_prompt: None,
            messages: vec![ChatMessage::user("hola")],
            max_tokens: 100,
            temperature: 0.0,
            tools: None,
        }
    }

    #[tokio::test]
    async fn default_reply_when_queue_empty() {
        let provider = ScriptedProvider::new();
        let resp = provider.complete(request()).await.unwrap();
        assert_eq!(resp.content, "scripted reply");
        assert!(resp.tool_calls.is_empty());
    }

    #[tokio::test]
    async fn queued_replies_come_back_in_order() {
        let provider =
            ScriptedProvider::with_replies(vec!["first".into(), "second".into()]);
        assert_eq!(provider.complete(request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(request()).await.unwrap().content, "second");
        assert_eq!(
            provider.complete(request()).await.unwrap().content,
            "scripted reply"
        );
    }

    #[tokio::test]
    async fn tool_call_turns_set_stop_reason() {
        let provider = ScriptedProvider::new();
        provider.push_tool_call("call-1", "searchInventory", "{}");
        let resp = provider.complete(request()).await.unwrap();
        assert_eq!(resp.tool_calls.len(), 1);
        assert_eq!(resp.tool_calls[0].id, "call-1");
        assert_eq!(resp.stop_reason.as_deref(), Some("tool_use"));
    }

    #[tokio::test]
    async fn errors_surface_as_provider_errors() {
        let provider = ScriptedProvider::new();
        provider.push_error("api down");
        let err = provider.complete(request()).await.unwrap_err();
        assert!(err.to_string().contains("api down"));
    }

    #[tokio::test]
    async fn requests_are_recorded() {
        let provider = ScriptedProvider::new();
        provider.complete(request()).await.unwrap();
        provider.complete(request()).await.unwrap();
        assert_eq!(provider.request_count(), 2);
        assert_eq!(provider.requests()[0].messages[0].content, "hola");
    }
}
