// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation and provider types shared across the Showroom workspace.
//!
//! [`ChatMessage`] is the session-level message model: role-tagged text,
//! optionally carrying tool-call requests (assistant) or a tool-call-id
//! back-reference (tool results). Provider adapters translate this model
//! to and from their own wire format.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a conversation message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
}

/// A tool invocation requested by the model.
///
/// `arguments` is the raw JSON-encoded payload exactly as the provider
/// emitted it; parsing is deferred to the tool registry so malformed
/// payloads surface as structured failures instead of crashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Provider-assigned call id, echoed back on the matching tool result.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// JSON-encoded argument payload.
    pub arguments: String,
}

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: ChatRole,

    /// Textual content. May be empty when the message carries tool calls.
    pub content: String,

    /// Tool-call requests, in provider emission order. Present only on
    /// assistant messages that request tool execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,

    /// Back-reference to the tool call this message answers. Present only
    /// on tool-role messages, and must match exactly one call id emitted
    /// by the most recent assistant message with tool calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates a plain assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates an assistant message carrying tool-call requests.
    pub fn assistant_tool_calls(
        content: impl Into<String>,
        tool_calls: Vec<ToolCallRequest>,
    ) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            tool_calls,
            tool_call_id: None,
        }
    }

    /// Creates a tool-result message answering the given call id.
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Tool,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.into()),
        }
    }
}

/// A tool definition advertised to the LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (unique identifier).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema describing the tool's input parameters.
    pub input_schema: serde_json::Value,
}

/// A completion request to an LLM provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// Model identifier.
    pub model: String,
    /// System prompt, kept out of the message list for providers that
    /// carry it as a dedicated field.
    pub system_prompt: Option<String>,
    /// Conversation messages in order (system messages excluded).
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Tool definitions the model may invoke. `None` disables tool use
    /// (the second call of a tool turn inlines the results instead).
    pub tools: Option<Vec<ToolDefinition>>,
}

/// A completion response from an LLM provider.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Provider-assigned response id.
    pub id: String,
    /// Text content. Empty when the model only requested tools.
    pub content: String,
    /// Tool-call requests in the order the provider emitted them.
    pub tool_calls: Vec<ToolCallRequest>,
    /// Model that generated the response.
    pub model: String,
    /// Reason the generation stopped.
    pub stop_reason: Option<String>,
    /// Token usage statistics.
    pub usage: TokenUsage,
}

impl ProviderResponse {
    /// Returns true if the model requested at least one tool invocation.
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Token usage statistics for a single provider call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn chat_role_round_trips_through_strings() {
        for role in [
            ChatRole::System,
            ChatRole::User,
            ChatRole::Assistant,
            ChatRole::Tool,
        ] {
            let s = role.to_string();
            assert_eq!(ChatRole::from_str(&s).unwrap(), role);
        }
        assert_eq!(ChatRole::Tool.to_string(), "tool");
    }

    #[test]
    fn chat_message_constructors_set_roles() {
        assert_eq!(ChatMessage::system("s").role, ChatRole::System);
        assert_eq!(ChatMessage::user("u").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("a").role, ChatRole::Assistant);

        let tool = ChatMessage::tool("call-1", "{}");
        assert_eq!(tool.role, ChatRole::Tool);
        assert_eq!(tool.tool_call_id.as_deref(), Some("call-1"));
    }

    #[test]
    fn assistant_tool_calls_preserve_order() {
        let calls = vec![
            ToolCallRequest {
                id: "c1".into(),
                name: "searchInventory".into(),
                arguments: "{}".into(),
            },
            ToolCallRequest {
                id: "c2".into(),
                name: "getBusinessInfo".into(),
                arguments: r#"{"infoType":"hours"}"#.into(),
            },
        ];
        let msg = ChatMessage::assistant_tool_calls("", calls.clone());
        assert_eq!(msg.tool_calls, calls);
        assert!(msg.content.is_empty());
    }

    #[test]
    fn chat_message_serialization_omits_empty_fields() {
        let json = serde_json::to_value(ChatMessage::user("hola")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hola");
        assert!(json.get("tool_calls").is_none());
        assert!(json.get("tool_call_id").is_none());
    }

    #[test]
    fn chat_message_deserializes_with_tool_calls() {
        let json = r#"{
            "role": "assistant",
            "content": "",
            "tool_calls": [
                {"id": "toolu_1", "name": "getCarDetails", "arguments": "{\"carId\":\"x\"}"}
            ]
        }"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.tool_calls.len(), 1);
        assert_eq!(msg.tool_calls[0].name, "getCarDetails");
    }

    #[test]
    fn provider_response_has_tool_calls() {
        let mut resp = ProviderResponse {
            id: "r1".into(),
            content: "hello".into(),
            tool_calls: vec![],
            model: "m".into(),
            stop_reason: Some("end_turn".into()),
            usage: TokenUsage::default(),
        };
        assert!(!resp.has_tool_calls());
        resp.tool_calls.push(ToolCallRequest {
            id: "c".into(),
            name: "searchInventory".into(),
            arguments: "{}".into(),
        });
        assert!(resp.has_tool_calls());
    }
}
