// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ChatProvider` implementation over the Anthropic Messages API.
//!
//! Maps the role-tagged conversation model to the wire format: assistant
//! tool calls become `tool_use` content blocks, tool messages become
//! `tool_result` blocks inside a user message (consecutive results
//! coalesce into one, as the API requires all results for one assistant
//! turn in the next user turn), and responses flatten back to text plus
//! ordered tool-call requests.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use showroom_config::ShowroomConfig;
use showroom_core::{
    ChatMessage, ChatProvider, ChatRole, ProviderRequest, ProviderResponse, ShowroomError,
    TokenUsage, ToolCallRequest,
};

use crate::client::AnthropicClient;
use crate::types::{
    ApiContent, ApiContentBlock, ApiMessage, MessageRequest, MessageResponse,
    ResponseContentBlock,
};

/// Environment variable consulted when the config carries no API key.
const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Anthropic-backed chat provider.
pub struct AnthropicProvider {
    client: AnthropicClient,
}

impl AnthropicProvider {
    /// Builds a provider from configuration. The API key comes from
    /// `anthropic.api_key` or the `ANTHROPIC_API_KEY` environment variable.
    pub fn new(config: &ShowroomConfig) -> Result<Self, ShowroomError> {
        let api_key = config
            .anthropic
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                ShowroomError::Config(format!(
                    "Anthropic API key required: set anthropic.api_key or {API_KEY_ENV}"
                ))
            })?;

        let client = AnthropicClient::new(
            &api_key,
            &config.anthropic.api_version,
            &config.anthropic.default_model,
            Duration::from_secs(config.anthropic.request_timeout_secs),
        )?;
        Ok(Self { client })
    }

    #[cfg(test)]
    pub(crate) fn from_client(client: AnthropicClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ShowroomError> {
        let api_request = MessageRequest {
            model: request.model.clone(),
            messages: to_api_messages(&request.messages),
            system: request.system_prompt.clone(),
            max_tokens: request.max_tokens,
            temperature: Some(request.temperature),
            tools: request.tools.clone(),
        };

        let response = self.client.complete_message(&api_request).await?;
        Ok(from_api_response(response))
    }
}

/// Converts conversation messages to Anthropic wire messages.
fn to_api_messages(messages: &[ChatMessage]) -> Vec<ApiMessage> {
    let mut api_messages: Vec<ApiMessage> = Vec::with_capacity(messages.len());

    for msg in messages {
        match msg.role {
            ChatRole::System => {
                // The system prompt travels as a dedicated request field.
                warn!("system message in conversation body ignored");
            }
            ChatRole::User => api_messages.push(ApiMessage {
                role: "user".to_string(),
                content: ApiContent::Text(msg.content.clone()),
            }),
            ChatRole::Assistant if msg.tool_calls.is_empty() => api_messages.push(ApiMessage {
                role: "assistant".to_string(),
                content: ApiContent::Text(msg.content.clone()),
            }),
            ChatRole::Assistant => {
                let mut blocks = Vec::with_capacity(msg.tool_calls.len() + 1);
                if !msg.content.is_empty() {
                    blocks.push(ApiContentBlock::Text {
                        text: msg.content.clone(),
                    });
                }
                for call in &msg.tool_calls {
                    blocks.push(ApiContentBlock::ToolUse {
                        id: call.id.clone(),
                        name: call.name.clone(),
                        input: serde_json::from_str(&call.arguments)
                            .unwrap_or(serde_json::Value::Object(Default::default())),
                    });
                }
                api_messages.push(ApiMessage {
                    role: "assistant".to_string(),
                    content: ApiContent::Blocks(blocks),
                });
            }
            ChatRole::Tool => {
                let block = ApiContentBlock::ToolResult {
                    tool_use_id: msg.tool_call_id.clone().unwrap_or_default(),
                    content: msg.content.clone(),
                };
                // All results answering one assistant turn belong in one
                // user message.
                match api_messages.last_mut() {
                    Some(ApiMessage {
                        role,
                        content: ApiContent::Blocks(blocks),
                    }) if role == "user"
                        && blocks
                            .iter()
                            .all(|b| matches!(b, ApiContentBlock::ToolResult { .. })) =>
                    {
                        blocks.push(block);
                    }
                    _ => api_messages.push(ApiMessage {
                        role: "user".to_string(),
                        content: ApiContent::Blocks(vec![block]),
                    }),
                }
            }
        }
    }

    api_messages
}

/// Flattens an API response back to the conversation model.
fn from_api_response(response: MessageResponse) -> ProviderResponse {
    let mut text_parts: Vec<&str> = Vec::new();
    let mut tool_calls: Vec<ToolCallRequest> = Vec::new();

    for block in &response.content {
        match block {
            ResponseContentBlock::Text { text } => text_parts.push(text),
            ResponseContentBlock::ToolUse { id, name, input } => {
                tool_calls.push(ToolCallRequest {
                    id: id.clone(),
                    name: name.clone(),
                    arguments: input.to_string(),
                });
            }
        }
    }

    ProviderResponse {
        id: response.id,
        content: text_parts.join(""),
        tool_calls,
        model: response.model,
        stop_reason: response.stop_reason,
        usage: TokenUsage {
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
        },
    }
}
