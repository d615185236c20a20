// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two-phase tool-calling turn.
//!
//! One turn: append the user message, call the provider with the full
//! history and every tool definition, execute any requested tool calls in
//! provider order (one tool message per call, tagged with the call id),
//! then call the provider again with the results inlined and tools
//! omitted. The first response's text is the answer when no tools were
//! requested.
//!
//! Trimming happens after the user append and after the final assistant
//! append, never between tool messages mid-turn.

use showroom_config::ShowroomConfig;
use showroom_core::{ChatMessage, ChatProvider, ChatRole, ProviderRequest, ShowroomError};
use showroom_tools::ToolRegistry;
use tracing::{debug, warn};

/// States of the per-turn conversation FSM.
///
/// Idle -> AwaitingModel -> (ExecutingTools -> AwaitingFinalModel)? -> Idle.
/// The tool states are entered only when the first provider response
/// carries tool-call requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for the next user turn.
    Idle,
    /// First provider call in flight.
    AwaitingModel,
    /// Dispatching the requested tool calls.
    ExecutingTools,
    /// Second provider call in flight, tool results inlined.
    AwaitingFinalModel,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AwaitingModel => write!(f, "awaiting_model"),
            SessionState::ExecutingTools => write!(f, "executing_tools"),
            SessionState::AwaitingFinalModel => write!(f, "awaiting_final_model"),
        }
    }
}

/// Per-turn parameters shared by every session of a deployment.
#[derive(Debug, Clone)]
pub struct TurnOptions {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Maximum non-system messages retained after trimming.
    pub max_history_messages: usize,
    /// Customer-facing reply when a turn fails, in the deployment's
    /// working language.
    pub fallback_reply: String,
}

impl TurnOptions {
    /// Builds turn options from the loaded configuration.
    pub fn from_config(config: &ShowroomConfig) -> Self {
        Self {
            model: config.anthropic.default_model.clone(),
            max_tokens: config.anthropic.max_tokens,
            temperature: config.anthropic.temperature,
            max_history_messages: config.agent.max_history_messages,
            fallback_reply: config.agent.fallback_reply.clone(),
        }
    }
}

impl Default for TurnOptions {
    fn default() -> Self {
        Self::from_config(&ShowroomConfig::default())
    }
}

/// Retains the system message plus at most `max_recent` most-recent
/// messages, preserving order. The system message is never evicted.
pub fn trim_history(history: &mut Vec<ChatMessage>, max_recent: usize) {
    let has_system = history
        .first()
        .is_some_and(|m| m.role == ChatRole::System);
    let offset = usize::from(has_system);

    let rest = history.len() - offset;
    if rest > max_recent {
        let drop = rest - max_recent;
        history.drain(offset..offset + drop);
    }
}

/// Splits the leading system message from the rest of the history for the
/// provider request.
fn build_request(
    opts: &TurnOptions,
    history: &[ChatMessage],
    tools: Option<&ToolRegistry>,
) -> ProviderRequest {
    let (system_prompt, messages) = match history.first() {
        Some(first) if first.role == ChatRole::System => {
            (Some(first.content.clone()), history[1..].to_vec())
        }
        _ => (None, history.to_vec()),
    };

    ProviderRequest {
        model: opts.model.clone(),
        system_prompt,
        messages,
        max_tokens: opts.max_tokens,
        temperature: opts.temperature,
        tools: tools.map(|registry| registry.tool_definitions()),
    }
}

/// Runs one turn against `history` in place.
///
/// On error the history is left as the caller's scratch copy; committed
/// state is the caller's responsibility (see `ChatSession::submit` and
/// [`run_detached_turn`]).
pub(crate) async fn execute(
    provider: &dyn ChatProvider,
    registry: &ToolRegistry,
    opts: &TurnOptions,
    state: &mut SessionState,
    history: &mut Vec<ChatMessage>,
    user_text: &str,
) -> Result<String, ShowroomError> {
    history.push(ChatMessage::user(user_text));
    trim_history(history, opts.max_history_messages);

    *state = SessionState::AwaitingModel;
    let first = provider
        .complete(build_request(opts, history, Some(registry)))
        .await?;

    let reply = if first.has_tool_calls() {
        debug!(calls = first.tool_calls.len(), "model requested tool calls");
        history.push(ChatMessage::assistant_tool_calls(
            first.content.clone(),
            first.tool_calls.clone(),
        ));

        *state = SessionState::ExecutingTools;
        for call in &first.tool_calls {
            debug!(tool = %call.name, call_id = %call.id, "dispatching tool call");
            let result = registry.dispatch(&call.name, &call.arguments).await;
            history.push(ChatMessage::tool(call.id.clone(), result.to_string()));
        }

        // Results are inlined in history now; the second call gets no tools.
        *state = SessionState::AwaitingFinalModel;
        let second = provider.complete(build_request(opts, history, None)).await?;
        second.content
    } else {
        first.content
    };

    history.push(ChatMessage::assistant(reply.clone()));
    trim_history(history, opts.max_history_messages);
    *state = SessionState::Idle;
    Ok(reply)
}

/// Stateless turn entry point for callers that own their history.
///
/// Applies the same append/trim/tool-loop logic as the stateful session
/// and returns the reply plus the updated history. On failure the
/// returned history keeps only the user-message append and the reply is
/// the configured fallback.
pub async fn run_detached_turn(
    provider: &dyn ChatProvider,
    registry: &ToolRegistry,
    opts: &TurnOptions,
    history: Vec<ChatMessage>,
    user_text: &str,
) -> (String, Vec<ChatMessage>) {
    let committed = history;
    let mut scratch = committed.clone();
    let mut state = SessionState::Idle;

    match execute(provider, registry, opts, &mut state, &mut scratch, user_text).await {
        Ok(reply) => (reply, scratch),
        Err(e) => {
            warn!(error = %e, "detached turn failed, returning fallback reply");
            let mut history = committed;
            history.push(ChatMessage::user(user_text));
            trim_history(&mut history, opts.max_history_messages);
            (opts.fallback_reply.clone(), history)
        }
    }
}
