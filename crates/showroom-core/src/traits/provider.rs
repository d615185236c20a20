// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for LLM chat-completion back-ends.

use async_trait::async_trait;

use crate::error::ShowroomError;
use crate::types::{ProviderRequest, ProviderResponse};

/// A chat-completion provider configured for tool calling.
///
/// The conversation loop depends on three properties of implementations:
/// role-tagged message round-tripping, stable call ids on tool requests,
/// and deterministic ordering of tool calls within one response. The wire
/// format behind `complete` is an implementation detail.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends a completion request and returns the full response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ShowroomError>;
}
